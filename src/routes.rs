pub mod dashboard;
pub mod export;
pub mod index;
pub mod profile;
pub mod settings;
pub mod sse;
pub mod students;
