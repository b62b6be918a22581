use serde::Deserialize;

pub mod roster;
pub mod settings;
pub mod student;

#[derive(Deserialize)]
pub struct IdForm {
    pub id: String,
}
