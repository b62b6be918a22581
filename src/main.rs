#![warn(clippy::pedantic, clippy::all, clippy::nursery)]

use crate::{
    config::RuntimeConfiguration,
    routes::{
        export::get_students_csv,
        index::{get_index, post_set_tab, post_toggle_theme},
        profile::{internal_get_profile, post_deselect_student, post_select_student},
        settings::{internal_get_data_status, post_save_preferences, post_save_schedule},
        sse::sse_feed,
        students::{
            delete_student, internal_get_add_form, internal_get_edit_form,
            internal_get_students_table, post_new_student, put_update_student,
        },
    },
    state::LadderState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod charts;
mod config;
mod data;
mod error;
mod maud_conveniences;
mod routes;
mod state;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() {
    //every env var has a default, so a missing .env is fine
    let _ = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let state = LadderState::new(&config);

    let trace_layer = TraceLayer::new_for_http();

    let app = Router::new()
        .route("/", get(get_index))
        .route("/tab", post(post_set_tab))
        .route("/theme", post(post_toggle_theme))
        .route(
            "/students",
            post(post_new_student)
                .put(put_update_student)
                .delete(delete_student),
        )
        .route("/students.csv", get(get_students_csv))
        .route("/select_student", post(post_select_student))
        .route("/deselect_student", post(post_deselect_student))
        .route("/settings/schedule", post(post_save_schedule))
        .route("/settings/preferences", post(post_save_preferences))
        .route(
            "/internal/students/get_table",
            get(internal_get_students_table),
        )
        .route("/internal/students/add_form", get(internal_get_add_form))
        .route("/internal/students/edit_form", get(internal_get_edit_form))
        .route("/internal/profile", get(internal_get_profile))
        .route(
            "/internal/settings/data_status",
            get(internal_get_data_status),
        )
        .route("/sse_feed", get(sse_feed))
        .layer(trace_layer)
        .with_state(state);

    let server_ip = config.server_ip();
    let listener = TcpListener::bind(server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("unable to serve app");
}
