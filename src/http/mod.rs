use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing, Router, Server};
use hyper::Result;
use log::info;

use crate::config::ServeConfig;
use crate::repository::schedule::Repository;

mod core;
mod schedules;

pub struct AppState {
    pub repo: Arc<dyn Repository>,
}

pub fn router(repo: Arc<dyn Repository>) -> Router {
    Router::new()
        .route("/api/candidate-schedules", routing::get(schedules::find))
        .route("/api/:lang/candidate-schedules", routing::post(schedules::add))
        .route("/api/timezones", routing::get(schedules::timezones))
        .with_state(Arc::new(AppState { repo }))
}

pub async fn serve(config: ServeConfig, repo: Arc<dyn Repository>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("Listening on port {}", config.port);

    Server::bind(&addr)
        .serve(router(repo).into_make_service())
        .await
}
