use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/day", get(handlers::day_page))
        .route("/entry", get(handlers::entry_form).post(handlers::save_entry))
        .route("/api/averages", get(handlers::get_averages))
        .route("/api/day", get(handlers::get_day))
        .route("/api/entries", post(handlers::post_entry))
        .with_state(state)
}
