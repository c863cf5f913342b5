use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::state::AppState;
use crate::storage::list_drawings;

pub async fn drawings_handler(State(state): State<AppState>) -> impl IntoResponse {
    match list_drawings(&state.drawings_dir).await {
        Ok(manifest) => {
            log::debug!("Listing {} drawings", manifest.drawings.len());
            Json(manifest).into_response()
        }
        Err(error) => {
            log::error!("{error}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
