//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias (either form) to its original URL.
///
/// # Endpoint
///
/// `GET /{short}`
///
/// Each hit restarts the expiration window of the link.
///
/// # Errors
///
/// Returns 404 Not Found (oops page) if the alias is unknown or expired.
pub async fn redirect_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.redirect_service.resolve(&short).await?;
    debug!("Redirecting {} -> {}", short, long_url);

    Ok(Redirect::temporary(&long_url))
}
