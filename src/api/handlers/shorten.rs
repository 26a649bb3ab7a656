//! Handler for the shortening form submission.

use axum::{Form, extract::State};
use validator::Validate;

use crate::api::dto::shorten::ShortenForm;
use crate::api::handlers::index::{IndexTemplate, ShortenedLinks};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::qr::render_png_base64;

/// Shortens the submitted URL and renders both aliases with a QR code.
///
/// # Endpoint
///
/// `POST /` with form field `input_url`
///
/// Submitting one of our own short links (`https://{domain}/{alias}`)
/// returns the aliases of the URL behind it.
///
/// # Errors
///
/// Returns 400 Bad Request if `input_url` is blank or too long.
/// Returns 404 Not Found (oops page) if a self-referential alias is unknown.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<IndexTemplate, AppError> {
    let form = form.trimmed();
    form.validate()?;

    let service = &state.link_service;
    let record = service.shorten_or_fetch(&form.input_url).await?;

    let bot_url = service.short_url(&record.bot);
    let qr = render_png_base64(&bot_url)?;

    Ok(IndexTemplate {
        domain: service.domain().to_string(),
        links: Some(ShortenedLinks {
            human_url: service.short_url(&record.human),
            bot_url,
            human: record.human,
            bot: record.bot,
            qr,
        }),
    })
}
