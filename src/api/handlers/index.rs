//! Submission form page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::state::AppState;

/// Aliases shown after a successful submission.
pub struct ShortenedLinks {
    pub human: String,
    pub bot: String,
    pub human_url: String,
    pub bot_url: String,
    /// Base64 PNG of a QR code encoding `bot_url`.
    pub qr: String,
}

/// Template for the main page.
///
/// Renders `templates/index.html`: the submission form, plus the aliases
/// and QR code when `links` is set.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub domain: String,
    pub links: Option<ShortenedLinks>,
}

/// Renders the empty submission form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate {
        domain: state.link_service.domain().to_string(),
        links: None,
    }
}
