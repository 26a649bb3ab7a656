//! DTOs for the shortening form.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::url_check::check_long_url;

/// Longest input accepted by the form.
pub const MAX_INPUT_URL_LENGTH: u64 = 4096;

/// Body of `POST /`, submitted as `application/x-www-form-urlencoded`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    /// The URL to shorten, or one of our own short links to re-shorten.
    #[validate(
        length(min = 1, max = 4096, message = "input_url must be 1-4096 characters"),
        url(message = "Invalid URL format"),
        custom(function = "validate_long_url")
    )]
    pub input_url: String,
}

fn validate_long_url(input_url: &str) -> Result<(), ValidationError> {
    check_long_url(input_url)
        .map_err(|e| ValidationError::new("long_url").with_message(e.to_string().into()))
}

impl ShortenForm {
    /// Returns the form with surrounding whitespace removed from the input.
    pub fn trimmed(self) -> Self {
        Self {
            input_url: self.input_url.trim().to_string(),
        }
    }
}
