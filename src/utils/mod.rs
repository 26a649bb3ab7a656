//! Utility functions for alias generation, link detection, and QR rendering.
//!
//! - [`alias_generator`] - Human/bot alias generation and collision retries
//! - [`wordlist`] - Dictionary for human slugs
//! - [`self_link`] - Detection of inputs that are already our short links
//! - [`qr`] - QR code PNG rendering
//! - [`url_check`] - Acceptance rules for long URLs

pub mod alias_generator;
pub mod qr;
pub mod self_link;
pub mod url_check;
pub mod wordlist;
