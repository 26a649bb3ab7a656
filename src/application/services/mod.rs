//! Business logic services for the application layer.

mod expiration;
pub mod link_service;
pub mod redirect_service;

pub use link_service::{LinkService, LinkSettings};
pub use redirect_service::RedirectService;
