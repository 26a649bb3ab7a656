//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, LinkSettings, RedirectService};
use crate::domain::repositories::{CanonicalRepository, RedirectionRepository};

/// Link service over whichever store backend was configured at startup.
pub type DynLinkService = LinkService<dyn CanonicalRepository, dyn RedirectionRepository>;

/// Redirect service over whichever store backend was configured at startup.
pub type DynRedirectService = RedirectService<dyn CanonicalRepository, dyn RedirectionRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    pub redirect_service: Arc<DynRedirectService>,
    pub canonical: Arc<dyn CanonicalRepository>,
    pub redirection: Arc<dyn RedirectionRepository>,
}

impl AppState {
    /// Wires both services to the given namespaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the self-link pattern for the configured domain
    /// cannot be compiled.
    pub fn new(
        canonical: Arc<dyn CanonicalRepository>,
        redirection: Arc<dyn RedirectionRepository>,
        settings: LinkSettings,
    ) -> Result<Self, regex::Error> {
        let redirect_service = Arc::new(RedirectService::new(
            canonical.clone(),
            redirection.clone(),
            settings.expiration_time,
        ));
        let link_service = Arc::new(LinkService::new(
            canonical.clone(),
            redirection.clone(),
            settings,
        )?);

        Ok(Self {
            link_service,
            redirect_service,
            canonical,
            redirection,
        })
    }
}
