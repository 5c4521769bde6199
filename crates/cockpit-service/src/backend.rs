//! Backing-mode selection.

use std::sync::Arc;

use cockpit_persistence::ProjectStore;
use cockpit_upstream::UpstreamClient;

/// The backing source for project data, chosen once at startup.
///
/// Passed explicitly into the repository and mutation service so both stay
/// independently testable; there is no ambient mode flag.
#[derive(Clone)]
pub enum Backend {
    /// Local JSON document store (mock mode).
    Local(Arc<dyn ProjectStore>),
    /// Remote tracking-service API.
    Upstream(UpstreamClient),
}

impl Backend {
    /// Short label for startup logging.
    pub fn label(&self) -> &'static str {
        match self {
            Backend::Local(_) => "local",
            Backend::Upstream(_) => "upstream",
        }
    }
}
