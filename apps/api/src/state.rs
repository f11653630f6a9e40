use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::quiz::matching::ProfileMatcher;
use crate::quiz::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only content tables, loaded once at startup.
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    /// Pluggable profile matcher. Default: OverlapMatcher. Swap via QUIZ_MATCH_STRATEGY.
    pub matcher: Arc<dyn ProfileMatcher>,
}
