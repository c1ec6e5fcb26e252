use std::sync::Arc;

use weather_core::RequestProxy;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<RequestProxy>,
}

impl AppState {
    pub fn new(proxy: RequestProxy) -> Self {
        Self {
            proxy: Arc::new(proxy),
        }
    }
}
