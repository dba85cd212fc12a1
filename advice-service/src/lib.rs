pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::AdviceClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub advice_client: AdviceClient,
}

impl AppState {
    pub fn new(advice_client: AdviceClient) -> Self {
        Self { advice_client }
    }
}
