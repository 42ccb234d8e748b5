//! Shared application context handed to every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::dashboard::{self, Series};
use crate::error::InitError;
use crate::store::Store;
use crate::templates::Templates;

/// Everything a request needs, built once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub templates: Arc<Templates>,
    /// Chart series the dashboard renders.
    pub chart: Arc<[Series]>,
}

impl AppState {
    pub fn new(store: Store, templates: Templates) -> Self {
        Self {
            store,
            templates: Arc::new(templates),
            chart: dashboard::sample_data().into(),
        }
    }

    /// Replaces the dashboard's chart series.
    pub fn with_chart(mut self, chart: Vec<Series>) -> Self {
        self.chart = chart.into();
        self
    }

    /// Loads the page templates, connects to the configured store, creates
    /// the schema and seeds it.
    pub async fn from_config(config: &Config) -> Result<Self, InitError> {
        let templates = Templates::new()?;
        let store = Store::connect(config).await?;
        store.seed_if_empty().await?;
        Ok(Self::new(store, templates))
    }
}
