// SPDX-License-Identifier: GPL-3.0-or-later
use std::sync::Arc;

use tunebridge_config::AppConfig;

pub mod catalog;
pub mod conversion;

pub use catalog::{CatalogError, MusicCatalog};
pub use conversion::{Conversion, ConversionError, ConversionService};

use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub conversion: Arc<ConversionService>,
}

impl AppState {
    pub fn new(config: AppConfig, conversion: Arc<ConversionService>) -> Self {
        Self { config, conversion }
    }

    pub fn on_start(&self) {
        info!(target: "application", "application state initialized");
    }
}
