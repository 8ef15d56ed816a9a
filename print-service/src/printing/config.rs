//! Process-wide print configuration

use parking_lot::RwLock;
use shared::models::{PrintConfig, PrintConfigPatch};

/// Holder for the live [`PrintConfig`]
///
/// Readers get a snapshot, so a job rendered while the config changes sees
/// one consistent configuration.
#[derive(Debug, Default)]
pub struct PrintConfigStore {
    config: RwLock<PrintConfig>,
}

impl PrintConfigStore {
    pub fn new(config: PrintConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Snapshot of the current configuration
    pub fn get(&self) -> PrintConfig {
        self.config.read().clone()
    }

    /// Shallow-merge `patch` and return the result
    pub fn update(&self, patch: PrintConfigPatch) -> PrintConfig {
        let mut config = self.config.write();
        config.apply(patch);
        config.clone()
    }
}
