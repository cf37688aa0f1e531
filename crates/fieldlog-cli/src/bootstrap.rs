//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: record store (via fieldlog-store), repository,
//! change bus and view model (via fieldlog-core). Command handlers receive
//! the composed `CliContext` and go through the view model, so the CLI
//! follows the same mutate, refresh, publish protocol as any other screen.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use fieldlog_core::events::ChangeBus;
use fieldlog_core::paths::{data_root, store_dir};
use fieldlog_core::repository::ObservationRepository;
use fieldlog_core::viewmodel::ObservationsViewModel;
use fieldlog_store::StoreFactory;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// Directory holding the record store.
    pub store_dir: PathBuf,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            data_root: data_root()?,
            store_dir: store_dir()?,
        })
    }

    /// Create config rooted at an explicit data directory.
    #[must_use]
    pub fn with_data_dir(dir: &str) -> Self {
        let data_root = PathBuf::from(dir);
        Self {
            store_dir: data_root.join("store"),
            data_root,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    view: ObservationsViewModel,
    data_root: PathBuf,
    store_dir: PathBuf,
}

impl CliContext {
    /// Access the observation view model.
    pub fn view(&self) -> &ObservationsViewModel {
        &self.view
    }

    /// Resolved data root directory.
    pub fn data_root(&self) -> &PathBuf {
        &self.data_root
    }

    /// Resolved record store directory.
    pub fn store_dir(&self) -> &PathBuf {
        &self.store_dir
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Opens the file-backed record store
/// 2. Builds the repository over it
/// 3. Creates the change bus and the view model for this session
///
/// # Arguments
///
/// * `config` - CLI configuration options
///
/// # Returns
///
/// A fully composed `CliContext` ready for command dispatch.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. Open the record store
    let store = StoreFactory::open_at(&config.store_dir)?;
    debug!(store_dir = %config.store_dir.display(), "Record store opened");

    // 2. Build the repository
    let repository = Arc::new(ObservationRepository::new(store));

    // 3. Change bus and the session's view model
    // A one-shot CLI session publishes into the bus but never mounts a
    // listener; there is no second screen in this process to converge.
    let bus = ChangeBus::with_defaults();
    let view = ObservationsViewModel::new(repository, bus);

    Ok(CliContext {
        view,
        data_root: config.data_root,
        store_dir: config.store_dir,
    })
}
