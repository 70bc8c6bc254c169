//! # infra_config
//!
//! Runtime settings for the simulation workspace.
//!
//! This crate loads settings (TOML files and environment variables) and
//! defines the default simulation grid, the default percentile band and the
//! worker pool size.
//!
//! ## Architecture Position
//!
//! Part of the **I**nfra layer. Must not depend on the simulation or
//! service crates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use infra_config::Settings;
//!
//! let settings = Settings::load().expect("settings");
//! println!("Paths per run: {}", settings.simulation.n_paths);
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{EngineConfig, Settings, SimulationConfig, StatisticsConfig, ENV_PREFIX};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConfigError, EngineConfig, Settings, SimulationConfig, StatisticsConfig};
}
