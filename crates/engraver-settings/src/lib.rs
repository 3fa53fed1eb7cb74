//! Engraver Settings Crate
//!
//! Cutting parameters ([`CutSettings`]) and the configuration file that
//! persists them.

pub mod config;
pub mod error;

pub use config::{CutSettings, EngraverConfig};
pub use error::{SettingsError, SettingsResult};
