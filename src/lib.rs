//! # Engraver
//!
//! Lays out simple 2D shapes on a rectangular workpiece and exports them as a
//! G-code program.
//!
//! ## Architecture
//!
//! Engraver is organized as a workspace with multiple crates:
//!
//! 1. **engraver-core** - Material, shapes, the design document and its file format
//! 2. **engraver-settings** - Cutting parameters and the configuration file
//! 3. **engraver-designer** - Toolpath generation and G-code emission
//! 4. **engraver** - Command line front end that ties the crates together

pub mod commands;

pub use engraver_core::{Document, DocumentError, DocumentResult, Material, ShapeSpec};
pub use engraver_designer::{Move, ProgramEmitter, Toolpath, ToolpathGenerator};
pub use engraver_settings::{CutSettings, EngraverConfig, SettingsError};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `warn` is used, or `debug` when
/// `verbose` is set. Program text goes to stdout, so logs never mix with it.
pub fn init_logging(verbose: bool, format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env()?;

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
