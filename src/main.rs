use anyhow::Result;
use clap::{Parser, Subcommand};
use engraver::{commands, init_logging, EngraverConfig, LogFormat, ShapeSpec};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "engraver")]
#[command(about = "Lay out shapes on a workpiece and export G-code", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty design file
    New {
        /// Output design file
        output: PathBuf,
        /// Workpiece width in mm
        #[arg(long)]
        width: f64,
        /// Workpiece height in mm
        #[arg(long)]
        height: f64,
        /// Workpiece thickness in mm
        #[arg(long)]
        thickness: f64,
    },
    /// Append an axis-aligned rectangle to a design file
    AddRect {
        /// Design file
        file: PathBuf,
        /// Left edge in mm
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        /// Bottom edge in mm
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        /// Width in mm
        #[arg(long)]
        w: f64,
        /// Height in mm
        #[arg(long)]
        h: f64,
    },
    /// Append a circle to a design file
    AddCircle {
        /// Design file
        file: PathBuf,
        /// Center X in mm
        #[arg(long, allow_hyphen_values = true)]
        cx: f64,
        /// Center Y in mm
        #[arg(long, allow_hyphen_values = true)]
        cy: f64,
        /// Radius in mm
        #[arg(long)]
        r: f64,
    },
    /// Replace the workpiece of a design file
    Material {
        /// Design file
        file: PathBuf,
        /// Workpiece width in mm
        #[arg(long)]
        width: f64,
        /// Workpiece height in mm
        #[arg(long)]
        height: f64,
        /// Workpiece thickness in mm
        #[arg(long)]
        thickness: f64,
    },
    /// Display information about a design file
    Info {
        /// Design file
        file: PathBuf,
        /// Configuration file (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Export a design file as G-code
    Export {
        /// Input design file
        input: PathBuf,
        /// Output G-code file (default: input with .gcode extension)
        output: Option<PathBuf>,
        /// Write the program to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
        /// Configuration file (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show the cutting parameters in effect
    Config {
        /// Configuration file (default: platform config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Write the default configuration to the config file
        #[arg(long)]
        write_defaults: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_logging(cli.verbose, format)?;

    match cli.command {
        Commands::New {
            output,
            width,
            height,
            thickness,
        } => {
            commands::new_document(&output, width, height, thickness)?;
            println!("Created {}", output.display());
        }
        Commands::AddRect { file, x, y, w, h } => {
            let document = commands::add_shape(&file, ShapeSpec::rect(x, y, w, h))?;
            println!("{} now has {} shapes", file.display(), document.shapes().len());
        }
        Commands::AddCircle { file, cx, cy, r } => {
            let document = commands::add_shape(&file, ShapeSpec::circle(cx, cy, r))?;
            println!("{} now has {} shapes", file.display(), document.shapes().len());
        }
        Commands::Material {
            file,
            width,
            height,
            thickness,
        } => {
            commands::set_material(&file, width, height, thickness)?;
            println!("Updated material of {}", file.display());
        }
        Commands::Info { file, config } => {
            let config = commands::load_config(config.as_deref())?;
            println!("{}", commands::info(&file, config.cut)?);
        }
        Commands::Export {
            input,
            output,
            stdout,
            config,
        } => {
            let config = commands::load_config(config.as_deref())?;
            if stdout {
                if let Some(program) = commands::export(&input, None, config.cut)? {
                    print!("{}", program);
                }
            } else {
                let output = output.unwrap_or_else(|| commands::default_output_path(&input));
                commands::export(&input, Some(&output), config.cut)?;
                println!("Exported {}", output.display());
            }
        }
        Commands::Config {
            path,
            write_defaults,
        } => {
            if write_defaults {
                let path = match path {
                    Some(path) => path,
                    None => EngraverConfig::default_path()?,
                };
                EngraverConfig::default().save_to_file(&path)?;
                println!("Wrote {}", path.display());
            } else {
                let config = commands::load_config(path.as_deref())?;
                let cut = config.cut;
                println!("cut_depth   = {:.3}", cut.cut_depth);
                println!("safe_height = {:.3}", cut.safe_height);
                println!("plunge_feed = {:.3}", cut.plunge_feed);
                println!("cut_feed    = {:.3}", cut.cut_feed);
            }
        }
    }

    Ok(())
}
