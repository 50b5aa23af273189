//! # Tile Uplift CLI
//!
//! Terminal front end for the rigid roof tile uplift check.
//!
//! Parameters come either from flags (text, validated the same way a form
//! would be) or from a JSON file holding a typed input record.
//!
//! ```bash
//! uplift_cli --wind-speed 175 --mean-height 30 --roof-zone 3
//! uplift_cli --input tile.json --json
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use uplift_core::calculations::{TileUpliftForm, TileUpliftInput, TileUpliftResult};
use uplift_core::equations::tile_uplift_equations;
use uplift_core::{compute_uplift_moment, CalcError};

/// Rigid roof tile wind uplift check
#[derive(Parser, Debug)]
#[command(name = "uplift_cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Checks a rigid roof tile against wind uplift", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Read a typed JSON input record instead of the flags below
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the result (or error) as JSON
    #[arg(long)]
    json: bool,

    /// Ultimate design wind speed Vult (mph)
    #[arg(long, default_value = "175")]
    wind_speed: String,

    /// Mean roof height h (ft)
    #[arg(long, default_value = "30")]
    mean_height: String,

    /// Exposure category (C or D)
    #[arg(long, default_value = "C")]
    exposure: String,

    /// Roof zone (1 interior, 2 edge, 3 corner)
    #[arg(long, default_value = "3")]
    roof_zone: String,

    /// Tile length (in)
    #[arg(long, default_value = "17")]
    tile_length: String,

    /// Exposed tile width (in)
    #[arg(long, default_value = "12")]
    tile_width: String,

    /// Lift coefficient CL
    #[arg(long, default_value = "0.2")]
    lift_coefficient: String,

    /// Provided resistance Mf (ft-lbf); pass an empty string to skip the check
    #[arg(long, default_value = "27.8")]
    resistance: String,

    /// Use the --gcp and --kd overrides
    #[arg(long)]
    advanced: bool,

    /// GCp override (advanced mode only)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    gcp: String,

    /// Kd override (advanced mode only)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    kd: String,
}

impl Cli {
    fn form(&self) -> TileUpliftForm {
        TileUpliftForm {
            wind_speed: self.wind_speed.clone(),
            mean_height: self.mean_height.clone(),
            exposure: self.exposure.clone(),
            roof_zone: self.roof_zone.clone(),
            tile_length: self.tile_length.clone(),
            tile_width: self.tile_width.clone(),
            lift_coefficient: self.lift_coefficient.clone(),
            provided_resistance: self.resistance.clone(),
            gcp: self.gcp.clone(),
            kd: self.kd.clone(),
            advanced: self.advanced,
        }
    }

    /// Build the typed input from the JSON file or the flags
    fn load_input(&self) -> anyhow::Result<Result<TileUpliftInput, CalcError>> {
        match &self.input {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading input file {}", path.display()))?;
                tracing::info!(path = %path.display(), "Loaded input record");
                Ok(TileUpliftInput::from_json(&json))
            }
            None => Ok(self.form().parse().map_err(CalcError::from)),
        }
    }
}

fn init_logging(log_level: &str) -> anyhow::Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let outcome = cli.load_input()?.and_then(|input| compute_uplift_moment(&input));

    match outcome {
        Ok(result) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if cli.json {
                eprintln!("{}", serde_json::to_string_pretty(&e)?);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_report(result: &TileUpliftResult) {
    println!("═══════════════════════════════════════");
    println!("  RIGID TILE UPLIFT RESULTS");
    println!("═══════════════════════════════════════");
    println!();

    if let Some(check) = result.resistance {
        println!("  RESULT: {} (Mf = {:.2} ft-lbf)", status_icon(check.result.is_pass()), check.mf_ftlbf);
        println!();
    }

    println!("Aerodynamic Uplift Moment:");
    println!("  Ma = {:.2} ft-lbf", result.ma_ftlbf);
    println!();

    println!("Calculation Breakdown:");
    for row in result.breakdown() {
        let value = format!("{:.2} {}", row.value, row.unit);
        println!("  {:<24} {:<4} = {:<12} ({})", row.label, row.symbol, value.trim_end(), row.note);
    }

    if !result.applicability.is_empty() {
        println!();
        println!("Applicability:");
        for note in &result.applicability {
            println!("  [WARN] {}", note.message);
        }
    }

    println!();
    println!("References:");
    for equation in tile_uplift_equations(result.resistance.is_some()) {
        let meta = equation.metadata();
        println!("  {:<40} {}", meta.name, meta.reference.citation());
    }

    println!();
    println!("Estimate only. Verify designs with a licensed engineer.");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[PASS]" } else { "[FAIL]" }
}
