use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn, Level};

use e6b::{AtmosphereConfig, FlightComputer, FuelBurn, WindCorrection};

#[derive(Parser)]
#[command(name = "e6b")]
#[command(version)]
#[command(
    about = "E6B flight computer for wind, density altitude, fuel and airspeed",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML file overriding the standard atmosphere
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, default_value = "table", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wind correction angle and groundspeed
    Wind {
        /// True course (degrees)
        #[arg(long)]
        course: f64,

        /// True airspeed (knots)
        #[arg(long)]
        tas: f64,

        /// Direction the wind blows from (degrees)
        #[arg(long)]
        wind_dir: f64,

        /// Wind speed (knots)
        #[arg(long)]
        wind_speed: f64,
    },

    /// Density altitude from pressure altitude and temperature
    DensityAltitude {
        /// Pressure altitude (feet)
        #[arg(long, allow_negative_numbers = true)]
        pressure_alt: f64,

        /// Outside air temperature (Celsius)
        #[arg(long, allow_negative_numbers = true)]
        oat: f64,
    },

    /// Time en route and fuel required
    Fuel {
        /// Fuel flow (gallons per hour)
        #[arg(long)]
        gph: f64,

        /// Distance (nautical miles)
        #[arg(long)]
        distance: f64,

        /// Groundspeed (knots)
        #[arg(long)]
        groundspeed: f64,
    },

    /// True airspeed estimate from indicated airspeed
    Tas {
        /// Indicated airspeed (knots)
        #[arg(long)]
        ias: f64,

        /// Altitude (feet)
        #[arg(long)]
        altitude: f64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    // Results go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_computer(config: Option<&PathBuf>) -> Result<FlightComputer, Box<dyn Error>> {
    let atmosphere = match config {
        Some(path) => {
            info!("Loading atmosphere config from {}", path.display());
            AtmosphereConfig::from_yaml_file(path)?
        }
        None => {
            debug!("No config provided, using standard atmosphere");
            AtmosphereConfig::default()
        }
    };
    if atmosphere != AtmosphereConfig::default() {
        warn!(
            "Non-standard atmosphere: ISA {} °C at sea level, lapse {} °C/1000 ft",
            atmosphere.isa_temp_at_sea_level, atmosphere.lapse_rate
        );
    }
    info!(
        "Atmosphere: ISA {} °C at sea level, lapse {} °C/1000 ft",
        atmosphere.isa_temp_at_sea_level, atmosphere.lapse_rate
    );

    Ok(FlightComputer::new(atmosphere)?)
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let computer = load_computer(cli.config.as_ref())?;
    debug!("Running {:?}", cli.command);

    let report = match cli.command {
        Commands::Wind {
            course,
            tas,
            wind_dir,
            wind_speed,
        } => {
            let wc = computer.wind_correction(course, tas, wind_dir, wind_speed)?;
            info!("WCA {} deg, GS {} kt", wc.wca, wc.groundspeed);
            match cli.output {
                OutputFormat::Table => wind_table(&wc),
                OutputFormat::Json => serde_json::to_string_pretty(&wc)?,
            }
        }
        Commands::DensityAltitude { pressure_alt, oat } => {
            let da = computer.density_altitude(pressure_alt, oat)?;
            info!("Density altitude {} ft", da);
            match cli.output {
                OutputFormat::Table => format!("Density Altitude: {} ft", da),
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&serde_json::json!({ "density_altitude": da }))?
                }
            }
        }
        Commands::Fuel {
            gph,
            distance,
            groundspeed,
        } => {
            let burn = computer.fuel_burn(gph, distance, groundspeed)?;
            info!("{} min, {} gal", burn.time_minutes, burn.fuel_gallons);
            match cli.output {
                OutputFormat::Table => fuel_table(&burn),
                OutputFormat::Json => serde_json::to_string_pretty(&burn)?,
            }
        }
        Commands::Tas { ias, altitude } => {
            let tas = computer.true_airspeed_estimate(ias, altitude)?;
            info!("TAS {} kt", tas);
            match cli.output {
                OutputFormat::Table => format!("True Airspeed: {} knots", tas),
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&serde_json::json!({ "true_airspeed": tas }))?
                }
            }
        }
    };

    println!("{}", report);
    Ok(())
}

fn correction_side(wca: f64) -> &'static str {
    if wca > 0.0 {
        " right"
    } else if wca < 0.0 {
        " left"
    } else {
        ""
    }
}

fn wind_table(wc: &WindCorrection) -> String {
    format!(
        "Wind Correction Angle (WCA): {:.1}°{}\nGroundspeed (GS): {:.1} knots",
        wc.wca.abs(),
        correction_side(wc.wca),
        wc.groundspeed
    )
}

fn fuel_table(burn: &FuelBurn) -> String {
    format!(
        "Time En Route: {:.1} minutes ({:.2} hours)\nFuel Required: {:.2} gallons",
        burn.time_minutes,
        burn.time_hours(),
        burn.fuel_gallons
    )
}
