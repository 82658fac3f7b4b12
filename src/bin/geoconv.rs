//! geoconv: Convert coordinates between geodetic, geocentric cartesian and
//! projected (UTM, Lambert) form.
//!
//! ```sh
//! echo 40 -3 0 | geoconv convert --system UTM30 geo-proj
//! geoconv convert --system LambertI --record fwd 38,-6,0
//! geoconv list --parameters
//! ```
use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use geoconv::prelude::*;
use log::{debug, trace};
use std::io::BufRead;

#[derive(Parser, Debug)]
#[command(name = "geoconv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available ellipsoids and projection zones
    List {
        /// Also show descriptions and defining parameters
        #[arg(short, long)]
        parameters: bool,
    },

    /// Convert coordinate tuples
    Convert {
        /// The ellipsoid or projection zone to use
        #[arg(short, long, default_value = "WGS84")]
        system: String,

        /// Print a transformation record for each conversion
        #[arg(short, long)]
        record: bool,

        /// Convergence tolerance for cartesian to geodetic (radians)
        #[arg(long)]
        tolerance: Option<f64>,

        /// Iteration cap for cartesian to geodetic
        #[arg(long)]
        max_iterations: Option<usize>,

        /// The conversion to perform
        #[arg(value_enum)]
        direction: DirectionArg,

        /// A single tuple to convert. If absent, tuples are read from stdin,
        /// one per line
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirectionArg {
    /// Geodetic (lat, lon, h) to cartesian (X, Y, Z)
    GeoCart,
    /// Cartesian (X, Y, Z) to geodetic (lat, lon, h)
    CartGeo,
    /// Geodetic (lat, lon, h) to projected (E, N)
    GeoProj,
    /// Projected (E, N[, h]) to geodetic (lat, lon, h)
    ProjGeo,
    /// From geodetic: to projected for UTM/Lambert, to cartesian otherwise
    Fwd,
    /// To geodetic: from projected for UTM/Lambert, from cartesian otherwise
    Inv,
}

impl DirectionArg {
    fn resolve(self, model: &EllipsoidModel) -> ConversionDirection {
        match self {
            DirectionArg::GeoCart => ConversionDirection::GeoToCart,
            DirectionArg::CartGeo => ConversionDirection::CartToGeo,
            DirectionArg::GeoProj => ConversionDirection::GeoToProj,
            DirectionArg::ProjGeo => ConversionDirection::ProjToGeo,
            DirectionArg::Fwd => ConversionDirection::default_for(model, true),
            DirectionArg::Inv => ConversionDirection::default_for(model, false),
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .parse_default_env()
        .init();
    trace!("{options:#?}");

    match options.command {
        Command::List { parameters } => list(parameters),
        Command::Convert {
            system,
            record,
            tolerance,
            max_iterations,
            direction,
            values,
        } => {
            let model = geoconv::catalog::lookup(&system)?.model()?;
            let mut settings = Settings::default();
            if let Some(tolerance) = tolerance {
                settings = settings.with_tolerance(tolerance);
            }
            if let Some(max_iterations) = max_iterations {
                settings = settings.with_max_iterations(max_iterations);
            }
            let direction = direction.resolve(&model);
            let transformer = CoordinateTransformer::with_settings(model, settings)?;
            debug!("{system}: {direction}");

            let failures = if values.is_empty() {
                let mut failures = 0;
                for (n, line) in std::io::stdin().lock().lines().enumerate() {
                    let line = line.context("reading stdin")?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Err(err) = process(&transformer, direction, &line, record) {
                        eprintln!("line {}: {err:#}", n + 1);
                        failures += 1;
                    }
                }
                failures
            } else {
                let line = values.join(" ");
                match process(&transformer, direction, &line, record) {
                    Ok(()) => 0,
                    Err(err) => {
                        eprintln!("{err:#}");
                        1
                    }
                }
            };

            if failures > 0 {
                bail!("{failures} conversion(s) failed");
            }
            Ok(())
        }
    }
}

fn list(parameters: bool) -> Result<(), anyhow::Error> {
    for name in geoconv::list_ellipsoids() {
        if !parameters {
            println!("{name}");
            continue;
        }
        let model = geoconv::catalog::lookup(name)?.model()?;
        println!("{name}: {}", model.description());
        for (label, value) in model.parameters() {
            match value {
                Some(value) => println!("    {label:<28} {value}"),
                None => println!("    {label:<28} -"),
            }
        }
    }
    Ok(())
}

fn process(
    transformer: &CoordinateTransformer,
    direction: ConversionDirection,
    line: &str,
    record: bool,
) -> Result<(), anyhow::Error> {
    let values = parse_tuple(line)?;
    if !record {
        let output = transformer.convert(direction, &values)?;
        println!("{}", direction.format_output(&output));
        return Ok(());
    }
    let (output, record) = transformer.convert_with_record(direction, &values)?;
    println!("{}", direction.format_output(&output));
    println!("{record}");
    Ok(())
}

/// Split a line on commas and whitespace, accepting the Unicode minus sign
fn parse_tuple(line: &str) -> Result<Vec<f64>, anyhow::Error> {
    let line = line.replace('\u{2212}', "-");
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>()
                .with_context(|| format!("not a number: {item:?}"))
        })
        .collect()
}
