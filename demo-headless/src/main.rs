use clap::{Parser, ValueEnum};
use std::collections::BTreeMap;
use std::error::Error;
use std::process::ExitCode;
use tempconv_core::{AnyTemperature, Scale};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Source or target scale on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScaleArg {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Reaumur,
    Delisle,
}

impl From<ScaleArg> for Scale {
    fn from(arg: ScaleArg) -> Scale {
        match arg {
            ScaleArg::Celsius => Scale::Celsius,
            ScaleArg::Fahrenheit => Scale::Fahrenheit,
            ScaleArg::Kelvin => Scale::Kelvin,
            ScaleArg::Rankine => Scale::Rankine,
            ScaleArg::Reaumur => Scale::Reaumur,
            ScaleArg::Delisle => Scale::Delisle,
        }
    }
}

/// Temperature conversion demo
#[derive(Parser, Debug)]
#[command(name = "tempconv-demo")]
#[command(about = "Convert a temperature between Celsius, Fahrenheit, Kelvin, Rankine, Réaumur and Delisle", long_about = None)]
struct Args {
    /// Magnitude to convert, in units of --scale
    #[arg(default_value_t = 100.0, allow_negative_numbers = true)]
    value: f64,

    /// Scale the value is given in
    #[arg(short, long, value_enum, default_value_t = ScaleArg::Celsius)]
    scale: ScaleArg,

    /// Only print this target scale (all scales when omitted)
    #[arg(short, long, value_enum)]
    to: Option<ScaleArg>,

    /// Print a JSON object of scale name -> magnitude
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. "debug" (overrides `RUST_LOG`)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Pretty JSON object of scale name -> converted magnitude
fn conversions_json(source: AnyTemperature, targets: &[Scale]) -> serde_json::Result<String> {
    let converted: BTreeMap<&'static str, f64> = targets
        .iter()
        .map(|&scale| (scale.name(), source.convert_to(scale).magnitude()))
        .collect();
    serde_json::to_string_pretty(&converted)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let source = AnyTemperature::new(args.scale.into(), args.value)?;
    debug!(scale = %source.scale(), value = source.magnitude(), "parsed source temperature");

    let targets: Vec<Scale> = match args.to {
        Some(target) => vec![target.into()],
        None => Scale::ALL.to_vec(),
    };

    if args.json {
        println!("{}", conversions_json(source, &targets)?);
        return Ok(());
    }

    println!("=== Temperature Conversion Demo ===\n");
    println!("Source: {} ({})", source, source.scale());
    for scale in targets {
        let converted = source.convert_to(scale);
        println!("  {:<11} {}", scale.name(), converted);
    }

    // Same conversions through the capability trait, scale unknown to the caller
    let any = source.as_dyn();
    println!(
        "\nVia Temperature trait: {} is {} / {}",
        any.format(),
        any.to_kelvin(),
        any.to_rankine()
    );

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("demo failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempconv_core::TemperatureError;

    #[test]
    fn test_run_fails_on_value_beyond_absolute_zero() {
        let args = Args::try_parse_from(["tempconv-demo", "-5", "--scale", "kelvin"]).unwrap();
        let err = run(&args).unwrap_err();
        let typed = err.downcast_ref::<TemperatureError>().unwrap();
        assert!(typed.is_below_absolute_zero());
    }

    #[test]
    fn test_run_succeeds_with_json_output() {
        let args = Args::try_parse_from(["tempconv-demo", "0", "--json"]).unwrap();
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_conversions_json_lists_requested_scales() {
        let source = AnyTemperature::new(Scale::Celsius, 100.0).unwrap();
        let json = conversions_json(source, &[Scale::Fahrenheit, Scale::Delisle]).unwrap();
        let parsed: BTreeMap<String, f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!((parsed["Fahrenheit"] - 212.0).abs() < 1e-9);
        assert!((parsed["Delisle"] - 0.0).abs() < 1e-9);
    }
}
