mod input;
mod render;
mod settings;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;
use sr_core::chart::chart_data::ChartData;
use sr_core::{Analyzer, SrConfig, SrException};

#[derive(Parser, Debug)]
#[command(name = "sr_cli", version, about = "Support/resistance prediction over a price series")]
struct Cli {
    /// Comma separated prices, e.g. "1.45, 1.48, 1.52"
    #[arg(short, long, conflicts_with = "file")]
    data: Option<String>,

    /// CSV file holding the prices
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// CSV column to read (defaults to the first column)
    #[arg(long, requires = "file")]
    column: Option<String>,

    /// Value the prediction is stated against
    #[arg(long, value_parser = input::parse_target)]
    target: Option<f64>,

    /// Support/resistance window
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u16)
            .range(input::WINDOW_RANGE.0 as i64..=input::WINDOW_RANGE.1 as i64)
    )]
    window: Option<u16>,

    /// Margin around support/resistance
    #[arg(long, value_parser = input::parse_threshold)]
    threshold: Option<f64>,

    /// Short SMA window
    #[arg(long = "short", value_parser = clap::value_parser!(u16).range(1..=200))]
    short_sma: Option<u16>,

    /// Long SMA window
    #[arg(long = "long", value_parser = clap::value_parser!(u16).range(1..=200))]
    long_sma: Option<u16>,

    /// Print the result as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Write chart series (prices, levels, averages) to this CSV file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Remember parameters between runs in this JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("sr_core"), my_code_level)
        .filter(Some("sr_cli"), my_code_level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    init_log();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            let status = exit_status(e.as_ref());
            if status == EXIT_INPUT {
                eprintln!("Input rejected, nothing was analyzed: {}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(status)
        }
    }
}

const EXIT_FAILURE: u8 = 1;
const EXIT_INPUT: u8 = 2;
const EXIT_CONFIG: u8 = 3;

/// Unparsable or empty input and bad parameters get their own exit codes
fn exit_status(err: &(dyn Error + 'static)) -> u8 {
    match err.downcast_ref::<SrException>() {
        Some(e) if e.is_input_err() => EXIT_INPUT,
        Some(e) if e.is_config_err() => EXIT_CONFIG,
        _ => EXIT_FAILURE,
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(cli)?;

    let series = match (&cli.data, &cli.file) {
        (Some(text), _) => input::prices_from_text(text)?,
        (None, Some(path)) => input::prices_from_csv(path, cli.column.as_deref())?,
        (None, None) => input::prices_from_text(input::DEFAULT_DATA)?,
    };

    let result = Analyzer::new(config.clone()).predict(&series);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::Report(&result));
    }

    if let Some(path) = &cli.export {
        let chart = ChartData::build(&series, &config);
        let mut wtr = csv::Writer::from_path(path)?;
        for row in chart.rows() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        println!("Saved chart data to {}", path.display());
        println!("{}", render::render_chart_summary(&chart));
    }

    if let Some(path) = &cli.settings {
        settings::save(path, config.to_map())?;
    }

    Ok(())
}

/// Saved settings first, explicit flags on top
fn resolve_config(cli: &Cli) -> Result<SrConfig, Box<dyn Error>> {
    let mut values = match &cli.settings {
        Some(path) => settings::load(path)?.map(|s| s.values).unwrap_or_default(),
        None => Default::default(),
    };

    let overrides = [
        ("target", cli.target.map(Value::from)),
        ("window", cli.window.map(Value::from)),
        ("threshold", cli.threshold.map(Value::from)),
        ("short_sma_window", cli.short_sma.map(Value::from)),
        ("long_sma_window", cli.long_sma.map(Value::from)),
    ];
    for (key, value) in overrides {
        if let Some(v) = value {
            values.insert(key.to_string(), v);
        }
    }

    let config = SrConfig::new(Some(values))?;
    input::check_ranges(&config)?;
    Ok(config)
}
