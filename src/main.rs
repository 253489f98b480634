use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::debug;
use vardesc::{Config, Generator};

const DEFAULT_LOGGING_LEVEL: &str = "warn";
const EXIT_MISSING_SAMPLE_LIST: u8 = 1;
const EXIT_FAILURE: u8 = 2;

/// Creates geography variable descriptions based on a list of provided samples
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Text file with one sample per line (e.g. sn2023, bd2022ir)
    #[arg(long, alias = "sample_list")]
    sample_list: Option<PathBuf>,
    /// TOML config file; defaults to <config dir>/vardesc/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
    /// Country reference table (.xlsx or .csv)
    #[arg(long)]
    countries: Option<PathBuf>,
    /// Directory with existing geography variable workbooks
    #[arg(long)]
    geography_dir: Option<PathBuf>,
    /// Directory the descriptions are written into
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Continue with the remaining samples when one fails
    #[arg(long)]
    keep_going: bool,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(sample_list) = self.sample_list {
            config.sample_list = sample_list;
        }
        if let Some(countries) = self.countries {
            config.countries = countries;
        }
        if let Some(geography_dir) = self.geography_dir {
            config.geography_dir = geography_dir;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        config.keep_going |= self.keep_going;
        config
    }
}

fn main() -> ExitCode {
    // Set RUST_LOG to `DEFAULT_LOGGING_LEVEL` if not set
    let _ =
        std::env::var("RUST_LOG").map_err(|_| std::env::set_var("RUST_LOG", DEFAULT_LOGGING_LEVEL));
    pretty_env_logger::init_timed();
    let args = Cli::parse();
    debug!("args: {args:?}");

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => args.apply(config),
        Err(err) => return failure(err),
    };
    debug!("config: {config:?}");

    if !config.sample_list.exists() {
        eprintln!(
            "Error: sample list {} does not exist. Leave out --sample-list to use the default file {}",
            config.sample_list.display(),
            Config::default().sample_list.display()
        );
        return ExitCode::from(EXIT_MISSING_SAMPLE_LIST);
    }

    let generator = match Generator::new(config) {
        Ok(generator) => generator,
        Err(err) => return failure(err),
    };
    let report = match generator.run() {
        Ok(report) => report,
        Err(err) => return failure(err),
    };

    println!(
        "\nFinished. Created {} single-sample geography variable descriptions, located in {}.",
        report.created.len(),
        generator.config().output_dir.display()
    );
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        eprintln!("{} samples failed:", report.failed.len());
        for (sample, err) in &report.failed {
            eprintln!("  {sample}: {err:#}");
        }
        ExitCode::from(EXIT_FAILURE)
    }
}

fn failure(err: anyhow::Error) -> ExitCode {
    eprintln!("An error occurred:");
    eprintln!("{err:?}");
    ExitCode::from(EXIT_FAILURE)
}
