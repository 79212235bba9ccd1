use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use std::{error::Error, path::PathBuf};
use ticklabel::{
    config::{Config, ConfigStore, FileConfigStore},
    input::read_values_from,
    label::{range_labels, value_labels, LabelSet},
    output::{render, OutputFormat},
    Notation, PrecisionPolicy, Scale,
};

/// human-readable tick, legend and color-bar labels for numeric ranges and value sets
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Turns a numeric range or a list of values into short, consistent labels for chart ticks, legends and color bars, in fixed-point or scientific notation."
)]
pub struct Cli {
    /// config file to read defaults from (and write with --save-defaults)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// output format
    #[clap(short = 'o', long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// right-align text labels
    #[clap(long, global = true)]
    align: bool,

    /// persist the effective settings as the new defaults
    #[clap(long, global = true)]
    save_defaults: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// label evenly spaced ticks across [MIN, MAX]
    Range(RangeArgs),
    /// label an explicit set of values
    Values(ValuesArgs),
    /// print the effective configuration as JSON
    Config,
}

#[derive(Args, Debug, Clone)]
struct RangeArgs {
    /// lower bound of the range
    #[clap(allow_negative_numbers = true)]
    min: f64,

    /// upper bound of the range
    #[clap(allow_negative_numbers = true)]
    max: f64,

    /// number of ticks
    #[clap(short = 'n', long)]
    count: Option<usize>,

    /// tick spacing
    #[clap(long, value_enum, conflicts_with = "log")]
    scale: Option<Scale>,

    /// shorthand for --scale log
    #[clap(short = 'l', long)]
    log: bool,

    #[clap(flatten)]
    label: LabelArgs,
}

#[derive(Args, Debug, Clone)]
struct ValuesArgs {
    /// values to label
    #[clap(allow_negative_numbers = true, conflicts_with = "input")]
    values: Vec<f64>,

    /// CSV file to read values from, `-` for stdin
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,

    /// CSV column holding the values (the file then needs a header row)
    #[clap(short = 'c', long, requires = "input")]
    column: Option<String>,

    #[clap(flatten)]
    label: LabelArgs,
}

#[derive(Args, Debug, Clone)]
struct LabelArgs {
    /// label notation
    #[clap(long, value_enum, conflicts_with = "exp")]
    notation: Option<Notation>,

    /// shorthand for --notation scientific
    #[clap(short = 'e', long)]
    exp: bool,

    /// how fixed-point decimals are chosen
    #[clap(short = 'p', long, value_enum)]
    precision: Option<PrecisionPolicy>,
}

impl LabelArgs {
    fn apply(&self, cfg: &mut Config) {
        if let Some(notation) = self.notation {
            cfg.notation = notation;
        }
        if self.exp {
            cfg.notation = Notation::Scientific;
        }
        if let Some(precision) = self.precision {
            cfg.precision = precision;
        }
    }
}

impl Cli {
    /// Layer command line flags over the stored defaults
    fn effective_config(&self, mut cfg: Config) -> Config {
        if let Some(format) = self.format {
            cfg.output = format;
        }
        if self.align {
            cfg.align = true;
        }
        match &self.command {
            Command::Range(args) => {
                if let Some(count) = args.count {
                    cfg.tick_count = count;
                }
                if let Some(scale) = args.scale {
                    cfg.scale = scale;
                }
                if args.log {
                    cfg.scale = Scale::Log;
                }
                args.label.apply(&mut cfg);
            }
            Command::Values(args) => args.label.apply(&mut cfg),
            Command::Config => {}
        }
        cfg
    }
}

fn build_labels(command: &Command, settings: &Config) -> Result<LabelSet, Box<dyn Error>> {
    let options = settings.label_options();
    match command {
        Command::Range(args) => Ok(range_labels(
            args.min,
            args.max,
            settings.tick_count,
            &options,
        )?),
        Command::Values(args) => {
            let values = match &args.input {
                Some(path) => read_values_from(path, args.column.as_deref())?,
                None => args.values.clone(),
            };
            Ok(value_labels(&values, &options))
        }
        Command::Config => Ok(LabelSet::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let settings = cli.effective_config(store.load());
    debug!("effective settings: {settings:?}");

    if cli.save_defaults {
        store.save(&settings)?;
        info!("saved defaults to {}", store.path().display());
    }

    if let Command::Config = cli.command {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let labels = match build_labels(&cli.command, &settings) {
        Ok(labels) => labels,
        Err(err) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::ValueValidation, err).exit();
        }
    };

    print!("{}", render(&labels, settings.output, settings.align)?);

    Ok(())
}
