use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use std::{path::PathBuf, process::ExitCode};

/// Convert a las point cloud to an ascii ply file
#[derive(Debug, Parser)]
#[command(name = "las2ply", version, about)]
struct Cli {
    /// Input las file
    #[arg(value_name = "LAS")]
    input: PathBuf,

    /// Output ply file [default: the input with a .ply extension]
    #[arg(value_name = "PLY")]
    output: Option<PathBuf>,

    /// Log more detail (header fields, vlrs, bounds)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(&cli);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error!");
            for (i, cause) in err.chain().enumerate() {
                eprintln!("  Cause {}: {}", i, cause);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logger(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => LevelFilter::Warn,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.input.is_file() {
        bail!("las file not found: {}", cli.input.display());
    }
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| las2ply::default_output_path(&cli.input));
    let summary = las2ply::convert(&cli.input, &output).with_context(|| {
        format!(
            "failed to convert {} to {}",
            cli.input.display(),
            output.display()
        )
    })?;
    println!("Converted '{}'", summary.output.display());
    println!("Points: {}", summary.number_of_points);
    Ok(())
}
