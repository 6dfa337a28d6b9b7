mod cli;
mod config;
mod error;
mod grading;
mod report;
mod telemetry;
mod types;

use crate::error::GradeError;
use crate::grading::normalize::{normalize_complete, normalize_partial};
use crate::grading::weights::WeightTable;
use crate::report::OutputFormat;
use crate::types::outcome::ThresholdResult;
use clap::Parser;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NEGATIVE_OUTCOME: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn threshold_exit_code(result: &ThresholdResult) -> i32 {
    match result {
        ThresholdResult::AlreadySufficient { .. } | ThresholdResult::RequiredValue { .. } => {
            exit_code::SUCCESS
        }
        ThresholdResult::Unreachable | ThresholdResult::Insufficient { .. } => {
            exit_code::NEGATIVE_OUTCOME
        }
        ThresholdResult::NothingPending => exit_code::INVALID_INPUT,
    }
}

fn run() -> Result<i32, GradeError> {
    let cli = cli::Cli::parse();
    let root = std::env::current_dir()?;
    let loaded = config::load_config(&root, cli.config.as_deref())?;
    telemetry::init(cli.verbose, cli.quiet, loaded.log_level())?;

    let format = match cli.format {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Text) => OutputFormat::Text,
        None => match loaded.output_format() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        },
    };
    let weights = WeightTable::STANDARD;

    match cli.command {
        cli::Commands::Outcome(cmd) => {
            info!("computing year-end outcome");
            let raw = match cmd.final_exam {
                Some(final_raw) => cmd.scores.to_raw().with_final(final_raw),
                None => cmd.scores.to_raw(),
            };
            let (scores, final_score) = normalize_complete(&raw)?;
            let result = grading::compute_outcome(&scores, final_score, &weights)?;
            println!("{}", report::render_outcome(&result, format)?);

            if result.status.passed() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::NEGATIVE_OUTCOME)
            }
        }
        cli::Commands::Final(cmd) => {
            info!("computing pass-with-final threshold");
            let zero_is_pending = loaded.zero_is_pending() && !cmd.explicit_zero;
            let scores = normalize_partial(&cmd.scores.to_raw(), zero_is_pending)?;
            let threshold = grading::compute_final_threshold(&scores, &weights);
            println!("{}", report::render_threshold(&threshold, format)?);
            Ok(threshold_exit_code(&threshold.result))
        }
        cli::Commands::Finalless(cmd) => {
            info!("computing pass-without-final threshold");
            let zero_is_pending = loaded.zero_is_pending() && !cmd.explicit_zero;
            let scores = normalize_partial(&cmd.scores.to_raw(), zero_is_pending)?;
            let threshold = grading::compute_finalless_threshold(&scores, &weights);
            println!("{}", report::render_threshold(&threshold, format)?);
            Ok(threshold_exit_code(&threshold.result))
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            if e.is_input_error() {
                eprintln!("enter a number between 0 and 100 for every score");
                std::process::exit(exit_code::INVALID_INPUT);
            }
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
