use crate::grading::normalize::RawScores;
use crate::types::scores::Component;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kurul",
    version,
    about = "Year-end grade and required-score calculator for kurul-weighted courses"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format (defaults to output.format from kurul.toml, then text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<ReportFormat>,

    /// Use this file instead of ./kurul.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Year-end total, letter grade and pass status
    Outcome(OutcomeCommand),
    /// Minimum final exam score, or remaining average with the final left at 50
    Final(ThresholdCommand),
    /// Whether the year-in average exempts you from the final exam
    Finalless(ThresholdCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Raw component scores. Values outside 0-100 are clamped.
#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub k1: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub k2: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub k3: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub k4: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub k5: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub bil: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub ihu: Option<String>,
}

impl ScoreArgs {
    pub fn to_raw(&self) -> RawScores {
        let mut raw = RawScores::new();
        for component in Component::ALL {
            let value = match component {
                Component::K1 => &self.k1,
                Component::K2 => &self.k2,
                Component::K3 => &self.k3,
                Component::K4 => &self.k4,
                Component::K5 => &self.k5,
                Component::Bil => &self.bil,
                Component::Ihu => &self.ihu,
            };
            raw.set(component, value.clone());
        }
        raw
    }
}

#[derive(Args)]
pub struct OutcomeCommand {
    #[command(flatten)]
    pub scores: ScoreArgs,
    /// Final exam score
    #[arg(long = "final", allow_hyphen_values = true)]
    pub final_exam: Option<String>,
}

/// Omitted components and `-` count as not taken yet.
#[derive(Args)]
pub struct ThresholdCommand {
    #[command(flatten)]
    pub scores: ScoreArgs,
    /// Read an entered 0 as a real score instead of "not taken yet"
    #[arg(long)]
    pub explicit_zero: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn outcome_accepts_negative_and_final_values() {
        let cli = Cli::try_parse_from([
            "kurul", "outcome", "--k1", "-5", "--k2", "70", "--final", "55",
        ])
        .expect("arguments should parse");
        let Commands::Outcome(cmd) = cli.command else {
            panic!("expected outcome command");
        };
        let raw = cmd.scores.to_raw().with_final(cmd.final_exam.unwrap_or_default());
        assert_eq!(raw.get(Component::K1), Some("-5"));
        assert_eq!(raw.get(Component::K2), Some("70"));
        assert_eq!(raw.get(Component::K3), None);
        assert_eq!(raw.final_exam.as_deref(), Some("55"));
    }

    #[test]
    fn threshold_accepts_pending_marker() {
        let cli = Cli::try_parse_from(["kurul", "final", "--bil", "-", "--explicit-zero"])
            .expect("arguments should parse");
        let Commands::Final(cmd) = cli.command else {
            panic!("expected final command");
        };
        assert!(cmd.explicit_zero);
        assert_eq!(cmd.scores.to_raw().get(Component::Bil), Some("-"));
    }
}
