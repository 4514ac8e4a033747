use std::path::PathBuf;

use clap::Parser;
use deducer::config::{Config, Notation};

/// Deduces, step by step, what follows from the premises written in a file.
///
/// Premises are written one to a line, with `#` starting a comment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The file of premises.
    #[arg(required_unless_present = "markdown_help")]
    pub file: Option<PathBuf>,

    /// Stop after this many steps.
    #[arg(short, long, value_name = "STEPS")]
    pub limit: Option<usize>,

    /// Write the operands of conjunctions and disjunctions in canonical order.
    #[arg(short, long)]
    pub canonical: bool,

    /// Write the premises each deduction rests on.
    #[arg(short, long)]
    pub premises: bool,

    /// Write the negation of a negation, when deduced, as the negated expression.
    #[arg(long)]
    pub strip_double_negation: bool,

    /// Skip deductions which are tautologies, such as `p → p`.
    #[arg(long)]
    pub skip_tautologies: bool,

    /// The greatest count of variables in a single expression.
    #[arg(long, value_name = "COUNT")]
    pub variable_limit: Option<usize>,

    /// The level of logs to write.
    #[cfg(feature = "log")]
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: log::LevelFilter,

    /// Print help as markdown.
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// A [Config] from the arguments.
///
/// If some value is outside the bounds of the relevant option a message is sent and the process is terminated.
pub fn config_from_args(args: &Args) -> Config {
    let mut the_config = Config::default();

    if args.canonical {
        the_config.notation.value = Notation::Canonical;
    }

    if args.strip_double_negation {
        the_config.strip_double_negation.value = true;
    }

    if args.skip_tautologies {
        the_config.skip_tautologies.value = true;
    }

    if let Some(limit) = args.variable_limit {
        if !the_config.variable_limit.set(limit) {
            let (min, max) = the_config.variable_limit.min_max();
            println!("variable_limit requires a value between {min} and {max}");
            std::process::exit(1);
        }
    }

    the_config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let args = Args::parse_from(["deducer_cli", "--canonical", "--skip-tautologies", "proof.txt"]);
        let config = config_from_args(&args);

        assert_eq!(config.notation.value, Notation::Canonical);
        assert!(config.skip_tautologies.value);
        assert!(!config.strip_double_negation.value);
        assert_eq!(args.file, Some(PathBuf::from("proof.txt")));
    }

    #[test]
    fn variable_limit() {
        let args = Args::parse_from(["deducer_cli", "--variable-limit", "4", "proof.txt"]);
        assert_eq!(config_from_args(&args).variable_limit.value, 4);
    }
}
