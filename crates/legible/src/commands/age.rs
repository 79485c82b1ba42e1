//! Age command: convert a single metric score to a reading age.

use anyhow::Context;
use clap::Args;
use legible_core::age::{AgeScale, score_to_age};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `age` subcommand.
#[derive(Args, Debug)]
pub struct AgeArgs {
    /// Metric the score comes from.
    #[arg(value_enum)]
    pub metric: AgeScale,

    /// The score to convert.
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

#[derive(Debug, Serialize)]
struct AgeOutput {
    metric: AgeScale,
    score: f64,
    age: f64,
}

/// Convert a score to a reading age in years.
#[instrument(name = "cmd_age", skip_all, fields(metric = %args.metric))]
pub fn cmd_age(args: AgeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(score = args.score, "executing age command");

    let age = score_to_age(args.metric, args.score)
        .with_context(|| format!("cannot convert {} score {}", args.metric, args.score))?;

    if global_json {
        let output = AgeOutput {
            metric: args.metric,
            score: args.score,
            age,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{age:.1}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_in_range_score() {
        let args = AgeArgs {
            metric: AgeScale::Fres,
            score: 65.0,
        };
        assert!(cmd_age(args, false).is_ok());
    }

    #[test]
    fn out_of_range_score_fails() {
        let args = AgeArgs {
            metric: AgeScale::Ari,
            score: 40.0,
        };
        let err = cmd_age(args, true).unwrap_err();
        assert!(err.to_string().contains("cannot convert ari"), "{err}");
    }
}
