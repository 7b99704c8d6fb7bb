use crate::reports;
use clap::Args;
use gp_access::config::ModelParams;
use gp_access::consts::{DEFAULT_CURVE_MAX_DISTANCE, DEFAULT_CURVE_STEP};
use gp_access::curves;
use gp_access::error::AccessResult;
use gp_access::scorer::Scorer;
use std::fs::File;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CurveArgs {
    #[command(flatten)]
    pub params: ModelParams,

    #[arg(long, default_value_t = DEFAULT_CURVE_MAX_DISTANCE)]
    pub max_distance: f64,

    #[arg(long, default_value_t = DEFAULT_CURVE_STEP)]
    pub step: f64,

    /// Write the series as CSV instead of printing it
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: &CurveArgs, scorer: &Scorer, json: bool) -> AccessResult<()> {
    let sigma = scorer.params().decay_sigma;
    let points = curves::decay_curve(sigma, args.max_distance, args.step)?;

    if let Some(path) = &args.output {
        curves::write_curve_csv(&points, File::create(path)?)?;
        info!("Wrote {} points to {}", points.len(), path);
    } else if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        reports::print_curve_report(sigma, args.step, &points);
    }
    Ok(())
}
