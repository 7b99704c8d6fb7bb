use crate::reports;
use clap::Args;
use gp_access::api;
use gp_access::config::ModelParams;
use gp_access::error::{AccessError, AccessResult};
use gp_access::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub params: ModelParams,

    /// Reachable provider as MINUTES:APPOINTMENTS:POPULATION (repeatable)
    #[arg(short, long = "provider")]
    pub providers: Vec<String>,
}

fn parse_provider(raw: &str) -> AccessResult<(f64, u32, u32)> {
    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(AccessError::Config(format!(
            "Provider '{}' must be MINUTES:APPOINTMENTS:POPULATION",
            raw
        )));
    }
    let bad = |what: &str| AccessError::Config(format!("Invalid {} in provider '{}'", what, raw));
    let minutes = parts[0].parse::<f64>().map_err(|_| bad("minutes"))?;
    let appts = parts[1].parse::<u32>().map_err(|_| bad("appointments"))?;
    let pop = parts[2].parse::<u32>().map_err(|_| bad("population"))?;
    Ok((minutes, appts, pop))
}

pub fn run(args: &ScoreArgs, scorer: &Scorer, json: bool) -> AccessResult<()> {
    let providers = args
        .providers
        .iter()
        .map(|p| parse_provider(p))
        .collect::<AccessResult<Vec<_>>>()?;

    let result = api::evaluate_catchment(scorer, &providers, scorer.params().decay_sigma)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_catchment_report(&result, scorer);
    }
    Ok(())
}
