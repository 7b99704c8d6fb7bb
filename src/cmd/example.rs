use crate::reports;
use clap::Args;
use gp_access::api;
use gp_access::config::ModelParams;
use gp_access::error::AccessResult;
use gp_access::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct ExampleArgs {
    #[command(flatten)]
    pub params: ModelParams,
}

pub fn run(_args: &ExampleArgs, scorer: &Scorer, json: bool) -> AccessResult<()> {
    let result = api::walkthrough(scorer, scorer.params().decay_sigma)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_walkthrough_report(&result);
    }
    Ok(())
}
