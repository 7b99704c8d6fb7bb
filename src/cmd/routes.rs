use crate::reports;
use clap::Args;
use gp_access::config::ModelParams;
use gp_access::curves;
use gp_access::error::AccessResult;
use gp_access::scenarios::get_all_routes;
use gp_access::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct RoutesArgs {
    #[command(flatten)]
    pub params: ModelParams,
}

pub fn run(_args: &RoutesArgs, scorer: &Scorer, json: bool) -> AccessResult<()> {
    let alpha = scorer.params().complexity_coefficient;
    let rows = curves::compare_routes(scorer.adjuster(), &get_all_routes(), alpha)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        reports::print_route_report(alpha, &rows);
    }
    Ok(())
}
