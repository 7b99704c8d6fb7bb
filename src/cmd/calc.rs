use crate::reports;
use clap::Args;
use gp_access::api::{self, CalculatorForm};
use gp_access::config::{CalculatorDefaults, ModelParams};
use gp_access::error::AccessResult;
use gp_access::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub params: ModelParams,

    /// Base travel time in minutes (default 15)
    #[arg(long, allow_hyphen_values = true)]
    pub travel_time: Option<String>,

    /// Intersections per minute (default 1.67)
    #[arg(long, allow_hyphen_values = true)]
    pub intersections: Option<String>,

    /// Weekly appointments (default 40)
    #[arg(long, allow_hyphen_values = true)]
    pub appointments: Option<String>,

    /// Competing population (default 2988)
    #[arg(long, allow_hyphen_values = true)]
    pub population: Option<String>,
}

pub fn run(args: &CalcArgs, scorer: &Scorer, json: bool) -> AccessResult<()> {
    let form = CalculatorForm {
        travel_time: args.travel_time.clone(),
        intersections: args.intersections.clone(),
        appointments: args.appointments.clone(),
        population: args.population.clone(),
    };
    let result = api::calculate(scorer, &form, &CalculatorDefaults::default())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_calculator_report(&result);
    }
    Ok(())
}
