use gp_access::api::{self, CalculatorForm};
use gp_access::config::CalculatorDefaults;
use gp_access::scorer::{EvaluationRequest, ProviderOffer, ProviderSite, Scorer, Travel};

fn mixed_sites(scorer: &Scorer) -> Vec<ProviderSite> {
    vec![
        ProviderSite::new(ProviderOffer::new(40, 2988), Travel::Route(scorer.route(15.0, 1.67))),
        ProviderSite::new(ProviderOffer::new(25, 2988), Travel::direct(45.0)),
        ProviderSite::new(ProviderOffer::new(12, 900), Travel::Route(scorer.route(32.5, 0.4))),
    ]
}

#[test]
fn test_evaluate_is_bitwise_stable() {
    let scorer = Scorer::default();
    let req = EvaluationRequest::builder()
        .sites(mixed_sites(&scorer))
        .sigma(47.5)
        .build();

    let first = scorer.evaluate(&req).unwrap();
    for _ in 0..100 {
        let again = scorer.evaluate(&req).unwrap();
        assert_eq!(first.weekly_score.to_bits(), again.weekly_score.to_bits());
        assert_eq!(first.annual_score.to_bits(), again.annual_score.to_bits());
        assert_eq!(first, again);
    }
}

#[test]
fn test_calls_are_independent() {
    // A prior call with different inputs must not influence the next one.
    let scorer = Scorer::default();
    let baseline = api::walkthrough(&scorer, 60.0).unwrap();
    let _ = api::walkthrough(&scorer, 5.0).unwrap();
    let _ = api::walkthrough(&scorer, 0.0);
    let after = api::walkthrough(&scorer, 60.0).unwrap();
    assert_eq!(baseline, after);
}

#[test]
fn test_calculator_is_stable() {
    let scorer = Scorer::default();
    let form = CalculatorForm {
        travel_time: Some("22".into()),
        ..Default::default()
    };
    let a = api::calculate(&scorer, &form, &CalculatorDefaults::default()).unwrap();
    let b = api::calculate(&scorer, &form, &CalculatorDefaults::default()).unwrap();
    assert_eq!(a, b);
}
