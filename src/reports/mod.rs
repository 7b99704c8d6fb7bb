use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gp_access::api::{CalculatorResult, ClassificationView, WalkthroughResult};
use gp_access::curves::{CurvePoint, RouteAdjustment};
use gp_access::scorer::{AccessibilityResult, Classification, Scorer};

fn tier_color(tier: Classification) -> Color {
    match tier {
        Classification::Adequate => Color::Green,
        Classification::Poor => Color::Yellow,
        Classification::Desert => Color::Red,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn print_classification(view: &ClassificationView) {
    let mut table = new_table();
    table.add_row(vec![Cell::new(format!("Classification: {}", view.headline))
        .fg(tier_color(view.tier))
        .add_attribute(Attribute::Bold)]);
    if !view.advisory.is_empty() {
        table.add_row(vec![Cell::new(&view.advisory)]);
    }
    println!("{}", table);
}

pub fn print_calculator_report(r: &CalculatorResult) {
    println!("\n=== ACCESSIBILITY CALCULATOR ===");
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Quantity").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let rows = [
        ("Travel time (min)", format!("{:.2}", r.inputs.travel_time)),
        ("Intersections / min", format!("{:.2}", r.inputs.intersection_density)),
        ("Appointments / week", r.inputs.appointments.to_string()),
        ("Population", r.inputs.population.to_string()),
        ("Adjusted time (min)", format!("{:.2}", r.adjusted_travel_time)),
        ("Decay weight", format!("{:.3}", r.decay_weight)),
        ("Supply ratio", format!("{:.4}", r.supply_ratio)),
        ("Accessibility (weekly)", format!("{:.4}", r.weekly_score)),
        ("Accessibility (annual)", format!("{:.2}", r.annual_score)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", table);
    println!("alpha = {}, sigma = {} min", r.alpha, r.sigma);
    print_classification(&r.classification);
}

pub fn print_walkthrough_report(r: &WalkthroughResult) {
    println!("\n=== TWO-CLINIC EXAMPLE (sigma = {} min) ===", r.sigma);
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Clinic").add_attribute(Attribute::Bold),
        Cell::new("Distance"),
        Cell::new("Appts/wk"),
        Cell::new("Weight").fg(Color::Cyan),
        Cell::new("Ratio"),
    ]);
    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for c in &r.clinics {
        table.add_row(vec![
            Cell::new(&c.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.0}", c.distance)),
            Cell::new(c.appointments),
            Cell::new(format!("{:.2}", c.decay_weight)).fg(Color::Cyan),
            Cell::new(format!("{:.4}", c.supply_ratio)),
        ]);
    }
    println!("{}", table);
    println!("Population: {}", r.population);
    println!("Access score (weekly): {:.4}", r.weekly_score);
    println!("Access score (annual): {:.2}", r.annual_score);
    print_classification(&r.classification);
}

pub fn print_catchment_report(r: &AccessibilityResult, scorer: &Scorer) {
    println!("\n=== CATCHMENT SCORE ===");
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Minutes"),
        Cell::new("Weight").fg(Color::Cyan),
        Cell::new("Ratio"),
        Cell::new("Contribution"),
    ]);
    for (i, p) in r.providers.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{:.2}", p.travel_time)),
            Cell::new(format!("{:.3}", p.decay_weight)).fg(Color::Cyan),
            Cell::new(format!("{:.4}", p.supply_ratio)),
            Cell::new(format!("{:.4}", p.contribution)),
        ]);
    }
    println!("{}", table);
    println!("Access score (weekly): {:.4}", r.weekly_score);
    println!("Access score (annual): {:.2}", r.annual_score);
    print_classification(&ClassificationView::new(scorer, r.classification));
}

// Fewest decimals (up to 4) that keep every multiple of `step` distinct.
fn step_precision(step: f64) -> usize {
    (0..4)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9
        })
        .unwrap_or(4)
}

pub fn print_curve_report(sigma: f64, step: f64, points: &[CurvePoint]) {
    println!("\n=== DISTANCE DECAY (sigma = {} min) ===", sigma);
    let precision = step_precision(step);
    let mut table = new_table();
    table.set_header(vec![Cell::new("Minutes"), Cell::new("Weight")]);
    for p in points {
        table.add_row(vec![
            Cell::new(format!("{:.*}", precision, p.distance)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", p.weight)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_route_report(alpha: f64, rows: &[RouteAdjustment]) {
    println!("\n=== TRAVEL TIME ADJUSTMENT (alpha = {}) ===", alpha);
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Route").add_attribute(Attribute::Bold),
        Cell::new("Base (min)"),
        Cell::new("Adjusted (min)").fg(Color::Cyan),
        Cell::new("Increase"),
    ]);
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    for r in rows {
        table.add_row(vec![
            Cell::new(&r.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.0}", r.base_travel_time)),
            Cell::new(format!("{:.1}", r.adjusted_travel_time)).fg(Color::Cyan),
            Cell::new(format!("{:.1}%", r.increase_pct)),
        ]);
    }
    println!("{}", table);
}
