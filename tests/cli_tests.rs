use assert_cmd::Command;
use regex::Regex;
use std::fs;
use std::io::Write;

fn gp_access() -> Command {
    Command::cargo_bin("gp-access").expect("binary should build")
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let mut final_args = args.to_vec();
    final_args.push("--json");
    let output = gp_access().args(&final_args).output().unwrap();
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_calc_defaults() {
    let v = run_json(&["calc"]);
    let adj = v["adjustedTravelTime"].as_f64().unwrap();
    assert!((adj - 18.7575).abs() < 1e-9);
    assert_eq!(v["classification"]["tier"], "POOR");
}

#[test]
fn test_calc_table_precision() {
    let output = gp_access()
        .args(["calc", "--travel-time", "20", "--intersections", "1.5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Adjusted time is shown with two decimals
    let re = Regex::new(r"Adjusted time \(min\)\s*\|\s*24\.50").unwrap();
    assert!(re.is_match(&stdout), "Unexpected output:\n{}", stdout);
    assert!(stdout.contains("POOR ACCESS"));
}

#[test]
fn test_calc_unparseable_field_falls_back() {
    let v = run_json(&["calc", "--travel-time", "abc"]);
    assert_eq!(v["inputs"]["travelTime"].as_f64().unwrap(), 15.0);
}

#[test]
fn test_calc_negative_population_fails() {
    gp_access()
        .args(["calc", "--population", "-5"])
        .assert()
        .failure();
}

#[test]
fn test_example_sigma_sweep() {
    let v = run_json(&["example", "--decay-sigma", "200"]);
    assert_eq!(v["classification"]["tier"], "ADEQUATE");

    let v = run_json(&["example"]);
    let annual = v["annualScore"].as_f64().unwrap();
    assert!((annual - 0.9018).abs() < 1e-3);
}

#[test]
fn test_calc_negative_travel_time_reaches_model() {
    let output = gp_access()
        .args(["calc", "--travel-time", "-3"])
        .output()
        .unwrap();
    // Exit 1 is a model error; clap usage errors exit with 2.
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("base_travel_time"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_sigma_fails() {
    gp_access()
        .args(["example", "--decay-sigma", "0"])
        .assert()
        .failure();
}

#[test]
fn test_score_providers() {
    let v = run_json(&["score", "-p", "15:40:2988", "-p", "45:25:2988"]);
    assert_eq!(v["providers"].as_array().unwrap().len(), 2);
    assert_eq!(v["classification"], "POOR");

    let v = run_json(&["score"]);
    assert_eq!(v["classification"], "DESERT");
}

#[test]
fn test_score_rejects_malformed_provider() {
    gp_access()
        .args(["score", "-p", "15:40"])
        .assert()
        .failure();
}

#[test]
fn test_curve_csv_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decay.csv");
    gp_access()
        .args(["curve", "--output", path.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    // header + 0..=120 step 2
    assert_eq!(content.lines().count(), 62);
}

#[test]
fn test_routes_alpha_override() {
    let v = run_json(&["routes", "--complexity-coefficient", "0.3"]);
    let urban = v[1]["adjustedTravelTime"].as_f64().unwrap();
    assert!((urban - 29.0).abs() < 1e-9);
}

#[test]
fn test_params_file_with_cli_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "decay_sigma": 200.0, "complexity_coefficient": 0.3 }}"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    // File alone: sigma 200 -> adequate
    let v = run_json(&["example", "--params", &path]);
    assert_eq!(v["sigma"].as_f64().unwrap(), 200.0);

    // Explicit flag wins over the file, untouched fields keep file values
    let v = run_json(&["calc", "--params", &path, "--decay-sigma", "60"]);
    assert_eq!(v["sigma"].as_f64().unwrap(), 60.0);
    assert_eq!(v["alpha"].as_f64().unwrap(), 0.3);
}
