use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "3", "probability"])
        .env("BROADSIDE_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["episodes"], 3);
    assert!(v["mean_steps"].as_f64().unwrap() <= 100.0);
}

#[test]
fn sim_binary_rejects_bad_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
