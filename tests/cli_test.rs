use std::process::Command;

fn broadside(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_broadside"))
        .args(args)
        .output()
        .expect("failed to run broadside binary")
}

#[test]
fn test_simulate_json() {
    let output = broadside(&["simulate", "--games", "10", "--seed", "3", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 10);
    assert_eq!(v["seed"], 3);
    assert!(v["average_turns"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_simulate_custom_board() {
    let output = broadside(&[
        "simulate", "--games", "5", "--width", "6", "--height", "6", "--fleet", "1:2,2:1",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("/ 5 games"), "unexpected output: {}", stdout);
}

#[test]
fn test_invalid_fleet_is_rejected() {
    let output = broadside(&["simulate", "--fleet", "0:1"]);
    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}

#[test]
fn test_play_reads_moves_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new(env!("CARGO_BIN_EXE_broadside"))
        .args(["play", "--seed", "4", "--name", "Ada"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run broadside binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"A1\nnot a cell\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    // input runs out before the game ends
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using fixed seed: 4"));
    assert!(stdout.contains("It is now Ada's turn."));
    assert!(stdout.contains("Computer fired at"));
}
