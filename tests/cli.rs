use std::process::{Command, Output};

fn nbody(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nbody"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run nbody")
}

#[test]
fn test_zero_steps() {
    let output = nbody(&["0"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "-0.169075164\n-0.169075164\n"
    );
}

#[test]
fn test_thousand_steps() {
    let output = nbody(&["1000"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "-0.169075164\n-0.169087605\n"
    );
    // Nothing but the two energies on stdout, and quiet by default
    assert!(output.stderr.is_empty());
}

#[test]
fn test_repeatable() {
    let first = nbody(&["2500"]);
    let second = nbody(&["2500"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_invalid_arguments() {
    for args in [vec![], vec!["abc"], vec!["-5"], vec!["12.5"]].iter() {
        let output = nbody(args);
        assert!(!output.status.success(), "{:?} should have failed", args);
        assert!(output.stdout.is_empty(), "{:?} printed energies", args);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("invalid argument"), "stderr was: {}", stderr);
    }
}
