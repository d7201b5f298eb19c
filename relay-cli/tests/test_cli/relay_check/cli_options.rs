use crate::add_test;
use crate::common::{Binary, Invocation};

// Test help output names the replay options
add_test!(help_lists_replay_options, async {
    let output = Invocation::new(Binary::RelayCheck).arg("--help").run().await;

    assert!(output.status.success());
    assert!(output.stdout.contains("--seed"));
    assert!(output.stdout.contains("--case"));
    assert!(output.stdout.contains("SUBJECT"));
});

// Test a zero timeout is rejected before anything runs
add_test!(zero_timeout_is_rejected, async {
    let output = Invocation::against_tail_relay()
        .args(["--timeout", "0"])
        .run()
        .await;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stderr.contains("positive number of seconds"));
});

// Test unknown options are usage errors
add_test!(unknown_option_is_rejected, async {
    let output = Invocation::against_tail_relay()
        .arg("--buffer-size")
        .run()
        .await;

    assert_eq!(output.status.code(), Some(2));
});

// Test JSON diagnostics carry the seed as a field
add_test!(json_log_format, async {
    let output = Invocation::against_tail_relay()
        .args(["--log-format", "json", "--seed", "42", "-n", "0", "--case", "0"])
        .run()
        .await;

    assert!(output.status.success());
    let first = output.stderr.lines().next().expect("diagnostics expected");
    assert!(first.starts_with('{'), "not JSON: {first}");
    assert!(first.contains("\"seed\":42"));
});

// Test quiet mode keeps only warnings and errors
add_test!(quiet_hides_progress, async {
    let output = Invocation::against_tail_relay()
        .args(["-q", "--seed", "3", "-n", "0"])
        .run()
        .await;

    assert!(output.status.success());
    assert_eq!(output.stderr_count("Testing buffer_size="), 0);
    assert_eq!(output.stderr_count("Ran for"), 0);
});

// Test quiet mode still reports failures
add_test!(quiet_keeps_failures, async {
    let output = Invocation::against_tail_relay()
        .args(["-q", "--seed", "3", "-n", "0", "--case", "5"])
        .args(["--", "--fault", "corrupt"])
        .run()
        .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("replay with --seed 3 --case 5"));
});

// Test the seed can come from the environment
add_test!(seed_from_environment, async {
    let output = Invocation::against_tail_relay()
        .env("RELAY_CHECK_SEED", "77")
        .args(["-n", "1", "--case", "12"])
        .run()
        .await;

    assert!(output.status.success());
    assert!(output.stderr.contains("Random seed = 77"));
});

// Test the command line seed wins over the environment
add_test!(seed_option_overrides_environment, async {
    let output = Invocation::against_tail_relay()
        .env("RELAY_CHECK_SEED", "77")
        .args(["--seed", "78", "-n", "0", "--list-cases"])
        .run()
        .await;

    assert!(output.status.success());
    assert!(output.stderr.contains("Random seed = 78"));
});

// Test an out-of-range case index is warned about, not fatal
add_test!(unknown_case_index_warns, async {
    let output = Invocation::against_tail_relay()
        .args(["--seed", "5", "-n", "0", "--case", "0", "--case", "99"])
        .run()
        .await;

    assert!(output.status.success());
    assert!(output.stderr.contains("selected case does not exist"));
    assert_eq!(output.stderr_count("Testing buffer_size="), 1);
});

// Test RUST_LOG overrides the verbosity flags
add_test!(rust_log_overrides_verbosity, async {
    let output = Invocation::against_tail_relay()
        .env("RUST_LOG", "error")
        .args(["--seed", "5", "-n", "0"])
        .run()
        .await;

    assert!(output.status.success());
    assert!(!output.stderr.contains("Random seed"));
});
