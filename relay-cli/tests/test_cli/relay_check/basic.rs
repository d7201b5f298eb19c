use crate::add_test;
use crate::common::{find_system_binary, Binary, Invocation};

// Test a correct subject passes the full default plan
add_test!(tail_relay_passes_default_plan, async {
    let output = Invocation::against_tail_relay()
        .args(["--seed", "42"])
        .run()
        .await;

    assert!(output.status.success(), "stderr:\n{}", output.stderr);
    assert!(output.stderr.contains("Random seed = 42"));
    assert_eq!(output.stderr_count("Testing buffer_size="), 44);
    assert_eq!(output.stderr_count("Ran for"), 44);
    assert!(output.stderr.contains("all 44 executed cases passed"));
    assert!(output.stdout.is_empty());
});

// Test the boundary grid is reported first and in order
add_test!(boundary_cases_reported_in_order, async {
    let output = Invocation::against_tail_relay()
        .args(["--seed", "1", "-n", "0"])
        .run()
        .await;
    assert!(output.status.success());

    let tested: Vec<String> = output
        .stderr
        .lines()
        .filter_map(|line| line.split_once("Testing "))
        .map(|(_, rest)| rest.split_whitespace().take(2).collect::<Vec<_>>().join(" "))
        .collect();
    assert_eq!(tested.len(), 12);
    assert_eq!(tested[0], "buffer_size=16 record_count=0");
    assert_eq!(tested[3], "buffer_size=16 record_count=4096");
    assert_eq!(tested[4], "buffer_size=4096 record_count=0");
    assert_eq!(tested[11], "buffer_size=0 record_count=4096");
});

// Test the seed is reported before any case runs when none is given
add_test!(fresh_seed_reported_first, async {
    let output = Invocation::against_tail_relay()
        .args(["-n", "1", "--case", "0"])
        .run()
        .await;
    assert!(output.status.success());

    let first = output.stderr.lines().next().unwrap_or_default();
    let seed = first
        .split_once("Random seed = ")
        .and_then(|(_, rest)| rest.split_whitespace().next())
        .expect("seed must be the first diagnostic");
    assert!(seed.parse::<u64>().is_ok(), "bad seed: {seed}");
});

// Test an exact-echo subject passes every case
add_test!(cat_passes_as_exact_echo, async {
    let Some(sh) = find_system_binary("sh") else {
        return;
    };
    let output = Invocation::new(Binary::RelayCheck)
        .arg(sh)
        .args(["--seed", "3", "-n", "4", "--", "-c", "exec cat", "sh"])
        .run()
        .await;
    assert!(output.status.success(), "stderr:\n{}", output.stderr);
});

// Test listing is deterministic for a fixed seed
add_test!(list_cases_is_reproducible, async {
    let first = Invocation::new(Binary::RelayCheck)
        .args(["--list-cases", "--seed", "9"])
        .run()
        .await;
    let second = Invocation::new(Binary::RelayCheck)
        .args(["--list-cases", "--seed", "9"])
        .run()
        .await;

    assert!(first.status.success());
    assert_eq!(first.stdout_raw, second.stdout_raw);
    assert_eq!(first.stdout.lines().count(), 44);
    assert!(first.stdout.starts_with("0 boundary 16 0\n"));
    assert!(first.stderr.contains("Random seed = 9"));
});

// Test different seeds enumerate different random cases
add_test!(list_cases_differs_across_seeds, async {
    let first = Invocation::new(Binary::RelayCheck)
        .args(["--list-cases", "--seed", "10"])
        .run()
        .await;
    let second = Invocation::new(Binary::RelayCheck)
        .args(["--list-cases", "--seed", "11"])
        .run()
        .await;

    let grid = |out: &str| out.lines().take(12).collect::<Vec<_>>().join("\n");
    assert_eq!(grid(&first.stdout), grid(&second.stdout));
    assert_ne!(first.stdout, second.stdout);
});

// Test a single case can be replayed on its own
add_test!(case_filter_replays_one_case, async {
    let listing = Invocation::new(Binary::RelayCheck)
        .args(["--list-cases", "--seed", "5", "-n", "4"])
        .run()
        .await;
    let line = listing.stdout.lines().nth(13).unwrap();
    let fields: Vec<&str> = line.split(' ').collect();

    let output = Invocation::against_tail_relay()
        .args(["--seed", "5", "-n", "4", "--case", "13"])
        .run()
        .await;
    assert!(output.status.success());
    assert_eq!(output.stderr_count("Testing buffer_size="), 1);
    assert!(output.stderr.contains(&format!(
        "Testing buffer_size={} record_count={}",
        fields[2], fields[3]
    )));
    assert!(output.stderr.contains("(15 skipped)"));
});
