//! Cross-process determinism.
//!
//! Spawns the `search_fixture` binary under three environment variants and
//! asserts that all produce identical output, and that the output matches
//! what the same code computes in this process.

use std::path::Path;
use std::process::Command;

use lock_tests::canonical_runs::fixture_lines;

/// Resolve the path to the compiled fixture binary.
///
/// `cargo test` puts test binaries in `target/<profile>/deps/`; the
/// `search_fixture` binary lives one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

/// Run the binary with the given cwd and environment overrides.
fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {bin} (work_dir={}, overrides={env_overrides:?}): {e}",
            work_dir.display()
        )
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_three_env_variants() {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists");
    let scratch = tempfile::tempdir().unwrap();

    let baseline = run_variant(workspace_root, &[]);
    let other_cwd = run_variant(scratch.path(), &[]);
    let other_env = run_variant(
        workspace_root,
        &[("LC_ALL", "C"), ("LANG", "tr_TR.UTF-8"), ("RUST_LOG", "trace")],
    );

    assert_eq!(baseline, other_cwd, "output depends on the working directory");
    assert_eq!(baseline, other_env, "output depends on locale or log level");
}

#[test]
fn crossproc_output_matches_inproc() {
    let dir = tempfile::tempdir().unwrap();
    let spawned = run_variant(dir.path(), &[]);
    let spawned: Vec<&str> = spawned.lines().collect();
    let inproc = fixture_lines();
    assert_eq!(spawned, inproc);
    assert!(spawned.iter().any(|l| l.starts_with("report_digest=sha256:")));
    assert!(spawned.contains(&"astar.nodes=52"));
}
