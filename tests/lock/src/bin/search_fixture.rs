//! Binary that runs every strategy from the standard start and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines (see `lock_tests::canonical_runs::fixture_lines`).

use lock_tests::canonical_runs::fixture_lines;

fn main() {
    for line in fixture_lines() {
        println!("{line}");
    }
}
