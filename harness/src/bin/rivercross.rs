//! `rivercross`: solve the missionaries-and-cannibals puzzle from the command line.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use rivercross_harness::console::{write_comparison, write_node_view, write_path, StdinGate};
use rivercross_harness::report::{read_report, report_bytes, write_report};
use rivercross_harness::runner::{run_comparison, RunConfig};
use rivercross_kernel::carrier::state::RiverState;
use rivercross_search::policy::{AStarOrder, GreedyHeuristic, SearchPolicy};
use rivercross_search::search::search;
use rivercross_search::strategy::{bfs, StrategyKind};

macro_rules! fatal_error {
    ($code:expr, $($arg:tt)*) => {{
        eprint!("{} ", "error:".red().bold());
        eprintln!($($arg)*);
        std::process::exit($code)
    }};
}

#[derive(clap::Parser, Debug)]
#[command(version, about = "Missionaries and cannibals, four ways.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Run one or more strategies and compare them.
    #[command(alias = "s")]
    Solve(Solve),

    /// Breadth-first search, pausing after every level.
    Step(Step),

    /// Print a node of a strategy's search tree.
    Show(Show),

    /// Check the digest of a saved report.
    Verify(Verify),
}

/// Policy knobs shared by the commands that run informed strategies.
#[derive(clap::Args, Debug)]
struct PolicyArgs {
    /// Greedy heuristic (bank-occupancy, left-bank).
    #[arg(long, default_value = "bank-occupancy")]
    greedy_heuristic: GreedyHeuristic,
    /// A* open-list ordering (ascending, descending).
    #[arg(long, default_value = "ascending")]
    astar_order: AStarOrder,
    /// Penalty subtracted from A* f for each unsafe bank.
    #[arg(long, default_value_t = 1000)]
    penalty: i64,
}

impl PolicyArgs {
    fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            greedy_heuristic: self.greedy_heuristic,
            astar_order: self.astar_order,
            invalid_state_penalty: self.penalty,
        }
    }
}

#[derive(clap::Args, Debug)]
struct Solve {
    /// Strategies to run (bfs, dfs, greedy, astar). Defaults to all four.
    #[arg(short, long, value_delimiter = ',')]
    strategy: Vec<StrategyKind>,
    /// Start state as `M,C,L|R` (left-bank counts and boat side).
    #[arg(long, default_value = "3,3,L")]
    start: RiverState,
    /// Run strategies one after another instead of on separate threads.
    #[arg(long, default_value_t = false)]
    sequential: bool,
    #[command(flatten)]
    policy: PolicyArgs,
    /// Print the canonical report as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
    /// Also write the canonical report to this file.
    #[arg(short, long)]
    report: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct Step {
    /// Start state as `M,C,L|R`.
    #[arg(long, default_value = "3,3,L")]
    start: RiverState,
}

#[derive(clap::Args, Debug)]
struct Show {
    /// Node id (`12`) or label (`M`).
    node: String,
    /// Strategy whose tree to inspect.
    #[arg(short, long, default_value = "astar")]
    strategy: StrategyKind,
    /// Start state as `M,C,L|R`.
    #[arg(long, default_value = "3,3,L")]
    start: RiverState,
    /// List the subtree down to this many levels instead of the direct children.
    #[arg(short, long)]
    depth: Option<u32>,
    #[command(flatten)]
    policy: PolicyArgs,
}

#[derive(clap::Args, Debug)]
struct Verify {
    /// Path to a report written by `solve --report`.
    path: PathBuf,
}

impl Command {
    fn run(self) {
        let outcome = match self {
            Command::Solve(args) => args.run(),
            Command::Step(args) => args.run(),
            Command::Show(args) => args.run(),
            Command::Verify(args) => args.run(),
        };
        if let Err(e) = outcome {
            fatal_error!(1, "cannot write output: {}", e);
        }
    }
}

impl Solve {
    fn run(self) -> io::Result<()> {
        let config = RunConfig {
            strategies: if self.strategy.is_empty() {
                StrategyKind::ALL.to_vec()
            } else {
                self.strategy
            },
            initial: self.start,
            policy: self.policy.policy(),
            concurrent: !self.sequential,
        };
        let run = match run_comparison(&config) {
            Ok(run) => run,
            Err(e) => fatal_error!(1, "Cannot run comparison: {}", e),
        };

        if let Some(path) = &self.report {
            if let Err(e) = write_report(&run, path) {
                fatal_error!(1, "Cannot write report: {}", e);
            }
        }

        let mut out = io::stdout().lock();
        if self.json {
            let (bytes, _) = match report_bytes(&run) {
                Ok(x) => x,
                Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
            };
            out.write_all(&bytes)?;
            return writeln!(out);
        }

        writeln!(out, "{}", "Comparison".bold())?;
        write_comparison(&mut out, &run)?;
        for result in &run.results {
            writeln!(out)?;
            write_path(&mut out, result)?;
        }
        Ok(())
    }
}

impl Step {
    fn run(self) -> io::Result<()> {
        println!("{} from {}", "Breadth-first search".bold(), self.start);
        let stdin = io::stdin();
        let mut gate = StdinGate::new(stdin.lock(), io::stdout());
        let result = bfs::run_with_gate(self.start, &mut gate);

        let mut out = io::stdout().lock();
        writeln!(out)?;
        write_path(&mut out, &result)?;
        writeln!(
            out,
            "{} {} nodes, {} explored, {} open, {:.3} ms",
            "Stats:".bold(),
            result.stats.generated,
            result.stats.explored,
            result.stats.open,
            result.elapsed_ms_f64()
        )
    }
}

impl Show {
    fn run(self) -> io::Result<()> {
        let result = match search(self.strategy, self.start, &self.policy.policy()) {
            Ok(r) => r,
            Err(e) => fatal_error!(1, "Cannot run {}: {}", self.strategy, e),
        };
        let Some(id) = result.tree.resolve(&self.node) else {
            fatal_error!(
                1,
                "No node {:?} in the {} tree ({} nodes)",
                self.node,
                self.strategy,
                result.tree.len()
            )
        };

        let mut out = io::stdout().lock();
        writeln!(out, "{}", result.strategy.title().bold())?;
        write_node_view(&mut out, &result.tree, id, self.depth)
    }
}

impl Verify {
    fn run(self) -> io::Result<()> {
        match read_report(&self.path) {
            Ok((_, digest)) => {
                println!("{} {digest}", "OK".green().bold());
                Ok(())
            }
            Err(e) => fatal_error!(2, "Report {} failed verification: {}", self.path.display(), e),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    cli.command.run();
}
