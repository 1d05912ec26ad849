//! Plain-text console rendering and the interactive BFS level gate.
//!
//! Everything writes to a caller-supplied `io::Write` so output can be
//! captured in tests. No colour codes are emitted here; the binary adds
//! emphasis on top.

use std::io::{self, BufRead, Write};

use rivercross_kernel::carrier::state::Bank;
use rivercross_search::contract::{LevelDecision, LevelGate, LevelReport};
use rivercross_search::node::{NodeId, SearchNode};
use rivercross_search::result::{SearchResult, Termination};
use rivercross_search::tree::SearchTree;

use crate::runner::ComparisonRun;

/// One-line description of a node:
/// `D [g=1 h=0 f=1] L:3M 2C | R:0M 1C | boat:right`.
#[must_use]
pub fn node_summary(node: &SearchNode) -> String {
    let state = node.state();
    let left = state.occupancy(Bank::Left);
    let right = state.occupancy(Bank::Right);
    format!(
        "{} [g={} h={} f={}] L:{}M {}C | R:{}M {}C | boat:{}",
        node.alpha_label(),
        node.g(),
        node.h(),
        node.f(),
        left.missionaries,
        left.cannibals,
        right.missionaries,
        right.cannibals,
        state.boat().name()
    )
}

/// Why there is no path, as a sentence.
#[must_use]
pub fn termination_message(termination: Termination) -> String {
    match termination {
        Termination::GoalReached { node } => format!("goal reached at node {}", node.alpha_label()),
        Termination::FrontierExhausted => "no solution: exploration exhausted".to_string(),
        Termination::Aborted { depth } => format!("search stopped by the user after {depth} levels"),
    }
}

/// Step-by-step listing of the solution path, ending with the move count.
///
/// # Errors
///
/// Propagates write errors.
pub fn write_path<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "{}", result.strategy.title())?;
    if result.path.is_empty() {
        writeln!(out, "  {}", termination_message(result.termination))?;
        return Ok(());
    }
    for (step, node) in result.path_nodes().enumerate() {
        writeln!(out, "  {step:>2}. {:<45} {}", node.label(), node.state())?;
    }
    writeln!(out, "Cost (number of moves): {}", result.move_count())
}

/// A node's summary followed by one line per child.
///
/// # Errors
///
/// Propagates write errors.
pub fn write_node_with_children<W: Write>(
    out: &mut W,
    tree: &SearchTree,
    id: NodeId,
) -> io::Result<()> {
    let Some(node) = tree.get(id) else {
        return writeln!(out, "no node {id} in this tree ({} nodes)", tree.len());
    };
    writeln!(out, "{}", node_summary(node))?;
    writeln!(out, "  via: {}", node.label())?;
    if let Some(parent) = node.parent() {
        writeln!(out, "  parent: {}", parent.alpha_label())?;
    }
    if node.children().is_empty() {
        return writeln!(out, "  (no children)");
    }
    for child in tree.children(id) {
        let marker = if child.state().is_valid() { "" } else { "  (unsafe)" };
        writeln!(out, "  -> {}{marker}", node_summary(child))?;
    }
    Ok(())
}

/// Indented pre-order listing of the subtree under `id`.
///
/// # Errors
///
/// Propagates write errors.
pub fn write_subtree<W: Write>(
    out: &mut W,
    tree: &SearchTree,
    id: NodeId,
    max_depth: Option<u32>,
) -> io::Result<()> {
    for (depth, node_id) in tree.subtree(id, max_depth) {
        let node = &tree[node_id];
        writeln!(out, "{:indent$}{}", "", node_summary(node), indent = depth as usize * 2)?;
    }
    Ok(())
}

/// What `show` prints for one node: its children, or its subtree down to
/// `depth` levels. The node itself appears once either way.
///
/// # Errors
///
/// Propagates write errors.
pub fn write_node_view<W: Write>(
    out: &mut W,
    tree: &SearchTree,
    id: NodeId,
    depth: Option<u32>,
) -> io::Result<()> {
    match depth {
        Some(depth) if tree.get(id).is_some() => write_subtree(out, tree, id, Some(depth)),
        _ => write_node_with_children(out, tree, id),
    }
}

/// Nodes at the depth a BFS level just reached.
///
/// # Errors
///
/// Propagates write errors.
pub fn write_level<W: Write>(out: &mut W, tree: &SearchTree, report: &LevelReport) -> io::Result<()> {
    writeln!(
        out,
        "Level {}: {} in frontier, {} visited, {} generated",
        report.depth, report.frontier_len, report.visited, report.generated
    )?;
    for node in tree.iter().filter(|n| n.g() == report.depth) {
        writeln!(out, "  {}  <- {}", node_summary(node), node.label())?;
    }
    Ok(())
}

/// Side-by-side table of a comparison run.
///
/// # Errors
///
/// Propagates write errors.
pub fn write_comparison<W: Write>(out: &mut W, run: &ComparisonRun) -> io::Result<()> {
    writeln!(out, "Start: {}", run.initial)?;
    writeln!(
        out,
        "{:<8} {:<20} {:>5} {:>6} {:>8} {:>5} {:>6} {:>12}",
        "strategy", "termination", "moves", "nodes", "explored", "open", "closed", "time (ms)"
    )?;
    for r in &run.results {
        writeln!(
            out,
            "{:<8} {:<20} {:>5} {:>6} {:>8} {:>5} {:>6} {:>12.3}",
            r.strategy.name(),
            r.termination.tag(),
            r.move_count(),
            r.stats.generated,
            r.stats.explored,
            r.stats.open,
            r.stats.closed,
            r.elapsed_ms_f64()
        )?;
    }
    writeln!(out, "Wall time: {:.3} ms", run.wall_time.as_secs_f64() * 1000.0)
}

/// Pauses BFS after each level and asks whether to continue.
///
/// An empty line, `y` or `yes` continues; anything else, end of input, or an
/// I/O error stops the search.
pub struct StdinGate<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinGate<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink (used by tests to inspect what was shown).
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, tree: &SearchTree, report: &LevelReport) -> io::Result<LevelDecision> {
        write_level(&mut self.output, tree, report)?;
        write!(
            self.output,
            "Continue to the next level? (Enter/yes to continue, anything else to stop): "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(LevelDecision::Abort);
        }
        let answer = line.trim().to_ascii_lowercase();
        Ok(match answer.as_str() {
            "" | "y" | "yes" => LevelDecision::Continue,
            _ => LevelDecision::Abort,
        })
    }
}

impl<R: BufRead, W: Write> LevelGate for StdinGate<R, W> {
    fn on_level(&mut self, tree: &SearchTree, report: &LevelReport) -> LevelDecision {
        match self.ask(tree, report) {
            Ok(decision) => decision,
            Err(e) => {
                log::warn!("console gate failed, stopping search: {e}");
                LevelDecision::Abort
            }
        }
    }
}
