//! Comparison driver: runs several strategies from the same start state.
//!
//! In concurrent mode each strategy runs on its own scoped thread and the
//! driver joins all of them before returning, so callers only ever see a
//! complete set of results. Runs share nothing; no locks are involved.

use std::thread;
use std::time::{Duration, Instant};

use rivercross_kernel::carrier::state::RiverState;
use rivercross_search::error::SearchError;
use rivercross_search::policy::SearchPolicy;
use rivercross_search::result::SearchResult;
use rivercross_search::search::search;
use rivercross_search::strategy::StrategyKind;

/// What to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Strategies in presentation order. Duplicates are run once.
    pub strategies: Vec<StrategyKind>,
    pub initial: RiverState,
    pub policy: SearchPolicy,
    /// One thread per strategy when `true`, in order on the caller's thread
    /// otherwise.
    pub concurrent: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyKind::ALL.to_vec(),
            initial: RiverState::INITIAL,
            policy: SearchPolicy::default(),
            concurrent: true,
        }
    }
}

/// Results of one comparison, in the configured strategy order.
#[derive(Debug, Clone)]
pub struct ComparisonRun {
    pub initial: RiverState,
    pub policy: SearchPolicy,
    pub results: Vec<SearchResult>,
    /// Wall-clock time for the whole comparison, including thread startup.
    pub wall_time: Duration,
}

impl ComparisonRun {
    /// The result for `kind`, if it was part of the run.
    #[must_use]
    pub fn get(&self, kind: StrategyKind) -> Option<&SearchResult> {
        self.results.iter().find(|r| r.strategy == kind)
    }
}

/// Error during a comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// No strategy was selected.
    EmptySelection,
    /// Pre-flight search validation failed.
    Search(SearchError),
    /// A strategy thread panicked.
    WorkerPanicked { strategy: StrategyKind },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "no strategy selected"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::WorkerPanicked { strategy } => write!(f, "{strategy} worker panicked"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Run every configured strategy and collect the results.
///
/// # Errors
///
/// Returns [`RunError::EmptySelection`] for an empty strategy list,
/// [`RunError::Search`] if the policy is invalid, and
/// [`RunError::WorkerPanicked`] if a strategy thread panicked.
pub fn run_comparison(config: &RunConfig) -> Result<ComparisonRun, RunError> {
    let mut kinds: Vec<StrategyKind> = Vec::with_capacity(config.strategies.len());
    for kind in &config.strategies {
        if !kinds.contains(kind) {
            kinds.push(*kind);
        }
    }
    if kinds.is_empty() {
        return Err(RunError::EmptySelection);
    }
    config.policy.validate()?;

    log::info!(
        "running {} from {} ({})",
        kinds.iter().map(|k| k.name()).collect::<Vec<_>>().join(", "),
        config.initial,
        if config.concurrent { "concurrent" } else { "sequential" }
    );

    let started = Instant::now();
    let results = if config.concurrent {
        run_concurrent(&kinds, config.initial, &config.policy)?
    } else {
        kinds
            .iter()
            .map(|&kind| search(kind, config.initial, &config.policy))
            .collect::<Result<Vec<_>, _>>()?
    };
    let wall_time = started.elapsed();

    for result in &results {
        log::info!(
            "{}: {} moves, {} nodes, {} explored, {:.3} ms",
            result.strategy,
            result.move_count(),
            result.stats.generated,
            result.stats.explored,
            result.elapsed_ms_f64()
        );
    }
    log::info!("comparison finished in {:.3} ms", wall_time.as_secs_f64() * 1000.0);

    Ok(ComparisonRun {
        initial: config.initial,
        policy: config.policy,
        results,
        wall_time,
    })
}

fn run_concurrent(
    kinds: &[StrategyKind],
    initial: RiverState,
    policy: &SearchPolicy,
) -> Result<Vec<SearchResult>, RunError> {
    let joined = thread::scope(|scope| {
        let handles: Vec<_> = kinds
            .iter()
            .map(|&kind| (kind, scope.spawn(move || search(kind, initial, policy))))
            .collect();
        // Join every handle before looking at any outcome, so a second
        // panicking worker is not re-raised when the scope ends.
        handles
            .into_iter()
            .map(|(kind, handle)| (kind, handle.join()))
            .collect::<Vec<_>>()
    });
    collect_outcomes(joined)
}

/// Fold joined worker outcomes into results, in order. The first failure
/// wins; a panic is logged for every worker that panicked.
fn collect_outcomes<P>(
    joined: Vec<(StrategyKind, Result<Result<SearchResult, SearchError>, P>)>,
) -> Result<Vec<SearchResult>, RunError> {
    let mut results = Vec::with_capacity(joined.len());
    let mut first_error = None;
    for (kind, outcome) in joined {
        let error = match outcome {
            Ok(Ok(result)) => {
                results.push(result);
                continue;
            }
            Ok(Err(e)) => RunError::from(e),
            Err(_) => {
                log::error!("{kind} worker panicked");
                RunError::WorkerPanicked { strategy: kind }
            }
        };
        first_error.get_or_insert(error);
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(results),
    }
}
