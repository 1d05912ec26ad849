//! Search entry point.

use rivercross_kernel::carrier::state::RiverState;

use crate::error::SearchError;
use crate::policy::SearchPolicy;
use crate::result::SearchResult;
use crate::strategy::{astar, bfs, dfs, greedy, StrategyKind};

/// Run one strategy from `initial` to completion.
///
/// Every runtime outcome, including "no solution", is an `Ok` result; check
/// [`SearchResult::termination`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation. No
/// search step is taken in that case.
pub fn search(
    kind: StrategyKind,
    initial: RiverState,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;
    let result = match kind {
        StrategyKind::BreadthFirst => bfs::run(initial),
        StrategyKind::DepthFirst => dfs::run(initial),
        StrategyKind::Greedy => greedy::run(initial, policy),
        StrategyKind::AStar => astar::run(initial, policy),
    };
    Ok(result)
}
