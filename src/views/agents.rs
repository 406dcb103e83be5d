//! Agent roster shaping.

use crate::client::query::StatusFilter;
use crate::client::types::{Agent, AgentStatus};

/// Filter a roster by status and case-insensitive name search.
///
/// `StatusFilter::All` short-circuits status filtering and an empty search
/// matches every agent. The semantics are identical to the server-side
/// filter, so applying this over an already server-filtered set gives the
/// same result as either layer alone.
pub fn filter_agents<'a>(
    agents: &'a [Agent],
    status: StatusFilter,
    search: &str,
) -> Vec<&'a Agent> {
    let needle = search.to_lowercase();
    agents
        .iter()
        .filter(|a| status.matches(a.status))
        .filter(|a| needle.is_empty() || a.name.to_lowercase().contains(&needle))
        .collect()
}

/// Count of agents currently in the active state.
pub fn active_count(agents: &[Agent]) -> usize {
    agents
        .iter()
        .filter(|a| a.status == AgentStatus::Active)
        .count()
}
