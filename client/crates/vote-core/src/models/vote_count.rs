use serde::{Deserialize, Serialize};

/// Server-aggregated tally for one party.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteCount {
    pub party: String,
    pub vote_count: u64,
}

/// Sum of all party tallies.
pub fn total_votes(counts: &[VoteCount]) -> u64 {
    counts.iter().map(|c| c.vote_count).sum()
}
