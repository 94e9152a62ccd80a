use clap::Subcommand;
use vote_core::CandidateId;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List candidates
    List,

    /// Create a candidate
    Create {
        /// Candidate name
        #[arg(long)]
        name: String,

        /// Party name
        #[arg(long)]
        party: String,

        /// Candidate age
        #[arg(long)]
        age: u32,
    },

    /// Update a candidate; omitted fields keep their current value
    Update {
        /// Candidate ID
        id: CandidateId,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New party
        #[arg(long)]
        party: Option<String>,

        /// New age
        #[arg(long)]
        age: Option<u32>,
    },

    /// Delete a candidate
    Delete {
        /// Candidate ID
        id: CandidateId,
    },
}
