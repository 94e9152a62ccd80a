use crate::admin_commands::AdminCommands;

use clap::Subcommand;
use vote_core::CandidateId;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account
    Signup {
        /// Full name
        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Mobile number
        #[arg(long)]
        mobile: Option<String>,

        /// Postal address
        #[arg(long)]
        address: String,

        /// Aadhar card number (login identifier)
        #[arg(long)]
        aadhar: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Account role
        #[arg(long, default_value = "voter", value_parser = ["voter", "admin"])]
        role: String,
    },

    /// Log in and remember the session
    Login {
        /// Aadhar card number
        #[arg(long)]
        aadhar: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the stored session
    Whoami,

    /// Show the logged-in user's profile
    Profile,

    /// List candidates
    Candidates,

    /// Show vote tallies per party
    Counts,

    /// Candidates, tallies and profile in one go
    Dashboard,

    /// Vote for a candidate
    Vote {
        /// Candidate ID
        candidate_id: CandidateId,
    },

    /// Change the logged-in user's password
    Password {
        /// Current password
        #[arg(long)]
        current: String,

        /// New password
        #[arg(long)]
        new: String,
    },

    /// Candidate management (admin accounts)
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
