pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::admin_form_state::{AdminFormState, FormMode};
pub use models::candidate::{Candidate, CandidateId};
pub use models::candidate_input::CandidateInput;
pub use models::credentials::Credentials;
pub use models::login_response::LoginResponse;
pub use models::password_change::PasswordChange;
pub use models::role::Role;
pub use models::session::Session;
pub use models::signup_request::SignupRequest;
pub use models::user_profile::{ProfileResponse, UserProfile};
pub use models::vote_count::{VoteCount, total_votes};
