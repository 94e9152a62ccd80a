pub mod admin_form_state;
pub mod candidate;
pub mod candidate_input;
pub mod credentials;
pub mod login_response;
pub mod password_change;
pub mod role;
pub mod session;
pub mod signup_request;
pub mod user_profile;
pub mod vote_count;
