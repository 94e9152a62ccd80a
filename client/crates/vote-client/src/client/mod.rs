pub(crate) mod api_client;
pub(crate) mod error;
pub(crate) mod payload;

pub use api_client::ApiClient;
pub use error::{ClientError, GENERIC_ERROR_MESSAGE, Result as ClientResult};
pub use payload::{candidates_from_value, vote_counts_from_value};
