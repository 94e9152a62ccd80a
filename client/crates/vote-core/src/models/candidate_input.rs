use serde::Serialize;

/// Body for `POST /candidate` and `PUT /candidate/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CandidateInput {
    pub name: String,
    pub party: String,
    pub age: u32,
}
