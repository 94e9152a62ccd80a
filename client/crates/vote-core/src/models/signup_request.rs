use crate::Role;

use serde::Serialize;

/// Full signup record submitted to `POST /user/signup`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub address: String,
    pub aadhar_card_number: String,
    pub password: String,
    pub role: Role,
}
