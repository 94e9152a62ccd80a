use serde::Serialize;

/// Login body. Only ever built for a single request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub aadhar_card_number: String,
    pub password: String,
}

impl Credentials {
    pub fn new<S: Into<String>, P: Into<String>>(aadhar_card_number: S, password: P) -> Self {
        Self {
            aadhar_card_number: aadhar_card_number.into(),
            password: password.into(),
        }
    }
}
