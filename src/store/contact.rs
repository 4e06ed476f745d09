// Contact record types

use serde::{Deserialize, Serialize};

use super::StoreError;

/// A stored contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Request body for create and update
///
/// A field that is absent, `null` or empty counts as not provided.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactInput {
    /// Split into the three fields, failing if any is not provided
    pub(super) fn into_required(self) -> Result<(String, String, String), StoreError> {
        match (provided(self.name), provided(self.email), provided(self.phone)) {
            (Some(name), Some(email), Some(phone)) => Ok((name, email, phone)),
            _ => Err(StoreError::MissingFields),
        }
    }
}

impl Contact {
    /// Overwrite fields with the provided values, keep the rest
    pub(super) fn apply(&mut self, input: ContactInput) {
        if let Some(name) = provided(input.name) {
            self.name = name;
        }
        if let Some(email) = provided(input.email) {
            self.email = email;
        }
        if let Some(phone) = provided(input.phone) {
            self.phone = phone;
        }
    }
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
