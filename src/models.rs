use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The record served at the todo endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn from_payload(payload: &Value) -> Option<Self> {
        Self::deserialize(payload).ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Decoded body of a 200 response.
    Data(Value),
    /// Any other status code.
    Failure(u16),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Data(payload) => write!(f, "Данные: {}", payload),
            Outcome::Failure(status) => write!(f, "Ошибка: {}", status),
        }
    }
}
