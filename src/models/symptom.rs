use serde::{Deserialize, Serialize};

/// A single reported symptom. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: u64,
    pub text: String,
}
