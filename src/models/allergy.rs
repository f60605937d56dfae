use serde::{Deserialize, Serialize};

/// A reported allergy. Same shape and lifecycle as a symptom entry,
/// held inside the physical-condition record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allergy {
    pub id: u64,
    pub text: String,
}
