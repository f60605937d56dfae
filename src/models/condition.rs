use serde::{Deserialize, Serialize};

use super::Allergy;

/// Physical-condition attributes of the intake form.
///
/// Age stays a string: the service takes the entered value verbatim and
/// the form performs no coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalCondition {
    pub age: String,
    pub mobility_issues: String,
    pub allergies: Vec<Allergy>,
}
