use serde::{Deserialize, Serialize};

use super::{PhysicalCondition, Symptom};

/// The full set of form field values at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub symptoms: Vec<Symptom>,
    pub physical_condition: PhysicalCondition,
    pub location: String,
}

/// Treatment plan returned by the service. Read-only to the client;
/// replaced wholesale on every successful submission, cleared only by
/// explicit reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentPlan {
    pub medical_actions: Vec<String>,
    pub location_considerations: Vec<String>,
    pub justifications: Vec<String>,
}
