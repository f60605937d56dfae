pub mod allergy;
pub mod condition;
pub mod plan;
pub mod symptom;

pub use allergy::Allergy;
pub use condition::PhysicalCondition;
pub use plan::{PlanRequest, TreatmentPlan};
pub use symptom::Symptom;
