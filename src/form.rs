//! Intake form — the editable state behind a treatment-plan request.
//!
//! Holds the symptom list, physical-condition record (including the
//! allergy list), and location, and produces the submission snapshot.
//! Entry ids come from a per-form monotonic counter shared by symptoms
//! and allergies: unique for the lifetime of the form, never reused
//! after removal.

use crate::models::{Allergy, PhysicalCondition, PlanRequest, Symptom};

/// Editable intake form state. Lives only as long as its session;
/// nothing is persisted.
#[derive(Debug, Default)]
pub struct IntakeForm {
    symptoms: Vec<Symptom>,
    physical_condition: PhysicalCondition,
    location: String,
    next_id: u64,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // ───────────────────────────────────────
    // Entry lists
    // ───────────────────────────────────────

    /// Adds a symptom. Blank or whitespace-only text is ignored.
    /// Returns the assigned id on success.
    pub fn add_symptom(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.symptoms.push(Symptom {
            id,
            text: text.to_string(),
        });
        Some(id)
    }

    /// Removes a symptom by id. An absent id is not an error.
    pub fn remove_symptom(&mut self, id: u64) {
        self.symptoms.retain(|s| s.id != id);
    }

    /// Adds an allergy to the physical-condition record. Same contract
    /// as [`add_symptom`](Self::add_symptom).
    pub fn add_allergy(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.physical_condition.allergies.push(Allergy {
            id,
            text: text.to_string(),
        });
        Some(id)
    }

    /// Removes an allergy by id. An absent id is not an error.
    pub fn remove_allergy(&mut self, id: u64) {
        self.physical_condition.allergies.retain(|a| a.id != id);
    }

    // ───────────────────────────────────────
    // Scalar fields: direct replacement, no validation or coercion
    // ───────────────────────────────────────

    pub fn set_age(&mut self, age: &str) {
        self.physical_condition.age = age.to_string();
    }

    pub fn set_mobility_issues(&mut self, text: &str) {
        self.physical_condition.mobility_issues = text.to_string();
    }

    pub fn set_location(&mut self, text: &str) {
        self.location = text.to_string();
    }

    // ───────────────────────────────────────
    // Read access
    // ───────────────────────────────────────

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn physical_condition(&self) -> &PhysicalCondition {
        &self.physical_condition
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Clones the current field values into a submission snapshot.
    pub fn snapshot(&self) -> PlanRequest {
        PlanRequest {
            symptoms: self.symptoms.clone(),
            physical_condition: self.physical_condition.clone(),
            location: self.location.clone(),
        }
    }
}
