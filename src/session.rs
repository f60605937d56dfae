//! Planner session — glues the intake form, the plan service, and the
//! view state together.
//!
//! One session value is one rendered form instance. The submit cycle is
//! `Idle → Submitting → {Success, Error}`; success returns to idle only
//! via explicit reset, error returns to submitting via resubmission.
//! Nothing survives the session value.

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::client::PlanService;
use crate::form::IntakeForm;
use crate::models::TreatmentPlan;

/// Where the session is in the submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Error,
}

/// A single form session bound to an injected plan service.
pub struct PlannerSession {
    id: Uuid,
    form: IntakeForm,
    service: Box<dyn PlanService>,
    phase: Phase,
    plan: Option<TreatmentPlan>,
    plan_received_at: Option<DateTime<Local>>,
    error: Option<String>,
}

impl PlannerSession {
    pub fn new(service: Box<dyn PlanService>) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, "planner session created");
        Self {
            id,
            form: IntakeForm::new(),
            service,
            phase: Phase::Idle,
            plan: None,
            plan_received_at: None,
            error: None,
        }
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut IntakeForm {
        &mut self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn plan(&self) -> Option<&TreatmentPlan> {
        self.plan.as_ref()
    }

    pub fn plan_received_at(&self) -> Option<DateTime<Local>> {
        self.plan_received_at
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a new submission may start. The session is the single
    /// caller of the plan service, so this is the one-request-in-flight
    /// guard the service contract asks of its caller.
    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Submitting
    }

    /// Submits the current snapshot. On success the plan is replaced
    /// wholesale and any prior error is cleared; on failure the error
    /// text is recorded and the prior plan is left untouched. Entered
    /// field values are never cleared by submission.
    pub fn submit(&mut self) -> Phase {
        if !self.can_submit() {
            tracing::warn!(session = %self.id, "submit ignored: request already in flight");
            return self.phase;
        }

        let snapshot = self.form.snapshot();
        self.phase = Phase::Submitting;
        self.error = None;
        // Entry text is patient intake data; log counts only.
        tracing::info!(
            session = %self.id,
            symptoms = snapshot.symptoms.len(),
            allergies = snapshot.physical_condition.allergies.len(),
            "submitting treatment-plan request"
        );

        match self.service.create_plan(&snapshot) {
            Ok(plan) => {
                self.plan = Some(plan);
                self.plan_received_at = Some(Local::now());
                self.phase = Phase::Success;
                tracing::info!(session = %self.id, "treatment plan received");
            }
            Err(e) => {
                tracing::error!(session = %self.id, error = %e, "treatment-plan request failed");
                self.error = Some(e.user_message());
                self.phase = Phase::Error;
            }
        }
        self.phase
    }

    /// Discards the current plan and error and returns to the form.
    /// Entered field values are retained.
    pub fn reset(&mut self) {
        self.plan = None;
        self.plan_received_at = None;
        self.error = None;
        self.phase = Phase::Idle;
        tracing::debug!(session = %self.id, "session reset");
    }
}
