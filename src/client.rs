//! HTTP client for the treatment-planning service.
//!
//! The service boundary is the [`PlanService`] trait: the session takes
//! whichever implementation it is constructed with, so the real HTTP
//! client, the offline fixture, and test doubles are interchangeable.

use serde::Deserialize;

use crate::models::{PlanRequest, TreatmentPlan};

/// Shown to the user when the service gives no usable detail of its own.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate treatment plan. Please try again.";

/// Errors from plan submission.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("service is not reachable at {0}")]
    Connection(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("http transport error: {0}")]
    Transport(String),

    #[error("service returned error (status {status})")]
    Http { status: u16, detail: Option<String> },

    #[error("malformed service response: {0}")]
    ResponseParsing(String),
}

impl ClientError {
    /// User-displayable message: the server-supplied detail when present,
    /// otherwise the generic fallback. Raw causes stay in `Display` output
    /// for the logs.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Abstraction over the treatment-planning service.
pub trait PlanService {
    /// Submits the snapshot and returns the generated plan.
    fn create_plan(&self, request: &PlanRequest) -> Result<TreatmentPlan, ClientError>;

    /// Reachability probe; returns the service greeting.
    fn health_check(&self) -> Result<String, ClientError>;
}

/// Error body the service sends with failed requests.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Greeting body from GET `<base>/`.
#[derive(Deserialize)]
struct GreetingBody {
    message: String,
}

/// HTTP client for a running treatment-planning service.
pub struct HttpPlanService {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpPlanService {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default local service with the standard timeout.
    pub fn default_local() -> Self {
        Self::new(
            crate::config::DEFAULT_BASE_URL,
            crate::config::DEFAULT_TIMEOUT_SECS,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_connect() {
            ClientError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            ClientError::Timeout(self.timeout_secs)
        } else {
            ClientError::Transport(e.to_string())
        }
    }

    fn status_error(status: u16, body: &str) -> ClientError {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.detail);
        ClientError::Http { status, detail }
    }
}

impl PlanService for HttpPlanService {
    fn create_plan(&self, request: &PlanRequest) -> Result<TreatmentPlan, ClientError> {
        let url = format!("{}/treatment-plan", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "plan request rejected");
            return Err(Self::status_error(status.as_u16(), &body));
        }

        response
            .json()
            .map_err(|e| ClientError::ResponseParsing(e.to_string()))
    }

    fn health_check(&self) -> Result<String, ClientError> {
        let url = format!("{}/", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::status_error(status.as_u16(), &body));
        }

        let parsed: GreetingBody = response
            .json()
            .map_err(|e| ClientError::ResponseParsing(e.to_string()))?;
        Ok(parsed.message)
    }
}

/// Local plan service for the offline mode and tests; never touches the
/// network. Returns the configured plan when one is set, otherwise
/// synthesizes a deterministic plan from the snapshot contents.
pub struct FixturePlanService {
    plan: Option<TreatmentPlan>,
}

impl FixturePlanService {
    pub fn new() -> Self {
        Self { plan: None }
    }

    /// Fixture that always returns the given plan.
    pub fn with_plan(plan: TreatmentPlan) -> Self {
        Self { plan: Some(plan) }
    }

    fn synthesize(request: &PlanRequest) -> TreatmentPlan {
        let mut medical_actions: Vec<String> = request
            .symptoms
            .iter()
            .map(|s| format!("Monitor \"{}\" and record any changes", s.text))
            .collect();
        medical_actions.push("Consult a clinician before acting on this plan".to_string());

        let location_considerations = if request.location.trim().is_empty() {
            vec!["No location given; consider telehealth options".to_string()]
        } else {
            vec![format!(
                "Check local availability of care near {}",
                request.location
            )]
        };

        let mut justifications =
            vec!["Generated locally without the planning service".to_string()];
        for allergy in &request.physical_condition.allergies {
            justifications.push(format!(
                "Avoids exposure to reported allergen: {}",
                allergy.text
            ));
        }

        TreatmentPlan {
            medical_actions,
            location_considerations,
            justifications,
        }
    }
}

impl Default for FixturePlanService {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanService for FixturePlanService {
    fn create_plan(&self, request: &PlanRequest) -> Result<TreatmentPlan, ClientError> {
        Ok(self
            .plan
            .clone()
            .unwrap_or_else(|| Self::synthesize(request)))
    }

    fn health_check(&self) -> Result<String, ClientError> {
        Ok("Offline fixture service".to_string())
    }
}
