//! Result rendering — session state to display text.
//!
//! The renderer is pure: it maps the session's phase and the form
//! contents to lines of text, so the terminal front end and the tests
//! share the exact same output. The three result states are mutually
//! exclusive: idle shows nothing, error shows the message and no plan,
//! success shows the plan.

use chrono::{DateTime, Local};

use crate::form::IntakeForm;
use crate::models::TreatmentPlan;
use crate::session::{Phase, PlannerSession};

/// Shown while a submission is outstanding (Rich mode only).
pub const BUSY_MESSAGE: &str = "Generating treatment plan...";

/// How much decoration the rendered output carries.
///
/// `Rich` is the full presentation: headers, busy/error notices,
/// empty-state placeholders, a generated-at stamp. `Minimal` emits plain
/// lists with no busy or error decoration, for piping into other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Rich,
    Minimal,
}

// ---------------------------------------------------------------------------
// Result view
// ---------------------------------------------------------------------------

/// Renders the session's result area for its current phase.
pub fn render(session: &PlannerSession, mode: DisplayMode) -> String {
    match session.phase() {
        Phase::Idle => String::new(),
        Phase::Submitting => match mode {
            DisplayMode::Rich => format!("{BUSY_MESSAGE}\n"),
            DisplayMode::Minimal => String::new(),
        },
        Phase::Error => match mode {
            DisplayMode::Rich => {
                format!("Error: {}\n", session.error().unwrap_or_default())
            }
            DisplayMode::Minimal => String::new(),
        },
        Phase::Success => session
            .plan()
            .map(|plan| render_plan(plan, session.plan_received_at(), mode))
            .unwrap_or_default(),
    }
}

/// Renders a treatment plan as three enumerated sections. Empty lists
/// render as empty sections, with no placeholder.
pub fn render_plan(
    plan: &TreatmentPlan,
    received_at: Option<DateTime<Local>>,
    mode: DisplayMode,
) -> String {
    let mut out = String::new();
    if mode == DisplayMode::Rich {
        out.push_str("Your Treatment Plan\n");
        if let Some(at) = received_at {
            out.push_str(&format!("Generated {}\n", at.format("%Y-%m-%d %H:%M")));
        }
        out.push('\n');
    }
    push_section(&mut out, "Medical Actions", &plan.medical_actions, mode);
    push_section(
        &mut out,
        "Location Considerations",
        &plan.location_considerations,
        mode,
    );
    push_section(&mut out, "Justifications", &plan.justifications, mode);
    out
}

fn push_section(out: &mut String, title: &str, items: &[String], mode: DisplayMode) {
    if mode == DisplayMode::Rich {
        out.push_str(title);
        out.push('\n');
    }
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, item));
    }
    if mode == DisplayMode::Rich {
        out.push('\n');
    }
}

// ---------------------------------------------------------------------------
// Form view
// ---------------------------------------------------------------------------

/// Renders the current form contents. Rich mode shows empty-state
/// placeholders for the entry lists.
pub fn render_form(form: &IntakeForm, mode: DisplayMode) -> String {
    let mut out = String::new();

    out.push_str("Symptoms\n");
    if form.symptoms().is_empty() {
        if mode == DisplayMode::Rich {
            out.push_str("  No symptoms added yet\n");
        }
    } else {
        for symptom in form.symptoms() {
            out.push_str(&format!("  [{}] {}\n", symptom.id, symptom.text));
        }
    }

    let condition = form.physical_condition();
    out.push_str(&format!("Age: {}\n", condition.age));
    out.push_str(&format!("Mobility issues: {}\n", condition.mobility_issues));

    out.push_str("Allergies\n");
    if condition.allergies.is_empty() {
        if mode == DisplayMode::Rich {
            out.push_str("  No allergies added yet\n");
        }
    } else {
        for allergy in &condition.allergies {
            out.push_str(&format!("  [{}] {}\n", allergy.id, allergy.text));
        }
    }

    out.push_str(&format!("Location: {}\n", form.location()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FixturePlanService;

    fn plan_abc() -> TreatmentPlan {
        TreatmentPlan {
            medical_actions: vec!["A".into()],
            location_considerations: vec!["B".into()],
            justifications: vec!["C".into()],
        }
    }

    fn successful_session() -> PlannerSession {
        let mut session =
            PlannerSession::new(Box::new(FixturePlanService::with_plan(plan_abc())));
        session.submit();
        session
    }

    // ───────────────────────────────────────
    // Result states
    // ───────────────────────────────────────

    #[test]
    fn idle_renders_nothing() {
        let session = PlannerSession::new(Box::new(FixturePlanService::new()));
        assert_eq!(render(&session, DisplayMode::Rich), "");
        assert_eq!(render(&session, DisplayMode::Minimal), "");
    }

    #[test]
    fn success_renders_one_item_per_section_in_order() {
        let session = successful_session();
        let out = render(&session, DisplayMode::Rich);

        assert!(out.contains("Medical Actions\n  1. A\n"));
        assert!(out.contains("Location Considerations\n  1. B\n"));
        assert!(out.contains("Justifications\n  1. C\n"));

        let actions = out.find("Medical Actions").unwrap();
        let locations = out.find("Location Considerations").unwrap();
        let justifications = out.find("Justifications").unwrap();
        assert!(actions < locations && locations < justifications);
    }

    #[test]
    fn success_in_minimal_mode_has_items_but_no_headers() {
        let session = successful_session();
        let out = render(&session, DisplayMode::Minimal);
        assert_eq!(out, "  1. A\n  1. B\n  1. C\n");
    }

    #[test]
    fn rich_success_carries_generated_stamp() {
        let session = successful_session();
        let out = render(&session, DisplayMode::Rich);
        assert!(out.starts_with("Your Treatment Plan\nGenerated "));
    }

    #[test]
    fn multiple_items_are_enumerated_in_order() {
        let plan = TreatmentPlan {
            medical_actions: vec!["first".into(), "second".into()],
            location_considerations: vec![],
            justifications: vec![],
        };
        let out = render_plan(&plan, None, DisplayMode::Rich);
        assert!(out.contains("  1. first\n  2. second\n"));
    }

    #[test]
    fn empty_lists_render_as_empty_sections() {
        let out = render_plan(&TreatmentPlan::default(), None, DisplayMode::Rich);
        assert!(out.contains("Medical Actions\n\n"));
        assert!(out.contains("Justifications\n\n"));
        assert!(!out.contains("1."));

        let out = render_plan(&TreatmentPlan::default(), None, DisplayMode::Minimal);
        assert_eq!(out, "");
    }

    #[test]
    fn error_is_shown_in_rich_mode_only() {
        struct AlwaysFails;
        impl crate::client::PlanService for AlwaysFails {
            fn create_plan(
                &self,
                _request: &crate::models::PlanRequest,
            ) -> Result<TreatmentPlan, crate::client::ClientError> {
                Err(crate::client::ClientError::Transport("boom".into()))
            }
            fn health_check(&self) -> Result<String, crate::client::ClientError> {
                Ok("test".into())
            }
        }

        let mut session = PlannerSession::new(Box::new(AlwaysFails));
        session.submit();

        let rich = render(&session, DisplayMode::Rich);
        assert!(rich.starts_with("Error: "));
        assert!(rich.contains(crate::client::GENERIC_FAILURE_MESSAGE));
        assert_eq!(render(&session, DisplayMode::Minimal), "");
    }

    // ───────────────────────────────────────
    // Form view
    // ───────────────────────────────────────

    #[test]
    fn empty_form_shows_placeholders_in_rich_mode() {
        let form = IntakeForm::new();
        let out = render_form(&form, DisplayMode::Rich);
        assert!(out.contains("No symptoms added yet"));
        assert!(out.contains("No allergies added yet"));

        let out = render_form(&form, DisplayMode::Minimal);
        assert!(!out.contains("No symptoms added yet"));
        assert!(!out.contains("No allergies added yet"));
    }

    #[test]
    fn form_entries_render_with_their_ids() {
        let mut form = IntakeForm::new();
        let id = form.add_symptom("fever").unwrap();
        let out = render_form(&form, DisplayMode::Rich);
        assert!(out.contains(&format!("[{id}] fever")));
    }
}
