//! Validation of the create-project form.
//!
//! The rules run in a fixed order with short-circuit on the first
//! failure: Title, then Description, then People. Only the first invalid
//! rule's message is surfaced; the remaining rules never run. (Inside a
//! single rule the checks do NOT short-circuit, see
//! `dropdeck_core::validation`.)

use dropdeck_core::ValidationRule;

/// Raw form text as typed, before any validation or conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Outcome of validating a draft: either the converted fields ready for
/// the store, or the message to surface. Consumed by exhaustive
/// matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftOutcome {
    Valid {
        title: String,
        description: String,
        people: u8,
    },
    Invalid(String),
}

pub fn validate_draft(draft: &ProjectDraft) -> DraftOutcome {
    let text_rules = [
        ValidationRule::text("Title", &draft.title)
            .required()
            .min_length(5),
        ValidationRule::text("Description", &draft.description)
            .required()
            .min_length(10),
    ];
    for rule in &text_rules {
        let outcome = rule.validate();
        if !outcome.is_valid {
            return DraftOutcome::Invalid(outcome.message);
        }
    }

    // An empty People field fails the required check before any parse,
    // keeping the message vocabulary inside the validator.
    let presence = ValidationRule::text("People", &draft.people)
        .required()
        .validate();
    if !presence.is_valid {
        return DraftOutcome::Invalid(presence.message);
    }
    let Ok(people) = draft.people.trim().parse::<i64>() else {
        return DraftOutcome::Invalid("People must be a whole number".to_string());
    };
    let outcome = ValidationRule::number("People", people)
        .required()
        .min(1)
        .max(5)
        .validate();
    if !outcome.is_valid {
        return DraftOutcome::Invalid(outcome.message);
    }

    DraftOutcome::Valid {
        title: draft.title.trim().to_string(),
        description: draft.description.trim().to_string(),
        people: people as u8,
    }
}
