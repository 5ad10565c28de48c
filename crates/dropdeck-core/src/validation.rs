//! Declarative field validation.
//!
//! A [`ValidationRule`] pairs a labeled value with optional constraints.
//! Checks run in a fixed order and do not short-circuit: a later failing
//! check overwrites the message of an earlier one, so only the last
//! failing check's message is surfaced. Callers that want first-failure
//! semantics compose rules themselves and stop at the first invalid
//! outcome.

/// The value under validation. Length constraints apply to text,
/// range constraints to numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

#[derive(Debug, Clone)]
pub struct ValidationRule<'a> {
    pub field: &'a str,
    pub value: FieldValue<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> ValidationRule<'a> {
    pub fn text(field: &'a str, value: &'a str) -> Self {
        Self::new(field, FieldValue::Text(value))
    }

    pub fn number(field: &'a str, value: i64) -> Self {
        Self::new(field, FieldValue::Number(value))
    }

    fn new(field: &'a str, value: FieldValue<'a>) -> Self {
        Self {
            field,
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn min(mut self, bound: i64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: i64) -> Self {
        self.max = Some(bound);
        self
    }

    pub fn validate(&self) -> ValidationOutcome {
        validate(self)
    }
}

/// Result of evaluating a rule. An empty message accompanies a valid
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    fn ok() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    fn fail(&mut self, message: String) {
        self.is_valid = false;
        self.message = message;
    }
}

/// Evaluate a rule against its constraints.
///
/// Order: required, max_length, min_length (text), then max, min
/// (numeric). Every applicable check runs; the last failure owns the
/// message.
pub fn validate(rule: &ValidationRule) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::ok();

    if rule.required {
        let present = match rule.value {
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Number(_) => true,
        };
        if !present {
            outcome.fail(format!("{} is required", rule.field));
        }
    }

    if let FieldValue::Text(text) = rule.value {
        let length = text.chars().count();
        if let Some(max) = rule.max_length {
            if length > max {
                outcome.fail(format!(
                    "{} must be at most {} characters",
                    rule.field, max
                ));
            }
        }
        if let Some(min) = rule.min_length {
            if length < min {
                outcome.fail(format!(
                    "{} must be at least {} characters",
                    rule.field, min
                ));
            }
        }
    }

    if let FieldValue::Number(number) = rule.value {
        if let Some(max) = rule.max {
            if number > max {
                outcome.fail(format!("{} must be at most {}", rule.field, max));
            }
        }
        if let Some(min) = rule.min {
            if number < min {
                outcome.fail(format!("{} must be at least {}", rule.field, min));
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_constraints_is_valid() {
        let outcome = ValidationRule::text("Title", "anything").validate();
        assert!(outcome.is_valid);
        assert_eq!(outcome.message, "");
    }

    #[test]
    fn test_required_empty_text_fails() {
        let outcome = ValidationRule::text("Title", "").required().validate();
        assert!(!outcome.is_valid);
        assert!(outcome.message.contains("Title"));
        assert!(outcome.message.contains("required"));
    }

    #[test]
    fn test_required_whitespace_only_fails() {
        let outcome = ValidationRule::text("Title", "   \t").required().validate();
        assert!(!outcome.is_valid);
        assert!(outcome.message.contains("required"));
    }

    #[test]
    fn test_required_number_always_present() {
        let outcome = ValidationRule::number("People", 0).required().validate();
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_min_length_failure_cites_bound() {
        let outcome = ValidationRule::text("Title", "abcd")
            .min_length(5)
            .validate();
        assert!(!outcome.is_valid);
        assert!(outcome.message.contains("at least 5"));
    }

    #[test]
    fn test_min_length_met_is_valid() {
        let outcome = ValidationRule::text("Title", "abcde")
            .min_length(5)
            .validate();
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_max_length_failure() {
        let outcome = ValidationRule::text("Title", "abcdef")
            .max_length(3)
            .validate();
        assert!(!outcome.is_valid);
        assert!(outcome.message.contains("at most 3"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let outcome = ValidationRule::text("Title", "\u{00e9}\u{00e9}\u{00e9}\u{00e9}\u{00e9}")
            .min_length(5)
            .validate();
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_max_bound_failure() {
        let outcome = ValidationRule::number("People", 6)
            .min(1)
            .max(5)
            .validate();
        assert!(!outcome.is_valid);
        assert!(outcome.message.contains("at most 5"));
    }

    #[test]
    fn test_min_bound_failure() {
        let outcome = ValidationRule::number("People", 0)
            .min(1)
            .max(5)
            .validate();
        assert!(!outcome.is_valid);
        assert!(outcome.message.contains("at least 1"));
    }

    #[test]
    fn test_in_range_is_valid() {
        let outcome = ValidationRule::number("People", 3)
            .required()
            .min(1)
            .max(5)
            .validate();
        assert!(outcome.is_valid);
        assert_eq!(outcome.message, "");
    }

    // The checks do not short-circuit: when both required and min_length
    // fail on an empty value, min_length runs later and owns the message.
    #[test]
    fn test_last_failing_check_owns_message() {
        let outcome = ValidationRule::text("Title", "")
            .required()
            .min_length(5)
            .validate();
        assert!(!outcome.is_valid);
        assert!(outcome.message.contains("at least 5"));
        assert!(!outcome.message.contains("required"));
    }

    // max_length runs before min_length, so min_length wins the message
    // when both fail (possible with inverted bounds).
    #[test]
    fn test_min_length_checked_after_max_length() {
        let outcome = ValidationRule::text("Title", "abc")
            .max_length(2)
            .min_length(10)
            .validate();
        assert!(!outcome.is_valid);
        assert!(outcome.message.contains("at least 10"));
    }

    #[test]
    fn test_min_checked_after_max() {
        let outcome = ValidationRule::number("People", 7)
            .max(5)
            .min(10)
            .validate();
        assert!(!outcome.is_valid);
        assert!(outcome.message.contains("at least 10"));
    }

    #[test]
    fn test_free_function_matches_method() {
        let rule = ValidationRule::text("Description", "long enough text")
            .required()
            .min_length(10);
        assert_eq!(validate(&rule), rule.validate());
    }
}
