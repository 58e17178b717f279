use super::ast::{Entry, Operator, Value};
use serde::Serialize;

/// Outcome of an advisory operator/value check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Validation {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn fail(error: String) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }
}

/// Checks whether `value` suits `operator`. Pass `Value::Undefined` for "no value".
///
/// Nothing here is enforced by the builder; callers decide what to do with
/// the result.
pub fn validate_operator(operator: Operator, value: &Value) -> Validation {
    if operator.is_null_check() && !value.is_undefined() {
        return Validation::fail(format!("Operator '{}' should not have a value", operator));
    }

    if operator.is_range() && !matches!(value, Value::Array(items) if items.len() == 2) {
        return Validation::fail(format!(
            "Operator '{}' requires an array with exactly 2 values",
            operator
        ));
    }

    if operator.is_set() && !matches!(value, Value::Array(_) | Value::Expression(_)) {
        return Validation::fail(format!("Operator '{}' requires an array value", operator));
    }

    Validation::ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub field: String,
    pub error: String,
}

/// Runs [`validate_operator`] over every condition, descending into groups.
pub fn check_entries(entries: &[Entry]) -> Vec<Problem> {
    let mut problems = Vec::new();
    collect_problems(entries, &mut problems);
    problems
}

fn collect_problems(entries: &[Entry], problems: &mut Vec<Problem>) {
    for entry in entries {
        match entry {
            Entry::Connective(_) => {}
            Entry::Group { body } => collect_problems(body, problems),
            Entry::Condition(cond) => {
                if let Some(error) = validate_operator(cond.operator, &cond.value).error {
                    problems.push(Problem {
                        field: cond.field.clone(),
                        error,
                    });
                }
            }
        }
    }
}
