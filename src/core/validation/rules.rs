//! Reusable field rules for building validators
//!
//! A [`RuleSet`] runs per-field checks against a decoded JSON body and
//! accumulates the failures into the field-error mapping returned by
//! 400 responses. These rules cover the common cases; validators are
//! free to add arbitrary checks of their own.

use crate::core::validator::FieldErrors;
use serde_json::Value;

/// One check over a named field of the request body
pub type Rule = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Rule: field must be present and not null
pub fn required() -> Rule {
    Box::new(|field: &str, value: &Value| {
        if value.is_null() {
            Err(format!("The '{}' field is required.", field))
        } else {
            Ok(())
        }
    })
}

/// Rule: string length must be within range (non-strings pass, another
/// rule owns the type check)
pub fn string_length(min: usize, max: usize) -> Rule {
    Box::new(move |field: &str, value: &Value| {
        let Some(s) = value.as_str() else {
            return Ok(());
        };
        let len = s.chars().count();
        if len < min {
            Err(format!(
                "'{}' must be at least {} characters (currently {}).",
                field, min, len
            ))
        } else if len > max {
            Err(format!(
                "'{}' must not exceed {} characters (currently {}).",
                field, max, len
            ))
        } else {
            Ok(())
        }
    })
}

/// Rule: number must be strictly positive
pub fn positive() -> Rule {
    Box::new(|field: &str, value: &Value| {
        let Some(num) = value.as_f64() else {
            return Ok(());
        };
        if num <= 0.0 {
            Err(format!("'{}' must be positive (value: {}).", field, num))
        } else {
            Ok(())
        }
    })
}

/// Rule: string value must be one of the allowed choices
pub fn in_list(allowed: Vec<String>) -> Rule {
    Box::new(move |field: &str, value: &Value| {
        let Some(s) = value.as_str() else {
            return Ok(());
        };
        if allowed.iter().any(|choice| choice == s) {
            Ok(())
        } else {
            Err(format!(
                "'{}' must be one of {:?} (value: {}).",
                field, allowed, s
            ))
        }
    })
}

/// A named collection of field rules
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<(String, Rule)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule for a field; fields may carry several rules
    pub fn rule(mut self, field: &str, rule: Rule) -> Self {
        self.rules.push((field.to_string(), rule));
        self
    }

    /// Run every rule against the body, collecting all failures.
    ///
    /// Absent fields are checked as JSON null, so `required` fires for
    /// both missing and explicitly null values.
    pub fn check(&self, body: &Value) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (field, rule) in &self.rules {
            let value = body.get(field).cloned().unwrap_or(Value::Null);
            if let Err(message) = rule(field, &value) {
                errors.entry(field.clone()).or_default().push(message);
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_rejects_missing_and_null() {
        let rules = RuleSet::new().rule("username", required());

        assert!(rules.check(&json!({})).contains_key("username"));
        assert!(rules.check(&json!({"username": null})).contains_key("username"));
        assert!(rules.check(&json!({"username": "x"})).is_empty());
    }

    #[test]
    fn test_string_length_bounds() {
        let rules = RuleSet::new().rule("username", string_length(2, 5));

        assert!(rules.check(&json!({"username": "a"})).contains_key("username"));
        assert!(rules.check(&json!({"username": "toolong"})).contains_key("username"));
        assert!(rules.check(&json!({"username": "ok"})).is_empty());
    }

    #[test]
    fn test_positive() {
        let rules = RuleSet::new().rule("age", positive());

        assert!(rules.check(&json!({"age": -1})).contains_key("age"));
        assert!(rules.check(&json!({"age": 0})).contains_key("age"));
        assert!(rules.check(&json!({"age": 30})).is_empty());
    }

    #[test]
    fn test_in_list() {
        let rules = RuleSet::new().rule(
            "status",
            in_list(vec!["active".to_string(), "inactive".to_string()]),
        );

        assert!(rules.check(&json!({"status": "archived"})).contains_key("status"));
        assert!(rules.check(&json!({"status": "active"})).is_empty());
    }

    #[test]
    fn test_multiple_rules_accumulate() {
        let rules = RuleSet::new()
            .rule("username", required())
            .rule("username", string_length(3, 30))
            .rule("age", positive());

        let errors = rules.check(&json!({"username": "ab", "age": -4}));
        assert_eq!(errors.get("username").map(Vec::len), Some(1));
        assert_eq!(errors.get("age").map(Vec::len), Some(1));
    }
}
