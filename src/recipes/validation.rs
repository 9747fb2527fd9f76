// ABOUTME: Declarative field constraints and the single-pass validator for recipe submissions
// ABOUTME: Accumulates every violation and produces a normalized RecipeSubmission on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Submission Validation
//!
//! Field rules live in two tables, [`RECIPE_SCHEMA`] and [`INGREDIENT_SCHEMA`].
//! [`validate_submission`] walks them once, collecting every violation rather
//! than stopping at the first, and either returns the whole list or a fully
//! coerced [`RecipeSubmission`].
//!
//! Rules applied to each field, in order, with the first failure winning:
//! type (with numeric-string coercion), emptiness, then bounds. Keys outside
//! the table are reported as `whitelist` violations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

use super::models::{Ingredient, RecipeSubmission};
use crate::constants::recipe_limits::{
    DESCRIPTION_MAX_LEN, DESCRIPTION_MIN_LEN, MIN_INGREDIENTS, MIN_INSTRUCTIONS, MIN_POSITIVE_INT,
    MIN_QUANTITY, TITLE_MAX_LEN, TITLE_MIN_LEN,
};
use crate::errors::{details_from, AppError};

/// Pseudo-field used when the payload itself is not an object
pub const BODY_FIELD: &str = "body";

/// Machine-readable kind of a failed constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKind {
    /// Key is not part of the accepted field set
    Whitelist,
    /// Value must be a JSON object
    IsObject,
    /// Value must be a string
    IsString,
    /// String or array element must not be empty
    IsNotEmpty,
    /// String shorter than the minimum length
    MinLength,
    /// String longer than the maximum length
    MaxLength,
    /// Value must be an array
    IsArray,
    /// Array has fewer elements than required
    ArrayMinSize,
    /// Value must be an integer (or an integral numeric string)
    IsInt,
    /// Value must be a finite number (or a numeric string)
    IsNumber,
    /// Number below the minimum
    Min,
}

/// A single failed constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Top-level field the violation belongs to
    pub field: String,
    /// Which constraint failed
    pub constraint: ConstraintKind,
    /// Human-readable explanation, including the full path for nested values
    pub message: String,
}

impl Violation {
    /// Create a violation
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        constraint: ConstraintKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            constraint,
            message: message.into(),
        }
    }
}

/// Every violation found in a rejected submission, in report order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("recipe submission failed validation with {} violation(s)", .violations.len())]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// Violations in report order
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume into the violation list
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Distinct field names, in first-seen order
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for violation in &self.violations {
            if !fields.contains(&violation.field.as_str()) {
                fields.push(&violation.field);
            }
        }
        fields
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::invalid_input(message)
            .with_details(details_from([("violations", json!(errors.violations))]))
    }
}

/// Constraint shape of a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// String with a length range counted in characters
    Text {
        /// Minimum length
        min_len: usize,
        /// Maximum length, if bounded
        max_len: Option<usize>,
    },
    /// Integer with a lower bound
    Integer {
        /// Smallest accepted value
        min: i64,
    },
    /// Finite number with a lower bound
    Number {
        /// Smallest accepted value
        min: f64,
    },
    /// Array of objects checked against [`INGREDIENT_SCHEMA`]
    Ingredients {
        /// Minimum element count
        min_items: usize,
    },
    /// Array of non-empty strings
    Instructions {
        /// Minimum element count
        min_items: usize,
    },
}

/// One row of a constraint table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Wire name of the field
    pub name: &'static str,
    /// Constraint shape
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn text(name: &'static str, min_len: usize, max_len: Option<usize>) -> Self {
        Self {
            name,
            kind: FieldKind::Text { min_len, max_len },
        }
    }

    const fn integer(name: &'static str, min: i64) -> Self {
        Self {
            name,
            kind: FieldKind::Integer { min },
        }
    }
}

/// Accepted top-level fields, in report order
pub const RECIPE_SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("title", TITLE_MIN_LEN, Some(TITLE_MAX_LEN)),
    FieldSpec::text("description", DESCRIPTION_MIN_LEN, Some(DESCRIPTION_MAX_LEN)),
    FieldSpec {
        name: "ingredients",
        kind: FieldKind::Ingredients {
            min_items: MIN_INGREDIENTS,
        },
    },
    FieldSpec {
        name: "instructions",
        kind: FieldKind::Instructions {
            min_items: MIN_INSTRUCTIONS,
        },
    },
    FieldSpec::integer("prepTimeMinutes", MIN_POSITIVE_INT),
    FieldSpec::integer("cookTimeMinutes", MIN_POSITIVE_INT),
    FieldSpec::integer("servings", MIN_POSITIVE_INT),
];

/// Accepted ingredient fields, in report order
pub const INGREDIENT_SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("name", 1, None),
    FieldSpec {
        name: "quantity",
        kind: FieldKind::Number { min: MIN_QUANTITY },
    },
    FieldSpec::text("unit", 1, None),
];

/// Validate and normalize a raw submission payload
///
/// # Errors
///
/// Returns every violated constraint when the payload is not a valid recipe
pub fn validate_submission(payload: &Value) -> Result<RecipeSubmission, ValidationErrors> {
    let Value::Object(object) = payload else {
        return Err(ValidationErrors::single(Violation::new(
            BODY_FIELD,
            ConstraintKind::IsObject,
            "request body must be a JSON object",
        )));
    };

    let mut validator = Validator::default();
    let mut fields = validator.check_object(object, RECIPE_SCHEMA, "", None);
    if !validator.violations.is_empty() {
        return Err(ValidationErrors {
            violations: validator.violations,
        });
    }

    submission_from(&mut fields).ok_or_else(|| {
        ValidationErrors::single(Violation::new(
            BODY_FIELD,
            ConstraintKind::IsObject,
            "request body does not describe a recipe",
        ))
    })
}

/// A field value after coercion
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Ingredients(Vec<Ingredient>),
    Instructions(Vec<String>),
}

type Fields = HashMap<&'static str, FieldValue>;

#[derive(Default)]
struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    fn reject(&mut self, field: &str, constraint: ConstraintKind, message: String) {
        self.violations.push(Violation::new(field, constraint, message));
    }

    /// Check `object` against `schema`
    ///
    /// `prefix` is prepended to names in messages (`ingredients.0.` for nested
    /// objects). `owner` overrides the reported field for nested objects.
    fn check_object(
        &mut self,
        object: &Map<String, Value>,
        schema: &[FieldSpec],
        prefix: &str,
        owner: Option<&str>,
    ) -> Fields {
        for key in object.keys() {
            if !schema.iter().any(|spec| spec.name == key.as_str()) {
                self.reject(
                    owner.unwrap_or(key),
                    ConstraintKind::Whitelist,
                    format!("property {prefix}{key} should not exist"),
                );
            }
        }

        let mut fields = Fields::new();
        for spec in schema {
            let label = format!("{prefix}{}", spec.name);
            let field = owner.unwrap_or(spec.name);
            let value = object.get(spec.name);
            let checked = match spec.kind {
                FieldKind::Text { min_len, max_len } => {
                    self.check_text(value, field, &label, min_len, max_len)
                }
                FieldKind::Integer { min } => self.check_integer(value, field, &label, min),
                FieldKind::Number { min } => self.check_number(value, field, &label, min),
                FieldKind::Ingredients { min_items } => {
                    self.check_ingredients(value, field, &label, min_items)
                }
                FieldKind::Instructions { min_items } => {
                    self.check_instructions(value, field, &label, min_items)
                }
            };
            if let Some(checked) = checked {
                fields.insert(spec.name, checked);
            }
        }
        fields
    }

    fn check_text(
        &mut self,
        value: Option<&Value>,
        field: &str,
        label: &str,
        min_len: usize,
        max_len: Option<usize>,
    ) -> Option<FieldValue> {
        let Some(Value::String(text)) = value else {
            self.reject(field, ConstraintKind::IsString, format!("{label} must be a string"));
            return None;
        };

        let length = text.chars().count();
        if length == 0 {
            self.reject(field, ConstraintKind::IsNotEmpty, format!("{label} should not be empty"));
            return None;
        }
        if length < min_len {
            self.reject(
                field,
                ConstraintKind::MinLength,
                format!("{label} must be longer than or equal to {min_len} characters"),
            );
            return None;
        }
        if let Some(max) = max_len.filter(|max| length > *max) {
            self.reject(
                field,
                ConstraintKind::MaxLength,
                format!("{label} must be shorter than or equal to {max} characters"),
            );
            return None;
        }
        Some(FieldValue::Text(text.clone()))
    }

    fn check_integer(
        &mut self,
        value: Option<&Value>,
        field: &str,
        label: &str,
        min: i64,
    ) -> Option<FieldValue> {
        let Some(number) = value.and_then(coerce_integer) else {
            self.reject(field, ConstraintKind::IsInt, format!("{label} must be an integer number"));
            return None;
        };
        if number < min {
            self.reject(field, ConstraintKind::Min, format!("{label} must not be less than {min}"));
            return None;
        }
        Some(FieldValue::Integer(number))
    }

    fn check_number(
        &mut self,
        value: Option<&Value>,
        field: &str,
        label: &str,
        min: f64,
    ) -> Option<FieldValue> {
        let Some(number) = value.and_then(coerce_number) else {
            self.reject(
                field,
                ConstraintKind::IsNumber,
                format!("{label} must be a number conforming to the specified constraints"),
            );
            return None;
        };
        if number < min {
            self.reject(field, ConstraintKind::Min, format!("{label} must not be less than {min}"));
            return None;
        }
        Some(FieldValue::Number(number))
    }

    fn check_ingredients(
        &mut self,
        value: Option<&Value>,
        field: &str,
        label: &str,
        min_items: usize,
    ) -> Option<FieldValue> {
        let Some(Value::Array(items)) = value else {
            self.reject(field, ConstraintKind::IsArray, format!("{label} must be an array"));
            return None;
        };
        if items.len() < min_items {
            self.reject(
                field,
                ConstraintKind::ArrayMinSize,
                format!("{label} must contain at least {min_items} elements"),
            );
            return None;
        }

        let before = self.violations.len();
        let mut ingredients = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let Value::Object(object) = item else {
                self.reject(
                    field,
                    ConstraintKind::IsObject,
                    format!("{label}.{index} must be an object"),
                );
                continue;
            };
            let prefix = format!("{label}.{index}.");
            let mut parts = self.check_object(object, INGREDIENT_SCHEMA, &prefix, Some(field));
            if let Some(ingredient) = ingredient_from(&mut parts) {
                ingredients.push(ingredient);
            }
        }

        (self.violations.len() == before && ingredients.len() == items.len())
            .then_some(FieldValue::Ingredients(ingredients))
    }

    fn check_instructions(
        &mut self,
        value: Option<&Value>,
        field: &str,
        label: &str,
        min_items: usize,
    ) -> Option<FieldValue> {
        let Some(Value::Array(items)) = value else {
            self.reject(field, ConstraintKind::IsArray, format!("{label} must be an array"));
            return None;
        };
        if items.len() < min_items {
            self.reject(
                field,
                ConstraintKind::ArrayMinSize,
                format!("{label} must contain at least {min_items} elements"),
            );
            return None;
        }

        let steps: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
        let mut valid = true;
        if steps.len() != items.len() {
            self.reject(
                field,
                ConstraintKind::IsString,
                format!("each value in {label} must be a string"),
            );
            valid = false;
        }
        if steps.iter().any(|step| step.is_empty()) {
            self.reject(
                field,
                ConstraintKind::IsNotEmpty,
                format!("each value in {label} should not be empty"),
            );
            valid = false;
        }

        valid.then(|| FieldValue::Instructions(steps.into_iter().map(str::to_owned).collect()))
    }
}

/// Strings that look like a plain numeric literal
fn numeric_literal(raw: &str) -> Option<&str> {
    (!raw.is_empty() && raw.trim() == raw).then_some(raw)
}

fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => numeric_literal(s).and_then(|s| s.parse::<f64>().ok()),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn integral(number: f64) -> Option<i64> {
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    (number.is_finite() && number.fract() == 0.0 && in_range).then_some(number as i64)
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => numeric_literal(s).and_then(|s| {
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }),
        _ => None,
    }
}

fn take_text(fields: &mut Fields, name: &str) -> Option<String> {
    match fields.remove(name) {
        Some(FieldValue::Text(text)) => Some(text),
        _ => None,
    }
}

fn take_integer(fields: &mut Fields, name: &str) -> Option<i64> {
    match fields.remove(name) {
        Some(FieldValue::Integer(number)) => Some(number),
        _ => None,
    }
}

fn ingredient_from(fields: &mut Fields) -> Option<Ingredient> {
    let quantity = match fields.remove("quantity") {
        Some(FieldValue::Number(quantity)) => quantity,
        _ => return None,
    };
    Some(Ingredient {
        name: take_text(fields, "name")?,
        quantity,
        unit: take_text(fields, "unit")?,
    })
}

fn submission_from(fields: &mut Fields) -> Option<RecipeSubmission> {
    let ingredients = match fields.remove("ingredients") {
        Some(FieldValue::Ingredients(ingredients)) => ingredients,
        _ => return None,
    };
    let instructions = match fields.remove("instructions") {
        Some(FieldValue::Instructions(steps)) => steps,
        _ => return None,
    };
    Some(RecipeSubmission {
        title: take_text(fields, "title")?,
        description: take_text(fields, "description")?,
        ingredients,
        instructions,
        prep_time_minutes: take_integer(fields, "prepTimeMinutes")?,
        cook_time_minutes: take_integer(fields, "cookTimeMinutes")?,
        servings: take_integer(fields, "servings")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> Value {
        json!({
            "title": "Pasta",
            "description": "Simple pasta",
            "ingredients": [{"name": "pasta", "quantity": 200, "unit": "g"}],
            "instructions": ["Boil water", "Cook pasta"],
            "prepTimeMinutes": 5,
            "cookTimeMinutes": 10,
            "servings": 2
        })
    }

    fn violations_for(payload: &Value) -> Vec<Violation> {
        validate_submission(payload).unwrap_err().into_violations()
    }

    #[test]
    fn test_valid_payload_is_normalized() {
        let submission = validate_submission(&valid_payload()).unwrap();
        assert_eq!(submission.title, "Pasta");
        assert_eq!(submission.ingredients.len(), 1);
        assert!((submission.ingredients[0].quantity - 200.0).abs() < f64::EPSILON);
        assert_eq!(submission.instructions, vec!["Boil water", "Cook pasta"]);
        assert_eq!(submission.servings, 2);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let mut payload = valid_payload();
        payload["prepTimeMinutes"] = json!("15");
        payload["cookTimeMinutes"] = json!(20.0);
        payload["ingredients"][0]["quantity"] = json!("0.5");

        let submission = validate_submission(&payload).unwrap();
        assert_eq!(submission.prep_time_minutes, 15);
        assert_eq!(submission.cook_time_minutes, 20);
        assert!((submission.ingredients[0].quantity - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_integer_is_rejected() {
        let mut payload = valid_payload();
        payload["servings"] = json!("1.5");

        let violations = violations_for(&payload);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "servings");
        assert_eq!(violations[0].constraint, ConstraintKind::IsInt);
        assert_eq!(violations[0].message, "servings must be an integer number");
    }

    #[test]
    fn test_title_length_boundaries() {
        let mut payload = valid_payload();
        payload["title"] = json!("é".repeat(200));
        assert!(validate_submission(&payload).is_ok());

        payload["title"] = json!("a".repeat(201));
        let violations = violations_for(&payload);
        assert_eq!(violations[0].constraint, ConstraintKind::MaxLength);
        assert_eq!(
            violations[0].message,
            "title must be shorter than or equal to 200 characters"
        );

        payload["title"] = json!("");
        let violations = violations_for(&payload);
        assert_eq!(violations[0].constraint, ConstraintKind::IsNotEmpty);
    }

    #[test]
    fn test_quantity_minimum() {
        let mut payload = valid_payload();
        payload["ingredients"][0]["quantity"] = json!(0.01);
        assert!(validate_submission(&payload).is_ok());

        payload["ingredients"][0]["quantity"] = json!(0.001);
        let violations = violations_for(&payload);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "ingredients");
        assert_eq!(violations[0].constraint, ConstraintKind::Min);
        assert_eq!(
            violations[0].message,
            "ingredients.0.quantity must not be less than 0.01"
        );
    }

    #[test]
    fn test_all_violations_are_collected() {
        let payload = json!({
            "title": "",
            "description": 42,
            "ingredients": [],
            "instructions": ["ok", ""],
            "prepTimeMinutes": 0,
            "servings": null,
            "extra": true
        });

        let errors = validate_submission(&payload).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![
                "extra",
                "title",
                "description",
                "ingredients",
                "instructions",
                "prepTimeMinutes",
                "cookTimeMinutes",
                "servings"
            ]
        );
        assert_eq!(errors.violations()[0].constraint, ConstraintKind::Whitelist);
        assert_eq!(errors.violations()[0].message, "property extra should not exist");
    }

    #[test]
    fn test_unknown_ingredient_key_is_rejected() {
        let mut payload = valid_payload();
        payload["ingredients"][0]["brand"] = json!("acme");

        let violations = violations_for(&payload);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "ingredients");
        assert_eq!(
            violations[0].message,
            "property ingredients.0.brand should not exist"
        );
    }

    #[test]
    fn test_instruction_element_failures_reported_once() {
        let mut payload = valid_payload();
        payload["instructions"] = json!(["", 3, "", 4]);

        let violations = violations_for(&payload);
        let kinds: Vec<_> = violations.iter().map(|v| v.constraint).collect();
        assert_eq!(kinds, vec![ConstraintKind::IsString, ConstraintKind::IsNotEmpty]);
    }

    #[test]
    fn test_non_object_payload() {
        let violations = violations_for(&json!([1, 2, 3]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, BODY_FIELD);
        assert_eq!(violations[0].constraint, ConstraintKind::IsObject);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let payload = json!({"title": 1, "unexpected": 2});
        assert_eq!(validate_submission(&payload), validate_submission(&payload));
    }

    #[test]
    fn test_conversion_to_app_error_carries_violations() {
        let mut payload = valid_payload();
        payload["servings"] = json!(0);

        let error = AppError::from(validate_submission(&payload).unwrap_err());
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.message, "servings must not be less than 1");
        assert_eq!(error.context.details["violations"][0]["field"], "servings");
        assert_eq!(error.context.details["violations"][0]["constraint"], "min");
    }
}
