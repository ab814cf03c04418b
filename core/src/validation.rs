// Field validators and the gate that turns them into save permission

use crate::models::ServerLimits;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Form fields that carry validators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Time,
    Index,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Time => "time",
            FieldKind::Index => "index",
        }
    }
}

/// Failed field validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field:?}: {message}")]
pub struct ValidationError {
    pub field: FieldKind,
    pub message: String,
}

/// String constraint: length bounds in characters plus an optional pattern
#[derive(Debug, Clone, Default)]
pub struct StrValidator {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub regex: Option<Regex>,
}

impl StrValidator {
    pub fn passes(&self, value: &str) -> bool {
        let len = value.chars().count();
        if self.min.is_some_and(|min| len < min) {
            return false;
        }
        if self.max.is_some_and(|max| len > max) {
            return false;
        }
        match &self.regex {
            Some(re) => re.is_match(value),
            None => true,
        }
    }
}

/// Numeric constraint over a text input
///
/// Input that does not parse as a number is treated as NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumValidator {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Accept NaN (other checks are skipped for it)
    pub nan: bool,
    /// Accept non-integer values
    pub float: bool,
}

impl NumValidator {
    pub fn passes(&self, value: &str) -> bool {
        let num = value.trim().parse::<f64>().unwrap_or(f64::NAN);
        if num.is_nan() {
            return self.nan;
        }
        if !self.float && num.fract() != 0.0 {
            return false;
        }
        if self.min.is_some_and(|min| num < min) {
            return false;
        }
        if self.max.is_some_and(|max| num > max) {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone)]
enum Check {
    Str(StrValidator),
    Num(NumValidator),
}

/// A validator paired with the message shown when it fails
#[derive(Debug, Clone)]
pub struct Rule {
    check: Check,
    message: String,
}

impl Rule {
    pub fn string(validator: StrValidator, message: impl Into<String>) -> Self {
        Self {
            check: Check::Str(validator),
            message: message.into(),
        }
    }

    pub fn number(validator: NumValidator, message: impl Into<String>) -> Self {
        Self {
            check: Check::Num(validator),
            message: message.into(),
        }
    }

    pub fn passes(&self, value: &str) -> bool {
        match &self.check {
            Check::Str(v) => v.passes(value),
            Check::Num(v) => v.passes(value),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Validators of one form field and their latest outcome
#[derive(Debug, Clone)]
pub struct FieldGroup {
    field: FieldKind,
    rules: Vec<Rule>,
    enabled: bool,
    error: Option<ValidationError>,
}

impl FieldGroup {
    pub fn new(field: FieldKind, rules: Vec<Rule>) -> Self {
        Self {
            field,
            rules,
            enabled: true,
            error: None,
        }
    }

    pub fn field(&self) -> FieldKind {
        self.field
    }

    /// Run every rule; the first failing rule's message is kept
    pub fn evaluate(&mut self, value: &str) -> bool {
        self.error = self
            .rules
            .iter()
            .find(|rule| !rule.passes(value))
            .map(|rule| ValidationError {
                field: self.field,
                message: rule.message.clone(),
            });
        self.error.is_none()
    }

    pub fn passes(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }
}

/// Aggregates the field groups into a single "form valid" flag
///
/// The flag only drives the save action; other actions never consult it.
#[derive(Debug, Clone)]
pub struct ValidationGate {
    groups: Vec<FieldGroup>,
    valid: bool,
}

impl ValidationGate {
    pub fn new(groups: Vec<FieldGroup>) -> Self {
        let valid = groups.iter().all(FieldGroup::passes);
        Self { groups, valid }
    }

    /// Name, time and index groups bounded by the server limits
    pub fn for_limits(limits: &ServerLimits) -> Self {
        let name = FieldGroup::new(
            FieldKind::Name,
            vec![
                Rule::string(
                    StrValidator {
                        min: Some(1),
                        max: Some(limits.slide_name_max_len),
                        regex: None,
                    },
                    "The name is too short or too long.",
                ),
                Rule::string(
                    StrValidator {
                        regex: Some(name_pattern()),
                        ..Default::default()
                    },
                    "The name contains invalid characters.",
                ),
            ],
        );

        let time = FieldGroup::new(
            FieldKind::Time,
            vec![
                Rule::number(
                    NumValidator {
                        min: Some(limits.slide_min_time as f64 / 1000.0),
                        max: Some(limits.slide_max_time as f64 / 1000.0),
                        nan: false,
                        float: true,
                    },
                    "The time is outside the accepted bounds.",
                ),
                Rule::number(
                    NumValidator {
                        nan: true,
                        float: false,
                        ..Default::default()
                    },
                    "The time must be a whole number of seconds.",
                ),
            ],
        );

        let index = FieldGroup::new(
            FieldKind::Index,
            vec![
                Rule::number(
                    NumValidator {
                        min: Some(0.0),
                        max: Some(limits.slide_max_index as f64),
                        nan: false,
                        float: true,
                    },
                    "The index is outside the accepted bounds.",
                ),
                Rule::number(
                    NumValidator {
                        nan: true,
                        float: false,
                        ..Default::default()
                    },
                    "The index must be an integer value.",
                ),
            ],
        );

        Self::new(vec![name, time, index])
    }

    /// Re-evaluate one field after an input change
    ///
    /// Returns the recomputed form flag, or `None` while the field's group
    /// is disabled.
    pub fn input(&mut self, field: FieldKind, value: &str) -> Option<bool> {
        let group = self.groups.iter_mut().find(|g| g.field == field)?;
        if !group.enabled {
            return None;
        }
        group.evaluate(value);
        Some(self.recompute())
    }

    /// Re-evaluate every group against fresh values
    pub fn revalidate<'a>(&mut self, values: impl IntoIterator<Item = (FieldKind, &'a str)>) -> bool {
        for (field, value) in values {
            if let Some(group) = self.groups.iter_mut().find(|g| g.field == field) {
                group.evaluate(value);
            }
        }
        self.recompute()
    }

    /// Enable or disable every group; disabled groups ignore input
    pub fn set_enabled(&mut self, enabled: bool) {
        for group in &mut self.groups {
            group.enabled = enabled;
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self, field: FieldKind) -> Option<&ValidationError> {
        self.groups
            .iter()
            .find(|g| g.field == field)
            .and_then(FieldGroup::error)
    }

    /// First failing field, in group registration order
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.groups.iter().find_map(FieldGroup::error)
    }

    fn recompute(&mut self) -> bool {
        self.valid = self.groups.iter().all(FieldGroup::passes);
        self.valid
    }
}

fn name_pattern() -> Regex {
    Regex::new(r"^[A-Za-z0-9_-]*$").expect("name pattern is a valid regex")
}
