use super::ast::Value;
use serde::{Deserialize, Serialize};

/// A class of values that can make a condition disappear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SkipCategory {
    Null,
    Undefined,
    EmptyString,
    EmptyArray,
    Nan,
    EmptyObject,
}

impl SkipCategory {
    pub const ALL: [SkipCategory; 6] = [
        SkipCategory::Null,
        SkipCategory::Undefined,
        SkipCategory::EmptyString,
        SkipCategory::EmptyArray,
        SkipCategory::Nan,
        SkipCategory::EmptyObject,
    ];

    pub fn matches(self, value: &Value) -> bool {
        match self {
            SkipCategory::Null => matches!(value, Value::Null),
            SkipCategory::Undefined => value.is_undefined(),
            SkipCategory::EmptyString => matches!(value, Value::String(s) if s.is_empty()),
            // One level only: nested arrays count as content.
            SkipCategory::EmptyArray => match value {
                Value::Array(items) => items.iter().all(Value::is_blank),
                Value::Expression(entries) => entries.is_empty(),
                _ => false,
            },
            SkipCategory::Nan => value.is_nan(),
            SkipCategory::EmptyObject => matches!(value, Value::Object(map) if map.is_empty()),
        }
    }
}

/// Which categories of values cause a condition to be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipPolicy {
    pub null: bool,
    pub undefined: bool,
    pub empty_string: bool,
    pub empty_array: bool,
    pub nan: bool,
    pub empty_object: bool,
}

impl Default for SkipPolicy {
    fn default() -> Self {
        Self {
            null: true,
            undefined: true,
            empty_string: true,
            empty_array: true,
            nan: true,
            empty_object: false,
        }
    }
}

impl SkipPolicy {
    /// Defaults, overridden by every flag `overrides` sets.
    pub fn with(overrides: SkipWhen) -> Self {
        let defaults = Self::default();
        Self {
            null: overrides.null.unwrap_or(defaults.null),
            undefined: overrides.undefined.unwrap_or(defaults.undefined),
            empty_string: overrides.empty_string.unwrap_or(defaults.empty_string),
            empty_array: overrides.empty_array.unwrap_or(defaults.empty_array),
            nan: overrides.nan.unwrap_or(defaults.nan),
            empty_object: overrides.empty_object.unwrap_or(defaults.empty_object),
        }
    }

    pub fn is_enabled(&self, category: SkipCategory) -> bool {
        match category {
            SkipCategory::Null => self.null,
            SkipCategory::Undefined => self.undefined,
            SkipCategory::EmptyString => self.empty_string,
            SkipCategory::EmptyArray => self.empty_array,
            SkipCategory::Nan => self.nan,
            SkipCategory::EmptyObject => self.empty_object,
        }
    }

    /// The first enabled category that matches `value`, if any.
    pub fn matching(&self, value: &Value) -> Option<SkipCategory> {
        SkipCategory::ALL
            .into_iter()
            .find(|category| self.is_enabled(*category) && category.matches(value))
    }

    pub fn should_skip(&self, value: &Value) -> bool {
        self.matching(value).is_some()
    }
}

/// Partial skip configuration; unset flags fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkipWhen {
    pub null: Option<bool>,
    pub undefined: Option<bool>,
    pub empty_string: Option<bool>,
    pub empty_array: Option<bool>,
    pub nan: Option<bool>,
    pub empty_object: Option<bool>,
}

impl SkipWhen {
    pub fn set(mut self, category: SkipCategory, enabled: bool) -> Self {
        let slot = match category {
            SkipCategory::Null => &mut self.null,
            SkipCategory::Undefined => &mut self.undefined,
            SkipCategory::EmptyString => &mut self.empty_string,
            SkipCategory::EmptyArray => &mut self.empty_array,
            SkipCategory::Nan => &mut self.nan,
            SkipCategory::EmptyObject => &mut self.empty_object,
        };
        *slot = Some(enabled);
        self
    }
}
