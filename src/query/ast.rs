use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

/// One element of an accumulated expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Connective(Connective),
    Group {
        #[serde(rename = "group")]
        body: Vec<Entry>,
    },
    Condition(Condition),
}

impl Entry {
    pub fn is_connective(&self) -> bool {
        matches!(self, Entry::Connective(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    #[serde(default, skip_serializing_if = "Value::is_undefined")]
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connective {
    #[default]
    And,
    Or,
}

impl Connective {
    pub fn as_str(self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "===")]
    StrictEq,
    #[serde(rename = "!==")]
    StrictNe,
    #[serde(rename = "==")]
    LooseEq,
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not in")]
    NotIn,
    #[serde(rename = "between")]
    Between,
    #[serde(rename = "not between")]
    NotBetween,
    #[serde(rename = "is null")]
    IsNull,
    #[serde(rename = "is not null")]
    IsNotNull,
    #[serde(rename = "is empty")]
    IsEmpty,
    #[serde(rename = "is not empty")]
    IsNotEmpty,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "ilike")]
    ILike,
    #[serde(rename = "starts with")]
    StartsWith,
    #[serde(rename = "ends with")]
    EndsWith,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "matches")]
    Matches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Comparison,
    Set,
    Range,
    NullCheck,
    Word,
}

impl Operator {
    pub const ALL: [Operator; 23] = [
        Operator::StrictEq,
        Operator::StrictNe,
        Operator::LooseEq,
        Operator::Eq,
        Operator::Ne,
        Operator::Ge,
        Operator::Le,
        Operator::Lt,
        Operator::Gt,
        Operator::In,
        Operator::NotIn,
        Operator::Between,
        Operator::NotBetween,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::IsEmpty,
        Operator::IsNotEmpty,
        Operator::Like,
        Operator::ILike,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Contains,
        Operator::Matches,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::StrictEq => "===",
            Operator::StrictNe => "!==",
            Operator::LooseEq => "==",
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Between => "between",
            Operator::NotBetween => "not between",
            Operator::IsNull => "is null",
            Operator::IsNotNull => "is not null",
            Operator::IsEmpty => "is empty",
            Operator::IsNotEmpty => "is not empty",
            Operator::Like => "like",
            Operator::ILike => "ilike",
            Operator::StartsWith => "starts with",
            Operator::EndsWith => "ends with",
            Operator::Contains => "contains",
            Operator::Matches => "matches",
        }
    }

    pub fn kind(self) -> OperatorKind {
        match self {
            Operator::In | Operator::NotIn => OperatorKind::Set,
            Operator::Between | Operator::NotBetween => OperatorKind::Range,
            Operator::IsNull | Operator::IsNotNull | Operator::IsEmpty | Operator::IsNotEmpty => {
                OperatorKind::NullCheck
            }
            Operator::Like
            | Operator::ILike
            | Operator::StartsWith
            | Operator::EndsWith
            | Operator::Contains
            | Operator::Matches => OperatorKind::Word,
            _ => OperatorKind::Comparison,
        }
    }

    pub fn is_null_check(self) -> bool {
        self.kind() == OperatorKind::NullCheck
    }

    pub fn is_range(self) -> bool {
        self.kind() == OperatorKind::Range
    }

    pub fn is_set(self) -> bool {
        self.kind() == OperatorKind::Set
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown operator '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(rename = "$fn")]
    pub name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }
}

/// A condition value.
///
/// `Undefined` stands for an absent value. `Expression` is a sub-expression
/// used as a value, as in `id in (<sub-expression>)`; it is always built
/// explicitly and never guessed from the shape of an array while rendering.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "JsonValue")]
pub enum Value {
    Null,
    #[default]
    Undefined,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Function(FunctionCall),
    Object(Map<String, JsonValue>),
    Expression(Vec<Entry>),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Null, undefined, the empty string or NaN.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null | Value::Undefined => true,
            Value::String(s) => s.is_empty(),
            Value::Number(n) => n.is_nan(),
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null | Value::Undefined => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Function(call) => call.serialize(serializer),
            Value::Object(map) => map.serialize(serializer),
            Value::Expression(entries) => entries.serialize(serializer),
        }
    }
}

// 2^53: beyond this an f64 no longer holds every integer exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) if is_expression_shaped(&items) => {
                match serde_json::from_value(JsonValue::Array(items.clone())) {
                    Ok(entries) => Value::Expression(entries),
                    Err(_) => Value::Array(items.into_iter().map(Value::from).collect()),
                }
            }
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) if map.get("$fn").is_some_and(JsonValue::is_string) => {
                match serde_json::from_value(JsonValue::Object(map.clone())) {
                    Ok(call) => Value::Function(call),
                    Err(_) => Value::Object(map),
                }
            }
            JsonValue::Object(map) => Value::Object(map),
        }
    }
}

/// Decides, once at load time, whether a serialized array is a sub-expression.
/// Every element has to be an entry record and at least one a condition with a
/// known operator; a data array that merely holds an object with an
/// `operator` key stays a plain array.
fn is_expression_shaped(items: &[JsonValue]) -> bool {
    let mut has_condition = false;
    for item in items {
        match item {
            JsonValue::String(s) if s == "and" || s == "or" => {}
            JsonValue::Object(map)
                if map.len() == 1 && map.get("group").is_some_and(JsonValue::is_array) => {}
            JsonValue::Object(map) => {
                let field = map.get("field").is_some_and(JsonValue::is_string);
                let operator = map
                    .get("operator")
                    .and_then(JsonValue::as_str)
                    .is_some_and(|op| op.parse::<Operator>().is_ok());
                let known_keys = map
                    .keys()
                    .all(|k| matches!(k.as_str(), "field" | "operator" | "value"));
                if !(field && operator && known_keys) {
                    return false;
                }
                has_condition = true;
            }
            _ => return false,
        }
    }
    has_condition
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<FunctionCall> for Value {
    fn from(call: FunctionCall) -> Self {
        Value::Function(call)
    }
}

impl From<Map<String, JsonValue>> for Value {
    fn from(map: Map<String, JsonValue>) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
