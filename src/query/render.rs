use super::ast::{Condition, Entry, FunctionCall, Value};
use regex::Regex;
use serde_json::{Map, Value as JsonValue};
use std::sync::OnceLock;

/// How array values are wrapped when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ArrayStyle {
    /// `(a, b)`
    #[default]
    Parens,
    /// `[a, b]`
    Brackets,
}

fn doubled_parens() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(\((.*?)\)\)").expect("Invalid regex"))
}

/// Renders an entry sequence as a left-to-right expression string.
///
/// Tokens are joined with single spaces, then one non-overlapping pass
/// collapses `((X))` into `(X)`. Nested levels run the same pass before
/// their result is wrapped.
pub fn render(entries: &[Entry], style: ArrayStyle) -> String {
    let joined = entries
        .iter()
        .filter_map(|entry| render_entry(entry, style))
        .collect::<Vec<_>>()
        .join(" ");
    doubled_parens().replace_all(&joined, "(${1})").into_owned()
}

fn subquery(entries: &[Entry], style: ArrayStyle) -> String {
    format!("({})", render(entries, style))
}

fn render_entry(entry: &Entry, style: ArrayStyle) -> Option<String> {
    match entry {
        Entry::Connective(connective) => Some(connective.as_str().to_string()),
        Entry::Group { body } => {
            let inner = render(body, style);
            if inner.is_empty() {
                None
            } else {
                // The sub-expression's own pair plus the group's pair.
                Some(format!("(({}))", inner))
            }
        }
        Entry::Condition(cond) => Some(render_condition(cond, style)),
    }
}

fn render_condition(cond: &Condition, style: ArrayStyle) -> String {
    let head = format!("{} {}", cond.field, cond.operator);

    if cond.operator.is_null_check() {
        return head;
    }

    match &cond.value {
        Value::Expression(entries) => format!("{} {}", head, subquery(entries, style)),
        Value::Array(items) if cond.operator.is_range() => {
            let bounds: Vec<String> = flatten(items).map(|v| format_value(v, style)).collect();
            format!("{} {}", head, bounds.join(" and "))
        }
        value => format!("{} {}", head, format_value(value, style)),
    }
}

/// Formats a single value the way it appears on the right of an operator.
pub fn format_value(value: &Value, style: ArrayStyle) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => quote(s),
        Value::Array(items) => format_array(items, style),
        Value::Function(call) => format_call(call, style),
        Value::Object(map) => format_object(map),
        Value::Expression(entries) => subquery(entries, style),
    }
}

/// Spreads nested arrays one level into their parent.
fn flatten(items: &[Value]) -> impl Iterator<Item = &Value> {
    items.iter().flat_map(|item| match item {
        Value::Array(inner) => inner.iter().collect::<Vec<_>>(),
        other => vec![other],
    })
}

fn format_array(items: &[Value], style: ArrayStyle) -> String {
    let parts: Vec<String> = flatten(items).map(|v| format_value(v, style)).collect();
    match style {
        ArrayStyle::Parens => format!("({})", parts.join(", ")),
        ArrayStyle::Brackets => format!("[{}]", parts.join(", ")),
    }
}

fn format_call(call: &FunctionCall, style: ArrayStyle) -> String {
    let args: Vec<String> = call.args.iter().map(|a| format_value(a, style)).collect();
    format!("{}({})", call.name, args.join(", "))
}

fn format_object(map: &Map<String, JsonValue>) -> String {
    serde_json::to_string(map).unwrap_or_else(|_| "{}".to_string())
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form with an explicit sign on positive exponents: 1e+21, 1.5e-7
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        n.to_string()
    }
}
