pub mod ast;
pub mod builder;
pub mod render;
pub mod skip;
pub mod validate;

pub use ast::{Condition, Connective, Entry, FunctionCall, Operator, OperatorKind, Value};
pub use builder::ConditionBuilder;
pub use render::{format_value, render, ArrayStyle};
pub use skip::{SkipCategory, SkipPolicy, SkipWhen};
pub use validate::{check_entries, validate_operator, Problem, Validation};
