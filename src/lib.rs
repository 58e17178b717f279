//! Fluent builder for conditional filter expressions.
//!
//! ```
//! use condq::{ConditionBuilder, Operator};
//!
//! let mut qb = ConditionBuilder::new();
//! qb.where_("age", Operator::Lt, 60).or().where_("age", Operator::Gt, 30);
//! assert_eq!(qb.to_string(), "age < 60 or age > 30");
//! ```

pub mod query;

pub use query::{
    ArrayStyle, Condition, ConditionBuilder, Connective, Entry, FunctionCall, Operator,
    SkipCategory, SkipPolicy, SkipWhen, Validation, Value,
};
