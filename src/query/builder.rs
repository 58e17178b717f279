use super::ast::{Condition, Connective, Entry, FunctionCall, Operator, Value};
use super::render::{render, ArrayStyle};
use super::skip::{SkipPolicy, SkipWhen};
use super::validate::{validate_operator, Validation};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;
use tracing::debug;

/// Fluent builder for conditional filter expressions.
///
/// Adding methods mutate the builder in place and hand back `&mut Self`, so
/// calls chain. Conditions whose value falls in an enabled skip category are
/// dropped together with the connective that would have preceded them.
///
/// The connective joining a new condition or group to what came before is
/// `and` unless the call is preceded by [`or`](Self::or), or made through one
/// of the `*_with` variants that take it explicitly.
#[derive(Debug, Clone, Default)]
pub struct ConditionBuilder {
    entries: Vec<Entry>,
    skip: SkipPolicy,
    next: Connective,
}

impl ConditionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_policy(skip: SkipPolicy) -> Self {
        Self {
            skip,
            ..Self::default()
        }
    }

    /// Builds a function-call value, e.g. `NOW()` or `UPPER('x')`.
    pub fn func<I, V>(name: impl Into<String>, args: I) -> Value
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Function(FunctionCall {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    pub fn validate_operator(operator: Operator, value: &Value) -> Validation {
        validate_operator(operator, value)
    }

    /// Replaces the skip policy with the defaults overridden by `overrides`.
    pub fn skip_when(&mut self, overrides: SkipWhen) -> &mut Self {
        self.skip = SkipPolicy::with(overrides);
        self
    }

    pub fn skip_policy(&self) -> SkipPolicy {
        self.skip
    }

    /// Joins the next condition or group with `or`.
    pub fn or(&mut self) -> &mut Self {
        self.next = Connective::Or;
        self
    }

    /// Joins the next condition or group with `and` (the default).
    pub fn and(&mut self) -> &mut Self {
        self.next = Connective::And;
        self
    }

    fn take_connective(&mut self) -> Connective {
        std::mem::take(&mut self.next)
    }

    pub fn where_(
        &mut self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> &mut Self {
        let connective = self.take_connective();
        self.where_with(field, operator, value, connective)
    }

    pub fn where_with(
        &mut self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
        connective: Connective,
    ) -> &mut Self {
        let field = field.into();
        let value = value.into();

        if !operator.is_null_check() {
            if let Some(category) = self.skip.matching(&value) {
                debug!(%field, %operator, ?category, "skipping condition");
                return self;
            }
        }

        if !self.entries.is_empty() {
            self.entries.push(Entry::Connective(connective));
        }
        self.entries.push(Entry::Condition(Condition {
            field,
            operator,
            value,
        }));
        self
    }

    /// Adds a parenthesized group populated by `build`.
    ///
    /// The child builder starts from a copy of the current skip policy. A
    /// group that ends up empty is left out entirely.
    pub fn group<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut ConditionBuilder),
    {
        let connective = self.take_connective();
        self.group_with(build, connective)
    }

    pub fn group_with<F>(&mut self, build: F, connective: Connective) -> &mut Self
    where
        F: FnOnce(&mut ConditionBuilder),
    {
        let mut child = Self::with_policy(self.skip);
        build(&mut child);
        let body = child.into_entries();

        if body.is_empty() {
            debug!("omitting empty group");
            return self;
        }

        if self.entries.last().is_some_and(|last| !last.is_connective()) {
            self.entries.push(Entry::Connective(connective));
        }
        self.entries.push(Entry::Group { body });
        self
    }

    /// Feeds a previously serialized sequence back through the builder.
    ///
    /// Connectives set the joiner of the entry that follows them; conditions
    /// and groups are re-added under the current skip policy, so stray
    /// connectives and skippable values drop out.
    pub fn replay(&mut self, entries: impl IntoIterator<Item = Entry>) -> &mut Self {
        let mut connective = self.take_connective();
        for entry in entries {
            match entry {
                Entry::Connective(c) => connective = c,
                Entry::Condition(cond) => {
                    self.where_with(cond.field, cond.operator, cond.value, connective);
                    connective = Connective::And;
                }
                Entry::Group { body } => {
                    self.group_with(
                        |child| {
                            child.replay(body);
                        },
                        connective,
                    );
                    connective = Connective::And;
                }
            }
        }
        self
    }

    pub fn equals(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::Eq, value)
    }

    pub fn not_equals(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::Ne, value)
    }

    pub fn strict_equals(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.where_(field, Operator::StrictEq, value)
    }

    pub fn strict_not_equals(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.where_(field, Operator::StrictNe, value)
    }

    pub fn loose_equals(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::LooseEq, value)
    }

    pub fn greater_than(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::Gt, value)
    }

    pub fn greater_than_or_equal(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.where_(field, Operator::Ge, value)
    }

    pub fn less_than(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::Lt, value)
    }

    pub fn less_than_or_equal(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.where_(field, Operator::Le, value)
    }

    pub fn like(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::Like, value)
    }

    /// Case-insensitive `like`.
    pub fn ilike(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::ILike, value)
    }

    pub fn starts_with(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::StartsWith, value)
    }

    pub fn ends_with(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::EndsWith, value)
    }

    pub fn contains(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::Contains, value)
    }

    pub fn matches(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.where_(field, Operator::Matches, value)
    }

    pub fn is_in<I, V>(&mut self, field: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.where_(field, Operator::In, values)
    }

    pub fn not_in<I, V>(&mut self, field: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.where_(field, Operator::NotIn, values)
    }

    pub fn between<V: Into<Value>>(
        &mut self,
        field: impl Into<String>,
        range: [V; 2],
    ) -> &mut Self {
        self.where_(field, Operator::Between, range)
    }

    pub fn not_between<V: Into<Value>>(
        &mut self,
        field: impl Into<String>,
        range: [V; 2],
    ) -> &mut Self {
        self.where_(field, Operator::NotBetween, range)
    }

    pub fn is_null(&mut self, field: impl Into<String>) -> &mut Self {
        self.where_(field, Operator::IsNull, Value::Undefined)
    }

    pub fn is_not_null(&mut self, field: impl Into<String>) -> &mut Self {
        self.where_(field, Operator::IsNotNull, Value::Undefined)
    }

    pub fn is_empty(&mut self, field: impl Into<String>) -> &mut Self {
        self.where_(field, Operator::IsEmpty, Value::Undefined)
    }

    pub fn is_not_empty(&mut self, field: impl Into<String>) -> &mut Self {
        self.where_(field, Operator::IsNotEmpty, Value::Undefined)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// The structured form: connective strings, condition records and
    /// `{"group": [...]}` records in order.
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(&self.entries).unwrap_or_else(|_| JsonValue::Array(Vec::new()))
    }

    pub fn render(&self, style: ArrayStyle) -> String {
        render(&self.entries, style)
    }
}

impl fmt::Display for ConditionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(ArrayStyle::Parens))
    }
}

impl Serialize for ConditionBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// A finished builder used as a value becomes a nested expression.
impl From<ConditionBuilder> for Value {
    fn from(builder: ConditionBuilder) -> Self {
        Value::Expression(builder.into_entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_builder() {
        let qb = ConditionBuilder::new();
        assert_eq!(qb.to_json(), json!([]));
        assert_eq!(qb.to_string(), "");
    }

    #[test]
    fn test_single_condition() {
        let mut qb = ConditionBuilder::new();
        qb.where_("name", Operator::StrictEq, "andreas");
        assert_eq!(
            qb.to_json(),
            json!([{"field": "name", "operator": "===", "value": "andreas"}])
        );
        assert_eq!(qb.to_string(), "name === 'andreas'");
    }

    #[test]
    fn test_or_condition() {
        let mut qb = ConditionBuilder::new();
        qb.where_("age", Operator::Lt, 60)
            .where_with("age", Operator::Gt, 30, Connective::Or);
        assert_eq!(
            qb.to_json(),
            json!([
                {"field": "age", "operator": "<", "value": 60},
                "or",
                {"field": "age", "operator": ">", "value": 30}
            ])
        );
        assert_eq!(qb.to_string(), "age < 60 or age > 30");
    }

    #[test]
    fn test_or_modifier_applies_to_next_call_only() {
        let mut qb = ConditionBuilder::new();
        qb.where_("name", Operator::LooseEq, "andreas")
            .or()
            .where_("age", Operator::Gt, 30)
            .where_("active", Operator::Eq, true);
        assert_eq!(
            qb.to_string(),
            "name == 'andreas' or age > 30 and active = true"
        );
    }

    #[test]
    fn test_or_modifier_is_consumed_by_skipped_call() {
        let mut qb = ConditionBuilder::new();
        qb.where_("a", Operator::Eq, 1)
            .or()
            .where_("b", Operator::Eq, "")
            .where_("c", Operator::Eq, 3);
        assert_eq!(qb.to_string(), "a = 1 and c = 3");
    }

    #[test]
    fn test_connectives_never_dangle() {
        let mut qb = ConditionBuilder::new();
        qb.where_("a", Operator::Eq, Value::Null)
            .or()
            .where_("b", Operator::Eq, 2)
            .where_("c", Operator::Eq, Value::Undefined)
            .or()
            .group(|_| {});
        assert_eq!(
            qb.to_json(),
            json!([{"field": "b", "operator": "=", "value": 2}])
        );
    }

    #[test]
    fn test_function_values() {
        let mut qb = ConditionBuilder::new();
        qb.where_("created", Operator::Gt, ConditionBuilder::func("NOW", Vec::<Value>::new()))
            .where_("name", Operator::StrictEq, ConditionBuilder::func("UPPER", ["andreas"]));
        assert_eq!(
            qb.to_string(),
            "created > NOW() and name === UPPER('andreas')"
        );
    }

    #[test]
    fn test_in_with_function_call_element() {
        let mut qb = ConditionBuilder::new();
        qb.is_in(
            "role",
            [ConditionBuilder::func("LOWER", ["Admin"]), Value::from("editor")],
        );
        assert_eq!(qb.to_string(), "role in (LOWER('Admin'), 'editor')");
    }

    #[test]
    fn test_grouped_conditions() {
        let mut qb = ConditionBuilder::new();
        qb.where_("name", Operator::LooseEq, "andreas").group(|g| {
            g.where_("age", Operator::Gt, 30)
                .or()
                .where_("member", Operator::Eq, true);
        });
        assert_eq!(
            qb.to_string(),
            "name == 'andreas' and (age > 30 or member = true)"
        );
        assert_eq!(
            qb.to_json(),
            json!([
                {"field": "name", "operator": "==", "value": "andreas"},
                "and",
                {"group": [
                    {"field": "age", "operator": ">", "value": 30},
                    "or",
                    {"field": "member", "operator": "=", "value": true}
                ]}
            ])
        );
    }

    #[test]
    fn test_single_condition_group() {
        let mut qb = ConditionBuilder::new();
        qb.group(|g| {
            g.where_("status", Operator::Eq, "active");
        });
        assert_eq!(qb.to_string(), "(status = 'active')");
    }

    #[test]
    fn test_deeply_nested_groups() {
        let mut qb = ConditionBuilder::new();
        qb.group(|a| {
            a.where_("a", Operator::Eq, 1).group(|b| {
                b.where_("b", Operator::Eq, 2).group(|c| {
                    c.where_("c", Operator::Eq, 3).group(|d| {
                        d.where_("d", Operator::Eq, 4);
                    });
                });
            });
        });
        assert_eq!(
            qb.to_string(),
            "(a = 1 and (b = 2 and (c = 3 and (d = 4))))"
        );
    }

    #[test]
    fn test_complex_nested_structure() {
        let mut qb = ConditionBuilder::new();
        qb.where_("name", Operator::StrictEq, ConditionBuilder::func("UPPER", ["andreas"]))
            .or()
            .group(|g| {
                g.where_("role", Operator::In, vec!["admin", "editor"]);
                g.group(|inner| {
                    inner
                        .where_("active", Operator::Eq, true)
                        .or()
                        .where_("member", Operator::Eq, true);
                });
            });
        assert_eq!(
            qb.to_string(),
            "name === UPPER('andreas') or (role in ('admin', 'editor') \
             and (active = true or member = true))"
        );
    }

    #[test]
    fn test_group_with_explicit_connective() {
        let mut qb = ConditionBuilder::new();
        qb.where_("x", Operator::Eq, 10).group_with(
            |g| {
                g.where_("y", Operator::Eq, 20).or().where_("z", Operator::Eq, 30);
            },
            Connective::Or,
        );
        assert_eq!(qb.to_string(), "x = 10 or (y = 20 or z = 30)");
    }

    #[test]
    fn test_empty_group_contributes_nothing() {
        let mut qb = ConditionBuilder::new();
        qb.group(|_| {});
        assert_eq!(qb.to_json(), json!([]));
        assert_eq!(qb.to_string(), "");
    }

    #[test]
    fn test_default_policy_skips_empty_string() {
        let mut qb = ConditionBuilder::new();
        qb.where_("name", Operator::StrictEq, "");
        assert_eq!(qb.to_json(), json!([]));
        assert_eq!(qb.to_string(), "");
    }

    #[test]
    fn test_keeping_empty_strings() {
        let mut qb = ConditionBuilder::new();
        qb.skip_when(SkipWhen {
            empty_string: Some(false),
            ..Default::default()
        })
        .where_("name", Operator::StrictEq, "");
        assert_eq!(qb.to_string(), "name === ''");
    }

    #[test]
    fn test_skipped_values_mixed_with_kept_ones() {
        let mut qb = ConditionBuilder::new();
        qb.where_("name", Operator::StrictEq, "")
            .where_("age", Operator::Gt, 30)
            .where_("role", Operator::In, Vec::<Value>::new())
            .where_("tags", Operator::In, vec![Value::from(""), Value::Null, Value::Undefined])
            .where_("score", Operator::Gt, f64::NAN)
            .where_("status", Operator::Eq, "active");
        assert_eq!(qb.to_string(), "age > 30 and status = 'active'");
    }

    #[test]
    fn test_selective_skipping() {
        let mut qb = ConditionBuilder::new();
        qb.skip_when(SkipWhen {
            undefined: Some(false),
            ..Default::default()
        })
        .where_("name", Operator::LooseEq, "John")
        .where_("middle", Operator::LooseEq, "")
        .where_("last", Operator::LooseEq, Value::Null)
        .where_("age", Operator::Gt, 30)
        .where_("deleted", Operator::LooseEq, Value::Undefined);
        assert_eq!(
            qb.to_string(),
            "name == 'John' and age > 30 and deleted == undefined"
        );
    }

    #[test]
    fn test_empty_objects_skipped_only_when_enabled() {
        let empty = serde_json::Map::new();
        let dark_mode = json!({"darkMode": true}).as_object().cloned().unwrap_or_default();

        let mut qb = ConditionBuilder::new();
        qb.where_("config", Operator::Eq, empty.clone());
        assert_eq!(qb.to_string(), "config = {}");

        let mut qb = ConditionBuilder::new();
        qb.skip_when(SkipWhen {
            empty_object: Some(true),
            ..Default::default()
        })
        .where_("config", Operator::Eq, empty)
        .where_("settings", Operator::Eq, dark_mode);
        assert_eq!(qb.to_string(), r#"settings = {"darkMode":true}"#);
    }

    #[test]
    fn test_null_checks_are_never_skipped() {
        let mut qb = ConditionBuilder::new();
        qb.is_null("deleted_at")
            .is_not_null("created_at")
            .or()
            .is_empty("tags")
            .is_not_empty("owner");
        assert_eq!(
            qb.to_string(),
            "deleted_at is null and created_at is not null or tags is empty and owner is not empty"
        );
        assert_eq!(
            qb.to_json()[0],
            json!({"field": "deleted_at", "operator": "is null"})
        );
    }

    #[test]
    fn test_group_of_skipped_conditions_vanishes() {
        let mut qb = ConditionBuilder::new();
        qb.where_("age", Operator::Gt, 30).or().group(|g| {
            g.where_("name", Operator::Eq, "");
            g.where_("role", Operator::In, Vec::<Value>::new());
        });
        assert_eq!(qb.to_string(), "age > 30");
        assert_eq!(qb.entries().len(), 1);
    }

    #[test]
    fn test_group_keeps_surviving_condition() {
        let mut qb = ConditionBuilder::new();
        qb.group(|g| {
            g.where_("name", Operator::Eq, "");
            g.where_("role", Operator::In, vec!["admin"]);
        });
        assert_eq!(qb.to_string(), "(role in ('admin'))");
    }

    #[test]
    fn test_child_inherits_policy_snapshot() {
        let mut qb = ConditionBuilder::new();
        qb.skip_when(SkipWhen {
            empty_string: Some(false),
            ..Default::default()
        })
        .group(|g| {
            g.where_("name", Operator::Eq, "");
        })
        .skip_when(SkipWhen::default())
        .where_("nick", Operator::Eq, "");
        assert_eq!(qb.to_string(), "(name = '')");
    }

    #[test]
    fn test_convenience_operators() {
        let mut qb = ConditionBuilder::new();
        qb.equals("a", 1)
            .not_equals("b", 2)
            .strict_equals("c", 3)
            .strict_not_equals("d", 4)
            .loose_equals("e", 5)
            .greater_than("f", 6)
            .greater_than_or_equal("g", 7)
            .less_than("h", 8)
            .less_than_or_equal("i", 9)
            .like("j", "%x%")
            .ilike("k", "%y%")
            .not_in("l", ["guest"])
            .between("m", [18, 30])
            .not_between("n", [1, 2]);
        assert_eq!(
            qb.to_string(),
            "a = 1 and b != 2 and c === 3 and d !== 4 and e == 5 and f > 6 and g >= 7 \
             and h < 8 and i <= 9 and j like '%x%' and k ilike '%y%' and l not in ('guest') \
             and m between 18 and 30 and n not between 1 and 2"
        );
    }

    #[test]
    fn test_word_operators() {
        let mut qb = ConditionBuilder::new();
        qb.starts_with("name", "An")
            .or()
            .ends_with("name", "as")
            .contains("bio", "rust")
            .matches("code", "^[A-Z]+$");
        assert_eq!(
            qb.to_string(),
            "name starts with 'An' or name ends with 'as' and bio contains 'rust' \
             and code matches '^[A-Z]+$'"
        );
    }

    #[test]
    fn test_or_joins_convenience_wrappers() {
        let mut qb = ConditionBuilder::new();
        qb.equals("status", "active")
            .or()
            .is_in("role", ["admin"])
            .or()
            .between("age", [18, 30])
            .or()
            .is_null("deleted_at")
            .greater_than("score", 5);
        assert_eq!(
            qb.to_json(),
            json!([
                {"field": "status", "operator": "=", "value": "active"},
                "or",
                {"field": "role", "operator": "in", "value": ["admin"]},
                "or",
                {"field": "age", "operator": "between", "value": [18, 30]},
                "or",
                {"field": "deleted_at", "operator": "is null"},
                "and",
                {"field": "score", "operator": ">", "value": 5}
            ])
        );
    }

    #[test]
    fn test_between_serialized_form() {
        let mut qb = ConditionBuilder::new();
        qb.between("age", [18, 30]);
        assert_eq!(
            qb.to_json(),
            json!([{"field": "age", "operator": "between", "value": [18, 30]}])
        );
        assert_eq!(qb.to_string(), "age between 18 and 30");
    }

    #[test]
    fn test_bracket_array_style() {
        let mut qb = ConditionBuilder::new();
        qb.is_in("role", ["admin", "editor"]).between("age", [18, 30]);
        assert_eq!(
            qb.render(ArrayStyle::Brackets),
            "role in ['admin', 'editor'] and age between 18 and 30"
        );
    }

    #[test]
    fn test_builder_as_nested_expression_value() {
        let mut sub = ConditionBuilder::new();
        sub.where_("team", Operator::Eq, "core").or().is_null("team");

        let mut qb = ConditionBuilder::new();
        qb.where_("id", Operator::In, sub);
        assert_eq!(qb.to_string(), "id in (team = 'core' or team is null)");
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let mut qb = ConditionBuilder::new();
        qb.where_("user.name", Operator::Eq, "John").group(|g| {
            g.where_("a", Operator::Eq, 1);
        });
        let first = qb.to_string();
        assert_eq!(first, qb.to_string());
        assert_eq!(qb.to_json(), qb.to_json());
    }

    #[test]
    fn test_replay_normalizes_connectives() {
        let entries: Vec<Entry> = serde_json::from_value(json!([
            "or",
            {"field": "a", "operator": "=", "value": 1},
            "or",
            "or",
            {"field": "b", "operator": "=", "value": ""},
            {"field": "c", "operator": "=", "value": 3},
            "or",
            {"group": [{"field": "d", "operator": "=", "value": null}]},
            "and"
        ]))
        .unwrap();

        let mut qb = ConditionBuilder::new();
        qb.replay(entries);
        assert_eq!(qb.to_string(), "a = 1 and c = 3");
    }

    #[test]
    fn test_replay_preserves_well_formed_input() {
        let mut source = ConditionBuilder::new();
        source.where_("x", Operator::Eq, 10).or().group(|g| {
            g.where_("y", Operator::Eq, 20).or().where_("z", Operator::Eq, 30);
        });

        let mut copy = ConditionBuilder::new();
        copy.replay(source.entries().to_vec());
        assert_eq!(copy.entries(), source.entries());
    }

    #[test]
    fn test_validate_operator_is_standalone() {
        let result = ConditionBuilder::validate_operator(Operator::Between, &Value::from([1]));
        assert!(!result.valid);

        let mut qb = ConditionBuilder::new();
        qb.where_("age", Operator::Between, [1]);
        assert_eq!(qb.to_string(), "age between 1");
    }
}
