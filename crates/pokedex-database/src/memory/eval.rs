//! Predicate evaluation over JSON documents.
//!
//! Paths are resolved segment by segment (`base.HP` → `doc["base"]["HP"]`).
//! When a path lands on an array, a leaf matches if any element matches.
//! A path that does not resolve never matches.

use std::cmp::Ordering;

use serde_json::Value;

use pokedex_core::types::{FilterField, FilterOp, FilterValue, Predicate};

/// Whether `doc` satisfies `predicate`.
pub fn evaluate(predicate: &Predicate, doc: &Value) -> bool {
    match predicate {
        Predicate::All => true,
        Predicate::Field(field) => evaluate_field(field, doc),
        Predicate::And(children) => children.iter().all(|c| evaluate(c, doc)),
        Predicate::Or(children) => children.iter().any(|c| evaluate(c, doc)),
    }
}

/// Resolve a dotted path inside a document.
pub fn resolve<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |value, key| value.get(key))
}

/// Ascending order of two resolved values. Missing sorts first.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Number(x), Value::Number(y)) => {
                let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (Value::String(x), Value::String(y)) => x.cmp(y),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}

fn evaluate_field(field: &FilterField, doc: &Value) -> bool {
    let Some(value) = resolve(doc, &field.field) else {
        return false;
    };

    match field.op {
        FilterOp::Eq => any_element(value, |v| equals(v, &field.value)),
        FilterOp::Gte => any_element(value, |v| {
            compare_number(v, &field.value).is_some_and(|o| o != Ordering::Less)
        }),
        FilterOp::Lte => any_element(value, |v| {
            compare_number(v, &field.value).is_some_and(|o| o != Ordering::Greater)
        }),
        FilterOp::In => any_element(value, |v| contained(v, &field.value)),
        FilterOp::ILike => match &field.value {
            FilterValue::Pattern(pattern) => any_element(value, |v| {
                v.as_str().is_some_and(|s| pattern.matches_ignore_case(s))
            }),
            _ => false,
        },
    }
}

fn any_element(value: &Value, test: impl Fn(&Value) -> bool) -> bool {
    match value {
        Value::Array(items) => items.iter().any(test),
        other => test(other),
    }
}

fn equals(value: &Value, expected: &FilterValue) -> bool {
    match expected {
        FilterValue::Integer(n) => value.as_i64() == Some(*n),
        FilterValue::Float(f) => value.as_f64() == Some(*f),
        FilterValue::String(s) => value.as_str() == Some(s.as_str()),
        _ => false,
    }
}

fn compare_number(value: &Value, bound: &FilterValue) -> Option<Ordering> {
    let actual = value.as_f64()?;
    let bound = match bound {
        FilterValue::Integer(n) => *n as f64,
        FilterValue::Float(f) => *f,
        _ => return None,
    };
    actual.partial_cmp(&bound)
}

fn contained(value: &Value, list: &FilterValue) -> bool {
    match list {
        FilterValue::IntegerList(ids) => value.as_i64().is_some_and(|n| ids.contains(&n)),
        FilterValue::StringList(items) => value
            .as_str()
            .is_some_and(|s| items.iter().any(|item| item == s)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::types::LikePattern;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "id": 6,
            "name": { "english": "Charizard", "french": "Dracaufeu" },
            "type": ["Fire", "Flying"],
            "base": { "HP": 78, "Attack": 84 }
        })
    }

    #[test]
    fn test_resolve_nested_path() {
        assert_eq!(resolve(&doc(), "base.HP"), Some(&json!(78)));
        assert_eq!(resolve(&doc(), "base.Missing"), None);
    }

    #[test]
    fn test_array_membership() {
        let both = Predicate::in_strings("type", vec!["Water".into(), "Flying".into()]);
        assert!(evaluate(&both, &doc()));

        let neither = Predicate::in_strings("type", vec!["Water".into(), "Grass".into()]);
        assert!(!evaluate(&neither, &doc()));

        let case = Predicate::in_strings("type", vec!["fire".into()]);
        assert!(!evaluate(&case, &doc()));
    }

    #[test]
    fn test_numeric_bounds_are_inclusive() {
        assert!(evaluate(&Predicate::gte("base.HP", 78.0), &doc()));
        assert!(evaluate(&Predicate::lte("base.HP", 78.0), &doc()));
        assert!(!evaluate(&Predicate::gte("base.HP", 78.5), &doc()));
        assert!(evaluate(&Predicate::lte("base.Attack", 84.9), &doc()));
    }

    #[test]
    fn test_missing_path_never_matches() {
        assert!(!evaluate(&Predicate::gte("base.Speed", 0.0), &doc()));
    }

    #[test]
    fn test_or_and_ilike() {
        let search = Predicate::Or(vec![
            Predicate::ilike("name.english", LikePattern::new("%xyz%")),
            Predicate::ilike("name.french", LikePattern::new("%CAUF%")),
        ]);
        assert!(evaluate(&search, &doc()));
        assert!(!evaluate(&Predicate::Or(vec![]), &doc()));
        assert!(evaluate(&Predicate::And(vec![]), &doc()));
    }

    #[test]
    fn test_compare_values_orders_numbers_numerically() {
        assert_eq!(
            compare_values(Some(&json!(9)), Some(&json!(10))),
            Ordering::Less
        );
        assert_eq!(compare_values(None, Some(&json!(1))), Ordering::Less);
    }
}
