//! Dotted-path access into entities (`"address.province.name"`).

use super::Entity;
use super::Value;

/// Split a dotted path into its segments, ignoring empty segments.
pub fn tokenize_path(path: &str) -> Vec<&str> {
    path.split('.').filter(|segment| !segment.is_empty()).collect()
}

/// Resolve already-tokenised path segments against an entity.
///
/// The first segment is looked up with [`Entity::field`]; later segments walk
/// into [`Value::Map`] by key and [`Value::List`] by numeric index. Any miss
/// yields `None`.
pub fn resolve_path<E: Entity + ?Sized>(entity: &E, path: &[&str]) -> Option<Value> {
    let (first, rest) = path.split_first()?;
    let root = entity.field(first)?;
    if rest.is_empty() {
        return Some(root);
    }
    resolve_in_value(&root, rest).cloned()
}

/// Resolve path segments inside a nested value.
pub fn resolve_in_value<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match current {
        Value::Map(map) => map.get(*segment),
        Value::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Resolve a dotted path string against an entity.
pub fn get_nested_value<E: Entity + ?Sized>(entity: &E, path: &str) -> Option<Value> {
    resolve_path(entity, &tokenize_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn citizen() -> Record {
        let json = serde_json::json!({
            "id": 7,
            "name": "Somchai",
            "address": { "province": { "name": "Chiang Mai" } },
            "phones": ["0812345678", "0898765432"]
        });
        Record::from_json(json).unwrap()
    }

    #[test]
    fn test_tokenize_skips_empty_segments() {
        assert_eq!(tokenize_path("a..b."), vec!["a", "b"]);
        assert!(tokenize_path("").is_empty());
    }

    #[test]
    fn test_top_level_field() {
        assert_eq!(
            get_nested_value(&citizen(), "name"),
            Some(Value::String("Somchai".into()))
        );
    }

    #[test]
    fn test_nested_map_path() {
        assert_eq!(
            get_nested_value(&citizen(), "address.province.name"),
            Some(Value::String("Chiang Mai".into()))
        );
    }

    #[test]
    fn test_list_index_segment() {
        assert_eq!(
            get_nested_value(&citizen(), "phones.1"),
            Some(Value::String("0898765432".into()))
        );
    }

    #[test]
    fn test_missing_segments() {
        let record = citizen();
        assert_eq!(get_nested_value(&record, "address.district.name"), None);
        assert_eq!(get_nested_value(&record, "name.first"), None);
        assert_eq!(get_nested_value(&record, "nope"), None);
        assert_eq!(get_nested_value(&record, ""), None);
    }
}
