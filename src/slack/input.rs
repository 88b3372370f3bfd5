//! Loose, map-shaped input accepted by every builder.
//!
//! Anything that cannot be turned into the requested entity is skipped
//! without a diagnostic. Every list-accepting setter goes through
//! [`Entry::resolve`] and [`push_valid`] so that rule lives in one place.

use serde_json::{Map, Value};

use crate::{ErrorKind, Result};

/// String-keyed configuration map, as read from JSON or TOML.
pub type ConfigMap = Map<String, Value>;

/// Builds an entity from a configuration map. Unknown keys are ignored and
/// missing keys fall back to the defaults of the matching setter.
pub trait FromConfig: Sized {
    fn from_config(map: &ConfigMap) -> Self;
}

/// Either an already built entity or raw input that may convert into one.
#[derive(Debug, Clone)]
pub enum Entry<T> {
    Typed(T),
    Raw(Value),
}

impl<T> From<Value> for Entry<T> {
    fn from(value: Value) -> Entry<T> {
        Entry::Raw(value)
    }
}

impl<T> From<ConfigMap> for Entry<T> {
    fn from(map: ConfigMap) -> Entry<T> {
        Entry::Raw(Value::Object(map))
    }
}

impl<T: FromConfig> Entry<T> {
    /// Non-empty maps convert through `FromConfig`, everything else that is
    /// not a typed entity is dropped.
    pub fn resolve(self) -> Option<T> {
        match self {
            Entry::Typed(item) => Some(item),
            Entry::Raw(Value::Object(ref map)) if !map.is_empty() => Some(T::from_config(map)),
            Entry::Raw(_) => None,
        }
    }
}

macro_rules! typed_entry {
    ($ty:ty) => {
        impl From<$ty> for $crate::slack::input::Entry<$ty> {
            fn from(item: $ty) -> $crate::slack::input::Entry<$ty> {
                $crate::slack::input::Entry::Typed(item)
            }
        }
    };
}

/// Appends the resolved entry, materialising the list on first success.
pub fn push_valid<T, E>(list: &mut Option<Vec<T>>, entry: E)
where
    T: FromConfig,
    E: Into<Entry<T>>,
{
    if let Some(item) = entry.into().resolve() {
        list.get_or_insert_with(Vec::new).push(item);
    }
}

/// Parses a JSON message document into a configuration map.
pub fn json_document(document: &str) -> Result<ConfigMap> {
    table(serde_json::from_str(document)?)
}

/// Parses a TOML message document into a configuration map.
pub fn toml_document(document: &str) -> Result<ConfigMap> {
    table(::toml::from_str(document)?)
}

fn table(value: Value) -> Result<ConfigMap> {
    match value {
        Value::Object(map) => Ok(map),
        other => bail!(ErrorKind::InvalidMessage(format!(
            "expected a table at the top level, found {}",
            other
        ))),
    }
}

pub(crate) fn owned<'a, S: Into<Option<&'a str>>>(value: S) -> Option<String> {
    value.into().map(str::to_owned)
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_ref().map(String::as_str).filter(|v| !v.is_empty())
}

/// Strings are taken as is, numbers and booleans are rendered.
pub(crate) fn string(map: &ConfigMap, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn flag(map: &ConfigMap, key: &str) -> Option<bool> {
    map.get(key).map(truthy)
}

pub(crate) fn list<'a>(map: &'a ConfigMap, key: &str) -> Option<&'a Vec<Value>> {
    map.get(key).and_then(Value::as_array)
}

pub(crate) fn truthy(value: &Value) -> bool {
    match *value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(ref n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(ref s) => !s.is_empty() && s != "0",
        Value::Array(ref a) => !a.is_empty(),
        Value::Object(ref o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Named(Option<String>);

    impl FromConfig for Named {
        fn from_config(map: &ConfigMap) -> Named {
            Named(string(map, "name"))
        }
    }

    typed_entry!(Named);

    #[test]
    fn maps_convert_and_other_values_are_skipped() {
        let mut list: Option<Vec<Named>> = None;
        push_valid(&mut list, json!("not a map"));
        push_valid(&mut list, json!({}));
        push_valid(&mut list, json!([1, 2]));
        assert!(list.is_none());

        push_valid(&mut list, json!({ "name": "unicorn" }));
        push_valid(&mut list, Named(None));
        assert_eq!(
            list,
            Some(vec![Named(Some("unicorn".to_owned())), Named(None)])
        );
    }

    #[test]
    fn truthiness_follows_loose_rules() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("yes")));
        assert!(!truthy(&json!("0")));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&Value::Null));
        assert!(!truthy(&json!([])));
    }

    #[test]
    fn documents_must_be_tables() {
        let map = toml_document("title = \"Deploy\"\n[[attachments]]\ntext = \"done\"\n").unwrap();
        assert_eq!(map["title"], json!("Deploy"));
        assert_eq!(map["attachments"], json!([{ "text": "done" }]));

        assert!(json_document("[1, 2]").is_err());
        assert!(json_document("{\"text\": \"hi\"}").is_ok());
    }

    #[test]
    fn strings_accept_numbers() {
        let map = json!({ "a": "x", "b": 3, "c": null }).as_object().cloned().unwrap();
        assert_eq!(string(&map, "a"), Some("x".to_owned()));
        assert_eq!(string(&map, "b"), Some("3".to_owned()));
        assert_eq!(string(&map, "c"), None);
        assert_eq!(string(&map, "d"), None);
    }
}
