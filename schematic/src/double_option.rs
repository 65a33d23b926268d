//! Serde adapter for fields that are both optional and nullable.
//!
//! `Option<Option<T>>` keeps the three wire states apart:
//!
//! | JSON            | Rust             |
//! |-----------------|------------------|
//! | key absent      | `None`           |
//! | `"key": null`   | `Some(None)`     |
//! | `"key": value`  | `Some(Some(v))`  |
//!
//! Use together with `default` and `skip_serializing_if = "Option::is_none"`:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Rule {
//!     #[serde(
//!         default,
//!         skip_serializing_if = "Option::is_none",
//!         with = "schematic::double_option"
//!     )]
//!     description: Option<Option<String>>,
//! }
//!
//! let absent: Rule = serde_json::from_str("{}").unwrap();
//! let null: Rule = serde_json::from_str(r#"{"description":null}"#).unwrap();
//! assert_eq!(absent.description, None);
//! assert_eq!(null.description, Some(None));
//! assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"description":null}"#);
//! assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Deprecation {
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::double_option"
        )]
        deprecated: Option<Option<bool>>,
    }

    #[test]
    fn three_states_roundtrip() {
        for value in [json!({}), json!({"deprecated": null}), json!({"deprecated": true})] {
            let decoded: Deprecation = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(serde_json::to_value(&decoded).unwrap(), value);
        }
    }

    #[test]
    fn present_value_is_some_some() {
        let decoded: Deprecation = serde_json::from_value(json!({"deprecated": false})).unwrap();
        assert_eq!(decoded.deprecated, Some(Some(false)));
    }

    #[test]
    fn wrong_type_fails() {
        assert!(serde_json::from_value::<Deprecation>(json!({"deprecated": "yes"})).is_err());
    }
}
