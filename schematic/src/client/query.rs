//! Query string encoding.

use serde_json::Value;

/// Flattens a validated query object into `(key, value)` pairs.
///
/// Arrays repeat their key once per element, `null` values are skipped and
/// strings are passed without quotes.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use schematic::client::encode_query;
///
/// let pairs = encode_query(&json!({
///     "name": null,
///     "page": 2,
///     "status": ["running", "off"],
/// }));
/// assert_eq!(
///     pairs,
///     vec![
///         ("page".to_string(), "2".to_string()),
///         ("status".to_string(), "running".to_string()),
///         ("status".to_string(), "off".to_string()),
///     ]
/// );
/// ```
pub fn encode_query(query: &Value) -> Vec<(String, String)> {
    let Some(entries) = query.as_object() else {
        return Vec::new();
    };

    let mut pairs = Vec::new();
    for (key, value) in entries {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                pairs.extend(
                    items
                        .iter()
                        .filter(|item| !item.is_null())
                        .map(|item| (key.clone(), scalar(item))),
                );
            }
            other => pairs.push((key.clone(), scalar(other))),
        }
    }
    pairs
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
