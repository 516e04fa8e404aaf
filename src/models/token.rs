use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /account/tokens` on the explorer API.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenList {
    pub data: Vec<TokenRecord>,
}

/// One entry of the explorer's token list, kept as raw JSON so that entries of
/// any shape reach `qualify` in order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TokenRecord(pub Value);

/// What a single token record contributes to the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qualification {
    Card(CardSpec),
    Skip,
    Malformed(String),
}

/// Display fields extracted from `metadata.data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    pub name: String,
    pub uri: String,
}

impl CardSpec {
    pub fn image_url(&self) -> String {
        image_url_from_uri(&self.uri)
    }
}

impl TokenRecord {
    pub fn metadata(&self) -> Option<&Value> {
        self.0.get("metadata")
    }

    /// Classify this record.
    ///
    /// A `null` entry is malformed. Any other entry whose `metadata` is falsy
    /// (absent, null, false, 0, "") is skipped, including scalar entries that
    /// have no fields at all. Truthy metadata needs `data.uri` as a string;
    /// `data.name` is shown as-is when it is a string and stringified otherwise.
    pub fn qualify(&self) -> Qualification {
        if self.0.is_null() {
            return Qualification::Malformed("token record is null".to_string());
        }

        let metadata = match self.metadata() {
            Some(metadata) if is_truthy(metadata) => metadata,
            _ => return Qualification::Skip,
        };

        let data = match metadata.get("data") {
            Some(data) if !data.is_null() => data,
            _ => return Qualification::Malformed("metadata.data is missing".to_string()),
        };

        let uri = match data.get("uri").and_then(Value::as_str) {
            Some(uri) => uri,
            None => {
                return Qualification::Malformed("metadata.data.uri is not a string".to_string())
            }
        };

        Qualification::Card(CardSpec {
            name: display_name(data.get("name")),
            uri: uri.to_string(),
        })
    }
}

/// Image location by naming convention: the first `.json` in the metadata uri
/// becomes `.png`. No URL parsing; a uri without `.json` is returned unchanged.
pub fn image_url_from_uri(uri: &str) -> String {
    uri.replacen(".json", ".png", 1)
}

// Text interpolation of a JSON value, as the gallery page has always shown it.
fn display_name(name: Option<&Value>) -> String {
    match name {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(_)) => "[object Object]".to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_name(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> TokenRecord {
        TokenRecord(value)
    }

    #[test]
    fn test_image_url_replaces_json_suffix() {
        assert_eq!(
            image_url_from_uri("https://example.com/a.json"),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn test_image_url_without_json_is_unchanged() {
        assert_eq!(
            image_url_from_uri("https://example.com/a"),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_image_url_replaces_first_occurrence_only() {
        assert_eq!(
            image_url_from_uri("https://cdn/x.json/y.json"),
            "https://cdn/x.png/y.json"
        );
    }

    #[test]
    fn test_falsy_metadata_is_skipped() {
        for value in [
            json!({}),
            json!({ "metadata": null }),
            json!({ "metadata": false }),
            json!({ "metadata": 0 }),
            json!({ "metadata": "" }),
        ] {
            assert_eq!(record(value).qualify(), Qualification::Skip);
        }
    }

    #[test]
    fn test_scalar_entries_are_skipped() {
        for value in [json!(5), json!("mint"), json!(true), json!([1, 2])] {
            assert_eq!(record(value).qualify(), Qualification::Skip);
        }
    }

    #[test]
    fn test_null_entry_is_malformed() {
        assert!(matches!(
            record(Value::Null).qualify(),
            Qualification::Malformed(_)
        ));
    }

    #[test]
    fn test_metadata_with_data_qualifies() {
        let token = record(json!({
            "tokenAddress": "abc",
            "metadata": { "data": { "name": "Rock #1", "uri": "https://cdn/x.json" } }
        }));
        assert_eq!(
            token.qualify(),
            Qualification::Card(CardSpec {
                name: "Rock #1".to_string(),
                uri: "https://cdn/x.json".to_string(),
            })
        );
    }

    #[test]
    fn test_name_is_stringified() {
        let name_of = |value: Value| match record(value).qualify() {
            Qualification::Card(card) => card.name,
            other => panic!("expected a card, got {:?}", other),
        };

        assert_eq!(
            name_of(json!({ "metadata": { "data": { "uri": "a.json" } } })),
            "undefined"
        );
        assert_eq!(
            name_of(json!({ "metadata": { "data": { "name": 7, "uri": "a.json" } } })),
            "7"
        );
        assert_eq!(
            name_of(json!({ "metadata": { "data": { "name": null, "uri": "a.json" } } })),
            "null"
        );
    }

    #[test]
    fn test_missing_data_or_uri_is_malformed() {
        let token = record(json!({ "metadata": { "mint": "abc" } }));
        assert!(matches!(token.qualify(), Qualification::Malformed(_)));

        let token = record(json!({ "metadata": true }));
        assert!(matches!(token.qualify(), Qualification::Malformed(_)));

        let token = record(json!({ "metadata": { "data": { "name": "x" } } }));
        assert_eq!(
            token.qualify(),
            Qualification::Malformed("metadata.data.uri is not a string".to_string())
        );

        let token = record(json!({ "metadata": { "data": { "name": "x", "uri": 3 } } }));
        assert!(matches!(token.qualify(), Qualification::Malformed(_)));
    }

    #[test]
    fn test_token_list_requires_data_field() {
        assert!(serde_json::from_str::<TokenList>(r#"{"success": true}"#).is_err());
        let list: TokenList = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn test_token_list_accepts_any_entry_shape() {
        let list: TokenList =
            serde_json::from_str(r#"{"data": [{"metadata": null}, 5, null, "x"]}"#).unwrap();
        assert_eq!(list.data.len(), 4);
        assert!(list.data[2].0.is_null());
    }
}
