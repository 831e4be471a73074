use super::types::Record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON keys backed by typed fields of [`Insight`]
const TYPED_KEYS: &[&str] = &["identifier", "uri", "title", "visualizationUrl"];

/// A stored insight: a saved visualization definition with an identity.
///
/// Only `identifier` and `title` are meaningful to the store. Buckets, filters,
/// sorts, properties and anything else a backend returns are kept verbatim in
/// `body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub visualization_url: String,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

/// Insight payload before the backend assigns it an identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightDefinition {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub visualization_url: String,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl Insight {
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            uri: None,
            title: title.into(),
            visualization_url: String::new(),
            body: Map::new(),
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn with_visualization_url(mut self, url: impl Into<String>) -> Self {
        self.visualization_url = url.into();
        self
    }

    /// Attach an opaque attribute (buckets, filters, properties, ...)
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.body.insert(key.into(), value);
        self
    }
}

impl InsightDefinition {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_visualization_url(mut self, url: impl Into<String>) -> Self {
        self.visualization_url = url.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.body.insert(key.into(), value);
        self
    }
}

impl Record for Insight {
    type Definition = InsightDefinition;

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn from_definition(identifier: String, definition: InsightDefinition) -> Self {
        // Body entries named like typed fields would serialize as duplicate keys.
        let mut body = definition.body;
        for key in TYPED_KEYS {
            body.remove(*key);
        }
        Self {
            identifier,
            uri: None,
            title: definition.title,
            visualization_url: definition.visualization_url,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insight_keeps_opaque_attributes() {
        let insight: Insight = serde_json::from_value(json!({
            "identifier": "rev",
            "title": "Revenue",
            "visualizationUrl": "local:bar",
            "buckets": [{"localIdentifier": "measures", "items": []}],
            "filters": []
        }))
        .unwrap();

        assert_eq!(insight.identifier(), "rev");
        assert_eq!(insight.title(), "Revenue");
        assert_eq!(insight.visualization_url, "local:bar");
        assert_eq!(insight.body["buckets"][0]["localIdentifier"], "measures");

        let back = serde_json::to_value(&insight).unwrap();
        assert_eq!(back["filters"], json!([]));
        assert!(back.get("uri").is_none());
    }

    #[test]
    fn test_from_definition_drops_typed_keys_from_body() {
        let def = InsightDefinition::new("Typed")
            .with_attribute("title", json!("Shadow"))
            .with_attribute("visualizationUrl", json!("local:shadow"))
            .with_attribute("uri", json!("/shadow"))
            .with_attribute("sorts", json!([]));

        let insight = Insight::from_definition("adHocInsight_9".to_string(), def);
        assert_eq!(insight.body.len(), 1);

        let text = serde_json::to_string(&insight).unwrap();
        assert_eq!(text.matches("\"title\"").count(), 1);
        assert_eq!(text.matches("\"visualizationUrl\"").count(), 1);
        assert!(!text.contains("\"uri\""));

        let back: Insight = serde_json::from_str(&text).unwrap();
        assert_eq!(back.title, "Typed");
        assert_eq!(back.visualization_url, "");
    }

    #[test]
    fn test_from_definition_assigns_identifier() {
        let def = InsightDefinition::new("New")
            .with_visualization_url("local:table")
            .with_attribute("identifier", json!("sneaky"))
            .with_attribute("properties", json!({"controls": {}}));

        let insight = Insight::from_definition("adHocInsight_7".to_string(), def);
        assert_eq!(insight.identifier, "adHocInsight_7");
        assert_eq!(insight.title, "New");
        assert_eq!(insight.visualization_url, "local:table");
        assert!(!insight.body.contains_key("identifier"));
        assert_eq!(insight.body["properties"], json!({"controls": {}}));
    }
}
