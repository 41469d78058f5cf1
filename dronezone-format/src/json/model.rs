use dronezone_core::models::{AttributeValue, Attributes};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt::{Display, Formatter};

/// A graph document.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiGraph {
    /// Whether edges are usable in source to target direction only.
    #[serde(default)]
    pub directed: bool,
    /// Graph nodes.
    pub nodes: Vec<ApiNode>,
    /// Graph edges.
    pub edges: Vec<ApiEdge>,
}

/// A node of the graph document.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiNode {
    /// Node id.
    pub id: ApiId,
    /// Optional node attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
}

/// An edge of the graph document.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiEdge {
    /// Source node id.
    pub source: ApiId,
    /// Target node id.
    pub target: ApiId,
    /// Edge weight, one is used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A node id which can be specified as a string or as a number.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ApiId {
    /// A text id.
    Text(String),
    /// A numeric id, used as its decimal representation.
    Number(Number),
}

impl Display for ApiId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(id) => write!(f, "{id}"),
            Self::Number(id) => write!(f, "{id}"),
        }
    }
}

/// Converts json attributes to node attributes. Nested values are kept as their json text.
pub(crate) fn to_attributes(attributes: Map<String, Value>) -> Attributes {
    attributes
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Bool(value) => AttributeValue::Bool(value),
                Value::Number(number) => match number.as_f64() {
                    Some(number) => AttributeValue::Number(number),
                    None => AttributeValue::Text(number.to_string()),
                },
                Value::String(text) => AttributeValue::Text(text),
                other => AttributeValue::Text(other.to_string()),
            };

            (key, value)
        })
        .collect()
}

/// Converts node attributes to json ones.
pub(crate) fn from_attributes(attributes: &Attributes) -> Map<String, Value> {
    attributes
        .iter()
        .map(|(key, value)| {
            let value = match value {
                AttributeValue::Bool(value) => Value::Bool(*value),
                AttributeValue::Number(number) => Number::from_f64(*number).map_or(Value::Null, Value::Number),
                AttributeValue::Text(text) => Value::String(text.clone()),
            };

            (key.clone(), value)
        })
        .collect()
}
