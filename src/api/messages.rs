//! Request and response bodies of the recommendation API.

use crate::app::state::{InsertionCandidate, Resource, ResourceId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub q: &'a str,
    pub max_resources: usize,
    pub max_concepts: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub result: Vec<Resource>,
}

#[derive(Debug, Serialize)]
pub struct NeighborsRequest {
    pub id: ResourceId,
    pub max_concepts: usize,
    pub max_resources: usize,
}

#[derive(Debug, Deserialize)]
pub struct NeighborsResponse {
    pub reference: Resource,
    #[serde(default)]
    pub neighbors: Vec<Resource>,
}

#[derive(Debug, Serialize)]
pub struct SortRequest {
    pub basket: Vec<ResourceId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptWeight {
    pub concept: String,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct InsertRequest {
    pub sequence: Vec<ResourceId>,
    pub concept_weights: Vec<ConceptWeight>,
}

#[derive(Debug, Deserialize)]
pub struct SequenceResponse {
    pub output: SequenceOutput,
}

#[derive(Debug, Deserialize)]
pub struct SequenceOutput {
    pub sequence: Vec<ResourceId>,
    #[serde(default)]
    pub insertions: Vec<Option<InsertionCandidate>>,
}

/// JavaScript-style falsiness, used to reject payloads that parsed but carry
/// nothing.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!({})));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!(1)));
    }

    #[test]
    fn test_sequence_response_with_null_slots() {
        let data = json!({
            "output": {
                "sequence": [3, 1],
                "insertions": [null, {"resource": {"id": 9, "title": "x"}, "confidence": 0.4}]
            }
        });
        let resp: SequenceResponse = serde_json::from_value(data).unwrap();
        assert_eq!(resp.output.sequence, vec![3, 1]);
        assert!(resp.output.insertions[0].is_none());
        let c = resp.output.insertions[1].as_ref().unwrap();
        assert_eq!(c.resource.id, 9);
        assert_eq!(c.resource.title(), Some("x"));
    }

    #[test]
    fn test_resource_keeps_unknown_fields() {
        let data = json!({
            "id": 5,
            "title": "Intro",
            "url": "http://example.org/5",
            "wikifier": [{"url": "http://en.wikipedia.org/wiki/Rust", "value": 0.9, "name": "Rust"}]
        });
        let r: Resource = serde_json::from_value(data).unwrap();
        assert_eq!(r.wikifier[0].value, 0.9);
        assert_eq!(r.wikifier[0].extra["name"], "Rust");

        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back["url"], "http://example.org/5");
        assert!(back.get("insertion_confidence").is_none());
        assert!(back.get("is_suggested").is_none());
    }

    #[test]
    fn test_insert_request_shape() {
        let req = InsertRequest {
            sequence: vec![1, 2],
            concept_weights: vec![ConceptWeight { concept: "c".into(), weight: 0.5 }],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"sequence": [1, 2], "concept_weights": [{"concept": "c", "weight": 0.5}]})
        );
    }
}
