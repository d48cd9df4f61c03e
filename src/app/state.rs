//! Store state and the domain types it holds.
//!
//! Each mutation is a method on [`State`]; `mutation.rs` routes the
//! [`Mutation`](crate::app::mutation::Mutation) enum onto them.

use chrono::{DateTime, Local};
use rand::RngExt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

pub type ResourceId = i64;
pub type NotificationId = u64;

/// Read a resource id the way the UI hands it over: plain integers, or any
/// numeric text with an integral value such as `"23345.0"` or `"1e3"`.
pub fn parse_resource_id(text: &str) -> Option<ResourceId> {
    let text = text.trim();
    if let Ok(id) = text.parse::<ResourceId>() {
        return Some(id);
    }
    let value: f64 = text.parse().ok()?;
    let in_range = value >= ResourceId::MIN as f64 && value <= ResourceId::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as ResourceId)
    } else {
        None
    }
}

/// A weighted concept attached to a resource by the wikifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Missing on some wikifier entries; such concepts carry no weight for
    /// insertion suggestions.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub value: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A document as returned by the API. Fields the store does not interpret are
/// kept in `extra` so they survive a round trip to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    #[serde(default)]
    pub wikifier: Vec<Concept>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insertion_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_suggested: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource {
    pub fn new(id: ResourceId) -> Self {
        Self {
            id,
            wikifier: Vec::new(),
            insertion_confidence: None,
            is_suggested: false,
            extra: Map::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }
}

/// An insertion proposed by the sequencing service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsertionCandidate {
    pub resource: Resource,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub text: String,
    pub kind: Option<NotificationKind>,
}

impl NotificationMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: Some(NotificationKind::Error),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: NotificationMessage,
    pub kind: NotificationKind,
    pub date: DateTime<Local>,
}

/// Everything the UI reads. Collections hold `Arc` snapshots of cache entries:
/// a later overwrite in `resources` is not reflected in lists built earlier.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub resources: HashMap<ResourceId, Arc<Resource>>,
    pub search_results: Vec<Arc<Resource>>,
    pub query: String,
    pub overview_reference: Option<Arc<Resource>>,
    pub overview_neighbors: Vec<Arc<Resource>>,
    pub basket: Vec<Arc<Resource>>,
    pub sequence: Vec<Option<Arc<Resource>>>,
    pub insertions: Vec<Option<Arc<Resource>>>,
    pub notifications: Vec<Notification>,
    pub loading_message: String,
    max_concepts: usize,
    next_notification_id: NotificationId,
}

impl State {
    pub fn new(max_concepts: usize) -> Self {
        Self {
            max_concepts,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.loading_message.is_empty()
    }

    fn upsert(&mut self, resource: Resource) -> Arc<Resource> {
        let resource = Arc::new(resource);
        self.resources.insert(resource.id, Arc::clone(&resource));
        resource
    }

    pub fn update_search_results(&mut self, results: Vec<Resource>) {
        self.search_results = results.into_iter().map(|r| self.upsert(r)).collect();
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn add_notification(&mut self, message: NotificationMessage) -> NotificationId {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        let kind = message.kind.unwrap_or_default();
        let date = Local::now();
        tracing::info!(id, kind = ?kind, text = %message.text, "notification");
        self.notifications.push(Notification {
            id,
            message,
            kind,
            date,
        });
        id
    }

    pub fn remove_notification(&mut self, id: NotificationId) {
        self.notifications.retain(|n| n.id != id);
    }

    /// Remove the first notification carrying an equal message.
    pub fn dismiss_notification(&mut self, message: &NotificationMessage) {
        if let Some(i) = self.notifications.iter().position(|n| n.message == *message) {
            self.notifications.remove(i);
        }
    }

    pub fn set_overview_reference(&mut self, resource: Resource) {
        let resource = self.upsert(resource);
        self.overview_reference = Some(resource);
    }

    pub fn set_overview_neighbors(&mut self, neighbors: Vec<Resource>) {
        self.overview_neighbors = neighbors.into_iter().map(|r| self.upsert(r)).collect();
    }

    pub fn set_loading_message(&mut self, message: Option<String>) {
        self.loading_message = message.unwrap_or_else(|| "Loading...".to_string());
    }

    /// Membership is by identity: two distinct objects with the same id are
    /// both kept.
    pub fn add_to_basket(&mut self, item: Arc<Resource>) {
        if !self.basket.iter().any(|b| Arc::ptr_eq(b, &item)) {
            self.basket.push(item);
        }
    }

    /// Debug helper: add `count` random distinct neighbors to the basket.
    pub fn populate_basket<R: RngExt>(&mut self, count: usize, rng: &mut R) {
        let mut items = self.overview_neighbors.clone();
        shuffle(&mut items, rng);
        for item in items.into_iter().take(count) {
            self.add_to_basket(item);
        }
    }

    pub fn set_sequence(&mut self, ids: &[ResourceId]) {
        self.sequence = ids.iter().map(|id| self.resources.get(id).cloned()).collect();
        self.insertions.clear();
        tracing::debug!(ids = ?ids, resolved = self.sequence.iter().flatten().count(), "sequence set");
    }

    pub fn set_insertions(&mut self, insertions: Vec<Option<InsertionCandidate>>) {
        let max_concepts = self.max_concepts;
        self.insertions = insertions
            .into_iter()
            .map(|slot| {
                slot.map(|candidate| {
                    let mut resource = candidate.resource;
                    resource.insertion_confidence = Some(candidate.confidence);
                    resource.is_suggested = true;
                    resource.wikifier.truncate(max_concepts);
                    self.upsert(resource)
                })
            })
            .collect();
        tracing::debug!(
            slots = self.insertions.len(),
            suggested = self.insertions.iter().flatten().count(),
            "insertions set"
        );
    }

    /// Move the suggestion for the gap after `index` into the sequence. The
    /// consumed slot becomes two empty slots so later suggestions stay
    /// aligned with their gaps. Returns the accepted resource, or `None` when
    /// there is no suggestion at `index`.
    pub fn validate_insertion(&mut self, index: usize) -> Option<Arc<Resource>> {
        let suggested = self.insertions.get(index)?.as_ref()?;
        let mut resource = Resource::clone(suggested);
        resource.is_suggested = false;
        let item = self.upsert(resource);

        let at = (index + 1).min(self.sequence.len());
        self.sequence.insert(at, Some(Arc::clone(&item)));
        self.insertions.splice(index..=index, [None, None]);
        tracing::debug!(index, id = item.id, "insertion validated");
        Some(item)
    }
}

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T, R: RngExt>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
