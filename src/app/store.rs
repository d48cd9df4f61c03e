//! The store: owns the state, applies mutations and runs actions against the
//! recommendation API.
//!
//! State lives behind a mutex that is only held while a mutation runs or a
//! consumer reads; actions never hold it across an `.await`. Actions may
//! interleave at network awaits and the last commit wins.

use crate::api::messages::*;
use crate::api::{ApiError, Backend, Endpoint};
use crate::app::action::Action;
use crate::app::event::{MutationKind, StoreEvent};
use crate::app::mutation::Mutation;
use crate::app::state::*;
use crate::config::{AppConfig, DebugConfig, LimitsConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 256;

/// A query for [`Store::query_api`].
#[derive(Debug)]
pub struct ApiQuery<P> {
    pub endpoint: Endpoint,
    pub params: P,
    /// Shown as the loading message while the request is in flight.
    pub message: String,
}

struct Shared {
    state: Mutex<State>,
    events: broadcast::Sender<StoreEvent>,
}

impl Shared {
    fn mutate<R>(&self, kind: MutationKind, f: impl FnOnce(&mut State) -> R) -> R {
        let out = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut state)
        };
        tracing::debug!(mutation = kind.as_str(), "commit");
        // No subscribers is fine.
        let _ = self.events.send(StoreEvent::Committed(kind));
        out
    }

    fn commit(&self, mutation: Mutation) {
        let kind = mutation.kind();
        self.mutate(kind, move |state| state.apply(mutation));
    }
}

/// Commits the loading message on creation and clears it on drop, so every
/// exit path of a query (including early returns and cancellation) stops the
/// spinner exactly once.
struct LoadingGuard {
    shared: Arc<Shared>,
}

impl LoadingGuard {
    fn start(shared: &Arc<Shared>, message: String) -> Self {
        shared.commit(Mutation::SetLoadingMessage(Some(message)));
        Self {
            shared: Arc::clone(shared),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.shared.commit(Mutation::SetLoadingMessage(Some(String::new())));
    }
}

pub struct Store<B> {
    shared: Arc<Shared>,
    backend: B,
    limits: LimitsConfig,
    debug: DebugConfig,
    notification_duration: Duration,
}

impl<B: Backend> Store<B> {
    pub fn new(config: &AppConfig, backend: B) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State::new(config.limits.max_concepts)),
                events,
            }),
            backend,
            limits: config.limits.clone(),
            debug: config.debug.clone(),
            notification_duration: Duration::from_millis(config.notifications.duration_ms),
        }
    }

    /// Receive a [`StoreEvent`] after every committed mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.shared.events.subscribe()
    }

    pub fn read<R>(&self, f: impl FnOnce(&State) -> R) -> R {
        let state = self.shared.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    pub fn snapshot(&self) -> State {
        self.read(State::clone)
    }

    fn commit(&self, mutation: Mutation) {
        self.shared.commit(mutation);
    }

    pub async fn dispatch(&self, action: Action) {
        match action {
            Action::SubmitSearchQuery(query) => self.submit_search_query(&query).await,
            Action::ActivateOverviewReference(id) => self.activate_overview_reference(&id).await,
            Action::SortBasket => self.sort_basket().await,
            Action::SuggestInsertions => self.suggest_insertions().await,
            Action::ShowNotification(message) => {
                self.show_notification(message).await;
            }
            Action::ShowErrorNotification(text) => {
                self.show_error_notification(text).await;
            }
            Action::DismissNotification(message) => self.dismiss_notification(message).await,
            Action::AddToBasket(item) => self.add_to_basket(item).await,
            Action::AddToBasketById(id) => self.add_to_basket_by_id(id).await,
            Action::PopulateBasket(count) => self.populate_basket(count).await,
            Action::StartLoading(message) => self.start_loading(message).await,
            Action::StopLoading => self.stop_loading().await,
            Action::ValidateInsertion(index) => self.validate_insertion(index).await,
        }
    }

    /// POST `params` to the query's endpoint and return the parsed body.
    /// Transport, status, decoding and empty-payload failures all come back as
    /// one [`ApiError`].
    pub async fn query_api<P: Serialize>(&self, query: ApiQuery<P>) -> Result<Value, ApiError> {
        let ApiQuery {
            endpoint,
            params,
            message,
        } = query;
        let _loading = LoadingGuard::start(&self.shared, message);

        let body = serde_json::to_value(&params)?;
        let data = self.backend.post_json(&endpoint, &body).await?;
        if is_falsy(&data) {
            return Err(ApiError::Empty);
        }
        Ok(data)
    }

    async fn query_as<P: Serialize, T: DeserializeOwned>(&self, query: ApiQuery<P>) -> Result<T, ApiError> {
        let data = self.query_api(query).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Search resources. A query of the form `d:<name>` reads the local
    /// fixture `<name>.json` instead of calling the search endpoint.
    pub async fn submit_search_query(&self, query: &str) {
        let endpoint = match query.strip_prefix("d:") {
            Some(name) => Endpoint::Fixture(name.to_string()),
            None => Endpoint::Search,
        };
        let request = ApiQuery {
            endpoint,
            params: SearchRequest {
                q: query,
                max_resources: self.limits.max_search_results,
                max_concepts: self.limits.max_concepts,
            },
            message: format!("Searching for {}", query),
        };

        match self.query_as::<_, SearchResponse>(request).await {
            Ok(data) => {
                tracing::debug!(query, results = data.result.len(), "search result");
                self.commit(Mutation::SetQuery(query.to_string()));
                self.commit(Mutation::UpdateSearchResults(data.result));
            }
            Err(ApiError::Empty) => {
                self.show_error_notification(format!("No data for {}", query)).await;
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "search failed");
                self.show_error_notification(format!("Error when searching: {}", e)).await;
            }
        }
    }

    pub async fn activate_overview_reference(&self, resource_id: &str) {
        let id = match parse_resource_id(resource_id) {
            Some(id) => id,
            None => {
                self.show_error_notification(format!(
                    "Error when fetching neighbors: invalid resource id '{}'",
                    resource_id
                ))
                .await;
                return;
            }
        };
        let endpoint = if self.debug.fixture_reference_ids.contains(&id) {
            Endpoint::Fixture(format!("n{}", id))
        } else {
            Endpoint::Neighbors
        };
        let request = ApiQuery {
            endpoint,
            params: NeighborsRequest {
                id,
                max_concepts: self.limits.max_concepts,
                max_resources: self.limits.max_neighbors,
            },
            message: "Fetching neighbors...".to_string(),
        };

        match self.query_as::<_, NeighborsResponse>(request).await {
            Ok(data) => {
                self.commit(Mutation::SetOverviewReference(data.reference));
                self.commit(Mutation::SetOverviewNeighbors(data.neighbors));
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "neighbors failed");
                self.show_error_notification(format!("Error when fetching neighbors: {}", e))
                    .await;
            }
        }
    }

    pub async fn sort_basket(&self) {
        let basket: Vec<ResourceId> = self.read(|s| s.basket.iter().map(|r| r.id).collect());
        // The sort endpoint rejects empty input.
        if basket.is_empty() {
            self.commit(Mutation::SetSequence(Vec::new()));
            return;
        }
        let request = ApiQuery {
            endpoint: Endpoint::SequenceSort,
            params: SortRequest { basket },
            message: "Sorting basket...".to_string(),
        };

        match self.query_as::<_, SequenceResponse>(request).await {
            Ok(data) => self.commit(Mutation::SetSequence(data.output.sequence)),
            Err(e) => {
                tracing::warn!(error = %e, "sort failed");
                self.show_error_notification(format!("Error when sorting basket: {}", e)).await;
            }
        }
    }

    /// Ask for resources to insert between sequence elements, weighted by the
    /// concepts of the first element.
    pub async fn suggest_insertions(&self) {
        let params = self.read(|s| {
            if s.sequence.is_empty() {
                return None;
            }
            let sequence: Vec<ResourceId> = s.sequence.iter().flatten().map(|r| r.id).collect();
            let concept_weights: Vec<ConceptWeight> = s
                .sequence
                .first()
                .and_then(Option::as_ref)
                .map(|first| {
                    first
                        .wikifier
                        .iter()
                        .filter(|c| !c.url.is_empty())
                        .map(|c| ConceptWeight {
                            concept: c.url.clone(),
                            weight: c.value,
                        })
                        .collect()
                })
                .unwrap_or_default();
            Some(InsertRequest {
                sequence,
                concept_weights,
            })
        });
        let Some(params) = params else { return };

        let request = ApiQuery {
            endpoint: Endpoint::SequenceInsert,
            params,
            message: "Fetching resource suggestions...".to_string(),
        };

        match self.query_as::<_, SequenceResponse>(request).await {
            Ok(data) => {
                self.commit(Mutation::SetSequence(data.output.sequence));
                self.commit(Mutation::SetInsertions(data.output.insertions));
            }
            Err(e) => {
                tracing::warn!(error = %e, "insert suggestions failed");
                self.show_error_notification(format!("Error when getting insert suggestions: {}", e))
                    .await;
            }
        }
    }

    pub async fn show_error_notification(&self, text: String) -> NotificationId {
        self.show_notification(NotificationMessage::error(text)).await
    }

    /// Add a notification and schedule its removal. The returned handle can
    /// be used to look it up while it is visible.
    pub async fn show_notification(&self, message: NotificationMessage) -> NotificationId {
        let id = self.shared.mutate(MutationKind::AddNotification, |s| s.add_notification(message));

        let shared = Arc::clone(&self.shared);
        let duration = self.notification_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            shared.commit(Mutation::RemoveNotification(id));
        });
        id
    }

    /// Close the first visible notification carrying this message.
    pub async fn dismiss_notification(&self, message: NotificationMessage) {
        self.commit(Mutation::DismissNotification(message));
    }

    pub async fn add_to_basket(&self, item: Arc<Resource>) {
        self.commit(Mutation::AddToBasket(item));
    }

    /// Add the cached resource with this id to the basket.
    pub async fn add_to_basket_by_id(&self, id: ResourceId) {
        match self.read(|s| s.resources.get(&id).cloned()) {
            Some(item) => self.commit(Mutation::AddToBasket(item)),
            None => {
                self.show_error_notification(format!("Unknown resource {}", id)).await;
            }
        }
    }

    pub async fn populate_basket(&self, count: usize) {
        self.commit(Mutation::PopulateBasket(count));
    }

    pub async fn start_loading(&self, message: Option<String>) {
        self.commit(Mutation::SetLoadingMessage(message));
    }

    pub async fn stop_loading(&self) {
        self.commit(Mutation::SetLoadingMessage(Some(String::new())));
    }

    /// Accept the suggestion after sequence element `index` and put it in the
    /// basket.
    pub async fn validate_insertion(&self, index: usize) {
        let item = self
            .shared
            .mutate(MutationKind::ValidateInsertion, |s| s.validate_insertion(index));
        match item {
            Some(item) => self.commit(Mutation::AddToBasket(item)),
            None => tracing::warn!(index, "no insertion suggested at this position"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::VecDeque;
    use tokio::sync::broadcast::error::TryRecvError;

    #[derive(Default)]
    struct MockBackend {
        responses: Mutex<VecDeque<Result<Value, ApiError>>>,
        calls: Mutex<Vec<(Endpoint, Value)>>,
    }

    impl MockBackend {
        fn with(responses: Vec<Result<Value, ApiError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Backend for MockBackend {
        async fn post_json(&self, endpoint: &Endpoint, body: &Value) -> Result<Value, ApiError> {
            self.calls.lock().unwrap().push((endpoint.clone(), body.clone()));
            self.responses.lock().unwrap().pop_front().unwrap_or(Err(ApiError::Status(500)))
        }
    }

    fn store(responses: Vec<Result<Value, ApiError>>) -> Store<MockBackend> {
        Store::new(&AppConfig::default(), MockBackend::with(responses))
    }

    fn calls(store: &Store<MockBackend>) -> Vec<(Endpoint, Value)> {
        store.backend.calls.lock().unwrap().clone()
    }

    fn drain(rx: &mut broadcast::Receiver<StoreEvent>) -> Vec<MutationKind> {
        let mut kinds = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(StoreEvent::Committed(kind)) => kinds.push(kind),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                Err(TryRecvError::Lagged(_)) => continue,
            }
        }
        kinds
    }

    fn resource(id: ResourceId, concepts: &[(&str, f64)]) -> Value {
        let wikifier: Vec<Value> = concepts
            .iter()
            .map(|(url, value)| json!({"url": url, "value": value}))
            .collect();
        json!({"id": id, "title": format!("r{}", id), "wikifier": wikifier})
    }

    fn sequence_ids(store: &Store<MockBackend>) -> Vec<Option<ResourceId>> {
        store.read(|s| s.sequence.iter().map(|r| r.as_ref().map(|r| r.id)).collect())
    }

    #[tokio::test]
    async fn test_query_api_failure_pairs_loading() {
        let store = store(vec![Err(ApiError::Status(503))]);
        let mut rx = store.subscribe();

        let result = store
            .query_api(ApiQuery {
                endpoint: Endpoint::Search,
                params: json!({"q": "x"}),
                message: "Working".into(),
            })
            .await;

        assert!(matches!(result, Err(ApiError::Status(503))));
        let kinds = drain(&mut rx);
        assert_eq!(kinds, vec![MutationKind::SetLoadingMessage, MutationKind::SetLoadingMessage]);
        assert!(!store.read(State::is_loading));
    }

    #[tokio::test]
    async fn test_query_api_rejects_falsy_payload() {
        let store = store(vec![Ok(json!(null)), Ok(json!({"ok": true}))]);
        let q = || ApiQuery {
            endpoint: Endpoint::Search,
            params: json!({}),
            message: "m".into(),
        };

        assert!(matches!(store.query_api(q()).await, Err(ApiError::Empty)));
        assert_eq!(store.query_api(q()).await.unwrap(), json!({"ok": true}));
        assert!(!store.read(State::is_loading));
    }

    #[tokio::test]
    async fn test_search_commits_query_and_results() {
        let store = store(vec![Ok(json!({"result": [resource(1, &[]), resource(2, &[])]}))]);

        store.submit_search_query("rust").await;

        let calls = calls(&store);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Endpoint::Search);
        assert_eq!(calls[0].1, json!({"q": "rust", "max_resources": 20, "max_concepts": 10}));
        let state = store.snapshot();
        assert_eq!(state.query, "rust");
        assert_eq!(state.search_results.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(state.resources.contains_key(&2));
    }

    #[tokio::test]
    async fn test_debug_search_uses_fixture() {
        let store = store(vec![Ok(json!({"result": [resource(23345, &[])]}))]);

        store.submit_search_query("d:23345").await;

        assert_eq!(calls(&store)[0].0, Endpoint::Fixture("23345".into()));
        let state = store.snapshot();
        assert_eq!(state.query, "d:23345");
        assert_eq!(state.search_results[0].id, 23345);
    }

    #[tokio::test]
    async fn test_search_failure_keeps_results_and_notifies() {
        let store = store(vec![
            Ok(json!({"result": [resource(1, &[])]})),
            Err(ApiError::Status(502)),
            Ok(json!(null)),
        ]);

        store.submit_search_query("first").await;
        store.submit_search_query("second").await;
        store.submit_search_query("third").await;

        let state = store.snapshot();
        assert_eq!(state.query, "first");
        assert_eq!(state.search_results.len(), 1);
        assert_eq!(state.notifications.len(), 2);
        assert!(state.notifications.iter().all(|n| n.kind == NotificationKind::Error));
        assert!(state.notifications[0].message.text.starts_with("Error when searching:"));
        assert_eq!(state.notifications[1].message.text, "No data for third");
    }

    #[tokio::test]
    async fn test_search_with_wrong_shape_notifies() {
        let store = store(vec![Ok(json!({"unexpected": 1}))]);
        store.submit_search_query("x").await;

        let state = store.snapshot();
        assert!(state.search_results.is_empty());
        assert_eq!(state.notifications.len(), 1);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_overview_reference_routes() {
        let neighbors = json!({"reference": resource(23345, &[]), "neighbors": [resource(5, &[]), resource(6, &[])]});
        let live = json!({"reference": resource(77, &[]), "neighbors": []});
        let store = store(vec![Ok(neighbors), Ok(live)]);

        store.activate_overview_reference("23345").await;
        store.activate_overview_reference(" 77 ").await;

        let calls = calls(&store);
        assert_eq!(calls[0].0, Endpoint::Fixture("n23345".into()));
        assert_eq!(calls[1].0, Endpoint::Neighbors);
        assert_eq!(calls[1].1, json!({"id": 77, "max_concepts": 10, "max_resources": 20}));

        let state = store.snapshot();
        assert_eq!(state.overview_reference.as_ref().map(|r| r.id), Some(77));
        assert!(state.overview_neighbors.is_empty());
        assert!(state.resources.contains_key(&5));
        assert!(state.resources.contains_key(&23345));
    }

    #[tokio::test]
    async fn test_overview_reference_bad_id() {
        let store = store(vec![]);
        store.activate_overview_reference("abc").await;

        assert!(calls(&store).is_empty());
        assert_eq!(store.read(|s| s.notifications.len()), 1);
    }

    #[tokio::test]
    async fn test_sort_empty_basket_skips_network() {
        let store = store(vec![]);
        store.commit(Mutation::UpdateSearchResults(vec![Resource::new(1)]));
        store.commit(Mutation::SetSequence(vec![1]));

        store.sort_basket().await;

        assert!(calls(&store).is_empty());
        assert!(store.read(|s| s.sequence.is_empty()));
    }

    #[tokio::test]
    async fn test_sort_basket_sets_sequence() {
        let store = store(vec![Ok(json!({"output": {"sequence": [2, 1]}}))]);
        store.commit(Mutation::UpdateSearchResults(vec![Resource::new(1), Resource::new(2)]));
        store.add_to_basket_by_id(1).await;
        store.add_to_basket_by_id(2).await;

        store.sort_basket().await;

        assert_eq!(calls(&store)[0].1, json!({"basket": [1, 2]}));
        assert_eq!(sequence_ids(&store), vec![Some(2), Some(1)]);
    }

    #[tokio::test]
    async fn test_suggest_insertions_empty_sequence_is_noop() {
        let store = store(vec![]);
        store.read(|s| assert!(s.insertions.is_empty()));

        store.suggest_insertions().await;

        assert!(calls(&store).is_empty());
        assert!(store.read(|s| s.insertions.is_empty()));
    }

    #[tokio::test]
    async fn test_suggest_insertions_posts_first_concepts() {
        let reply = json!({
            "output": {
                "sequence": [1, 2],
                "insertions": [{"resource": resource(9, &[("a", 0.1), ("b", 0.2)]), "confidence": 0.8}, null]
            }
        });
        let store = store(vec![Ok(reply)]);
        let first: Resource = serde_json::from_value(resource(1, &[("http://x/A", 0.7), ("http://x/B", 0.3)])).unwrap();
        store.commit(Mutation::UpdateSearchResults(vec![first, Resource::new(2)]));
        store.commit(Mutation::SetSequence(vec![1, 2]));

        store.suggest_insertions().await;

        assert_eq!(
            calls(&store)[0].1,
            json!({
                "sequence": [1, 2],
                "concept_weights": [
                    {"concept": "http://x/A", "weight": 0.7},
                    {"concept": "http://x/B", "weight": 0.3}
                ]
            })
        );
        let state = store.snapshot();
        assert_eq!(state.insertions.len(), 2);
        let s = state.insertions[0].as_ref().unwrap();
        assert_eq!(s.id, 9);
        assert_eq!(s.insertion_confidence, Some(0.8));
        assert!(state.resources.contains_key(&9));
    }

    #[tokio::test]
    async fn test_validate_insertion_adds_to_basket() {
        let store = store(vec![]);
        store.commit(Mutation::UpdateSearchResults(vec![Resource::new(1), Resource::new(2)]));
        store.commit(Mutation::SetSequence(vec![1, 2]));
        store.commit(Mutation::SetInsertions(vec![
            Some(InsertionCandidate { resource: Resource::new(9), confidence: 0.5 }),
            None,
        ]));

        store.validate_insertion(0).await;
        store.validate_insertion(0).await;

        let state = store.snapshot();
        assert_eq!(sequence_ids(&store), vec![Some(1), Some(9), Some(2)]);
        assert_eq!(state.basket.len(), 1);
        assert_eq!(state.basket[0].id, 9);
        assert!(!state.basket[0].is_suggested);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_auto_dismiss() {
        let store = store(vec![]);
        let id = store.show_notification(NotificationMessage::info("hi")).await;
        store.read(|s| {
            assert_eq!(s.notifications.len(), 1);
            assert_eq!(s.notifications[0].id, id);
            assert_eq!(s.notifications[0].kind, NotificationKind::Info);
        });

        tokio::time::sleep(Duration::from_millis(4000)).await;
        assert_eq!(store.read(|s| s.notifications.len()), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        tokio::task::yield_now().await;
        assert!(store.read(|s| s.notifications.is_empty()));
    }

    #[tokio::test]
    async fn test_dispatch_pass_throughs() {
        let store = store(vec![]);
        let mut rx = store.subscribe();

        store.dispatch(Action::StartLoading(None)).await;
        assert_eq!(store.read(|s| s.loading_message.clone()), "Loading...");
        store.dispatch(Action::StopLoading).await;
        assert!(!store.read(State::is_loading));

        let item = Arc::new(Resource::new(3));
        store.dispatch(Action::AddToBasket(Arc::clone(&item))).await;
        store.dispatch(Action::AddToBasket(item)).await;
        store.dispatch(Action::AddToBasketById(404)).await;
        assert_eq!(store.read(|s| s.basket.len()), 1);

        let kinds = drain(&mut rx);
        assert_eq!(kinds.iter().filter(|k| **k == MutationKind::AddToBasket).count(), 2);
        assert_eq!(kinds.last(), Some(&MutationKind::AddNotification));
    }

    #[tokio::test]
    async fn test_search_keeps_resources_with_unnamed_concepts() {
        let reply = json!({
            "result": [
                {"id": 1, "wikifier": [{"name": "x", "value": 0.3}]},
                resource(2, &[("http://x/A", 0.9)])
            ]
        });
        let store = store(vec![Ok(reply)]);

        store.submit_search_query("mixed").await;

        let state = store.snapshot();
        assert_eq!(state.search_results.len(), 2);
        assert!(state.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_suggest_insertions_skips_concepts_without_url() {
        let store = store(vec![Ok(json!({"output": {"sequence": [1], "insertions": [null]}}))]);
        let first: Resource = serde_json::from_value(json!({
            "id": 1,
            "wikifier": [{"name": "x", "value": 0.3}, {"url": "http://x/B", "value": 0.5}]
        }))
        .unwrap();
        store.commit(Mutation::UpdateSearchResults(vec![first]));
        store.commit(Mutation::SetSequence(vec![1]));

        store.suggest_insertions().await;

        assert_eq!(
            calls(&store)[0].1["concept_weights"],
            json!([{"concept": "http://x/B", "weight": 0.5}])
        );
    }

    #[tokio::test]
    async fn test_overview_reference_accepts_numeric_text() {
        let reply = || Ok(json!({"reference": resource(23345, &[]), "neighbors": []}));
        let store = store(vec![reply(), reply()]);

        store.activate_overview_reference("23345.0").await;
        store.activate_overview_reference("1e3").await;

        let calls = calls(&store);
        assert_eq!(calls[0].0, Endpoint::Fixture("n23345".into()));
        assert_eq!(calls[1].0, Endpoint::Neighbors);
        assert_eq!(calls[1].1["id"], 1000);
    }

    #[tokio::test]
    async fn test_dismiss_notification_by_message() {
        let store = store(vec![]);
        store.show_notification(NotificationMessage::info("same")).await;
        let second = store.show_notification(NotificationMessage::info("same")).await;
        store.show_error_notification("other".into()).await;

        store
            .dispatch(Action::DismissNotification(NotificationMessage::info("same")))
            .await;

        let left: Vec<_> = store.read(|s| s.notifications.iter().map(|n| n.id).collect());
        assert_eq!(left.len(), 2);
        assert_eq!(left[0], second);

        store
            .dispatch(Action::DismissNotification(NotificationMessage::info("absent")))
            .await;
        assert_eq!(store.read(|s| s.notifications.len()), 2);
    }
}
