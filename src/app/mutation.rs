use crate::app::event::MutationKind;
use crate::app::state::*;
use std::sync::Arc;

/// Synchronous state transitions. Consumers never build these directly; the
/// store's actions commit them.
#[derive(Debug)]
pub enum Mutation {
    UpdateSearchResults(Vec<Resource>),
    SetQuery(String),
    AddNotification(NotificationMessage),
    RemoveNotification(NotificationId),
    DismissNotification(NotificationMessage),
    SetOverviewReference(Resource),
    SetOverviewNeighbors(Vec<Resource>),
    SetLoadingMessage(Option<String>),
    AddToBasket(Arc<Resource>),
    PopulateBasket(usize),
    SetSequence(Vec<ResourceId>),
    SetInsertions(Vec<Option<InsertionCandidate>>),
    ValidateInsertion(usize),
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::UpdateSearchResults(_) => MutationKind::UpdateSearchResults,
            Mutation::SetQuery(_) => MutationKind::SetQuery,
            Mutation::AddNotification(_) => MutationKind::AddNotification,
            Mutation::RemoveNotification(_) => MutationKind::RemoveNotification,
            Mutation::DismissNotification(_) => MutationKind::DismissNotification,
            Mutation::SetOverviewReference(_) => MutationKind::SetOverviewReference,
            Mutation::SetOverviewNeighbors(_) => MutationKind::SetOverviewNeighbors,
            Mutation::SetLoadingMessage(_) => MutationKind::SetLoadingMessage,
            Mutation::AddToBasket(_) => MutationKind::AddToBasket,
            Mutation::PopulateBasket(_) => MutationKind::PopulateBasket,
            Mutation::SetSequence(_) => MutationKind::SetSequence,
            Mutation::SetInsertions(_) => MutationKind::SetInsertions,
            Mutation::ValidateInsertion(_) => MutationKind::ValidateInsertion,
        }
    }
}

impl State {
    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::UpdateSearchResults(results) => self.update_search_results(results),
            Mutation::SetQuery(query) => self.set_query(query),
            Mutation::AddNotification(message) => {
                self.add_notification(message);
            }
            Mutation::RemoveNotification(id) => self.remove_notification(id),
            Mutation::DismissNotification(message) => self.dismiss_notification(&message),
            Mutation::SetOverviewReference(resource) => self.set_overview_reference(resource),
            Mutation::SetOverviewNeighbors(neighbors) => self.set_overview_neighbors(neighbors),
            Mutation::SetLoadingMessage(message) => self.set_loading_message(message),
            Mutation::AddToBasket(item) => self.add_to_basket(item),
            Mutation::PopulateBasket(count) => self.populate_basket(count, &mut rand::rng()),
            Mutation::SetSequence(ids) => self.set_sequence(&ids),
            Mutation::SetInsertions(insertions) => self.set_insertions(insertions),
            Mutation::ValidateInsertion(index) => {
                self.validate_insertion(index);
            }
        }
    }
}
