/// Name of a committed mutation, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    UpdateSearchResults,
    SetQuery,
    AddNotification,
    RemoveNotification,
    DismissNotification,
    SetOverviewReference,
    SetOverviewNeighbors,
    SetLoadingMessage,
    AddToBasket,
    PopulateBasket,
    SetSequence,
    SetInsertions,
    ValidateInsertion,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::UpdateSearchResults => "update_search_results",
            MutationKind::SetQuery => "set_query",
            MutationKind::AddNotification => "add_notification",
            MutationKind::RemoveNotification => "remove_notification",
            MutationKind::DismissNotification => "dismiss_notification",
            MutationKind::SetOverviewReference => "set_overview_reference",
            MutationKind::SetOverviewNeighbors => "set_overview_neighbors",
            MutationKind::SetLoadingMessage => "set_loading_message",
            MutationKind::AddToBasket => "add_to_basket",
            MutationKind::PopulateBasket => "populate_basket",
            MutationKind::SetSequence => "set_sequence",
            MutationKind::SetInsertions => "set_insertions",
            MutationKind::ValidateInsertion => "validate_insertion",
        }
    }
}

/// Sent to every subscriber after a mutation has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Committed(MutationKind),
}
