use crate::app::state::{NotificationMessage, Resource, ResourceId};
use std::sync::Arc;

/// Everything a consumer can ask the store to do.
#[derive(Debug)]
pub enum Action {
    SubmitSearchQuery(String),
    ActivateOverviewReference(String),
    SortBasket,
    SuggestInsertions,
    ShowNotification(NotificationMessage),
    ShowErrorNotification(String),
    DismissNotification(NotificationMessage),
    AddToBasket(Arc<Resource>),
    AddToBasketById(ResourceId),
    PopulateBasket(usize),
    StartLoading(Option<String>),
    StopLoading,
    ValidateInsertion(usize),
}
