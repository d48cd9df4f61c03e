//! Core application logic: state, mutations, actions and the store that ties
//! them together.

pub mod action;
pub mod event;
pub mod mutation;
pub mod state;
pub mod store;
