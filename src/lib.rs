//! Client-side store for searching resources, collecting them in a basket,
//! ordering the basket into a sequence and reviewing suggested insertions.
//!
//! The [`Store`](app::store::Store) owns all state. Consumers read it through
//! [`Store::read`](app::store::Store::read) or a snapshot, and change it only
//! by running actions, which talk to the recommendation API through a
//! [`Backend`](api::Backend) and commit [`Mutation`](app::mutation::Mutation)s.

pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod ui;
