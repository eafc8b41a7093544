//! Search-result reconciliation and card presentation.
//!
//! This crate has no I/O and no internal dependencies. It turns a raw
//! query snapshot (loading flag, failure, payload) into exactly one
//! [`reconcile::SearchState`], maps each surviving [`character::Character`]
//! to a display-safe [`presenter::CardView`], and tracks which query is
//! current via [`view::SearchView`].

pub mod character;
pub mod error;
pub mod markers;
pub mod presenter;
pub mod reconcile;
pub mod view;
