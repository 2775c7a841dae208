//! Edit/create product form core.
//!
//! - [`form`] - field values, validators and the pure form reducer
//! - [`submit`] - turns a valid form into a repository create/update
//! - [`session`] - one open screen: seeding, edits, submit, host callbacks
//! - [`catalog`] - product entity and the repository boundary

pub mod catalog;
pub mod config;
pub mod form;
pub mod logging;
pub mod mvi;
pub mod session;
pub mod submit;
