//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `form` - Form schemas and the built-in default form
//! - `conversation` - Conversation aggregate, extraction parsing and dialogue policy

pub mod conversation;
pub mod form;
pub mod foundation;
