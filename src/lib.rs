//! AutoForm - Conversational form-filling assistant
//!
//! A user describes their details in free text (or transcribed speech); a
//! language model extracts field values for the active form schema, and the
//! assistant asks follow-up questions until every required field is filled.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
