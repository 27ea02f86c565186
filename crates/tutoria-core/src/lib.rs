//! Relay logic and the provider port for Tutoria.
//!
//! This crate defines the "port" (the [`llm::provider::LlmProvider`]
//! trait) that the infrastructure layer implements, plus the transcript
//! assembly and request handling built on top of it. It depends only on
//! `tutoria-types` -- never on `tutoria-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
