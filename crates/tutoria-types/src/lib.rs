//! Shared domain types for Tutoria.
//!
//! This crate contains the core domain types used across the relay:
//! conversation turns, generation request/response shapes, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod error;
pub mod llm;
