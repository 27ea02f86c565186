//! Request handlers for the HTTP API.

pub mod chat;
