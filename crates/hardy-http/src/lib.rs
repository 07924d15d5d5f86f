//! # Hardy HTTP
//!
//! Minimal HTTP response representation shared across the Hardy framework.
//!
//! The negotiation engine and its processors build [`Response`] values;
//! the surrounding server layer turns them into wire responses.

pub mod response;

pub use response::Response;
