//! Provider specific [`VisionClient`](crate::client_wrapper::VisionClient) implementations.
//!
//! Each submodule offers a concrete client that speaks a particular vendor's API while
//! conforming to the uniform imageprompt contract.

pub mod common;
pub mod http_pool;

pub mod groq;
