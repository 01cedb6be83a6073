//! HTTP client module for the applications service

mod client;
mod error;
mod traits;

pub use client::{ApplicationClient, DEFAULT_ADDRESS};
pub use error::{SubmitError, GENERIC_FAILURE_MESSAGE};
pub use traits::ApplicationClientTrait;

#[cfg(test)]
pub use traits::MockApplicationClientTrait;
