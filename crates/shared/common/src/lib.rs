//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling
//! - The command response envelope
//! - Localized message lookup
//! - Configuration structures

pub mod config;
pub mod error;
pub mod resources;
pub mod response;

pub use config::*;
pub use error::{AppError, AppResult};
pub use resources::{MessageSource, ResourceKey, Resources};
pub use response::{CommandError, CommandResponse, CommandResult};

#[cfg(any(test, feature = "test-utils"))]
pub use resources::MockMessageSource;
