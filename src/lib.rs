//! Error handling contract for the Rexxar web container
//!
//! This crate defines the identifiers and the capability interface through
//! which Rexxar components report failures to one another without coupling to
//! a concrete handler type. It carries no policy of its own: who implements
//! the handler, and how many handlers coexist, is decided by the embedding
//! application.
//!
//! # Key Features
//!
//! - **Domain + code classification**: errors carry a namespace string and a
//!   domain-scoped integer code
//! - **Shared constants**: the HTTP error domain, the user-info URL key, and
//!   the "not found" sentinel other components compare against
//! - **Capability interface**: [`ErrorHandler`], a fire-and-forget
//!   notification sink safe to invoke from any thread
//! - **Structured logging**: [`TracingErrorHandler`] emits one `tracing`
//!   event per notification
//!
//! # Example
//!
//! ```rust
//! use rexxar_error::{ErrorHandler, Reporter, RexxarError};
//!
//! struct AlertHandler;
//!
//! impl ErrorHandler for AlertHandler {
//!     fn handle_error(&self, error: Option<&RexxarError>, _reporter: Option<&dyn Reporter>) {
//!         if let Some(err) = error {
//!             if err.is_http_not_found() {
//!                 println!("missing resource: {}", err.url().unwrap_or("<no url>"));
//!             }
//!         }
//!     }
//! }
//!
//! let err = RexxarError::http_not_found("https://example.com/x");
//! AlertHandler.handle_error(Some(&err), Some(&"resource_loader"));
//! ```

pub mod codes;
pub mod context;
pub mod reporting;
pub mod types;

pub use codes::*;
pub use context::*;
pub use reporting::*;
pub use types::*;
