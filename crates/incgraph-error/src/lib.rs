//! # incgraph-error
//!
//! Unified error handling for incgraph - following OpenDAL's error handling practices.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., ConfigInvalid, FileNotFound)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use incgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ConfigInvalid, "granularity is not an integer")
//!         .with_operation("config::load")
//!         .with_context("path", "incgraph.toml"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All functions return `Result<T, incgraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using incgraph Error
pub type Result<T> = std::result::Result<T, Error>;
