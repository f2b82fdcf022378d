//! The `services` module provides a high-level API for interacting with the
//! database. It encapsulates all the SQL logic and data access patterns,
//! allowing the HTTP handlers to work with domain models without knowing
//! about the underlying schema or queries.
//!
//! Each sub-module is responsible for one entity. All public functions are
//! re-exported here for convenient access under `crate::db::services::`.

pub mod question_service;
pub mod tag_service;

pub use question_service::*;
pub use tag_service::*;
