//! # Toolbridge Catalog
//!
//! Declarative data model for the toolbridge dispatch engine.
//!
//! An aggregation provider exposes hundreds of third-party integrations
//! ("apps"), each with its own set of invocable actions and per-action
//! parameter fields. This crate represents all of that as data: an
//! [`App`] owns an action catalog and a field registry, and the engine
//! crate consumes those records generically. There is no per-integration
//! control flow anywhere — adding an app means adding a table, not a type.
//!
//! ## Core Types
//!
//! - [`App`] — one integration: catalog + field registry + policies
//! - [`ActionSpec`] — one invocable operation and the fields it consumes
//! - [`FieldDef`] / [`FieldKind`] — typed field descriptors
//! - [`FieldValues`] — explicit store for current user-entered values
//! - [`ExtractionMode`] — per-app success-payload policy
//! - [`AppRegistry`] — keyed lookup of loaded apps
//!
//! The [`apps`] module holds the builtin integration catalogs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Action catalog entries and result-extraction directives.
pub mod action;
/// The `App` record: one integration's catalog, registry, and policies.
pub mod app;
/// Builtin integration catalogs (Reddit, Discord bot, Google Drive, Google Tasks).
pub mod apps;
/// Error type for catalog operations.
pub mod error;
/// Success-payload extraction policies.
pub mod extract;
/// Typed field descriptors.
pub mod field;
/// Keyed registry of loaded apps.
pub mod registry;
/// Explicit field-value store.
pub mod values;

pub use action::{ActionSpec, ResultExtraction};
pub use app::App;
pub use error::CatalogError;
pub use extract::ExtractionMode;
pub use field::{FieldDef, FieldKind};
pub use registry::AppRegistry;
pub use values::FieldValues;

/// Convenience re-exports for catalog authors.
pub mod prelude {
    pub use crate::action::{ActionSpec, ResultExtraction};
    pub use crate::app::App;
    pub use crate::error::CatalogError;
    pub use crate::extract::ExtractionMode;
    pub use crate::field::{FieldDef, FieldKind};
    pub use crate::registry::AppRegistry;
    pub use crate::values::FieldValues;
}
