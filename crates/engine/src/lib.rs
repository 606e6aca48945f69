//! Action resolution and dispatch for toolbridge integrations.
//!
//! The engine is the generic half of the integration layer: it takes the
//! declarative app catalogs from `toolbridge-catalog`, resolves the
//! user's action selection, assembles call parameters from stored field
//! values, forwards one blocking call through a [`toolset::Toolset`], and
//! re-shapes the response for the workflow surface.
//!
//! Catalogs are read-only after load, so invokers can be shared freely
//! across threads without locking. Timeouts, retries and rate limiting
//! belong to the toolset implementation, not to this crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dispatch;
pub mod error;
pub mod invoke;
pub mod normalize;
pub mod params;
pub mod resolver;
pub mod toolset;
pub mod visibility;

pub use dispatch::Dispatcher;
pub use error::EngineError;
pub use invoke::Invoker;
pub use normalize::{normalize, Outcome, RawMessage, RemoteError};
pub use params::{build_params, json_truthy};
pub use resolver::{ActionResolver, ActionSelection, NamedChoice};
pub use toolset::{ActionIdMap, RawResult, Toolset, ToolsetError};
pub use visibility::{apply_visibility, BuildConfig, FieldState};

/// Commonly used engine types.
pub mod prelude {
    pub use crate::error::EngineError;
    pub use crate::invoke::Invoker;
    pub use crate::normalize::{Outcome, RemoteError};
    pub use crate::resolver::ActionSelection;
    pub use crate::toolset::{ActionIdMap, RawResult, Toolset, ToolsetError};
}
