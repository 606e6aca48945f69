//! Builtin integration catalogs.
//!
//! Each submodule is one integration expressed purely as data: an
//! [`App`](crate::App) record listing its actions, fields, and
//! policies. The modules mirror the aggregation provider's generated
//! per-app definitions; none of them contains behavior.

pub mod discordbot;
pub mod googledrive;
pub mod googletasks;
pub mod reddit;

use crate::registry::AppRegistry;

/// Registry pre-loaded with every builtin app.
///
/// # Panics
///
/// Panics if a builtin catalog is internally inconsistent; that is a
/// build-time data bug, caught by the test below and by every caller
/// at startup.
#[must_use]
pub fn builtin() -> AppRegistry {
    let mut registry = AppRegistry::new();
    for app in [
        discordbot::app(),
        googledrive::app(),
        googletasks::app(),
        reddit::app(),
    ] {
        registry
            .register(app)
            .expect("builtin app catalog must be consistent");
    }
    registry
}
