//! Core installer functionality
//!
//! Scope resolution, delegation to the external scripts, and the postinstall banner.

pub mod banner;
pub mod delegate;
pub mod scope;

pub use delegate::{DelegatedAction, Delegator};
pub use scope::{InstallationStatus, Scope, ScopeResolver};
