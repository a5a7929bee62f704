//! Shared building blocks for `macsweep`.
//!
//! * **[`network`]**: the switch-side domain model (targets, credentials, MAC records).
//! * **[`session`]** and **[`vendors`]**: the outbound ports the pipeline is driven through.
//! * **[`config`]** and **[`error`]**: run settings and the error taxonomy.

pub mod config;
pub mod error;
pub mod network;
pub mod session;
pub mod vendors;
