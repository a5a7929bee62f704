//! Pipeline stages and infrastructure adapters for `macsweep`.
//!
//! * [`parser`], [`fetch`], [`enrich`], [`export`]: the individual stages.
//! * [`session`], [`vendors`]: SSH and HTTP implementations of the common ports.
//! * [`audit`]: the service wiring the stages together.

pub mod audit;
pub mod enrich;
pub mod export;
pub mod fetch;
pub mod parser;
pub mod session;
pub mod vendors;
