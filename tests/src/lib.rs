//! End-to-end tests for the audit pipeline, driven through in-memory ports.

#[cfg(test)]
mod pipeline;
