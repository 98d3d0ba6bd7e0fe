//! Networking modules for the backend HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `Backend` seam and its `gloo-net` implementation, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod stub;
