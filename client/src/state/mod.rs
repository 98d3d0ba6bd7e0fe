//! Client-side state and the components that own it.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `metrics`, `csv`, `chat`, ...) and
//! each module's component is the only writer of its `Store`. Views read
//! snapshots only; none of these components look at each other's state
//! except where an action explicitly triggers a refresh.

pub mod actions;
pub mod chat;
pub mod csv;
pub mod health;
pub mod metrics;
pub mod session;
pub mod store;
