//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages are wrapped by `components::protected`
//! in the router, not here.

pub mod dashboard;
pub mod info;
pub mod landing;
pub mod visualize;
