//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they read mirrored signals handed to them
//! as props and report user intent through callbacks. Controllers live in
//! the pages.

pub mod chat_panel;
pub mod csv_preview;
pub mod metrics_panel;
pub mod navbar;
pub mod notice_banner;
pub mod protected;
