//! Route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes evaluate this on every navigation; the decision is never
//! cached, so signing out while a protected view is open redirects the next
//! guarded render.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::Session;

pub const LANDING_PATH: &str = "/";

/// Views that require a signed-in session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtectedView {
    Dashboard,
    Visualize,
}

impl ProtectedView {
    pub const ALL: [Self; 2] = [Self::Dashboard, Self::Visualize];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Visualize => "/visualize",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render(ProtectedView),
    Redirect(&'static str),
}

/// Admit `view` iff the session is authenticated.
pub fn guard(view: ProtectedView, session: Session) -> GuardDecision {
    if session.authenticated { GuardDecision::Render(view) } else { GuardDecision::Redirect(LANDING_PATH) }
}
