use super::*;
use crate::state::session::{SessionPersistence, SessionStore};
use crate::util::storage::MemoryStorage;

#[test]
fn authenticated_session_renders_every_protected_view() {
    let session = Session { authenticated: true };
    for view in ProtectedView::ALL {
        assert_eq!(guard(view, session), GuardDecision::Render(view));
    }
}

#[test]
fn anonymous_session_redirects_every_protected_view_to_landing() {
    let session = Session { authenticated: false };
    for view in ProtectedView::ALL {
        assert_eq!(guard(view, session), GuardDecision::Redirect("/"));
    }
}

#[test]
fn sign_out_flips_the_next_decision() {
    let storage = MemoryStorage::default();
    storage.write("auth", "true");
    let store = SessionStore::restore(storage);
    let session = store.session();

    assert_eq!(guard(ProtectedView::Dashboard, session.get()), GuardDecision::Render(ProtectedView::Dashboard));
    store.sign_out();
    assert_eq!(guard(ProtectedView::Dashboard, session.get()), GuardDecision::Redirect(LANDING_PATH));
}

#[test]
fn protected_paths() {
    assert_eq!(ProtectedView::Dashboard.path(), "/dashboard");
    assert_eq!(ProtectedView::Visualize.path(), "/visualize");
}
