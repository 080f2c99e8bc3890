//! Canned test data

use cinder_app::{
    delete_folder_waiting_key, AppState, FsPath, RouteEntry, RouteProps, Store,
};
use std::sync::Arc;

/// Path used throughout the delete confirmation scenarios
pub const ALICE_DOC: &str = "/keybase/private/alice/doc.txt";

/// Parse a path known to be valid
pub fn path(raw: &str) -> FsPath {
    match FsPath::parse(raw) {
        Ok(path) => path,
        Err(e) => panic!("fixture path {raw:?} is invalid: {e}"),
    }
}

/// `/keybase/private/alice/doc.txt`
pub fn alice_doc() -> FsPath {
    path(ALICE_DOC)
}

/// Route props for the delete confirmation screen of `path`
pub fn delete_route(path: &FsPath) -> RouteProps {
    RouteEntry::really_delete(path).props
}

/// State with the delete confirmation for `path` on top of the stack,
/// optionally with a delete of `path` in flight
pub fn delete_state(path: &FsPath, waiting: bool) -> AppState {
    let mut state = AppState::with_route(RouteEntry::really_delete(path));
    if waiting {
        state.waiting.increment(&delete_folder_waiting_key(path));
    }
    state
}

/// Shared store holding [`delete_state`]
pub fn delete_store(path: &FsPath, waiting: bool) -> Arc<Store> {
    Store::shared(delete_state(path, waiting))
}
