//! # Delete Confirmation Binding
//!
//! Connects the "really delete" confirmation screen to the store.
//!
//! - The target path comes from the route's `path` parameter.
//! - `deleting` is the waiting flag for the path's delete key.
//! - `on_delete` dispatches `DeleteFile(path)` and then `NavigateUp`,
//!   always both, always in that order. Navigation does not wait for the
//!   delete to finish or succeed.
//! - `on_back` dispatches `NavigateUp`, except while `deleting`, when it is
//!   a no-op so the user cannot leave an in-flight delete.

use crate::core::{AppState, Dispatcher, Intent};
use crate::errors::AppError;
use crate::fs::FsPath;
use crate::route::RouteProps;
use crate::waiting::delete_folder_waiting_key;

use super::binding::Binding;
use super::callback::Callback;

/// Title shown on the confirmation screen
pub const DELETE_CONFIRMATION_TITLE: &str = "Confirmation";

/// Route parameter carrying the target path
pub const PATH_PARAM: &str = "path";

/// Props for the delete confirmation screen
#[derive(Clone, Debug)]
pub struct DeleteConfirmationProps {
    /// Path that will be deleted
    pub path: FsPath,
    /// Screen title
    pub title: String,
    /// Confirm the delete
    pub on_delete: Callback,
    /// Leave the screen (no-op while deleting)
    pub on_back: Callback,
    /// Whether a delete of `path` is in flight
    pub deleting: bool,
}

/// Binding for the delete confirmation screen
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteConfirmationBinding;

impl DeleteConfirmationBinding {
    fn make_delete(dispatcher: &Dispatcher, path: &FsPath) -> Callback {
        let dispatcher = dispatcher.clone();
        let path = path.clone();
        Callback::new(move || {
            tracing::info!(path = %path, "Delete confirmed");
            dispatcher.dispatch(Intent::delete_file(path.clone()));
            dispatcher.dispatch(Intent::navigate_up());
        })
    }

    fn make_back(dispatcher: &Dispatcher) -> Callback {
        let dispatcher = dispatcher.clone();
        Callback::new(move || dispatcher.dispatch(Intent::navigate_up()))
    }
}

impl Binding for DeleteConfirmationBinding {
    type Props = DeleteConfirmationProps;

    fn derive_props(
        &self,
        state: &AppState,
        route: &RouteProps,
        dispatcher: &Dispatcher,
    ) -> Result<DeleteConfirmationProps, AppError> {
        let path = route.path(PATH_PARAM)?;
        let deleting = state.waiting.is_waiting(&delete_folder_waiting_key(&path));

        let on_back = if deleting {
            Callback::noop()
        } else {
            Self::make_back(dispatcher)
        };

        Ok(DeleteConfirmationProps {
            on_delete: Self::make_delete(dispatcher, &path),
            on_back,
            title: DELETE_CONFIRMATION_TITLE.to_string(),
            deleting,
            path,
        })
    }
}
