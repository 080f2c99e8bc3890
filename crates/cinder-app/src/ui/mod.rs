//! UI-facing facade for cinder-app.
//!
//! Bindings turn store state into flat props values; presentational code in
//! the frontends consumes only those values.
//!
//! - [`Binding`]: the connector trait
//! - [`DeleteConfirmationBinding`]: "really delete" screen
//! - [`ConversationErrorBinding`]: conversation load failure screen
//! - [`Callback`], [`SafeSubmit`]: callback handles and the duplicate-submit guard

mod binding;
mod callback;
mod delete_confirmation;
mod error_panel;
mod safe_submit;

pub use binding::Binding;
pub use callback::Callback;
pub use delete_confirmation::{
    DeleteConfirmationBinding, DeleteConfirmationProps, DELETE_CONFIRMATION_TITLE, PATH_PARAM,
};
pub use error_panel::{
    error_panel_layout, ConversationErrorBinding, ConversationErrorProps,
    ConversationErrorScreenProps, ErrorPanelLayout, PanelChrome, CONVERSATION_ERROR_BODY,
    CONVERSATION_ERROR_HEADER, ERROR_TEXT_PARAM,
};
pub use safe_submit::SafeSubmit;
