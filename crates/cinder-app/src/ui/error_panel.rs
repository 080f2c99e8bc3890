//! # Conversation Error Panel
//!
//! View model for the panel shown when a conversation fails to load. The
//! panel is a pure function of the error text: a header, an explanatory
//! line and a copyable box holding the error itself.
//!
//! Whether the panel is wrapped in a navigation header is a platform
//! decision made once from configuration ([`PanelChrome::for_platform`]),
//! not something a render pass decides.

use crate::config::Platform;
use crate::core::{AppState, Dispatcher, Intent};
use crate::errors::AppError;
use crate::route::{RouteName, RouteProps};

use super::binding::Binding;
use super::callback::Callback;

/// Header line of the panel
pub const CONVERSATION_ERROR_HEADER: &str = "There was an error loading this conversation.";

/// Line introducing the error text
pub const CONVERSATION_ERROR_BODY: &str = "The error is:";

/// Route parameter carrying the error text
pub const ERROR_TEXT_PARAM: &str = "conversation_error_text";

/// Props for the conversation error panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationErrorProps {
    /// Error text to show and allow copying
    pub conversation_error_text: String,
}

impl ConversationErrorProps {
    /// Create props for `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            conversation_error_text: text.into(),
        }
    }
}

/// Fixed three-part layout of the panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorPanelLayout {
    /// Header line
    pub header: &'static str,
    /// Explanatory line
    pub body: &'static str,
    /// Copyable error text
    pub error_text: String,
}

/// Lay out the panel for `props`
pub fn error_panel_layout(props: &ConversationErrorProps) -> ErrorPanelLayout {
    ErrorPanelLayout {
        header: CONVERSATION_ERROR_HEADER,
        body: CONVERSATION_ERROR_BODY,
        error_text: props.conversation_error_text.clone(),
    }
}

/// Presentation chrome around a leaf screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelChrome {
    /// Render the screen directly
    Bare,
    /// Wrap the screen in a navigation header with a back affordance
    HeaderWrapped {
        /// Header title
        title: String,
    },
}

impl PanelChrome {
    /// Chrome for the conversation error screen on `platform`
    pub fn for_platform(platform: Platform) -> Self {
        if platform.needs_header() {
            Self::HeaderWrapped {
                title: RouteName::ConversationError.name().to_string(),
            }
        } else {
            Self::Bare
        }
    }

    /// Check if a header is drawn
    pub fn has_header(&self) -> bool {
        matches!(self, Self::HeaderWrapped { .. })
    }
}

/// Props plus the header's back action
#[derive(Clone, Debug)]
pub struct ConversationErrorScreenProps {
    /// Panel contents
    pub panel: ConversationErrorProps,
    /// Back action used by the navigation header
    pub on_back: Callback,
}

/// Binding for the conversation error screen.
///
/// Reads only route parameters; the panel does not depend on global state.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConversationErrorBinding;

impl Binding for ConversationErrorBinding {
    type Props = ConversationErrorScreenProps;

    fn derive_props(
        &self,
        _state: &AppState,
        route: &RouteProps,
        dispatcher: &Dispatcher,
    ) -> Result<ConversationErrorScreenProps, AppError> {
        let text = route.require(ERROR_TEXT_PARAM)?;
        let dispatcher = dispatcher.clone();
        Ok(ConversationErrorScreenProps {
            panel: ConversationErrorProps::new(text),
            on_back: Callback::new(move || dispatcher.dispatch(Intent::navigate_up())),
        })
    }
}
