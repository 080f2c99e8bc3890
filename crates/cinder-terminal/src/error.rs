//! Terminal frontend errors

use cinder_app::{AppError, RouteName};
use thiserror::Error;

/// Errors raised while driving a screen in the terminal
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Terminal I/O failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Props could not be derived for the screen
    #[error(transparent)]
    App(#[from] AppError),

    /// The route on top of the stack has no terminal screen
    #[error("No terminal screen for route {}", .route.name())]
    NoScreen {
        /// Route that was on top of the stack
        route: RouteName,
    },

    /// The tracing subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl TerminalError {
    /// Check if the error came from deriving props
    pub fn is_app(&self) -> bool {
        matches!(self, Self::App(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_screen_names_route() {
        let err = TerminalError::NoScreen {
            route: RouteName::Files,
        };
        assert_eq!(err.to_string(), "No terminal screen for route Files");
    }

    #[test]
    fn test_app_error_is_transparent() {
        let err: TerminalError = AppError::missing_param("path").into();
        assert!(err.is_app());
        assert_eq!(err.to_string(), "Missing route parameter: path");
    }
}
