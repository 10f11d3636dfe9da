#![forbid(unsafe_code)]

//! Dialog error values.
//!
//! Nothing on the build path propagates these to the caller: the default
//! policy is that a styling or resource problem must never keep the dialog
//! from appearing. Every swallowed failure is logged and handed to the
//! optional error observer so callers can still detect it programmatically.

use std::fmt;

use thiserror::Error;

/// The customization stage a hook failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookStage {
    Title,
    Message,
    Buttons,
    Icon,
    Background,
    Window,
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Message => "message",
            Self::Buttons => "buttons",
            Self::Icon => "icon",
            Self::Background => "background",
            Self::Window => "window",
        };
        f.write_str(name)
    }
}

/// Failure returned by a customization hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CustomizeError(String);

impl CustomizeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<&str> for CustomizeError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for CustomizeError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// A failure swallowed during dialog materialization or live update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("icon `{id}` could not be resolved")]
    IconResolve { id: String },
    #[error("{stage} customization hook failed: {message}")]
    Customize { stage: HookStage, message: String },
}

/// Observer for swallowed failures. The default is log-only.
pub type ErrorObserver = Box<dyn FnMut(&DialogError)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = DialogError::IconResolve { id: "gear".into() };
        assert_eq!(err.to_string(), "icon `gear` could not be resolved");

        let err = DialogError::Customize {
            stage: HookStage::Buttons,
            message: "bad color".into(),
        };
        assert_eq!(
            err.to_string(),
            "buttons customization hook failed: bad color"
        );
    }

    #[test]
    fn customize_error_from_str() {
        let err: CustomizeError = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }
}
