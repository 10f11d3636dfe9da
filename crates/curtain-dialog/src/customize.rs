#![forbid(unsafe_code)]

//! Caller customization of generated sub-views.
//!
//! A `Customizer` is a record of optional callbacks, one per sub-view
//! category, invoked once per (re)build in a fixed order: title, message,
//! left button, right button, central button, icon, background, window.
//! Hooks return `Result` so styling failures stay explicit; a failing hook
//! is logged, reported to the error observer, and never blocks the
//! remaining hooks or the display.

use crate::config::Slot;
use crate::error::CustomizeError;
use crate::overlay::WindowView;
use crate::views::{BackgroundPanel, ButtonView, IconView, MessageView, TitleView};

/// Result type of a customization hook.
pub type HookResult = Result<(), CustomizeError>;

type Hook<V> = Box<dyn FnMut(&mut V) -> HookResult>;

/// Optional post-processing callbacks for each sub-view category.
#[derive(Default)]
pub struct Customizer {
    pub(crate) title: Option<Hook<TitleView>>,
    pub(crate) message: Option<Hook<MessageView>>,
    pub(crate) buttons: Option<Box<dyn FnMut(&mut ButtonView, Slot) -> HookResult>>,
    pub(crate) icon: Option<Hook<IconView>>,
    pub(crate) background: Option<Hook<BackgroundPanel>>,
    pub(crate) window: Option<Hook<WindowView>>,
}

impl Customizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post-process the title view.
    pub fn title(mut self, hook: impl FnMut(&mut TitleView) -> HookResult + 'static) -> Self {
        self.title = Some(Box::new(hook));
        self
    }

    /// Post-process the message view.
    pub fn message(mut self, hook: impl FnMut(&mut MessageView) -> HookResult + 'static) -> Self {
        self.message = Some(Box::new(hook));
        self
    }

    /// Post-process each button view. Invoked per slot: left, right, central.
    pub fn buttons(
        mut self,
        hook: impl FnMut(&mut ButtonView, Slot) -> HookResult + 'static,
    ) -> Self {
        self.buttons = Some(Box::new(hook));
        self
    }

    /// Post-process the dialog icon view.
    pub fn icon(mut self, hook: impl FnMut(&mut IconView) -> HookResult + 'static) -> Self {
        self.icon = Some(Box::new(hook));
        self
    }

    /// Post-process the background panel.
    pub fn background(
        mut self,
        hook: impl FnMut(&mut BackgroundPanel) -> HookResult + 'static,
    ) -> Self {
        self.background = Some(Box::new(hook));
        self
    }

    /// Post-process the window view.
    pub fn window(mut self, hook: impl FnMut(&mut WindowView) -> HookResult + 'static) -> Self {
        self.window = Some(Box::new(hook));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_are_recorded() {
        let customizer = Customizer::new()
            .title(|title| {
                title.visible = true;
                Ok(())
            })
            .buttons(|_, _| Err("nope".into()));
        assert!(customizer.title.is_some());
        assert!(customizer.buttons.is_some());
        assert!(customizer.message.is_none());
    }
}
