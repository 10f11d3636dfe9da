#![forbid(unsafe_code)]

//! Fluent dialog assembly.
//!
//! The builder accumulates a [`DialogConfig`] value plus the non-value
//! parts: click callbacks, lifecycle listeners, the customizer, the error
//! observer, the icon resolver, and the content widget. Nothing becomes
//! visible until `show()` materializes a [`DialogHandle`]; before that,
//! setters only record configuration.

use curtain_core::geometry::Insets;
use curtain_core::metrics::Metrics;
use curtain_render::frame::HitId;

use crate::Widget;
use crate::config::{BarOrientation, ButtonSpec, DialogConfig, PaddingDu, Slot};
use crate::customize::Customizer;
use crate::error::{DialogError, ErrorObserver};
use crate::handle::DialogHandle;
use crate::icon::{GlyphTable, IconId, IconResolver};
use crate::overlay::{Backdrop, Gravity, SizeConstraints, WindowMode};

/// A button click callback; receives the pressed slot's identifier.
pub type PressCallback = Box<dyn FnMut(Slot)>;

/// A lifecycle listener.
pub type LifecycleCallback = Box<dyn FnMut()>;

/// Click callbacks held apart from the pure configuration.
#[derive(Default)]
pub(crate) struct SlotCallbacks {
    slots: [Option<PressCallback>; 3],
}

impl SlotCallbacks {
    pub(crate) fn set(&mut self, slot: Slot, callback: PressCallback) {
        self.slots[slot.index()] = Some(callback);
    }

    pub(crate) fn clear(&mut self, slot: Slot) {
        self.slots[slot.index()] = None;
    }

    /// Invoke the slot's callback if registered. Returns whether one ran.
    pub(crate) fn invoke(&mut self, slot: Slot) -> bool {
        if let Some(callback) = &mut self.slots[slot.index()] {
            callback(slot);
            true
        } else {
            false
        }
    }
}

/// Show/dismiss/cancel listeners.
#[derive(Default)]
pub(crate) struct Listeners {
    pub(crate) on_show: Option<LifecycleCallback>,
    pub(crate) on_dismiss: Option<LifecycleCallback>,
    pub(crate) on_cancel: Option<LifecycleCallback>,
}

/// Fluent builder for a modal dialog.
pub struct DialogBuilder {
    config: DialogConfig,
    callbacks: SlotCallbacks,
    listeners: Listeners,
    customizer: Customizer,
    observer: Option<ErrorObserver>,
    resolver: Box<dyn IconResolver>,
    content: Option<Box<dyn Widget>>,
    metrics: Metrics,
    hit_id: HitId,
}

impl Default for DialogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogBuilder {
    pub fn new() -> Self {
        Self::from_config(DialogConfig::default())
    }

    /// Start from an existing configuration value.
    pub fn from_config(config: DialogConfig) -> Self {
        Self {
            config,
            callbacks: SlotCallbacks::default(),
            listeners: Listeners::default(),
            customizer: Customizer::default(),
            observer: None,
            resolver: Box::new(GlyphTable::default()),
            content: None,
            metrics: Metrics::default(),
            hit_id: HitId::new(1),
        }
    }

    /// The configuration accumulated so far.
    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Snapshot the accumulated configuration value.
    pub fn build(&self) -> DialogConfig {
        self.config.clone()
    }

    /// Dialog title shown at the top. Empty means no title element.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Dialog message shown below the title. Empty means no message element.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.config.message = message.into();
        self
    }

    /// Icon shown next to the title. `None` hides the icon element.
    pub fn dialog_icon(mut self, icon: Option<IconId>) -> Self {
        self.config.icon = icon;
        self
    }

    /// Set a slot's button spec.
    pub fn button(mut self, slot: Slot, spec: ButtonSpec) -> Self {
        self.config.set_button(slot, Some(spec));
        self
    }

    /// Register a slot's click callback.
    pub fn on_press(mut self, slot: Slot, callback: impl FnMut(Slot) + 'static) -> Self {
        self.callbacks.set(slot, Box::new(callback));
        self
    }

    /// Clear a slot's spec and callback.
    pub fn remove_button(mut self, slot: Slot) -> Self {
        self.config.set_button(slot, None);
        self.callbacks.clear(slot);
        self
    }

    /// Set the left button with a click callback.
    pub fn left_button(self, label: impl Into<String>, callback: impl FnMut(Slot) + 'static) -> Self {
        self.button(Slot::Left, ButtonSpec::new(label))
            .on_press(Slot::Left, callback)
    }

    /// Set the central button with a click callback.
    pub fn central_button(
        self,
        label: impl Into<String>,
        callback: impl FnMut(Slot) + 'static,
    ) -> Self {
        self.button(Slot::Central, ButtonSpec::new(label))
            .on_press(Slot::Central, callback)
    }

    /// Set the right button with a click callback.
    pub fn right_button(
        self,
        label: impl Into<String>,
        callback: impl FnMut(Slot) + 'static,
    ) -> Self {
        self.button(Slot::Right, ButtonSpec::new(label))
            .on_press(Slot::Right, callback)
    }

    pub fn remove_left_button(self) -> Self {
        self.remove_button(Slot::Left)
    }

    pub fn remove_central_button(self) -> Self {
        self.remove_button(Slot::Central)
    }

    pub fn remove_right_button(self) -> Self {
        self.remove_button(Slot::Right)
    }

    /// Whether Escape or a backdrop click dismisses the dialog.
    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.config.cancelable = cancelable;
        self
    }

    /// Whether any button press dismisses the dialog after its callback.
    pub fn dismiss_on_press(mut self, dismiss: bool) -> Self {
        self.config.dismiss_on_press = dismiss;
        self
    }

    /// Detect URLs in the message and style them as links.
    pub fn linkify_message(mut self, linkify: bool) -> Self {
        self.config.linkify_message = linkify;
        self
    }

    pub fn title_single_line(mut self, single_line: bool) -> Self {
        self.config.title_single_line = single_line;
        self
    }

    pub fn message_single_line(mut self, single_line: bool) -> Self {
        self.config.message_single_line = single_line;
        self
    }

    /// Card content padding in dialog units.
    pub fn padding(mut self, left: u16, top: u16, right: u16, bottom: u16) -> Self {
        self.config.padding = PaddingDu::new(left, top, right, bottom);
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.config.gravity = gravity;
        self
    }

    /// Button bar arrangement. Only the vertical bar animates slot changes.
    pub fn bar_orientation(mut self, orientation: BarOrientation) -> Self {
        self.config.bar_orientation = orientation;
        self
    }

    /// Tint button glyphs to the button text color.
    pub fn icon_auto_color(mut self, auto: bool) -> Self {
        self.config.icon_auto_color = auto;
        self
    }

    pub fn window_mode(mut self, mode: WindowMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn insets(mut self, insets: Insets) -> Self {
        self.config.insets = insets;
        self
    }

    pub fn backdrop(mut self, backdrop: Backdrop) -> Self {
        self.config.backdrop = backdrop;
        self
    }

    pub fn constraints(mut self, constraints: SizeConstraints) -> Self {
        self.config.constraints = constraints;
        self
    }

    /// Embed a content widget below the message, reserving `rows` rows.
    pub fn content(mut self, widget: impl Widget + 'static, rows: u16) -> Self {
        self.content = Some(Box::new(widget));
        self.config.content_rows = rows;
        self
    }

    /// Install the customization hooks.
    pub fn customize(mut self, customizer: Customizer) -> Self {
        self.customizer = customizer;
        self
    }

    /// Observe failures that the build path swallows.
    pub fn error_observer(mut self, observer: impl FnMut(&DialogError) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Replace the icon resolver.
    pub fn icon_resolver(mut self, resolver: impl IconResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Identifier used for this dialog's hit regions.
    pub fn hit_id(mut self, hit_id: HitId) -> Self {
        self.hit_id = hit_id;
        self
    }

    pub fn on_show(mut self, callback: impl FnMut() + 'static) -> Self {
        self.listeners.on_show = Some(Box::new(callback));
        self
    }

    pub fn on_dismiss(mut self, callback: impl FnMut() + 'static) -> Self {
        self.listeners.on_dismiss = Some(Box::new(callback));
        self
    }

    pub fn on_cancel(mut self, callback: impl FnMut() + 'static) -> Self {
        self.listeners.on_cancel = Some(Box::new(callback));
        self
    }

    /// Materialize the overlay and show it.
    pub fn show(self) -> DialogHandle {
        DialogHandle::from_builder(
            self.config,
            self.callbacks,
            self.listeners,
            self.customizer,
            self.observer,
            self.resolver,
            self.content,
            self.metrics,
            self.hit_id,
        )
    }
}
