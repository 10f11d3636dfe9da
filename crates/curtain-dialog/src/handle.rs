#![forbid(unsafe_code)]

//! The materialized overlay.
//!
//! `DialogHandle` owns the live sub-views produced by `show()`. Setters on
//! the handle mirror the builder's but push changes into the materialized
//! views immediately: text swaps are instantaneous, slot presence changes go
//! through the reveal/conceal state machine when the button bar is vertical.
//!
//! Materialization order (per build or rebuild): window, title, message,
//! link detection, button slots, content, icon, customization hooks (title,
//! message, left, right, central, icon, background, window), background
//! padding. Hook and icon failures are swallowed: logged, forwarded to the
//! error observer, never allowed to keep the dialog from appearing.

use std::time::Duration;

use curtain_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use curtain_core::geometry::{Insets, Rect, Sides, Size};
use curtain_core::metrics::Metrics;
use curtain_render::cell::Cell;
use curtain_render::frame::{Frame, HitData, HitId, HitRegion};
use curtain_style::Style;

use crate::builder::{Listeners, PressCallback, SlotCallbacks};
use crate::config::{BarOrientation, ButtonSpec, DialogConfig, PaddingDu, Slot};
use crate::customize::Customizer;
use crate::error::{DialogError, ErrorObserver, HookStage};
use crate::icon::{Glyph, IconId, IconResolver};
use crate::links::find_links;
use crate::overlay::{Backdrop, Gravity, HIT_BACKDROP, HIT_BUTTON, HIT_CARD, SizeConstraints, WindowMode, WindowView};
use crate::slot::{SlotMetrics, SlotTransition};
use crate::views::{BackgroundPanel, ButtonView, IconView, MessageView, TitleView};
use crate::{Widget, apply_style, display_width, draw_text_span, set_style_area, wrap_ranges};

/// What a handled event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// A button slot was pressed (its callback already ran).
    ButtonPressed(Slot),
    /// The dialog was cancelled via Escape or a backdrop click.
    Cancelled,
}

/// The live, materialized dialog overlay.
pub struct DialogHandle {
    config: DialogConfig,
    showing: bool,
    window: WindowView,
    title: TitleView,
    message: MessageView,
    icon: IconView,
    buttons: [ButtonView; 3],
    background: BackgroundPanel,
    transitions: [SlotTransition; 3],
    callbacks: SlotCallbacks,
    listeners: Listeners,
    customizer: Customizer,
    observer: Option<ErrorObserver>,
    resolver: Box<dyn IconResolver>,
    content: Option<Box<dyn Widget>>,
    metrics: Metrics,
    hit_id: HitId,
}

impl DialogHandle {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_builder(
        config: DialogConfig,
        callbacks: SlotCallbacks,
        listeners: Listeners,
        customizer: Customizer,
        observer: Option<ErrorObserver>,
        resolver: Box<dyn IconResolver>,
        content: Option<Box<dyn Widget>>,
        metrics: Metrics,
        hit_id: HitId,
    ) -> Self {
        let window = WindowView::new(
            config.mode,
            config.gravity,
            config.insets,
            config.backdrop,
            config.constraints,
        );
        let mut handle = Self {
            config,
            showing: false,
            window,
            title: TitleView::default(),
            message: MessageView::default(),
            icon: IconView::default(),
            buttons: [
                ButtonView::new(Slot::Left),
                ButtonView::new(Slot::Central),
                ButtonView::new(Slot::Right),
            ],
            background: BackgroundPanel::default(),
            transitions: [SlotTransition::hidden(); 3],
            callbacks,
            listeners,
            customizer,
            observer,
            resolver,
            content,
            metrics,
            hit_id,
        };
        handle.show();
        handle
    }

    /// Show the dialog. Calling this while already showing is a no-op.
    pub fn show(&mut self) {
        if self.showing {
            return;
        }
        self.materialize();
        self.showing = true;
        tracing::debug!("dialog shown");
        if let Some(on_show) = &mut self.listeners.on_show {
            on_show();
        }
    }

    /// Hide the dialog and fire the dismiss listener.
    pub fn dismiss(&mut self) {
        if !self.showing {
            return;
        }
        self.showing = false;
        tracing::debug!("dialog dismissed");
        if let Some(on_dismiss) = &mut self.listeners.on_dismiss {
            on_dismiss();
        }
    }

    /// Cancel the dialog: fires the cancel listener, then dismisses.
    pub fn cancel(&mut self) {
        if !self.showing {
            return;
        }
        if let Some(on_cancel) = &mut self.listeners.on_cancel {
            on_cancel();
        }
        self.dismiss();
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Re-run the whole build over the current configuration.
    ///
    /// Hooks run again (once per rebuild); in-flight slot animations are
    /// replaced by the rebuilt instant state.
    pub fn rebuild(&mut self) {
        if self.showing {
            self.materialize();
        }
    }

    // Sub-view read-back accessors.

    pub fn title_view(&self) -> &TitleView {
        &self.title
    }

    pub fn title_view_mut(&mut self) -> &mut TitleView {
        &mut self.title
    }

    pub fn message_view(&self) -> &MessageView {
        &self.message
    }

    pub fn message_view_mut(&mut self) -> &mut MessageView {
        &mut self.message
    }

    pub fn icon_view(&self) -> &IconView {
        &self.icon
    }

    pub fn icon_view_mut(&mut self) -> &mut IconView {
        &mut self.icon
    }

    pub fn button_view(&self, slot: Slot) -> &ButtonView {
        &self.buttons[slot.index()]
    }

    pub fn button_view_mut(&mut self, slot: Slot) -> &mut ButtonView {
        &mut self.buttons[slot.index()]
    }

    pub fn background_view(&self) -> &BackgroundPanel {
        &self.background
    }

    pub fn background_view_mut(&mut self) -> &mut BackgroundPanel {
        &mut self.background
    }

    pub fn window_view(&self) -> &WindowView {
        &self.window
    }

    pub fn window_view_mut(&mut self) -> &mut WindowView {
        &mut self.window
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn slot_transition(&self, slot: Slot) -> &SlotTransition {
        &self.transitions[slot.index()]
    }

    pub fn hit_id(&self) -> HitId {
        self.hit_id
    }

    // Live configuration setters.

    /// Set the title; pushes to the showing overlay immediately.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = title.into();
        if self.showing {
            self.title.text = self.config.title.clone();
            self.title.visible = !self.config.title.is_empty();
        }
    }

    /// Set the message; pushes to the showing overlay immediately.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.config.message = message.into();
        if self.showing {
            self.apply_message();
        }
    }

    /// Set or clear the dialog icon.
    pub fn set_dialog_icon(&mut self, icon: Option<IconId>) {
        self.config.icon = icon;
        if self.showing {
            self.apply_icon();
        }
    }

    /// Set a slot's button spec.
    ///
    /// While showing: a presence change animates in the vertical bar and
    /// flips instantly in the horizontal bar; a same-presence change updates
    /// the view in place and re-applies the button customization hook.
    pub fn set_button(&mut self, slot: Slot, spec: ButtonSpec) {
        self.config.set_button(slot, Some(spec));
        if self.showing {
            self.setup_slot(slot, true);
            if self.config.slot_present(slot) {
                self.run_button_hook(slot);
            }
        }
    }

    /// Clear a slot; conceals the button when the bar is vertical.
    pub fn remove_button(&mut self, slot: Slot) {
        self.config.set_button(slot, None);
        self.callbacks.clear(slot);
        if self.showing {
            self.setup_slot(slot, true);
        }
    }

    /// Register or replace a slot's click callback.
    pub fn on_press(&mut self, slot: Slot, callback: impl FnMut(Slot) + 'static) {
        self.callbacks.set(slot, Box::new(callback) as PressCallback);
    }

    pub fn set_cancelable(&mut self, cancelable: bool) {
        self.config.cancelable = cancelable;
    }

    pub fn set_dismiss_on_press(&mut self, dismiss: bool) {
        self.config.dismiss_on_press = dismiss;
    }

    pub fn set_linkify_message(&mut self, linkify: bool) {
        self.config.linkify_message = linkify;
        if self.showing {
            self.apply_message();
        }
    }

    pub fn set_title_single_line(&mut self, single_line: bool) {
        self.config.title_single_line = single_line;
        if self.showing {
            self.title.single_line = single_line;
        }
    }

    pub fn set_message_single_line(&mut self, single_line: bool) {
        self.config.message_single_line = single_line;
        if self.showing {
            self.message.single_line = single_line;
        }
    }

    pub fn set_padding(&mut self, left: u16, top: u16, right: u16, bottom: u16) {
        self.config.padding = PaddingDu::new(left, top, right, bottom);
        if self.showing {
            self.background.padding = self.config.padding.to_sides(&self.metrics);
        }
    }

    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.config.gravity = gravity;
        if self.showing {
            self.window.gravity = gravity;
        }
    }

    /// Switch the button bar arrangement. While showing, slots are re-set up
    /// instantly under the new arrangement.
    pub fn set_bar_orientation(&mut self, orientation: BarOrientation) {
        self.config.bar_orientation = orientation;
        if self.showing {
            for slot in Slot::ALL {
                self.setup_slot(slot, false);
            }
        }
    }

    pub fn set_icon_auto_color(&mut self, auto: bool) {
        self.config.icon_auto_color = auto;
        if self.showing {
            for slot in Slot::ALL {
                self.setup_slot(slot, false);
            }
        }
    }

    pub fn set_window_mode(&mut self, mode: WindowMode) {
        self.config.mode = mode;
        if self.showing {
            self.window.mode = mode;
        }
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.config.insets = insets;
        if self.showing {
            self.window.insets = insets;
        }
    }

    pub fn set_backdrop(&mut self, backdrop: Backdrop) {
        self.config.backdrop = backdrop;
        if self.showing {
            self.window.backdrop = backdrop;
        }
    }

    pub fn set_constraints(&mut self, constraints: SizeConstraints) {
        self.config.constraints = constraints;
        if self.showing {
            self.window.constraints = constraints;
        }
    }

    // Events and animation.

    /// Handle an input event, given the hit-test result for the event's
    /// position on the last rendered frame.
    pub fn handle_event(
        &mut self,
        event: &Event,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> Option<DialogEvent> {
        if !self.showing {
            return None;
        }

        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Escape,
                kind: KeyEventKind::Press,
                ..
            }) if self.config.cancelable => {
                self.cancel();
                Some(DialogEvent::Cancelled)
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => {
                let (id, region, data) = hit?;
                if id != self.hit_id {
                    return None;
                }
                match region {
                    HIT_BUTTON => {
                        let slot = Slot::from_id(data as u8)?;
                        self.press(slot)
                    }
                    HIT_BACKDROP if self.config.cancelable => {
                        self.cancel();
                        Some(DialogEvent::Cancelled)
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Press a slot's button: its callback runs first, then the
    /// dismiss-on-press policy applies.
    pub fn press(&mut self, slot: Slot) -> Option<DialogEvent> {
        if !self.showing || !self.transitions[slot.index()].target_present() {
            return None;
        }
        self.callbacks.invoke(slot);
        if self.config.dismiss_on_press {
            self.dismiss();
        }
        Some(DialogEvent::ButtonPressed(slot))
    }

    /// Advance slot animations by the elapsed frame time.
    pub fn tick(&mut self, delta: Duration) {
        for slot in Slot::ALL {
            self.transitions[slot.index()].tick(delta);
            self.sync_slot_view(slot);
        }
    }

    /// Whether any slot animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.transitions.iter().any(SlotTransition::is_animating)
    }

    // Materialization.

    fn materialize(&mut self) {
        self.window = WindowView::new(
            self.config.mode,
            self.config.gravity,
            self.config.insets,
            self.config.backdrop,
            self.config.constraints,
        );

        self.title = TitleView {
            text: self.config.title.clone(),
            visible: !self.config.title.is_empty(),
            single_line: self.config.title_single_line,
            ..TitleView::default()
        };

        self.message = MessageView::default();
        self.apply_message();

        self.background = BackgroundPanel::default();

        for slot in Slot::ALL {
            self.setup_slot(slot, false);
        }

        self.apply_icon();
        self.run_hooks();

        // Content padding lands after customization, as the final build step.
        self.background.padding = self.config.padding.to_sides(&self.metrics);
    }

    fn apply_message(&mut self) {
        self.message.text = self.config.message.clone();
        self.message.visible = !self.config.message.is_empty();
        self.message.single_line = self.config.message_single_line;
        self.message.links = if self.config.linkify_message {
            find_links(&self.message.text)
        } else {
            Vec::new()
        };
    }

    fn apply_icon(&mut self) {
        let mut failure = None;
        let glyph = match &self.config.icon {
            Some(id) => match self.resolver.resolve(id) {
                Ok(glyph) => Some(glyph),
                Err(err) => {
                    failure = Some(err);
                    None
                }
            },
            None => None,
        };
        self.icon.glyph = glyph;
        self.icon.visible = glyph.is_some();
        if let Some(err) = failure {
            self.report(err);
        }
    }

    /// Bring one slot's view and transition in line with its spec.
    ///
    /// `animate` requests a reveal/conceal for presence changes; it only
    /// takes effect in the vertical bar. The horizontal bar flips
    /// instantly, a known limitation.
    fn setup_slot(&mut self, slot: Slot, animate: bool) {
        let vertical = self.config.bar_orientation == BarOrientation::Vertical;
        let present = self.config.slot_present(slot);
        let natural = if vertical {
            SlotMetrics::new(1.0, 1.0, 0.0)
        } else {
            SlotMetrics::new(1.0, 0.0, 0.0)
        };

        let mut resolved: Option<(String, Option<Glyph>)> = None;
        let mut failure: Option<DialogError> = None;
        if let Some(spec) = self.config.button(slot).filter(|s| s.is_present()) {
            let glyph = match &spec.icon {
                Some(id) => match self.resolver.resolve(id) {
                    Ok(glyph) => Some(glyph),
                    Err(err) => {
                        failure = Some(err);
                        None
                    }
                },
                None => None,
            };
            resolved = Some((spec.label.clone(), glyph));
        }

        let auto_color = self.config.icon_auto_color;
        let view = &mut self.buttons[slot.index()];
        view.natural = natural;
        match resolved {
            Some((label, glyph)) => {
                view.label = label;
                view.glyph = glyph;
                view.glyph_style = if auto_color {
                    Style {
                        fg: view.style.fg,
                        ..Style::new()
                    }
                } else {
                    Style::new()
                };
            }
            None => {
                view.label.clear();
                view.glyph = None;
            }
        }

        let transition = &mut self.transitions[slot.index()];
        if animate && vertical {
            if present {
                transition.reveal();
            } else {
                transition.conceal();
            }
        } else if present {
            transition.force_shown();
        } else {
            transition.force_hidden();
        }

        self.sync_slot_view(slot);
        if let Some(err) = failure {
            self.report(err);
        }
    }

    fn sync_slot_view(&mut self, slot: Slot) {
        let transition = self.transitions[slot.index()];
        let view = &mut self.buttons[slot.index()];
        view.visible = transition.is_visible();
        view.metrics = view.natural.scaled(transition.factor());
    }

    /// Invoke customization hooks in the fixed order: title, message, left
    /// button, right button, central button, icon, background, window. A
    /// failing hook never blocks the ones after it.
    fn run_hooks(&mut self) {
        let Self {
            customizer,
            observer,
            title,
            message,
            buttons,
            icon,
            background,
            window,
            ..
        } = self;

        if let Some(hook) = &mut customizer.title
            && let Err(err) = hook(title)
        {
            emit(observer, HookStage::Title, err);
        }
        if let Some(hook) = &mut customizer.message
            && let Err(err) = hook(message)
        {
            emit(observer, HookStage::Message, err);
        }
        if let Some(hook) = &mut customizer.buttons {
            for slot in [Slot::Left, Slot::Right, Slot::Central] {
                if let Err(err) = hook(&mut buttons[slot.index()], slot) {
                    emit(observer, HookStage::Buttons, err);
                }
            }
        }
        if let Some(hook) = &mut customizer.icon
            && let Err(err) = hook(icon)
        {
            emit(observer, HookStage::Icon, err);
        }
        if let Some(hook) = &mut customizer.background
            && let Err(err) = hook(background)
        {
            emit(observer, HookStage::Background, err);
        }
        if let Some(hook) = &mut customizer.window
            && let Err(err) = hook(window)
        {
            emit(observer, HookStage::Window, err);
        }
    }

    fn run_button_hook(&mut self, slot: Slot) {
        let Self {
            customizer,
            observer,
            buttons,
            ..
        } = self;
        if let Some(hook) = &mut customizer.buttons
            && let Err(err) = hook(&mut buttons[slot.index()], slot)
        {
            emit(observer, HookStage::Buttons, err);
        }
    }

    fn report(&mut self, err: DialogError) {
        tracing::warn!(%err, "swallowed dialog failure");
        if let Some(observer) = &mut self.observer {
            observer(&err);
        }
    }

    // Geometry.

    /// The overlay window area for a given screen.
    pub fn window_rect(&self, screen: Rect) -> Rect {
        self.window.window_rect(screen)
    }

    /// The card area the dialog occupies on a given screen.
    pub fn card_rect(&self, screen: Rect) -> Rect {
        let win = self.window.window_rect(screen);
        if win.is_empty() {
            return Rect::new(win.x, win.y, 0, 0);
        }
        if self.window.mode == WindowMode::Fullscreen {
            return win;
        }

        let chrome = self.chrome();
        let desired_width = u16::try_from(self.desired_inner_width())
            .unwrap_or(u16::MAX)
            .saturating_add(chrome.horizontal());
        let width = self
            .window
            .constraints
            .fit(Size::new(desired_width, 1), win.size())
            .width;
        let inner_width = width.saturating_sub(chrome.horizontal());
        let height = self
            .body_rows(inner_width)
            .saturating_add(chrome.vertical());
        self.window.card_rect(screen, Size::new(width, height))
    }

    /// Border plus padding on each side of the inner content area.
    fn chrome(&self) -> Sides {
        let border = u16::from(self.background.border);
        let pad = self.background.padding;
        Sides::new(
            pad.left + border,
            pad.top + border,
            pad.right + border,
            pad.bottom + border,
        )
    }

    fn header_visible(&self) -> bool {
        self.title.visible || self.icon.visible
    }

    fn any_button_visible(&self) -> bool {
        self.buttons.iter().any(|b| b.visible)
    }

    fn content_present(&self) -> bool {
        self.content.is_some() && self.config.content_rows > 0
    }

    fn message_rows(&self, inner_width: u16) -> u16 {
        if !self.message.visible {
            return 0;
        }
        if self.message.single_line {
            return 1;
        }
        wrap_ranges(&self.message.text, usize::from(inner_width))
            .len()
            .max(1) as u16
    }

    fn bar_rows(&self) -> u16 {
        match self.config.bar_orientation {
            BarOrientation::Horizontal => {
                if self.any_button_visible() {
                    2
                } else {
                    0
                }
            }
            BarOrientation::Vertical => self
                .buttons
                .iter()
                .filter(|b| b.visible)
                .map(|b| b.metrics.total_rows())
                .sum(),
        }
    }

    fn body_rows(&self, inner_width: u16) -> u16 {
        let header = u16::from(self.header_visible());
        let message = self.message_rows(inner_width);
        let content = if self.content_present() {
            self.config.content_rows
        } else {
            0
        };
        let sections =
            u16::from(header > 0) + u16::from(message > 0) + u16::from(content > 0);
        let gaps = sections.saturating_sub(1);
        header + message + content + gaps + self.bar_rows()
    }

    fn desired_inner_width(&self) -> usize {
        let mut width = 16usize;

        if self.header_visible() {
            let icon = if self.icon.visible { 2 } else { 0 };
            width = width.max(icon + display_width(&self.title.text));
        }
        if self.message.visible {
            let longest = self
                .message
                .text
                .split('\n')
                .map(display_width)
                .max()
                .unwrap_or(0);
            width = width.max(longest.min(44));
        }
        match self.config.bar_orientation {
            BarOrientation::Horizontal => {
                let visible: Vec<&ButtonView> =
                    self.buttons.iter().filter(|b| b.visible).collect();
                if !visible.is_empty() {
                    let total: usize = visible
                        .iter()
                        .map(|b| display_width(&b.display_label()) + 4)
                        .sum::<usize>()
                        + (visible.len() - 1) * 2;
                    width = width.max(total);
                }
            }
            BarOrientation::Vertical => {
                let widest = self
                    .buttons
                    .iter()
                    .filter(|b| b.visible)
                    .map(|b| display_width(&b.display_label()) + 4)
                    .max()
                    .unwrap_or(0);
                width = width.max(widest);
            }
        }
        width
    }

    // Rendering.

    fn render_card(&self, card: Rect, frame: &mut Frame) {
        frame.buffer.fill(card, Cell::default());
        set_style_area(&mut frame.buffer, card, self.background.style);
        if self.background.border {
            self.render_border(card, frame);
        }
        frame.register_hit(card, self.hit_id, HIT_CARD, 0);

        let inner = card.inner(self.chrome());
        if inner.is_empty() {
            return;
        }

        let mut y = inner.y;
        let later_sections = self.message.visible || self.content_present();

        if self.header_visible() && y < inner.bottom() {
            let mut x = inner.x;
            if self.icon.visible
                && let Some(glyph) = self.icon.glyph
            {
                let mut cell = Cell::from_char(glyph.symbol);
                apply_style(&mut cell, self.icon.style);
                frame.buffer.set(x, y, cell);
                x = x.saturating_add(2);
            }
            if self.title.visible {
                draw_text_span(frame, x, y, &self.title.text, self.title.style, inner.right());
            }
            y += 1;
            if later_sections {
                y += 1;
            }
        }

        if self.message.visible {
            y = self.render_message(inner, y, frame);
            if self.content_present() {
                y += 1;
            }
        }

        if self.content_present()
            && let Some(widget) = &self.content
        {
            let rows = self
                .config
                .content_rows
                .min(inner.bottom().saturating_sub(y));
            if rows > 0 {
                widget.render(Rect::new(inner.x, y, inner.width, rows), frame);
                y += rows;
            }
        }

        match self.config.bar_orientation {
            BarOrientation::Horizontal => self.render_bar_horizontal(inner, y, frame),
            BarOrientation::Vertical => self.render_bar_vertical(inner, y, frame),
        }
    }

    fn render_border(&self, area: Rect, frame: &mut Frame) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let style = self.background.style;
        let mut put = |x: u16, y: u16, c: char| {
            let mut cell = Cell::from_char(c);
            apply_style(&mut cell, style);
            frame.buffer.set(x, y, cell);
        };
        for x in area.x..area.right() {
            put(x, area.y, '─');
            put(x, area.bottom() - 1, '─');
        }
        for y in area.y..area.bottom() {
            put(area.x, y, '│');
            put(area.right() - 1, y, '│');
        }
        put(area.x, area.y, '┌');
        put(area.right() - 1, area.y, '┐');
        put(area.x, area.bottom() - 1, '└');
        put(area.right() - 1, area.bottom() - 1, '┘');
    }

    /// Draw the message rows, styling link spans. Returns the next row.
    fn render_message(&self, inner: Rect, mut y: u16, frame: &mut Frame) -> u16 {
        use unicode_segmentation::UnicodeSegmentation;
        use unicode_width::UnicodeWidthStr;

        let text = &self.message.text;
        let rows: Vec<(usize, usize)> = if self.message.single_line {
            vec![(0, text.len())]
        } else {
            wrap_ranges(text, usize::from(inner.width))
        };

        for (start, end) in rows {
            if y >= inner.bottom() {
                break;
            }
            let mut x = inner.x;
            for (rel, grapheme) in text[start..end].grapheme_indices(true) {
                let w = UnicodeWidthStr::width(grapheme) as u16;
                if w == 0 {
                    continue;
                }
                if x + w > inner.right() {
                    break;
                }
                let global = start + rel;
                let linked = self.message.links.iter().any(|l| l.contains(global));
                let style = if linked {
                    self.message.link_style.merge(&self.message.style)
                } else {
                    self.message.style
                };
                if let Some(c) = grapheme.chars().next() {
                    let mut cell = Cell::from_char(c);
                    apply_style(&mut cell, style);
                    frame.buffer.set(x, y, cell);
                }
                x += w;
            }
            y += 1;
        }
        y
    }

    fn render_bar_horizontal(&self, inner: Rect, y: u16, frame: &mut Frame) {
        let visible: Vec<&ButtonView> = self.buttons.iter().filter(|b| b.visible).collect();
        if visible.is_empty() {
            return;
        }
        let row = y + 1;
        if row >= inner.bottom() {
            return;
        }

        let total: usize = visible
            .iter()
            .map(|b| display_width(&b.display_label()) + 4)
            .sum::<usize>()
            + (visible.len() - 1) * 2;
        let start = inner.x + (usize::from(inner.width).saturating_sub(total) / 2) as u16;

        let mut x = start;
        for view in visible {
            let text = format!("[ {} ]", view.display_label());
            let width = display_width(&text) as u16;
            draw_text_span(frame, x, row, &text, view.style, inner.right());
            if view.glyph.is_some() {
                // Re-style the glyph cell so a tint can differ from the label.
                if let Some(cell) = frame.buffer.get_mut(x + 2, row) {
                    apply_style(cell, view.glyph_style.merge(&view.style));
                }
            }
            frame.register_hit(
                Rect::new(x, row, width.min(inner.right().saturating_sub(x)), 1),
                self.hit_id,
                HIT_BUTTON,
                u64::from(view.slot.id()),
            );
            x = x.saturating_add(width + 2);
        }
    }

    fn render_bar_vertical(&self, inner: Rect, mut y: u16, frame: &mut Frame) {
        for slot in Slot::ALL {
            let view = &self.buttons[slot.index()];
            if !view.visible {
                continue;
            }
            let metrics = view.metrics;
            y = y.saturating_add(metrics.margin_top_rows());
            if metrics.height_rows() >= 1 && y < inner.bottom() {
                let row = Rect::new(inner.x, y, inner.width, 1);
                set_style_area(&mut frame.buffer, row, view.style);
                let text = view.display_label();
                let text_width = display_width(&text) as u16;
                let x = inner.x + inner.width.saturating_sub(text_width) / 2;
                draw_text_span(frame, x, y, &text, view.style, inner.right());
                frame.register_hit(row, self.hit_id, HIT_BUTTON, u64::from(slot.id()));
                y = y.saturating_add(metrics.height_rows());
            }
            y = y.saturating_add(metrics.margin_bottom_rows());
        }
    }
}

impl Widget for DialogHandle {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if !self.showing || area.is_empty() {
            return;
        }

        let win = self.window.window_rect(area);
        let opacity = self.window.backdrop.opacity.clamp(0.0, 1.0);
        if opacity > 0.0 {
            let tint = self.window.backdrop.color.with_opacity(opacity);
            set_style_area(&mut frame.buffer, win, Style::new().bg(tint));
        }
        frame.register_hit(win, self.hit_id, HIT_BACKDROP, 0);

        let card = self.card_rect(area);
        if !card.is_empty() {
            self.render_card(card, frame);
        }
    }
}

fn emit(observer: &mut Option<ErrorObserver>, stage: HookStage, err: crate::error::CustomizeError) {
    let err = DialogError::Customize {
        stage,
        message: err.to_string(),
    };
    tracing::warn!(%err, "swallowed dialog failure");
    if let Some(observer) = observer {
        observer(&err);
    }
}
