//! Popup chrome.
//!
//! [`Skeleton`] wraps any [`PopupContent`] with the standard popup frame: a
//! title row (back affordance, title fragments, subtitle, inline switch), the
//! content itself and a cancel / confirm footer. It can host itself in a
//! [`ModalHost`] and can run every show / hide through a [`Motion`].
//!
//! # Dismissal
//!
//! Confirm, back and mask press hand their handler a [`CloseToken`]. Calling
//! [`CloseToken::close`] dismisses the popup:
//!
//! - without motion the host closes as soon as the token is observed, which
//!   is right after the handler returns when it closes the token inline;
//! - with motion the content starts its exit transition first and the host
//!   closes on the [`Skeleton::tick`] that completes it.
//!
//! Cancel needs no token. Without motion `on_cancel` runs and the host closes
//! immediately; with motion `on_cancel` is deferred until the exit transition
//! completes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::accessibility::{Control, PopupKind};
use super::motion::{Motion, MotionConfig, MotionEvent, MotionFrame, MotionType};
use crate::components::dialog::footer::{DialogFooter, FooterButton, FooterButtons};
use crate::components::modal::{ModalHost, ModalOptions};
use crate::components::Element;
use crate::config::Config;
use crate::i18n::{I18n, Locale};
use crate::ui::{
    styled,
    theme::Theme,
    utils::display_width,
    widgets::{switch_span, SWITCH_WIDTH},
};

/// What the chrome hands to its content on every call
pub struct ContentContext<'a> {
    /// Value of the inline switch; `true` when the popup has no switch
    pub switch_value: bool,
    pub theme: &'a Theme,
    pub i18n: I18n,
}

/// Receives the result data the content wants forwarded to `on_confirm`
#[derive(Debug)]
pub struct DataReporter<D> {
    data: Option<D>,
    extra: Vec<Value>,
}

impl<D> Default for DataReporter<D> {
    fn default() -> Self {
        Self {
            data: None,
            extra: Vec::new(),
        }
    }
}

impl<D> DataReporter<D> {
    /// Replaces the reported data and its extra parameters
    pub fn report(&mut self, data: D, extra: Vec<Value>) {
        self.data = Some(data);
        self.extra = extra;
    }

    pub fn report_data(&mut self, data: D) {
        self.report(data, Vec::new());
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    pub fn extra(&self) -> &[Value] {
        &self.extra
    }
}

/// Content rendered between the title row and the footer
pub trait PopupContent {
    /// Result data reported to the confirm handler
    type Data: Clone + fmt::Debug + 'static;

    /// Rows the content wants when given `width` columns
    fn height_hint(&self, width: u16) -> u16;

    /// Called once when the skeleton is built, to report initial data
    fn mount(&mut self, _reporter: &mut DataReporter<Self::Data>) {}

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &ContentContext);

    /// Returns `true` if the key was consumed
    fn handle_key(
        &mut self,
        _key: KeyEvent,
        _ctx: &ContentContext,
        _reporter: &mut DataReporter<Self::Data>,
    ) -> bool {
        false
    }

    /// Left click inside the content area; returns `true` if consumed
    fn handle_click(
        &mut self,
        _position: Position,
        _ctx: &ContentContext,
        _reporter: &mut DataReporter<Self::Data>,
    ) -> bool {
        false
    }
}

/// Title row contents
#[derive(Debug)]
pub enum Title {
    Text(String),
    /// Several fragments drawn side by side
    Fragments(Vec<String>),
    /// Drawn as-is; back affordance, subtitle and switch are not rendered
    Custom(Element),
}

impl Default for Title {
    fn default() -> Self {
        Title::Text("Modal".to_string())
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Title::Text(text.to_string())
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Title::Text(text)
    }
}

impl From<Vec<String>> for Title {
    fn from(fragments: Vec<String>) -> Self {
        Title::Fragments(fragments)
    }
}

impl From<Vec<&str>> for Title {
    fn from(fragments: Vec<&str>) -> Self {
        Title::Fragments(fragments.into_iter().map(str::to_string).collect())
    }
}

impl From<Element> for Title {
    fn from(element: Element) -> Self {
        Title::Custom(element)
    }
}

impl Title {
    fn fragments(&self) -> &[String] {
        match self {
            Title::Text(text) => std::slice::from_ref(text),
            Title::Fragments(fragments) => fragments,
            Title::Custom(_) => &[],
        }
    }

    fn is_custom(&self) -> bool {
        matches!(self, Title::Custom(_))
    }
}

/// Which footer buttons render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FooterType {
    #[default]
    Both,
    SingleConfirm,
    SingleCancel,
    /// No built-in buttons; pair with [`SkeletonOptions::footer`]
    Custom,
}

/// Configuration of the chrome around a popup's content
#[derive(Debug, Default)]
pub struct SkeletonOptions {
    pub title: Title,
    pub subtitle: Option<String>,
    /// `Some` renders the inline switch with that initial value
    pub switch_value: Option<bool>,
    pub cancel_text: Option<String>,
    pub confirm_text: Option<String>,
    pub back_text: Option<String>,
    pub show_back: bool,
    pub footer_type: FooterType,
    /// Replaces the built-in footer whatever the footer type
    pub footer: Option<Element>,
    pub motion_type: MotionType,
    pub motion_config: MotionConfig,
    pub kind: PopupKind,
    pub modal: ModalOptions,
    /// Container width; the full screen width when unset
    pub width: Option<u16>,
    pub locale: Locale,
}

impl SkeletonOptions {
    /// Defaults taken from the `[ui]` and `[popup]` config sections
    pub fn from_config(config: &Config) -> Self {
        Self {
            footer_type: config.popup.footer_type,
            motion_type: config.popup.motion_type,
            motion_config: MotionConfig::from_millis(config.popup.motion_duration_ms),
            locale: config.ui.locale,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<Title>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn switch(mut self, value: bool) -> Self {
        self.switch_value = Some(value);
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn back_text(mut self, text: impl Into<String>) -> Self {
        self.back_text = Some(text.into());
        self
    }

    pub fn show_back(mut self, show: bool) -> Self {
        self.show_back = show;
        self
    }

    pub fn footer_type(mut self, footer_type: FooterType) -> Self {
        self.footer_type = footer_type;
        self
    }

    pub fn footer(mut self, footer: Element) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn motion(mut self, motion_type: MotionType) -> Self {
        self.motion_type = motion_type;
        self
    }

    pub fn motion_config(mut self, config: MotionConfig) -> Self {
        self.motion_config = config;
        self
    }

    pub fn kind(mut self, kind: PopupKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn modal(mut self, modal: ModalOptions) -> Self {
        self.modal = modal;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Handle passed to confirm, back and mask-press handlers to dismiss the popup
#[derive(Debug, Clone, Default)]
pub struct CloseToken {
    requested: Rc<Cell<bool>>,
}

impl CloseToken {
    pub fn close(&self) {
        self.requested.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }
}

type Callback = Box<dyn FnMut()>;
type TokenCallback = Box<dyn FnMut(CloseToken)>;
type ConfirmCallback<D> = Box<dyn FnMut(Option<&D>, &[Value], CloseToken)>;

/// Optional callbacks of a popup; a missing handler is a no-op
pub struct PopupHandlers<D> {
    on_confirm: Option<ConfirmCallback<D>>,
    on_cancel: Option<Callback>,
    on_back: Option<TokenCallback>,
    on_mask_press: Option<TokenCallback>,
    on_switch_change: Option<Box<dyn FnMut(bool)>>,
    on_show: Option<Callback>,
    on_hide: Option<Callback>,
    on_dismiss: Option<Callback>,
}

impl<D> Default for PopupHandlers<D> {
    fn default() -> Self {
        Self {
            on_confirm: None,
            on_cancel: None,
            on_back: None,
            on_mask_press: None,
            on_switch_change: None,
            on_show: None,
            on_hide: None,
            on_dismiss: None,
        }
    }
}

impl<D: 'static> PopupHandlers<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receives the last reported data, its extra parameters and a close token
    pub fn on_confirm(mut self, f: impl FnMut(Option<&D>, &[Value], CloseToken) + 'static) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    pub fn on_back(mut self, f: impl FnMut(CloseToken) + 'static) -> Self {
        self.on_back = Some(Box::new(f));
        self
    }

    pub fn on_mask_press(mut self, f: impl FnMut(CloseToken) + 'static) -> Self {
        self.on_mask_press = Some(Box::new(f));
        self
    }

    pub fn on_switch_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_switch_change = Some(Box::new(f));
        self
    }

    pub fn on_show(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_show = Some(Box::new(f));
        self
    }

    pub fn on_hide(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_hide = Some(Box::new(f));
        self
    }

    pub fn on_dismiss(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(f));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonPhase {
    /// Modal-hosted and not opened yet
    Idle,
    Visible,
    /// Exit transition running; a queued action fires when it completes
    PendingTransition,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueuedAction {
    CloseHost,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Content,
    Back,
    Switch,
    Cancel,
    Confirm,
}

/// An interactive chrome control, its accessibility label and where it was
/// last drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlInfo {
    pub control: Control,
    pub label: String,
    pub area: Option<Rect>,
}

#[derive(Debug, Clone, Copy, Default)]
struct ChromeLayout {
    container: Option<Rect>,
    back: Option<Rect>,
    switch: Option<Rect>,
    content: Option<Rect>,
}

pub struct Skeleton<C: PopupContent> {
    content: C,
    with_modal: bool,
    options: SkeletonOptions,
    handlers: PopupHandlers<C::Data>,
    host: ModalHost,
    motion: Option<Motion>,
    reporter: DataReporter<C::Data>,
    switch_value: Option<bool>,
    phase: SkeletonPhase,
    queued: Option<QueuedAction>,
    tokens: Vec<CloseToken>,
    focus: Focus,
    theme: Theme,
    footer: DialogFooter,
    layout: ChromeLayout,
}

impl<C: PopupContent> Skeleton<C> {
    /// Wraps `content`. A modal-hosted skeleton starts closed until
    /// [`Skeleton::open`]; otherwise it is mounted visible.
    pub fn new(mut content: C, with_modal: bool) -> Self {
        let mut reporter = DataReporter::default();
        content.mount(&mut reporter);

        let mut host = ModalHost::default();
        let phase = if with_modal {
            SkeletonPhase::Idle
        } else {
            host.mount_visible();
            SkeletonPhase::Visible
        };

        let mut skeleton = Self {
            content,
            with_modal,
            options: SkeletonOptions::default(),
            handlers: PopupHandlers::default(),
            host,
            motion: None,
            reporter,
            switch_value: None,
            phase,
            queued: None,
            tokens: Vec::new(),
            focus: Focus::Content,
            theme: Theme::default(),
            footer: DialogFooter::new("", ""),
            layout: ChromeLayout::default(),
        };
        skeleton.configure();
        skeleton
    }

    pub fn with_options(mut self, options: SkeletonOptions) -> Self {
        self.options = options;
        self.configure();
        self
    }

    pub fn with_handlers(mut self, mut handlers: PopupHandlers<C::Data>) -> Self {
        self.host.on_show(handlers.on_show.take());
        self.host.on_hide(handlers.on_hide.take());
        self.host.on_dismiss(handlers.on_dismiss.take());
        self.handlers = handlers;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Re-derives switch, motion, host and footer state from the options
    fn configure(&mut self) {
        self.switch_value = self.options.switch_value;
        self.host.set_options(self.options.modal);
        self.motion = self.new_motion();
        self.focus = Focus::Content;

        let i18n = I18n::new(self.options.locale);
        let cancel = self
            .options
            .cancel_text
            .clone()
            .unwrap_or_else(|| i18n.get("cancel").to_string());
        let confirm = self
            .options
            .confirm_text
            .clone()
            .unwrap_or_else(|| i18n.get("confirm").to_string());
        let mut footer = DialogFooter::new(cancel, confirm);
        footer.cancel_label = self.options.kind.label(Control::Cancel);
        footer.confirm_label = self.options.kind.label(Control::Confirm);
        footer.buttons = self.visible_buttons();
        self.footer = footer;
    }

    fn new_motion(&self) -> Option<Motion> {
        if !self.options.motion_type.is_animated() {
            return None;
        }
        let mut motion = Motion::new(self.options.motion_type, self.options.motion_config);
        if self.phase == SkeletonPhase::Visible {
            motion.show();
        }
        Some(motion)
    }

    pub fn has_motion(&self) -> bool {
        self.motion.is_some()
    }

    pub fn phase(&self) -> SkeletonPhase {
        self.phase
    }

    /// Whether anything is on screen, including a running exit transition
    pub fn is_open(&self) -> bool {
        matches!(
            self.phase,
            SkeletonPhase::Visible | SkeletonPhase::PendingTransition
        )
    }

    pub fn options(&self) -> &SkeletonOptions {
        &self.options
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Data most recently reported by the content
    pub fn data(&self) -> Option<&C::Data> {
        self.reporter.data()
    }

    pub fn extra(&self) -> &[Value] {
        self.reporter.extra()
    }

    /// Value handed to the content: the switch state, `true` without a switch
    pub fn switch_value(&self) -> bool {
        self.switch_value.unwrap_or(true)
    }

    /// Shows the popup (again) and runs its entrance
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.phase = SkeletonPhase::Visible;
        self.queued = None;
        self.tokens.clear();
        self.focus = Focus::Content;
        self.motion = self.new_motion();
        self.host.show();
    }

    /// Mirrors an external visibility flag. Hiding closes the host at once,
    /// without a transition and without any queued action.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.open();
        } else if self.is_open() {
            self.close_host();
        }
    }

    pub fn confirm(&mut self) {
        if self.phase != SkeletonPhase::Visible {
            return;
        }
        let token = self.issue_token();
        if let Some(on_confirm) = self.handlers.on_confirm.as_mut() {
            on_confirm(self.reporter.data.as_ref(), &self.reporter.extra, token);
        }
        self.poll_tokens();
    }

    pub fn cancel(&mut self) {
        if self.phase != SkeletonPhase::Visible {
            return;
        }
        match self.motion.as_mut() {
            Some(motion) => {
                motion.hide();
                self.phase = SkeletonPhase::PendingTransition;
                self.queued = Some(QueuedAction::Cancel);
            }
            None => {
                if let Some(on_cancel) = self.handlers.on_cancel.as_mut() {
                    on_cancel();
                }
                self.close_host();
            }
        }
    }

    pub fn back(&mut self) {
        if self.phase != SkeletonPhase::Visible {
            return;
        }
        let token = self.issue_token();
        if let Some(on_back) = self.handlers.on_back.as_mut() {
            on_back(token);
        }
        self.poll_tokens();
    }

    /// A press on the dimmed backdrop
    pub fn mask_press(&mut self) {
        if self.phase != SkeletonPhase::Visible {
            return;
        }
        let token = self.issue_token();
        if let Some(on_mask_press) = self.handlers.on_mask_press.as_mut() {
            on_mask_press(token);
        }
        self.poll_tokens();
    }

    /// Flips the inline switch; does nothing when the popup has none
    pub fn toggle_switch(&mut self) {
        if let Some(value) = self.switch_value {
            self.set_switch(!value);
        }
    }

    pub fn set_switch(&mut self, value: bool) {
        if self.switch_value.is_none() || self.switch_value == Some(value) {
            return;
        }
        self.switch_value = Some(value);
        if let Some(on_switch_change) = self.handlers.on_switch_change.as_mut() {
            on_switch_change(value);
        }
    }

    /// Advances the motion and applies close tokens invoked since the last
    /// call. The queued action runs on the tick that completes the exit.
    pub fn tick(&mut self, elapsed: Duration) {
        self.poll_tokens();

        let event = self.motion.as_mut().and_then(|motion| motion.tick(elapsed));
        if event != Some(MotionEvent::Hidden) || self.phase != SkeletonPhase::PendingTransition {
            return;
        }

        match self.queued.take() {
            Some(QueuedAction::Cancel) => {
                if let Some(on_cancel) = self.handlers.on_cancel.as_mut() {
                    on_cancel();
                }
                self.close_host();
            }
            Some(QueuedAction::CloseHost) => self.close_host(),
            None => {}
        }
    }

    fn issue_token(&mut self) -> CloseToken {
        // tokens only this skeleton still holds can never be closed
        self.tokens
            .retain(|t| t.is_requested() || Rc::strong_count(&t.requested) > 1);
        let token = CloseToken::default();
        self.tokens.push(token.clone());
        token
    }

    fn poll_tokens(&mut self) {
        if self.tokens.iter().any(CloseToken::is_requested) {
            self.tokens.clear();
            self.request_close();
        }
    }

    fn request_close(&mut self) {
        if self.phase != SkeletonPhase::Visible {
            return;
        }
        match self.motion.as_mut() {
            Some(motion) => {
                motion.hide();
                self.phase = SkeletonPhase::PendingTransition;
                self.queued = Some(QueuedAction::CloseHost);
            }
            None => self.close_host(),
        }
    }

    fn close_host(&mut self) {
        log::debug!("Closing {} popup", self.options.kind.prefix());
        self.phase = SkeletonPhase::Closed;
        self.queued = None;
        self.tokens.clear();
        self.host.close();
    }

    /// Footer buttons implied by the footer configuration
    pub fn visible_buttons(&self) -> FooterButtons {
        if self.options.footer.is_some() {
            return FooterButtons::NONE;
        }
        match self.options.footer_type {
            FooterType::Both => FooterButtons::BOTH,
            FooterType::SingleConfirm => FooterButtons {
                cancel: false,
                confirm: true,
            },
            FooterType::SingleCancel => FooterButtons {
                cancel: true,
                confirm: false,
            },
            FooterType::Custom => FooterButtons::NONE,
        }
    }

    /// Every interactive chrome control with its label and last drawn area
    pub fn controls(&self) -> Vec<ControlInfo> {
        let kind = self.options.kind;
        let info = |control: Control, area: Option<Rect>| ControlInfo {
            control,
            label: kind.label(control),
            area,
        };

        let mut controls = Vec::new();
        if !self.options.title.is_custom() {
            if self.options.show_back {
                controls.push(info(Control::Back, self.layout.back));
            }
            if self.switch_value.is_some() {
                controls.push(info(Control::Switch, self.layout.switch));
            }
        }
        for button in self.visible_buttons().iter() {
            let control = match button {
                FooterButton::Cancel => Control::Cancel,
                FooterButton::Confirm => Control::Confirm,
            };
            controls.push(info(control, self.footer.area_of(button)));
        }
        controls
    }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Content];
        if !self.options.title.is_custom() {
            if self.options.show_back {
                order.push(Focus::Back);
            }
            if self.switch_value.is_some() {
                order.push(Focus::Switch);
            }
        }
        let buttons = self.visible_buttons();
        if buttons.cancel {
            order.push(Focus::Cancel);
        }
        if buttons.confirm {
            order.push(Focus::Confirm);
        }
        order
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order.iter().position(|&f| f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    /// Maps a key press to a chrome action or forwards it to the content.
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press || self.phase != SkeletonPhase::Visible {
            return false;
        }

        match key.code {
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Esc if self.with_modal => self.mask_press(),
            KeyCode::Esc => self.cancel(),
            KeyCode::Backspace if self.options.show_back && !self.options.title.is_custom() => {
                self.back()
            }
            KeyCode::Char(' ') if self.focus == Focus::Switch => self.toggle_switch(),
            KeyCode::Enter => match self.focus {
                Focus::Back => self.back(),
                Focus::Switch => self.toggle_switch(),
                Focus::Cancel => self.cancel(),
                Focus::Confirm => self.confirm(),
                Focus::Content => {
                    if !self.forward_key(key) && self.visible_buttons().confirm {
                        self.confirm();
                    }
                }
            },
            _ if self.focus == Focus::Content => return self.forward_key(key),
            _ => return false,
        }
        true
    }

    fn forward_key(&mut self, key: KeyEvent) -> bool {
        let ctx = ContentContext {
            switch_value: self.switch_value.unwrap_or(true),
            theme: &self.theme,
            i18n: I18n::new(self.options.locale),
        };
        self.content.handle_key(key, &ctx, &mut self.reporter)
    }

    /// Hit-tests a left click against the last rendered layout
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || self.phase != SkeletonPhase::Visible
        {
            return false;
        }
        let position = Position::new(mouse.column, mouse.row);

        if let Some(button) = self.footer.hit(position) {
            match button {
                FooterButton::Cancel => self.cancel(),
                FooterButton::Confirm => self.confirm(),
            }
            return true;
        }
        if self.layout.back.is_some_and(|area| area.contains(position)) {
            self.back();
            return true;
        }
        if self.layout.switch.is_some_and(|area| area.contains(position)) {
            self.toggle_switch();
            return true;
        }
        if self.layout.content.is_some_and(|area| area.contains(position)) {
            self.focus = Focus::Content;
            let ctx = ContentContext {
                switch_value: self.switch_value.unwrap_or(true),
                theme: &self.theme,
                i18n: I18n::new(self.options.locale),
            };
            return self.content.handle_click(position, &ctx, &mut self.reporter);
        }
        if let Some(container) = self.layout.container {
            if self.with_modal && self.host.is_mask_press(container, position) {
                self.mask_press();
                return true;
            }
        }
        false
    }

    fn title_height(&self) -> u16 {
        match &self.options.title {
            Title::Custom(element) => element.height,
            _ => {
                let subtitle = self.options.subtitle.as_deref().is_some_and(|s| !s.is_empty());
                // title row, optional subtitle row, hairline
                2 + u16::from(subtitle)
            }
        }
    }

    fn footer_height(&self) -> u16 {
        match &self.options.footer {
            Some(element) => element.height,
            None if self.visible_buttons() == FooterButtons::NONE => 0,
            None => DialogFooter::HEIGHT,
        }
    }

    fn back_text(&self) -> String {
        self.options
            .back_text
            .clone()
            .unwrap_or_else(|| I18n::new(self.options.locale).get("back").to_string())
    }

    /// Draws the popup into `area`, the screen when modal-hosted
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.layout = ChromeLayout::default();
        if !self.is_open() || !self.host.is_visible() {
            return;
        }

        let width = self.options.width.unwrap_or(area.width).min(area.width);
        let title_height = self.title_height();
        let footer_height = self.footer_height();
        let content_height = self.content.height_hint(width.saturating_sub(2));
        let height = title_height
            .saturating_add(content_height)
            .saturating_add(footer_height)
            .saturating_add(2)
            .min(area.height);

        let resting = if self.with_modal {
            match self.host.render(f, area, width, height) {
                Some(rect) => rect,
                None => return,
            }
        } else {
            self.host.place(area, width, height)
        };

        let frame = match self.motion.as_ref() {
            Some(motion) if motion.is_hidden() => return,
            Some(motion) => motion.apply(resting, area),
            None => MotionFrame {
                area: resting,
                modifier: Modifier::empty(),
            },
        };
        let rect = frame.area;
        if rect.is_empty() {
            return;
        }

        f.render_widget(Clear, rect);
        let block = styled::container(&self.theme);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [title_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(title_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .areas(inner);

        self.render_title(f, title_area);

        let ctx = ContentContext {
            switch_value: self.switch_value.unwrap_or(true),
            theme: &self.theme,
            i18n: I18n::new(self.options.locale),
        };
        self.content.render(f, content_area, &ctx);
        self.layout.content = Some(content_area);

        match &self.options.footer {
            Some(element) => element.draw(f, footer_area, &self.theme),
            None if footer_height > 0 => {
                let focused = match self.focus {
                    Focus::Cancel => Some(FooterButton::Cancel),
                    Focus::Confirm => Some(FooterButton::Confirm),
                    _ => None,
                };
                self.footer.render(f, footer_area, &self.theme, focused);
            }
            None => {}
        }

        if !frame.modifier.is_empty() {
            f.buffer_mut()
                .set_style(rect, Style::default().add_modifier(frame.modifier));
        }
        self.layout.container = Some(rect);
    }

    fn render_title(&mut self, f: &mut Frame, area: Rect) {
        if let Title::Custom(element) = &self.options.title {
            element.draw(f, area, &self.theme);
            return;
        }

        let block = styled::header(&self.theme);
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.is_empty() {
            return;
        }
        let row = Rect { height: 1, ..inner };

        let title_style = styled::title(&self.theme);
        let mut spans = Vec::new();
        for (i, fragment) in self.options.title.fragments().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(fragment.clone(), title_style));
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            row,
        );

        if let Some(subtitle) = self.options.subtitle.as_deref().filter(|s| !s.is_empty()) {
            if inner.height > 1 {
                let subtitle_row = Rect {
                    y: row.y + 1,
                    ..row
                };
                f.render_widget(
                    Paragraph::new(Span::styled(subtitle.to_string(), styled::subtitle(&self.theme)))
                        .alignment(Alignment::Center),
                    subtitle_row,
                );
            }
        }

        if self.options.show_back {
            let text = format!("‹ {}", self.back_text());
            let back_area = Rect {
                width: u16::try_from(display_width(&text))
                    .unwrap_or(u16::MAX)
                    .min(row.width),
                ..row
            };
            let style = styled::back(&self.theme);
            let style = if self.focus == Focus::Back {
                styled::focused(style)
            } else {
                style
            };
            f.render_widget(Paragraph::new(Span::styled(text, style)), back_area);
            self.layout.back = Some(back_area);
        }

        if let Some(on) = self.switch_value {
            if row.width > SWITCH_WIDTH {
                let switch_area = Rect {
                    x: row.right() - SWITCH_WIDTH - 1,
                    width: SWITCH_WIDTH,
                    ..row
                };
                let span = switch_span(on, self.focus == Focus::Switch, &self.theme);
                f.render_widget(Paragraph::new(Line::from(span)), switch_area);
                self.layout.switch = Some(switch_area);
            }
        }
    }
}
