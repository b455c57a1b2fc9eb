//! Gallery state.
//!
//! Holds the scene menu, the overlay currently on screen and the toast showing
//! the last reported result. Widget callbacks never touch the app directly:
//! they send a [`GalleryEvent`] over an unbounded channel that the app drains
//! once per frame.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use panel_kit::components::popup::{ContentContext, PopupContent};
use panel_kit::ui::{utils::wrap_text, ToastType};
use panel_kit::{
    CheckboxDialog, CheckboxItem, Config, ContainerAlign, Element, FooterType, I18n, ListContent,
    Locale, ModalOptions, MotionType, PopupHandlers, PopupKind, Selection, Skeleton,
    SkeletonOptions, SkeletonPhase, Theme, TopBar, TopBarAction, TopBarContent,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Entries of the gallery menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    SingleCheckbox,
    MultiCheckbox,
    ListPopup,
    NoticePopup,
}

impl Scene {
    pub const ALL: [Scene; 4] = [
        Scene::SingleCheckbox,
        Scene::MultiCheckbox,
        Scene::ListPopup,
        Scene::NoticePopup,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Scene::SingleCheckbox => "Checkbox dialog (single)",
            Scene::MultiCheckbox => "Checkbox dialog (multi)",
            Scene::ListPopup => "List popup",
            Scene::NoticePopup => "Popup with back and switch",
        }
    }
}

/// Results reported by widget callbacks
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    Confirmed(String),
    Cancelled,
    Changed(String),
    SwitchChanged(bool),
    Back,
    Dismissed,
    TopBarPressed(&'static str),
}

/// Whether the event loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Wrapped help text, greyed out while the switch is off
pub struct Notice {
    text: String,
}

impl PopupContent for Notice {
    type Data = ();

    fn height_hint(&self, width: u16) -> u16 {
        wrap_text(&self.text, usize::from(width.saturating_sub(2))).len() as u16
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &ContentContext) {
        let color = if ctx.switch_value {
            ctx.theme.foreground()
        } else {
            ctx.theme.muted()
        };
        let inner = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };
        f.render_widget(
            Paragraph::new(self.text.as_str())
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: false }),
            inner,
        );
    }
}

pub enum Overlay {
    Checkbox(CheckboxDialog),
    List(Skeleton<ListContent>),
    Notice(Skeleton<Notice>),
}

pub struct Toast {
    pub message: String,
    pub kind: ToastType,
    pub shown_at: Instant,
}

pub struct App {
    /// Application configuration
    pub config: Config,
    pub theme: Theme,
    pub locale: Locale,
    /// Effect used by newly opened popups
    pub motion_type: MotionType,
    /// Currently selected menu entry
    pub selected_index: usize,
    pub top_bar: TopBar,
    pub overlay: Option<Overlay>,
    pub toast: Option<Toast>,
    /// Status line under the menu
    pub status_message: String,
    tx: UnboundedSender<GalleryEvent>,
    rx: UnboundedReceiver<GalleryEvent>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = unbounded_channel();
        let theme = config.theme();
        let top_bar = custom_content_bar(tx.clone());

        Self {
            theme,
            locale: config.ui.locale,
            motion_type: config.popup.motion_type,
            config,
            selected_index: 0,
            top_bar,
            overlay: None,
            toast: None,
            status_message: "Select a widget and press Enter".to_string(),
            tx,
            rx,
        }
    }

    pub fn selected_scene(&self) -> Scene {
        Scene::ALL[self.selected_index % Scene::ALL.len()]
    }

    pub fn next(&mut self) {
        self.selected_index = (self.selected_index + 1) % Scene::ALL.len();
    }

    pub fn previous(&mut self) {
        self.selected_index = if self.selected_index == 0 {
            Scene::ALL.len() - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Steps through every popup effect
    pub fn cycle_motion(&mut self) {
        let current = MotionType::ALL
            .iter()
            .position(|&m| m == self.motion_type)
            .unwrap_or(0);
        self.motion_type = MotionType::ALL[(current + 1) % MotionType::ALL.len()];
        self.status_message = format!("Popup motion: {:?}", self.motion_type);
    }

    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        };
        self.status_message = format!("Locale: {}", self.locale);
    }

    /// Opens the overlay of the selected scene
    pub fn open(&mut self) {
        let overlay = match self.selected_scene() {
            Scene::SingleCheckbox => Overlay::Checkbox(self.checkbox_dialog(false)),
            Scene::MultiCheckbox => Overlay::Checkbox(self.checkbox_dialog(true)),
            Scene::ListPopup => Overlay::List(self.list_popup()),
            Scene::NoticePopup => Overlay::Notice(self.notice_popup()),
        };
        log::info!("Opened {}", self.selected_scene().title());
        self.overlay = Some(overlay);
    }

    fn candidates() -> Vec<CheckboxItem> {
        vec![
            CheckboxItem::new("a").title("Living room"),
            CheckboxItem::new("b").title("Bedroom"),
            CheckboxItem::new("c").title("Kitchen"),
            CheckboxItem::new("d").title("Garage").disabled(true),
            CheckboxItem::new("e").title("Balcony").checked_color(Color::Cyan),
            CheckboxItem::new("f").title("Study"),
            CheckboxItem::new("g").title("Hallway"),
        ]
    }

    fn checkbox_dialog(&self, multi: bool) -> CheckboxDialog {
        let items = Self::candidates();
        let dialog = if multi {
            CheckboxDialog::multi("Rooms to clean", items, &[])
        } else {
            CheckboxDialog::single("Start in", items, Some("a"))
        };

        let changed = self.tx.clone();
        let confirmed = self.tx.clone();
        let cancelled = self.tx.clone();
        dialog
            .subtitle("Choose and confirm")
            .max_item_num(self.config.dialog.max_item_num)
            .theme(self.theme.clone())
            .locale(self.locale)
            .on_change(move |selection| {
                let _ = changed.send(GalleryEvent::Changed(describe(selection)));
            })
            .on_confirm(move |selection| {
                let _ = confirmed.send(GalleryEvent::Confirmed(describe(selection)));
            })
            .on_cancel(move || {
                let _ = cancelled.send(GalleryEvent::Cancelled);
            })
    }

    fn popup_options(&self) -> SkeletonOptions {
        SkeletonOptions::from_config(&self.config)
            .motion(self.motion_type)
            .locale(self.locale)
            .modal(ModalOptions {
                mask: true,
                align: ContainerAlign::Bottom,
            })
    }

    fn list_popup(&self) -> Skeleton<ListContent> {
        let content =
            ListContent::multi(Self::candidates(), &["b"]).max_rows(self.config.dialog.max_item_num);

        let confirmed = self.tx.clone();
        let cancelled = self.tx.clone();
        let dismissed = self.tx.clone();
        let masked = self.tx.clone();
        let mut popup = Skeleton::new(content, true)
            .with_options(
                self.popup_options()
                    .title(vec!["Rooms", "·", "multi"])
                    .subtitle("Space toggles, Enter confirms")
                    .kind(PopupKind::List),
            )
            .with_handlers(
                PopupHandlers::new()
                    .on_confirm(move |data: Option<&Selection>, _extra, close| {
                        let text = data.map(describe).unwrap_or_default();
                        let _ = confirmed.send(GalleryEvent::Confirmed(text));
                        close.close();
                    })
                    .on_cancel(move || {
                        let _ = cancelled.send(GalleryEvent::Cancelled);
                    })
                    .on_mask_press(move |close| {
                        log::debug!("Mask pressed");
                        let _ = masked.send(GalleryEvent::Dismissed);
                        close.close();
                    })
                    .on_dismiss(move || {
                        let _ = dismissed.send(GalleryEvent::Dismissed);
                    }),
            )
            .with_theme(self.theme.clone());
        popup.open();
        popup
    }

    fn notice_popup(&self) -> Skeleton<Notice> {
        let i18n = I18n::new(self.locale);
        let content = Notice {
            text: i18n.get("deviceOfflineHelp").to_string(),
        };

        let confirmed = self.tx.clone();
        let back = self.tx.clone();
        let switched = self.tx.clone();
        let mut popup = Skeleton::new(content, true)
            .with_options(
                self.popup_options()
                    .title(i18n.get("deviceOffline"))
                    .switch(true)
                    .show_back(true)
                    .confirm_text(i18n.get("alreadyKnow"))
                    .footer_type(FooterType::SingleConfirm)
                    .kind(PopupKind::Custom)
                    .width(60),
            )
            .with_handlers(
                PopupHandlers::new()
                    .on_confirm(move |_data: Option<&()>, _extra, close| {
                        let _ = confirmed.send(GalleryEvent::Confirmed("acknowledged".to_string()));
                        close.close();
                    })
                    .on_back(move |close| {
                        let _ = back.send(GalleryEvent::Back);
                        close.close();
                    })
                    .on_switch_change(move |on| {
                        let _ = switched.send(GalleryEvent::SwitchChanged(on));
                    }),
            )
            .with_theme(self.theme.clone());
        popup.open();
        popup
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        if let Some(overlay) = self.overlay.as_mut() {
            match overlay {
                Overlay::Checkbox(dialog) => dialog.handle_key(key),
                Overlay::List(popup) => popup.handle_key(key),
                Overlay::Notice(popup) => popup.handle_key(key),
            };
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Enter => self.open(),
            KeyCode::Char('m') => self.cycle_motion(),
            KeyCode::Char('l') => self.toggle_locale(),
            _ => {
                self.top_bar.handle_key(key);
            }
        }
        Flow::Continue
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match self.overlay.as_mut() {
            Some(Overlay::Checkbox(dialog)) => {
                dialog.handle_mouse(mouse);
            }
            Some(Overlay::List(popup)) => {
                popup.handle_mouse(mouse);
            }
            Some(Overlay::Notice(popup)) => {
                popup.handle_mouse(mouse);
            }
            None => {
                self.top_bar.handle_mouse(mouse);
            }
        }
    }

    /// Advances popups, applies reported events and expires the toast
    pub fn tick(&mut self, elapsed: Duration) {
        let phase = match self.overlay.as_mut() {
            Some(Overlay::List(popup)) => {
                popup.tick(elapsed);
                Some(popup.phase())
            }
            Some(Overlay::Notice(popup)) => {
                popup.tick(elapsed);
                Some(popup.phase())
            }
            _ => None,
        };
        if phase == Some(SkeletonPhase::Closed) {
            self.overlay = None;
        }

        self.drain_events();

        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.shown_at.elapsed() >= TOAST_DURATION)
        {
            self.toast = None;
        }
    }

    pub fn drain_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            log::debug!("Gallery event: {event:?}");
            match event {
                GalleryEvent::Confirmed(text) => {
                    self.show_toast(format!("Confirmed: {text}"), ToastType::Success);
                    self.close_dialog();
                }
                GalleryEvent::Cancelled => {
                    self.show_toast("Cancelled".to_string(), ToastType::Info);
                    self.close_dialog();
                }
                GalleryEvent::Changed(text) => self.status_message = format!("Selection: {text}"),
                GalleryEvent::SwitchChanged(on) => {
                    let state = if on { "on" } else { "off" };
                    self.show_toast(format!("Switch {state}"), ToastType::Info);
                }
                GalleryEvent::Back => self.status_message = "Back pressed".to_string(),
                GalleryEvent::Dismissed => self.status_message = "Popup dismissed".to_string(),
                GalleryEvent::TopBarPressed(name) => {
                    self.show_toast(format!("click {name}"), ToastType::Info);
                }
            }
        }
    }

    fn show_toast(&mut self, message: String, kind: ToastType) {
        self.toast = Some(Toast {
            message,
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Checkbox dialogs have no host; the gallery drops them once they report
    fn close_dialog(&mut self) {
        if matches!(self.overlay, Some(Overlay::Checkbox(_))) {
            self.overlay = None;
        }
    }
}

fn describe(selection: &Selection) -> String {
    serde_json::to_string(selection).unwrap_or_default()
}

/// Black bar with a back action, a red custom content slot and an edit action
fn custom_content_bar(tx: UnboundedSender<GalleryEvent>) -> TopBar {
    let back = tx.clone();
    TopBar::new()
        .background(Color::Black)
        .color(Color::White)
        .action(
            TopBarAction::named("back")
                .key('b')
                .on_press(move || {
                    let _ = back.send(GalleryEvent::TopBarPressed("back"));
                }),
        )
        .content(TopBarContent::Custom(Element::new(1, |f, area, _theme| {
            f.render_widget(
                Paragraph::new("Hahaha")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::White).bg(Color::Red)),
                area,
            );
        })))
        .action(
            TopBarAction::named("edit")
                .key('e')
                .on_press(move || {
                    let _ = tx.send(GalleryEvent::TopBarPressed("edit"));
                }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> Flow {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn test_app() -> App {
        let mut config = Config::default();
        config.popup.motion_type = MotionType::None;
        App::new(config)
    }

    #[test]
    fn test_next_wraps_around() {
        let mut app = test_app();
        app.selected_index = Scene::ALL.len() - 1;
        app.next();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut app = test_app();
        app.previous();
        assert_eq!(app.selected_index, Scene::ALL.len() - 1);
    }

    #[test]
    fn test_quit_only_without_overlay() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.overlay.is_some());
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Continue);
        press(&mut app, KeyCode::Esc);
        app.tick(Duration::ZERO);
        assert!(app.overlay.is_none());
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);
    }

    #[test]
    fn test_single_checkbox_confirm_shows_toast() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        // cursor on "a"; move to "b" and select it
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        app.tick(Duration::ZERO);

        assert!(app.overlay.is_none());
        let toast = app.toast.as_ref().map(|t| t.message.as_str());
        assert_eq!(toast, Some(r#"Confirmed: "b""#));
    }

    #[test]
    fn test_list_popup_closes_without_motion() {
        let mut app = test_app();
        app.selected_index = 2;
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.overlay, Some(Overlay::List(_))));

        press(&mut app, KeyCode::Enter);
        app.tick(Duration::ZERO);
        assert!(app.overlay.is_none());
        let toast = app.toast.as_ref().map(|t| t.message.as_str());
        assert_eq!(toast, Some(r#"Confirmed: ["b"]"#));
    }

    #[test]
    fn test_top_bar_shortcut_reports_press() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('e'));
        app.drain_events();
        let toast = app.toast.as_ref().map(|t| t.message.as_str());
        assert_eq!(toast, Some("click edit"));
    }

    #[test]
    fn test_cycle_motion_visits_every_type() {
        let mut app = test_app();
        let start = app.motion_type;
        for _ in 0..MotionType::ALL.len() {
            app.cycle_motion();
        }
        assert_eq!(app.motion_type, start);
    }
}
