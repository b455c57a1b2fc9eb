//! panel-kit - themed dialog, popup, modal and navigation-bar widgets for
//! ratatui applications.
//!
//! Widgets render into a ratatui [`Frame`](ratatui::Frame), take crossterm key
//! and mouse events, and report user intent through caller-supplied callbacks.
//! They hold only their own presentation state.

pub mod components;
pub mod config;
pub mod i18n;
pub mod ui;

pub use components::dialog::{CheckboxDialog, CheckboxItem, Selection, SelectionMode};
pub use components::modal::{ContainerAlign, ModalHost, ModalOptions};
pub use components::popup::{
    CloseToken, FooterType, ListContent, MotionType, PopupContent, PopupHandlers, PopupKind,
    Skeleton, SkeletonOptions, SkeletonPhase, Title,
};
pub use components::top_bar::{TopBar, TopBarAction, TopBarContent};
pub use components::Element;
pub use config::Config;
pub use i18n::{I18n, Locale, Strings};
pub use ui::theme::Theme;
