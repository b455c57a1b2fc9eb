//! Modal host.
//!
//! Owns the visibility of an overlay, draws the dimmed mask behind it, places
//! the hosted element according to [`ContainerAlign`] and reports the
//! show / hide / dismiss lifecycle to optional callbacks.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::Clear,
    Frame,
};
use serde::{Deserialize, Serialize};

use crate::ui::utils::{bottom_rect, centered_rect, top_rect};

/// Where the hosted element sits inside the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContainerAlign {
    Top,
    Center,
    #[default]
    Bottom,
}

/// Presentation options of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalOptions {
    /// Dim everything behind the hosted element
    pub mask: bool,
    pub align: ContainerAlign,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            mask: true,
            align: ContainerAlign::Bottom,
        }
    }
}

type Callback = Box<dyn FnMut()>;

/// A single modal slot
#[derive(Default)]
pub struct ModalHost {
    visible: bool,
    options: ModalOptions,
    on_show: Option<Callback>,
    on_hide: Option<Callback>,
    on_dismiss: Option<Callback>,
}

impl std::fmt::Debug for ModalHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalHost")
            .field("visible", &self.visible)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ModalHost {
    pub fn new(options: ModalOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> ModalOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ModalOptions) {
        self.options = options;
    }

    pub fn on_show(&mut self, callback: Option<Callback>) {
        self.on_show = callback;
    }

    pub fn on_hide(&mut self, callback: Option<Callback>) {
        self.on_hide = callback;
    }

    pub fn on_dismiss(&mut self, callback: Option<Callback>) {
        self.on_dismiss = callback;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Makes the host visible without running `on_show`; used for elements that
    /// are mounted already visible.
    pub fn mount_visible(&mut self) {
        self.visible = true;
    }

    /// Shows the host, returning `false` if it was already visible
    pub fn show(&mut self) -> bool {
        if self.visible {
            return false;
        }
        log::debug!("Modal shown");
        self.visible = true;
        if let Some(on_show) = self.on_show.as_mut() {
            on_show();
        }
        true
    }

    /// Hides the host and reports hide then dismiss, returning `false` if it
    /// was not visible
    pub fn close(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        log::debug!("Modal closed");
        self.visible = false;
        if let Some(on_hide) = self.on_hide.as_mut() {
            on_hide();
        }
        if let Some(on_dismiss) = self.on_dismiss.as_mut() {
            on_dismiss();
        }
        true
    }

    /// Draws the mask over `screen` and returns the rect the hosted element of
    /// `width` x `height` occupies, or `None` while hidden
    pub fn render(&self, f: &mut Frame, screen: Rect, width: u16, height: u16) -> Option<Rect> {
        if !self.visible {
            return None;
        }

        if self.options.mask {
            f.buffer_mut()
                .set_style(screen, Style::default().add_modifier(Modifier::DIM));
        }

        let area = self.place(screen, width, height);
        f.render_widget(Clear, area);
        Some(area)
    }

    /// The rect a hosted element of `width` x `height` occupies inside `screen`
    pub fn place(&self, screen: Rect, width: u16, height: u16) -> Rect {
        match self.options.align {
            ContainerAlign::Top => top_rect(screen, width, height),
            ContainerAlign::Center => centered_rect(screen, width, height),
            ContainerAlign::Bottom => bottom_rect(screen, width, height),
        }
    }

    /// Whether a press at `position` lands on the mask rather than on `element`
    pub fn is_mask_press(&self, element: Rect, position: Position) -> bool {
        self.visible && self.options.mask && !element.contains(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_host(log: &Rc<RefCell<Vec<&'static str>>>) -> ModalHost {
        let mut host = ModalHost::new(ModalOptions::default());
        let l = Rc::clone(log);
        host.on_show(Some(Box::new(move || l.borrow_mut().push("show"))));
        let l = Rc::clone(log);
        host.on_hide(Some(Box::new(move || l.borrow_mut().push("hide"))));
        let l = Rc::clone(log);
        host.on_dismiss(Some(Box::new(move || l.borrow_mut().push("dismiss"))));
        host
    }

    #[test]
    fn test_show_and_close_fire_lifecycle_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut host = recording_host(&log);

        assert!(host.show());
        assert!(!host.show());
        assert!(host.close());
        assert!(!host.close());

        assert_eq!(*log.borrow(), vec!["show", "hide", "dismiss"]);
    }

    #[test]
    fn test_mount_visible_is_silent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut host = recording_host(&log);
        host.mount_visible();
        assert!(host.is_visible());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_place_follows_alignment() {
        let screen = Rect::new(0, 0, 80, 24);
        let mut host = ModalHost::default();
        host.set_options(ModalOptions {
            mask: true,
            align: ContainerAlign::Top,
        });
        assert_eq!(host.place(screen, 40, 10), Rect::new(20, 0, 40, 10));
        host.set_options(ModalOptions {
            mask: true,
            align: ContainerAlign::Center,
        });
        assert_eq!(host.place(screen, 40, 10), Rect::new(20, 7, 40, 10));
        host.set_options(ModalOptions::default());
        assert_eq!(host.place(screen, 40, 10), Rect::new(20, 14, 40, 10));
    }

    #[test]
    fn test_mask_press_only_outside_element() {
        let mut host = ModalHost::default();
        let element = Rect::new(10, 10, 20, 5);
        assert!(!host.is_mask_press(element, Position::new(0, 0)));
        host.show();
        assert!(host.is_mask_press(element, Position::new(0, 0)));
        assert!(!host.is_mask_press(element, Position::new(12, 11)));
    }
}
