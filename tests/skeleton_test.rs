#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use panel_kit::components::popup::{
        CloseToken, Control, ContentContext, DataReporter, FooterType, MotionConfig, MotionType,
        PopupContent, PopupHandlers, PopupKind, Skeleton, SkeletonOptions, SkeletonPhase,
    };
    use panel_kit::{ContainerAlign, Element, ModalOptions};
    use ratatui::{backend::TestBackend, layout::Rect, widgets::Paragraph, Frame, Terminal};
    use serde_json::{json, Value};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    /// Content that records the switch value it was rendered with and
    /// reports "typed" when `r` is pressed
    struct Recorder {
        seen_switch: Rc<Cell<Option<bool>>>,
    }

    impl Recorder {
        fn new() -> (Self, Rc<Cell<Option<bool>>>) {
            let seen = Rc::new(Cell::new(None));
            (
                Self {
                    seen_switch: Rc::clone(&seen),
                },
                seen,
            )
        }
    }

    impl PopupContent for Recorder {
        type Data = String;

        fn height_hint(&self, _width: u16) -> u16 {
            2
        }

        fn mount(&mut self, reporter: &mut DataReporter<String>) {
            reporter.report("initial".to_string(), vec![json!(1)]);
        }

        fn render(&mut self, f: &mut Frame, area: Rect, ctx: &ContentContext) {
            self.seen_switch.set(Some(ctx.switch_value));
            f.render_widget(Paragraph::new("recorder body"), area);
        }

        fn handle_key(
            &mut self,
            key: KeyEvent,
            _ctx: &ContentContext,
            reporter: &mut DataReporter<String>,
        ) -> bool {
            if key.code == KeyCode::Char('r') {
                reporter.report_data("typed".to_string());
                return true;
            }
            false
        }
    }

    type Log = Rc<RefCell<Vec<String>>>;

    fn recording_handlers(log: &Log, close_on_confirm: bool) -> PopupHandlers<String> {
        let confirm = Rc::clone(log);
        let cancel = Rc::clone(log);
        let back = Rc::clone(log);
        let mask = Rc::clone(log);
        let switch = Rc::clone(log);
        let show = Rc::clone(log);
        let hide = Rc::clone(log);
        let dismiss = Rc::clone(log);
        PopupHandlers::new()
            .on_confirm(move |data: Option<&String>, extra: &[Value], close: CloseToken| {
                confirm
                    .borrow_mut()
                    .push(format!("confirm {} {}", data.cloned().unwrap_or_default(), extra.len()));
                if close_on_confirm {
                    close.close();
                }
            })
            .on_cancel(move || cancel.borrow_mut().push("cancel".to_string()))
            .on_back(move |_close| back.borrow_mut().push("back".to_string()))
            .on_mask_press(move |close| {
                mask.borrow_mut().push("mask".to_string());
                close.close();
            })
            .on_switch_change(move |on| switch.borrow_mut().push(format!("switch {on}")))
            .on_show(move || show.borrow_mut().push("show".to_string()))
            .on_hide(move || hide.borrow_mut().push("hide".to_string()))
            .on_dismiss(move || dismiss.borrow_mut().push("dismiss".to_string()))
    }

    fn still(options: SkeletonOptions) -> SkeletonOptions {
        options.motion(MotionType::None)
    }

    fn animated(options: SkeletonOptions) -> SkeletonOptions {
        options
            .motion(MotionType::PullUp)
            .motion_config(MotionConfig::from_millis(100))
    }

    fn draw<C: PopupContent>(skeleton: &mut Skeleton<C>) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                skeleton.render(f, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    fn screen(rows: &[String]) -> String {
        rows.join("\n")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_confirm_without_motion_closes_synchronously() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default()))
            .with_handlers(recording_handlers(&log, true));

        skeleton.confirm();

        assert_eq!(skeleton.phase(), SkeletonPhase::Closed);
        assert_eq!(*log.borrow(), vec!["confirm initial 1", "hide", "dismiss"]);

        // a second press after closing is ignored
        skeleton.confirm();
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_confirm_forwards_latest_reported_data() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default()))
            .with_handlers(recording_handlers(&log, false));

        assert!(skeleton.handle_key(key(KeyCode::Char('r'))));
        assert_eq!(skeleton.data().map(String::as_str), Some("typed"));
        skeleton.confirm();

        assert_eq!(*log.borrow(), vec!["confirm typed 0"]);
        // the handler kept the token unused, so the popup stays up
        assert_eq!(skeleton.phase(), SkeletonPhase::Visible);
    }

    #[test]
    fn test_cancel_without_motion_is_immediate() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default()))
            .with_handlers(recording_handlers(&log, false));

        skeleton.cancel();

        assert_eq!(*log.borrow(), vec!["cancel", "hide", "dismiss"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::Closed);
    }

    #[test]
    fn test_back_without_close_keeps_popup_open() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default().show_back(true)))
            .with_handlers(recording_handlers(&log, false));

        skeleton.back();

        assert_eq!(*log.borrow(), vec!["back"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::Visible);
    }

    #[test]
    fn test_cancel_with_motion_waits_for_exit() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(animated(SkeletonOptions::default()))
            .with_handlers(recording_handlers(&log, false));
        assert!(skeleton.has_motion());
        skeleton.tick(Duration::from_millis(100));

        skeleton.cancel();
        assert_eq!(skeleton.phase(), SkeletonPhase::PendingTransition);
        assert!(log.borrow().is_empty());

        skeleton.tick(Duration::from_millis(50));
        assert!(log.borrow().is_empty());

        skeleton.tick(Duration::from_millis(50));
        assert_eq!(*log.borrow(), vec!["cancel", "hide", "dismiss"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::Closed);

        skeleton.tick(Duration::from_millis(100));
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_confirm_with_motion_defers_host_close() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(animated(SkeletonOptions::default()))
            .with_handlers(recording_handlers(&log, true));
        skeleton.tick(Duration::from_millis(100));

        skeleton.confirm();
        assert_eq!(*log.borrow(), vec!["confirm initial 1"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::PendingTransition);
        assert!(skeleton.is_open());

        // further actions are ignored while leaving
        skeleton.cancel();
        skeleton.confirm();
        assert_eq!(log.borrow().len(), 1);

        skeleton.tick(Duration::from_millis(100));
        assert_eq!(*log.borrow(), vec!["confirm initial 1", "hide", "dismiss"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::Closed);
    }

    #[test]
    fn test_back_with_motion_defers_host_close() {
        let log: Log = Rc::default();
        let back = Rc::clone(&log);
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(animated(SkeletonOptions::default().show_back(true)))
            .with_handlers(recording_handlers(&log, false).on_back(move |close| {
                back.borrow_mut().push("back".to_string());
                close.close();
            }));
        skeleton.tick(Duration::from_millis(100));

        skeleton.back();
        assert_eq!(*log.borrow(), vec!["back"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::PendingTransition);

        skeleton.back();
        skeleton.mask_press();
        assert_eq!(*log.borrow(), vec!["back"]);

        skeleton.tick(Duration::from_millis(100));
        assert_eq!(*log.borrow(), vec!["back", "hide", "dismiss"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::Closed);

        skeleton.tick(Duration::from_millis(100));
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_mask_press_with_motion_defers_host_close() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(animated(SkeletonOptions::default()))
            .with_handlers(recording_handlers(&log, false));
        skeleton.tick(Duration::from_millis(100));

        skeleton.mask_press();
        assert_eq!(*log.borrow(), vec!["mask"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::PendingTransition);

        skeleton.mask_press();
        skeleton.back();
        assert_eq!(*log.borrow(), vec!["mask"]);

        skeleton.tick(Duration::from_millis(50));
        assert_eq!(*log.borrow(), vec!["mask"]);

        skeleton.tick(Duration::from_millis(50));
        assert_eq!(*log.borrow(), vec!["mask", "hide", "dismiss"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::Closed);
    }

    #[test]
    fn test_backspace_ignored_when_custom_title_hides_back() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let title = Element::new(1, |f, area, _theme| {
            f.render_widget(Paragraph::new("hand drawn"), area);
        });
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default().title(title).show_back(true)))
            .with_handlers(recording_handlers(&log, false));

        assert!(!skeleton.handle_key(key(KeyCode::Backspace)));
        assert!(log.borrow().is_empty());
        assert_eq!(skeleton.phase(), SkeletonPhase::Visible);
    }

    #[test]
    fn test_backspace_presses_visible_back() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default().show_back(true)))
            .with_handlers(recording_handlers(&log, false));

        assert!(skeleton.handle_key(key(KeyCode::Backspace)));
        assert_eq!(*log.borrow(), vec!["back"]);
    }

    #[test]
    fn test_token_closed_later_applies_on_tick() {
        let stash: Rc<RefCell<Option<CloseToken>>> = Rc::default();
        let keep = Rc::clone(&stash);
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default()))
            .with_handlers(PopupHandlers::new().on_confirm(
                move |_data: Option<&String>, _extra: &[Value], close: CloseToken| {
                    *keep.borrow_mut() = Some(close);
                },
            ));

        skeleton.confirm();
        assert_eq!(skeleton.phase(), SkeletonPhase::Visible);

        stash.borrow().as_ref().unwrap().close();
        skeleton.tick(Duration::ZERO);
        assert_eq!(skeleton.phase(), SkeletonPhase::Closed);
    }

    #[test]
    fn test_switch_defaults_to_true_without_switch() {
        let (content, seen) = Recorder::new();
        let mut skeleton =
            Skeleton::new(content, false).with_options(still(SkeletonOptions::default()));
        draw(&mut skeleton);
        assert_eq!(seen.get(), Some(true));
        assert!(skeleton.switch_value());
    }

    #[test]
    fn test_switch_value_reaches_content_and_handler() {
        let log: Log = Rc::default();
        let (content, seen) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default().switch(false)))
            .with_handlers(recording_handlers(&log, false));

        let rows = draw(&mut skeleton);
        assert_eq!(seen.get(), Some(false));
        assert!(screen(&rows).contains("[OFF]"));

        skeleton.toggle_switch();
        let rows = draw(&mut skeleton);
        assert_eq!(seen.get(), Some(true));
        assert!(screen(&rows).contains("[ ON]"));
        assert_eq!(*log.borrow(), vec!["switch true"]);
    }

    #[test]
    fn test_footer_renders_exactly_the_configured_buttons() {
        let cases = [
            (FooterType::Both, true, true),
            (FooterType::SingleConfirm, false, true),
            (FooterType::SingleCancel, true, false),
            (FooterType::Custom, false, false),
        ];
        for (footer_type, cancel, confirm) in cases {
            let (content, _) = Recorder::new();
            let mut skeleton = Skeleton::new(content, false)
                .with_options(still(SkeletonOptions::default().footer_type(footer_type)));
            let text = screen(&draw(&mut skeleton));
            assert_eq!(text.contains("Cancel"), cancel, "{footer_type:?}");
            assert_eq!(text.contains("Confirm"), confirm, "{footer_type:?}");
        }
    }

    #[test]
    fn test_custom_footer_replaces_buttons() {
        let (content, _) = Recorder::new();
        let footer = Element::new(1, |f, area, _theme| {
            f.render_widget(Paragraph::new("my footer"), area);
        });
        let mut skeleton = Skeleton::new(content, false).with_options(still(
            SkeletonOptions::default()
                .footer_type(FooterType::Both)
                .footer(footer),
        ));
        let text = screen(&draw(&mut skeleton));
        assert!(text.contains("my footer"));
        assert!(!text.contains("Cancel"));
        assert!(!text.contains("Confirm"));
    }

    #[test]
    fn test_custom_title_ignores_other_title_props() {
        let (content, _) = Recorder::new();
        let title = Element::new(1, |f, area, _theme| {
            f.render_widget(Paragraph::new("hand drawn"), area);
        });
        let mut skeleton = Skeleton::new(content, false).with_options(still(
            SkeletonOptions::default()
                .title(title)
                .subtitle("unseen subtitle")
                .show_back(true)
                .switch(true),
        ));
        let text = screen(&draw(&mut skeleton));
        assert!(text.contains("hand drawn"));
        assert!(!text.contains("unseen subtitle"));
        assert!(!text.contains("Back"));
        assert!(!text.contains("[ ON]"));
    }

    #[test]
    fn test_title_fragments_and_subtitle_render() {
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false).with_options(still(
            SkeletonOptions::default()
                .title(vec!["Timer", "08:00"])
                .subtitle("every day")
                .show_back(true),
        ));
        let text = screen(&draw(&mut skeleton));
        assert!(text.contains("Timer 08:00"));
        assert!(text.contains("every day"));
        assert!(text.contains("‹ Back"));
        assert!(text.contains("recorder body"));
    }

    #[test]
    fn test_accessibility_labels_follow_kind() {
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false).with_options(still(
            SkeletonOptions::default()
                .kind(PopupKind::DatePicker)
                .switch(true)
                .show_back(true),
        ));
        draw(&mut skeleton);

        let labels: Vec<(Control, String)> = skeleton
            .controls()
            .into_iter()
            .map(|c| (c.control, c.label))
            .collect();
        assert_eq!(
            labels,
            vec![
                (Control::Back, "Popup_DatePicker_Back".to_string()),
                (Control::Switch, "Popup_DatePicker_Switch".to_string()),
                (Control::Cancel, "Popup_DatePicker_Cancel".to_string()),
                (Control::Confirm, "Popup_DatePicker_Confirm".to_string()),
            ]
        );
        assert!(skeleton.controls().iter().all(|c| c.area.is_some()));
    }

    #[test]
    fn test_generic_kind_uses_plain_prefix() {
        let (content, _) = Recorder::new();
        let skeleton = Skeleton::new(content, false).with_options(still(SkeletonOptions::default()));
        let labels: Vec<String> = skeleton.controls().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Popup_Cancel", "Popup_Confirm"]);
    }

    #[test]
    fn test_click_on_confirm_button() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default()))
            .with_handlers(recording_handlers(&log, false));
        draw(&mut skeleton);

        let confirm = skeleton
            .controls()
            .into_iter()
            .find(|c| c.control == Control::Confirm)
            .and_then(|c| c.area)
            .unwrap();
        assert!(skeleton.handle_mouse(click(confirm.x + 1, confirm.y)));
        assert_eq!(*log.borrow(), vec!["confirm initial 1"]);
    }

    #[test]
    fn test_modal_host_lifecycle_and_mask_press() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, true)
            .with_options(still(SkeletonOptions::default().modal(ModalOptions {
                mask: true,
                align: ContainerAlign::Center,
            })))
            .with_handlers(recording_handlers(&log, false));

        assert_eq!(skeleton.phase(), SkeletonPhase::Idle);
        assert!(!screen(&draw(&mut skeleton)).contains("recorder body"));

        skeleton.open();
        assert!(screen(&draw(&mut skeleton)).contains("recorder body"));

        // the top-left corner lies outside the centered container
        assert!(skeleton.handle_mouse(click(0, 0)));
        assert_eq!(*log.borrow(), vec!["show", "mask", "hide", "dismiss"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::Closed);

        skeleton.open();
        assert!(skeleton.is_open());
        assert_eq!(log.borrow().last().map(String::as_str), Some("show"));
    }

    #[test]
    fn test_escape_cancels_non_modal_popup() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, false)
            .with_options(still(SkeletonOptions::default()))
            .with_handlers(recording_handlers(&log, false));

        assert!(skeleton.handle_key(key(KeyCode::Esc)));
        assert_eq!(log.borrow().first().map(String::as_str), Some("cancel"));
    }

    #[test]
    fn test_set_visible_false_closes_without_queued_action() {
        let log: Log = Rc::default();
        let (content, _) = Recorder::new();
        let mut skeleton = Skeleton::new(content, true)
            .with_options(animated(SkeletonOptions::default()))
            .with_handlers(recording_handlers(&log, false));

        skeleton.set_visible(true);
        skeleton.cancel();
        skeleton.set_visible(false);
        skeleton.tick(Duration::from_millis(200));

        assert_eq!(*log.borrow(), vec!["show", "hide", "dismiss"]);
        assert_eq!(skeleton.phase(), SkeletonPhase::Closed);
    }
}
