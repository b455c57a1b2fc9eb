#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use panel_kit::{Element, Theme, TopBar, TopBarAction, TopBarContent};
    use ratatui::{
        backend::TestBackend,
        style::{Color, Style},
        text::Span,
        widgets::Paragraph,
        Terminal,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    type Presses = Rc<RefCell<Vec<&'static str>>>;

    fn custom_bar(presses: &Presses) -> TopBar {
        let back = Rc::clone(presses);
        let edit = Rc::clone(presses);
        TopBar::new()
            .background(Color::Black)
            .action(
                TopBarAction::named("back")
                    .key('b')
                    .on_press(move || back.borrow_mut().push("back")),
            )
            .content(TopBarContent::Custom(Element::new(1, |f, area, _theme| {
                f.render_widget(
                    Paragraph::new(Span::styled("Hahaha", Style::default().fg(Color::Red)))
                        .centered(),
                    area,
                );
            })))
            .action(
                TopBarAction::named("edit")
                    .key('e')
                    .on_press(move || edit.borrow_mut().push("edit")),
            )
    }

    fn draw(bar: &mut TopBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 2)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let area = f.area();
                bar.render(f, area, &theme);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_custom_content_between_actions() {
        let presses: Presses = Rc::default();
        let mut bar = custom_bar(&presses);
        let screen = draw(&mut bar);

        let back = screen.find('‹').unwrap();
        let content = screen.find("Hahaha").unwrap();
        let edit = screen.find('✎').unwrap();
        assert!(back < content);
        assert!(content < edit);
        assert_eq!(bar.left_actions().len(), 1);
        assert_eq!(bar.right_actions().len(), 1);
    }

    #[test]
    fn test_click_presses_action_under_cursor() {
        let presses: Presses = Rc::default();
        let mut bar = custom_bar(&presses);
        draw(&mut bar);

        let edit = bar.right_actions()[0].area().unwrap();
        let clicked = bar.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: edit.x,
            row: edit.y,
            modifiers: KeyModifiers::NONE,
        });
        assert!(clicked);

        // a click on the content slot is not an action
        let missed = bar.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 20,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!missed);
        assert_eq!(*presses.borrow(), vec!["edit"]);
    }

    #[test]
    fn test_shortcut_keys_press_actions() {
        let presses: Presses = Rc::default();
        let mut bar = custom_bar(&presses);

        assert!(bar.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE)));
        assert!(bar.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE)));
        assert!(!bar.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert_eq!(*presses.borrow(), vec!["back", "edit"]);
    }

    #[test]
    fn test_title_with_subtitle_spans_two_rows() {
        let mut bar = TopBar::new().title("Living room", Some("3 devices".to_string()));
        let screen = draw(&mut bar);
        assert_eq!(bar.height(), 2);
        assert!(screen.contains("Living room"));
        assert!(screen.contains("3 devices"));
    }
}
