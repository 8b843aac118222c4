use crate::application::{App, AppMode, Focus};
use crate::presentation::ui::{help_max_scroll, ScreenRegions};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    /// Left clicks on the picture or the Next button tap them.
    pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, regions: &ScreenRegions) {
        if app.mode != AppMode::Normal {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(target) = regions.hit(mouse.column, mouse.row) {
                app.focus = target;
                app.activate_focused();
            }
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key {
            KeyCode::Char(' ') | KeyCode::Enter => app.activate_focused(),
            KeyCode::Char('p') => app.primary_tap(),
            KeyCode::Char('n') => app.next_tap(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.toggle_focus(),
            KeyCode::Char('?') | KeyCode::F(1) => app.show_help(),
            KeyCode::Esc => app.status_message = None,
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_help_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                app.scroll_help_down(help_max_scroll(app.viewport_rows));
            }
            KeyCode::Home => app.help_scroll = 0,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Dimensions;
    use crate::domain::{RandomSource, Step};
    use crate::presentation::ui::{help_text, screen_regions};
    use ratatui::layout::Rect;
    use std::ops::RangeInclusive;

    #[derive(Debug)]
    struct FixedSource(u32);

    impl RandomSource for FixedSource {
        fn draw(&mut self, _range: RangeInclusive<u32>) -> u32 {
            self.0
        }
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn test_app() -> App {
        App::new(Box::new(FixedSource(2)), Dimensions::default())
    }

    #[test]
    fn test_space_taps_focused_picture() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char(' '));

        assert!(app.state.next_enabled);
        assert_eq!(app.state.squeezes_remaining, 2);
    }

    #[test]
    fn test_n_is_ignored_until_enabled() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state.step, Step::PickLemon);

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state.step, Step::Squeeze);
        assert!(!app.state.next_enabled);
    }

    #[test]
    fn test_tab_then_enter_taps_next() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Next);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.step, Step::Squeeze);
        assert_eq!(app.focus, Focus::Primary);
    }

    #[test]
    fn test_control_modified_keys_are_ignored() {
        let mut app = test_app();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert!(!app.state.next_enabled);
    }

    #[test]
    fn test_help_toggle_and_scroll() {
        let mut app = test_app();
        app.viewport_rows = 10;
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);

        // Taps are swallowed while help is open
        press(&mut app, KeyCode::Char('p'));
        assert!(!app.state.next_enabled);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.help_scroll, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.help_scroll, 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.help_scroll, 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_help_scroll_stops_at_last_page() {
        let mut app = test_app();
        app.viewport_rows = 10;
        press(&mut app, KeyCode::Char('?'));

        let limit = help_max_scroll(10);
        assert!(limit > 0);
        for _ in 0..help_text().lines().count() + 5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.help_scroll, limit);

        // A single step up moves the view right away
        press(&mut app, KeyCode::Up);
        assert_eq!(app.help_scroll, limit - 1);
    }

    #[test]
    fn test_help_that_fits_does_not_scroll() {
        let mut app = test_app();
        app.viewport_rows = 40;
        press(&mut app, KeyCode::Char('?'));

        for _ in 0..30 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.help_scroll, 0);
    }

    #[test]
    fn test_mouse_clicks_hit_controls() {
        let mut app = test_app();
        let regions = screen_regions(Rect::new(0, 0, 80, 40), &app.dimensions);

        let next = regions.next;
        InputHandler::handle_mouse_event(&mut app, click(next.x + 1, next.y + 1), &regions);
        assert_eq!(app.state.step, Step::PickLemon);

        let primary = regions.primary;
        InputHandler::handle_mouse_event(&mut app, click(primary.x + 2, primary.y + 2), &regions);
        assert!(app.state.next_enabled);

        InputHandler::handle_mouse_event(&mut app, click(next.x + 1, next.y + 1), &regions);
        assert_eq!(app.state.step, Step::Squeeze);
    }

    #[test]
    fn test_mouse_ignores_other_buttons_and_empty_space() {
        let mut app = test_app();
        let regions = screen_regions(Rect::new(0, 0, 80, 40), &app.dimensions);
        let primary = regions.primary;

        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click(primary.x + 2, primary.y + 2)
        };
        InputHandler::handle_mouse_event(&mut app, right_click, &regions);
        InputHandler::handle_mouse_event(&mut app, click(0, 0), &regions);

        assert!(!app.state.next_enabled);
    }
}
