//! Main render/view function (View in TEA pattern)

use nightswitch_app::state::AppState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::theme::{self, styles};
use crate::widgets::{KeyHints, ToggleSwitch};

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 8;

/// Render the complete UI (View function in TEA)
///
/// Colours come from the theme currently applied by the controller, so a
/// toggle repaints the whole screen in the new palette on the next frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = theme::for_mode(state.theme());

    frame.render_widget(Block::default().style(styles::background(palette)), area);

    let [body, footer] = Layout::vertical([Constraint::Min(CARD_HEIGHT), Constraint::Length(1)])
        .areas(area);

    let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, body);
    let block = styles::glass_block(palette, true).title(" nightswitch ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [_, switch_row, _, theme_row, status_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner.inner(ratatui::layout::Margin::new(2, 0)));

    frame.render_widget(
        ToggleSwitch::new(state.controller.switch(), palette),
        switch_row,
    );

    let theme_line = Line::from(vec![
        Span::styled("Theme: ", styles::text_muted(palette)),
        Span::styled(state.theme().label(), styles::text_primary(palette)),
    ]);
    frame.render_widget(Paragraph::new(theme_line), theme_row);

    if state.unsaved() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Not saved: applies to this session only",
                styles::warning(palette),
            )),
            status_row,
        );
    }

    if state.settings.ui.show_hints {
        frame.render_widget(KeyHints::new(palette), footer);
    }
}

/// Rect of at most `width` x `height`, centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};
    use nightswitch_app::config::Settings;
    use nightswitch_app::message::Message;
    use nightswitch_app::{
        update, InMemoryStore, PreferenceKey, PreferenceStore, SharedThemeService, SwitchState,
        ThemeToggleController,
    };
    use ratatui::{backend::TestBackend, Terminal};

    fn state_with(store: InMemoryStore, settings: Settings) -> AppState {
        let store: Box<dyn PreferenceStore> = Box::new(store);
        let controller = ThemeToggleController::new(
            store,
            SharedThemeService::default(),
            SwitchState::default(),
            PreferenceKey::default(),
        );
        AppState::new(settings, controller)
    }

    fn render(state: &AppState) -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        terminal
    }

    fn content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_fresh_state_renders_light_and_off() {
        let state = state_with(InMemoryStore::new(), Settings::default());
        let terminal = render(&state);
        let text = content(&terminal);

        assert!(text.contains("nightswitch"));
        assert!(text.contains("Night mode"));
        assert!(text.contains("OFF"));
        assert!(text.contains("Theme: Light"));

        let corner = terminal.backend().buffer().cell((0, 0)).unwrap();
        assert_eq!(corner.bg, LIGHT.background);
    }

    #[test]
    fn test_stored_night_mode_renders_dark_and_on() {
        let store = InMemoryStore::new().with_value("MODE", "nightMode", true);
        let state = state_with(store, Settings::default());
        let terminal = render(&state);
        let text = content(&terminal);

        assert!(text.contains("Theme: Dark"));
        assert!(!text.contains("OFF"));

        let corner = terminal.backend().buffer().cell((0, 0)).unwrap();
        assert_eq!(corner.bg, DARK.background);
    }

    #[test]
    fn test_toggle_repaints_in_dark_palette() {
        let mut state = state_with(InMemoryStore::new(), Settings::default());
        update(&mut state, Message::ToggleActivated);

        let terminal = render(&state);
        assert!(content(&terminal).contains("Theme: Dark"));
        let corner = terminal.backend().buffer().cell((0, 0)).unwrap();
        assert_eq!(corner.bg, DARK.background);
    }

    #[test]
    fn test_hints_follow_settings() {
        let state = state_with(InMemoryStore::new(), Settings::default());
        assert!(content(&render(&state)).contains("toggle"));

        let mut settings = Settings::default();
        settings.ui.show_hints = false;
        let state = state_with(InMemoryStore::new(), settings);
        assert!(!content(&render(&state)).contains("toggle"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = state_with(InMemoryStore::new(), Settings::default());
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, &state)).unwrap();
    }

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(20, 4, Rect::new(0, 0, 60, 10));
        assert_eq!(rect, Rect::new(20, 3, 20, 4));

        let clamped = centered_rect(100, 100, Rect::new(0, 0, 60, 10));
        assert_eq!(clamped, Rect::new(0, 0, 60, 10));
    }
}
