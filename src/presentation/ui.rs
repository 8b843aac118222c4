use crate::application::{App, AppMode, Dimensions, Focus};
use crate::presentation::resources::{image, text, APP_TITLE, NEXT_LABEL};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
    Frame,
};

const NEXT_WIDTH: u16 = 12;
const NEXT_HEIGHT: u16 = 3;

/// Screen areas that respond to mouse clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    pub primary: Rect,
    pub label: Rect,
    pub next: Rect,
}

impl ScreenRegions {
    /// Which control, if any, sits under the given cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<Focus> {
        let position = Position::new(column, row);
        if self.primary.contains(position) {
            Some(Focus::Primary)
        } else if self.next.contains(position) {
            Some(Focus::Next)
        } else {
            None
        }
    }
}

fn main_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Lays out the button, label and Next control centered in the body.
pub fn screen_regions(area: Rect, dims: &Dimensions) -> ScreenRegions {
    let body = main_chunks(area)[1];
    let pad = dims.padding_vertical;

    let button_width = dims.button_width().min(body.width);
    let button_height = dims.button_height().min(body.height);
    let total_height = button_height
        .saturating_add(pad)
        .saturating_add(1)
        .saturating_add(pad)
        .saturating_add(NEXT_HEIGHT);
    let top = body.y + body.height.saturating_sub(total_height) / 2;

    let primary = Rect::new(
        body.x + body.width.saturating_sub(button_width) / 2,
        top,
        button_width,
        button_height,
    );
    let label = Rect::new(body.x, primary.bottom().saturating_add(pad), body.width, 1);
    let next_width = NEXT_WIDTH.min(body.width);
    let next = Rect::new(
        body.x + body.width.saturating_sub(next_width) / 2,
        label.bottom().saturating_add(pad),
        next_width,
        NEXT_HEIGHT,
    );

    ScreenRegions {
        primary: primary.intersection(body),
        label: label.intersection(body),
        next: next.intersection(body),
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let [header, _, status] = main_chunks(f.area());
    let regions = screen_regions(f.area(), &app.dimensions);

    render_header(f, header);
    render_primary_button(f, app, regions.primary);
    render_label(f, app, regions.label);
    render_next_button(f, app, regions.next);
    render_status_bar(f, app, status);

    if app.mode == AppMode::Help {
        render_help_popup(f, app.help_scroll);
    }
}

fn button_block(dims: &Dimensions) -> Block<'static> {
    let border_type = if dims.rounded() {
        BorderType::Rounded
    } else {
        BorderType::Plain
    };
    Block::default().borders(Borders::ALL).border_type(border_type)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(APP_TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(Color::LightYellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(header, area);
}

fn render_primary_button(f: &mut Frame, app: &App, area: Rect) {
    if area.is_empty() {
        return;
    }
    let view = app.current_view();
    let border_style = if app.focus == Focus::Primary {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let lines: Vec<Line> = image(view.image_key).iter().map(|l| Line::from(*l)).collect();
    let button = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::LightYellow))
        .block(
            button_block(&app.dimensions)
                .title(text(view.description_key))
                .title_alignment(Alignment::Center)
                .border_style(border_style)
                .padding(Padding::uniform(app.dimensions.button_interior_padding)),
        );
    f.render_widget(button, area);
}

fn render_label(f: &mut Frame, app: &App, area: Rect) {
    if area.is_empty() {
        return;
    }
    let label = Paragraph::new(text(app.current_view().label_key)).alignment(Alignment::Center);
    f.render_widget(label, area);
}

fn render_next_button(f: &mut Frame, app: &App, area: Rect) {
    if area.is_empty() {
        return;
    }
    let enabled = app.state.next_enabled;
    let focused = app.focus == Focus::Next;
    let style = match (enabled, focused) {
        (true, true) => Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let next = Paragraph::new(NEXT_LABEL)
        .alignment(Alignment::Center)
        .style(style)
        .block(button_block(&app.dimensions).border_style(style));
    f.render_widget(next, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                format!(
                    "Step {}/4 | Glasses: {} | Space/Enter: tap | Tab: focus | p: image | n: next | ?: help | q: quit",
                    app.state.step.number(),
                    app.glasses_made
                )
            }
        }
        AppMode::Help => "↑↓/jk: scroll | Home: top | Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn help_popup_area(area: Rect) -> Rect {
    Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    }
}

/// Largest help scroll offset that still moves the view on a terminal
/// `rows` tall.
pub fn help_max_scroll(rows: u16) -> usize {
    let popup_height = help_popup_area(Rect::new(0, 0, 0, rows)).height;
    let visible_height = popup_height.saturating_sub(2) as usize;
    help_text().lines().count().saturating_sub(visible_height)
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let popup_area = help_popup_area(f.area());

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = help_text().lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("Lemonade Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

pub fn help_text() -> &'static str {
    r#"MAKING LEMONADE

=== THE STEPS ===
1. Pick     Tap the lemon tree to pick a lemon
2. Squeeze  Keep tapping the lemon until it is squeezed dry
            (every lemon needs between 2 and 4 squeezes)
3. Drink    Tap the glass to drink your lemonade
4. Restart  Tap the empty glass, then Next to start over

The Next button stays grey until the current step is done.

=== KEYS ===
Space/Enter     Tap the focused control
Tab / ↑↓        Move focus between the picture and Next
p               Tap the picture
n               Tap Next
Mouse click     Tap whatever is under the pointer
F1 or ?         Show this help
q               Quit

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
}
