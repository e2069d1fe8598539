//! Drawing of the Selection and Results screens.

use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::Route;
use crate::domain::models::VehicleModel;
use crate::domain::services::AppState;
use crate::domain::services::MakesStatus;
use crate::domain::services::ResultState;
use crate::domain::services::ResultsPage;
use crate::domain::services::SelectionFocus;
use crate::domain::services::SelectionPage;

pub const CARD_HEIGHT: u16 = 3;
const SELECTION_WIDTH: u16 = 64;

pub fn render(frame: &mut Frame, app_state: &AppState) {
    let area = frame.area();
    match (app_state.current_route(), app_state.results.as_ref()) {
        (Route::Results(_), Some(page)) => render_results(frame, area, page),
        _ => render_selection(frame, area, &app_state.selection),
    }
}

/// Cards per grid row for a given width.
pub fn grid_columns(width: u16) -> u16 {
    if width >= 96 {
        return 3;
    }
    if width >= 64 {
        return 2;
    }
    return 1;
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    return Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        return Style::default().fg(Color::Yellow);
    }
    return Style::default().fg(Color::Gray);
}

fn render_selection(frame: &mut Frame, area: Rect, page: &SelectionPage) {
    let card = centered(area, SELECTION_WIDTH);
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Filter Vehicles ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = outer.inner(card);
    frame.render_widget(outer, card);

    let [make_area, year_area, status_area, next_area, help_area] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let selected_make = page
        .selected_make()
        .map(|make| make.name.to_string())
        .unwrap_or_else(|| "Choose a make".to_string());
    let make_items = page
        .makes
        .iter()
        .map(|make| {
            let marker = if page.selected_make_id.as_deref() == Some(make.id.as_str()) {
                "● "
            } else {
                "  "
            };
            ListItem::new(format!("{marker}{}", make.name))
        })
        .collect::<Vec<ListItem>>();
    render_list(
        frame,
        make_area,
        make_items,
        format!(" Select Vehicle Make: {selected_make} "),
        page.make_cursor,
        page.focus == SelectionFocus::Make,
    );

    let selected_year = page
        .selected_year
        .as_deref()
        .unwrap_or("Choose a year")
        .to_string();
    let year_items = page
        .years
        .iter()
        .map(|year| {
            let marker = if page.selected_year.as_deref() == Some(year.to_string().as_str()) {
                "● "
            } else {
                "  "
            };
            ListItem::new(format!("{marker}{year}"))
        })
        .collect::<Vec<ListItem>>();
    render_list(
        frame,
        year_area,
        year_items,
        format!(" Select Model Year: {selected_year} "),
        page.year_cursor,
        page.focus == SelectionFocus::Year,
    );

    let status = match &page.makes_status {
        MakesStatus::Loading => {
            Span::styled("Loading vehicle makes...", Style::default().fg(Color::Blue))
        }
        MakesStatus::Loaded => Span::raw(""),
        MakesStatus::Failed(message) => {
            Span::styled(message.to_string(), Style::default().fg(Color::Red))
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Center),
        status_area,
    );

    let next_style = if page.navigation_enabled() {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("  Next  ", next_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focus_style(page.focus == SelectionFocus::Next)),
            ),
        next_area,
    );

    frame.render_widget(
        Paragraph::new(format!(
            "Tab focus · ↑/↓ move · Enter select · q quit · {}",
            page.href()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center),
        help_area,
    );
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    title: String,
    cursor: usize,
    focused: bool,
) {
    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(focused))
                .title(title),
        )
        .highlight_style(highlight);

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_results(frame: &mut Frame, area: Rect, page: &ResultsPage) {
    let [title_area, status_area, grid_area, back_area, help_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            page.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        title_area,
    );

    match page.state() {
        ResultState::AwaitingParams => {}
        ResultState::Loading => frame.render_widget(
            Paragraph::new(Span::styled("Loading...", Style::default().fg(Color::Blue)))
                .alignment(Alignment::Center),
            status_area,
        ),
        ResultState::Failed(err) => frame.render_widget(
            Paragraph::new(Span::styled(err.message(), Style::default().fg(Color::Red)))
                .alignment(Alignment::Center),
            status_area,
        ),
        ResultState::Loaded(models) => render_grid(frame, grid_area, models, page.scroll),
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Back ",
            Style::default().fg(Color::White).bg(Color::Blue),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL)),
        centered(back_area, 12),
    );

    frame.render_widget(
        Paragraph::new("Esc back · ←/→ change year · ↑/↓ scroll · q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        help_area,
    );
}

fn render_grid(frame: &mut Frame, area: Rect, models: &[VehicleModel], scroll: usize) {
    let cols = grid_columns(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1);
    let card_width = area.width / cols;
    let start_row = scroll / cols as usize;

    let visible = models
        .iter()
        .enumerate()
        .skip(start_row * cols as usize)
        .take(visible_rows as usize * cols as usize);

    for (index, model) in visible {
        let row = (index / cols as usize - start_row) as u16;
        let col = (index % cols as usize) as u16;
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }

        let card = Rect::new(area.x + col * card_width, y, card_width, CARD_HEIGHT);
        frame.render_widget(
            Paragraph::new(Span::styled(
                model.name.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            ),
            card,
        );
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    use super::*;
    use crate::domain::models::Action;
    use crate::domain::models::Event;
    use crate::domain::models::Make;
    use crate::domain::models::VpicError;
    use crate::domain::services::AppStateProps;

    fn app_state(initial_route: Route) -> Result<AppState> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        return AppState::new(
            AppStateProps {
                vehicle_type: "car".to_string(),
                initial_route,
                current_year: 2020,
            },
            &tx,
        );
    }

    fn apply(app_state: &mut AppState, event: Event) -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        return app_state.handle_event(event, &tx);
    }

    fn draw(app_state: &AppState, width: u16, height: u16) -> Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        terminal.draw(|frame| render(frame, app_state))?;

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n");
        return Ok(text);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(64), 2);
        assert_eq!(grid_columns(120), 3);
    }

    #[test]
    fn test_selection_screen_lists_makes_and_years() -> Result<()> {
        let mut state = app_state(Route::Selection)?;
        apply(
            &mut state,
            Event::MakesLoaded(Ok(vec![Make::new("474", "HONDA"), Make::new("441", "TESLA")])),
        )?;

        let text = draw(&state, 80, 30)?;
        assert!(text.contains("Filter Vehicles"));
        assert!(text.contains("Choose a make"));
        assert!(text.contains("HONDA"));
        assert!(text.contains("TESLA"));
        assert!(text.contains("2015"));
        assert!(text.contains("Next"));
        assert!(text.contains(" #"));
        return Ok(());
    }

    #[test]
    fn test_selection_screen_shows_make_failure() -> Result<()> {
        let mut state = app_state(Route::Selection)?;
        apply(
            &mut state,
            Event::MakesLoaded(Err(VpicError::Status {
                url: "http://localhost".to_string(),
                status: 500,
            })),
        )?;

        let text = draw(&state, 80, 30)?;
        assert!(text.contains("Failed to fetch vehicle makes."));
        return Ok(());
    }

    #[test]
    fn test_results_screen_loading() -> Result<()> {
        let state = app_state(Route::results("100", "2020"))?;

        let text = draw(&state, 80, 20)?;
        assert!(text.contains("Vehicle Models for 100 (2020)"));
        assert!(text.contains("Loading..."));
        assert!(text.contains("Back"));
        return Ok(());
    }

    #[test]
    fn test_results_screen_renders_one_card_per_model() -> Result<()> {
        let mut state = app_state(Route::results("100", "2020"))?;
        apply(
            &mut state,
            Event::ModelsLoaded {
                generation: 1,
                outcome: Ok(vec![
                    VehicleModel::new("1", "Civic"),
                    VehicleModel::new("2", "Accord"),
                ]),
            },
        )?;

        let text = draw(&state, 100, 20)?;
        assert!(text.contains("Civic"));
        assert!(text.contains("Accord"));
        assert!(!text.contains("Loading..."));
        return Ok(());
    }

    #[test]
    fn test_results_screen_error_message() -> Result<()> {
        let mut state = app_state(Route::results("100", "2020"))?;
        apply(
            &mut state,
            Event::ModelsLoaded {
                generation: 1,
                outcome: Ok(vec![]),
            },
        )?;

        let text = draw(&state, 80, 20)?;
        assert!(text.contains("No models found for the selected make and year."));
        assert!(!text.contains("Loading..."));
        return Ok(());
    }

    #[test]
    fn test_results_screen_awaiting_params_is_quiet() -> Result<()> {
        let state = app_state(Route::parse("/result/100")?)?;

        let text = draw(&state, 80, 20)?;
        assert!(text.contains("Vehicle Models for 100 ()"));
        assert!(!text.contains("Loading..."));
        return Ok(());
    }
}
