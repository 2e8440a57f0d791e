use chrono::{Datelike, NaiveDate};
use daygraph_core::format_key;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::tui::app::{month_grid, App};

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    // Header and Main Content Split
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let header = Paragraph::new("DAYGRAPH | Activity Calendar")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    // Split Content into Left (Calendar) and Right (Highlights)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70),
            Constraint::Percentage(30),
        ])
        .split(main_chunks[1]);

    draw_calendar(f, app, content_chunks[0]);
    draw_highlight_list(f, app, content_chunks[1]);

    // Footer
    let footer = Paragraph::new("h/j/k/l: Move | n/p: Month | t: Today | Enter: Open | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);

    if app.view.modal.is_open {
        draw_modal(f, app, size);
    }
}

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = month_grid(app.cursor.year(), app.cursor.month())
        .iter()
        .map(|week| {
            let cells: Vec<Cell> = week
                .iter()
                .map(|slot| match slot {
                    Some(day) => Cell::from(Span::styled(
                        format!("{:>3}", day.day()),
                        day_style(app, *day),
                    )),
                    None => Cell::from(""),
                })
                .collect();
            Row::new(cells).height(2)
        })
        .collect();

    let title = format!(" {} ", app.cursor.format("%B %Y"));
    let table = Table::new(rows, [Constraint::Length(5); 7])
        .header(
            Row::new(vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"])
                .style(Style::default().fg(Color::Yellow)),
        )
        .column_spacing(1)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(table, area);
}

fn day_style(app: &App, day: NaiveDate) -> Style {
    let mut style = if app.has_data_on(day) {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    if day == app.today {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if day == app.cursor {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }
    style
}

fn draw_highlight_list(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .highlights
        .iter()
        .map(|event| {
            Row::new(vec![
                Span::styled(event.key.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(event.title.clone(), Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(10)])
        .header(Row::new(vec!["Date", ""]).style(Style::default().fg(Color::Yellow)))
        .block(
            Block::default()
                .title(" Dates with data ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(table, area);
}

fn draw_modal(f: &mut Frame, app: &App, size: Rect) {
    let area = centered_rect(60, 70, size);
    let date_line = app
        .view
        .selection
        .selected
        .map(format_key)
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" Date: {date_line} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Min(5),    // Chart / empty state
            Constraint::Length(1), // Close hint
        ])
        .split(inner);

    if app.view.modal.has_data {
        let subtitle = Paragraph::new("User Activity Data")
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(subtitle, chunks[0]);

        let series = app.view.modal.chart_data.as_deref().unwrap_or_default();
        let bars: Vec<Bar> = series
            .iter()
            .map(|point| {
                Bar::default()
                    .label(point.label.as_str())
                    .value(point.value)
                    .style(Style::default().fg(Color::Green))
                    .text_value(point.value.to_string())
            })
            .collect();

        let chart = BarChart::default()
            .bar_width(8)
            .bar_gap(2)
            .data(BarGroup::default().bars(&bars));
        f.render_widget(chart, chunks[1]);
    } else {
        let empty = vec![
            Line::from(""),
            Line::from("No data found for the selected date."),
            Line::from(Span::styled(date_line, Style::default().fg(Color::DarkGray))),
        ];
        let message = Paragraph::new(empty)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(message, chunks[1]);
    }

    let hint = Paragraph::new("Esc/Enter: Close")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[2]);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
