//! UI rendering for the dashboard.

use crate::app::{App, AppMode, DISPLAY_COLUMNS};
use luminous_core::{ChartPoint, MetricSnapshot, Trend, share_percent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table},
};

/// Draw the whole dashboard.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Metric cards
            Constraint::Length(8), // Charts
            Constraint::Min(0),    // Campaign table
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_metrics(f, app, chunks[1]);
    draw_charts(f, app, chunks[2]);
    draw_table(f, app, chunks[3]);
    draw_status_bar(f, app, chunks[4]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let filter = app
        .status_filter
        .map(|s| s.to_string())
        .unwrap_or_else(|| "All".to_string());
    let title = format!("Luminous Stats - Campaigns ({filter})");
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_metrics(f: &mut Frame, app: &App, area: Rect) {
    if app.metrics.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, app.metrics.len() as u32); app.metrics.len()];
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (metric, card) in app.metrics.iter().zip(cards.iter()) {
        f.render_widget(metric_card(metric), *card);
    }
}

fn metric_card(metric: &MetricSnapshot) -> Paragraph<'static> {
    let (arrow, color) = match metric.trend() {
        Trend::Up => ("▲", Color::Green),
        Trend::Down => ("▼", Color::Red),
        Trend::Neutral => ("•", Color::Gray),
    };
    let lines = vec![
        Line::from(Span::styled(
            metric.value().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{arrow} {:+.2}%", metric.change()),
            Style::default().fg(color),
        )),
    ];
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(metric.label().clone()),
        )
        .alignment(Alignment::Center)
}

fn draw_charts(f: &mut Frame, app: &App, area: Rect) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    f.render_widget(revenue_chart(&app.revenue), panels[0]);
    f.render_widget(traffic_panel(&app.traffic), panels[1]);
}

/// Monthly revenue bars, valued in thousands of rupees.
fn revenue_chart(series: &[ChartPoint]) -> BarChart<'static> {
    let bars: Vec<Bar> = series
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value() / 1_000)
                .label(Line::from(point.label().clone()))
                .text_value(format!("{}K", point.value() / 1_000))
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Monthly Revenue Trend"),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
}

fn traffic_panel(sources: &[ChartPoint]) -> Paragraph<'static> {
    const BAR_CELLS: u64 = 20;
    let lines: Vec<Line> = sources
        .iter()
        .map(|source| {
            let share = share_percent(source, sources);
            let filled = (share * BAR_CELLS / 100) as usize;
            Line::from(vec![
                Span::raw(format!("{:<12}", source.label())),
                Span::styled("█".repeat(filled), Style::default().fg(Color::Magenta)),
                Span::raw(format!(" {share}%")),
            ])
        })
        .collect();

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Traffic Sources"),
    )
}

fn draw_table(f: &mut Frame, app: &App, area: Rect) {
    let page = app.view.snapshot();

    let header = Row::new(DISPLAY_COLUMNS.iter().enumerate().map(|(i, field)| {
        let arrow = if page.sort_key() == Some(*field) {
            page.sort_direction().arrow()
        } else {
            ""
        };
        format!("{} {}{}", i + 1, field.title(), arrow)
    }))
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = page
        .page_data()
        .iter()
        .map(|campaign| {
            Row::new(
                DISPLAY_COLUMNS
                    .iter()
                    .map(|field| campaign.display_cell(*field)),
            )
        })
        .collect();

    let widths = [
        Constraint::Min(24),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(13),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(13),
        Constraint::Length(10),
    ];

    let block = Block::default().borders(Borders::ALL).title("Campaigns");
    if rows.is_empty() {
        let empty = Paragraph::new("No campaigns match the current filter")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
    } else {
        let table = Table::new(rows, widths).header(header).block(block);
        f.render_widget(table, area);
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let page = app.view.snapshot();
    let help_text = match app.mode {
        AppMode::Browse => "←→: Page | 1-9: Sort | S: Status | /: Search | E: Export | Q: Quit",
        AppMode::Search => "Enter/Esc: Done | Backspace: Delete",
    };
    let search = if app.search.is_empty() {
        String::new()
    } else {
        format!(" | Search: {}", app.search)
    };

    let status_text = format!(
        "Page {}/{} ({} campaigns){} | {} | {}",
        page.page(),
        page.total_pages(),
        page.total(),
        search,
        app.status_message,
        help_text
    );
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
