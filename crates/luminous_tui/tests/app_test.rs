use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use luminous_core::{CampaignField, CampaignStatus, MetricSnapshot, SortDirection, mock};
use luminous_live::MetricSet;
use luminous_table::{TableOptions, TableView};
use luminous_tui::{App, AppMode, ExportTarget, draw};
use ratatui::{Terminal, backend::TestBackend};
use std::path::PathBuf;
use tokio::sync::watch;

fn app_with(directory: PathBuf) -> (App, watch::Sender<MetricSet>) {
    let view = TableView::new(mock::campaigns(), TableOptions::new().with_page_size(5)).unwrap();
    let (tx, rx) = watch::channel::<MetricSet>(mock::metrics().into());
    let export = ExportTarget {
        directory,
        prefix: "campaigns_report".to_string(),
    };
    (App::new(view, rx, export), tx)
}

fn app() -> (App, watch::Sender<MetricSet>) {
    app_with(std::env::temp_dir())
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_arrow_keys_page_within_bounds() {
    let (mut app, _tx) = app();
    assert_eq!(app.view.total_pages(), 3);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.view.page(), 1);
    for _ in 0..5 {
        press(&mut app, KeyCode::Right);
    }
    assert_eq!(app.view.page(), 3);
}

#[test]
fn test_number_keys_sort_and_flip() {
    let (mut app, _tx) = app();

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.view.sort_key(), Some(CampaignField::Budget));
    assert_eq!(app.view.sort_direction(), SortDirection::Asc);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.view.sort_direction(), SortDirection::Desc);
    assert!(app.status_message.contains("Budget"));
}

#[test]
fn test_status_key_filters_campaigns() {
    let (mut app, _tx) = app();

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.status_filter, Some(CampaignStatus::Active));
    assert_eq!(app.view.total(), 5);

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.status_filter, Some(CampaignStatus::Paused));
    assert_eq!(app.view.total(), 3);
}

#[test]
fn test_search_mode_filters_as_you_type() {
    let (mut app, _tx) = app();

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.mode, AppMode::Search);
    for c in "summer".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.view.total(), 1);

    // 'q' is text while searching
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::Browse);
    assert_eq!(app.search, "summer");
    assert_eq!(app.view.total(), 1);
}

#[test]
fn test_quit_key() {
    let (mut app, _tx) = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_refresh_picks_up_published_metrics() {
    let (mut app, tx) = app();
    assert!(!app.refresh_metrics());

    let updated: Vec<MetricSnapshot> = mock::metrics()
        .iter()
        .map(|m| m.with_update(m.value().clone(), 0.0, luminous_core::Trend::Neutral))
        .collect();
    tx.send_replace(updated.into());

    assert!(app.refresh_metrics());
    assert!(app.metrics.iter().all(|m| *m.change() == 0.0));
    assert!(!app.refresh_metrics());
}

#[test]
fn test_export_writes_current_page() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, _tx) = app_with(dir.path().to_path_buf());
    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(8, 15, 0))
        .unwrap();

    app.export_page(now);

    let path = dir.path().join("campaigns_report_2024-06-01_0815.csv");
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 6);
    assert!(app.status_message.starts_with("Exported"));
}

#[test]
fn test_draw_shows_cards_table_and_page() {
    let (mut app, _tx) = app();
    press(&mut app, KeyCode::Char('1'));

    let text = screen(&app);

    assert!(text.contains("Total Revenue"));
    assert!(text.contains("₹1.20L"));
    assert!(text.contains("Campaign▲"));
    assert!(text.contains("Page 1/3 (12 campaigns)"));
}

#[test]
fn test_draw_empty_result() {
    let (mut app, _tx) = app();
    press(&mut app, KeyCode::Char('/'));
    for c in "zzz".chars() {
        press(&mut app, KeyCode::Char(c));
    }

    let text = screen(&app);

    assert!(text.contains("No campaigns match"));
    assert!(text.contains("Page 1/1 (0 campaigns)"));
}

#[test]
fn test_draw_shows_revenue_and_traffic_charts() {
    let (app, _tx) = app();

    let text = screen(&app);

    assert!(text.contains("Monthly Revenue Trend"));
    assert!(text.contains("Jan"));
    assert!(text.contains("Dec"));
    assert!(text.contains("1500K"));
    assert!(text.contains("Traffic Sources"));
    assert!(text.contains("Google Ads"));
    assert!(text.contains("45%"));
    assert!(text.contains("Page 1/3 (12 campaigns)"));
}
