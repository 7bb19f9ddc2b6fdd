//! `luminous campaigns`: one page of the campaign table.

use crate::DashboardConfig;
use anyhow::Context;
use chrono::NaiveDateTime;
use clap::Args;
use luminous_core::{Campaign, CampaignField, CampaignStatus, SortDirection, mock};
use luminous_table::{FilterExpr, TablePage, TableView, campaign_filter};
use serde::Serialize;
use tracing::{debug, instrument};

const COLUMNS: [CampaignField; 10] = [
    CampaignField::Id,
    CampaignField::Name,
    CampaignField::Status,
    CampaignField::Budget,
    CampaignField::Spent,
    CampaignField::Impressions,
    CampaignField::Clicks,
    CampaignField::Ctr,
    CampaignField::Conversions,
    CampaignField::Cpa,
];

/// Arguments for `luminous campaigns`.
#[derive(Args, Debug, Clone, Default)]
pub struct CampaignsArgs {
    /// Only show campaigns with this status
    #[arg(long)]
    pub status: Option<CampaignStatus>,

    /// Case-insensitive search on campaign name
    #[arg(long)]
    pub search: Option<String>,

    /// Filter expression, e.g. `status=active&name~launch`
    #[arg(long)]
    pub filter: Option<String>,

    /// Column to sort by (overrides the configured sort)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides the configured page size)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Write the page to a CSV file
    #[arg(long)]
    pub export: bool,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageJson<'a> {
    page: usize,
    page_size: usize,
    total: usize,
    total_pages: usize,
    rows: &'a [&'a Campaign],
}

/// Build the requested page and render it, exporting it if asked.
#[instrument(skip(config))]
pub fn run_campaigns(
    args: &CampaignsArgs,
    config: &DashboardConfig,
    now: NaiveDateTime,
) -> anyhow::Result<String> {
    let mut table = config.table().clone();
    if let Some(page_size) = args.page_size {
        table = table.with_page_size(page_size);
    }
    if let Some(sort) = &args.sort {
        table = table.with_sort_key(Some(sort.clone()));
    }
    if args.desc {
        table = table.with_sort_direction(SortDirection::Desc);
    }
    let config = config.clone().with_table(table);
    config.validate()?;

    let mut options = config
        .table_options()?
        .with_filter(campaign_filter(
            args.search.as_deref().unwrap_or_default(),
            args.status,
        ));
    if let Some(expr) = &args.filter {
        // Unparseable expressions are an error here, not accept-all.
        FilterExpr::<CampaignField>::parse(expr)?;
        options = options.with_filter_expr(expr.clone());
    }

    let mut view = TableView::new(mock::campaigns(), options)?;
    view.set_page(args.page);
    let page = view.snapshot();
    debug!(total = page.total(), rows = page.page_data().len(), "Campaign page built");

    let mut output = if args.json {
        let json = PageJson {
            page: page.page(),
            page_size: page.page_size(),
            total: page.total(),
            total_pages: page.total_pages(),
            rows: page.page_data(),
        };
        serde_json::to_string_pretty(&json)?
    } else {
        render_page(&page)
    };

    if args.export {
        let path = luminous_export::export_page_to_file(
            &page,
            config.export().directory(),
            config.export().file_prefix(),
            now,
        )
        .context("exporting campaign page")?;
        output.push_str(&format!("\nexported to {}", path.display()));
    }
    Ok(output)
}

/// Render a page as an aligned text table followed by a page footer.
pub fn render_page(page: &TablePage<'_, Campaign>) -> String {
    let header: Vec<String> = COLUMNS
        .iter()
        .map(|field| {
            let arrow = if page.sort_key() == Some(*field) {
                page.sort_direction().arrow()
            } else {
                ""
            };
            format!("{}{}", field.title(), arrow)
        })
        .collect();
    let rows: Vec<Vec<String>> = page
        .page_data()
        .iter()
        .map(|campaign| COLUMNS.iter().map(|f| campaign.display_cell(*f)).collect())
        .collect();

    let widths: Vec<usize> = (0..COLUMNS.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in std::iter::once(&header).chain(rows.iter()) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    if rows.is_empty() {
        out.push_str("(no campaigns)\n");
    }
    out.push_str(&format!(
        "page {}/{} (total {})",
        page.page(),
        page.total_pages(),
        page.total()
    ));
    out
}
