//! CLI subcommand implementations.

pub mod bill_client_networks;
pub mod bills;
pub mod check;
pub mod clients;
pub mod issues;
pub mod legislators;
pub mod networks;
pub mod reports;

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lobbyview_api::{types::Row, Client, Query};

use crate::output::{print_rows, OutputFormat};
use crate::validation;

/// Paging flags shared by every resource subcommand.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Fetch every page instead of a single one
    #[arg(long, conflicts_with = "page")]
    pub all: bool,
}

/// Runs `query` for one page, or every page with `--all`, and prints the rows.
pub fn execute<Q>(client: &Client, query: Q, paging: &PageArgs, format: OutputFormat) -> Result<()>
where
    Q: Query + Clone,
{
    if paging.all {
        let rows = fetch_all(client, &query)?;
        eprintln!("{} rows", rows.len());
        return print_rows(Q::KIND, &rows, format);
    }

    let page = validation::validate_page(paging.page)?;
    let resp = client.fetch(&query.with_page(page))?;
    eprintln!("{}", resp.page_info());
    print_rows(Q::KIND, resp.rows(), format)
}

fn fetch_all<Q>(client: &Client, query: &Q) -> Result<Vec<Row>>
where
    Q: Query + Clone,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} [{elapsed_precise}] {pos} rows {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(120));

    let mut pager = client.paginate(query);
    let mut rows = Vec::new();
    while let Some(row) = pager.next() {
        match row {
            Ok(row) => {
                rows.push(row);
                pb.inc(1);
                pb.set_message(format!("(page {})", pager.pages_fetched()));
            }
            Err(e) => {
                pb.abandon_with_message(format!("failed after {} rows", rows.len()));
                return Err(e.into());
            }
        }
    }
    pb.finish_and_clear();
    Ok(rows)
}
