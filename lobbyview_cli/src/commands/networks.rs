use anyhow::Result;
use clap::Args;
use lobbyview_api::{Client, NetworkQuery, QuarterLevelNetworkQuery};

use super::{execute, PageArgs};
use crate::output::OutputFormat;
use crate::validation;

/// Flags shared by yearly and quarterly networks.
#[derive(Args)]
pub struct NetworkFilters {
    /// Client UUID
    #[arg(long)]
    pub client_uuid: Option<String>,

    /// Legislator ID
    #[arg(long)]
    pub legislator_id: Option<String>,

    /// Exact report year; overrides --min/--max-year
    #[arg(long)]
    pub year: Option<u32>,

    #[arg(long)]
    pub min_year: Option<u32>,

    #[arg(long)]
    pub max_year: Option<u32>,

    /// Fewest bills sponsored by the legislator and lobbied on by the client
    #[arg(long)]
    pub min_bills: Option<u32>,

    /// Most bills sponsored by the legislator and lobbied on by the client
    #[arg(long)]
    pub max_bills: Option<u32>,
}

#[derive(Args)]
pub struct NetworksArgs {
    #[command(flatten)]
    pub filters: NetworkFilters,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct QuarterNetworksArgs {
    #[command(flatten)]
    pub filters: NetworkFilters,

    /// Exact report quarter (1-4); overrides --min/--max-quarter
    #[arg(long)]
    pub quarter: Option<String>,

    #[arg(long)]
    pub min_quarter: Option<String>,

    #[arg(long)]
    pub max_quarter: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub fn build_network_query(args: &NetworksArgs) -> Result<NetworkQuery> {
    let f = &args.filters;
    let mut query = NetworkQuery::default();

    if let Some(uuid) = validation::validate_opt_text(f.client_uuid.as_deref())? {
        query = query.with_client_uuid(&uuid);
    }
    if let Some(id) = validation::validate_opt_text(f.legislator_id.as_deref())? {
        query = query.with_legislator_id(&id);
    }
    if let Some(year) = f.year {
        query = query.with_report_year(year);
    }
    if let Some(year) = f.min_year {
        query = query.with_min_report_year(year);
    }
    if let Some(year) = f.max_year {
        query = query.with_max_report_year(year);
    }
    if let Some(count) = f.min_bills {
        query = query.with_min_bills_sponsored(count);
    }
    if let Some(count) = f.max_bills {
        query = query.with_max_bills_sponsored(count);
    }

    Ok(query)
}

pub fn build_quarter_query(args: &QuarterNetworksArgs) -> Result<QuarterLevelNetworkQuery> {
    let f = &args.filters;
    let mut query = QuarterLevelNetworkQuery::default();

    if let Some(uuid) = validation::validate_opt_text(f.client_uuid.as_deref())? {
        query = query.with_client_uuid(&uuid);
    }
    if let Some(id) = validation::validate_opt_text(f.legislator_id.as_deref())? {
        query = query.with_legislator_id(&id);
    }
    if let Some(year) = f.year {
        query = query.with_report_year(year);
    }
    if let Some(year) = f.min_year {
        query = query.with_min_report_year(year);
    }
    if let Some(year) = f.max_year {
        query = query.with_max_report_year(year);
    }
    if let Some(ref quarter) = args.quarter {
        query = query.with_report_quarter_code(&validation::validate_quarter(quarter)?);
    }
    if let Some(ref quarter) = args.min_quarter {
        query = query.with_min_report_quarter_code(&validation::validate_quarter(quarter)?);
    }
    if let Some(ref quarter) = args.max_quarter {
        query = query.with_max_report_quarter_code(&validation::validate_quarter(quarter)?);
    }
    if let Some(count) = f.min_bills {
        query = query.with_min_bills_sponsored(count);
    }
    if let Some(count) = f.max_bills {
        query = query.with_max_bills_sponsored(count);
    }

    Ok(query)
}

pub fn run_networks(args: &NetworksArgs, client: &Client, format: OutputFormat) -> Result<()> {
    execute(client, build_network_query(args)?, &args.paging, format)
}

pub fn run_quarter_networks(
    args: &QuarterNetworksArgs,
    client: &Client,
    format: OutputFormat,
) -> Result<()> {
    execute(client, build_quarter_query(args)?, &args.paging, format)
}
