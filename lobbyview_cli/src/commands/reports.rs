use anyhow::Result;
use clap::Args;
use lobbyview_api::{Client, ReportQuery};

use super::{execute, PageArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct ReportsArgs {
    /// Report UUID
    #[arg(long)]
    pub uuid: Option<String>,

    /// Client UUID
    #[arg(long)]
    pub client_uuid: Option<String>,

    /// Registrant UUID
    #[arg(long)]
    pub registrant_uuid: Option<String>,

    /// Registrant name (partial match)
    #[arg(long)]
    pub registrant_name: Option<String>,

    /// Exact report year; overrides --min/--max-year
    #[arg(long)]
    pub year: Option<u32>,

    #[arg(long)]
    pub min_year: Option<u32>,

    #[arg(long)]
    pub max_year: Option<u32>,

    /// Exact quarter (1-4); overrides --min/--max-quarter
    #[arg(long)]
    pub quarter: Option<String>,

    #[arg(long)]
    pub min_quarter: Option<String>,

    #[arg(long)]
    pub max_quarter: Option<String>,

    /// Lowest reported amount in dollars
    #[arg(long)]
    pub min_amount: Option<f64>,

    /// Highest reported amount in dollars
    #[arg(long)]
    pub max_amount: Option<f64>,

    /// Filter on the no-activity flag
    #[arg(long)]
    pub no_activity: Option<bool>,

    /// Filter on the client self-filer flag
    #[arg(long)]
    pub self_filer: Option<bool>,

    /// Filter on the amendment flag
    #[arg(long)]
    pub amendment: Option<bool>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub fn build_query(args: &ReportsArgs) -> Result<ReportQuery> {
    let mut query = ReportQuery::default();

    if let Some(uuid) = validation::validate_opt_text(args.uuid.as_deref())? {
        query = query.with_report_uuid(&uuid);
    }
    if let Some(uuid) = validation::validate_opt_text(args.client_uuid.as_deref())? {
        query = query.with_client_uuid(&uuid);
    }
    if let Some(uuid) = validation::validate_opt_text(args.registrant_uuid.as_deref())? {
        query = query.with_registrant_uuid(&uuid);
    }
    if let Some(name) = validation::validate_opt_text(args.registrant_name.as_deref())? {
        query = query.with_registrant_name(&name);
    }
    if let Some(year) = args.year {
        query = query.with_report_year(year);
    }
    if let Some(year) = args.min_year {
        query = query.with_min_report_year(year);
    }
    if let Some(year) = args.max_year {
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
    if let Some(amount) = args.min_amount {
        query = query.with_min_amount(amount);
    }
    if let Some(amount) = args.max_amount {
        query = query.with_max_amount(amount);
    }
    if let Some(flag) = args.no_activity {
        query = query.with_is_no_activity(flag);
    }
    if let Some(flag) = args.self_filer {
        query = query.with_is_client_self_filer(flag);
    }
    if let Some(flag) = args.amendment {
        query = query.with_is_amendment(flag);
    }

    Ok(query)
}

pub fn run(args: &ReportsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    execute(client, build_query(args)?, &args.paging, format)
}
