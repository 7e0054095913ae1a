use anyhow::Result;
use clap::Args;
use lobbyview_api::{BillQuery, Client};

use super::{execute, PageArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct BillsArgs {
    /// Session of Congress (e.g. 111)
    #[arg(long)]
    pub congress: Option<u32>,

    /// Chamber: H or S
    #[arg(long)]
    pub chamber: Option<String>,

    /// Resolution type (e.g. R, RES, JRES)
    #[arg(long)]
    pub resolution_type: Option<String>,

    /// Bill number
    #[arg(long)]
    pub number: Option<u32>,

    /// Bill status (partial match, e.g. ENACTED)
    #[arg(long)]
    pub state: Option<String>,

    /// Sponsor legislator ID
    #[arg(long)]
    pub sponsor: Option<String>,

    /// Introduced on or after (YYYY-MM-DD)
    #[arg(long)]
    pub introduced_after: Option<String>,

    /// Introduced on or before (YYYY-MM-DD)
    #[arg(long)]
    pub introduced_before: Option<String>,

    /// Updated on or after (YYYY-MM-DD)
    #[arg(long)]
    pub updated_after: Option<String>,

    /// Updated on or before (YYYY-MM-DD)
    #[arg(long)]
    pub updated_before: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub fn build_query(args: &BillsArgs) -> Result<BillQuery> {
    let mut query = BillQuery::default();

    if let Some(congress) = args.congress {
        query = query.with_congress_number(congress);
    }
    if let Some(ref chamber) = args.chamber {
        query = query.with_chamber(&validation::validate_chamber(chamber)?);
    }
    if let Some(kind) = validation::validate_opt_text(args.resolution_type.as_deref())? {
        query = query.with_resolution_type(&kind.to_uppercase());
    }
    if let Some(number) = args.number {
        query = query.with_bill_number(number);
    }
    if let Some(state) = validation::validate_opt_text(args.state.as_deref())? {
        query = query.with_state(&state);
    }
    if let Some(sponsor) = validation::validate_opt_text(args.sponsor.as_deref())? {
        query = query.with_legislator_id(&sponsor);
    }
    if let Some(ref date) = args.introduced_after {
        query = query.with_min_introduced_date(validation::validate_date(date)?);
    }
    if let Some(ref date) = args.introduced_before {
        query = query.with_max_introduced_date(validation::validate_date(date)?);
    }
    if let Some(ref date) = args.updated_after {
        query = query.with_min_updated_date(validation::validate_date(date)?);
    }
    if let Some(ref date) = args.updated_before {
        query = query.with_max_updated_date(validation::validate_date(date)?);
    }

    Ok(query)
}

pub fn run(args: &BillsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    execute(client, build_query(args)?, &args.paging, format)
}
