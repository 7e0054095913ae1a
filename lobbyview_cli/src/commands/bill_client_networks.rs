use anyhow::Result;
use clap::Args;
use lobbyview_api::{BillClientNetworkQuery, Client};

use super::{execute, PageArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct BillClientNetworksArgs {
    /// Composite bill ID (e.g. "H.R.1174 - 114"); overrides the separate bill flags
    #[arg(long)]
    pub bill_id: Option<String>,

    /// Session of Congress
    #[arg(long)]
    pub congress: Option<u32>,

    /// Chamber: H or S
    #[arg(long)]
    pub chamber: Option<String>,

    /// Resolution type (e.g. R, RES)
    #[arg(long)]
    pub resolution_type: Option<String>,

    /// Bill number
    #[arg(long)]
    pub number: Option<u32>,

    /// Report UUID
    #[arg(long)]
    pub report_uuid: Option<String>,

    /// Position of the issue within its report
    #[arg(long)]
    pub ordi: Option<u32>,

    /// Client UUID
    #[arg(long)]
    pub client_uuid: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub fn build_query(args: &BillClientNetworksArgs) -> Result<BillClientNetworkQuery> {
    let mut query = BillClientNetworkQuery::default();

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
    if let Some(uuid) = validation::validate_opt_text(args.report_uuid.as_deref())? {
        query = query.with_report_uuid(&uuid);
    }
    if let Some(ordi) = args.ordi {
        query = query.with_issue_ordi(ordi);
    }
    if let Some(uuid) = validation::validate_opt_text(args.client_uuid.as_deref())? {
        query = query.with_client_uuid(&uuid);
    }
    if let Some(id) = validation::validate_opt_text(args.bill_id.as_deref())? {
        query = query.with_bill_id(&id)?;
    }

    Ok(query)
}

pub fn run(args: &BillClientNetworksArgs, client: &Client, format: OutputFormat) -> Result<()> {
    execute(client, build_query(args)?, &args.paging, format)
}
