use anyhow::Result;
use clap::Args;
use lobbyview_api::{Client, ClientQuery};

use super::{execute, PageArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct ClientsArgs {
    /// Client UUID
    #[arg(long)]
    pub uuid: Option<String>,

    /// Client name (partial match)
    #[arg(long)]
    pub name: Option<String>,

    /// Lowest primary NAICS code
    #[arg(long)]
    pub min_naics: Option<u32>,

    /// Highest primary NAICS code
    #[arg(long)]
    pub max_naics: Option<u32>,

    /// NAICS description (partial match)
    #[arg(long)]
    pub naics_description: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub fn build_query(args: &ClientsArgs) -> Result<ClientQuery> {
    let mut query = ClientQuery::default();

    if let Some(uuid) = validation::validate_opt_text(args.uuid.as_deref())? {
        query = query.with_client_uuid(&uuid);
    }
    if let Some(name) = validation::validate_opt_text(args.name.as_deref())? {
        query = query.with_client_name(&name);
    }
    if let Some(min) = args.min_naics {
        query = query.with_min_naics(min);
    }
    if let Some(max) = args.max_naics {
        query = query.with_max_naics(max);
    }
    if let Some(desc) = validation::validate_opt_text(args.naics_description.as_deref())? {
        query = query.with_naics_description(&desc);
    }

    Ok(query)
}

pub fn run(args: &ClientsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    execute(client, build_query(args)?, &args.paging, format)
}
