use anyhow::Result;
use clap::Args;
use lobbyview_api::{Client, LegislatorQuery};

use super::{execute, PageArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct LegislatorsArgs {
    /// LobbyView legislator ID (e.g. M000303)
    #[arg(long)]
    pub id: Option<String>,

    /// GovTrack ID
    #[arg(long)]
    pub govtrack_id: Option<u64>,

    /// First name (partial match)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name (partial match)
    #[arg(long)]
    pub last_name: Option<String>,

    /// Full name (partial match)
    #[arg(long)]
    pub full_name: Option<String>,

    /// Gender (M or F)
    #[arg(long)]
    pub gender: Option<String>,

    /// Exact birthday (YYYY-MM-DD); overrides --min/--max-birthday
    #[arg(long)]
    pub birthday: Option<String>,

    /// Earliest birthday (YYYY-MM-DD)
    #[arg(long)]
    pub min_birthday: Option<String>,

    /// Latest birthday (YYYY-MM-DD)
    #[arg(long)]
    pub max_birthday: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub fn build_query(args: &LegislatorsArgs) -> Result<LegislatorQuery> {
    let mut query = LegislatorQuery::default();

    if let Some(ref id) = args.id {
        query = query.with_legislator_id(&validation::validate_text(id)?);
    }
    if let Some(govtrack_id) = args.govtrack_id {
        query = query.with_govtrack_id(govtrack_id);
    }
    if let Some(name) = validation::validate_opt_text(args.first_name.as_deref())? {
        query = query.with_first_name(&name);
    }
    if let Some(name) = validation::validate_opt_text(args.last_name.as_deref())? {
        query = query.with_last_name(&name);
    }
    if let Some(name) = validation::validate_opt_text(args.full_name.as_deref())? {
        query = query.with_full_name(&name);
    }
    if let Some(gender) = validation::validate_opt_text(args.gender.as_deref())? {
        query = query.with_gender(&gender.to_uppercase());
    }
    if let Some(ref date) = args.birthday {
        query = query.with_birthday(validation::validate_date(date)?);
    }
    if let Some(ref date) = args.min_birthday {
        query = query.with_min_birthday(validation::validate_date(date)?);
    }
    if let Some(ref date) = args.max_birthday {
        query = query.with_max_birthday(validation::validate_date(date)?);
    }

    Ok(query)
}

pub fn run(args: &LegislatorsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    execute(client, build_query(args)?, &args.paging, format)
}
