use anyhow::Result;
use clap::Args;
use lobbyview_api::{Client, IssueQuery, TextQuery};

use super::{execute, PageArgs};
use crate::output::OutputFormat;
use crate::validation;

#[derive(Args)]
pub struct IssuesArgs {
    /// Report UUID
    #[arg(long)]
    pub report_uuid: Option<String>,

    /// Position of the issue within its report
    #[arg(long)]
    pub ordi: Option<u32>,

    /// General issue area code (e.g. TRD, HCR)
    #[arg(long)]
    pub code: Option<String>,

    /// Government entity contacted (partial match)
    #[arg(long)]
    pub gov_entity: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct TextsArgs {
    /// Report UUID
    #[arg(long)]
    pub report_uuid: Option<String>,

    /// Position of the issue within its report
    #[arg(long)]
    pub ordi: Option<u32>,

    /// General issue area code (e.g. TRD, HCR)
    #[arg(long)]
    pub code: Option<String>,

    /// Specific issue text (partial match)
    #[arg(long)]
    pub text: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub fn build_issue_query(args: &IssuesArgs) -> Result<IssueQuery> {
    let mut query = IssueQuery::default();

    if let Some(uuid) = validation::validate_opt_text(args.report_uuid.as_deref())? {
        query = query.with_report_uuid(&uuid);
    }
    if let Some(ordi) = args.ordi {
        query = query.with_issue_ordi(ordi);
    }
    if let Some(code) = validation::validate_opt_text(args.code.as_deref())? {
        query = query.with_issue_code(&code.to_uppercase());
    }
    if let Some(entity) = validation::validate_opt_text(args.gov_entity.as_deref())? {
        query = query.with_gov_entity(&entity);
    }

    Ok(query)
}

pub fn build_text_query(args: &TextsArgs) -> Result<TextQuery> {
    let mut query = TextQuery::default();

    if let Some(uuid) = validation::validate_opt_text(args.report_uuid.as_deref())? {
        query = query.with_report_uuid(&uuid);
    }
    if let Some(ordi) = args.ordi {
        query = query.with_issue_ordi(ordi);
    }
    if let Some(code) = validation::validate_opt_text(args.code.as_deref())? {
        query = query.with_issue_code(&code.to_uppercase());
    }
    if let Some(text) = validation::validate_opt_text(args.text.as_deref())? {
        query = query.with_issue_text(&text);
    }

    Ok(query)
}

pub fn run_issues(args: &IssuesArgs, client: &Client, format: OutputFormat) -> Result<()> {
    execute(client, build_issue_query(args)?, &args.paging, format)
}

pub fn run_texts(args: &TextsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    execute(client, build_text_query(args)?, &args.paging, format)
}
