//! Live smoke test: one representative query per resource.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use lobbyview_api::types::Response;
use lobbyview_api::{
    BillClientNetworkQuery, BillQuery, Client, ClientQuery, Error, IssueQuery, LegislatorQuery,
    NetworkQuery, QuarterLevelNetworkQuery, Query, ReportQuery, TextQuery,
};

const MICROSOFT: &str = "44563806-56d2-5e99-84a1-95d22a7a69b3";

struct Probe {
    name: &'static str,
    run: Box<dyn Fn(&Client) -> Result<Response, Error>>,
}

fn probe<Q>(name: &'static str, query: Q) -> Probe
where
    Q: Query + 'static,
{
    Probe {
        name,
        run: Box::new(move |client: &Client| client.fetch(&query)),
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn probes() -> Vec<Probe> {
    let mut legislators_by_birthday = LegislatorQuery::default();
    legislators_by_birthday.min_birthday = date(1900, 1, 1);
    legislators_by_birthday.max_birthday = date(1950, 12, 31);

    let mut bills_by_date = BillQuery::default();
    bills_by_date.min_introduced_date = date(2009, 1, 1);
    bills_by_date.max_introduced_date = date(2009, 12, 31);

    vec![
        probe(
            "legislators by name",
            LegislatorQuery::default()
                .with_first_name("John")
                .with_last_name("McCain"),
        ),
        probe(
            "legislators by id",
            LegislatorQuery::default().with_legislator_id("M000303"),
        ),
        probe("legislators by birthday", legislators_by_birthday),
        probe(
            "bills",
            BillQuery::default()
                .with_congress_number(111)
                .with_chamber("H")
                .with_bill_number(4173),
        ),
        probe("bills by introduced date", bills_by_date),
        probe(
            "clients",
            ClientQuery::default().with_client_name("Microsoft Corporation"),
        ),
        probe(
            "clients by naics",
            ClientQuery::default()
                .with_min_naics(511209)
                .with_max_naics(511211),
        ),
        probe(
            "reports",
            ReportQuery::default()
                .with_report_year(2020)
                .with_report_quarter_code("2")
                .with_is_client_self_filer(true)
                .with_report_uuid("4b799814-3e94-5ee1-8dd4-b32aead9aca6"),
        ),
        probe(
            "reports by amount",
            ReportQuery::default()
                .with_min_amount(1_000_000.0)
                .with_max_amount(100_000_000.0),
        ),
        probe("issues", IssueQuery::default().with_issue_code("TRD")),
        probe(
            "networks",
            NetworkQuery::default()
                .with_client_uuid(MICROSOFT)
                .with_legislator_id("M000303")
                .with_min_report_year(2017)
                .with_max_report_year(2017),
        ),
        probe(
            "networks by year",
            NetworkQuery::default()
                .with_min_report_year(2015)
                .with_max_report_year(2020)
                .with_min_bills_sponsored(1),
        ),
        probe(
            "texts",
            TextQuery::default()
                .with_issue_code("HCR")
                .with_issue_text("covid"),
        ),
        probe(
            "quarter-level networks",
            QuarterLevelNetworkQuery::default()
                .with_client_uuid(MICROSOFT)
                .with_legislator_id("M000303")
                .with_report_year(2017)
                .with_report_quarter_code("4"),
        ),
        probe(
            "quarter-level networks by bills",
            QuarterLevelNetworkQuery::default()
                .with_min_bills_sponsored(1)
                .with_max_bills_sponsored(5),
        ),
        probe(
            "bill-client networks",
            BillClientNetworkQuery::default()
                .with_congress_number(114)
                .with_chamber("H")
                .with_bill_number(1174)
                .with_client_uuid(MICROSOFT),
        ),
    ]
}

pub fn run(client: &Client) -> Result<()> {
    let probes = probes();
    let mut failures = 0;

    for p in &probes {
        match (p.run)(client) {
            Ok(resp) => eprintln!(
                "ok    {} ({} of {} rows)",
                p.name,
                resp.len(),
                resp.total_rows()
            ),
            Err(e) => {
                failures += 1;
                tracing::error!("{} failed: {}", p.name, e);
                eprintln!("FAIL  {}: {}", p.name, e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} checks failed", failures, probes.len());
    }
    eprintln!("All {} checks passed", probes.len());
    Ok(())
}
