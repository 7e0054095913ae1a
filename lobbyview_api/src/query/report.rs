use crate::types::ResourceKind;

use super::{
    common::{Predicate, PredicateList, QueryCommon},
    Query,
};

/// Filters for `/api/reports`, the quarterly LD-2 filings.
#[derive(Clone, Debug, Default)]
pub struct ReportQuery {
    pub common: QueryCommon,
    pub report_uuid: Option<String>,
    pub client_uuid: Option<String>,
    pub registrant_uuid: Option<String>,
    pub registrant_name: Option<String>,
    /// Exact year. Takes precedence over `min_report_year`/`max_report_year`.
    pub report_year: Option<u32>,
    pub min_report_year: Option<u32>,
    pub max_report_year: Option<u32>,
    /// Exact quarter code. Takes precedence over the quarter bounds.
    pub report_quarter_code: Option<String>,
    pub min_report_quarter_code: Option<String>,
    pub max_report_quarter_code: Option<String>,
    /// Lower bound on lobbying firm income or in-house lobbying expense.
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub is_no_activity: Option<bool>,
    pub is_client_self_filer: Option<bool>,
    pub is_amendment: Option<bool>,
}

impl Query for ReportQuery {
    const KIND: ResourceKind = ResourceKind::Report;

    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn predicates(&self) -> Vec<Predicate> {
        PredicateList::new()
            .eq("report_uuid", &self.report_uuid)
            .eq("client_uuid", &self.client_uuid)
            .eq("registrant_uuid", &self.registrant_uuid)
            .ilike("registrant_name", &self.registrant_name)
            .range(
                "report_year",
                &self.report_year,
                &self.min_report_year,
                &self.max_report_year,
            )
            .range(
                "report_quarter_code",
                &self.report_quarter_code,
                &self.min_report_quarter_code,
                &self.max_report_quarter_code,
            )
            .gte("amount", &self.min_amount)
            .lte("amount", &self.max_amount)
            .eq("is_no_activity", &self.is_no_activity)
            .eq("is_client_self_filer", &self.is_client_self_filer)
            .eq("is_amendment", &self.is_amendment)
            .build()
    }
}

impl ReportQuery {
    pub fn with_report_uuid(mut self, report_uuid: &str) -> Self {
        self.report_uuid = Some(report_uuid.to_string());
        self
    }

    pub fn with_client_uuid(mut self, client_uuid: &str) -> Self {
        self.client_uuid = Some(client_uuid.to_string());
        self
    }

    pub fn with_registrant_uuid(mut self, registrant_uuid: &str) -> Self {
        self.registrant_uuid = Some(registrant_uuid.to_string());
        self
    }

    pub fn with_registrant_name(mut self, registrant_name: &str) -> Self {
        self.registrant_name = Some(registrant_name.to_string());
        self
    }

    pub fn with_report_year(mut self, report_year: u32) -> Self {
        self.report_year = Some(report_year);
        self
    }

    pub fn with_min_report_year(mut self, year: u32) -> Self {
        self.min_report_year = Some(year);
        self
    }

    pub fn with_max_report_year(mut self, year: u32) -> Self {
        self.max_report_year = Some(year);
        self
    }

    pub fn with_report_quarter_code(mut self, quarter_code: &str) -> Self {
        self.report_quarter_code = Some(quarter_code.to_string());
        self
    }

    pub fn with_min_report_quarter_code(mut self, quarter_code: &str) -> Self {
        self.min_report_quarter_code = Some(quarter_code.to_string());
        self
    }

    pub fn with_max_report_quarter_code(mut self, quarter_code: &str) -> Self {
        self.max_report_quarter_code = Some(quarter_code.to_string());
        self
    }

    pub fn with_min_amount(mut self, amount: f64) -> Self {
        self.min_amount = Some(amount);
        self
    }

    pub fn with_max_amount(mut self, amount: f64) -> Self {
        self.max_amount = Some(amount);
        self
    }

    pub fn with_is_no_activity(mut self, is_no_activity: bool) -> Self {
        self.is_no_activity = Some(is_no_activity);
        self
    }

    pub fn with_is_client_self_filer(mut self, is_client_self_filer: bool) -> Self {
        self.is_client_self_filer = Some(is_client_self_filer);
        self
    }

    pub fn with_is_amendment(mut self, is_amendment: bool) -> Self {
        self.is_amendment = Some(is_amendment);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{Query, ReportQuery};

    #[test]
    fn test_report_query() {
        insta::assert_snapshot!(ReportQuery::default()
            .with_report_year(2020)
            .with_report_quarter_code("2")
            .with_is_client_self_filer(true)
            .with_report_uuid("4b799814-3e94-5ee1-8dd4-b32aead9aca6")
            .to_query_string(),
            @"report_uuid=eq.4b799814-3e94-5ee1-8dd4-b32aead9aca6&report_year=eq.2020&report_quarter_code=eq.2&is_client_self_filer=eq.true");

        insta::assert_snapshot!(ReportQuery::default()
            .with_min_amount(1_000_000.0)
            .with_max_amount(100_000_000.0)
            .to_query_string(),
            @"amount=gte.1000000&amount=lte.100000000");
    }

    #[test]
    fn report_year_precedence() {
        let query = ReportQuery::default()
            .with_report_year(2019)
            .with_min_report_year(2015)
            .with_max_report_year(2020)
            .with_min_report_quarter_code("1");
        assert_eq!(
            query.to_query_string(),
            "report_year=eq.2019&report_quarter_code=gte.1"
        );
    }

    #[test]
    fn false_flags_are_sent() {
        let query = ReportQuery::default()
            .with_is_no_activity(false)
            .with_is_amendment(false);
        assert_eq!(
            query.to_query_string(),
            "is_no_activity=eq.false&is_amendment=eq.false"
        );
    }
}
