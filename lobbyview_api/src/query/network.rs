use crate::types::ResourceKind;

use super::{
    common::{Predicate, PredicateList, QueryCommon},
    Query,
};

/// Filters for `/api/networks`: client-legislator links aggregated per year.
#[derive(Clone, Debug, Default)]
pub struct NetworkQuery {
    pub common: QueryCommon,
    pub client_uuid: Option<String>,
    pub legislator_id: Option<String>,
    /// Exact year. Takes precedence over `min_report_year`/`max_report_year`.
    pub report_year: Option<u32>,
    pub min_report_year: Option<u32>,
    pub max_report_year: Option<u32>,
    /// Bounds on bills sponsored by the legislator that the client lobbied on that year.
    pub min_bills_sponsored: Option<u32>,
    pub max_bills_sponsored: Option<u32>,
}

impl Query for NetworkQuery {
    const KIND: ResourceKind = ResourceKind::Network;

    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn predicates(&self) -> Vec<Predicate> {
        PredicateList::new()
            .eq("client_uuid", &self.client_uuid)
            .eq("legislator_id", &self.legislator_id)
            .range(
                "report_year",
                &self.report_year,
                &self.min_report_year,
                &self.max_report_year,
            )
            .gte("n_bills_sponsored", &self.min_bills_sponsored)
            .lte("n_bills_sponsored", &self.max_bills_sponsored)
            .build()
    }
}

impl NetworkQuery {
    pub fn with_client_uuid(mut self, client_uuid: &str) -> Self {
        self.client_uuid = Some(client_uuid.to_string());
        self
    }

    pub fn with_legislator_id(mut self, legislator_id: &str) -> Self {
        self.legislator_id = Some(legislator_id.to_string());
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

    pub fn with_min_bills_sponsored(mut self, count: u32) -> Self {
        self.min_bills_sponsored = Some(count);
        self
    }

    pub fn with_max_bills_sponsored(mut self, count: u32) -> Self {
        self.max_bills_sponsored = Some(count);
        self
    }
}

/// Filters for `/api/quarter_level_networks`: the same links aggregated per quarter.
#[derive(Clone, Debug, Default)]
pub struct QuarterLevelNetworkQuery {
    pub common: QueryCommon,
    pub client_uuid: Option<String>,
    pub legislator_id: Option<String>,
    pub report_year: Option<u32>,
    pub min_report_year: Option<u32>,
    pub max_report_year: Option<u32>,
    /// Exact quarter code. Takes precedence over the quarter bounds.
    pub report_quarter_code: Option<String>,
    pub min_report_quarter_code: Option<String>,
    pub max_report_quarter_code: Option<String>,
    pub min_bills_sponsored: Option<u32>,
    pub max_bills_sponsored: Option<u32>,
}

impl Query for QuarterLevelNetworkQuery {
    const KIND: ResourceKind = ResourceKind::QuarterNetwork;

    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn predicates(&self) -> Vec<Predicate> {
        PredicateList::new()
            .eq("client_uuid", &self.client_uuid)
            .eq("legislator_id", &self.legislator_id)
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
            .gte("n_bills_sponsored", &self.min_bills_sponsored)
            .lte("n_bills_sponsored", &self.max_bills_sponsored)
            .build()
    }
}

impl QuarterLevelNetworkQuery {
    pub fn with_client_uuid(mut self, client_uuid: &str) -> Self {
        self.client_uuid = Some(client_uuid.to_string());
        self
    }

    pub fn with_legislator_id(mut self, legislator_id: &str) -> Self {
        self.legislator_id = Some(legislator_id.to_string());
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

    pub fn with_min_bills_sponsored(mut self, count: u32) -> Self {
        self.min_bills_sponsored = Some(count);
        self
    }

    pub fn with_max_bills_sponsored(mut self, count: u32) -> Self {
        self.max_bills_sponsored = Some(count);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{NetworkQuery, QuarterLevelNetworkQuery, Query};

    const MICROSOFT: &str = "44563806-56d2-5e99-84a1-95d22a7a69b3";

    #[test]
    fn test_network_query() {
        insta::assert_snapshot!(NetworkQuery::default()
            .with_client_uuid(MICROSOFT)
            .with_legislator_id("M000303")
            .with_min_report_year(2017)
            .with_max_report_year(2017)
            .to_query_string(),
            @"client_uuid=eq.44563806-56d2-5e99-84a1-95d22a7a69b3&legislator_id=eq.M000303&report_year=gte.2017&report_year=lte.2017");

        insta::assert_snapshot!(NetworkQuery::default()
            .with_min_report_year(2015)
            .with_max_report_year(2020)
            .with_min_bills_sponsored(1)
            .to_query_string(),
            @"report_year=gte.2015&report_year=lte.2020&n_bills_sponsored=gte.1");
    }

    #[test]
    fn test_quarter_level_network_query() {
        insta::assert_snapshot!(QuarterLevelNetworkQuery::default()
            .with_client_uuid(MICROSOFT)
            .with_legislator_id("M000303")
            .with_report_year(2017)
            .with_report_quarter_code("4")
            .to_query_string(),
            @"client_uuid=eq.44563806-56d2-5e99-84a1-95d22a7a69b3&legislator_id=eq.M000303&report_year=eq.2017&report_quarter_code=eq.4");

        insta::assert_snapshot!(QuarterLevelNetworkQuery::default()
            .with_min_bills_sponsored(1)
            .with_max_bills_sponsored(5)
            .to_query_string(),
            @"n_bills_sponsored=gte.1&n_bills_sponsored=lte.5");
    }

    #[test]
    fn exact_year_suppresses_bounds() {
        let query = NetworkQuery::default()
            .with_report_year(2018)
            .with_min_report_year(2015);
        assert_eq!(query.to_query_string(), "report_year=eq.2018");
    }

    #[test]
    fn quarter_bounds() {
        let query = QuarterLevelNetworkQuery::default()
            .with_client_uuid(MICROSOFT)
            .with_max_report_quarter_code("4");
        assert_eq!(
            query.to_query_string(),
            "client_uuid=eq.44563806-56d2-5e99-84a1-95d22a7a69b3&report_quarter_code=lte.4"
        );

        let query = QuarterLevelNetworkQuery::default()
            .with_report_quarter_code("2")
            .with_min_report_quarter_code("1")
            .with_max_report_quarter_code("3");
        assert_eq!(query.to_query_string(), "report_quarter_code=eq.2");
    }
}
