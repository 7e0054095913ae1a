use crate::types::ResourceKind;

use super::{
    common::{Predicate, PredicateList, QueryCommon},
    Query,
};

/// Filters for `/api/issues`, the issue sections of each report.
#[derive(Clone, Debug, Default)]
pub struct IssueQuery {
    pub common: QueryCommon,
    pub report_uuid: Option<String>,
    /// Position of the issue within its report.
    pub issue_ordi: Option<u32>,
    /// General issue area code, e.g. `TRD`.
    pub issue_code: Option<String>,
    /// Houses of Congress and federal agencies contacted.
    pub gov_entity: Option<String>,
}

impl Query for IssueQuery {
    const KIND: ResourceKind = ResourceKind::Issue;

    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn predicates(&self) -> Vec<Predicate> {
        PredicateList::new()
            .eq("report_uuid", &self.report_uuid)
            .eq("issue_ordi", &self.issue_ordi)
            .eq("issue_code", &self.issue_code)
            .ilike("gov_entity", &self.gov_entity)
            .build()
    }
}

impl IssueQuery {
    pub fn with_report_uuid(mut self, report_uuid: &str) -> Self {
        self.report_uuid = Some(report_uuid.to_string());
        self
    }

    pub fn with_issue_ordi(mut self, issue_ordi: u32) -> Self {
        self.issue_ordi = Some(issue_ordi);
        self
    }

    pub fn with_issue_code(mut self, issue_code: &str) -> Self {
        self.issue_code = Some(issue_code.to_string());
        self
    }

    pub fn with_gov_entity(mut self, gov_entity: &str) -> Self {
        self.gov_entity = Some(gov_entity.to_string());
        self
    }
}

/// Filters for `/api/texts`, the free-text specific issue descriptions.
#[derive(Clone, Debug, Default)]
pub struct TextQuery {
    pub common: QueryCommon,
    pub report_uuid: Option<String>,
    pub issue_ordi: Option<u32>,
    pub issue_code: Option<String>,
    pub issue_text: Option<String>,
}

impl Query for TextQuery {
    const KIND: ResourceKind = ResourceKind::Text;

    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn predicates(&self) -> Vec<Predicate> {
        PredicateList::new()
            .eq("report_uuid", &self.report_uuid)
            .eq("issue_ordi", &self.issue_ordi)
            .eq("issue_code", &self.issue_code)
            .ilike("issue_text", &self.issue_text)
            .build()
    }
}

impl TextQuery {
    pub fn with_report_uuid(mut self, report_uuid: &str) -> Self {
        self.report_uuid = Some(report_uuid.to_string());
        self
    }

    pub fn with_issue_ordi(mut self, issue_ordi: u32) -> Self {
        self.issue_ordi = Some(issue_ordi);
        self
    }

    pub fn with_issue_code(mut self, issue_code: &str) -> Self {
        self.issue_code = Some(issue_code.to_string());
        self
    }

    pub fn with_issue_text(mut self, issue_text: &str) -> Self {
        self.issue_text = Some(issue_text.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{IssueQuery, Query, TextQuery};

    #[test]
    fn test_issue_query() {
        insta::assert_snapshot!(IssueQuery::default().with_issue_code("TRD").to_query_string(),
            @"issue_code=eq.TRD");

        insta::assert_snapshot!(IssueQuery::default()
            .with_report_uuid("4b799814-3e94-5ee1-8dd4-b32aead9aca6")
            .with_issue_ordi(2)
            .with_gov_entity("SENATE")
            .with_page(2)
            .to_query_string(),
            @"report_uuid=eq.4b799814-3e94-5ee1-8dd4-b32aead9aca6&issue_ordi=eq.2&gov_entity=ilike.*SENATE*&page=2");
    }

    #[test]
    fn test_text_query() {
        insta::assert_snapshot!(TextQuery::default()
            .with_issue_code("HCR")
            .with_issue_text("covid")
            .to_query_string(),
            @"issue_code=eq.HCR&issue_text=ilike.*covid*");
    }
}
