use crate::{types::BillId, types::ResourceKind, Error};

use super::{
    common::{Predicate, PredicateList, QueryCommon},
    Query,
};

/// Filters for `/api/bill_client_networks`: which clients lobbied on which bills.
///
/// Setting [`bill_id`](Self::bill_id) overrides the four separate bill
/// component fields.
#[derive(Clone, Debug, Default)]
pub struct BillClientNetworkQuery {
    pub common: QueryCommon,
    pub congress_number: Option<u32>,
    pub chamber: Option<String>,
    pub resolution_type: Option<String>,
    pub bill_number: Option<u32>,
    pub report_uuid: Option<String>,
    pub issue_ordi: Option<u32>,
    pub client_uuid: Option<String>,
    pub bill_id: Option<BillId>,
}

impl Query for BillClientNetworkQuery {
    const KIND: ResourceKind = ResourceKind::BillClientNetwork;

    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn predicates(&self) -> Vec<Predicate> {
        let (congress_number, chamber, resolution_type, bill_number) = match &self.bill_id {
            Some(id) => (
                Some(id.congress_number),
                Some(id.chamber.clone()),
                Some(id.resolution_type.clone()),
                Some(id.number),
            ),
            None => (
                self.congress_number,
                self.chamber.clone(),
                self.resolution_type.clone(),
                self.bill_number,
            ),
        };
        PredicateList::new()
            .eq("congress_number", &congress_number)
            .eq("bill_chamber", &chamber)
            .eq("bill_resolution_type", &resolution_type)
            .eq("bill_number", &bill_number)
            .eq("report_uuid", &self.report_uuid)
            .eq("issue_ordi", &self.issue_ordi)
            .eq("client_uuid", &self.client_uuid)
            .build()
    }
}

impl BillClientNetworkQuery {
    pub fn with_congress_number(mut self, congress_number: u32) -> Self {
        self.congress_number = Some(congress_number);
        self
    }

    pub fn with_chamber(mut self, chamber: &str) -> Self {
        self.chamber = Some(chamber.to_string());
        self
    }

    pub fn with_resolution_type(mut self, resolution_type: &str) -> Self {
        self.resolution_type = Some(resolution_type.to_string());
        self
    }

    pub fn with_bill_number(mut self, bill_number: u32) -> Self {
        self.bill_number = Some(bill_number);
        self
    }

    pub fn with_report_uuid(mut self, report_uuid: &str) -> Self {
        self.report_uuid = Some(report_uuid.to_string());
        self
    }

    pub fn with_issue_ordi(mut self, issue_ordi: u32) -> Self {
        self.issue_ordi = Some(issue_ordi);
        self
    }

    pub fn with_client_uuid(mut self, client_uuid: &str) -> Self {
        self.client_uuid = Some(client_uuid.to_string());
        self
    }

    pub fn with_bill(mut self, bill_id: BillId) -> Self {
        self.bill_id = Some(bill_id);
        self
    }

    /// Parses a composite id such as `H.R.1174 - 114`.
    pub fn with_bill_id(self, bill_id: &str) -> Result<Self, Error> {
        Ok(self.with_bill(bill_id.parse()?))
    }
}
