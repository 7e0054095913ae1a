use chrono::NaiveDate;

use crate::types::ResourceKind;

use super::{
    common::{Predicate, PredicateList, QueryCommon},
    Query,
};

/// Filters for `/api/bills`.
#[derive(Clone, Debug, Default)]
pub struct BillQuery {
    pub common: QueryCommon,
    /// Session of Congress.
    pub congress_number: Option<u32>,
    /// `H` or `S`.
    pub chamber: Option<String>,
    pub resolution_type: Option<String>,
    pub bill_number: Option<u32>,
    /// Bill status, matched partially (e.g. `ENACTED`).
    pub state: Option<String>,
    /// Sponsor of the bill.
    pub legislator_id: Option<String>,
    pub min_introduced_date: Option<NaiveDate>,
    pub max_introduced_date: Option<NaiveDate>,
    pub min_updated_date: Option<NaiveDate>,
    pub max_updated_date: Option<NaiveDate>,
}

impl Query for BillQuery {
    const KIND: ResourceKind = ResourceKind::Bill;

    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn predicates(&self) -> Vec<Predicate> {
        PredicateList::new()
            .eq("congress_number", &self.congress_number)
            .eq("bill_chamber", &self.chamber)
            .eq("bill_resolution_type", &self.resolution_type)
            .eq("bill_number", &self.bill_number)
            .ilike("bill_state", &self.state)
            .eq("legislator_id", &self.legislator_id)
            .gte("bill_introduced_datetime", &self.min_introduced_date)
            .lte("bill_introduced_datetime", &self.max_introduced_date)
            .gte("bill_date_updated", &self.min_updated_date)
            .lte("bill_date_updated", &self.max_updated_date)
            .build()
    }
}

impl BillQuery {
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

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn with_legislator_id(mut self, legislator_id: &str) -> Self {
        self.legislator_id = Some(legislator_id.to_string());
        self
    }

    pub fn with_min_introduced_date(mut self, date: NaiveDate) -> Self {
        self.min_introduced_date = Some(date);
        self
    }

    pub fn with_max_introduced_date(mut self, date: NaiveDate) -> Self {
        self.max_introduced_date = Some(date);
        self
    }

    pub fn with_min_updated_date(mut self, date: NaiveDate) -> Self {
        self.min_updated_date = Some(date);
        self
    }

    pub fn with_max_updated_date(mut self, date: NaiveDate) -> Self {
        self.max_updated_date = Some(date);
        self
    }
}
