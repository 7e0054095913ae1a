use chrono::NaiveDate;

use crate::types::ResourceKind;

use super::{
    common::{Predicate, PredicateList, QueryCommon},
    Query,
};

/// Filters for `/api/legislators`.
#[derive(Clone, Debug, Default)]
pub struct LegislatorQuery {
    pub common: QueryCommon,
    /// LobbyView identifier, e.g. `M000303`.
    pub legislator_id: Option<String>,
    pub govtrack_id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub gender: Option<String>,
    /// Exact birthday. Takes precedence over `min_birthday`/`max_birthday`.
    pub birthday: Option<NaiveDate>,
    pub min_birthday: Option<NaiveDate>,
    pub max_birthday: Option<NaiveDate>,
}

impl Query for LegislatorQuery {
    const KIND: ResourceKind = ResourceKind::Legislator;

    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn predicates(&self) -> Vec<Predicate> {
        PredicateList::new()
            .eq("legislator_id", &self.legislator_id)
            .eq("legislator_govtrack_id", &self.govtrack_id)
            .ilike("legislator_first_name", &self.first_name)
            .ilike("legislator_last_name", &self.last_name)
            .ilike("legislator_full_name", &self.full_name)
            .eq("legislator_gender", &self.gender)
            .range(
                "legislator_birthday",
                &self.birthday,
                &self.min_birthday,
                &self.max_birthday,
            )
            .build()
    }
}

impl LegislatorQuery {
    pub fn with_legislator_id(mut self, legislator_id: &str) -> Self {
        self.legislator_id = Some(legislator_id.to_string());
        self
    }

    pub fn with_govtrack_id(mut self, govtrack_id: u64) -> Self {
        self.govtrack_id = Some(govtrack_id);
        self
    }

    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self
    }

    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = Some(last_name.to_string());
        self
    }

    pub fn with_full_name(mut self, full_name: &str) -> Self {
        self.full_name = Some(full_name.to_string());
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string());
        self
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn with_min_birthday(mut self, min_birthday: NaiveDate) -> Self {
        self.min_birthday = Some(min_birthday);
        self
    }

    pub fn with_max_birthday(mut self, max_birthday: NaiveDate) -> Self {
        self.max_birthday = Some(max_birthday);
        self
    }
}
