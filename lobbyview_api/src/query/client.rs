use crate::types::ResourceKind;

use super::{
    common::{Predicate, PredicateList, QueryCommon},
    Query,
};

/// Filters for `/api/clients`, the organizations on whose behalf lobbying is reported.
#[derive(Clone, Debug, Default)]
pub struct ClientQuery {
    pub common: QueryCommon,
    pub client_uuid: Option<String>,
    pub client_name: Option<String>,
    /// Lower bound on the client's primary NAICS code.
    pub min_naics: Option<u32>,
    pub max_naics: Option<u32>,
    pub naics_description: Option<String>,
}

impl Query for ClientQuery {
    const KIND: ResourceKind = ResourceKind::Client;

    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn predicates(&self) -> Vec<Predicate> {
        PredicateList::new()
            .eq("client_uuid", &self.client_uuid)
            .ilike("client_name", &self.client_name)
            .gte("primary_naics", &self.min_naics)
            .lte("primary_naics", &self.max_naics)
            .ilike("naics_description", &self.naics_description)
            .build()
    }
}

impl ClientQuery {
    pub fn with_client_uuid(mut self, client_uuid: &str) -> Self {
        self.client_uuid = Some(client_uuid.to_string());
        self
    }

    pub fn with_client_name(mut self, client_name: &str) -> Self {
        self.client_name = Some(client_name.to_string());
        self
    }

    pub fn with_min_naics(mut self, min_naics: u32) -> Self {
        self.min_naics = Some(min_naics);
        self
    }

    pub fn with_max_naics(mut self, max_naics: u32) -> Self {
        self.max_naics = Some(max_naics);
        self
    }

    pub fn with_naics_description(mut self, naics_description: &str) -> Self {
        self.naics_description = Some(naics_description.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{ClientQuery, Query};

    #[test]
    fn test_client_query() {
        insta::assert_snapshot!(ClientQuery::default()
            .with_client_name("Microsoft Corporation")
            .to_query_string(),
            @"client_name=ilike.*Microsoft%20Corporation*");

        insta::assert_snapshot!(ClientQuery::default()
            .with_min_naics(511209)
            .with_max_naics(511211)
            .with_naics_description("software")
            .to_query_string(),
            @"primary_naics=gte.511209&primary_naics=lte.511211&naics_description=ilike.*software*");
    }
}
