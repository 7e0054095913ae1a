//! Shared query infrastructure: the [`Query`] trait, predicates and [`QueryCommon`].

use chrono::NaiveDate;
use url::Url;

use crate::types::ResourceKind;

/// Trait implemented by all query builders. Provides query-string rendering
/// and the shared page builder.
pub trait Query {
    /// Resource this query targets.
    const KIND: ResourceKind;

    /// Filter predicates in field-declaration order. Never includes the page.
    fn predicates(&self) -> Vec<Predicate>;

    /// Returns the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Whether at least one filter predicate would be sent.
    fn has_filters(&self) -> bool {
        !self.predicates().is_empty()
    }

    /// Predicates joined with `&`, followed by `page=<n>` unless on the first page.
    fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = self.predicates().iter().map(|p| p.to_string()).collect();
        let page = self.common().page;
        if page != 1 {
            parts.push(format!("page={}", page));
        }
        parts.join("&")
    }

    /// Sets this query's parameters as the URL's query, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let query = self.to_query_string();
        url.set_query(if query.is_empty() { None } else { Some(&query) });
        url
    }
}

/// Fields shared by all query types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1, which is never sent.
    pub page: u32,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon { page: 1 }
    }
}

/// Comparison operators understood by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Eq,
    /// Case-insensitive partial match; the value is wrapped in `*` wildcards.
    ILike,
    Gte,
    Lte,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Operator::Eq => "eq",
                Operator::ILike => "ilike",
                Operator::Gte => "gte",
                Operator::Lte => "lte",
            }
        )
    }
}

/// One `field=operator.value` clause. `value` is kept unescaped and encoded on display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Predicate {
    pub field: &'static str,
    pub operator: Operator,
    pub value: String,
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = urlencoding::encode(&self.value);
        match self.operator {
            Operator::ILike => write!(f, "{}={}.*{}*", self.field, self.operator, value),
            _ => write!(f, "{}={}.{}", self.field, self.operator, value),
        }
    }
}

/// Values that can appear on the right-hand side of a predicate.
///
/// Returning `None` means "no constraint"; blank strings are treated that way.
pub trait FilterValue {
    fn to_filter_value(&self) -> Option<String>;
}

impl FilterValue for String {
    fn to_filter_value(&self) -> Option<String> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl FilterValue for NaiveDate {
    fn to_filter_value(&self) -> Option<String> {
        Some(self.format("%Y-%m-%d").to_string())
    }
}

macro_rules! display_filter_value {
    ($($t:ty),*) => {
        $(impl FilterValue for $t {
            fn to_filter_value(&self) -> Option<String> {
                Some(self.to_string())
            }
        })*
    };
}

display_filter_value!(u32, u64, i64, bool);

impl FilterValue for f64 {
    fn to_filter_value(&self) -> Option<String> {
        self.is_finite().then(|| self.to_string())
    }
}

/// Accumulates predicates in the order they are pushed, skipping absent values.
#[derive(Default, Debug)]
pub struct PredicateList(Vec<Predicate>);

impl PredicateList {
    pub fn new() -> Self {
        Self::default()
    }

    fn push<V: FilterValue>(&mut self, field: &'static str, operator: Operator, value: &Option<V>) {
        if let Some(value) = value.as_ref().and_then(FilterValue::to_filter_value) {
            self.0.push(Predicate {
                field,
                operator,
                value,
            });
        }
    }

    pub fn eq<V: FilterValue>(&mut self, field: &'static str, value: &Option<V>) -> &mut Self {
        self.push(field, Operator::Eq, value);
        self
    }

    pub fn ilike<V: FilterValue>(&mut self, field: &'static str, value: &Option<V>) -> &mut Self {
        self.push(field, Operator::ILike, value);
        self
    }

    pub fn gte<V: FilterValue>(&mut self, field: &'static str, value: &Option<V>) -> &mut Self {
        self.push(field, Operator::Gte, value);
        self
    }

    pub fn lte<V: FilterValue>(&mut self, field: &'static str, value: &Option<V>) -> &mut Self {
        self.push(field, Operator::Lte, value);
        self
    }

    /// Bounds on one field. An exact value wins and suppresses both bounds.
    pub fn range<V: FilterValue>(
        &mut self,
        field: &'static str,
        exact: &Option<V>,
        min: &Option<V>,
        max: &Option<V>,
    ) -> &mut Self {
        if exact.as_ref().and_then(FilterValue::to_filter_value).is_some() {
            return self.eq(field, exact);
        }
        self.gte(field, min).lte(field, max)
    }

    pub fn build(&mut self) -> Vec<Predicate> {
        std::mem::take(&mut self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(list: &mut PredicateList) -> Vec<String> {
        list.build().iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn operators_render_their_wire_form() {
        let mut list = PredicateList::new();
        list.eq("a", &Some(1u32))
            .ilike("b", &Some("x".to_string()))
            .gte("c", &Some(2u64))
            .lte("d", &Some(3i64));
        assert_eq!(render(&mut list), ["a=eq.1", "b=ilike.*x*", "c=gte.2", "d=lte.3"]);
    }

    #[test]
    fn absent_and_blank_values_are_skipped() {
        let mut list = PredicateList::new();
        list.eq::<String>("a", &None)
            .eq("b", &Some(String::new()))
            .ilike("c", &Some("   ".to_string()));
        assert!(list.build().is_empty());
    }

    #[test]
    fn zero_and_false_are_real_values() {
        let mut list = PredicateList::new();
        list.eq("n", &Some(0u32)).eq("flag", &Some(false));
        assert_eq!(render(&mut list), ["n=eq.0", "flag=eq.false"]);
    }

    #[test]
    fn values_are_percent_encoded_but_wildcards_are_not() {
        let mut list = PredicateList::new();
        list.ilike("client_name", &Some("AT&T Inc.".to_string()))
            .eq("registrant_name", &Some("Smith, Jones = Co".to_string()));
        assert_eq!(
            render(&mut list),
            [
                "client_name=ilike.*AT%26T%20Inc.*",
                "registrant_name=eq.Smith%2C%20Jones%20%3D%20Co"
            ]
        );
    }

    #[test]
    fn dates_render_iso() {
        let mut list = PredicateList::new();
        list.gte("d", &NaiveDate::from_ymd_opt(1936, 8, 29));
        assert_eq!(render(&mut list), ["d=gte.1936-08-29"]);
    }

    #[test]
    fn exact_value_suppresses_range() {
        let mut list = PredicateList::new();
        list.range("year", &Some(2017u32), &Some(2010), &Some(2020));
        assert_eq!(render(&mut list), ["year=eq.2017"]);

        list.range("year", &None::<u32>, &Some(2010), &Some(2020));
        assert_eq!(render(&mut list), ["year=gte.2010", "year=lte.2020"]);

        list.range("year", &Some(String::new()), &Some("2010".to_string()), &None);
        assert_eq!(render(&mut list), ["year=gte.2010"]);
    }
}
