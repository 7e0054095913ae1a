//! Blocking HTTP client for the LobbyView REST API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use url::Url;

use crate::{
    config::{ClientConfig, ConnectionCheckPolicy, EmptyFilterPolicy},
    paginate::Paginator,
    query::{
        BillClientNetworkQuery, BillQuery, ClientQuery, IssueQuery, LegislatorQuery, NetworkQuery,
        QuarterLevelNetworkQuery, Query, ReportQuery, TextQuery,
    },
    types::{ResourceKind, Response},
    Error,
};

/// HTTP client for the LobbyView REST API.
///
/// Every endpoint call performs exactly one blocking GET and classifies the
/// result before returning. The client keeps no per-call state; calls made
/// from several threads share the underlying connection pool but are
/// otherwise independent.
pub struct Client {
    http: reqwest::blocking::Client,
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    empty_filter_policy: EmptyFilterPolicy,
}

impl Client {
    /// Validates the token, builds the transport and, if configured, confirms
    /// the token is accepted with one unfiltered `legislators` request.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate_token()?;
        let client = Self::build(&config)?;
        if config.check_connection {
            client.check_connection(config.connection_check_policy)?;
        }
        Ok(client)
    }

    /// Creates a client against a custom base URL with the connectivity check
    /// disabled. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self, Error> {
        Self::new(
            ClientConfig::new(token)
                .with_base_url(base_url)
                .with_check_connection(false),
        )
    }

    fn build(config: &ClientConfig) -> Result<Self, Error> {
        let mut token = HeaderValue::from_str(config.token.trim()).map_err(|_| {
            tracing::error!("API token contains characters not allowed in a header");
            Error::Unauthorized { status: None }
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("token", token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::blocking::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::request_failed(e)
        })?;

        Ok(Self {
            http,
            base_api_url: config.base_url.trim_end_matches('/').to_string(),
            empty_filter_policy: config.empty_filter_policy,
        })
    }

    /// Sends one unfiltered `legislators` request to confirm the token works.
    ///
    /// Bypasses the empty-filter policy.
    pub fn check_connection(&self, policy: ConnectionCheckPolicy) -> Result<(), Error> {
        match self.get(&LegislatorQuery::default()) {
            Ok(_) => {
                tracing::debug!("Connectivity check against {} succeeded", self.base_api_url);
                Ok(())
            }
            Err(e) => match policy {
                ConnectionCheckPolicy::Strict => Err(e),
                ConnectionCheckPolicy::Warn => {
                    tracing::warn!("Connectivity check failed, continuing anyway: {}", e);
                    Ok(())
                }
            },
        }
    }

    fn get_url<Q: Query>(&self, query: &Q) -> Result<Url, Error> {
        let endpoint = format!("{}{}", self.base_api_url, Q::KIND.endpoint());
        let url = Url::parse(&endpoint).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidInput(format!("invalid base URL '{}': {}", self.base_api_url, e))
        })?;
        Ok(query.add_to_url(&url))
    }

    fn get<Q: Query>(&self, query: &Q) -> Result<Response, Error> {
        let url = self.get_url(query)?;
        tracing::debug!("GET {}", url);

        let resp = self.http.get(url).send().map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::request_failed(e)
        })?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::request_failed(e)
        })?;

        classify(Q::KIND, status, &body)
    }

    /// Runs any query against its endpoint, applying the empty-filter policy.
    pub fn fetch<Q: Query>(&self, query: &Q) -> Result<Response, Error> {
        if self.empty_filter_policy == EmptyFilterPolicy::Reject && !query.has_filters() {
            tracing::error!("Refusing unfiltered query against {}", Q::KIND.endpoint());
            return Err(Error::InvalidInput(format!(
                "no filters supplied for {}",
                Q::KIND
            )));
        }
        self.get(query)
    }

    /// Fetches legislators matching the given query.
    pub fn legislators(&self, query: &LegislatorQuery) -> Result<Response, Error> {
        self.fetch(query)
    }

    /// Fetches bills matching the given query.
    pub fn bills(&self, query: &BillQuery) -> Result<Response, Error> {
        self.fetch(query)
    }

    /// Fetches lobbying clients matching the given query.
    pub fn clients(&self, query: &ClientQuery) -> Result<Response, Error> {
        self.fetch(query)
    }

    /// Fetches reports matching the given query.
    pub fn reports(&self, query: &ReportQuery) -> Result<Response, Error> {
        self.fetch(query)
    }

    /// Fetches report issues matching the given query.
    pub fn issues(&self, query: &IssueQuery) -> Result<Response, Error> {
        self.fetch(query)
    }

    /// Fetches yearly client-legislator networks matching the given query.
    pub fn networks(&self, query: &NetworkQuery) -> Result<Response, Error> {
        self.fetch(query)
    }

    /// Fetches issue texts matching the given query.
    pub fn texts(&self, query: &TextQuery) -> Result<Response, Error> {
        self.fetch(query)
    }

    /// Fetches quarterly client-legislator networks matching the given query.
    pub fn quarter_level_networks(
        &self,
        query: &QuarterLevelNetworkQuery,
    ) -> Result<Response, Error> {
        self.fetch(query)
    }

    /// Fetches bill-client networks matching the given query.
    pub fn bill_client_networks(
        &self,
        query: &BillClientNetworkQuery,
    ) -> Result<Response, Error> {
        self.fetch(query)
    }

    /// Iterates every row of every page for `query`, one request per page.
    ///
    /// The page set on `query` is ignored; iteration always starts at page 1.
    pub fn paginate<'a, Q>(
        &'a self,
        query: &Q,
    ) -> Paginator<impl FnMut(u32) -> Result<Response, Error> + 'a>
    where
        Q: Query + Clone + 'a,
    {
        let query = query.clone();
        Paginator::new(move |page| self.fetch(&query.clone().with_page(page)))
    }
}

/// Maps a status code and body onto a page or one of the API error kinds.
pub(crate) fn classify(kind: ResourceKind, status: u16, body: &str) -> Result<Response, Error> {
    match status {
        200 => Response::from_json(kind, body).map_err(|e| {
            tracing::error!("Failed to parse {} page: {} | body: {}", kind, e, truncate_body(body));
            e
        }),
        206 => {
            tracing::error!("Partial content returned for {}", kind);
            Err(Error::PartialContent { status })
        }
        401 => {
            tracing::error!("Unauthorized request for {}", kind);
            Err(Error::Unauthorized {
                status: Some(status),
            })
        }
        429 => {
            tracing::error!("Rate limited while fetching {}", kind);
            Err(Error::TooManyRequests { status })
        }
        _ => {
            let snippet = truncate_body(body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            Err(Error::UnexpectedStatusCode {
                status,
                body: snippet,
            })
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{"data": [{"legislator_id": "M000303", "legislator_full_name": "John McCain"}],
        "currentPage": 1, "totalPage": 1, "totalNumber": 1}"#;

    #[test]
    fn ok_status_decodes_the_page() {
        let resp = classify(ResourceKind::Legislator, 200, PAGE).unwrap();
        assert_eq!(resp.len(), 1);
        assert_eq!(resp.kind(), ResourceKind::Legislator);
    }

    #[test]
    fn known_statuses_map_to_their_variants() {
        assert!(matches!(
            classify(ResourceKind::Bill, 401, ""),
            Err(Error::Unauthorized { status: Some(401) })
        ));
        assert!(matches!(
            classify(ResourceKind::Bill, 429, ""),
            Err(Error::TooManyRequests { status: 429 })
        ));
        assert!(matches!(
            classify(ResourceKind::Bill, 206, PAGE),
            Err(Error::PartialContent { status: 206 })
        ));
    }

    #[test]
    fn other_statuses_are_unexpected() {
        for status in [201, 204, 301, 400, 403, 404, 500, 503] {
            match classify(ResourceKind::Report, status, "oops") {
                Err(Error::UnexpectedStatusCode { status: s, body }) => {
                    assert_eq!(s, status);
                    assert_eq!(body, "oops");
                }
                other => panic!("status {} classified as {:?}", status, other.map(|r| r.len())),
            }
        }
    }

    #[test]
    fn malformed_json_is_a_request_failure() {
        assert!(matches!(
            classify(ResourceKind::Client, 200, "{not valid json}"),
            Err(Error::RequestFailed(_))
        ));
    }

    #[test]
    fn page_past_the_end_is_reported() {
        let body = r#"{"data": [], "currentPage": 5, "totalPage": 2, "totalNumber": 20}"#;
        assert!(matches!(
            classify(ResourceKind::Client, 200, body),
            Err(Error::InvalidPageNumber {
                current_page: 5,
                total_pages: 2
            })
        ));
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundaries() {
        let body = "é".repeat(1500);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert!(snippet.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn bad_tokens_fail_before_any_request() {
        let err = Client::with_base_url("http://127.0.0.1:9", "short").err().unwrap();
        assert!(matches!(err, Error::Unauthorized { status: None }));
    }
}
