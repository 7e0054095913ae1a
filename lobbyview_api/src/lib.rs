//! Blocking client for the LobbyView REST API on legislative lobbying activity.
//!
//! Build a typed query, hand it to a [`Client`] endpoint method and get back a
//! validated [`Response`] page, or drain every page lazily with
//! [`Client::paginate`].
//!
//! ```no_run
//! use lobbyview_api::{Client, ClientConfig, LegislatorQuery};
//!
//! let client = Client::new(ClientConfig::from_env()?)?;
//! let page = client.legislators(
//!     &LegislatorQuery::default()
//!         .with_first_name("John")
//!         .with_last_name("McCain"),
//! )?;
//! println!("{}", page);
//! # Ok::<(), lobbyview_api::Error>(())
//! ```

mod client;
pub mod config;
mod errors;
mod paginate;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, ConnectionCheckPolicy, EmptyFilterPolicy};
pub use self::errors::{BoxError, Error};
pub use self::paginate::Paginator;
pub use self::query::{
    BillClientNetworkQuery, BillQuery, ClientQuery, FilterValue, IssueQuery, LegislatorQuery,
    NetworkQuery, Operator, Predicate, PredicateList, QuarterLevelNetworkQuery, Query,
    QueryCommon, ReportQuery, TextQuery,
};
