mod common;
pub use self::common::{FilterValue, Operator, Predicate, PredicateList, Query, QueryCommon};

mod legislator;
pub use self::legislator::LegislatorQuery;

mod bill;
pub use self::bill::BillQuery;

mod client;
pub use self::client::ClientQuery;

mod report;
pub use self::report::ReportQuery;

mod issue;
pub use self::issue::{IssueQuery, TextQuery};

mod network;
pub use self::network::{NetworkQuery, QuarterLevelNetworkQuery};

mod bill_client_network;
pub use self::bill_client_network::BillClientNetworkQuery;
