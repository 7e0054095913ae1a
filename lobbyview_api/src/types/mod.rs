mod bill;
pub use self::bill::BillId;

mod envelope;
pub use self::envelope::{RawPage, Response};

mod resource;
pub use self::resource::{field, ResourceKind, ResourceSpec};

/// A single record as decoded from JSON. Fields are never interpreted beyond rendering.
pub type Row = serde_json::Map<String, serde_json::Value>;
