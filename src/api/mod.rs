mod bind;
pub mod client;
mod domain;
pub mod fake;
pub mod globodns;
pub mod models;
pub(crate) mod pagination;
mod record;
pub mod tagged;

pub use client::{BindService, DomainService, RecordService};
pub use fake::FakeClient;
pub use globodns::GloboDnsClient;
pub use models::*;
pub use tagged::TaggedRecord;
