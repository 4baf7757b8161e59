use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DomainService {
    /// Lists domains. With `params.page == 0` every page is fetched and concatenated.
    async fn list_domains(&self, params: &ListDomainsParameters) -> Result<Vec<Domain>>;
}

#[async_trait]
pub trait RecordService {
    async fn create_record(&self, record: &Record) -> Result<Record>;
    async fn update_record(&self, record: &Record) -> Result<()>;
    async fn delete_record(&self, record_id: i64) -> Result<()>;
    /// Lists the records of a domain. `None` behaves like default parameters.
    async fn list_records(
        &self,
        domain_id: i64,
        params: Option<&ListRecordsParameters>,
    ) -> Result<Vec<Record>>;
}

#[async_trait]
pub trait BindService {
    /// Asks GloboDNS to regenerate its BIND zone files.
    async fn schedule_export(&self) -> Result<ScheduleExport>;
}
