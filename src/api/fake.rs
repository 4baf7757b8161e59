//! In-memory stand-in for [`GloboDnsClient`](super::GloboDnsClient), for
//! testing code that depends on the service traits.

use async_trait::async_trait;

use super::client::{BindService, DomainService, RecordService};
use super::models::*;
use crate::error::{Error, Result};

pub type Handler<A, R> = Box<dyn Fn(A) -> Result<R> + Send + Sync>;
pub type ExportHandler = Box<dyn Fn() -> Result<ScheduleExport> + Send + Sync>;

/// Each operation answers with its handler, or [`Error::NotImplemented`] when unset.
/// An unset export handler answers with an empty [`ScheduleExport`].
#[derive(Default)]
pub struct FakeClient {
    pub export: Option<ExportHandler>,
    pub list_domains: Option<Handler<ListDomainsParameters, Vec<Domain>>>,
    pub create_record: Option<Handler<Record, Record>>,
    pub update_record: Option<Handler<Record, ()>>,
    pub delete_record: Option<Handler<i64, ()>>,
    pub list_records: Option<Handler<(i64, Option<ListRecordsParameters>), Vec<Record>>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_export<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<ScheduleExport> + Send + Sync + 'static,
    {
        self.export = Some(Box::new(f));
        self
    }

    pub fn on_list_domains<F>(mut self, f: F) -> Self
    where
        F: Fn(ListDomainsParameters) -> Result<Vec<Domain>> + Send + Sync + 'static,
    {
        self.list_domains = Some(Box::new(f));
        self
    }

    pub fn on_create_record<F>(mut self, f: F) -> Self
    where
        F: Fn(Record) -> Result<Record> + Send + Sync + 'static,
    {
        self.create_record = Some(Box::new(f));
        self
    }

    pub fn on_update_record<F>(mut self, f: F) -> Self
    where
        F: Fn(Record) -> Result<()> + Send + Sync + 'static,
    {
        self.update_record = Some(Box::new(f));
        self
    }

    pub fn on_delete_record<F>(mut self, f: F) -> Self
    where
        F: Fn(i64) -> Result<()> + Send + Sync + 'static,
    {
        self.delete_record = Some(Box::new(f));
        self
    }

    pub fn on_list_records<F>(mut self, f: F) -> Self
    where
        F: Fn((i64, Option<ListRecordsParameters>)) -> Result<Vec<Record>> + Send + Sync + 'static,
    {
        self.list_records = Some(Box::new(f));
        self
    }
}

fn call<A, R>(handler: &Option<Handler<A, R>>, arg: A) -> Result<R> {
    match handler {
        Some(handler) => handler(arg),
        None => Err(Error::NotImplemented),
    }
}

#[async_trait]
impl BindService for FakeClient {
    async fn schedule_export(&self) -> Result<ScheduleExport> {
        match &self.export {
            Some(handler) => handler(),
            None => Ok(ScheduleExport::default()),
        }
    }
}

#[async_trait]
impl DomainService for FakeClient {
    async fn list_domains(&self, params: &ListDomainsParameters) -> Result<Vec<Domain>> {
        call(&self.list_domains, params.clone())
    }
}

#[async_trait]
impl RecordService for FakeClient {
    async fn create_record(&self, record: &Record) -> Result<Record> {
        call(&self.create_record, record.clone())
    }

    async fn update_record(&self, record: &Record) -> Result<()> {
        call(&self.update_record, record.clone())
    }

    async fn delete_record(&self, record_id: i64) -> Result<()> {
        call(&self.delete_record, record_id)
    }

    async fn list_records(
        &self,
        domain_id: i64,
        params: Option<&ListRecordsParameters>,
    ) -> Result<Vec<Record>> {
        call(&self.list_records, (domain_id, params.cloned()))
    }
}
