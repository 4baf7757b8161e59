use async_trait::async_trait;
use log::debug;
use reqwest::Method;

use super::client::RecordService;
use super::globodns::GloboDnsClient;
use super::models::{ListRecordsParameters, Record, RecordEnvelope};
use super::pagination::collect_pages;
use super::tagged::TaggedRecord;
use crate::error::{Error, Result};

fn check_domain_id(domain_id: i64) -> Result<()> {
    if domain_id < 0 {
        return Err(Error::Validation("domain ID cannot be negative"));
    }
    Ok(())
}

fn check_record_id(record_id: i64) -> Result<()> {
    if record_id < 0 {
        return Err(Error::Validation("record ID cannot be negative"));
    }
    Ok(())
}

#[async_trait]
impl RecordService for GloboDnsClient {
    async fn create_record(&self, record: &Record) -> Result<Record> {
        check_domain_id(record.domain_id)?;

        let request = self
            .request(
                Method::POST,
                &format!("/domains/{}/records.json", record.domain_id),
            )
            .json(&RecordEnvelope { record });

        let created: TaggedRecord = self.send_json(request).await?;
        let created = created.into_created(&record.record_type);
        debug!("created {} record {} ({})", created.record_type, created.name, created.id);
        Ok(created)
    }

    async fn update_record(&self, record: &Record) -> Result<()> {
        check_record_id(record.id)?;

        let request = self
            .request(Method::PUT, &format!("/records/{}.json", record.id))
            .json(&RecordEnvelope { record });

        self.send(request).await?;
        Ok(())
    }

    async fn delete_record(&self, record_id: i64) -> Result<()> {
        check_record_id(record_id)?;

        let request = self.request(Method::DELETE, &format!("/records/{}.json", record_id));
        self.send(request).await?;
        Ok(())
    }

    async fn list_records(
        &self,
        domain_id: i64,
        params: Option<&ListRecordsParameters>,
    ) -> Result<Vec<Record>> {
        check_domain_id(domain_id)?;
        let defaults = ListRecordsParameters::default();
        let params = params.unwrap_or(&defaults);
        params.validate()?;

        collect_pages(params.page, params.max_pages, move |page| {
            self.list_records_page(domain_id, params, page)
        })
        .await
    }
}

impl GloboDnsClient {
    async fn list_records_page(
        &self,
        domain_id: i64,
        params: &ListRecordsParameters,
        page: i32,
    ) -> Result<Vec<Record>> {
        let request = self
            .request(Method::GET, &format!("/domains/{}/records.json", domain_id))
            .query(&params.query_pairs(page));

        let tagged: Vec<TaggedRecord> = self.send_json(request).await?;
        Ok(tagged.into_iter().map(TaggedRecord::into_listed).collect())
    }
}
