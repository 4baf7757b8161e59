use async_trait::async_trait;
use log::info;
use reqwest::Method;

use super::client::BindService;
use super::globodns::GloboDnsClient;
use super::models::ScheduleExport;
use crate::error::Result;

const SCHEDULE_EXPORT_PATH: &str = "/bind9/schedule_export.json";

#[async_trait]
impl BindService for GloboDnsClient {
    async fn schedule_export(&self) -> Result<ScheduleExport> {
        let request = self.request(Method::POST, SCHEDULE_EXPORT_PATH);
        let export: ScheduleExport = self.send_json(request).await?;
        info!("bind export: {}", export.output);
        Ok(export)
    }
}
