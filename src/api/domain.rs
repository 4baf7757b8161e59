use async_trait::async_trait;
use reqwest::Method;

use super::client::DomainService;
use super::globodns::GloboDnsClient;
use super::models::{Domain, DomainEnvelope, ListDomainsParameters};
use super::pagination::collect_pages;
use crate::error::Result;

#[async_trait]
impl DomainService for GloboDnsClient {
    async fn list_domains(&self, params: &ListDomainsParameters) -> Result<Vec<Domain>> {
        params.validate()?;
        collect_pages(params.page, params.max_pages, move |page| {
            self.list_domains_page(params, page)
        })
        .await
    }
}

impl GloboDnsClient {
    async fn list_domains_page(
        &self,
        params: &ListDomainsParameters,
        page: i32,
    ) -> Result<Vec<Domain>> {
        let request = self
            .request(Method::GET, "/domains")
            .query(&params.query_pairs(page));

        let envelopes: Vec<DomainEnvelope> = self.send_json(request).await?;
        Ok(envelopes.into_iter().map(|e| e.domain).collect())
    }
}
