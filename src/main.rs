use anyhow::Result;
use globodns::{BindService, Config, DomainService, GloboDnsClient, ListDomainsParameters};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config_file = env::args().nth(1).unwrap_or_else(|| "config.yaml".to_string());
    let config = Config::load(&config_file)?;
    let client = GloboDnsClient::from_config(&config)?;

    let params = ListDomainsParameters {
        query: config.query.clone().unwrap_or_default(),
        max_pages: config.max_pages,
        ..Default::default()
    };
    let domains = client.list_domains(&params).await?;
    info!("{} domains", domains.len());
    for domain in &domains {
        let ttl = domain.ttl_secs().unwrap_or_default();
        info!("{} (id {}, view {}, ttl {})", domain.name, domain.id, domain.view_id, ttl);
    }

    if config.schedule_export {
        let export = client.schedule_export().await?;
        match export.schedule_date {
            Some(date) => info!("Export scheduled for {}", date),
            None => info!("Export requested"),
        }
    }
    Ok(())
}
