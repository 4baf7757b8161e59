use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::serde_utils::{is_default, lenient_ttl, null_as_default};

/// Layout of `schedule_date` in the bind export confirmation.
pub const SCHEDULE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A DNS zone managed by GloboDNS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authority_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub addressing_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_ttl", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_id: i64,
}

impl Domain {
    /// TTL in seconds, if the API sent a parseable one.
    pub fn ttl_secs(&self) -> Option<u32> {
        parse_ttl(self.ttl.as_deref())
    }
}

/// A single resource record belonging to a domain.
///
/// `record_type` is not a body field on list responses: it comes from the key
/// the API nests the record under (see [`TaggedRecord`](super::TaggedRecord)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub record_type: String,
    #[serde(default, deserialize_with = "lenient_ttl", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain_id: i64,
}

impl Record {
    pub fn ttl_secs(&self) -> Option<u32> {
        parse_ttl(self.ttl.as_deref())
    }
}

/// The TTL a resolver would see for `record`: its own, else its domain's, else 0.
pub fn effective_ttl(record: &Record, domain: &Domain) -> u32 {
    record
        .ttl_secs()
        .or_else(|| domain.ttl_secs())
        .unwrap_or_default()
}

fn parse_ttl(ttl: Option<&str>) -> Option<u32> {
    ttl.and_then(|ttl| ttl.trim().parse().ok())
}

/// Request body wrapper for record mutations: `{"record": {...}}`.
#[derive(Debug, Serialize)]
pub(crate) struct RecordEnvelope<'a> {
    pub record: &'a Record,
}

/// Entry of the domain listing: `{"domain": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct DomainEnvelope {
    pub domain: Domain,
}

/// Filters and paging for [`DomainService::list_domains`](super::DomainService::list_domains).
///
/// `page == 0` fetches every page; `per_page == 0` leaves the size to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDomainsParameters {
    pub query: String,
    pub view: String,
    pub reverse: Option<bool>,
    pub page: i32,
    pub per_page: i32,
    /// Upper bound on requests issued while auto-paginating. Unbounded when `None`.
    pub max_pages: Option<u32>,
}

impl ListDomainsParameters {
    pub fn validate(&self) -> Result<()> {
        if self.page < 0 {
            return Err(Error::Validation("page cannot be negative"));
        }
        if self.per_page < 0 {
            return Err(Error::Validation("domains per page cannot be negative"));
        }
        check_max_pages(self.max_pages)
    }

    pub(crate) fn query_pairs(&self, page: i32) -> Vec<(&'static str, String)> {
        let mut pairs = paging_pairs(page, self.per_page, &self.query, self.reverse);
        if !self.view.is_empty() {
            pairs.push(("view", self.view.clone()));
        }
        pairs
    }
}

/// Filters and paging for [`RecordService::list_records`](super::RecordService::list_records).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRecordsParameters {
    pub query: String,
    pub reverse: Option<bool>,
    pub page: i32,
    pub per_page: i32,
    pub max_pages: Option<u32>,
}

impl ListRecordsParameters {
    pub fn validate(&self) -> Result<()> {
        if self.page < 0 {
            return Err(Error::Validation("page cannot be negative"));
        }
        if self.per_page < 0 {
            return Err(Error::Validation("records per page cannot be negative"));
        }
        check_max_pages(self.max_pages)
    }

    pub(crate) fn query_pairs(&self, page: i32) -> Vec<(&'static str, String)> {
        paging_pairs(page, self.per_page, &self.query, self.reverse)
    }
}

fn check_max_pages(max_pages: Option<u32>) -> Result<()> {
    if max_pages == Some(0) {
        return Err(Error::Validation("page limit must be greater than zero"));
    }
    Ok(())
}

fn paging_pairs(
    page: i32,
    per_page: i32,
    query: &str,
    reverse: Option<bool>,
) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if page != 0 {
        pairs.push(("page", page.to_string()));
    }
    if per_page != 0 {
        pairs.push(("per_page", per_page.to_string()));
    }
    if !query.is_empty() {
        pairs.push(("query", query.to_string()));
    }
    if let Some(reverse) = reverse {
        pairs.push(("reverse", reverse.to_string()));
    }
    pairs
}

/// Confirmation returned when a BIND zone export is scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScheduleExport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub output: String,
    #[serde(default, deserialize_with = "schedule_date")]
    pub schedule_date: Option<DateTime<FixedOffset>>,
}

fn schedule_date<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => DateTime::parse_from_str(&raw, SCHEDULE_DATE_FORMAT)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("schedule_date {raw:?}: {e}"))),
        None => Ok(None),
    }
}
