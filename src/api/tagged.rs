use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

use super::models::Record;

/// Key used by the request envelope. It never names a DNS type.
pub(crate) const RECORD_KEY: &str = "record";

/// A record nested under a single key, e.g. `{"mx": {...}}` or `{"record": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRecord {
    pub tag: String,
    pub record: Record,
}

impl TaggedRecord {
    /// Uppercased DNS type named by the key, unless the key is the neutral wrapper.
    fn type_from_tag(&self) -> Option<String> {
        if self.tag.is_empty() || self.tag.eq_ignore_ascii_case(RECORD_KEY) {
            None
        } else {
            Some(self.tag.to_uppercase())
        }
    }

    /// Listing entries: the key is authoritative for the type.
    pub fn into_listed(self) -> Record {
        let record_type = self.type_from_tag();
        let mut record = self.record;
        if let Some(record_type) = record_type {
            record.record_type = record_type;
        }
        record
    }

    /// Create responses: body type first, then the key, then what was sent.
    pub fn into_created(self, requested_type: &str) -> Record {
        let fallback = self.type_from_tag();
        let mut record = self.record;
        if record.record_type.is_empty() {
            record.record_type = fallback.unwrap_or_else(|| requested_type.to_string());
        }
        record
    }
}

impl<'de> Deserialize<'de> for TaggedRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TaggedRecordVisitor)
    }
}

struct TaggedRecordVisitor;

impl<'de> Visitor<'de> for TaggedRecordVisitor {
    type Value = TaggedRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with exactly one record type key")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let (tag, record) = map
            .next_entry::<String, Record>()?
            .ok_or_else(|| de::Error::custom("record envelope has no type key"))?;

        if let Some(extra) = map.next_key::<String>()? {
            return Err(de::Error::custom(format!(
                "record envelope has more than one key: {tag:?}, {extra:?}"
            )));
        }

        Ok(TaggedRecord { tag, record })
    }
}
