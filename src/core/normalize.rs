//! Normalization of backend records into the two output shapes.
//!
//! Operates purely on already-fetched data; never reaches the
//! network. Listing entries defend against missing fields with
//! sentinels; the detail path reports a missing name as a
//! `MalformedRecord` error instead of crashing.

use crate::core::error::{Result, VallamError};
use crate::core::types::{FetchResult, SearchResultEntry, StudentRecord};
use serde_json::{json, Value};

const UNKNOWN_NAME: &str = "Unknown";
const MISSING: &str = "N/A";

/// Map backend records to browse-oriented listing entries
pub fn to_listing(records: &[StudentRecord]) -> Vec<SearchResultEntry> {
    records.iter().map(to_entry).collect()
}

fn to_entry(record: &StudentRecord) -> SearchResultEntry {
    let name = record
        .name
        .clone()
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let url = profile_url(&name);

    SearchResultEntry {
        class: or_missing(&record.class_id),
        subject: record
            .subject
            .as_ref()
            .map(|s| json!(s))
            .unwrap_or_else(|| json!(MISSING)),
        score: or_missing(&record.score),
        date: or_missing(&record.date),
        name,
        url,
    }
}

/// Map a full report to the detail shape.
///
/// The record travels verbatim in `data`; `title` requires a name.
pub fn to_detail(record: StudentRecord, student_id: &str) -> Result<FetchResult> {
    let title = record
        .name
        .clone()
        .ok_or_else(|| VallamError::MalformedRecord("report is missing the 'name' field".into()))?;

    Ok(FetchResult {
        id: student_id.to_string(),
        title,
        data: record,
        url: format!("/students/{student_id}"),
    })
}

fn or_missing(field: &Option<Value>) -> Value {
    field.clone().unwrap_or_else(|| json!(MISSING))
}

/// Profile URL: fixed prefix plus the name with spaces replaced
fn profile_url(name: &str) -> String {
    format!("/students/{}", name.replace(' ', "_"))
}
