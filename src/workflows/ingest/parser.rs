use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use std::io::Read;

/// Deserialize one CSV table with whitespace-trimmed fields and headers.
pub(crate) fn parse_rows<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader.deserialize::<T>().collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateRow {
    pub(crate) id: String,
    pub(crate) full_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubtypeRow {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) disability_type_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BarrierRow {
    pub(crate) id: String,
    pub(crate) description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccessibilityRow {
    pub(crate) id: String,
    pub(crate) description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobRow {
    pub(crate) id: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) posted_on: Option<String>,
}

impl JobRow {
    /// Posting date, `None` when the column is blank or unparseable.
    pub(crate) fn posted_date(&self) -> Option<NaiveDate> {
        self.posted_on
            .as_deref()
            .and_then(parse_datetime)
            .map(|dt| dt.date())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateSubtypeRow {
    pub(crate) candidate_id: String,
    pub(crate) subtype_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateBarrierRow {
    pub(crate) candidate_id: String,
    pub(crate) subtype_id: String,
    pub(crate) barrier_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResolutionRow {
    pub(crate) barrier_id: String,
    pub(crate) accessibility_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobSubtypeRow {
    pub(crate) job_id: String,
    pub(crate) subtype_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobAccessibilityRow {
    pub(crate) job_id: String,
    pub(crate) accessibility_id: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
