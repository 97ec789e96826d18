//! Adapters for logging render summaries through `slog`.
//!
//! [`MarkStats`] and [`RenderSummary`] implement `slog::Value` by serializing
//! themselves to JSON and emitting it via `slog`'s nested-value support. Both
//! types carry ids and counters only, so the records never contain message
//! text, redacted or not.
//!
//! Serialization failures are logged as a placeholder string rather than
//! returned to `slog`.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::diff::MarkStats;
use crate::render::RenderSummary;

/// A `slog::Value` that emits a summary as structured JSON.
pub struct SummaryJson {
    value: JsonValue,
}

impl SummaryJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for SummaryJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts render summaries into a `slog::Value`.
pub trait IntoSummaryJson: Serialize {
    /// Serializes `self` to JSON.
    ///
    /// If that fails, the value is the string
    /// `"Failed to serialize render summary"`.
    fn to_summary_json(&self) -> SummaryJson {
        let value = serde_json::to_value(self).unwrap_or_else(|_| {
            JsonValue::String("Failed to serialize render summary".to_string())
        });
        SummaryJson::new(value)
    }
}

impl IntoSummaryJson for MarkStats {}
impl IntoSummaryJson for RenderSummary {}

impl SlogValue for MarkStats {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        SlogValue::serialize(&self.to_summary_json(), record, key, serializer)
    }
}

impl SlogValue for RenderSummary {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        SlogValue::serialize(&self.to_summary_json(), record, key, serializer)
    }
}
