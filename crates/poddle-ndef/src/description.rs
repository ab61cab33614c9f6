use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::CodecConfig,
    error::{NdefError, Result},
    record::Record,
};

/// A record as described by the application, every field may be left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct RecordDescription {
    /// Label such as `"well_known"`, required
    pub tnf: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub language_code: Option<String>,
    pub payload: Option<String>,
}

/// A record description with every default filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub tnf: String,
    pub id: String,
    pub type_: String,
    pub language_code: String,
    pub payload: String,
}

/// The records an application asked to write, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub records: Vec<RecordDescription>,
}

impl RecordDescription {
    pub fn into_draft(self, config: &CodecConfig) -> Result<RecordDraft> {
        let Some(tnf) = self.tnf else {
            return Err(NdefError::invalid("record tnf is missing"));
        };

        Ok(RecordDraft {
            tnf,
            id: self.id.unwrap_or_default(),
            type_: self.type_.unwrap_or_default(),
            language_code: self
                .language_code
                .unwrap_or_else(|| config.default_language_code.clone()),
            payload: self.payload.unwrap_or_default(),
        })
    }
}

impl From<&Record> for RecordDescription {
    fn from(record: &Record) -> Self {
        Self {
            tnf: Some(record.tnf.label().to_string()),
            id: Some(record.id.clone()),
            type_: Some(record.type_.clone()),
            language_code: record.language_code.clone(),
            payload: Some(record.payload.clone()),
        }
    }
}

impl WriteRequest {
    /// Read `{"records": [...]}` from the generic key-value form
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(NdefError::invalid("write request is not a map"));
        };

        let records = match map.get("records") {
            None | Some(Value::Null) => return Err(NdefError::invalid("missing records")),
            Some(Value::Array(records)) => records,
            Some(_) => return Err(NdefError::invalid("map key 'records' is not a list")),
        };

        let records = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                if !record.is_object() {
                    return Err(NdefError::invalid(format!("record {index} is not a map")));
                }

                serde_json::from_value(record.clone())
                    .map_err(|error| NdefError::invalid(format!("record {index}: {error}")))
            })
            .collect::<Result<Vec<RecordDescription>>>()?;

        Ok(Self { records })
    }
}
