use tracing::{debug, warn};

use crate::{
    config::CodecConfig,
    description::{RecordDescription, RecordDraft, WriteRequest},
    error::{NdefError, Result},
    payload::{TextPayload, UriPayload},
    record::NdefRecord,
    tnf::{RecordKind, Tnf},
    writer::write_message,
};

/// Build a single record from a filled-in description
pub fn build_record(draft: RecordDraft) -> Result<NdefRecord> {
    let RecordDraft { tnf: label, id, type_, language_code, payload } = draft;

    let Some(tnf) = Tnf::from_label(&label) else {
        warn!(%label, "unrecognised tnf label, writing an unknown record");
        return Ok(NdefRecord::new(Tnf::Unknown, Vec::new(), id.into_bytes(), payload.into_bytes()));
    };

    let record = match RecordKind::classify(tnf, type_.as_bytes()) {
        RecordKind::Empty => {
            if !id.is_empty() || !type_.is_empty() || !payload.is_empty() {
                warn!("empty records carry no id, type or payload, dropping them");
            }

            NdefRecord::new(Tnf::Empty, Vec::new(), Vec::new(), Vec::new())
        }

        RecordKind::WellKnownText => {
            let payload = TextPayload::encode(&language_code, &payload)?;
            NdefRecord::new(tnf, type_.into_bytes(), id.into_bytes(), payload)
        }

        RecordKind::WellKnownUri => {
            let payload = UriPayload::encode(&payload);
            NdefRecord::new(tnf, type_.into_bytes(), id.into_bytes(), payload)
        }

        RecordKind::WellKnown
        | RecordKind::MimeMedia
        | RecordKind::AbsoluteUri
        | RecordKind::ExternalType => {
            NdefRecord::new(tnf, type_.into_bytes(), id.into_bytes(), payload.into_bytes())
        }

        RecordKind::Unchanged => {
            return Err(NdefError::invalid(
                "records are not allowed to have their tnf set to unchanged",
            ));
        }

        RecordKind::Unknown => {
            NdefRecord::new(Tnf::Unknown, Vec::new(), id.into_bytes(), payload.into_bytes())
        }
    };

    Ok(record)
}

/// Build every record, the first bad description fails the whole batch
pub fn build_records(
    descriptions: Vec<RecordDescription>,
    config: &CodecConfig,
) -> Result<Vec<NdefRecord>> {
    descriptions
        .into_iter()
        .enumerate()
        .map(|(index, description)| {
            description.into_draft(config).and_then(build_record).map_err(|error| match error {
                NdefError::InvalidArgument(reason) => {
                    NdefError::InvalidArgument(format!("record {index}: {reason}"))
                }
                error => error,
            })
        })
        .collect()
}

/// Encode application record descriptions into a raw NDEF message
pub fn encode_records(
    descriptions: Vec<RecordDescription>,
    config: &CodecConfig,
) -> Result<Vec<u8>> {
    let records = build_records(descriptions, config)?;
    let bytes = write_message(&records)?;

    debug!(records = records.len(), bytes = bytes.len(), "encoded ndef message");
    Ok(bytes)
}

/// Encode a `{"records": [...]}` key-value write request
pub fn encode_value(value: &serde_json::Value, config: &CodecConfig) -> Result<Vec<u8>> {
    let request = WriteRequest::from_value(value)?;
    encode_records(request.records, config)
}

pub fn encode_json(json: &str, config: &CodecConfig) -> Result<Vec<u8>> {
    let value = serde_json::from_str(json)
        .map_err(|error| NdefError::invalid(format!("write request is not valid json: {error}")))?;

    encode_value(&value, config)
}
