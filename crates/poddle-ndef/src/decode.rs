use tracing::{debug, info};

use crate::{
    error::Result,
    message::{Message, TagInfo},
    parser::parse_message,
    record::{NdefRecord, Record},
};

/// What the platform found when it connected to a tag
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum TagTechnology {
    /// NDEF capable, with the message bytes if the tag holds one
    Ndef(Option<Vec<u8>>),
    /// No NDEF message, but the tag can be formatted to hold one
    Formatable,
    /// Neither NDEF capable nor formatable
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct TagSnapshot {
    pub info: TagInfo,
    pub technology: TagTechnology,
}

/// Decode a record list the platform already split out of the message
pub fn decode_records(tag: &TagInfo, records: &[NdefRecord]) -> Result<Message> {
    if records.is_empty() {
        debug!("tag holds no records, using the empty writable message");
        return Ok(Message::empty_writable(tag));
    }

    let records = records.iter().map(Record::decode).collect::<Result<Vec<_>>>()?;
    Ok(Message::new(tag, records))
}

/// Decode a raw NDEF message
pub fn decode_message(tag: &TagInfo, bytes: &[u8]) -> Result<Message> {
    let records = parse_message(bytes)?;
    decode_records(tag, &records)
}

/// Turn one tag event into a message, `None` when the tag can't hold NDEF at all
pub fn decode_tag(tag: &TagSnapshot) -> Result<Option<Message>> {
    let message = match &tag.technology {
        TagTechnology::Ndef(Some(bytes)) => decode_message(&tag.info, bytes)?,
        TagTechnology::Ndef(None) => Message::empty_writable(&tag.info),
        TagTechnology::Formatable => {
            let info = TagInfo { writable: true, ..tag.info.clone() };
            Message::empty_writable(&info)
        }
        TagTechnology::Unsupported => {
            info!(id = %tag.info.formatted_id(), "tag is neither NDEF nor formatable, ignoring");
            return Ok(None);
        }
    };

    Ok(Some(message))
}
