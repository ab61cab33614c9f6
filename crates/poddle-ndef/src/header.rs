use crate::{
    error::{NdefError, Result},
    record::NdefRecord,
};

pub const FLAG_MESSAGE_BEGIN: u8 = 0b1000_0000;
pub const FLAG_MESSAGE_END: u8 = 0b0100_0000;
pub const FLAG_CHUNKED: u8 = 0b0010_0000;
pub const FLAG_SHORT_RECORD: u8 = 0b0001_0000;
pub const FLAG_ID_LENGTH: u8 = 0b0000_1000;
pub const TNF_MASK: u8 = 0b0000_0111;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    /// Raw 3-bit type name format
    pub type_name_format: u8,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}

impl NdefHeader {
    /// Header for writing `record` unchunked, the short form is used when the payload allows
    pub fn for_record(record: &NdefRecord, message_begin: bool, message_end: bool) -> Result<Self> {
        let type_length = u8::try_from(record.type_.len()).map_err(|_| {
            NdefError::invalid(format!(
                "record type is {} bytes, at most 255 are allowed",
                record.type_.len()
            ))
        })?;

        let id_length = match record.id.len() {
            0 => None,
            len => Some(u8::try_from(len).map_err(|_| {
                NdefError::invalid(format!("record id is {len} bytes, at most 255 are allowed"))
            })?),
        };

        let payload_length = u32::try_from(record.payload.len()).map_err(|_| {
            NdefError::invalid(format!("record payload of {} bytes is too long", record.payload.len()))
        })?;

        Ok(Self {
            message_begin,
            message_end,
            chunked: false,
            short_record: payload_length <= u8::MAX as u32,
            has_id_length: id_length.is_some(),
            type_name_format: record.tnf & TNF_MASK,
            type_length,
            payload_length,
            id_length,
        })
    }

    pub fn flags_byte(&self) -> u8 {
        let mut byte = self.type_name_format & TNF_MASK;

        if self.message_begin {
            byte |= FLAG_MESSAGE_BEGIN;
        }
        if self.message_end {
            byte |= FLAG_MESSAGE_END;
        }
        if self.chunked {
            byte |= FLAG_CHUNKED;
        }
        if self.short_record {
            byte |= FLAG_SHORT_RECORD;
        }
        if self.has_id_length {
            byte |= FLAG_ID_LENGTH;
        }

        byte
    }

    /// Append the flags byte and the length fields, in wire order
    pub fn write(&self, out: &mut Vec<u8>) {
        out.push(self.flags_byte());
        out.push(self.type_length);

        if self.short_record {
            out.push(self.payload_length as u8);
        } else {
            out.extend_from_slice(&self.payload_length.to_be_bytes());
        }

        if let Some(id_length) = self.id_length {
            out.push(id_length);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tnf::Tnf;

    #[test]
    fn short_record_header() {
        let record = NdefRecord::new(Tnf::WellKnown, b"U".to_vec(), vec![], vec![0; 13]);
        let header = NdefHeader::for_record(&record, true, true).unwrap();

        let mut out = Vec::new();
        header.write(&mut out);
        assert_eq!(out, vec![0xD1, 0x01, 0x0D]);
    }

    #[test]
    fn long_record_header_with_id() {
        let record = NdefRecord::new(Tnf::MimeMedia, b"a/b".to_vec(), b"id".to_vec(), vec![0; 300]);
        let header = NdefHeader::for_record(&record, false, true).unwrap();

        assert!(!header.short_record);
        assert_eq!(header.id_length, Some(2));

        let mut out = Vec::new();
        header.write(&mut out);
        assert_eq!(out, vec![0x4A, 0x03, 0x00, 0x00, 0x01, 0x2C, 0x02]);
    }

    #[test]
    fn payload_of_255_bytes_is_still_short() {
        let record = NdefRecord::new(Tnf::MimeMedia, b"a/b".to_vec(), vec![], vec![0; 255]);
        assert!(NdefHeader::for_record(&record, true, true).unwrap().short_record);
    }

    #[test]
    fn oversized_type_or_id_is_rejected() {
        let record = NdefRecord::new(Tnf::ExternalType, vec![b'a'; 256], vec![], vec![]);
        assert!(matches!(
            NdefHeader::for_record(&record, true, true),
            Err(NdefError::InvalidArgument(_))
        ));

        let record = NdefRecord::new(Tnf::ExternalType, b"a".to_vec(), vec![b'i'; 256], vec![]);
        assert!(matches!(
            NdefHeader::for_record(&record, true, true),
            Err(NdefError::InvalidArgument(_))
        ));
    }
}
