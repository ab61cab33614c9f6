use tracing::debug;

use crate::{
    error::{NdefError, Result},
    header::NdefHeader,
    record::NdefRecord,
};

/// Lay out `records` as one NDEF message, the first flagged MB and the last ME
pub fn write_message(records: &[NdefRecord]) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Err(NdefError::invalid("an NDEF message needs at least one record"));
    }

    let last = records.len() - 1;
    let mut out = Vec::with_capacity(records.iter().map(encoded_len_hint).sum());

    for (index, record) in records.iter().enumerate() {
        write_record(record, index == 0, index == last, &mut out)?;
    }

    debug!(records = records.len(), bytes = out.len(), "wrote ndef message");
    Ok(out)
}

pub fn write_record(
    record: &NdefRecord,
    message_begin: bool,
    message_end: bool,
    out: &mut Vec<u8>,
) -> Result<()> {
    let header = NdefHeader::for_record(record, message_begin, message_end)?;

    header.write(out);
    out.extend_from_slice(&record.type_);
    out.extend_from_slice(&record.id);
    out.extend_from_slice(&record.payload);

    Ok(())
}

// flags + type length + long payload length + id length
fn encoded_len_hint(record: &NdefRecord) -> usize {
    7 + record.type_.len() + record.id.len() + record.payload.len()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{parser::parse_message, tnf::Tnf};

    #[test]
    fn single_record_message() {
        let record =
            NdefRecord::new(Tnf::WellKnown, b"U".to_vec(), vec![], b"\x02example.com".to_vec());
        let bytes = write_message(&[record]).unwrap();

        assert_eq!(&bytes[..4], &[0xD1, 0x01, 0x0C, b'U']);
        assert_eq!(&bytes[4..], b"\x02example.com");
    }

    #[test]
    fn flags_follow_position() {
        let records = vec![
            NdefRecord::new(Tnf::MimeMedia, b"a/b".to_vec(), vec![], b"1".to_vec()),
            NdefRecord::new(Tnf::MimeMedia, b"a/b".to_vec(), b"id".to_vec(), b"2".to_vec()),
            NdefRecord::new(Tnf::MimeMedia, b"a/b".to_vec(), vec![], b"3".to_vec()),
        ];
        let bytes = write_message(&records).unwrap();

        // MB | SR
        assert_eq!(bytes[0], 0x92);
        // SR | IL
        assert_eq!(bytes[7], 0x1A);
        // ME | SR
        assert_eq!(bytes[17], 0x52);

        assert_eq!(parse_message(&bytes).unwrap(), records);
    }

    #[test]
    fn long_payload_uses_four_byte_length() {
        let record = NdefRecord::new(Tnf::MimeMedia, b"a/b".to_vec(), vec![], vec![b'z'; 70_000]);
        let bytes = write_message(std::slice::from_ref(&record)).unwrap();

        assert_eq!(&bytes[..6], &[0xC2, 0x03, 0x00, 0x01, 0x11, 0x70]);
        assert_eq!(bytes.len(), 6 + 3 + 70_000);
        assert_eq!(parse_message(&bytes).unwrap(), vec![record]);
    }

    #[test]
    fn empty_record_list_is_rejected() {
        assert!(matches!(write_message(&[]), Err(NdefError::InvalidArgument(_))));
    }
}
