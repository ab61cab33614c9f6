pub mod stream;

use stream::{Stream, StreamExt as _};
use tracing::{debug, trace};
use winnow::{
    ModalResult, Parser,
    binary::{
        Endianness,
        bits::{bits, bool as take_bool, take as take_bits},
    },
    error::{ContextError, ErrMode, Needed},
    token::{any, take},
};

use crate::{
    error::{NdefError, Result},
    header::NdefHeader,
    record::NdefRecord,
    tnf::{TNF_RESERVED, Tnf},
};

/// One record as laid out on the wire, possibly a single chunk of a larger record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChunk {
    pub header: NdefHeader,
    pub type_: Vec<u8>,
    pub id: Vec<u8>,
    pub payload: Vec<u8>,
}

/// Split a raw NDEF message into its records, reassembling chunked ones
///
/// An empty buffer holds no records. Anything that does not form a
/// well-formed message, including bytes after the final record, is an error.
pub fn parse_message(bytes: &[u8]) -> Result<Vec<NdefRecord>> {
    if bytes.is_empty() {
        debug!("empty ndef message");
        return Ok(Vec::new());
    }

    let mut input = stream::new(bytes);
    let chunks = parse_record_chunks(&mut input).map_err(parse_error)?;

    if !input.is_empty() {
        return Err(NdefError::malformed(format!(
            "{} bytes of trailing data after the last record",
            input.len()
        )));
    }

    let records = assemble_records(chunks)?;
    debug!(records = records.len(), bytes = bytes.len(), "parsed ndef message");

    Ok(records)
}

/// Parse chunks up to and including the one flagged as message end
pub fn parse_record_chunks(input: &mut Stream<'_>) -> ModalResult<Vec<RecordChunk>> {
    let mut chunks = Vec::new();

    loop {
        let chunk = parse_record_chunk.parse_next(input)?;
        let message_end = chunk.header.message_end;
        chunks.push(chunk);

        if message_end {
            break;
        }
    }

    Ok(chunks)
}

pub fn parse_record_chunk(input: &mut Stream<'_>) -> ModalResult<RecordChunk> {
    let header = parse_header.parse_next(input)?;
    let type_ = parse_bytes(input, header.type_length as usize)?;
    let id = parse_bytes(input, header.id_length.unwrap_or(0) as usize)?;
    let payload = parse_bytes(input, header.payload_length as usize)?;

    trace!(?header, "parsed record chunk");

    Ok(RecordChunk { header, type_, id, payload })
}

// private
fn parse_header_byte(input: &mut Stream<'_>) -> ModalResult<(bool, bool, bool, bool, bool, u8)> {
    bits::<_, _, ErrMode<ContextError>, _, _>((
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bits(3_u8),
    ))
    .parse_next(input)
}

fn parse_header(input: &mut Stream<'_>) -> ModalResult<NdefHeader> {
    let (message_begin, message_end, chunked, short_record, has_id_length, type_name_format) =
        parse_header_byte(input)?;

    let type_length = winnow::binary::u8.parse_next(input)?;

    let payload_length = if short_record {
        any.map(|x: u8| x as u32).parse_next(input)?
    } else {
        winnow::binary::u32(Endianness::Big).parse_next(input)?
    };

    let id_length = if has_id_length { Some(any.parse_next(input)?) } else { None };

    Ok(NdefHeader {
        message_begin,
        message_end,
        chunked,
        short_record,
        has_id_length,
        type_name_format,
        type_length,
        payload_length,
        id_length,
    })
}

fn parse_bytes(input: &mut Stream<'_>, length: usize) -> ModalResult<Vec<u8>> {
    take(length).map(|s: &[u8]| s.to_vec()).parse_next(input)
}

fn parse_error(error: ErrMode<ContextError>) -> NdefError {
    match error {
        ErrMode::Incomplete(Needed::Size(needed)) => {
            NdefError::malformed(format!("message is truncated, {needed} more bytes needed"))
        }
        ErrMode::Incomplete(Needed::Unknown) => NdefError::malformed("message is truncated"),
        ErrMode::Backtrack(error) | ErrMode::Cut(error) => {
            NdefError::malformed(format!("unable to parse record: {error}"))
        }
    }
}

/// Check the flags across the message and glue chunk sequences back together
fn assemble_records(chunks: Vec<RecordChunk>) -> Result<Vec<NdefRecord>> {
    let mut records = Vec::with_capacity(chunks.len());
    let mut pending: Option<NdefRecord> = None;

    for (index, chunk) in chunks.into_iter().enumerate() {
        let header = &chunk.header;

        match (index, header.message_begin) {
            (0, false) => return Err(NdefError::malformed("first record is missing the MB flag")),
            (1.., true) => {
                return Err(NdefError::malformed(format!("unexpected MB flag on record {index}")));
            }
            _ => {}
        }

        if header.chunked && header.message_end {
            return Err(NdefError::malformed("unexpected ME flag on a non-final chunk"));
        }

        let Some(mut record) = pending.take() else {
            validate_tnf(&chunk)?;

            let chunked = chunk.header.chunked;
            let record = NdefRecord {
                tnf: chunk.header.type_name_format,
                type_: chunk.type_,
                id: chunk.id,
                payload: chunk.payload,
            };

            if chunked {
                trace!(index, "start of chunked record");
                pending = Some(record);
            } else {
                records.push(record);
            }

            continue;
        };

        if header.type_name_format != Tnf::Unchanged.code() {
            return Err(NdefError::malformed("expected TNF unchanged in a non-leading chunk"));
        }

        if header.has_id_length {
            return Err(NdefError::malformed("unexpected IL flag in a non-leading chunk"));
        }

        if header.type_length != 0 {
            return Err(NdefError::malformed("unexpected type in a non-leading chunk"));
        }

        let chunked = header.chunked;
        record.payload.extend_from_slice(&chunk.payload);

        if chunked {
            pending = Some(record);
        } else {
            trace!(index, payload_length = record.payload.len(), "end of chunked record");
            records.push(record);
        }
    }

    if pending.is_some() {
        return Err(NdefError::malformed("message ends inside a chunked record"));
    }

    Ok(records)
}

/// Rules on the leading chunk, or on an unchunked record
fn validate_tnf(chunk: &RecordChunk) -> Result<()> {
    let tnf = chunk.header.type_name_format;

    if tnf == Tnf::Empty.code() {
        if !chunk.type_.is_empty() || !chunk.id.is_empty() || !chunk.payload.is_empty() {
            return Err(NdefError::malformed("unexpected data in an empty record"));
        }
    } else if tnf == Tnf::Unknown.code() || tnf == TNF_RESERVED {
        if !chunk.type_.is_empty() {
            return Err(NdefError::malformed("unexpected type in an unknown or reserved record"));
        }
    } else if tnf == Tnf::Unchanged.code() {
        return Err(NdefError::malformed(
            "unexpected TNF unchanged in a leading chunk or unchunked record",
        ));
    }

    Ok(())
}
