// Re-export the poddle_ndef crate
pub use poddle_ndef::*;

/// Extension trait to turn a decoded message back into something writable,
/// e.g. to copy one tag onto another
pub trait MessageExt {
    fn to_write_request(&self) -> WriteRequest;
}

impl MessageExt for Message {
    fn to_write_request(&self) -> WriteRequest {
        WriteRequest { records: self.records.iter().map(RecordDescription::from).collect() }
    }
}
