pub mod ffi;
pub mod logging;
pub mod ndef;

uniffi::setup_scaffolding!();
