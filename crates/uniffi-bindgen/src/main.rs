// Generates the Kotlin bindings used by the Android plugin, e.g.
// cargo run -p uniffi-bindgen -- generate --library target/debug/libpoddle_nfc.so --language kotlin --out-dir out
fn main() {
    uniffi::uniffi_bindgen_main();
}
