//! Generates foreign bindings for `cryptobuf-ffi`.
//!
//! ```text
//! cargo run -p embedded-uniffi-bindgen -- generate \
//!     --library target/release/libcryptobuf_ffi.so --language kotlin --out-dir bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
