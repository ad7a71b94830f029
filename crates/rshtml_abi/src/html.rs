//! The wrapped tree-sitter-html external scanner.
//!
//! The scanner's state machine (tag stack, raw-text elements, comments) is an
//! opaque external capability: the `tree-sitter-html` crate compiles it into
//! the link, and this module only threads its payload through the four
//! lifecycle calls plus scan.

use std::ffi::{c_char, c_uint, c_void};

use rshtml_scanner::{ExternalScanner, ValidSymbols};

use crate::lexer::{RawLexer, TsLexer};

// Pulls the C scanner objects into the link.
use tree_sitter_html as _;

/// Snapshot buffer size the runtime guarantees at serialize/deserialize,
/// tree-sitter's `TREE_SITTER_SERIALIZATION_BUFFER_SIZE`.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

extern "C" {
    fn tree_sitter_html_external_scanner_create() -> *mut c_void;
    fn tree_sitter_html_external_scanner_destroy(payload: *mut c_void);
    fn tree_sitter_html_external_scanner_serialize(
        payload: *mut c_void,
        buffer: *mut c_char,
    ) -> c_uint;
    fn tree_sitter_html_external_scanner_deserialize(
        payload: *mut c_void,
        buffer: *const c_char,
        length: c_uint,
    );
    fn tree_sitter_html_external_scanner_scan(
        payload: *mut c_void,
        lexer: *mut TsLexer,
        valid_symbols: *const bool,
    ) -> bool;
}

/// Owning handle over the HTML scanner's opaque payload.
///
/// The payload is never inspected here; it is created once, passed back to
/// the wrapped scanner on every call, and released on drop.
pub struct HtmlScanner {
    payload: *mut c_void,
}

impl HtmlScanner {
    /// Create a fresh HTML scanner state.
    pub fn new() -> Self {
        Self {
            payload: unsafe { tree_sitter_html_external_scanner_create() },
        }
    }
}

impl Default for HtmlScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HtmlScanner {
    fn drop(&mut self) {
        unsafe { tree_sitter_html_external_scanner_destroy(self.payload) }
    }
}

impl ExternalScanner for HtmlScanner {
    type Lexer = RawLexer;

    fn scan(&mut self, lexer: &mut RawLexer, valid: ValidSymbols<'_>) -> bool {
        unsafe { tree_sitter_html_external_scanner_scan(self.payload, lexer.as_ptr(), valid.as_ptr()) }
    }

    fn serialize(&mut self, buffer: &mut [u8]) -> usize {
        // The wrapped scanner writes without a length argument; it assumes
        // the full runtime buffer is available.
        assert!(buffer.len() >= SERIALIZATION_BUFFER_SIZE);
        unsafe {
            tree_sitter_html_external_scanner_serialize(
                self.payload,
                buffer.as_mut_ptr().cast::<c_char>(),
            ) as usize
        }
    }

    fn deserialize(&mut self, snapshot: &[u8]) {
        unsafe {
            tree_sitter_html_external_scanner_deserialize(
                self.payload,
                snapshot.as_ptr().cast::<c_char>(),
                snapshot.len() as c_uint,
            )
        }
    }
}
