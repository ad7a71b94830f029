//! rshtml_abi: C-ABI entry points of the rshtml external scanner.
//!
//! The generated rshtml parser links five `tree_sitter_rshtml_external_scanner_*`
//! symbols. Each one routes through [`RshtmlScanner`] wrapped around the
//! tree-sitter-html scanner, so the whole shim reduces to the adapter's
//! guard-then-delegate behavior: uppercase-led start-tag names are declined,
//! everything else is the HTML scanner's own decision.

mod html;
mod lexer;

pub use html::{HtmlScanner, SERIALIZATION_BUFFER_SIZE};
pub use lexer::{RawLexer, TsLexer};

use std::ffi::{c_char, c_uint, c_void};

use rshtml_scanner::{ExternalScanner, RshtmlScanner, ValidSymbols};

/// The scanner state behind the opaque payload.
type Scanner = RshtmlScanner<HtmlScanner>;

/// Allocate the scanner state for a new parse session.
#[no_mangle]
pub extern "C" fn tree_sitter_rshtml_external_scanner_create() -> *mut c_void {
    Box::into_raw(Box::new(RshtmlScanner::new(HtmlScanner::new()))).cast::<c_void>()
}

/// Release the scanner state.
///
/// # Safety
///
/// `payload` must come from [`tree_sitter_rshtml_external_scanner_create`]
/// and must not be used afterward.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_rshtml_external_scanner_destroy(payload: *mut c_void) {
    drop(Box::from_raw(payload.cast::<Scanner>()));
}

/// Snapshot the scanner state into the runtime's buffer, returning the byte
/// count written.
///
/// # Safety
///
/// `payload` must come from the create entry point; `buffer` must be writable
/// for [`SERIALIZATION_BUFFER_SIZE`] bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_rshtml_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> c_uint {
    let scanner = &mut *payload.cast::<Scanner>();
    let buffer = std::slice::from_raw_parts_mut(buffer.cast::<u8>(), SERIALIZATION_BUFFER_SIZE);
    scanner.serialize(buffer) as c_uint
}

/// Restore scanner state from a snapshot written by the serialize entry
/// point. A zero-length snapshot resets to the initial state.
///
/// # Safety
///
/// `payload` must come from the create entry point; `buffer` must be readable
/// for `length` bytes when `length` is nonzero.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_rshtml_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    let scanner = &mut *payload.cast::<Scanner>();
    let snapshot = if length == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize)
    };
    scanner.deserialize(snapshot);
}

/// Try to recognize an external token at the current position.
///
/// # Safety
///
/// `payload` must come from the create entry point; `lexer` must be the
/// runtime's live lexer; `valid_symbols` must hold one flag per external
/// token.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_rshtml_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TsLexer,
    valid_symbols: *const bool,
) -> bool {
    let scanner = &mut *payload.cast::<Scanner>();
    let mut lexer = RawLexer::from_ptr(lexer);
    scanner.scan(&mut lexer, ValidSymbols::from_raw(valid_symbols))
}
