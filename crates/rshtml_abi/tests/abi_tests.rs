//! ABI integration tests.
//!
//! These run against the real tree-sitter-html scanner compiled into the
//! link, driving it through a handcrafted `TSLexer` backed by an in-memory
//! character buffer.

use std::ffi::c_char;

use rshtml_abi::{
    tree_sitter_rshtml_external_scanner_create, tree_sitter_rshtml_external_scanner_destroy,
    tree_sitter_rshtml_external_scanner_scan, tree_sitter_rshtml_external_scanner_serialize,
    HtmlScanner, RawLexer, TsLexer, SERIALIZATION_BUFFER_SIZE,
};
use rshtml_scanner::{ExternalScanner, ExternalToken, Lexer, RshtmlScanner, ValidSymbols};

/// A `TSLexer` over an in-memory buffer. The C struct sits first so callback
/// pointers can be cast back to the container.
#[repr(C)]
struct TestLexer {
    raw: TsLexer,
    chars: Vec<char>,
    pos: usize,
}

unsafe extern "C" fn advance(lexer: *mut TsLexer, _skip: bool) {
    let this = &mut *lexer.cast::<TestLexer>();
    if this.pos < this.chars.len() {
        this.pos += 1;
    }
    this.raw.lookahead = this.chars.get(this.pos).map_or(0, |&c| c as i32);
}

unsafe extern "C" fn mark_end(_lexer: *mut TsLexer) {}

unsafe extern "C" fn get_column(_lexer: *mut TsLexer) -> u32 {
    0
}

unsafe extern "C" fn is_at_included_range_start(_lexer: *const TsLexer) -> bool {
    false
}

unsafe extern "C" fn eof(lexer: *const TsLexer) -> bool {
    let this = &*lexer.cast::<TestLexer>();
    this.pos >= this.chars.len()
}

impl TestLexer {
    fn new(text: &str) -> Box<Self> {
        let chars: Vec<char> = text.chars().collect();
        let lookahead = chars.first().map_or(0, |&c| c as i32);
        Box::new(TestLexer {
            raw: TsLexer {
                lookahead,
                result_symbol: 0,
                advance: Some(advance),
                mark_end: Some(mark_end),
                get_column: Some(get_column),
                is_at_included_range_start: Some(is_at_included_range_start),
                eof: Some(eof),
                log: None,
            },
            chars,
            pos: 0,
        })
    }

    fn as_ptr(&mut self) -> *mut TsLexer {
        &mut self.raw
    }

    fn result_token(&self) -> ExternalToken {
        ExternalToken::try_from(self.raw.result_symbol).unwrap()
    }
}

/// Helper: a symbol mask with exactly the given tokens admissible.
fn mask(tokens: &[ExternalToken]) -> [bool; ExternalToken::COUNT] {
    let mut flags = [false; ExternalToken::COUNT];
    for token in tokens {
        flags[token.index()] = true;
    }
    flags
}

#[test]
fn test_create_destroy_balance() {
    let payload = tree_sitter_rshtml_external_scanner_create();
    assert!(!payload.is_null());
    unsafe { tree_sitter_rshtml_external_scanner_destroy(payload) };
}

#[test]
fn test_fresh_state_snapshot_roundtrip() {
    let mut first = HtmlScanner::new();
    let mut second = HtmlScanner::new();

    let mut buffer = [0u8; SERIALIZATION_BUFFER_SIZE];
    let written = first.serialize(&mut buffer);
    assert!(written <= SERIALIZATION_BUFFER_SIZE);

    second.deserialize(&buffer[..written]);
    let mut buffer2 = [0u8; SERIALIZATION_BUFFER_SIZE];
    let written2 = second.serialize(&mut buffer2);
    assert_eq!(&buffer[..written], &buffer2[..written2]);
}

#[test]
fn test_scan_lowercase_start_tag_delegates() {
    let flags = mask(&[ExternalToken::StartTagName]);
    let mut scanner = RshtmlScanner::new(HtmlScanner::new());
    let mut lexer = TestLexer::new("header>");
    let mut raw = unsafe { RawLexer::from_ptr(lexer.as_ptr()) };

    assert!(scanner.scan(&mut raw, ValidSymbols::new(&flags)));
    assert_eq!(lexer.result_token(), ExternalToken::StartTagName);
    // The tag name was consumed up to the '>'.
    assert_eq!(lexer.pos, "header".len());
}

#[test]
fn test_scan_uppercase_start_tag_is_declined() {
    let flags = mask(&[ExternalToken::StartTagName]);
    let payload = tree_sitter_rshtml_external_scanner_create();
    let mut lexer = TestLexer::new("Header>");

    let produced = unsafe {
        tree_sitter_rshtml_external_scanner_scan(payload, lexer.as_ptr(), flags.as_ptr())
    };
    assert!(!produced);
    // Cursor untouched: the wrapped scanner was never consulted.
    assert_eq!(lexer.pos, 0);
    assert_eq!(lexer.raw.lookahead, 'H' as i32);

    unsafe { tree_sitter_rshtml_external_scanner_destroy(payload) };
}

#[test]
fn test_uppercase_without_start_tag_symbol_delegates() {
    let mut scanner = RshtmlScanner::new(HtmlScanner::new());

    // Enter a raw-text element so the wrapped scanner expects text content.
    let flags = mask(&[ExternalToken::StartTagName, ExternalToken::StyleStartTagName]);
    let mut lexer = TestLexer::new("style>");
    let mut raw = unsafe { RawLexer::from_ptr(lexer.as_ptr()) };
    assert!(scanner.scan(&mut raw, ValidSymbols::new(&flags)));
    assert_eq!(lexer.result_token(), ExternalToken::StyleStartTagName);

    // Uppercase lookahead, but start-tag name inadmissible: the wrapped
    // scanner decides and recognizes the raw text instead.
    let flags = mask(&[ExternalToken::RawText]);
    let mut lexer = TestLexer::new("Header {}</style>");
    let mut raw = unsafe { RawLexer::from_ptr(lexer.as_ptr()) };
    assert!(scanner.scan(&mut raw, ValidSymbols::new(&flags)));
    assert_eq!(lexer.result_token(), ExternalToken::RawText);
    assert!(lexer.pos > 0);
}

#[test]
fn test_snapshot_restores_open_tag_stack() {
    let flags_start = mask(&[ExternalToken::StartTagName]);
    let flags_end = mask(&[ExternalToken::EndTagName]);

    // Open a <div> so the wrapped scanner has a tag on its stack.
    let mut opened = RshtmlScanner::new(HtmlScanner::new());
    let mut lexer = TestLexer::new("div>");
    let mut raw = unsafe { RawLexer::from_ptr(lexer.as_ptr()) };
    assert!(opened.scan(&mut raw, ValidSymbols::new(&flags_start)));

    let mut snapshot = [0u8; SERIALIZATION_BUFFER_SIZE];
    let written = opened.serialize(&mut snapshot);
    assert!(written > 0);

    // A restored scanner matches the end tag against the reopened stack.
    let mut restored = RshtmlScanner::new(HtmlScanner::new());
    restored.deserialize(&snapshot[..written]);
    let mut lexer = TestLexer::new("div>");
    let mut raw = unsafe { RawLexer::from_ptr(lexer.as_ptr()) };
    assert!(restored.scan(&mut raw, ValidSymbols::new(&flags_end)));
    assert_eq!(lexer.result_token(), ExternalToken::EndTagName);

    // A fresh scanner has no matching open tag for the same input.
    let mut fresh = RshtmlScanner::new(HtmlScanner::new());
    let mut lexer = TestLexer::new("div>");
    let mut raw = unsafe { RawLexer::from_ptr(lexer.as_ptr()) };
    assert!(fresh.scan(&mut raw, ValidSymbols::new(&flags_end)));
    assert_eq!(lexer.result_token(), ExternalToken::ErroneousEndTagName);
}

#[test]
fn test_serialize_entry_point_uses_runtime_buffer() {
    let payload = tree_sitter_rshtml_external_scanner_create();
    let mut buffer = [0 as c_char; SERIALIZATION_BUFFER_SIZE];

    let written =
        unsafe { tree_sitter_rshtml_external_scanner_serialize(payload, buffer.as_mut_ptr()) };
    assert!((written as usize) <= SERIALIZATION_BUFFER_SIZE);

    unsafe { tree_sitter_rshtml_external_scanner_destroy(payload) };
}

#[test]
fn test_raw_lexer_reports_runtime_cursor() {
    let mut lexer = TestLexer::new("ab");
    let mut raw = unsafe { RawLexer::from_ptr(lexer.as_ptr()) };

    assert_eq!(raw.lookahead(), Some('a'));
    raw.advance(false);
    assert_eq!(raw.lookahead(), Some('b'));
    raw.advance(false);
    assert!(raw.eof());
    assert_eq!(raw.lookahead(), None);
}
