//! The runtime's lexer struct and its bridge to the [`Lexer`] trait.

use std::ffi::c_char;

use rshtml_scanner::Lexer;

/// C-layout mirror of tree-sitter's `TSLexer`, as declared in
/// `tree_sitter/parser.h`. The runtime owns instances of this struct; the
/// scanner only reads `lookahead`, writes `result_symbol`, and calls through
/// the function pointers.
#[repr(C)]
pub struct TsLexer {
    /// The next unconsumed code point, `0` at end of input.
    pub lookahead: i32,
    /// Set by the scanner to the external token it recognized.
    pub result_symbol: u16,
    pub advance: Option<unsafe extern "C" fn(*mut TsLexer, bool)>,
    pub mark_end: Option<unsafe extern "C" fn(*mut TsLexer)>,
    pub get_column: Option<unsafe extern "C" fn(*mut TsLexer) -> u32>,
    pub is_at_included_range_start: Option<unsafe extern "C" fn(*const TsLexer) -> bool>,
    pub eof: Option<unsafe extern "C" fn(*const TsLexer) -> bool>,
    pub log: Option<unsafe extern "C" fn(*const TsLexer, *const c_char, ...)>,
}

/// [`Lexer`] over a runtime-owned `TSLexer`.
pub struct RawLexer {
    raw: *mut TsLexer,
}

impl RawLexer {
    /// Wrap the lexer the runtime passed to a scan call.
    ///
    /// # Safety
    ///
    /// `raw` must point to a live `TSLexer` with its function pointers set,
    /// and stay valid for the lifetime of the returned value.
    pub unsafe fn from_ptr(raw: *mut TsLexer) -> Self {
        Self { raw }
    }

    /// The underlying pointer, for delegating a scan over the ABI.
    #[inline]
    pub fn as_ptr(&self) -> *mut TsLexer {
        self.raw
    }

    #[inline]
    fn get(&self) -> &TsLexer {
        unsafe { &*self.raw }
    }
}

impl Lexer for RawLexer {
    fn lookahead(&self) -> Option<char> {
        if self.eof() {
            return None;
        }
        u32::try_from(self.get().lookahead)
            .ok()
            .and_then(char::from_u32)
    }

    fn advance(&mut self, skip: bool) {
        if let Some(advance) = self.get().advance {
            unsafe { advance(self.raw, skip) }
        }
    }

    fn mark_end(&mut self) {
        if let Some(mark_end) = self.get().mark_end {
            unsafe { mark_end(self.raw) }
        }
    }

    fn eof(&self) -> bool {
        match self.get().eof {
            Some(eof) => unsafe { eof(self.raw) },
            None => self.get().lookahead == 0,
        }
    }
}
