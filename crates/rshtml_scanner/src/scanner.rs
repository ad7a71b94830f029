//! The external-scanner contract and the rshtml tag-name guard.

use crate::lexer::Lexer;
use crate::symbols::{ExternalToken, ValidSymbols};

/// The external-scanner contract of the parser runtime.
///
/// Creation and destruction are `new` and `Drop` on the implementing type;
/// the runtime's serialize/deserialize/scan calls map to the three methods.
pub trait ExternalScanner {
    /// The cursor type this scanner drives.
    type Lexer: Lexer;

    /// Try to recognize a token at the current position. Returns whether a
    /// token was produced; on success the result symbol and consumed span are
    /// recorded through the lexer.
    fn scan(&mut self, lexer: &mut Self::Lexer, valid: ValidSymbols<'_>) -> bool;

    /// Write a snapshot of the internal state into `buffer`, returning the
    /// number of bytes written. The snapshot format is the scanner's own.
    fn serialize(&mut self, buffer: &mut [u8]) -> usize;

    /// Restore internal state from a snapshot previously produced by
    /// [`serialize`](ExternalScanner::serialize). An empty snapshot resets.
    fn deserialize(&mut self, snapshot: &[u8]);
}

/// Whether `c` opens a component tag rather than an HTML tag name.
///
/// Fixed grammar policy: component invocations are uppercase-led
/// (`<MyWidget>`) and are parsed by the grammar's own rules, so the
/// external scanner must not claim them as tag names.
#[inline]
pub fn is_component_tag_start(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// The rshtml external scanner: tree-sitter-html's scanner with start-tag
/// names narrowed to exclude uppercase-led identifiers.
///
/// Every operation delegates to the wrapped scanner. The single override:
/// when a start-tag name is admissible and the lookahead is `'A'..='Z'`,
/// `scan` declines immediately, consuming nothing and leaving the wrapped
/// scanner untouched.
pub struct RshtmlScanner<S> {
    inner: S,
}

impl<S> RshtmlScanner<S> {
    /// Wrap a scanner.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped scanner.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// The wrapped scanner, mutably.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap, returning the inner scanner.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ExternalScanner> ExternalScanner for RshtmlScanner<S> {
    type Lexer = S::Lexer;

    fn scan(&mut self, lexer: &mut Self::Lexer, valid: ValidSymbols<'_>) -> bool {
        if valid.contains(ExternalToken::StartTagName) {
            if let Some(c) = lexer.lookahead() {
                if is_component_tag_start(c) {
                    return false;
                }
            }
        }
        self.inner.scan(lexer, valid)
    }

    fn serialize(&mut self, buffer: &mut [u8]) -> usize {
        self.inner.serialize(buffer)
    }

    fn deserialize(&mut self, snapshot: &[u8]) {
        self.inner.deserialize(snapshot)
    }
}
