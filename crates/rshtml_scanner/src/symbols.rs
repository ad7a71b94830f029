//! External token identifiers and the admissible-symbol mask.
//!
//! The token order matches the external scanner table of tree-sitter-html;
//! the generated rshtml parser hands the scanner a `bool` array indexed by
//! these values.

use thiserror::Error;

/// The external tokens of the wrapped HTML scanner, in table order.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalToken {
    StartTagName,
    ScriptStartTagName,
    StyleStartTagName,
    EndTagName,
    ErroneousEndTagName,
    SelfClosingTagDelimiter,
    ImplicitEndTag,
    RawText,
    Comment,
}

impl ExternalToken {
    /// Number of entries in the external token table.
    pub const COUNT: usize = 9;

    /// All tokens, in table order.
    pub const ALL: [ExternalToken; Self::COUNT] = [
        ExternalToken::StartTagName,
        ExternalToken::ScriptStartTagName,
        ExternalToken::StyleStartTagName,
        ExternalToken::EndTagName,
        ExternalToken::ErroneousEndTagName,
        ExternalToken::SelfClosingTagDelimiter,
        ExternalToken::ImplicitEndTag,
        ExternalToken::RawText,
        ExternalToken::Comment,
    ];

    /// Index of this token in the admissible-symbol array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A `result_symbol` value that does not name an external token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no external token with id {0}")]
pub struct UnknownTokenError(pub u16);

impl TryFrom<u16> for ExternalToken {
    type Error = UnknownTokenError;

    fn try_from(id: u16) -> Result<Self, UnknownTokenError> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(UnknownTokenError(id))
    }
}

/// The set of external tokens the grammar currently admits.
///
/// Borrowed view of the runtime's `bool` array; the scanner uses it to
/// disambiguate which token kinds it may produce at the current position.
#[derive(Debug, Clone, Copy)]
pub struct ValidSymbols<'a> {
    flags: &'a [bool],
}

impl<'a> ValidSymbols<'a> {
    /// Wrap a flag slice. Slices shorter than the token table are allowed;
    /// missing entries read as inadmissible.
    pub fn new(flags: &'a [bool]) -> Self {
        Self { flags }
    }

    /// Build the view from the raw array the parser runtime passes in.
    ///
    /// # Safety
    ///
    /// `flags` must point to at least [`ExternalToken::COUNT`] readable
    /// `bool`s that stay valid for `'a`.
    pub unsafe fn from_raw(flags: *const bool) -> Self {
        Self {
            flags: std::slice::from_raw_parts(flags, ExternalToken::COUNT),
        }
    }

    /// Whether the grammar currently admits `token`.
    #[inline]
    pub fn contains(&self, token: ExternalToken) -> bool {
        self.flags.get(token.index()).copied().unwrap_or(false)
    }

    /// The raw flag array, for handing to a delegated scanner.
    #[inline]
    pub fn as_ptr(&self) -> *const bool {
        self.flags.as_ptr()
    }
}
