//! rshtml_scanner: External scanner for the rshtml template grammar.
//!
//! The rshtml grammar reuses tree-sitter-html's external scanner for all of
//! its HTML lexing (tag names, raw text, comments, implicit end tags). The
//! one place it diverges: a tag name may not start with an uppercase ASCII
//! letter, because uppercase-led tags are component invocations that the
//! grammar parses with its own rules.
//!
//! This crate models that contract without any FFI:
//! - The [`Lexer`] cursor interface and the [`ExternalScanner`] contract
//! - The external token table and admissible-symbol mask ([`ExternalToken`],
//!   [`ValidSymbols`])
//! - The guard-then-delegate adapter itself ([`RshtmlScanner`])
//!
//! The C-ABI boundary that links the real HTML scanner lives in `rshtml_abi`.

mod lexer;
mod scanner;
mod symbols;

pub use lexer::{Lexer, SliceLexer};
pub use scanner::{is_component_tag_start, ExternalScanner, RshtmlScanner};
pub use symbols::{ExternalToken, UnknownTokenError, ValidSymbols};
