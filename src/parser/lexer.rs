//! Logos-based lexer for type signatures.
//!
//! The signature alphabet is tiny: dotted words plus the three punctuators
//! `[`, `,`, `]`. Whitespace between tokens is skipped; any other character
//! is a lex error reported with its byte offset.

use logos::Logos;

use super::error::SignatureError;

/// A token with its kind, text, and byte offset into the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SigToken,
    pub text: &'a str,
    pub offset: usize,
}

/// Logos token enum for the signature grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
pub enum SigToken {
    /// A type-kind token or dotted enum reference, e.g. `int32`, `self.Color`.
    #[regex(r"[A-Za-z0-9_.]+")]
    Word,

    #[token("[")]
    OpenBracket,

    #[token(",")]
    Comma,

    #[token("]")]
    CloseBracket,
}

/// Tokenize an entire signature.
///
/// Fails on the first character outside the signature alphabet.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, SignatureError> {
    let mut lexer = SigToken::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                text: lexer.slice(),
                offset: lexer.span().start,
            }),
            Err(()) => {
                return Err(SignatureError::IllegalCharacter {
                    offset: lexer.span().start,
                    signature: input.to_owned(),
                });
            }
        }
    }

    Ok(tokens)
}
