//! Recursive-descent parser for type signatures.
//!
//! The grammar is `signature := token ( "[" signature ("," signature)* "]" )?`
//! with unbounded nesting. Every kind's arity is validated here, at
//! construction time, so render operations never see a malformed tree.

use super::error::SignatureError;
use super::lexer::{SigToken, Token, tokenize};
use super::node::{ContainerKind, Locality, ScalarKind, TypeNode};

/// Parse a signature string into a [`TypeNode`] tree.
pub fn parse_signature(input: &str) -> Result<TypeNode, SignatureError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(SignatureError::Empty);
    }

    let mut parser = Parser {
        input,
        tokens: &tokens,
        pos: 0,
    };
    let node = parser.parse_node()?;

    match parser.bump() {
        None => Ok(node),
        Some(token) => Err(parser.unexpected(token)),
    }
}

struct Parser<'a, 't> {
    input: &'a str,
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'a> Parser<'a, '_> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn unexpected(&self, token: Token<'a>) -> SignatureError {
        SignatureError::UnexpectedToken {
            found: token.text.to_owned(),
            signature: self.input.to_owned(),
        }
    }

    fn unbalanced(&self) -> SignatureError {
        SignatureError::UnbalancedBrackets {
            signature: self.input.to_owned(),
        }
    }

    fn parse_node(&mut self) -> Result<TypeNode, SignatureError> {
        let word = match self.bump() {
            Some(token) if token.kind == SigToken::Word => token.text,
            Some(token) => return Err(self.unexpected(token)),
            None => return Err(self.unbalanced()),
        };

        if word == "enum" {
            return self.parse_enum_ref();
        }

        let children = match self.peek() {
            Some(token) if token.kind == SigToken::OpenBracket => {
                self.bump();
                self.parse_children()?
            }
            _ => Vec::new(),
        };

        if let Some(kind) = ScalarKind::from_token(word) {
            if !children.is_empty() {
                return Err(SignatureError::Arity {
                    kind: kind.token(),
                    expected: "no parameters",
                    found: children.len(),
                    signature: self.input.to_owned(),
                });
            }
            return Ok(TypeNode::Scalar(kind));
        }

        if let Some(kind) = ContainerKind::from_token(word) {
            let arity = kind.arity();
            if !arity.accepts(children.len()) {
                return Err(SignatureError::Arity {
                    kind: kind.token(),
                    expected: arity.describe(),
                    found: children.len(),
                    signature: self.input.to_owned(),
                });
            }
            return Ok(TypeNode::Container(kind, children));
        }

        Err(SignatureError::UnknownType {
            token: word.to_owned(),
            signature: self.input.to_owned(),
        })
    }

    /// Children of a bracket group, called with the `[` already consumed.
    fn parse_children(&mut self) -> Result<Vec<TypeNode>, SignatureError> {
        let mut children = vec![self.parse_node()?];
        loop {
            match self.bump() {
                Some(token) if token.kind == SigToken::Comma => {
                    children.push(self.parse_node()?);
                }
                Some(token) if token.kind == SigToken::CloseBracket => return Ok(children),
                Some(token) => return Err(self.unexpected(token)),
                None => return Err(self.unbalanced()),
            }
        }
    }

    /// `enum[...]` takes exactly one literal dotted name, never a nested
    /// signature; the name is the enumeration being referenced.
    fn parse_enum_ref(&mut self) -> Result<TypeNode, SignatureError> {
        match self.bump() {
            Some(token) if token.kind == SigToken::OpenBracket => {}
            _ => {
                return Err(SignatureError::Arity {
                    kind: "enum",
                    expected: "exactly 1 parameter",
                    found: 0,
                    signature: self.input.to_owned(),
                });
            }
        }

        let name = match self.bump() {
            Some(token) if token.kind == SigToken::Word => token.text,
            Some(token) if token.kind == SigToken::CloseBracket => {
                return Err(SignatureError::Arity {
                    kind: "enum",
                    expected: "exactly 1 parameter",
                    found: 0,
                    signature: self.input.to_owned(),
                });
            }
            _ => {
                return Err(SignatureError::InvalidEnumRef {
                    signature: self.input.to_owned(),
                });
            }
        };

        match self.bump() {
            Some(token) if token.kind == SigToken::CloseBracket => {}
            Some(token) if token.kind == SigToken::Comma => {
                return Err(SignatureError::Arity {
                    kind: "enum",
                    expected: "exactly 1 parameter",
                    found: 2,
                    signature: self.input.to_owned(),
                });
            }
            Some(_) => {
                // A bracket group after the name: a nested signature, which
                // the enum grammar forbids.
                return Err(SignatureError::InvalidEnumRef {
                    signature: self.input.to_owned(),
                });
            }
            None => return Err(self.unbalanced()),
        }

        if name.split('.').any(str::is_empty) {
            return Err(SignatureError::InvalidEnumRef {
                signature: self.input.to_owned(),
            });
        }

        match name.strip_prefix("self.") {
            Some(rest) => Ok(TypeNode::EnumRef {
                locality: Locality::Local,
                path: rest.into(),
            }),
            None => Ok(TypeNode::EnumRef {
                locality: Locality::External,
                path: name.into(),
            }),
        }
    }
}
