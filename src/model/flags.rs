//! Property and method flag vocabularies.
//!
//! Flags map to vtable flag constants in the generated bindings and are
//! combined in declaration order into a single OR-expression. An
//! unrecognized token is a fatal [`ModelError::Flag`].

use super::errors::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyFlag {
    Const,
    Deprecated,
    EmitsChange,
    EmitsInvalidation,
    Explicit,
    Hidden,
    /// Accepted for compatibility; contributes nothing to the vtable.
    Readonly,
    Unprivileged,
}

impl PropertyFlag {
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "const" => Self::Const,
            "deprecated" => Self::Deprecated,
            "emits_change" => Self::EmitsChange,
            "emits_invalidation" => Self::EmitsInvalidation,
            "explicit" => Self::Explicit,
            "hidden" => Self::Hidden,
            "readonly" => Self::Readonly,
            "unprivileged" => Self::Unprivileged,
            _ => return None,
        })
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Deprecated => "deprecated",
            Self::EmitsChange => "emits_change",
            Self::EmitsInvalidation => "emits_invalidation",
            Self::Explicit => "explicit",
            Self::Hidden => "hidden",
            Self::Readonly => "readonly",
            Self::Unprivileged => "unprivileged",
        }
    }

    /// The vtable constant this flag contributes, if any.
    pub fn cpp_flag(&self) -> Option<&'static str> {
        match self {
            Self::Const => Some("vtable::property_::const_"),
            Self::Deprecated => Some("vtable::common_::deprecated"),
            Self::EmitsChange => Some("vtable::property_::emits_change"),
            Self::EmitsInvalidation => Some("vtable::property_::emits_invalidation"),
            Self::Explicit => Some("vtable::property_::explicit_"),
            Self::Hidden => Some("vtable::common_::hidden"),
            Self::Readonly => None,
            Self::Unprivileged => Some("vtable::common_::unprivileged"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodFlag {
    Deprecated,
    Hidden,
    Unprivileged,
    NoReply,
}

impl MethodFlag {
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "deprecated" => Self::Deprecated,
            "hidden" => Self::Hidden,
            "unprivileged" => Self::Unprivileged,
            "no_reply" => Self::NoReply,
            _ => return None,
        })
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Deprecated => "deprecated",
            Self::Hidden => "hidden",
            Self::Unprivileged => "unprivileged",
            Self::NoReply => "no_reply",
        }
    }

    pub fn cpp_flag(&self) -> Option<&'static str> {
        match self {
            Self::Deprecated => Some("vtable::common_::deprecated"),
            Self::Hidden => Some("vtable::common_::hidden"),
            Self::Unprivileged => Some("vtable::common_::unprivileged"),
            Self::NoReply => Some("vtable::method_::no_reply"),
        }
    }
}

/// Parse property flag tokens, preserving declaration order.
///
/// Returns the flags plus the precomputed OR-expression.
pub(crate) fn parse_property_flags(
    tokens: &[String],
    entity: &str,
) -> Result<(Vec<PropertyFlag>, String), ModelError> {
    let mut flags = Vec::with_capacity(tokens.len());
    for token in tokens {
        let flag = PropertyFlag::from_token(token)
            .ok_or_else(|| ModelError::flag(token.clone(), entity))?;
        flags.push(flag);
    }
    let expr = or_expression(flags.iter().filter_map(PropertyFlag::cpp_flag));
    Ok((flags, expr))
}

/// Parse method flag tokens, preserving declaration order.
pub(crate) fn parse_method_flags(
    tokens: &[String],
    entity: &str,
) -> Result<(Vec<MethodFlag>, String), ModelError> {
    let mut flags = Vec::with_capacity(tokens.len());
    for token in tokens {
        let flag = MethodFlag::from_token(token)
            .ok_or_else(|| ModelError::flag(token.clone(), entity))?;
        flags.push(flag);
    }
    let expr = or_expression(flags.iter().filter_map(MethodFlag::cpp_flag));
    Ok((flags, expr))
}

fn or_expression<'a>(flags: impl Iterator<Item = &'a str>) -> String {
    flags.collect::<Vec<_>>().join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine_in_declaration_order() {
        let (flags, expr) =
            parse_property_flags(&["deprecated".into(), "hidden".into()], "p").unwrap();
        assert_eq!(flags, vec![PropertyFlag::Deprecated, PropertyFlag::Hidden]);
        assert_eq!(expr, "vtable::common_::deprecated | vtable::common_::hidden");
    }

    #[test]
    fn test_readonly_is_a_no_op() {
        let (flags, expr) = parse_property_flags(&["readonly".into()], "p").unwrap();
        assert_eq!(flags, vec![PropertyFlag::Readonly]);
        assert_eq!(expr, "");
    }

    #[test]
    fn test_unknown_flag_names_the_token() {
        let err = parse_property_flags(&["bogus".into()], "p").unwrap_err();
        assert!(matches!(err, ModelError::Flag { ref flag, .. } if flag == "bogus"));
    }

    #[test]
    fn test_method_no_reply() {
        let (_, expr) = parse_method_flags(&["no_reply".into()], "m").unwrap();
        assert_eq!(expr, "vtable::method_::no_reply");
    }

    #[test]
    fn test_const_not_valid_on_methods() {
        assert!(parse_method_flags(&["const".into()], "m").is_err());
    }
}
