//! Error elements and the error-set aggregate.
//!
//! An `*.errors.yaml` unit is a bare list of error declarations; the
//! aggregate owns them and knows the namespaces its generated exception
//! types live in.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::constants::CPP_NAMESPACE_ROOT;
use crate::base::ident::snake_case;

use super::errors::ModelError;
use super::named::NamedElement;
use super::raw::RawError;

/// POSIX errno symbols accepted on error and event declarations.
pub const ERRNO_SYMBOLS: &[&str] = &[
    "E2BIG",
    "EACCES",
    "EADDRINUSE",
    "EADDRNOTAVAIL",
    "EAFNOSUPPORT",
    "EAGAIN",
    "EALREADY",
    "EBADF",
    "EBADMSG",
    "EBUSY",
    "ECANCELED",
    "ECHILD",
    "ECONNABORTED",
    "ECONNREFUSED",
    "ECONNRESET",
    "EDEADLK",
    "EDESTADDRREQ",
    "EDOM",
    "EDQUOT",
    "EEXIST",
    "EFAULT",
    "EFBIG",
    "EHOSTDOWN",
    "EHOSTUNREACH",
    "EIDRM",
    "EILSEQ",
    "EINPROGRESS",
    "EINTR",
    "EINVAL",
    "EIO",
    "EISCONN",
    "EISDIR",
    "ELOOP",
    "EMFILE",
    "EMLINK",
    "EMSGSIZE",
    "ENAMETOOLONG",
    "ENETDOWN",
    "ENETRESET",
    "ENETUNREACH",
    "ENFILE",
    "ENOBUFS",
    "ENODATA",
    "ENODEV",
    "ENOENT",
    "ENOEXEC",
    "ENOLCK",
    "ENOMEM",
    "ENOMSG",
    "ENOPROTOOPT",
    "ENOSPC",
    "ENOSYS",
    "ENOTBLK",
    "ENOTCONN",
    "ENOTDIR",
    "ENOTEMPTY",
    "ENOTRECOVERABLE",
    "ENOTSOCK",
    "ENOTSUP",
    "ENOTTY",
    "ENXIO",
    "EOPNOTSUPP",
    "EOVERFLOW",
    "EOWNERDEAD",
    "EPERM",
    "EPIPE",
    "EPROTO",
    "EPROTONOSUPPORT",
    "EPROTOTYPE",
    "ERANGE",
    "EROFS",
    "ESPIPE",
    "ESRCH",
    "ESTALE",
    "ETIME",
    "ETIMEDOUT",
    "ETXTBSY",
    "EXDEV",
];

static ERRNO_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ERRNO_SYMBOLS.iter().copied().collect());

pub(crate) fn validate_errno(symbol: &str, entity: &str) -> Result<(), ModelError> {
    if ERRNO_SET.contains(symbol) {
        Ok(())
    } else {
        Err(ModelError::schema(
            entity,
            format!("unknown errno symbol `{symbol}`"),
        ))
    }
}

/// One declared error: a name plus an optional errno symbol.
#[derive(Debug, Clone)]
pub struct ErrorElement {
    named: NamedElement,
    errno: Option<SmolStr>,
}

impl ErrorElement {
    pub fn from_raw(raw: RawError) -> Result<Self, ModelError> {
        if let Some(errno) = &raw.errno {
            validate_errno(errno, &raw.name)?;
        }
        Ok(Self {
            named: NamedElement::new(&raw.name, raw.description.unwrap_or_default())?,
            errno: raw.errno.map(SmolStr::from),
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    pub fn errno(&self) -> Option<&str> {
        self.errno.as_deref()
    }
}

/// The error-set aggregate built from one `*.errors.yaml` unit.
#[derive(Debug, Clone)]
pub struct ErrorSet {
    named: NamedElement,
    errors: Vec<ErrorElement>,
}

impl ErrorSet {
    pub fn from_raw(name: &str, raw: Vec<RawError>) -> Result<Self, ModelError> {
        tracing::debug!(unit = name, count = raw.len(), "building error set");
        Ok(Self {
            named: NamedElement::new(name, String::new())?,
            errors: raw
                .into_iter()
                .map(ErrorElement::from_raw)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn named(&self) -> &NamedElement {
        &self.named
    }

    pub fn name(&self) -> &str {
        self.named.name()
    }

    pub fn errors(&self) -> &[ErrorElement] {
        &self.errors
    }

    /// The namespace generated exception types live in,
    /// e.g. `ifgen::error::a::b::widget` for unit `a.b.Widget`.
    pub fn namespace(&self) -> String {
        let mut parts = vec![CPP_NAMESPACE_ROOT.to_owned(), "error".to_owned()];
        parts.extend(self.name().split('.').map(snake_case));
        parts.join("::")
    }

    /// The compatibility namespace older consumers still reference,
    /// e.g. `ifgen::a::b::Widget::Error`.
    pub fn legacy_namespace(&self) -> String {
        let mut parts = vec![CPP_NAMESPACE_ROOT.to_owned()];
        parts.extend(self.name().split('.').map(str::to_owned));
        parts.push("Error".to_owned());
        parts.join("::")
    }
}
