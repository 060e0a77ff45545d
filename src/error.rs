use std::fmt;

use crate::{BufferKind, State};

macro_rules! impl_error_kind {
    ($(
        $(#[$outer:meta])*
        $string:literal <=> $variant:ident,
    )*) => {
        /// The kind of an [`Error`], without any of the details.
        ///
        /// Every kind has a stable `kebab-case` code.
        #[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
        pub enum ErrorKind {
            $(
                $(#[$outer])*
                $variant
            ),*
        }

        impl std::str::FromStr for ErrorKind {
            type Err = ();

            /// Parse a `kebab-case` error code into an enum variant.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $string => Ok(Self::$variant), )*
                    _ => Err(())
                }
            }
        }

        impl ErrorKind {
            /// Convert an enum variant back into its `kebab-case` error code.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match *self {
                    $( Self::$variant => $string, )*
                }
            }
        }
    }
}

impl_error_kind! {
    /// See [`Error::BufferOverflow`].
    "buffer-overflow" <=> BufferOverflow,
    /// See [`Error::UnexpectedCharacterAfterAttributeKey`].
    "unexpected-character-after-attribute-key" <=> UnexpectedCharacterAfterAttributeKey,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fatal parsing error. The scanner reads no further input after producing one.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Error {
    /// A tag name, attribute key or attribute value did not fit into its buffer.
    ///
    /// See [`crate::Limits`].
    BufferOverflow {
        /// The buffer that overflowed.
        buffer: BufferKind,
        /// The state in which the byte that did not fit was read.
        state: State,
    },

    /// After an attribute key and some whitespace, something other than `=`, `>` or more
    /// whitespace was found, as in `<input disabled type=text>`.
    UnexpectedCharacterAfterAttributeKey {
        /// The offending byte.
        byte: u8,
    },
}

impl Error {
    /// The kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::BufferOverflow { .. } => ErrorKind::BufferOverflow,
            Error::UnexpectedCharacterAfterAttributeKey { .. } => {
                ErrorKind::UnexpectedCharacterAfterAttributeKey
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::BufferOverflow { buffer, state } => {
                write!(f, "{} buffer overflow in {} state", buffer, state)
            }
            Error::UnexpectedCharacterAfterAttributeKey { byte } => write!(
                f,
                "unknown state: unexpected character '{}' after attribute key",
                byte.escape_ascii()
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Everything that can stop a [`crate::Scanner`]: either the [`crate::Reader`] failed, or the
/// input could not be parsed.
#[derive(Debug)]
pub enum ScanError<E> {
    /// The reader returned an error.
    Read(E),
    /// The input could not be parsed.
    Parse(Error),
}

impl<E> From<Error> for ScanError<E> {
    fn from(e: Error) -> Self {
        ScanError::Parse(e)
    }
}

impl<E: fmt::Display> fmt::Display for ScanError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Read(e) => write!(f, "failed to read input: {}", e),
            ScanError::Parse(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for ScanError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Read(e) => Some(e),
            ScanError::Parse(e) => Some(e),
        }
    }
}

#[test]
fn test_error_kind_codes_roundtrip() {
    for kind in [
        ErrorKind::BufferOverflow,
        ErrorKind::UnexpectedCharacterAfterAttributeKey,
    ] {
        assert_eq!(kind.as_str().parse::<ErrorKind>(), Ok(kind));
    }
    assert_eq!("eof-in-tag".parse::<ErrorKind>(), Err(()));
}

#[test]
fn test_error_messages() {
    let overflow = Error::BufferOverflow {
        buffer: BufferKind::Value,
        state: State::AttributeValueQuoted,
    };
    assert_eq!(
        overflow.to_string(),
        "value buffer overflow in attribute-value-quoted state"
    );
    assert_eq!(overflow.kind(), ErrorKind::BufferOverflow);

    let unexpected = Error::UnexpectedCharacterAfterAttributeKey { byte: b'"' };
    assert_eq!(
        unexpected.to_string(),
        "unknown state: unexpected character '\\\"' after attribute key"
    );
}
