//! The default emitter yields every tag, with all of its attributes, as one [Tag] token.
//!
//! It is what powers [crate::Scanner::new] and is mostly useful to look at what the scanner makes
//! of some input:
//!
//! ```
//! use getattr::{Scanner, Tag};
//!
//! let tags: Vec<Tag> = Scanner::new(r#"<p class="a b" x=1 hidden>"#)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(tags[0].name, b"p");
//! assert_eq!(
//!     tags[0].attributes,
//!     vec![
//!         (b"class".to_vec(), b"a b".to_vec()),
//!         (b"x".to_vec(), b"1".to_vec()),
//!     ]
//! );
//! assert!(tags[0].closed);
//! ```
use std::mem::take;

use crate::emitters::callback::{Callback, CallbackEmitter, CallbackEvent};
use crate::Emitter;

/// A tag and the attributes the scanner found on it.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Tag {
    /// The tag name.
    pub name: Vec<u8>,
    /// Key/value pairs in document order. Repeated keys are kept, and bare keys without a value
    /// are absent.
    pub attributes: Vec<(Vec<u8>, Vec<u8>)>,
    /// Whether the tag was terminated by `>`, rather than by the end of the input.
    pub closed: bool,
}

impl Tag {
    /// Values of all attributes with the given key, in document order.
    pub fn values<'a>(&'a self, key: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.attributes
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }
}

#[derive(Debug, Default)]
struct OurCallback {
    attributes: Vec<(Vec<u8>, Vec<u8>)>,
}

impl Callback<Tag> for OurCallback {
    fn handle_event(&mut self, event: CallbackEvent<'_>) -> Option<Tag> {
        match event {
            CallbackEvent::OpenTag => {
                self.attributes.clear();
                None
            }
            CallbackEvent::Attribute { key, value, .. } => {
                self.attributes.push((key.to_owned(), value.to_owned()));
                None
            }
            CallbackEvent::CloseTag { name, closed } => Some(Tag {
                name: name.to_owned(),
                attributes: take(&mut self.attributes),
                closed,
            }),
        }
    }
}

/// The default implementation of [Emitter], used to produce [Tag] tokens.
#[derive(Debug, Default)]
pub struct DefaultEmitter {
    inner: CallbackEmitter<OurCallback, Tag>,
}

impl Emitter for DefaultEmitter {
    type Token = Tag;

    fn init_tag(&mut self) {
        self.inner.init_tag();
    }

    fn emit_attribute(&mut self, tag: &[u8], key: &[u8], value: &[u8]) {
        self.inner.emit_attribute(tag, key, value);
    }

    fn emit_tag_end(&mut self, tag: &[u8], closed: bool) {
        self.inner.emit_tag_end(tag, closed);
    }

    fn emit_eof(&mut self) {
        self.inner.emit_eof();
    }

    fn pop_token(&mut self) -> Option<Self::Token> {
        self.inner.pop_token()
    }
}
