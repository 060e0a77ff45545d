//! Consume the scanned markup as a series of events through a callback.
//!
//! While the [crate::DefaultEmitter] provides an easy-to-use API that allocates every tag, and
//! implementing your own [crate::Emitter] brings maximal control, this is a middle ground. All
//! strings are borrowed from the scanner's buffers instead of individually allocated.
//!
//! ```
//! // Collect all link targets, except the ones pointing to the same page.
//! use getattr::{CallbackEmitter, CallbackEvent, Scanner};
//!
//! let emitter = CallbackEmitter::new(|event: CallbackEvent<'_>| -> Option<String> {
//!     match event {
//!         CallbackEvent::Attribute { tag: b"a", key: b"href", value } if !value.starts_with(b"#") => {
//!             Some(String::from_utf8_lossy(value).into_owned())
//!         }
//!         _ => None,
//!     }
//! });
//!
//! let input = r##"<a href="#top">up</a> <a href=/about>about</a>"##;
//! let Ok(links) = Scanner::new_with_emitter(input, emitter).collect::<Result<Vec<_>, _>>() else {
//!     panic!("scan failed");
//! };
//!
//! assert_eq!(links, vec!["/about".to_owned()]);
//! ```

use std::collections::VecDeque;
use std::convert::Infallible;

use crate::utils::trace_log;
use crate::Emitter;

/// Events used by [CallbackEmitter].
#[derive(Debug)]
pub enum CallbackEvent<'a> {
    /// Visit the `"<"` in `"<mytag mykey=myvalue>"`. Signifies the beginning of a new tag.
    ///
    /// The tag name has not yet been read.
    OpenTag,

    /// Visit a complete attribute, for example `mykey=myvalue` in `"<mytag mykey=myvalue>"`.
    ///
    /// Quotes have been removed and escapes resolved.
    Attribute {
        /// The name of the tag the attribute belongs to.
        tag: &'a [u8],
        /// The attribute key.
        key: &'a [u8],
        /// The attribute value.
        value: &'a [u8],
    },

    /// Visit the end of the tag, for example `">"` in `"<mytag mykey=myvalue>"`.
    CloseTag {
        /// The name of the tag.
        name: &'a [u8],
        /// Whether the tag ended with `">"`. This is `false` if the input ended inside of the
        /// tag.
        closed: bool,
    },
}

/// This trait is implemented for all functions that have the same signature as
/// [Callback::handle_event]. The trait only exists in case you want to implement it on a nameable
/// type.
pub trait Callback<T> {
    /// Perform some action on a scanning event, and, optionally, return a value that can be
    /// yielded from the [crate::Scanner] iterator.
    fn handle_event(&mut self, event: CallbackEvent<'_>) -> Option<T>;
}

impl<F, T> Callback<T> for F
where
    F: FnMut(CallbackEvent<'_>) -> Option<T>,
{
    fn handle_event(&mut self, event: CallbackEvent<'_>) -> Option<T> {
        self(event)
    }
}

/// The emitter class to pass to [crate::Scanner::new_with_emitter]. Please refer to the
/// module-level documentation on [crate::emitters::callback] for usage.
#[derive(Debug)]
pub struct CallbackEmitter<F, T = Infallible> {
    callback: F,
    emitted_tokens: VecDeque<T>,
}

impl<F, T> Default for CallbackEmitter<F, T>
where
    F: Default,
{
    fn default() -> Self {
        CallbackEmitter {
            callback: F::default(),
            emitted_tokens: VecDeque::default(),
        }
    }
}

impl<F, T> CallbackEmitter<F, T>
where
    F: Callback<T>,
{
    /// Create a new emitter.
    ///
    /// The given callback may return results, which then will be yielded by the scanner.
    pub fn new(callback: F) -> Self {
        CallbackEmitter {
            callback,
            emitted_tokens: VecDeque::new(),
        }
    }

    /// Get mutable access to the inner callback.
    pub fn callback_mut(&mut self) -> &mut F {
        &mut self.callback
    }

    fn emit_event(&mut self, event: CallbackEvent<'_>) {
        trace_log!("event: {:?}", event);
        if let Some(token) = self.callback.handle_event(event) {
            self.emitted_tokens.push_back(token);
        }
    }
}

impl<F, T> Emitter for CallbackEmitter<F, T>
where
    F: Callback<T>,
{
    type Token = T;

    fn init_tag(&mut self) {
        self.emit_event(CallbackEvent::OpenTag);
    }

    fn emit_attribute(&mut self, tag: &[u8], key: &[u8], value: &[u8]) {
        self.emit_event(CallbackEvent::Attribute { tag, key, value });
    }

    fn emit_tag_end(&mut self, tag: &[u8], closed: bool) {
        self.emit_event(CallbackEvent::CloseTag { name: tag, closed });
    }

    fn pop_token(&mut self) -> Option<Self::Token> {
        self.emitted_tokens.pop_front()
    }
}
