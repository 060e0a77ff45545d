//! Yield the values of selected attributes. This is the emitter behind the `getattr` tool.
use std::collections::VecDeque;

use crate::utils::trace_log;
use crate::{Emitter, Filter};

/// An [Emitter] that yields the value of every attribute selected by a [Filter], in the order the
/// attributes appear in the input.
///
/// ```rust
/// use getattr::{Filter, FilterEmitter, Scanner};
///
/// let input = r#"<a id="1"><b id="2"><a id=3 class=x>"#;
/// let emitter = FilterEmitter::new(Filter::new("a").key("id"));
///
/// let ids: Vec<Vec<u8>> = Scanner::new_with_emitter(input, emitter)
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(ids, vec![b"1".to_vec(), b"3".to_vec()]);
/// ```
#[derive(Debug, Default)]
pub struct FilterEmitter {
    filter: Filter,
    matched_values: VecDeque<Vec<u8>>,
}

impl FilterEmitter {
    /// Create a new emitter for the given filter.
    pub fn new(filter: Filter) -> Self {
        FilterEmitter {
            filter,
            matched_values: VecDeque::new(),
        }
    }

    /// The filter this emitter was created with.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

impl Emitter for FilterEmitter {
    type Token = Vec<u8>;

    fn emit_attribute(&mut self, tag: &[u8], key: &[u8], value: &[u8]) {
        let count = self.filter.match_count(tag, key);
        if count > 0 {
            trace_log!(
                "matched {:?}={:?} on {:?} {} time(s)",
                String::from_utf8_lossy(key),
                String::from_utf8_lossy(value),
                String::from_utf8_lossy(tag),
                count
            );
        }
        for _ in 0..count {
            self.matched_values.push_back(value.to_owned());
        }
    }

    fn pop_token(&mut self) -> Option<Self::Token> {
        self.matched_values.pop_front()
    }
}
