use std::convert::Infallible;

use crate::machine;
use crate::machine_helper::MachineHelper;
use crate::utils::ControlToken;
use crate::{DefaultEmitter, Emitter, Limits, Readable, Reader, ScanError, State};

/// A streaming attribute scanner. See crate-level docs for basic usage.
///
/// The scanner is an iterator over the tokens of its [`Emitter`]. Input is read lazily, only as
/// far as needed to produce the next token. After the first error, the iterator is exhausted:
/// every token emitted before the error has been yielded and no further input is read.
#[derive(Debug)]
pub struct Scanner<R: Reader, E: Emitter = DefaultEmitter> {
    eof: bool,
    pub(crate) emitter: E,
    pub(crate) reader: R,
    pub(crate) machine_helper: MachineHelper,
}

impl<R: Reader> Scanner<R> {
    /// Create a new scanner from some input, yielding every tag as a [`crate::Tag`].
    ///
    /// `input` can be `&str`, `&String`, `&[u8]`, `&Vec<u8>`, `File` or any [`Reader`], as those
    /// are the types for which [`crate::Readable`] is implemented, but you can implement that
    /// trait on your own types.
    pub fn new<'a, S: Readable<'a, Reader = R>>(input: S) -> Self {
        Scanner::<S::Reader>::new_with_emitter(input, DefaultEmitter::default())
    }
}

impl<R: Reader, E: Emitter> Scanner<R, E> {
    /// Construct a new scanner from some input and a custom emitter.
    ///
    /// Use this method over [`Scanner::new`] to select attributes with a
    /// [`crate::FilterEmitter`], or to handle events yourself.
    pub fn new_with_emitter<'a, S: Readable<'a, Reader = R>>(input: S, emitter: E) -> Self {
        Scanner {
            eof: false,
            emitter,
            reader: input.to_reader(),
            machine_helper: MachineHelper::default(),
        }
    }

    /// Override the capacity of the tag name, attribute key and attribute value buffers.
    ///
    /// Limits apply to every tag read after this call.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.machine_helper.set_limits(limits);
        self
    }

    /// The current state of the scanner.
    pub fn state(&self) -> State {
        self.machine_helper.state
    }

    /// Get a reference to the emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Consume the scanner and return its emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }
}

impl<R: Reader, E: Emitter<Token = Infallible>> Scanner<R, E> {
    /// Some emitters don't ever produce any tokens and instead have other side effects. In those
    /// cases, you will find yourself writing code like this to handle errors:
    ///
    /// ```
    /// use std::convert::Infallible;
    ///
    /// use getattr::{CallbackEmitter, CallbackEvent, Scanner};
    ///
    /// let mut count = 0;
    /// let emitter = CallbackEmitter::new(|event: CallbackEvent<'_>| -> Option<Infallible> {
    ///     if let CallbackEvent::Attribute { .. } = event {
    ///         count += 1;
    ///     }
    ///
    ///     // We may choose to return any Option<T> (such as our own tokens), but since we do all
    ///     // the real work in the callback itself, we choose to use Option<Infallible>.
    ///     None
    /// });
    ///
    /// let scanner = Scanner::new_with_emitter("<a x=1 y=2><b z=3>", emitter);
    ///
    /// // this is a bit silly
    /// // for result in scanner {
    /// //     result.unwrap();
    /// // }
    ///
    /// // much better:
    /// scanner.finish().unwrap();
    /// assert_eq!(count, 3);
    /// ```
    pub fn finish(self) -> Result<(), ScanError<R::Error>> {
        for result in self {
            result?;
        }

        Ok(())
    }
}

impl<R: Reader, E: Emitter> Iterator for Scanner<R, E> {
    type Item = Result<E::Token, ScanError<R::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.emitter.pop_token() {
                break Some(Ok(token));
            } else if !self.eof {
                match machine::consume(self) {
                    Ok(ControlToken::Continue) => (),
                    Ok(ControlToken::Eof) => {
                        self.eof = true;
                        self.emitter.emit_eof();
                    }
                    Err(e) => {
                        self.eof = true;
                        break Some(Err(e));
                    }
                }
            } else {
                break None;
            }
        }
    }
}
