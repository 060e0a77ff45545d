/// An emitter is an object providing methods to the scanner to produce tokens.
///
/// Applications can implement this trait to decide what to do with every parsed attribute
/// without going through one of the provided emitters. All byte strings passed to an emitter
/// are borrowed from the scanner's buffers and only valid for the duration of the call.
///
/// The scanner calls the methods in this order, for every tag:
///
/// 1. `init_tag` right after `<` was read.
/// 2. `emit_attribute` for every complete attribute, in document order.
/// 3. `emit_tag_end` once the tag is over.
///
/// Finally, `emit_eof` is called once at the end of the input. It is not called when the scan
/// is stopped by an error.
pub trait Emitter {
    /// The token type emitted by this emitter. This controls what type of values the
    /// [`crate::Scanner`] yields when used as an iterator.
    type Token;

    /// A new tag begins. The tag name has not been read yet.
    fn init_tag(&mut self) {}

    /// An attribute has been read completely.
    ///
    /// This is only called for attributes with a value: `key=value` or `key="value"`. Bare keys
    /// like `disabled` in `<input disabled>` never reach the emitter.
    fn emit_attribute(&mut self, tag: &[u8], key: &[u8], value: &[u8]);

    /// The tag with the given name is over.
    ///
    /// `closed` is `false` if the input ended before the closing `>`.
    fn emit_tag_end(&mut self, tag: &[u8], closed: bool) {
        let _ = (tag, closed);
    }

    /// The scanner has reached the end of the input. It will soon call `pop_token` for the last
    /// time.
    fn emit_eof(&mut self) {}

    /// After every step of the state machine, the scanner calls this method to retrieve a new
    /// token that can be returned via the scanner's iterator interface.
    fn pop_token(&mut self) -> Option<Self::Token>;
}
