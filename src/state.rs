use std::fmt;

/// The states of the scanner.
///
/// `Data` is the state between tags. All other states belong to the parse of a single tag, which
/// begins after `<` and ends at the matching `>` (or the end of the input).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum State {
    /// Outside of any tag. Everything up to the next `<` is skipped.
    Data,
    /// Right after `<`, before the tag name.
    TagOpen,
    /// Reading the tag name.
    TagName,
    /// After the tag name or a completed attribute, before the next attribute key.
    AfterTagName,
    /// Reading an attribute key.
    AttributeKey,
    /// Whitespace after an attribute key, waiting for `=`.
    AfterAttributeKey,
    /// Right after `=`.
    BeforeAttributeValue,
    /// Whitespace between `=` and the attribute value.
    WhitespaceBeforeAttributeValue,
    /// Inside a `"`-quoted attribute value.
    AttributeValueQuoted,
    /// Inside an unquoted attribute value.
    AttributeValueUnquoted,
}

impl State {
    /// A short `kebab-case` name of the state, as used in error messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match *self {
            State::Data => "data",
            State::TagOpen => "tag-open",
            State::TagName => "tag-name",
            State::AfterTagName => "after-tag-name",
            State::AttributeKey => "attribute-key",
            State::AfterAttributeKey => "after-attribute-key",
            State::BeforeAttributeValue => "before-attribute-value",
            State::WhitespaceBeforeAttributeValue => "whitespace-before-attribute-value",
            State::AttributeValueQuoted => "attribute-value-quoted",
            State::AttributeValueUnquoted => "attribute-value-unquoted",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
