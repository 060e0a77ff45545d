use std::fmt;
use std::ops::Deref;

/// Default capacity of each of the tag name, attribute key and attribute value buffers, in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// The three buffers the scanner fills while parsing a tag.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BufferKind {
    /// The tag name, such as `a` in `<a href=x>`.
    Name,
    /// An attribute key, such as `href` in `<a href=x>`.
    Key,
    /// An attribute value, such as `x` in `<a href=x>`.
    Value,
}

impl BufferKind {
    /// Lowercase name of the buffer, as used in error messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match *self {
            BufferKind::Name => "name",
            BufferKind::Key => "key",
            BufferKind::Value => "value",
        }
    }
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum sizes of the scanner's buffers.
///
/// A buffer may hold exactly its capacity. One more byte is a
/// [`BufferOverflow`](crate::Error::BufferOverflow) and ends the scan.
///
/// ```rust
/// use getattr::{Error, Filter, FilterEmitter, Limits, ScanError, Scanner};
///
/// let emitter = FilterEmitter::new(Filter::new("a").key("id"));
/// let mut scanner = Scanner::new_with_emitter(r#"<a id="123456">"#, emitter)
///     .with_limits(Limits::default().value(4));
///
/// assert!(matches!(
///     scanner.next(),
///     Some(Err(ScanError::Parse(Error::BufferOverflow { .. })))
/// ));
/// assert!(scanner.next().is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Limits {
    /// Capacity of the tag name buffer.
    pub name: usize,
    /// Capacity of the attribute key buffer.
    pub key: usize,
    /// Capacity of the attribute value buffer.
    pub value: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits::uniform(DEFAULT_BUFFER_CAPACITY)
    }
}

impl Limits {
    /// Use the same capacity for all three buffers.
    #[must_use]
    pub fn uniform(capacity: usize) -> Self {
        Limits {
            name: capacity,
            key: capacity,
            value: capacity,
        }
    }

    /// Set the capacity of the tag name buffer.
    #[must_use]
    pub fn name(mut self, capacity: usize) -> Self {
        self.name = capacity;
        self
    }

    /// Set the capacity of the attribute key buffer.
    #[must_use]
    pub fn key(mut self, capacity: usize) -> Self {
        self.key = capacity;
        self
    }

    /// Set the capacity of the attribute value buffer.
    #[must_use]
    pub fn value(mut self, capacity: usize) -> Self {
        self.value = capacity;
        self
    }

    pub(crate) fn capacity_of(&self, kind: BufferKind) -> usize {
        match kind {
            BufferKind::Name => self.name,
            BufferKind::Key => self.key,
            BufferKind::Value => self.value,
        }
    }
}

/// Returned by [`BoundedBuffer::extend`] when the bytes do not fit.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Overflow;

/// A byte buffer that refuses to grow past its capacity. Memory is only allocated as it is
/// filled, so a large capacity costs nothing for small tags.
#[derive(Debug)]
pub(crate) struct BoundedBuffer {
    content: Vec<u8>,
    capacity: usize,
}

impl BoundedBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        BoundedBuffer {
            content: Vec::new(),
            capacity,
        }
    }

    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Append all of `xs`, or nothing at all.
    pub(crate) fn extend(&mut self, xs: &[u8]) -> Result<(), Overflow> {
        if xs.len() > self.capacity.saturating_sub(self.content.len()) {
            return Err(Overflow);
        }
        self.content.extend_from_slice(xs);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.content.clear();
    }
}

impl Deref for BoundedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.content
    }
}

#[test]
fn test_bounded_buffer_accepts_exact_capacity() {
    let mut buf = BoundedBuffer::new(3);
    assert_eq!(buf.extend(b"ab"), Ok(()));
    assert_eq!(buf.extend(b"c"), Ok(()));
    assert_eq!(&*buf, b"abc");
    assert_eq!(buf.extend(b"d"), Err(Overflow));
    assert_eq!(&*buf, b"abc");
}

#[test]
fn test_bounded_buffer_rejects_oversized_chunk_whole() {
    let mut buf = BoundedBuffer::new(4);
    buf.extend(b"ab").unwrap();
    assert_eq!(buf.extend(b"cde"), Err(Overflow));
    assert_eq!(&*buf, b"ab");

    buf.clear();
    assert_eq!(buf.extend(b"cde"), Ok(()));
}

#[test]
fn test_zero_capacity() {
    let mut buf = BoundedBuffer::new(0);
    assert_eq!(buf.extend(b""), Ok(()));
    assert_eq!(buf.extend(b"x"), Err(Overflow));
}

#[test]
fn test_limits_builder() {
    let limits = Limits::default().name(8).value(16);
    assert_eq!(limits.capacity_of(BufferKind::Name), 8);
    assert_eq!(limits.capacity_of(BufferKind::Key), DEFAULT_BUFFER_CAPACITY);
    assert_eq!(limits.capacity_of(BufferKind::Value), 16);
}
