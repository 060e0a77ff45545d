use std::convert::Infallible;
use std::fs::File;
use std::io::{self, Read};

/// An object that provides bytes to the scanner.
///
/// See [`crate::Scanner::new`] for more information.
pub trait Reader {
    /// The error returned by this reader.
    type Error: std::error::Error;

    /// Return a new byte from the input stream, or `None` at the end of the stream.
    ///
    /// The input stream does **not** have to be valid UTF-8 or preprocessed in any way.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Read an arbitrary amount of bytes up until and including the next byte that matches an
    /// array entry in `needle`.
    ///
    /// Return either:
    ///
    /// 1. A chunk of consumed bytes that does not contain any bytes from `needle`. The chunk can be arbitrarily large or small.
    /// 2. If the next byte is included in `needle`, a slice with just that byte and nothing else.
    ///
    /// In other words, case 1 means "we didn't find the needle yet, but here's some read data",
    /// while case 2 means "we have found the needle".
    ///
    /// The default implementation simply reads one byte, ignoring the needle entirely. It is
    /// recommended to manually implement `read_until` if there is any sort of in-memory buffer
    /// that can be searched.
    ///
    /// The return value is usually borrowed from underlying buffers. If that's not possible, a
    /// small buffer is provided as `byte_buf` to put a single byte into.
    ///
    /// # Example
    ///
    /// Here is how [`StringReader`] behaves:
    ///
    /// ```rust
    /// use getattr::{Reader, Readable};
    ///
    /// let mut reader = "hello world".to_reader();
    /// let mut eof = false;
    /// let mut chunks = Vec::new();
    /// while !eof {
    ///     let mut byte_buf = [0; 1];
    ///     let xs = reader.read_until(&[b' ', b'r'], &mut byte_buf).unwrap();
    ///     if let Some(xs) = xs {
    ///         chunks.push(std::str::from_utf8(xs).unwrap().to_owned());
    ///     } else {
    ///         eof = true;
    ///     }
    /// }
    ///
    /// assert_eq!(chunks, &["hello", " ", "wo", "r", "ld"]);
    /// ```
    ///
    /// The inefficient default implementation produces:
    ///
    /// ```text
    /// ["h", "e", "l", "l", "o", " ", "w", "o", "r", "l", "d"]
    /// ```
    fn read_until<'b>(
        &'b mut self,
        needle: &[u8],
        byte_buf: &'b mut [u8; 1],
    ) -> Result<Option<&'b [u8]>, Self::Error> {
        let _needle = needle;

        match self.read_byte()? {
            Some(x) => {
                byte_buf[0] = x;
                Ok(Some(&byte_buf[..]))
            }
            None => Ok(None),
        }
    }
}

/// An object that can be converted into a [`crate::Reader`].
///
/// For example, any string or byte slice can be converted into a `StringReader`, such that
/// `Scanner::new("mystring")` and `Scanner::new(&b"foo"[..])` work.
pub trait Readable<'a> {
    /// The reader type to which this type should be converted.
    type Reader: Reader + 'a;

    /// Convert self to some sort of reader.
    fn to_reader(self) -> Self::Reader;
}

impl<'a, R: 'a + Reader> Readable<'a> for R {
    type Reader = Self;

    fn to_reader(self) -> Self::Reader {
        self
    }
}

/// A reader over an in-memory string or byte slice. Reading from it can not fail.
///
/// Example:
///
/// ```rust
/// use getattr::{Filter, FilterEmitter, Scanner};
///
/// let html = r#"<img src="cat.png" alt=cat>"#;
/// let emitter = FilterEmitter::new(Filter::new("img").key("alt").key("src"));
///
/// let values: Vec<Vec<u8>> = Scanner::new_with_emitter(html, emitter)
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(values, vec![b"cat.png".to_vec(), b"cat".to_vec()]);
/// ```
#[derive(Debug)]
pub struct StringReader<'a> {
    input: &'a [u8],
}

impl<'a> StringReader<'a> {
    fn new(input: &'a [u8]) -> Self {
        StringReader { input }
    }
}

impl<'a> Reader for StringReader<'a> {
    type Error = Infallible;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        match self.input.split_first() {
            Some((&rv, rest)) => {
                self.input = rest;
                Ok(Some(rv))
            }
            None => Ok(None),
        }
    }

    fn read_until<'b>(
        &'b mut self,
        needle: &[u8],
        _: &'b mut [u8; 1],
    ) -> Result<Option<&'b [u8]>, Self::Error> {
        if self.input.is_empty() {
            return Ok(None);
        }

        let split_pos = match fast_find(needle, self.input) {
            Some(0) => 1,
            Some(needle_pos) => needle_pos,
            None => self.input.len(),
        };

        let (rv, new_input) = self.input.split_at(split_pos);
        self.input = new_input;
        Ok(Some(rv))
    }
}

impl<'a> Readable<'a> for &'a str {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self.as_bytes())
    }
}

impl<'a> Readable<'a> for &'a String {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self.as_bytes())
    }
}

impl<'a> Readable<'a> for &'a Vec<u8> {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self.as_slice())
    }
}

impl<'a> Readable<'a> for &'a [u8] {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self)
    }
}

/// An [`IoReader`] can be used to construct a scanner from any type that implements
/// `std::io::Read`, most importantly stdin.
///
/// Because of trait impl conflicts, `IoReader` needs to be explicitly constructed. The exception
/// to that is `File`, which can be directly passed to `Scanner::new`.
///
/// No I/O buffering is required on the caller's side. `IoReader` maintains its own read-buffer
/// (16kb, heap-allocated) so that text between tags can be skipped in bulk. Wrapping your `File`
/// in a `std::io::BufReader` first is wasteful.
///
/// Example:
///
/// ```rust
/// use getattr::{Filter, FilterEmitter, IoReader, Scanner};
///
/// let input = "<h1 id=title class=\"big\">hello world</h1>".as_bytes();
/// // more realistically: IoReader::new(std::io::stdin().lock())
/// let emitter = FilterEmitter::new(Filter::new("h1").key("class"));
///
/// for value in Scanner::new_with_emitter(IoReader::new(input), emitter) {
///     assert_eq!(value.unwrap(), b"big");
/// }
/// ```
#[derive(Debug)]
pub struct IoReader<R: Read> {
    buf: Box<[u8; BUF_SIZE]>,
    buf_offset: usize,
    buf_len: usize,
    reader: R,
}

const BUF_SIZE: usize = 16 * 1024;

impl<R: Read> IoReader<R> {
    /// Construct a new `IoReader` from any type that implements `Read`.
    pub fn new(reader: R) -> Self {
        IoReader {
            buf: Box::new([0; BUF_SIZE]),
            buf_offset: 0,
            buf_len: 0,
            reader,
        }
    }

    /// Refill the buffer once it has been fully consumed. Returns false at the end of the stream.
    #[inline]
    fn prepare_buf(&mut self) -> Result<bool, io::Error> {
        if self.buf_offset < self.buf_len {
            return Ok(true);
        }

        loop {
            match self.reader.read(&mut self.buf[..]) {
                Ok(n) => {
                    self.buf_offset = 0;
                    self.buf_len = n;
                    return Ok(n > 0);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Reader for IoReader<R> {
    type Error = io::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.prepare_buf()? {
            return Ok(None);
        }
        let rv = self.buf[self.buf_offset];
        self.buf_offset += 1;
        Ok(Some(rv))
    }

    fn read_until<'b>(
        &'b mut self,
        needle: &[u8],
        _: &'b mut [u8; 1],
    ) -> Result<Option<&'b [u8]>, Self::Error> {
        if !self.prepare_buf()? {
            return Ok(None);
        }

        let start = self.buf_offset;
        let buf = &self.buf[start..self.buf_len];
        let chunk_len = match fast_find(needle, buf) {
            Some(0) => 1,
            Some(needle_pos) => needle_pos,
            None => buf.len(),
        };
        self.buf_offset += chunk_len;
        Ok(Some(&self.buf[start..start + chunk_len]))
    }
}

impl<'a> Readable<'a> for File {
    type Reader = IoReader<File>;

    fn to_reader(self) -> Self::Reader {
        IoReader::new(self)
    }
}

#[inline]
fn fast_find(needle: &[u8], haystack: &[u8]) -> Option<usize> {
    #[cfg(feature = "jetscii")]
    if needle.len() <= 16 {
        let mut needle_arr = [0; 16];
        needle_arr[..needle.len()].copy_from_slice(needle);
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let searcher = jetscii::Bytes::new(needle_arr, needle.len() as i32, |b| needle.contains(&b));
        return searcher.find(haystack);
    }

    haystack.iter().position(|b| needle.contains(b))
}

#[test]
fn test_io_reader_read_until_across_refills() {
    // a reader that hands out at most three bytes per read call
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.0.len().min(buf.len()).min(3);
            buf[..n].copy_from_slice(&self.0[..n]);
            self.0 = &self.0[n..];
            Ok(n)
        }
    }

    let mut reader = IoReader::new(Trickle(b"abcdef<gh"));
    let mut chunks = Vec::new();
    let mut byte_buf = [0; 1];
    while let Some(xs) = reader.read_until(b"<", &mut byte_buf).unwrap() {
        chunks.push(xs.to_vec());
    }

    assert_eq!(
        chunks,
        vec![b"abc".to_vec(), b"def".to_vec(), b"<".to_vec(), b"gh".to_vec()]
    );
}

#[test]
fn test_string_reader_read_byte() {
    let mut reader = "<a".to_reader();
    assert_eq!(reader.read_byte().unwrap(), Some(b'<'));
    assert_eq!(reader.read_byte().unwrap(), Some(b'a'));
    assert_eq!(reader.read_byte().unwrap(), None);
}

#[test]
fn test_fast_find() {
    assert_eq!(fast_find(b"\"\\", b"abc\\\"d"), Some(3));
    assert_eq!(fast_find(b"<", b"no tags here"), None);
    assert_eq!(fast_find(b"<", b""), None);
}
