use getattr::testutils::SlowReader;
use getattr::{ErrorKind, Filter, FilterEmitter, IoReader, Limits, Readable, Reader, ScanError, Scanner};

use pretty_assertions::assert_eq;

/// Small enough that the fuzzer regularly runs into overflows.
const BUFFER_SIZE: usize = 16;

fn scan<R: Reader>(tag: &[u8], keys: &[Vec<u8>], reader: R) -> (Vec<Vec<u8>>, Option<ErrorKind>) {
    let filter = Filter::new(tag).with_keys(keys.iter().cloned());
    let scanner = Scanner::new_with_emitter(reader, FilterEmitter::new(filter))
        .with_limits(Limits::uniform(BUFFER_SIZE));

    let mut values = Vec::new();
    for result in scanner {
        match result {
            Ok(value) => values.push(value),
            Err(ScanError::Parse(e)) => return (values, Some(e.kind())),
            Err(ScanError::Read(e)) => panic!("reading from memory failed: {}", e),
        }
    }

    (values, None)
}

/// Chunked and byte-by-byte reading must not make a difference.
pub fn run_reader_agreement(tag: &[u8], keys: &[Vec<u8>], input: &[u8]) {
    let reference = scan(tag, keys, SlowReader(IoReader::new(input)));
    assert_eq!(scan(tag, keys, IoReader::new(input)), reference);

    assert_eq!(scan(tag, keys, input.to_reader()), reference);
}
