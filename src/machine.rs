use crate::utils::{trace_log, whitespace_pat, ControlToken};
use crate::{BufferKind, Emitter, Error, Reader, ScanError, Scanner, State};

// Note: This is not implemented as a method on Scanner because the borrow checker needs to see
// the reader, the emitter and the buffers as disjoint fields.
#[inline]
pub(crate) fn consume<R: Reader, E: Emitter>(
    slf: &mut Scanner<R, E>,
) -> Result<ControlToken, ScanError<R::Error>> {
    macro_rules! switch_to {
        ($state:expr) => {{
            slf.machine_helper.switch_to($state);
            cont!()
        }};
    }

    macro_rules! cont {
        () => {{
            return Ok(ControlToken::Continue);
        }};
    }

    macro_rules! read_byte {
        () => {
            slf.reader.read_byte().map_err(ScanError::Read)
        };
    }

    macro_rules! read_until {
        ($needle:expr, $byte_buf:expr) => {
            slf.reader
                .read_until($needle, $byte_buf)
                .map_err(ScanError::Read)
        };
    }

    macro_rules! push {
        ($kind:ident, $xs:expr) => {
            slf.machine_helper.push(BufferKind::$kind, $xs)?
        };
    }

    macro_rules! emit_attribute {
        () => {{
            let helper = &slf.machine_helper;
            trace_log!(
                "attribute: {:?}={:?}",
                String::from_utf8_lossy(&helper.key),
                String::from_utf8_lossy(&helper.value)
            );
            slf.emitter
                .emit_attribute(&helper.name, &helper.key, &helper.value);
            slf.machine_helper.reset_attribute();
        }};
    }

    // the tag is over, either at `>` or at the end of the input
    macro_rules! end_tag {
        ($closed:expr) => {{
            slf.emitter.emit_tag_end(&slf.machine_helper.name, $closed);
            slf.machine_helper.reset_tag();
        }};
    }

    macro_rules! done {
        () => {{
            end_tag!(true);
            switch_to!(State::Data)
        }};
    }

    macro_rules! eof_in_tag {
        () => {{
            trace_log!("eof in {} state", slf.machine_helper.state);
            end_tag!(false);
            return Ok(ControlToken::Eof);
        }};
    }

    match slf.machine_helper.state {
        State::Data => {
            let mut byte_buf = [0; 1];
            match read_until!(b"<", &mut byte_buf)? {
                Some(b"<") => {
                    slf.emitter.init_tag();
                    switch_to!(State::TagOpen)
                }
                Some(_) => cont!(),
                None => Ok(ControlToken::Eof),
            }
        }
        State::TagOpen => match read_byte!()? {
            Some(b'>') => done!(),
            Some(whitespace_pat!()) => cont!(),
            Some(x) => {
                push!(Name, &[x]);
                switch_to!(State::TagName)
            }
            None => eof_in_tag!(),
        },
        State::TagName => match read_byte!()? {
            Some(b'>') => done!(),
            Some(whitespace_pat!()) => switch_to!(State::AfterTagName),
            // `<a=1>`: an attribute with an empty key
            Some(b'=') => switch_to!(State::BeforeAttributeValue),
            Some(x) => {
                push!(Name, &[x]);
                cont!()
            }
            None => eof_in_tag!(),
        },
        State::AfterTagName => match read_byte!()? {
            Some(b'>') => done!(),
            Some(whitespace_pat!()) => cont!(),
            Some(x) => {
                push!(Key, &[x]);
                switch_to!(State::AttributeKey)
            }
            None => eof_in_tag!(),
        },
        State::AttributeKey => match read_byte!()? {
            Some(b'>') => done!(),
            Some(whitespace_pat!()) => switch_to!(State::AfterAttributeKey),
            Some(b'=') => switch_to!(State::BeforeAttributeValue),
            Some(x) => {
                push!(Key, &[x]);
                cont!()
            }
            None => eof_in_tag!(),
        },
        State::AfterAttributeKey => match read_byte!()? {
            Some(b'>') => done!(),
            Some(whitespace_pat!()) => cont!(),
            Some(b'=') => switch_to!(State::BeforeAttributeValue),
            Some(x) => {
                trace_log!("unexpected byte {:?} after attribute key", x as char);
                Err(Error::UnexpectedCharacterAfterAttributeKey { byte: x }.into())
            }
            None => eof_in_tag!(),
        },
        State::BeforeAttributeValue => match read_byte!()? {
            Some(b'>') => done!(),
            Some(whitespace_pat!()) => switch_to!(State::WhitespaceBeforeAttributeValue),
            Some(b'"') => switch_to!(State::AttributeValueQuoted),
            Some(x) => {
                push!(Value, &[x]);
                switch_to!(State::AttributeValueUnquoted)
            }
            None => eof_in_tag!(),
        },
        State::WhitespaceBeforeAttributeValue => match read_byte!()? {
            Some(b'>') => done!(),
            Some(whitespace_pat!()) => cont!(),
            Some(b'"') => switch_to!(State::AttributeValueQuoted),
            Some(x) => {
                push!(Value, &[x]);
                switch_to!(State::AttributeValueUnquoted)
            }
            None => eof_in_tag!(),
        },
        State::AttributeValueQuoted => {
            let mut byte_buf = [0; 1];
            match read_until!(b"\"\\", &mut byte_buf)? {
                Some(b"\"") => {
                    emit_attribute!();
                    switch_to!(State::AfterTagName)
                }
                Some(b"\\") => match read_byte!()? {
                    Some(x) => {
                        push!(Value, &[x]);
                        cont!()
                    }
                    None => {
                        trace_log!("incomplete escape at end of input");
                        eof_in_tag!()
                    }
                },
                Some(xs) => {
                    push!(Value, xs);
                    cont!()
                }
                None => eof_in_tag!(),
            }
        }
        State::AttributeValueUnquoted => match read_byte!()? {
            Some(b'>') => {
                emit_attribute!();
                done!()
            }
            Some(whitespace_pat!()) => {
                emit_attribute!();
                switch_to!(State::AfterTagName)
            }
            Some(x) => {
                push!(Value, &[x]);
                cont!()
            }
            None => {
                emit_attribute!();
                eof_in_tag!()
            }
        },
    }
}
