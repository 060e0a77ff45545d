use std::convert::Infallible;

use getattr::testutils::SlowReader;
use getattr::{
    BufferKind, Callback, CallbackEmitter, CallbackEvent, Error, ErrorKind, Filter, FilterEmitter,
    IoReader, Limits, Readable, ScanError, Scanner, State, Tag,
};
use pretty_assertions::assert_eq;

/// Scan `input` for the values of `keys` on `tag`, as the command line tool would print them.
fn getattr(input: &str, tag: &str, keys: &[&str]) -> Result<Vec<String>, (Vec<String>, Error)> {
    getattr_with_limits(input, tag, keys, Limits::default())
}

fn getattr_with_limits(
    input: &str,
    tag: &str,
    keys: &[&str],
    limits: Limits,
) -> Result<Vec<String>, (Vec<String>, Error)> {
    let emitter = FilterEmitter::new(Filter::new(tag).with_keys(keys.iter().copied()));
    let mut values = Vec::new();
    for value in Scanner::new_with_emitter(input, emitter).with_limits(limits) {
        match value {
            Ok(value) => values.push(String::from_utf8(value).unwrap()),
            Err(ScanError::Parse(e)) => return Err((values, e)),
            Err(ScanError::Read(e)) => match e {},
        }
    }
    Ok(values)
}

fn tags(input: &str) -> Vec<Tag> {
    Scanner::new(input).collect::<Result<_, _>>().unwrap()
}

#[test]
fn test_quoted_unquoted_and_bare() {
    let input = r#"<name k1="v1" k2=v2 k3>"#;
    assert_eq!(getattr(input, "name", &["k1"]), Ok(vec!["v1".to_owned()]));
    assert_eq!(getattr(input, "name", &["k2"]), Ok(vec!["v2".to_owned()]));
    assert_eq!(getattr(input, "name", &["k4"]), Ok(vec![]));
}

#[test]
fn test_escaped_quote() {
    assert_eq!(
        getattr(r#"<a id="x\"y">"#, "a", &["id"]),
        Ok(vec![r#"x"y"#.to_owned()])
    );
}

#[test]
fn test_escapes_are_literal() {
    assert_eq!(
        getattr(r#"<a id="a\\b\ c\>\n">"#, "a", &["id"]),
        Ok(vec![r#"a\b c>n"#.to_owned()])
    );
}

#[test]
fn test_unquoted_value_ends_at_tag_close() {
    assert_eq!(getattr("<a id=foo>", "a", &["id"]), Ok(vec!["foo".to_owned()]));
}

#[test]
fn test_unquoted_value_ends_at_whitespace() {
    assert_eq!(getattr("<a id=foo bar>", "a", &["id"]), Ok(vec!["foo".to_owned()]));
}

#[test]
fn test_bare_key_is_never_emitted() {
    assert_eq!(getattr("<a id=foo bar>", "a", &["bar"]), Ok(vec![]));
    assert_eq!(getattr("<a bar>", "a", &["bar"]), Ok(vec![]));
    assert_eq!(getattr("<a bar >", "a", &["bar"]), Ok(vec![]));
    assert_eq!(getattr("<a bar=>", "a", &["bar"]), Ok(vec![]));
}

#[test]
fn test_multiple_occurrences_in_document_order() {
    assert_eq!(
        getattr(r#"<a id="1"><a id="2">"#, "a", &["id"]),
        Ok(vec!["1".to_owned(), "2".to_owned()])
    );
}

#[test]
fn test_values_follow_attribute_order_not_key_order() {
    assert_eq!(
        getattr(r#"<h1 class=big id="top">"#, "h1", &["id", "class"]),
        Ok(vec!["big".to_owned(), "top".to_owned()])
    );
}

#[test]
fn test_non_matching_tag() {
    assert_eq!(getattr(r#"<b id="1">"#, "a", &["id"]), Ok(vec![]));
}

#[test]
fn test_matching_is_case_sensitive() {
    assert_eq!(getattr(r#"<A ID="1" id="2">"#, "A", &["id"]), Ok(vec!["2".to_owned()]));
    assert_eq!(getattr(r#"<A id="1">"#, "a", &["id"]), Ok(vec![]));
}

#[test]
fn test_key_requested_twice_is_emitted_twice() {
    assert_eq!(
        getattr("<a id=1>", "a", &["id", "id"]),
        Ok(vec!["1".to_owned(), "1".to_owned()])
    );
}

#[test]
fn test_repeated_attribute_is_emitted_for_each_occurrence() {
    assert_eq!(
        getattr("<a id=1 id=2>", "a", &["id"]),
        Ok(vec!["1".to_owned(), "2".to_owned()])
    );
}

#[test]
fn test_text_between_tags_is_ignored() {
    assert_eq!(
        getattr("id=1 > a <a id=2> id=\"3\"\n</a>", "a", &["id"]),
        Ok(vec!["2".to_owned()])
    );
}

#[test]
fn test_greater_than_inside_quotes() {
    assert_eq!(
        getattr(r#"<a title="1 > 0" id=x>"#, "a", &["title", "id"]),
        Ok(vec!["1 > 0".to_owned(), "x".to_owned()])
    );
}

#[test]
fn test_quotes_inside_unquoted_value_are_literal() {
    assert_eq!(
        getattr(r#"<a id=x"y=z>"#, "a", &["id"]),
        Ok(vec![r#"x"y=z"#.to_owned()])
    );
}

#[test]
fn test_whitespace_around_equals() {
    assert_eq!(
        getattr("<a id = \"1\" class =\t2>", "a", &["id", "class"]),
        Ok(vec!["1".to_owned(), "2".to_owned()])
    );
}

#[test]
fn test_vertical_tab_is_whitespace() {
    assert_eq!(
        getattr("<a\x0bid=1\x0bclass=2>", "a", &["id", "class"]),
        Ok(vec!["1".to_owned(), "2".to_owned()])
    );
}

#[test]
fn test_leading_whitespace_before_tag_name() {
    assert_eq!(getattr("< \n a id=1>", "a", &["id"]), Ok(vec!["1".to_owned()]));
}

#[test]
fn test_quoted_value_directly_followed_by_key() {
    assert_eq!(
        getattr(r#"<a id="1"class="2">"#, "a", &["class"]),
        Ok(vec!["2".to_owned()])
    );
}

#[test]
fn test_empty_values() {
    assert_eq!(getattr(r#"<a id="">"#, "a", &["id"]), Ok(vec!["".to_owned()]));
}

#[test]
fn test_equals_in_tag_name_starts_attribute_with_empty_key() {
    assert_eq!(getattr("<a=1>", "a", &[""]), Ok(vec!["1".to_owned()]));
    assert_eq!(getattr("<a=1>", "a=1", &[""]), Ok(vec![]));
    assert_eq!(
        tags("<a=1 id=2>"),
        vec![Tag {
            name: b"a".to_vec(),
            attributes: vec![(b"".to_vec(), b"1".to_vec()), (b"id".to_vec(), b"2".to_vec())],
            closed: true,
        }]
    );
}

#[test]
fn test_character_after_bare_key_is_an_error() {
    let (values, error) = getattr("<a id=1><input disabled type=text><a id=2>", "a", &["id"])
        .unwrap_err();
    assert_eq!(values, vec!["1".to_owned()]);
    assert_eq!(error, Error::UnexpectedCharacterAfterAttributeKey { byte: b't' });
    assert_eq!(error.kind(), ErrorKind::UnexpectedCharacterAfterAttributeKey);
}

#[test]
fn test_eof_in_unquoted_value_flushes_it() {
    assert_eq!(getattr("<a id=foo", "a", &["id"]), Ok(vec!["foo".to_owned()]));
    assert_eq!(
        tags("<a id=foo"),
        vec![Tag {
            name: b"a".to_vec(),
            attributes: vec![(b"id".to_vec(), b"foo".to_vec())],
            closed: false,
        }]
    );
}

#[test]
fn test_eof_in_quoted_value_drops_it() {
    assert_eq!(getattr(r#"<a x=1 id="foo"#, "a", &["x", "id"]), Ok(vec!["1".to_owned()]));
}

#[test]
fn test_eof_after_backslash() {
    assert_eq!(getattr(r#"<a id="foo\"#, "a", &["id"]), Ok(vec![]));
}

#[test]
fn test_eof_in_other_tag_states() {
    for input in ["<", "<a", "<a ", "<a id", "<a id ", "<a id=", "<a id= "] {
        assert_eq!(getattr(input, "a", &["id"]), Ok(vec![]), "input: {:?}", input);
        let tags = tags(input);
        assert_eq!(tags.len(), 1, "input: {:?}", input);
        assert!(!tags[0].closed);
    }
}

#[test]
fn test_empty_tag() {
    assert_eq!(
        tags("<><  >"),
        vec![
            Tag {
                name: vec![],
                attributes: vec![],
                closed: true
            },
            Tag {
                name: vec![],
                attributes: vec![],
                closed: true
            }
        ]
    );
}

#[test]
fn test_value_overflow_stops_scanning() {
    let limits = Limits::uniform(4);
    let input = r#"<a id="1234"><a id="12345"><a id="6">"#;
    let (values, error) = getattr_with_limits(input, "a", &["id"], limits).unwrap_err();
    assert_eq!(values, vec!["1234".to_owned()]);
    assert_eq!(
        error,
        Error::BufferOverflow {
            buffer: BufferKind::Value,
            state: State::AttributeValueQuoted,
        }
    );
}

#[test]
fn test_key_overflow() {
    let limits = Limits::default().key(3);
    let (values, error) =
        getattr_with_limits("<a id=1 name=2>", "a", &["id"], limits).unwrap_err();
    assert_eq!(values, vec!["1".to_owned()]);
    assert_eq!(
        error,
        Error::BufferOverflow {
            buffer: BufferKind::Key,
            state: State::AttributeKey,
        }
    );
}

#[test]
fn test_overflow_states_are_reported() {
    let tiny = Limits::uniform(0).name(1);
    let cases = [
        ("<a", Limits::uniform(0), BufferKind::Name, State::TagOpen),
        ("<ab", Limits::uniform(1), BufferKind::Name, State::TagName),
        ("<a b", tiny, BufferKind::Key, State::AfterTagName),
        ("<a bc", Limits::uniform(1), BufferKind::Key, State::AttributeKey),
        ("<a=x", tiny, BufferKind::Value, State::BeforeAttributeValue),
        ("<a= x", tiny, BufferKind::Value, State::WhitespaceBeforeAttributeValue),
        ("<a=xy", Limits::uniform(1), BufferKind::Value, State::AttributeValueUnquoted),
        ("<a=\"x", tiny, BufferKind::Value, State::AttributeValueQuoted),
        ("<a=\"\\x", tiny, BufferKind::Value, State::AttributeValueQuoted),
    ];

    for (input, limits, buffer, state) in cases {
        let (_, error) = getattr_with_limits(input, "a", &[""], limits).unwrap_err();
        assert_eq!(error, Error::BufferOverflow { buffer, state }, "input: {:?}", input);
    }
}

#[test]
fn test_default_capacity_is_inclusive() {
    let value = "x".repeat(1024);
    let input = format!("<a id=\"{}\">", value);
    assert_eq!(getattr(&input, "a", &["id"]), Ok(vec![value.clone()]));

    let input = format!("<a id=\"{}x\"><a id=2>", value);
    let (values, error) = getattr(&input, "a", &["id"]).unwrap_err();
    assert!(values.is_empty());
    assert_eq!(error.kind(), ErrorKind::BufferOverflow);
}

#[test]
fn test_buffers_are_reset_between_tags() {
    let limits = Limits::uniform(3);
    assert_eq!(
        getattr_with_limits("<abc key=val><abc key=val>", "abc", &["key"], limits),
        Ok(vec!["val".to_owned(), "val".to_owned()])
    );
}

#[test]
fn test_scanning_twice_yields_identical_output() {
    let input = r#"<a id="1" class=x><b id=2><a id='3'>"#;
    let first = getattr(input, "a", &["id", "class"]);
    let second = getattr(input, "a", &["id", "class"]);
    assert_eq!(first, second);
    assert_eq!(
        first,
        Ok(vec!["1".to_owned(), "x".to_owned(), "'3'".to_owned()])
    );
}

#[test]
fn test_readers_agree() {
    let input = "text <a id=\"x\\\"y\" class=c>more text<a\tid=2\n>".repeat(100);
    let filter = Filter::new("a").key("id").key("class");

    let from_str: Vec<Vec<u8>> =
        Scanner::new_with_emitter(input.as_str(), FilterEmitter::new(filter.clone()))
            .collect::<Result<_, _>>()
            .unwrap();

    let from_slow_str: Vec<Vec<u8>> = Scanner::new_with_emitter(
        SlowReader(input.as_str().to_reader()),
        FilterEmitter::new(filter.clone()),
    )
    .collect::<Result<_, _>>()
    .unwrap();

    let from_io: Vec<Vec<u8>> = Scanner::new_with_emitter(
        IoReader::new(input.as_bytes()),
        FilterEmitter::new(filter.clone()),
    )
    .collect::<Result<_, _>>()
    .unwrap();

    let from_slow_io: Vec<Vec<u8>> = Scanner::new_with_emitter(
        SlowReader(IoReader::new(input.as_bytes())),
        FilterEmitter::new(filter),
    )
    .collect::<Result<_, _>>()
    .unwrap();

    assert_eq!(from_str.len(), 300);
    assert_eq!(from_str, from_slow_str);
    assert_eq!(from_str, from_io);
    assert_eq!(from_str, from_slow_io);
}

#[test]
fn test_non_utf8_bytes_pass_through() {
    let input: &[u8] = b"<a id=\xff\xfe>";
    let values: Vec<Vec<u8>> =
        Scanner::new_with_emitter(input, FilterEmitter::new(Filter::new("a").key("id")))
            .collect::<Result<_, _>>()
            .unwrap();
    assert_eq!(values, vec![b"\xff\xfe".to_vec()]);
}

#[test]
fn test_callback_events() {
    let mut events = Vec::new();
    let emitter = CallbackEmitter::new(|event: CallbackEvent<'_>| -> Option<Infallible> {
        events.push(match event {
            CallbackEvent::OpenTag => "open".to_owned(),
            CallbackEvent::Attribute { tag, key, value } => format!(
                "attr {} {}={}",
                String::from_utf8_lossy(tag),
                String::from_utf8_lossy(key),
                String::from_utf8_lossy(value)
            ),
            CallbackEvent::CloseTag { name, closed } => {
                format!("close {} {}", String::from_utf8_lossy(name), closed)
            }
        });
        None
    });

    Scanner::new_with_emitter(r#"<p a=1 b="2"> <br"#, emitter)
        .finish()
        .unwrap();

    assert_eq!(
        events,
        vec![
            "open",
            "attr p a=1",
            "attr p b=2",
            "close p true",
            "open",
            "close br false",
        ]
    );
}

#[test]
fn test_scanner_state_and_emitter_access() {
    let mut scanner = Scanner::new_with_emitter(
        "<a id=1><a id=2>",
        FilterEmitter::new(Filter::new("a").key("id")),
    );
    assert_eq!(scanner.state(), State::Data);
    assert_eq!(scanner.next().unwrap().unwrap(), b"1");
    // `>` right after the value ends the tag
    assert_eq!(scanner.state(), State::Data);
    assert_eq!(scanner.emitter().filter().tag(), b"a");
    assert_eq!(scanner.next().unwrap().unwrap(), b"2");
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

#[test]
fn test_error_message() {
    let (_, error) =
        getattr_with_limits("<a id=toolong>", "a", &["id"], Limits::uniform(4)).unwrap_err();
    assert_eq!(
        error.to_string(),
        "value buffer overflow in attribute-value-unquoted state"
    );
    assert_eq!(
        ScanError::<std::io::Error>::Parse(error).to_string(),
        error.to_string()
    );
}

#[test]
fn test_tag_values_by_key() {
    let tags = tags(r#"<meta name=a content="1" name=b>"#);
    assert_eq!(tags.len(), 1);
    assert_eq!(
        tags[0].values(b"name").collect::<Vec<_>>(),
        vec![&b"a"[..], &b"b"[..]]
    );
    assert_eq!(tags[0].values(b"content").collect::<Vec<_>>(), vec![&b"1"[..]]);
    assert_eq!(tags[0].values(b"missing").count(), 0);
}

#[derive(Default)]
struct CountAttributes {
    count: usize,
}

impl Callback<Infallible> for CountAttributes {
    fn handle_event(&mut self, event: CallbackEvent<'_>) -> Option<Infallible> {
        if let CallbackEvent::Attribute { .. } = event {
            self.count += 1;
        }
        None
    }
}

#[test]
fn test_emitter_is_returned_after_scanning() {
    let mut scanner = Scanner::new_with_emitter(
        "<a x=1 y=2><b z=3 w>",
        CallbackEmitter::new(CountAttributes::default()),
    );
    for result in &mut scanner {
        match result {
            Ok(never) => match never {},
            Err(e) => panic!("{}", e),
        }
    }

    let mut emitter = scanner.into_emitter();
    assert_eq!(emitter.callback_mut().count, 3);

    // the emitter can be reused for more input
    emitter.callback_mut().count = 0;
    let mut scanner = Scanner::new_with_emitter("<c v=1>", emitter);
    assert!(scanner.next().is_none());
    assert_eq!(scanner.into_emitter().callback_mut().count, 1);
}
