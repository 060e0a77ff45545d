use getattr::{Filter, FilterEmitter, Scanner, Tag};

use pretty_assertions::assert_eq;

/// Filtering while scanning has to give the same values as filtering the tags the default emitter
/// yields.
pub fn validate_filter_invariants(tag: &[u8], keys: &[Vec<u8>], input: &[u8]) {
    let filter = Filter::new(tag).with_keys(keys.iter().cloned());

    let mut tags: Vec<Tag> = Vec::new();
    let mut tags_error = None;
    for result in Scanner::new(input) {
        match result {
            Ok(tag) => tags.push(tag),
            Err(e) => tags_error = Some(e.to_string()),
        }
    }

    let mut values = Vec::new();
    let mut values_error = None;
    for result in Scanner::new_with_emitter(input, FilterEmitter::new(filter.clone())) {
        match result {
            Ok(value) => values.push(value),
            Err(e) => values_error = Some(e.to_string()),
        }
    }

    assert_eq!(tags_error, values_error);

    let mut expected = Vec::new();
    for tag in tags.iter().filter(|tag| filter.matches_tag(&tag.name)) {
        for (key, value) in &tag.attributes {
            for _ in 0..filter.match_count(&tag.name, key) {
                expected.push(value.clone());
            }
        }
    }

    if tags_error.is_none() {
        assert_eq!(values, expected);
    } else {
        // the tag that failed never reaches the default emitter, but values found on it before
        // the error have already been yielded
        assert_eq!(values[..expected.len()], expected[..]);
    }
}
