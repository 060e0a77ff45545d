/// Which attributes to print: one tag name and a list of attribute keys.
///
/// All comparisons are exact and case-sensitive. Nothing is trimmed or normalized.
///
/// A key that is listed more than once matches once per listing, so its value is printed once
/// per listing as well.
///
/// ```rust
/// use getattr::Filter;
///
/// let filter = Filter::new("h1").with_keys(["id", "class", "id"]);
///
/// assert_eq!(filter.match_count(b"h1", b"id"), 2);
/// assert_eq!(filter.match_count(b"h1", b"class"), 1);
/// assert_eq!(filter.match_count(b"H1", b"class"), 0);
/// assert_eq!(filter.match_count(b"h2", b"id"), 0);
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Filter {
    tag: Vec<u8>,
    keys: Vec<Vec<u8>>,
}

impl Filter {
    /// A filter for the given tag name, without any attribute keys yet.
    pub fn new(tag: impl Into<Vec<u8>>) -> Self {
        Filter {
            tag: tag.into(),
            keys: Vec::new(),
        }
    }

    /// Add one attribute key.
    #[must_use]
    pub fn key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Add several attribute keys, in order.
    #[must_use]
    pub fn with_keys<K: Into<Vec<u8>>>(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// The requested tag name.
    pub fn tag(&self) -> &[u8] {
        &self.tag
    }

    /// The requested attribute keys, in the order they were added.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.keys.iter().map(Vec::as_slice)
    }

    /// Whether attributes of a tag with this name can match at all.
    pub fn matches_tag(&self, tag: &[u8]) -> bool {
        self.tag == tag
    }

    /// How many times the value of attribute `key` on tag `tag` should be emitted.
    pub fn match_count(&self, tag: &[u8], key: &[u8]) -> usize {
        if !self.matches_tag(tag) {
            return 0;
        }
        self.keys.iter().filter(|k| *k == key).count()
    }
}

#[test]
fn test_no_keys() {
    let filter = Filter::new("a");
    assert!(filter.matches_tag(b"a"));
    assert_eq!(filter.match_count(b"a", b"href"), 0);
}

#[test]
fn test_empty_key() {
    let filter = Filter::new("a").key("");
    assert_eq!(filter.match_count(b"a", b""), 1);
    assert_eq!(filter.match_count(b"a", b"x"), 0);
}

#[test]
fn test_keys_keep_order() {
    let filter = Filter::new("a").key("b").with_keys(vec!["c".to_owned(), "b".to_owned()]);
    assert_eq!(filter.tag(), b"a");
    assert_eq!(
        filter.keys().collect::<Vec<_>>(),
        vec![&b"b"[..], &b"c"[..], &b"b"[..]]
    );
}
