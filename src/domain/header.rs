/// A single message header. Names compare case-insensitively but keep the
/// casing they were declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: String,
    body: String,
}

impl Header {
    pub fn text(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Tag used by providers to categorize outgoing mail.
    pub fn tag(value: impl Into<String>) -> Self {
        Self::text("X-Tag", value)
    }

    /// Key/value metadata rendered as `X-Metadata-<key>`.
    pub fn metadata(key: &str, value: impl Into<String>) -> Self {
        Self::text(format!("X-Metadata-{}", key), value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Ordered header collection. Repeated names are kept as distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<Header>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, header: Header) {
        self.0.push(header);
    }

    pub fn add_text(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.add(Header::text(name, body));
    }

    /// First header declared with `name`, any casing.
    pub fn get(&self, name: &str) -> Option<&Header> {
        self.0.iter().find(|h| h.is_named(name))
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<Header> for Headers {
    fn extend<T: IntoIterator<Item = Header>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
