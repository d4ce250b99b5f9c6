//! Structural token model consumed by the schema walker.
//!
//! The walker only needs two event kinds, a node opening with its attributes
//! and a node closing, plus an end-of-stream signal. Any document format that
//! can be reduced to these events can be walked.

use crate::error::ParseError;

/// A single structural event of a schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaToken {
    /// A node was opened.
    Open {
        /// Local tag name, without namespace prefix.
        tag: String,
        /// Attributes as `(local name, raw value)` pairs in document order.
        attributes: Vec<(String, String)>,
    },
    /// The most recently opened node was closed.
    Close,
}

impl SchemaToken {
    /// Creates an open token.
    #[must_use]
    pub fn open<K, V>(tag: impl Into<String>, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Open {
            tag: tag.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Creates an open token without attributes.
    #[must_use]
    pub fn open_bare(tag: impl Into<String>) -> Self {
        Self::Open {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// Returns the value of the first attribute called `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::Open { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            Self::Close => None,
        }
    }

    /// Returns `true` for open tokens.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Pull-based supplier of structural tokens.
///
/// `Ok(None)` signals the end of the stream. Sources are read strictly
/// forward, once.
pub trait TokenSource {
    /// Returns the next token, or `None` at end of stream.
    ///
    /// # Errors
    /// Returns `ParseError` if the underlying document cannot be tokenized.
    fn next_token(&mut self) -> Result<Option<SchemaToken>, ParseError>;
}

/// Token source over an in-memory sequence of tokens.
#[derive(Debug, Clone)]
pub struct IterTokenSource<I> {
    tokens: I,
}

impl<I> IterTokenSource<I>
where
    I: Iterator<Item = SchemaToken>,
{
    /// Wraps any iterator of tokens.
    pub fn new(tokens: impl IntoIterator<IntoIter = I, Item = SchemaToken>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl<I> TokenSource for IterTokenSource<I>
where
    I: Iterator<Item = SchemaToken>,
{
    fn next_token(&mut self) -> Result<Option<SchemaToken>, ParseError> {
        Ok(self.tokens.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let token = SchemaToken::open("element", [("name", "price"), ("type", "xs:decimal")]);
        assert!(token.is_open());
        assert_eq!(token.attribute("name"), Some("price"));
        assert_eq!(token.attribute("type"), Some("xs:decimal"));
        assert_eq!(token.attribute("ref"), None);
        assert_eq!(SchemaToken::Close.attribute("name"), None);
    }

    #[test]
    fn test_attribute_first_wins() {
        let token = SchemaToken::open("element", [("name", "a"), ("name", "b")]);
        assert_eq!(token.attribute("name"), Some("a"));
    }

    #[test]
    fn test_iter_source_drains_in_order() {
        let mut source = IterTokenSource::new(vec![
            SchemaToken::open_bare("schema"),
            SchemaToken::Close,
        ]);

        assert_eq!(
            source.next_token().unwrap(),
            Some(SchemaToken::open_bare("schema"))
        );
        assert_eq!(source.next_token().unwrap(), Some(SchemaToken::Close));
        assert_eq!(source.next_token().unwrap(), None);
        assert_eq!(source.next_token().unwrap(), None);
    }
}
