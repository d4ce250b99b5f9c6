//! XSD reader built on `quick-xml`.
//!
//! This module adapts a `quick-xml` event stream into [`SchemaToken`]s and
//! provides the one-call entry points used by the code generator.

use crate::error::{ParseError, SchemaError};
use crate::resolver::{ResolvedOrderMap, ResolverConfig, resolve};
use crate::token::{SchemaToken, TokenSource};
use crate::walker::{SchemaIndex, SchemaWalker};
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use std::io::BufRead;

/// Token source over an XML document.
///
/// Tag and attribute names are reported by local name. Self-closing elements
/// produce an open token immediately followed by a close token.
pub struct XmlTokenSource<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    pending_close: bool,
}

impl<'a> XmlTokenSource<&'a [u8]> {
    /// Creates a token source over an in-memory document.
    #[must_use]
    pub fn from_xml(xml: &'a str) -> Self {
        Self::with_reader(Reader::from_str(xml))
    }
}

impl<R: BufRead> XmlTokenSource<R> {
    /// Creates a token source over any buffered reader, e.g. an opened file.
    #[must_use]
    pub fn from_reader(reader: R) -> Self {
        Self::with_reader(Reader::from_reader(reader))
    }

    fn with_reader(mut reader: Reader<R>) -> Self {
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            pending_close: false,
        }
    }

    /// Returns the byte position of the reader in the input.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.reader.buffer_position()
    }
}

impl<R: BufRead> TokenSource for XmlTokenSource<R> {
    fn next_token(&mut self) -> Result<Option<SchemaToken>, ParseError> {
        if self.pending_close {
            self.pending_close = false;
            return Ok(Some(SchemaToken::Close));
        }

        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(ref e) => return open_token(e, self.reader.decoder()).map(Some),
                Event::Empty(ref e) => {
                    let token = open_token(e, self.reader.decoder())?;
                    self.pending_close = true;
                    return Ok(Some(token));
                }
                Event::End(_) => return Ok(Some(SchemaToken::Close)),
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }
}

/// Converts a start tag into an open token.
///
/// Names and values are decoded with the encoding the reader picked up from
/// the BOM or the XML declaration, UTF-8 when neither is present.
fn open_token(e: &BytesStart<'_>, decoder: Decoder) -> Result<SchemaToken, ParseError> {
    let tag = decoder.decode(e.local_name().as_ref())?.into_owned();
    let mut attributes = Vec::new();

    for attr in e.attributes() {
        let attr = attr?;
        let key = decoder.decode(attr.key.local_name().as_ref())?.into_owned();
        let value = decoder.decode(&attr.value)?.into_owned();
        attributes.push((key, value));
    }

    Ok(SchemaToken::Open { tag, attributes })
}

/// Walks an XSD document from a string.
///
/// # Errors
/// Returns `SchemaError::Malformed` if the XML is not well-formed. The error
/// carries whatever was indexed before the problem.
pub fn walk_schema(xml: &str) -> Result<SchemaIndex, SchemaError> {
    let mut source = XmlTokenSource::from_xml(xml);
    SchemaWalker::new().walk(&mut source)
}

/// Walks and resolves an XSD document from a string.
///
/// # Errors
/// Returns `SchemaError` if the XML is malformed or the type graph is cyclic
/// under `CyclePolicy::Reject`.
pub fn order_schema(
    xml: &str,
    config: &ResolverConfig,
) -> Result<ResolvedOrderMap, SchemaError> {
    let index = walk_schema(xml)?;
    resolve(index, config)
}
