//! Generic XML codec for PayU wire types.
//!
//! Serialization names the document root after [`XmlSchema::ROOT`];
//! deserialization checks the root before handing the document to `serde`, so
//! a `<paymentRetry>` document is never silently read as a `<request>`.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::XmlError;
use crate::schema::XmlSchema;

/// XML declaration prepended by [`to_document`].
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Serializes `value` as an XML element named after its schema root.
///
/// # Errors
///
/// Returns [`XmlError::Serialize`] if the value cannot be represented as XML.
pub fn to_string<T>(value: &T) -> Result<String, XmlError>
where
    T: XmlSchema + Serialize,
{
    quick_xml::se::to_string_with_root(T::ROOT, value)
        .map_err(|e| XmlError::Serialize(e.to_string()))
}

/// Serializes `value` as a complete XML document, declaration included.
///
/// # Errors
///
/// Returns [`XmlError::Serialize`] if the value cannot be represented as XML.
pub fn to_document<T>(value: &T) -> Result<String, XmlError>
where
    T: XmlSchema + Serialize,
{
    let body = to_string(value)?;
    Ok(format!("{XML_DECLARATION}{body}"))
}

/// Deserializes a document whose root element is `T`'s schema root.
///
/// Elements absent from the document deserialize as `None`; absence is not an
/// error.
///
/// # Errors
///
/// - [`XmlError::MissingRoot`] if the document has no element at all
/// - [`XmlError::UnexpectedRoot`] if the root element is not [`XmlSchema::ROOT`]
/// - [`XmlError::Deserialize`] if the document is malformed or does not fit `T`
pub fn from_str<T>(xml: &str) -> Result<T, XmlError>
where
    T: XmlSchema + DeserializeOwned,
{
    let found = root_element(xml)?;
    if found != T::ROOT {
        return Err(XmlError::UnexpectedRoot {
            expected: T::ROOT,
            found,
        });
    }
    quick_xml::de::from_str(xml).map_err(|e| XmlError::Deserialize(e.to_string()))
}

/// Returns the name of the first element in `xml`.
///
/// # Errors
///
/// Returns [`XmlError::MissingRoot`] if the document contains no element, or
/// [`XmlError::Deserialize`] if the reader hits malformed markup first.
pub fn root_element(xml: &str) -> Result<String, XmlError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(XmlError::MissingRoot),
            Ok(_) => {}
            Err(e) => return Err(XmlError::Deserialize(e.to_string())),
        }
    }
}

/// Returns the names of the root element's direct children, in document
/// order.
///
/// # Errors
///
/// Returns [`XmlError::MissingRoot`] if the document contains no element, or
/// [`XmlError::Deserialize`] on malformed markup.
pub fn child_elements(xml: &str) -> Result<Vec<String>, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut names = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if depth == 1 {
                    names.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) => match depth {
                0 => return Ok(names),
                1 => names.push(String::from_utf8_lossy(e.name().as_ref()).into_owned()),
                _ => {}
            },
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(names);
                }
            }
            Ok(Event::Eof) => return Err(XmlError::MissingRoot),
            Ok(_) => {}
            Err(e) => return Err(XmlError::Deserialize(e.to_string())),
        }
    }
}
