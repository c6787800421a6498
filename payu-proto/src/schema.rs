//! Declarative XML schema tables.
//!
//! Every wire type implements [`XmlSchema`], naming its root element and
//! listing its fields in document order. Field renames themselves are carried
//! by `serde` attributes on the type; the table is the single place that says
//! which fields are required and which never reach the wire.
//!
//! The table is consumed by the generic codec in [`crate::xml`] (root naming and
//! root verification) and by [`xsd_fragment`], which renders an XSD element
//! declaration for documentation and schema generation. Every table is checked
//! against the codec's actual output: the direct children written for a fully
//! populated value must be exactly its [`wire_fields`], in order.

use std::fmt::Write;

/// One row of a wire type's schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Element name on the wire.
    pub wire_name: &'static str,
    /// Name of the Rust field carrying the value.
    pub field: &'static str,
    /// Whether the gateway requires the element. Informative only: the codec
    /// does not reject documents missing a required element.
    pub required: bool,
    /// Whether the field is excluded from serialization entirely.
    pub transient: bool,
}

impl FieldSpec {
    /// Declares an optional element.
    #[must_use]
    pub const fn element(wire_name: &'static str, field: &'static str) -> Self {
        Self {
            wire_name,
            field,
            required: false,
            transient: false,
        }
    }

    /// Marks the element as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as transient (in-memory only).
    #[must_use]
    pub const fn transient(mut self) -> Self {
        self.transient = true;
        self
    }
}

/// A type with a declared XML shape.
pub trait XmlSchema {
    /// Name of the root element when the type is the document root.
    const ROOT: &'static str;

    /// Fields in document order, transient fields included.
    const FIELDS: &'static [FieldSpec];
}

/// Returns the fields of `T` that are written to the wire, in document order.
pub fn wire_fields<T: XmlSchema>() -> impl Iterator<Item = &'static FieldSpec> {
    T::FIELDS.iter().filter(|spec| !spec.transient)
}

/// Returns the fields of `T` that never reach the wire.
pub fn transient_fields<T: XmlSchema>() -> impl Iterator<Item = &'static FieldSpec> {
    T::FIELDS.iter().filter(|spec| spec.transient)
}

/// Looks up a field of `T` by its wire name.
#[must_use]
pub fn field_by_wire_name<T: XmlSchema>(wire_name: &str) -> Option<&'static FieldSpec> {
    T::FIELDS.iter().find(|spec| spec.wire_name == wire_name)
}

/// Renders an XSD element declaration for `T`.
///
/// Required fields become `minOccurs="1"`, all others `minOccurs="0"`.
/// Transient fields are omitted.
///
/// ```
/// use payu_proto::schema::xsd_fragment;
/// use payu_proto::Merchant;
///
/// let xsd = xsd_fragment::<Merchant>();
/// assert!(xsd.starts_with("<xs:element name=\"merchant\">"));
/// ```
#[must_use]
pub fn xsd_fragment<T: XmlSchema>() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<xs:element name=\"{}\">", T::ROOT);
    out.push_str("  <xs:complexType>\n    <xs:sequence>\n");
    for spec in wire_fields::<T>() {
        let _ = writeln!(
            out,
            "      <xs:element name=\"{}\" minOccurs=\"{}\"/>",
            spec.wire_name,
            u8::from(spec.required)
        );
    }
    out.push_str("    </xs:sequence>\n  </xs:complexType>\n</xs:element>");
    out
}
