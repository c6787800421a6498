//! Structural adapter for the `additionalInfo` element.
//!
//! In memory, additional info is a general string-keyed mapping. On the wire
//! the gateway only knows one key, `cardType`:
//!
//! ```xml
//! <additionalInfo>
//!   <cardType>CREDIT</cardType>
//! </additionalInfo>
//! ```
//!
//! The adapter is lossy. [`marshal`] keeps only [`CARD_TYPE_KEY`] and drops
//! every other key without error; [`unmarshal`] always yields a mapping with
//! exactly that one key. Absence is preserved in both directions: no mapping
//! (or an empty one) produces no element, and no element produces no mapping.
//!
//! Fields of this type are wired up with
//! `#[serde(with = "payu_proto::additional_info", default, skip_serializing_if = "payu_proto::additional_info::is_absent")]`.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::schema::{FieldSpec, XmlSchema};

/// The only key that survives the trip to the wire.
pub const CARD_TYPE_KEY: &str = "cardType";

/// In-memory additional info. A key may be present with no value.
pub type AdditionalInfo = HashMap<String, Option<String>>;

/// Fixed-shape wire form of [`AdditionalInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfoElement {
    /// Card type reported by the gateway.
    #[serde(rename = "cardType", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
}

impl XmlSchema for AdditionalInfoElement {
    const ROOT: &'static str = "additionalInfo";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::element("cardType", "card_type")];
}

/// Converts a mapping to its wire element.
///
/// Returns `None` for an absent or empty mapping. Otherwise returns one
/// element whose card type is the mapping's [`CARD_TYPE_KEY`] value, or `None`
/// when the key is missing. All other keys are discarded.
#[must_use]
pub fn marshal(info: Option<&AdditionalInfo>) -> Option<AdditionalInfoElement> {
    let info = info.filter(|map| !map.is_empty())?;
    Some(AdditionalInfoElement {
        card_type: info.get(CARD_TYPE_KEY).cloned().flatten(),
    })
}

/// Converts a wire element back to a mapping.
///
/// Returns `None` when the element is absent, never an empty mapping.
/// Otherwise the mapping holds exactly one entry under [`CARD_TYPE_KEY`].
#[must_use]
pub fn unmarshal(element: Option<AdditionalInfoElement>) -> Option<AdditionalInfo> {
    let element = element?;
    let mut info = HashMap::with_capacity(1);
    info.insert(CARD_TYPE_KEY.to_owned(), element.card_type);
    Some(info)
}

/// Returns `true` if `info` would produce no element on the wire.
#[must_use]
#[allow(clippy::ref_option)]
pub fn is_absent(info: &Option<AdditionalInfo>) -> bool {
    info.as_ref().is_none_or(HashMap::is_empty)
}

/// `serde` serializer for `Option<AdditionalInfo>` fields.
///
/// # Errors
///
/// Propagates the underlying serializer's error.
#[allow(clippy::ref_option)]
pub fn serialize<S>(info: &Option<AdditionalInfo>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    marshal(info.as_ref()).serialize(serializer)
}

/// `serde` deserializer for `Option<AdditionalInfo>` fields.
///
/// # Errors
///
/// Propagates the underlying deserializer's error.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<AdditionalInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<AdditionalInfoElement>::deserialize(deserializer).map(unmarshal)
}
