/*!
 * Serde Support
 * Wire representation of scope sets
 *
 * Scopes serialize as their canonical name list and deserialize from either a
 * list of names or a single comma-separated string. A mask the catalog cannot
 * name is a serialization error rather than a silently shortened list.
 */

use crate::permissions::{catalog, Scopes};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::{self, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for Scopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let catalog = catalog();
        if !catalog.covers(*self) {
            return Err(ser::Error::custom(format!(
                "scope mask {:#x} is not a union of catalog scopes",
                self.bits()
            )));
        }
        let names = catalog.to_names(*self);
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

struct ScopesVisitor;

impl<'de> Visitor<'de> for ScopesVisitor {
    type Value = Scopes;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of scope names or a comma-separated scope string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Scopes, E>
    where
        E: de::Error,
    {
        catalog().parse_str(value).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Scopes, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut scopes = Scopes::EMPTY;
        while let Some(token) = seq.next_element::<std::borrow::Cow<'de, str>>()? {
            scopes |= catalog().parse_tokens([token]).map_err(de::Error::custom)?;
        }
        Ok(scopes)
    }
}

impl<'de> Deserialize<'de> for Scopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScopesVisitor)
    }
}

/// Skip serializing empty scope sets (for use with skip_serializing_if)
pub fn is_empty_scopes(scopes: &Scopes) -> bool {
    scopes.is_empty()
}
