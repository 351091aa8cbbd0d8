/*!
 * Scope Codec
 * Text <-> scope mask conversion with canonical, minimal output
 */

use super::catalog::{catalog, Catalog, Entry};
use super::types::Scopes;
use crate::core::errors::{ScopeError, ScopeResult};
use std::fmt;
use std::str::FromStr;

/// Separator of the textual wire format
pub const SCOPE_SEPARATOR: char = ',';

impl Catalog {
    /// Parse a comma-separated scope list
    ///
    /// An empty string is a single empty token and is rejected like any other
    /// unknown name.
    pub fn parse_str(&self, text: &str) -> ScopeResult<Scopes> {
        self.parse_tokens(text.split(SCOPE_SEPARATOR))
    }

    /// Parse an ordered list of scope names
    ///
    /// Tokens are trimmed and OR-ed together. The first unknown token aborts the
    /// whole parse.
    pub fn parse_tokens<I>(&self, tokens: I) -> ScopeResult<Scopes>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        tokens.into_iter().try_fold(Scopes::EMPTY, |acc, token| {
            let token = token.as_ref().trim();
            match self.lookup(token) {
                Some(scopes) => Ok(acc | scopes),
                None => Err(ScopeError::InvalidScope(token.to_string())),
            }
        })
    }

    /// Canonical names for `scopes`, in ascending order
    pub fn canonical(&self, scopes: Scopes) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(move |entry| scopes.has(entry.scopes) && !is_redundant(entry, scopes))
            .map(|entry| entry.name)
    }

    /// Minimal sorted list of names whose union is `scopes`
    pub fn to_names(&self, scopes: Scopes) -> Vec<&'static str> {
        self.canonical(scopes).collect()
    }

    /// Canonical names of `required` not covered by `granted`
    pub fn missing_names(&self, granted: Scopes, required: Scopes) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|entry| required.has(entry.scopes) && !is_redundant(entry, required))
            .filter(|entry| !granted.has(entry.scopes))
            .map(|entry| entry.name)
            .collect()
    }

    /// Comma-joined canonical names, empty for no scopes
    pub fn serialize(&self, scopes: Scopes) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_canonical(&mut out, scopes);
        out
    }

    fn write_canonical<W: fmt::Write>(&self, out: &mut W, scopes: Scopes) -> fmt::Result {
        for (i, name) in self.canonical(scopes).enumerate() {
            if i > 0 {
                out.write_char(SCOPE_SEPARATOR)?;
            }
            out.write_str(name)?;
        }
        Ok(())
    }
}

/// A granted bundle is redundant when a granted bundle strictly includes it
#[inline]
fn is_redundant(entry: &Entry, scopes: Scopes) -> bool {
    entry.supersets.iter().any(|&superset| scopes.has(superset))
}

/// Parse a comma-separated scope list with the process-wide catalog
pub fn parse_str(text: &str) -> ScopeResult<Scopes> {
    catalog().parse_str(text)
}

/// Parse a list of scope names with the process-wide catalog
pub fn parse_tokens<I>(tokens: I) -> ScopeResult<Scopes>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    catalog().parse_tokens(tokens)
}

/// Canonical, sorted scope names
pub fn to_names(scopes: Scopes) -> Vec<&'static str> {
    catalog().to_names(scopes)
}

/// Canonical comma-joined form
pub fn serialize(scopes: Scopes) -> String {
    catalog().serialize(scopes)
}

/// True iff every scope in `required` is granted
#[inline]
pub fn has(granted: Scopes, required: Scopes) -> bool {
    granted.has(required)
}

/// Every scope name the catalog accepts, sorted for presentation
pub fn available_names() -> &'static [&'static str] {
    catalog().available_names()
}

impl FromStr for Scopes {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}

impl fmt::Display for Scopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        catalog().write_canonical(f, *self)
    }
}
