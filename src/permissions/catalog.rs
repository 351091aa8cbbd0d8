/*!
 * Scope Catalog
 * Immutable registry of named scope bundles and their inclusion relation
 *
 * The catalog is produced by a pure builder from a static bundle table and
 * published once for the whole process. It is never mutated afterwards, so
 * request handlers read it concurrently without locking.
 */

use super::types::{Action, Resource, Scopes};
use crate::core::errors::CatalogError;
use ahash::RandomState;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A named combination of actions on one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bundle {
    pub name: &'static str,
    pub scopes: Scopes,
}

impl Bundle {
    pub(crate) const fn new(name: &'static str, resource: Resource, actions: &[Action]) -> Self {
        Self {
            name,
            scopes: Scopes::of(resource, actions),
        }
    }
}

/// Every scope accepted on the wire
pub const BUNDLES: &[Bundle] = &[
    Bundle::new("devices:read", Resource::Devices, &[Action::Read]),
    Bundle::new("devices:read-update", Resource::Devices, &[Action::Read, Action::Update]),
    Bundle::new("devices:delete", Resource::Devices, &[Action::Delete]),
    Bundle::new("updates:read", Resource::Updates, &[Action::Read]),
    Bundle::new("updates:read-update", Resource::Updates, &[Action::Read, Action::Update]),
    Bundle::new("users:read", Resource::Users, &[Action::Read]),
    Bundle::new("users:read-update", Resource::Users, &[Action::Read, Action::Update]),
    Bundle::new("users:create", Resource::Users, &[Action::Create]),
    Bundle::new("users:delete", Resource::Users, &[Action::Delete]),
];

/// Catalog row with its precomputed strict supersets
#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub(super) name: &'static str,
    pub(super) scopes: Scopes,
    pub(super) supersets: Box<[Scopes]>,
}

/// Lookup tables built from a bundle list
///
/// Entries are kept sorted by name so canonical output needs no extra sort.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(super) entries: Box<[Entry]>,
    pub(super) by_name: HashMap<&'static str, Scopes, RandomState>,
    names: Box<[&'static str]>,
}

impl Catalog {
    /// Build the name, mask and inclusion tables
    ///
    /// Exact duplicate rows collapse. A name bound to two masks, a mask bound to
    /// two names, or a bundle without any action bit is rejected.
    pub fn build(bundles: &[Bundle]) -> Result<Self, CatalogError> {
        let mut by_name: HashMap<&'static str, Scopes, RandomState> =
            HashMap::with_capacity_and_hasher(bundles.len(), RandomState::new());
        let mut unique: Vec<Bundle> = Vec::with_capacity(bundles.len());

        for bundle in bundles {
            if bundle.scopes.is_empty() {
                return Err(CatalogError::EmptyBundle(bundle.name.to_string()));
            }
            match by_name.get(bundle.name) {
                Some(&existing) if existing == bundle.scopes => continue,
                Some(&existing) => {
                    return Err(CatalogError::DuplicateName {
                        name: bundle.name.to_string(),
                        first: existing.bits(),
                        second: bundle.scopes.bits(),
                    })
                }
                None => {}
            }
            by_name.insert(bundle.name, bundle.scopes);
            unique.push(*bundle);
        }

        unique.sort_unstable_by_key(|bundle| bundle.name);

        let mut by_mask: HashMap<Scopes, usize, RandomState> =
            HashMap::with_capacity_and_hasher(unique.len(), RandomState::new());
        for (index, bundle) in unique.iter().enumerate() {
            if let Some(&other) = by_mask.get(&bundle.scopes) {
                return Err(CatalogError::DuplicateMask {
                    mask: bundle.scopes.bits(),
                    first: unique[other].name.to_string(),
                    second: bundle.name.to_string(),
                });
            }
            by_mask.insert(bundle.scopes, index);
        }

        let entries: Box<[Entry]> = unique
            .iter()
            .map(|bundle| Entry {
                name: bundle.name,
                scopes: bundle.scopes,
                supersets: unique
                    .iter()
                    .map(|candidate| candidate.scopes)
                    .filter(|&candidate| candidate != bundle.scopes && candidate.has(bundle.scopes))
                    .collect(),
            })
            .collect();
        let names = entries.iter().map(|entry| entry.name).collect();

        Ok(Self {
            entries,
            by_name,
            names,
        })
    }

    /// Mask of a catalog name
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Scopes> {
        self.by_name.get(name).copied()
    }

    /// Whether `scopes` is exactly a union of catalog bundles
    ///
    /// Only such masks have a name list that parses back to them.
    pub fn covers(&self, scopes: Scopes) -> bool {
        let named: Scopes = self
            .entries
            .iter()
            .filter(|entry| scopes.has(entry.scopes))
            .map(|entry| entry.scopes)
            .collect();
        named == scopes
    }

    /// All catalog names, sorted
    pub fn available_names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::build(BUNDLES)
        .unwrap_or_else(|err| panic!("built-in scope catalog is malformed: {err}"))
});

/// Process-wide catalog built from [`BUNDLES`]
#[inline]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
