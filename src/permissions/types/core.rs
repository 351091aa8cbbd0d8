/*!
 * Scope Types
 * Resources, actions, and the packed scope set
 */

use crate::permissions::catalog::catalog;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Width of one resource lane in bits
pub const LANE_BITS: u32 = 4;

/// Protected resource category
///
/// Each resource owns a 4-bit lane of the 64-bit scope mask, which leaves room
/// for 16 resources without changing the stored format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Devices,
    Updates,
    Users,
}

impl Resource {
    /// Bit offset of this resource's lane
    #[inline]
    pub const fn lane_shift(self) -> u32 {
        match self {
            Resource::Devices => 0,
            Resource::Updates => LANE_BITS,
            Resource::Users => 2 * LANE_BITS,
        }
    }
}

/// Action bit within a resource lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Update,
    Create,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Read, Action::Update, Action::Create, Action::Delete];

    /// Bit within the lane (Read=0, Update=1, Create=2, Delete=3)
    #[inline]
    pub const fn bit(self) -> u64 {
        match self {
            Action::Read => 1 << 0,
            Action::Update => 1 << 1,
            Action::Create => 1 << 2,
            Action::Delete => 1 << 3,
        }
    }
}

/// Set of granted scopes, packed as one bit per (resource, action) pair
///
/// Every value reachable through the public API is a union of catalog
/// bundles, so it always has a canonical name list that parses back to it.
/// Values are combined with `|` and tested with [`Scopes::has`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Scopes(u64);

impl Scopes {
    pub const EMPTY: Scopes = Scopes(0);

    pub const DEVICES_READ: Scopes = Scopes::of(Resource::Devices, &[Action::Read]);
    pub const DEVICES_READ_UPDATE: Scopes =
        Scopes::of(Resource::Devices, &[Action::Read, Action::Update]);
    pub const DEVICES_DELETE: Scopes = Scopes::of(Resource::Devices, &[Action::Delete]);

    pub const UPDATES_READ: Scopes = Scopes::of(Resource::Updates, &[Action::Read]);
    pub const UPDATES_READ_UPDATE: Scopes =
        Scopes::of(Resource::Updates, &[Action::Read, Action::Update]);

    pub const USERS_READ: Scopes = Scopes::of(Resource::Users, &[Action::Read]);
    pub const USERS_READ_UPDATE: Scopes =
        Scopes::of(Resource::Users, &[Action::Read, Action::Update]);
    pub const USERS_CREATE: Scopes = Scopes::of(Resource::Users, &[Action::Create]);
    pub const USERS_DELETE: Scopes = Scopes::of(Resource::Users, &[Action::Delete]);

    /// Bundle of actions on a single resource
    pub(crate) const fn of(resource: Resource, actions: &[Action]) -> Scopes {
        let mut bits = 0;
        let mut i = 0;
        while i < actions.len() {
            bits |= actions[i].bit();
            i += 1;
        }
        Scopes(bits << resource.lane_shift())
    }

    /// Raw mask, as stored alongside a principal
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Rebuild from a stored mask
    ///
    /// `None` unless the mask is exactly a union of catalog bundles.
    pub fn from_bits(bits: u64) -> Option<Scopes> {
        let scopes = Scopes(bits);
        catalog().covers(scopes).then_some(scopes)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True iff every scope in `required` is present
    ///
    /// The empty requirement is always satisfied.
    #[inline]
    pub const fn has(self, required: Scopes) -> bool {
        self.0 & required.0 == required.0
    }

    #[inline]
    pub const fn union(self, other: Scopes) -> Scopes {
        Scopes(self.0 | other.0)
    }
}

impl BitOr for Scopes {
    type Output = Scopes;

    #[inline]
    fn bitor(self, rhs: Scopes) -> Scopes {
        self.union(rhs)
    }
}

impl BitOrAssign for Scopes {
    #[inline]
    fn bitor_assign(&mut self, rhs: Scopes) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Scopes> for Scopes {
    fn from_iter<I: IntoIterator<Item = Scopes>>(iter: I) -> Self {
        iter.into_iter().fold(Scopes::EMPTY, Scopes::union)
    }
}

impl fmt::Debug for Scopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scopes({:#05x} = [{}])", self.0, self)
    }
}
