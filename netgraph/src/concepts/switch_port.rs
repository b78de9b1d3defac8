#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Datapath id of a switch in the controlled topology.
///
/// The id is opaque 64-bit data; no structure is assumed beyond the all-zero
/// sentinel, which marks "no switch" and is used to end a route.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dpid(u64);

impl Dpid {
    /// The sentinel id, see [`Dpid::is_empty`]
    pub const EMPTY: Dpid = Dpid(0);

    pub fn new(id: u64) -> Self {
        Dpid(id)
    }

    /// Returns the raw id in host byte order
    pub fn as_host(&self) -> u64 {
        self.0
    }

    /// Whether this is the sentinel id marking the end of a route
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Dpid {
    fn from(id: u64) -> Self {
        Dpid(id)
    }
}

impl Display for Dpid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:012x}", self.0)
    }
}

/// A switch/port pair identifying a physical attachment point.
///
/// Two attachment points are equal iff both fields are equal. The type is a
/// plain value and derives `Eq + Hash + Ord`, so it can key any std container
/// directly (e.g. the discovered-topology map in [`crate::topology`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwitchPort {
    /// datapath id of the switch
    pub dpid: Dpid,
    /// port number on the switch
    pub port: u16,
}

impl SwitchPort {
    pub fn new(dpid: Dpid, port: u16) -> Self {
        SwitchPort { dpid, port }
    }

    /// Generates a 64-bit digest over `(port, dpid)`, in that field order.
    ///
    /// The digest is stable for equal inputs within one process and one crate
    /// version, which is what callers caching by it may rely on. The exact
    /// algorithm is not a compatibility surface and may change between
    /// versions.
    ///
    /// # Examples
    ///
    /// ```
    /// use netgraph::concepts::switch_port::{Dpid, SwitchPort};
    ///
    /// let a = SwitchPort::new(Dpid::new(7), 3);
    /// let b = SwitchPort::new(Dpid::new(7), 3);
    /// assert_eq!(a.hash_code(), b.hash_code());
    /// ```
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.port.hash(&mut hasher);
        self.dpid.hash(&mut hasher);
        hasher.finish()
    }
}

impl Display for SwitchPort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.dpid, self.port)
    }
}
