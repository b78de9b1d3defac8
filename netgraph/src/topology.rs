use crate::concepts::switch_port::SwitchPort;
use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Discovered topology of the controlled network: a directed map from an
/// attachment point to the neighbour attachment point discovered behind it.
///
/// This is the container the route-installation component keeps between
/// discovery events; route computation reads it, link events mutate it. The
/// map is keyed by [`SwitchPort`] value, not by object identity.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Topology {
    // `#[serde_as]` does not expand field attributes hidden behind
    // `cfg_attr`, so spell out the `serde(with = ...)` form it expands to
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<Vec<(serde_with::Same, serde_with::Same)>>")
    )]
    links: HashMap<SwitchPort, SwitchPort>,
}

impl Topology {
    pub fn new() -> Self {
        Topology {
            links: HashMap::new(),
        }
    }

    /// Records that `from` is attached to `to`. Re-learning a link with a
    /// different neighbour replaces the old entry; that usually means the
    /// physical topology changed under us, so it is logged.
    pub fn add_link(&mut self, from: SwitchPort, to: SwitchPort) {
        if let Some(old) = self.links.insert(from, to) {
            if old != to {
                warn!("link at {from} moved: neighbour was {old}, now {to}");
            }
        }
    }

    /// Forgets the link at `from`, returning the neighbour it pointed to
    pub fn remove_link(&mut self, from: &SwitchPort) -> Option<SwitchPort> {
        self.links.remove(from)
    }

    /// The neighbour attachment point discovered behind `from`, if any
    pub fn neighbour(&self, from: &SwitchPort) -> Option<&SwitchPort> {
        self.links.get(from)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over `(attachment point, neighbour)` pairs in no particular
    /// order
    pub fn iter(&self) -> impl Iterator<Item = (&SwitchPort, &SwitchPort)> {
        self.links.iter()
    }
}
