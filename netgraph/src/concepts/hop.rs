use crate::concepts::switch_port::SwitchPort;
use crate::feedback::{TopologyDefect, TopologyWarning};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::mem;

/// One node of a route tree.
///
/// A terminus ends a path and never carries children. A forwarding hop with
/// an empty child list is an as-yet-unterminated branch, not a terminus; the
/// two states are separate variants so they cannot be conflated.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hop {
    /// end of a path, traffic leaves the controlled topology here
    Terminus,
    /// a switch that forwards traffic onward through one or more output ports
    Forwarding(ForwardingHop),
}

/// A route is a tree of hops, rooted at the ingress hop. Each hop may
/// replicate to several output ports, so a route is a unicast chain or a
/// multicast tree.
pub type Route = Hop;

#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForwardingHop {
    /// the inbound switch/port this hop represents
    attachment: SwitchPort,
    /// downstream hops keyed by output port, in insertion order
    children: Vec<(u16, Hop)>,
}

impl Hop {
    /// Creates a childless hop for the given attachment point.
    ///
    /// The sentinel datapath id constructs a [`Hop::Terminus`], anything else
    /// a forwarding hop. This mirrors how route computation emits hops: it
    /// marks the end of a path with an empty datapath id.
    pub fn new(attachment: SwitchPort) -> Hop {
        if attachment.dpid.is_empty() {
            Hop::Terminus
        } else {
            Hop::Forwarding(ForwardingHop {
                attachment,
                children: Vec::new(),
            })
        }
    }

    pub fn terminus() -> Hop {
        Hop::Terminus
    }

    /// Creates a childless forwarding hop.
    ///
    /// # Panics
    ///
    /// Panics if the datapath id is the sentinel; a forwarding hop must name
    /// a real switch.
    pub fn forwarding(attachment: SwitchPort) -> Hop {
        if attachment.dpid.is_empty() {
            panic!("{}", TopologyDefect::EmptyDpid);
        }
        Hop::Forwarding(ForwardingHop {
            attachment,
            children: Vec::new(),
        })
    }

    pub fn is_terminus(&self) -> bool {
        matches!(self, Hop::Terminus)
    }

    /// The attachment point of this hop, `None` for a terminus
    pub fn attachment(&self) -> Option<SwitchPort> {
        match self {
            Hop::Terminus => None,
            Hop::Forwarding(fwd) => Some(fwd.attachment),
        }
    }

    /// Read-only view of the `(out port, child)` list, in insertion order.
    /// A terminus has no children.
    pub fn children(&self) -> &[(u16, Hop)] {
        match self {
            Hop::Terminus => &[],
            Hop::Forwarding(fwd) => fwd.children(),
        }
    }

    pub fn as_forwarding(&self) -> Option<&ForwardingHop> {
        match self {
            Hop::Terminus => None,
            Hop::Forwarding(fwd) => Some(fwd),
        }
    }

    /// Appends `(out_port, child)` to this hop, taking ownership of the
    /// child subtree. Sibling out ports are not required to be unique here;
    /// whether the switch can replicate twice on one port is the caller's
    /// concern (see [`Hop::audit`]).
    ///
    /// # Panics
    ///
    /// Panics if this hop is a terminus.
    pub fn add_child(&mut self, out_port: u16, child: Hop) {
        match self {
            Hop::Terminus => panic!("{}", TopologyDefect::ChildOfTerminus),
            Hop::Forwarding(fwd) => fwd.add_child(out_port, child),
        }
    }

    /// Walks the forwarding hops of this tree in pre-order, children in
    /// insertion order. This is the traversal a flow-installation pass
    /// consumes: for each yielded hop it can read the inbound attachment
    /// point and the chosen output ports.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Reviews the structure of this tree without enforcing anything.
    ///
    /// Reports a warning for every forwarding hop that has no children (a
    /// branch nothing terminates; installing flows from it would blackhole
    /// traffic at that switch) and for output ports repeated among siblings
    /// (legal in the model, suspect on hardware that allows a single child
    /// per physical output).
    pub fn audit(&self) -> Vec<TopologyWarning> {
        let mut warnings = Vec::new();
        for fwd in self.walk() {
            if fwd.children.is_empty() {
                warnings.push(TopologyWarning::UnterminatedBranch {
                    at: fwd.attachment,
                });
            }
            let mut seen = HashSet::new();
            for (out_port, _) in &fwd.children {
                if !seen.insert(*out_port) {
                    warnings.push(TopologyWarning::DuplicateOutPort {
                        at: fwd.attachment,
                        port: *out_port,
                    });
                }
            }
        }
        warnings
    }
}

impl ForwardingHop {
    pub fn attachment(&self) -> SwitchPort {
        self.attachment
    }

    pub fn children(&self) -> &[(u16, Hop)] {
        &self.children
    }

    pub fn add_child(&mut self, out_port: u16, child: Hop) {
        self.children.push((out_port, child));
    }
}

/* Dropping a hop must release the whole owned subtree without recursing,
   since route depth is bounded only by what the caller built. The worklist
   drains every hop's child list before that hop itself is dropped, so the
   recursive drop glue never sees a non-empty list. */
impl Drop for ForwardingHop {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some((_, hop)) = stack.pop() {
            if let Hop::Forwarding(mut fwd) = hop {
                stack.append(&mut fwd.children);
            }
        }
    }
}

/// Pre-order borrowing iterator over the forwarding hops of a route tree,
/// see [`Hop::walk`]
pub struct Walk<'a> {
    stack: Vec<&'a Hop>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ForwardingHop;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(hop) = self.stack.pop() {
            if let Hop::Forwarding(fwd) = hop {
                for (_, child) in fwd.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some(fwd);
            }
        }
        None
    }
}
