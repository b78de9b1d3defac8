use netgraph::concepts::hop::{Hop, Route};
use netgraph::concepts::switch_port::{Dpid, SwitchPort};

pub fn sp(dpid: u64, port: u16) -> SwitchPort {
    SwitchPort::new(Dpid::new(dpid), port)
}

/// unicast path: enters switch 1 on port 1, leaves on port 2 towards
/// switch 2, then switch 3, then terminates (host attached on port 4)
pub fn unicast_chain() -> Route {
    let mut h3 = Hop::forwarding(sp(3, 1));
    h3.add_child(4, Hop::terminus());
    let mut h2 = Hop::forwarding(sp(2, 1));
    h2.add_child(2, h3);
    let mut h1 = Hop::forwarding(sp(1, 1));
    h1.add_child(2, h2);
    h1
}

/// multicast tree: switch 1 replicates on ports 2 and 3 towards switches
/// 2 and 3, each branch ending at a host
pub fn multicast_tree() -> Route {
    let mut left = Hop::forwarding(sp(2, 1));
    left.add_child(5, Hop::terminus());
    let mut right = Hop::forwarding(sp(3, 1));
    right.add_child(6, Hop::terminus());
    let mut root = Hop::forwarding(sp(1, 1));
    root.add_child(2, left);
    root.add_child(3, right);
    root
}

/// unicast chain of `depth` forwarding hops, built bottom-up
pub fn deep_chain(depth: u64) -> Route {
    let mut hop = Hop::terminus();
    for dpid in (1..=depth).rev() {
        let mut parent = Hop::forwarding(sp(dpid, 1));
        parent.add_child(2, hop);
        hop = parent;
    }
    hop
}
