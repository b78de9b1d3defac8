use netgraph::concepts::switch_port::{Dpid, SwitchPort};
use netgraph::topology::Topology;

mod common;
use common::trees::sp;

#[test]
fn equal_identities_hash_equal() {
    // two independent constructions of the same attachment point
    let a = SwitchPort::new(Dpid::new(7), 3);
    let b = SwitchPort::new(Dpid::new(7), 3);
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
    assert_eq!(a.hash_code(), a.hash_code()); // stable across calls
}

#[test]
fn distinct_identities() {
    assert_ne!(sp(7, 3), sp(7, 4));
    assert_ne!(sp(7, 3), sp(8, 3));
    assert_eq!(sp(7, 3), sp(7, 3));
}

#[test]
fn sentinel_dpid() {
    assert!(Dpid::EMPTY.is_empty());
    assert!(Dpid::new(0).is_empty());
    assert!(!Dpid::new(7).is_empty());
    assert_eq!(Dpid::from(9).as_host(), 9);
}

#[test]
fn identity_keys_a_topology_map() {
    let mut topo = Topology::new();
    topo.add_link(sp(1, 2), sp(2, 1));
    topo.add_link(sp(2, 2), sp(3, 1));
    assert_eq!(topo.len(), 2);

    // lookup is by value, not by instance
    assert_eq!(topo.neighbour(&sp(1, 2)), Some(&sp(2, 1)));
    assert_eq!(topo.neighbour(&sp(1, 3)), None);

    // re-learning a link replaces the neighbour
    topo.add_link(sp(1, 2), sp(4, 1));
    assert_eq!(topo.neighbour(&sp(1, 2)), Some(&sp(4, 1)));
    assert_eq!(topo.len(), 2);

    assert_eq!(topo.remove_link(&sp(2, 2)), Some(sp(3, 1)));
    assert_eq!(topo.remove_link(&sp(2, 2)), None);
    assert_eq!(topo.len(), 1);
    assert!(!topo.is_empty());
}

#[test]
fn identity_display() {
    assert_eq!(sp(0xab, 7).to_string(), "0000000000ab:7");
}
