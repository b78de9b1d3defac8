use crate::concepts::switch_port::SwitchPort;
use thiserror::Error;

/// These are invariant violations, i.e. programming errors in the code that
/// builds a route tree. The model has no way to repair a structurally corrupt
/// tree after the fact, so it fails fast at the defect site instead of
/// returning a soft error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum TopologyDefect {
    /// A terminus ends a path and can never forward onward.
    #[error("cannot attach a child hop to a terminus")]
    ChildOfTerminus,
    /// The sentinel datapath id is reserved for route termination.
    #[error("a forwarding hop requires a non-empty datapath id")]
    EmptyDpid,
}

/// Although this is an error enum, these should be treated as warnings:
/// [`crate::concepts::hop::Hop::audit`] reports them without enforcing
/// anything, and the caller decides whether to log or reject the tree.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum TopologyWarning {
    /// A forwarding hop with no children is not a terminus; a finished route
    /// should end every branch explicitly.
    #[error("forwarding hop at {at} has no children; the branch is unterminated")]
    UnterminatedBranch { at: SwitchPort },
    /// Duplicate sibling out ports are allowed by the model, but a switch
    /// that enforces one child per physical output cannot install them.
    #[error("output port {port} appears on more than one child of hop at {at}")]
    DuplicateOutPort { at: SwitchPort, port: u16 },
}
