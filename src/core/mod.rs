//! The guts. Alternative descriptors, width selection, variant traits, dispatch.

pub mod alternative;
pub mod variant;
pub mod visit;
pub mod width;

pub use alternative::{Alternative, IntSpec, MemberOf, Underlying};
pub use variant::{is_same, ActiveAlt, Variant};
pub use visit::{visit, Visit};
