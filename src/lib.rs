#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod arrays;
pub mod core;
pub mod packet;

mod macros;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::core::{
        is_same, visit, ActiveAlt, Alternative, IntSpec, MemberOf, Underlying, Variant, Visit,
    };
    pub use crate::{alternative, variant_enum};
}

// Re-export primary types at crate root for convenience.
pub use crate::core::width::{index_bits, storage_of, HasRepr, Width};
pub use crate::core::{
    is_same, visit, ActiveAlt, Alternative, IntSpec, MemberOf, Underlying, Variant, Visit,
};
pub use crate::packet::Packet;
