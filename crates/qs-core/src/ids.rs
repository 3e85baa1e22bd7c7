//! Strongly typed identifier wrappers.
//!
//! Both ids are 1-based sequence numbers: agents are numbered in arrival
//! order, handlers in pool order.  Neither is used as a `Vec` index directly;
//! use [`AgentId::slot`] / [`HandlerId::slot`] for the 0-based position.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first id handed out.
            pub const FIRST: $name = $name(1);

            /// Build the id for the 0-based position `slot`.
            #[inline(always)]
            pub fn from_slot(slot: usize) -> Self {
                $name(slot as $inner + 1)
            }

            /// 0-based position of this id in its owning `Vec`.
            #[inline(always)]
            pub fn slot(self) -> usize {
                (self.0 - 1) as usize
            }

            /// The id that follows `self`.
            #[inline(always)]
            pub fn next(self) -> Self {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0 as u64
            }
        }
    };
}

typed_id! {
    /// Sequence number of a generated agent, assigned in arrival order.
    pub struct AgentId(u32);
}

typed_id! {
    /// Position of a handler in the pool, `1..=handler_count`.
    pub struct HandlerId(u32);
}
