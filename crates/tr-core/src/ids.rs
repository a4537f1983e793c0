use core::fmt;
use core::num::NonZeroU32;

/// Generation-checked handle into an arena slot.
///
/// - `index` names the slot, `generation` the occupant it was issued for
/// - `NonZero` generation keeps `Option<handle>` the same size as the handle
pub trait Handle: Copy + Eq {
    fn from_parts(index: u32, generation: NonZeroU32) -> Self;
    fn index(self) -> u32;
    fn generation(self) -> NonZeroU32;
}

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            index: u32,
            generation: NonZeroU32,
        }

        impl $name {
            /// Build a first-generation handle from a 0-based slot index.
            pub fn from_index(index: u32) -> Self {
                Self {
                    index,
                    generation: NonZeroU32::MIN,
                }
            }
        }

        impl Handle for $name {
            fn from_parts(index: u32, generation: NonZeroU32) -> Self {
                Self { index, generation }
            }

            fn index(self) -> u32 {
                self.index
            }

            fn generation(self) -> NonZeroU32 {
                self.generation
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}v{})", stringify!($name), self.index, self.generation)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}v{}", $prefix, self.index, self.generation)
            }
        }
    };
}

define_handle!(
    /// Handle of a node owned by a graph.
    NodeId,
    "n"
);

define_handle!(
    /// Handle of an edge owned by its source node.
    EdgeId,
    "e"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_parts_round_trip() {
        let generation = NonZeroU32::new(7).unwrap();
        let id = NodeId::from_parts(42, generation);
        assert_eq!(id.index(), 42);
        assert_eq!(id.generation(), generation);
    }

    #[test]
    fn generations_distinguish_handles() {
        let first = EdgeId::from_index(3);
        let second = EdgeId::from_parts(3, NonZeroU32::new(2).unwrap());
        assert_ne!(first, second);
        assert_eq!(first.index(), second.index());
    }

    #[test]
    fn option_handle_is_small() {
        assert_eq!(
            core::mem::size_of::<NodeId>(),
            core::mem::size_of::<Option<NodeId>>()
        );
    }

    #[test]
    fn display_uses_prefix() {
        assert_eq!(NodeId::from_index(4).to_string(), "n4v1");
        assert_eq!(EdgeId::from_index(0).to_string(), "e0v1");
        assert_eq!(format!("{:?}", NodeId::from_index(1)), "NodeId(1v1)");
    }
}
