//! Arena indices for expressions and types.
//!
//! Nodes refer to their children by `u32` index instead of `Box`, so the
//! whole tree lives in a few contiguous vectors inside [`ExprArena`](crate::ExprArena).

use std::fmt;

macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Invalid ID (sentinel value).
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", stringify!($name), self.0)
                } else {
                    write!(f, "{}::INVALID", stringify!($name))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    )* };
}

define_id!(
    /// Index into the expression arena.
    ExprId,
    /// Index into the type arena.
    TypeId,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_id_basic() {
        let id = ExprId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id.raw(), 42);
        assert!(id.is_valid());
    }

    #[test]
    fn test_default_is_invalid() {
        assert!(!ExprId::default().is_valid());
        assert!(!TypeId::default().is_valid());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", TypeId::new(7)), "TypeId(7)");
        assert_eq!(format!("{:?}", ExprId::INVALID), "ExprId::INVALID");
    }
}
