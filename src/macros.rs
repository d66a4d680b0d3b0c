//! Internal macros shared by the node types.

/// Implements identity-aware equality and cached-hash hashing for an
/// `Arc`-backed node whose data carries a leading `hash: u64` field.
macro_rules! interned_node {
    ($node:ident) => {
        impl $node {
            /// Check whether both handles point at the same pooled node.
            #[must_use]
            pub fn ptr_eq(&self, other: &Self) -> bool {
                std::sync::Arc::ptr_eq(&self.0, &other.0)
            }
        }

        impl PartialEq for $node {
            fn eq(&self, other: &Self) -> bool {
                self.ptr_eq(other) || *self.0 == *other.0
            }
        }

        impl Eq for $node {}

        impl std::hash::Hash for $node {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(self.0.hash);
            }
        }

        impl std::fmt::Debug for $node {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    };
}
