//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A stock record keeps its identity while its quantities and location move
/// around; two records are "the same record" when their ids match.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, independent of the rest of the state.
    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
