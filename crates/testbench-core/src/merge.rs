//! Layered config merging.

/// Combine two layers of configuration.
///
/// `self` is the lower-priority layer, `other` the higher-priority one.
/// Fields left unset in `other` keep the value from `self`.
pub trait Merge {
    fn merge(self, other: Self) -> Self;
}

impl<T> Merge for Option<T> {
    fn merge(self, other: Self) -> Self {
        other.or(self)
    }
}
