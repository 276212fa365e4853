//! The checked-accessor failure value.

use thiserror::Error;

/// Returned by [`get`](crate::get) and [`get_mut`](crate::get_mut) when the
/// requested alternative is not the live one.
///
/// The probing accessors ([`get_if`](crate::get_if),
/// [`holds_alternative`](crate::holds_alternative)) never produce this; they
/// report mismatch through `None`/`false` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bad variant access")]
pub struct BadAccess;
