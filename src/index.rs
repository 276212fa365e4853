//! Type-level positions into an alternative list.
//!
//! A position is a unary natural built from [`First`] and [`Next`]. The
//! [`Alt`](crate::store::Alt) trait ties a position to the type sitting at it,
//! so either side can be inferred from the other: name the type and let the
//! position be deduced, or name the position and let the type be deduced.

use core::marker::PhantomData;

/// Position 0 in an alternative list.
pub struct First;

/// The position directly after `P`.
pub struct Next<P>(PhantomData<P>);

/// A type-level position, carrying its numeric value.
pub trait Pos {
    /// The zero-based index this position denotes.
    const POS: u8;
}

impl Pos for First {
    const POS: u8 = 0;
}

impl<P: Pos> Pos for Next<P> {
    const POS: u8 = 1 + P::POS;
}

pub type P0 = First;
pub type P1 = Next<P0>;
pub type P2 = Next<P1>;
pub type P3 = Next<P2>;
pub type P4 = Next<P3>;
pub type P5 = Next<P4>;
pub type P6 = Next<P5>;
pub type P7 = Next<P6>;
pub type P8 = Next<P7>;
pub type P9 = Next<P8>;
pub type P10 = Next<P9>;
pub type P11 = Next<P10>;
pub type P12 = Next<P11>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_count_from_zero() {
        assert_eq!(P0::POS, 0);
        assert_eq!(P1::POS, 1);
        assert_eq!(P12::POS, 12);
    }
}
