//! Storage layout derived from an alternative list.
//!
//! A [`Variant`](crate::Variant) keeps all of its alternatives in one region,
//! so that region must be as large and as aligned as the most demanding
//! alternative. The nested-union representation in [`store`](crate::store)
//! already makes the compiler compute that layout; this module surfaces the
//! same two numbers as explicit compile-time constants so they can be named,
//! reasoned about, and pinned in tests.

use core::mem;

/// The layout requirements of a single region able to host any alternative in
/// the list.
///
/// The computation is a component-wise maximum, so it is order-independent:
/// permuting the list never changes the result. A single-type list reports
/// that type's own size and alignment. The empty list reports the degenerate
/// `(0, 1)`; a [`Variant`](crate::Variant) over it is unconstructible anyway.
pub trait StoreLayout {
    /// The largest `size_of` among all alternatives.
    const MAX_SIZE: usize;
    /// The largest `align_of` among all alternatives.
    const MAX_ALIGN: usize;
}

const fn max(a: usize, b: usize) -> usize {
    if a < b {
        b
    } else {
        a
    }
}

impl StoreLayout for () {
    const MAX_SIZE: usize = 0;
    const MAX_ALIGN: usize = 1;
}

impl<Head, Tail: StoreLayout> StoreLayout for (Head, Tail) {
    const MAX_SIZE: usize = max(mem::size_of::<Head>(), Tail::MAX_SIZE);
    const MAX_ALIGN: usize = max(mem::align_of::<Head>(), Tail::MAX_ALIGN);
}

#[cfg(test)]
mod tests {
    use core::mem::{align_of, size_of};

    use static_assertions::{const_assert, const_assert_eq};

    use super::StoreLayout;
    use crate::store::AltList;
    use crate::List;

    type Mixed = List![u8, u64, u16];
    type Permuted = List![u16, u8, u64];

    const_assert_eq!(<Mixed as StoreLayout>::MAX_SIZE, 8);
    const_assert_eq!(<Mixed as StoreLayout>::MAX_ALIGN, 8);

    // Permuting the list must not change the layout.
    const_assert_eq!(
        <Mixed as StoreLayout>::MAX_SIZE,
        <Permuted as StoreLayout>::MAX_SIZE
    );
    const_assert_eq!(
        <Mixed as StoreLayout>::MAX_ALIGN,
        <Permuted as StoreLayout>::MAX_ALIGN
    );

    // The actual storage honors the computed requirements.
    const_assert!(size_of::<<Mixed as AltList>::Repr>() >= <Mixed as StoreLayout>::MAX_SIZE);
    const_assert!(align_of::<<Mixed as AltList>::Repr>() >= <Mixed as StoreLayout>::MAX_ALIGN);
    const_assert_eq!(size_of::<<Mixed as AltList>::Repr>(), 8);
    const_assert_eq!(align_of::<<Mixed as AltList>::Repr>(), 8);

    type Single = List![u32];

    const_assert_eq!(<Single as StoreLayout>::MAX_SIZE, size_of::<u32>());
    const_assert_eq!(<Single as StoreLayout>::MAX_ALIGN, align_of::<u32>());

    #[test]
    fn non_trivial_alternative_dominates() {
        use std::string::String;

        type L = List![u8, String];
        assert_eq!(<L as StoreLayout>::MAX_SIZE, size_of::<String>());
        assert_eq!(<L as StoreLayout>::MAX_ALIGN, align_of::<String>());
        assert_eq!(size_of::<<L as AltList>::Repr>(), size_of::<String>());
    }
}
