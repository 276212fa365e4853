//! The nested-union storage behind a [`Variant`].
//!
//! # Implementation details
//!
//! An alternative list is a nested tuple, `(T0, (T1, (T2, ())))`, and its
//! storage is the matching nest of two-field unions:
//!
//! ```rust,no_run
//! # use core::convert::Infallible;
//! # use core::mem::ManuallyDrop;
//! struct Never(Infallible);
//! union Slot<T, Rest> {
//!     value: ManuallyDrop<T>,
//!     rest: ManuallyDrop<Rest>,
//! }
//!
//! // For example only. Not actually defined.
//! struct RawVariant2<T0, T1> {
//!     tag: u8,
//!     data: Slot<T0, Slot<T1, Never>>,
//! }
//! ```
//!
//! All of the slots overlap, so the whole nest is exactly as large and as
//! aligned as its most demanding alternative. The terminator is uninhabited,
//! which is what makes a `Variant` over the empty list unconstructible.
//!
//! Dispatch walks the nest with raw pointers, never materializing a reference
//! to an inactive slot, so a walk that runs off the end (possible only with a
//! poisoned tag) stops at the terminator without touching invalid memory.
//!
//! [`Variant`]: crate::Variant

use core::{convert::Infallible, mem::ManuallyDrop, ptr};

use crate::index::{First, Next, Pos};
use crate::layout::StoreLayout;

/// The terminator of the union nest. Uninhabited.
pub struct Never(#[allow(dead_code)] Infallible);

/// One level of the union nest: either this level's alternative or the rest
/// of the nest.
pub union Slot<T, Rest> {
    pub(crate) value: ManuallyDrop<T>,
    pub(crate) rest: ManuallyDrop<Rest>,
}

/// Implemented by nested-tuple type lists; supplies the storage representation
/// and the tag-dispatched destructor walk.
pub trait AltList: StoreLayout {
    /// The union nest hosting any one alternative of the list.
    type Repr;

    /// The number of alternatives in the list.
    const LEN: u8;

    /// Drops the alternative at position `tag` in place. A `tag` past the end
    /// of the list drops nothing.
    ///
    /// # Safety
    ///
    /// `repr` must point to initialized storage whose live slot is `tag`,
    /// unless `tag >= LEN`, in which case no slot may be live.
    #[doc(hidden)]
    unsafe fn drop_in(repr: *mut Self::Repr, tag: u8);
}

impl AltList for () {
    type Repr = Never;
    const LEN: u8 = 0;

    unsafe fn drop_in(_: *mut Never, _: u8) {}
}

impl<Head, Tail: AltList> AltList for (Head, Tail) {
    type Repr = Slot<Head, Tail::Repr>;
    const LEN: u8 = 1 + Tail::LEN;

    unsafe fn drop_in(repr: *mut Self::Repr, tag: u8) {
        if tag == 0 {
            unsafe { ptr::drop_in_place(ptr::addr_of_mut!((*repr).value).cast::<Head>()) }
        } else {
            unsafe { Tail::drop_in(ptr::addr_of_mut!((*repr).rest).cast(), tag - 1) }
        }
    }
}

/// Marks that the list `Self` has alternative `T` at position `P`, and gives
/// placement access to that slot.
///
/// There is one impl per (position, type) pair of every list, which lets type
/// inference run the resolver in both directions: with `T` known and `P` open
/// it computes the index of a type, failing to compile when the type is absent
/// from the list or occurs more than once (ambiguous); with `P` known and `T`
/// open it names the type at an index, failing to compile when the index is
/// out of range.
pub trait Alt<T, P: Pos>: AltList {
    /// Builds storage with `value` live in slot `P`.
    #[doc(hidden)]
    fn write(value: T) -> Self::Repr;

    /// Moves the value out of slot `P`.
    ///
    /// # Safety
    ///
    /// Slot `P` must be the live one.
    #[doc(hidden)]
    unsafe fn read(repr: Self::Repr) -> T;

    /// # Safety
    ///
    /// `repr` must be valid for reads; the returned pointer is only valid to
    /// dereference while slot `P` is the live one.
    #[doc(hidden)]
    unsafe fn as_ptr(repr: *const Self::Repr) -> *const T;

    /// # Safety
    ///
    /// Same contract as [`Alt::as_ptr`], for writes.
    #[doc(hidden)]
    unsafe fn as_mut_ptr(repr: *mut Self::Repr) -> *mut T;
}

impl<Head, Tail: AltList> Alt<Head, First> for (Head, Tail) {
    fn write(value: Head) -> Self::Repr {
        Slot {
            value: ManuallyDrop::new(value),
        }
    }

    unsafe fn read(repr: Self::Repr) -> Head {
        unsafe { ManuallyDrop::into_inner(repr.value) }
    }

    unsafe fn as_ptr(repr: *const Self::Repr) -> *const Head {
        unsafe { ptr::addr_of!((*repr).value).cast() }
    }

    unsafe fn as_mut_ptr(repr: *mut Self::Repr) -> *mut Head {
        unsafe { ptr::addr_of_mut!((*repr).value).cast() }
    }
}

impl<Head, Tail, T, P> Alt<T, Next<P>> for (Head, Tail)
where
    Tail: Alt<T, P>,
    P: Pos,
{
    fn write(value: T) -> Self::Repr {
        Slot {
            rest: ManuallyDrop::new(Tail::write(value)),
        }
    }

    unsafe fn read(repr: Self::Repr) -> T {
        unsafe { Tail::read(ManuallyDrop::into_inner(repr.rest)) }
    }

    unsafe fn as_ptr(repr: *const Self::Repr) -> *const T {
        unsafe { Tail::as_ptr(ptr::addr_of!((*repr).rest).cast()) }
    }

    unsafe fn as_mut_ptr(repr: *mut Self::Repr) -> *mut T {
        unsafe { Tail::as_mut_ptr(ptr::addr_of_mut!((*repr).rest).cast()) }
    }
}
