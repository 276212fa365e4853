//! Tag-dispatched `Clone` and `Debug` walks over the union nest.
//!
//! Duplicating or printing a variant must go through the active alternative's
//! own impl; the tag selects which level of the nest that is. These traits are
//! crate-private: they surface only as bounds on the `Clone` and `Debug` impls
//! of [`Variant`](crate::Variant), where they amount to "every alternative is
//! `Clone`" (resp. `Debug`).

use core::fmt;
use core::mem::ManuallyDrop;
use core::ptr;

use crate::store::{AltList, Never, Slot};

pub trait AltClone: AltList {
    /// # Safety
    ///
    /// `repr` must point to storage whose live slot is `tag`.
    unsafe fn clone_in(repr: *const Self::Repr, tag: u8) -> ManuallyDrop<Self::Repr>;
}

impl AltClone for () {
    unsafe fn clone_in(_: *const Never, _: u8) -> ManuallyDrop<Never> {
        unreachable!("clone of a variant with no live alternative")
    }
}

impl<Head: Clone, Tail: AltClone> AltClone for (Head, Tail) {
    unsafe fn clone_in(repr: *const Self::Repr, tag: u8) -> ManuallyDrop<Self::Repr> {
        if tag == 0 {
            let value = unsafe { &*ptr::addr_of!((*repr).value).cast::<Head>() };
            ManuallyDrop::new(Slot {
                value: ManuallyDrop::new(value.clone()),
            })
        } else {
            let rest = unsafe { Tail::clone_in(ptr::addr_of!((*repr).rest).cast(), tag - 1) };
            ManuallyDrop::new(Slot { rest })
        }
    }
}

pub trait AltDebug: AltList {
    /// # Safety
    ///
    /// `repr` must point to storage whose live slot is `tag`, unless
    /// `tag >= LEN`, in which case no slot may be live.
    unsafe fn debug_in(repr: *const Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>)
        -> fmt::Result;
}

impl AltDebug for () {
    unsafe fn debug_in(_: *const Never, _: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<no live alternative>")
    }
}

impl<Head: fmt::Debug, Tail: AltDebug> AltDebug for (Head, Tail) {
    unsafe fn debug_in(
        repr: *const Self::Repr,
        tag: u8,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if tag == 0 {
            let value = unsafe { &*ptr::addr_of!((*repr).value).cast::<Head>() };
            fmt::Debug::fmt(value, f)
        } else {
            unsafe { Tail::debug_in(ptr::addr_of!((*repr).rest).cast(), tag - 1, f) }
        }
    }
}
