//! Index-driven dispatch of a callable to the live alternative.
//!
//! A visitor is any value implementing [`Visitor`] for every alternative the
//! list holds (with one common `Output`). Dispatch walks the alternative list
//! at compile time and tests the runtime tag at each step, so the callable
//! always receives the live value at its static type and no caller ever
//! inspects the tag by hand.

use core::mem::ManuallyDrop;
use core::ptr;

use crate::store::{AltList, Never};
use crate::Variant;

/// One arm of a visit: how a callable consumes a single alternative.
///
/// Implement this for `&T` to support [`visit`], for `&mut T` to support
/// [`visit_mut`], and for `T` itself to support [`visit_take`]. Every
/// alternative of the visited list needs an impl, and all impls must agree on
/// `Output`; a missing arm is a compile-time error at the visit call site.
pub trait Visitor<T> {
    /// What the visit produces, regardless of which alternative was live.
    type Output;

    fn visit(self, value: T) -> Self::Output;
}

/// Dispatches a visitor over shared references into the union nest.
pub trait VisitRef<V, R>: AltList {
    /// # Safety
    ///
    /// `repr` must point to storage whose live slot is `tag`; with `tag`
    /// past the end (poisoned variant) this panics at the terminator.
    #[doc(hidden)]
    unsafe fn visit_ref(repr: *const Self::Repr, tag: u8, visitor: V) -> R;
}

impl<V, R> VisitRef<V, R> for () {
    unsafe fn visit_ref(_: *const Never, _: u8, _: V) -> R {
        unreachable!("visit of a variant with no live alternative")
    }
}

impl<Head, Tail, V, R> VisitRef<V, R> for (Head, Tail)
where
    Tail: VisitRef<V, R>,
    for<'a> V: Visitor<&'a Head, Output = R>,
{
    unsafe fn visit_ref(repr: *const Self::Repr, tag: u8, visitor: V) -> R {
        if tag == 0 {
            visitor.visit(unsafe { &*ptr::addr_of!((*repr).value).cast::<Head>() })
        } else {
            unsafe { Tail::visit_ref(ptr::addr_of!((*repr).rest).cast(), tag - 1, visitor) }
        }
    }
}

/// Dispatches a visitor over mutable references into the union nest.
pub trait VisitMut<V, R>: AltList {
    /// # Safety
    ///
    /// Same contract as [`VisitRef::visit_ref`].
    #[doc(hidden)]
    unsafe fn visit_mut(repr: *mut Self::Repr, tag: u8, visitor: V) -> R;
}

impl<V, R> VisitMut<V, R> for () {
    unsafe fn visit_mut(_: *mut Never, _: u8, _: V) -> R {
        unreachable!("visit of a variant with no live alternative")
    }
}

impl<Head, Tail, V, R> VisitMut<V, R> for (Head, Tail)
where
    Tail: VisitMut<V, R>,
    for<'a> V: Visitor<&'a mut Head, Output = R>,
{
    unsafe fn visit_mut(repr: *mut Self::Repr, tag: u8, visitor: V) -> R {
        if tag == 0 {
            visitor.visit(unsafe { &mut *ptr::addr_of_mut!((*repr).value).cast::<Head>() })
        } else {
            unsafe { Tail::visit_mut(ptr::addr_of_mut!((*repr).rest).cast(), tag - 1, visitor) }
        }
    }
}

/// Dispatches a visitor that consumes the live alternative by value.
pub trait VisitOwned<V, R>: AltList {
    /// # Safety
    ///
    /// Same contract as [`VisitRef::visit_ref`]; additionally the caller must
    /// treat the live slot as moved-from afterwards.
    #[doc(hidden)]
    unsafe fn visit_owned(repr: *mut Self::Repr, tag: u8, visitor: V) -> R;
}

impl<V, R> VisitOwned<V, R> for () {
    unsafe fn visit_owned(_: *mut Never, _: u8, _: V) -> R {
        unreachable!("visit of a variant with no live alternative")
    }
}

impl<Head, Tail, V, R> VisitOwned<V, R> for (Head, Tail)
where
    Tail: VisitOwned<V, R>,
    V: Visitor<Head, Output = R>,
{
    unsafe fn visit_owned(repr: *mut Self::Repr, tag: u8, visitor: V) -> R {
        if tag == 0 {
            visitor.visit(unsafe { ptr::addr_of_mut!((*repr).value).cast::<Head>().read() })
        } else {
            unsafe { Tail::visit_owned(ptr::addr_of_mut!((*repr).rest).cast(), tag - 1, visitor) }
        }
    }
}

/// Applies `visitor` to a shared reference to the live alternative.
///
/// The visitor must implement `Visitor<&T>` for every alternative `T` in the
/// list, all with the same `Output`; this is checked at compile time.
///
/// # Panics
///
/// Panics if the variant is poisoned (see [`Variant::is_poisoned`]).
///
/// # Examples
///
/// ```rust
/// use tunion::{visit, Variant, Visitor};
///
/// struct Tag;
///
/// impl<'a> Visitor<&'a i32> for Tag {
///     type Output = &'static str;
///     fn visit(self, _: &'a i32) -> &'static str {
///         "int"
///     }
/// }
///
/// impl<'a> Visitor<&'a f64> for Tag {
///     type Output = &'static str;
///     fn visit(self, _: &'a f64) -> &'static str {
///         "float"
///     }
/// }
///
/// let v: Variant![i32, f64] = Variant::new(0.5);
/// assert_eq!(visit(Tag, &v), "float");
/// ```
pub fn visit<V, R, L>(visitor: V, v: &Variant<L>) -> R
where
    L: VisitRef<V, R>,
{
    unsafe { L::visit_ref(&*v.data, v.tag, visitor) }
}

/// Applies `visitor` to a mutable reference to the live alternative.
///
/// # Panics
///
/// Panics if the variant is poisoned.
pub fn visit_mut<V, R, L>(visitor: V, v: &mut Variant<L>) -> R
where
    L: VisitMut<V, R>,
{
    unsafe { L::visit_mut(&mut *v.data, v.tag, visitor) }
}

/// Consumes the variant, handing the live alternative to `visitor` by value.
///
/// # Panics
///
/// Panics if the variant is poisoned.
pub fn visit_take<V, R, L>(visitor: V, v: Variant<L>) -> R
where
    L: VisitOwned<V, R>,
{
    let mut v = ManuallyDrop::new(v);
    unsafe { L::visit_owned(&mut *v.data, v.tag, visitor) }
}
