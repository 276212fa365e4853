#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate std;

use core::fmt;
use core::mem::{self, ManuallyDrop};

#[macro_use]
mod macros;

pub mod access;
mod dispatch;
pub mod error;
pub mod index;
pub mod layout;
pub mod store;
pub mod visit;

pub use self::access::{get, get_if, get_if_mut, get_mut, holds_alternative, swap};
pub use self::error::BadAccess;
pub use self::visit::{visit, visit_mut, visit_take, Visitor};

use self::dispatch::{AltClone, AltDebug};
use self::index::{First, Pos};
use self::store::{Alt, AltList};

/// The tag value marking a variant with no live alternative. Reached only
/// when the outgoing alternative's destructor panics mid-replacement; always
/// past the end of any representable list.
const POISONED: u8 = u8::MAX;

/// A value holding exactly one live instance out of the alternative list `L`,
/// plus the index of the alternative it holds.
///
/// `L` is a nested tuple such as `(i32, (String, ()))`; spell it with
/// [`List!`] or name the whole type with [`Variant!`]. The storage is a
/// single union nest sized for the largest alternative, and the `tag` field
/// records which slot is live. Every accessor checks the tag before touching
/// the storage.
///
/// # Poisoning
///
/// Replacement destroys the old alternative before the new one is recorded.
/// If the old alternative's destructor panics, the variant is left *poisoned*:
/// no alternative is live, [`index`](Variant::index) reports an out-of-range
/// position, dropping it is a no-op, checked accessors return [`BadAccess`]
/// and probes return `None`. A subsequent [`set`](Variant::set) or
/// [`emplace`](Variant::emplace) makes it whole again.
pub struct Variant<L: AltList> {
    pub(crate) tag: u8,
    pub(crate) data: ManuallyDrop<L::Repr>,
}

impl<L: AltList> Variant<L> {
    /// Wraps `value` as the alternative at position `P`.
    ///
    /// Both generic arguments are usually inferred; spell `P` out to pick a
    /// position in a list that repeats a type. A `T` that is not in the list
    /// fails to compile, as does an out-of-range `P`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tunion::Variant;
    ///
    /// let v: Variant![i32, f64] = Variant::new(0.5);
    /// assert_eq!(v.index(), 1);
    /// ```
    pub fn new<T, P>(value: T) -> Self
    where
        L: Alt<T, P>,
        P: Pos,
    {
        Variant {
            tag: P::POS,
            data: ManuallyDrop::new(L::write(value)),
        }
    }

    /// Returns the zero-based index of the live alternative.
    ///
    /// Never fails; a poisoned variant reports a position past the end of the
    /// list.
    pub fn index(&self) -> usize {
        usize::from(self.tag)
    }

    /// Returns whether a destructor panic during replacement has left this
    /// variant without a live alternative.
    pub fn is_poisoned(&self) -> bool {
        self.tag >= L::LEN
    }

    /// Returns a shared reference to the alternative at position `P` if it is
    /// the live one.
    pub fn get<T, P>(&self) -> Option<&T>
    where
        L: Alt<T, P>,
        P: Pos,
    {
        (self.tag == P::POS).then(|| unsafe { &*L::as_ptr(&*self.data) })
    }

    /// Returns a mutable reference to the alternative at position `P` if it
    /// is the live one.
    pub fn get_mut<T, P>(&mut self) -> Option<&mut T>
    where
        L: Alt<T, P>,
        P: Pos,
    {
        (self.tag == P::POS).then(|| unsafe { &mut *L::as_mut_ptr(&mut *self.data) })
    }

    /// Replaces the live alternative with `value`.
    ///
    /// Equivalent to [`emplace`](Variant::emplace) without the returned
    /// reference.
    pub fn set<T, P>(&mut self, value: T)
    where
        L: Alt<T, P>,
        P: Pos,
    {
        self.emplace(value);
    }

    /// Destroys the live alternative, installs `value` at position `P`, and
    /// returns a reference to it.
    ///
    /// The incoming value is fully constructed before the call, so the new
    /// tag only ever becomes observable together with a complete value. The
    /// destructor of the outgoing alternative runs exactly once; if it
    /// panics, the variant is left poisoned rather than torn (see the type
    /// docs). Emplacing into a poisoned variant destroys nothing and heals
    /// it.
    pub fn emplace<T, P>(&mut self, value: T) -> &mut T
    where
        L: Alt<T, P>,
        P: Pos,
    {
        let old = mem::replace(&mut self.tag, POISONED);
        unsafe { L::drop_in(&mut *self.data, old) };
        self.data = ManuallyDrop::new(L::write(value));
        self.tag = P::POS;
        unsafe { &mut *L::as_mut_ptr(&mut *self.data) }
    }

    /// Exchanges tag and storage with `other`.
    ///
    /// A bitwise storage exchange is sound for every alternative here: both
    /// live values are moved, not copied, and no destructor runs on either
    /// side.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.tag, &mut other.tag);
        mem::swap(&mut self.data, &mut other.data);
    }

    /// Moves the live alternative out if it sits at position `P`; otherwise
    /// hands the variant back untouched.
    pub fn into_inner<T, P>(self) -> Result<T, Self>
    where
        L: Alt<T, P>,
        P: Pos,
    {
        if self.tag == P::POS {
            let mut this = ManuallyDrop::new(self);
            let repr = unsafe { ManuallyDrop::take(&mut this.data) };
            Ok(unsafe { L::read(repr) })
        } else {
            Err(self)
        }
    }
}

/// Requires `T0: Default`: the default variant actually holds a
/// default-constructed first alternative, never an uninitialized placeholder.
impl<Head: Default, Tail: AltList> Default for Variant<(Head, Tail)> {
    fn default() -> Self {
        Variant::new::<Head, First>(Head::default())
    }
}

impl<T> From<T> for Variant![T] {
    /// Wraps a value as a single-alternative variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tunion::Variant;
    ///
    /// let v: Variant![i32] = 42.into();
    /// assert_eq!(v.index(), 0);
    /// ```
    fn from(value: T) -> Self {
        Variant::new(value)
    }
}

impl<L: AltList> Drop for Variant<L> {
    fn drop(&mut self) {
        unsafe { L::drop_in(&mut *self.data, self.tag) }
    }
}

/// Tag-dispatched to the live alternative's own `Clone`; requires every
/// alternative to be `Clone`.
///
/// # Panics
///
/// Panics if the variant is poisoned.
impl<L: AltClone> Clone for Variant<L> {
    fn clone(&self) -> Self {
        Variant {
            tag: self.tag,
            data: unsafe { L::clone_in(&*self.data, self.tag) },
        }
    }
}

impl<L: AltDebug> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Variant(")?;
        unsafe { L::debug_in(&*self.data, self.tag, f)? };
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use std::format;
    use std::string::{String, ToString};

    use crate::index::{P0, P1};
    use crate::{access, BadAccess, Variant};

    #[test]
    fn converting_construction_sets_index_and_value() {
        let v: Variant![i32, String] = Variant::new(42);
        assert_eq!(v.index(), 0);
        assert_eq!(access::get::<i32, _, _>(&v), Ok(&42));
        assert!(access::holds_alternative::<i32, _, _>(&v));
        assert!(!access::holds_alternative::<String, _, _>(&v));

        let v: Variant![i32, String] = Variant::new("hi".to_string());
        assert_eq!(v.index(), 1);
        assert_eq!(access::get::<String, _, _>(&v), Ok(&"hi".to_string()));
    }

    #[test]
    fn default_constructs_the_first_alternative() {
        let v = <Variant![i32, String]>::default();
        assert_eq!(v.index(), 0);
        assert_eq!(access::get::<i32, _, _>(&v), Ok(&0));
    }

    #[test]
    fn emplace_switches_the_live_alternative() {
        let mut v: Variant![i32, String] = Variant::new(42);
        let s = v.emplace::<String, _>("hi".to_string());
        s.push('!');
        assert_eq!(v.index(), 1);
        assert_eq!(access::get::<_, P1, _>(&v), Ok(&"hi!".to_string()));
        assert_eq!(access::get::<i32, _, _>(&v), Err(BadAccess));
    }

    #[test]
    fn set_replaces_by_value() {
        let mut v: Variant![i32, String] = Variant::new(1);
        v.set(5);
        assert_eq!(access::get::<i32, _, _>(&v), Ok(&5));
        v.set("five".to_string());
        assert_eq!(v.index(), 1);
    }

    #[test]
    fn swap_exchanges_tag_and_storage() {
        let mut a: Variant![i32, String] = Variant::new(1);
        let mut b: Variant![i32, String] = Variant::new("two".to_string());
        a.swap(&mut b);
        assert_eq!(a.index(), 1);
        assert_eq!(b.index(), 0);
        assert_eq!(access::get::<String, _, _>(&a), Ok(&"two".to_string()));
        assert_eq!(access::get::<i32, _, _>(&b), Ok(&1));
    }

    #[test]
    fn into_inner_moves_the_value_out() {
        let v: Variant![i32, String] = Variant::new("owned".to_string());
        assert_eq!(v.into_inner::<String, _>().unwrap(), "owned");

        let v: Variant![i32, String] = Variant::new(3);
        let v = v.into_inner::<String, _>().unwrap_err();
        assert_eq!(v.index(), 0);
        assert_eq!(access::get::<i32, _, _>(&v), Ok(&3));
    }

    #[test]
    fn single_alternative_from() {
        let v: Variant![i32] = 5.into();
        assert_eq!(access::get::<i32, _, _>(&v), Ok(&5));
    }

    #[test]
    fn duplicate_types_are_addressed_by_position() {
        let mut v: Variant![u32, u32] = Variant::new::<_, P1>(7);
        assert_eq!(v.index(), 1);
        assert_eq!(access::get::<_, P1, _>(&v), Ok(&7));
        assert_eq!(access::get_if::<_, P0, _>(&v), None::<&u32>);

        v.emplace::<_, P0>(9u32);
        assert_eq!(v.index(), 0);
        assert_eq!(access::get::<_, P0, _>(&v), Ok(&9));
    }

    #[test]
    fn debug_shows_the_live_alternative() {
        let v: Variant![i32, String] = Variant::new(42);
        assert_eq!(format!("{v:?}"), "Variant(42)");

        let v: Variant![i32, String] = Variant::new("hi".to_string());
        assert_eq!(format!("{v:?}"), "Variant(\"hi\")");
    }

    #[test]
    fn clone_duplicates_tag_and_value() {
        let v: Variant![i32, String] = Variant::new("orig".to_string());
        let w = v.clone();
        assert_eq!(w.index(), 1);
        assert_eq!(access::get::<String, _, _>(&w), Ok(&"orig".to_string()));
        // The original is untouched.
        assert_eq!(access::get::<String, _, _>(&v), Ok(&"orig".to_string()));
    }
}
