//! The free-function access protocol.
//!
//! `holds_alternative` asks which alternative is live, `get`/`get_mut` are the
//! checked accessors that fail with [`BadAccess`] on a tag mismatch, and
//! `get_if`/`get_if_mut` are their non-failing probing twins. All of them
//! resolve the requested alternative at compile time through the
//! [`Alt`](crate::store::Alt) bound: name the type and leave the position
//! inferred, or name the position and leave the type inferred.

use crate::error::BadAccess;
use crate::index::Pos;
use crate::store::{Alt, AltList};
use crate::Variant;

/// Returns whether the alternative at position `P` (equivalently, of type `T`)
/// is the live one. Pure query; never fails.
pub fn holds_alternative<T, P, L>(v: &Variant<L>) -> bool
where
    L: Alt<T, P>,
    P: Pos,
{
    v.tag == P::POS
}

/// Returns a shared reference to the live alternative, or [`BadAccess`] if a
/// different alternative is live.
///
/// # Examples
///
/// ```rust
/// use tunion::{get, BadAccess, Variant};
///
/// let v: Variant![i32, f64] = Variant::new(42);
/// assert_eq!(get::<i32, _, _>(&v), Ok(&42));
/// assert_eq!(get::<f64, _, _>(&v), Err(BadAccess));
/// ```
pub fn get<T, P, L>(v: &Variant<L>) -> Result<&T, BadAccess>
where
    L: Alt<T, P>,
    P: Pos,
{
    v.get().ok_or(BadAccess)
}

/// Mutable counterpart of [`get`].
pub fn get_mut<T, P, L>(v: &mut Variant<L>) -> Result<&mut T, BadAccess>
where
    L: Alt<T, P>,
    P: Pos,
{
    v.get_mut().ok_or(BadAccess)
}

/// Probes for the alternative at position `P`: a reference if it is live,
/// `None` otherwise. Never fails and never alters the variant.
pub fn get_if<T, P, L>(v: &Variant<L>) -> Option<&T>
where
    L: Alt<T, P>,
    P: Pos,
{
    v.get()
}

/// Mutable counterpart of [`get_if`].
pub fn get_if_mut<T, P, L>(v: &mut Variant<L>) -> Option<&mut T>
where
    L: Alt<T, P>,
    P: Pos,
{
    v.get_mut()
}

/// Exchanges the contents (tag and storage) of two variants over the same
/// alternative list.
pub fn swap<L: AltList>(a: &mut Variant<L>, b: &mut Variant<L>) {
    a.swap(b);
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};

    use super::*;
    use crate::index::P0;
    use crate::Variant;

    #[test]
    fn probes_report_mismatch_without_side_effects() {
        let mut v: Variant![i32, String] = Variant::new(1);
        assert_eq!(get_if::<String, _, _>(&v), None);
        assert_eq!(v.index(), 0);
        assert_eq!(get_if::<i32, _, _>(&v), Some(&1));

        *get_if_mut::<i32, _, _>(&mut v).unwrap() += 1;
        assert_eq!(get_if::<i32, _, _>(&v), Some(&2));
    }

    #[test]
    fn checked_accessors_reject_inactive_alternatives() {
        let mut v: Variant![i32, String] = Variant::new(1);
        assert_eq!(get::<String, _, _>(&v), Err(BadAccess));
        assert_eq!(get_mut::<String, _, _>(&mut v), Err(BadAccess));
        assert_eq!(get::<_, P0, _>(&v), Ok(&1));
    }

    #[test]
    fn holds_alternative_tracks_the_tag() {
        let mut v: Variant![i32, String] = Variant::new(1);
        assert!(holds_alternative::<i32, _, _>(&v));
        assert!(!holds_alternative::<String, _, _>(&v));

        v.set("two".to_string());
        assert!(holds_alternative::<String, _, _>(&v));
    }

    #[test]
    fn free_swap_exchanges_contents() {
        let mut a: Variant![i32, String] = Variant::new(1);
        let mut b: Variant![i32, String] = Variant::new("two".to_string());
        swap(&mut a, &mut b);
        assert_eq!(a.index(), 1);
        assert_eq!(get::<String, _, _>(&a), Ok(&"two".to_string()));
        assert_eq!(get::<i32, _, _>(&b), Ok(&1));
    }
}
