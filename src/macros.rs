/// Names a [`struct@Variant`] type from a list of alternative types.
///
/// # Examples
///
/// ```rust
/// use tunion::Variant;
///
/// type Value = Variant![i32, u32, f64];
/// let v: Value = Variant::new(42u32);
/// assert_eq!(v.index(), 1);
/// ```
///
/// [`struct@Variant`]: crate::Variant
#[macro_export]
macro_rules! Variant {
    [$($t:ty),* $(,)?] => [$crate::Variant::<$crate::List![$($t,)*]>];
}

/// Names a nested-tuple type list from a flat list of types.
///
/// `List![A, B, C]` is `(A, (B, (C, ())))`, the form every list trait in this
/// crate is implemented on.
#[macro_export]
macro_rules! List {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::List![$($t,)*])];
}
