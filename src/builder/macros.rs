//! Macros for ergonomic station map construction.

/// Build a [`StationMap`](crate::core::StationMap) from index/rule pairs.
///
/// Each rule is written either as `unconditional(add, remove, next)` or as
/// `conditional(check, (add, remove, next), (add, remove, next))`.
///
/// # Panics
///
/// Panics if the same index is given twice.
///
/// # Example
///
/// ```
/// use bypass::core::Rule;
/// use bypass::stations;
///
/// let map = stations! {
///     1 => unconditional(1, 2, 2),
///     2 => conditional(1, (2, 1, 1), (1, 2, 3)),
///     3 => unconditional(3, 3, 1),
/// };
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map[&1], Rule::unconditional(1, 2, 2));
/// ```
#[macro_export]
macro_rules! stations {
    (@rule unconditional($add:expr, $remove:expr, $next:expr $(,)?)) => {
        $crate::core::Rule::unconditional($add, $remove, $next)
    };
    (@rule conditional(
        $check:expr,
        ($padd:expr, $premove:expr, $pnext:expr),
        ($aadd:expr, $aremove:expr, $anext:expr) $(,)?
    )) => {
        $crate::core::Rule::conditional(
            $check,
            ($padd, $premove, $pnext),
            ($aadd, $aremove, $anext),
        )
    };
    ($($index:expr => $kind:ident $args:tt),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::core::StationMap::new();
        $(
            let index: $crate::core::StationIndex = $index;
            if map.insert(index, $crate::stations!(@rule $kind $args)).is_some() {
                panic!("Station {} is defined more than once", index);
            }
        )*
        map
    }};
}
