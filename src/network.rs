//! Fixed compare-exchange sequences sorting views of up to [`MAX_NETWORK`] elements.
//!
//! The sequences are kept as data so that the same length always executes the same list of index
//! pairs, independent of the values being sorted.

use ndarray::ArrayViewMut1;

/// Longest view covered by [`NETWORKS`].
pub const MAX_NETWORK: usize = 15;

/// Compare-exchange sequences indexed by view length.
///
/// Every pair `(a, b)` satisfies `a < b`. Lengths 0 and 1 need no operation.
pub static NETWORKS: [&[(u8, u8)]; MAX_NETWORK + 1] = [
	&[],
	&[],
	&[
		(0, 1),
	],
	&[
		(0, 2), (0, 1), (1, 2),
	],
	&[
		(0, 2), (1, 3), (0, 1), (2, 3), (1, 2),
	],
	&[
		(0, 3), (1, 4), (0, 2), (1, 3), (0, 1), (2, 4), (1, 2), (3, 4), (2, 3),
	],
	&[
		(0, 5), (1, 3), (2, 4), (1, 2), (3, 4), (0, 3), (2, 5), (0, 1), (2, 3), (4, 5), (1, 2),
		(3, 4),
	],
	&[
		(0, 6), (2, 3), (4, 5), (0, 2), (1, 4), (3, 6), (0, 1), (2, 5), (3, 4), (1, 2), (4, 6),
		(2, 3), (4, 5), (1, 2), (3, 4), (5, 6),
	],
	&[
		(0, 2), (1, 3), (4, 6), (5, 7), (0, 4), (1, 5), (2, 6), (3, 7), (0, 1), (2, 3), (4, 5),
		(6, 7), (2, 4), (3, 5), (1, 4), (3, 6), (1, 2), (3, 4), (5, 6),
	],
	&[
		(0, 3), (1, 7), (2, 5), (4, 8), (0, 7), (2, 4), (3, 8), (5, 6), (0, 2), (1, 3), (4, 5),
		(7, 8), (1, 4), (3, 6), (5, 7), (0, 1), (2, 4), (3, 5), (6, 8), (2, 3), (4, 5), (6, 7),
		(1, 2), (3, 4), (5, 6),
	],
	&[
		(0, 1), (2, 5), (3, 6), (4, 7), (8, 9), (0, 6), (1, 8), (2, 4), (3, 9), (5, 7), (0, 2),
		(1, 3), (4, 5), (6, 8), (7, 9), (0, 1), (2, 7), (3, 5), (4, 6), (8, 9), (1, 2), (3, 4),
		(5, 6), (7, 8), (1, 3), (2, 4), (5, 7), (6, 8), (2, 3), (4, 5), (6, 7),
	],
	&[
		(0, 9), (1, 6), (2, 4), (3, 7), (5, 8), (0, 1), (3, 5), (4, 10), (6, 9), (7, 8),
		(1, 3), (2, 5), (4, 7), (8, 10), (0, 4), (1, 2), (3, 7), (5, 9), (6, 8), (0, 1),
		(2, 6), (4, 5), (7, 8), (9, 10), (2, 4), (3, 6), (5, 7), (8, 9), (1, 2), (3, 4),
		(5, 6), (7, 8), (2, 3), (4, 5), (6, 7),
	],
	&[
		(0, 8), (1, 7), (2, 6), (3, 11), (4, 10), (5, 9), (0, 2), (1, 4), (3, 5), (6, 8),
		(7, 10), (9, 11), (0, 1), (2, 9), (4, 7), (5, 6), (10, 11), (1, 3), (2, 7), (4, 9),
		(8, 10), (0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (1, 2), (3, 5), (6, 8),
		(9, 10), (2, 4), (3, 6), (5, 8), (7, 9), (1, 2), (3, 4), (5, 6), (7, 8), (9, 10),
	],
	&[
		(0, 11), (1, 7), (2, 4), (3, 5), (8, 9), (10, 12), (0, 2), (3, 6), (4, 12), (5, 7),
		(8, 10), (0, 8), (1, 3), (2, 5), (4, 9), (6, 11), (7, 12), (0, 1), (2, 10), (3, 8),
		(4, 6), (9, 11), (1, 3), (2, 4), (5, 10), (6, 8), (7, 9), (11, 12), (1, 2), (3, 4),
		(5, 8), (6, 9), (7, 10), (2, 3), (4, 7), (5, 6), (8, 11), (9, 10), (4, 5), (6, 7),
		(8, 9), (10, 11), (3, 4), (5, 6), (7, 8), (9, 10),
	],
	&[
		(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (0, 2), (1, 3), (4, 8),
		(5, 9), (10, 12), (11, 13), (0, 10), (1, 6), (2, 11), (3, 13), (5, 8), (7, 12), (1, 4),
		(2, 8), (3, 6), (5, 11), (7, 10), (9, 12), (0, 1), (3, 9), (4, 10), (5, 7), (6, 8),
		(12, 13), (1, 5), (2, 4), (3, 7), (6, 10), (8, 12), (9, 11), (1, 2), (3, 5), (4, 6),
		(7, 9), (8, 10), (11, 12), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (3, 4), (5, 6),
		(7, 8), (9, 10),
	],
	&[
		(0, 6), (1, 10), (2, 14), (3, 9), (4, 12), (5, 13), (7, 11), (0, 7), (2, 5), (3, 4),
		(6, 11), (8, 10), (9, 12), (13, 14), (1, 13), (2, 3), (4, 6), (5, 9), (7, 8), (10, 14),
		(11, 12), (0, 3), (1, 4), (5, 7), (6, 13), (8, 9), (10, 11), (12, 14), (0, 2), (1, 5),
		(3, 8), (4, 6), (7, 10), (9, 11), (12, 13), (0, 1), (2, 5), (3, 10), (4, 8), (6, 7),
		(9, 12), (11, 13), (1, 2), (3, 4), (5, 6), (7, 9), (8, 10), (11, 12), (3, 5), (4, 6),
		(7, 8), (9, 10), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11),
	],
];

/// Returns the compare-exchange sequence sorting `len` elements, if one is tabulated.
#[inline]
#[must_use]
pub fn network(len: usize) -> Option<&'static [(u8, u8)]> {
	NETWORKS.get(len).copied()
}

/// Moves the lesser of `v[a]` and `v[b]` to `a` and the greater one to `b`.
///
/// Equal elements are left in place.
#[inline(always)]
pub fn compare_exchange<T, F>(v: &mut ArrayViewMut1<'_, T>, a: usize, b: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	debug_assert!(a < b);
	if is_less(&v[b], &v[a]) {
		v.swap(a, b);
	}
}

/// Applies `pairs` to `v` in order.
#[inline]
pub fn apply<T, F>(v: &mut ArrayViewMut1<'_, T>, pairs: &[(u8, u8)], is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for &(a, b) in pairs {
		compare_exchange(v, usize::from(a), usize::from(b), is_less);
	}
}

/// Sorts `v` with the sorting network of its length.
///
/// # Panics
///
/// Panics if no network is tabulated for `v.len()`. Callers never request more than
/// [`MAX_NETWORK`] elements, so this indicates a defect rather than bad input.
pub fn network_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let Some(pairs) = network(v.len()) else {
		panic!("no sorting network for {} elements", v.len());
	};
	apply(&mut v, pairs, is_less);
}
