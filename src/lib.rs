//! Prefix sort for non-contiguous (sub)views into *n*-dimensional arrays: a randomized quicksort
//! that reuses the order established by earlier partitions instead of discarding it, with sorting
//! networks for short views.
//!
//! # Example
//!
//! ```
//! use ndarray_prefix_sort::{ndarray::arr2, Slice1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                    [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                    [38, 9, 3,  0,  3],   // row 2, axis 0
//!                    [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//! //                    \     \       \
//! //                  column 0 \    column 4         axis 1
//! //                         column 2                axis 1
//!
//! // Mutable subview into the last column.
//! let mut column = v.column_mut(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be sorted by viewing them as mutable slices.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Instead, sorting is specifically implemented for non-contiguous
//! // mutable (sub)views.
//! column.sort_unstable();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! //                                   \
//! //                                 column 4 sorted, others untouched
//! ```
//!
//! # Current Implementation
//!
//! Views of up to 15 elements are sorted by fixed compare-exchange sequences. Longer views are
//! partitioned around a pivot chosen from the middle of a sorted prefix. When fewer than 3 sorted
//! elements are known, 15 elements are sampled uniformly at random and sorted by a network to seed
//! a new prefix. After partitioning, the prefix elements not less than the pivot are moved in
//! front of the right side, so both sides inherit a sorted prefix. The run of elements equal to
//! the pivot is excluded from both sides.
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource | Complexity | Sorting (unstable)         |
//! |----------|------------|----------------------------|
//! | Time     | Best       | *O*(*n*)                   |
//! | Time     | Average    | *O*(*n* log *n*)           |
//! | Time     | Worst      | *O*(*n*^2)                 |
//! | Space    | Worst      | *O*(log *n*)               |
//!
//! # Features
//!
//!   * `std` for [`ndarray`] with `std`. Enabled by `default`.
//!   * `stacker` for growing the stack on demand while recursing. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod network;
mod partition;
mod prefix_sort;
mod trace;

use crate::{partition::is_sorted, prefix_sort::prefix_sort};
use core::cmp::Ordering::{self, Less};
use ndarray::{ArrayBase, Data, DataMut, Ix1};
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub use crate::trace::{Descent, Side, Trace, Untraced};
pub use ndarray;
pub use rand;

/// Seed of the random source used when none is passed, so that sorting is deterministic.
const SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[inline]
fn seeded_rng() -> SmallRng {
	SmallRng::seed_from_u64(SEED)
}

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing
/// [prefix sort](crate#current-implementation).
pub trait Slice1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array, but might not preserve the order of equal elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n* log *n*) expected.
	///
	/// # Current Implementation
	///
	/// The current algorithm is [prefix sort](crate#current-implementation). It uses
	/// randomization to sample pivots, but with a fixed seed to always provide deterministic
	/// behavior. See [`sort_unstable_with_rng`](Slice1Ext::sort_unstable_with_rng) to provide
	/// the random source.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_prefix_sort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[5, 3, 3, 1, 4, 3, 2]);
	///
	/// v.sort_unstable();
	/// assert!(v == arr1(&[1, 2, 3, 3, 3, 4, 5]));
	/// ```
	fn sort_unstable(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function, but might not preserve the order of equal
	/// elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n* log *n*) expected.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified. An order is a
	/// total order if it is (for all `a`, `b` and `c`):
	///
	/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
	/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
	///
	/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
	/// `partial_cmp` as our sort function when we know the array doesn't contain a `NaN`.
	///
	/// ```
	/// use ndarray_prefix_sort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// floats.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
	/// assert_eq!(floats, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// ```
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_prefix_sort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.sort_unstable_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.sort_unstable_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn sort_unstable_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function, but might not preserve the order of equal
	/// elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*mn* log *n*) expected, where the key function is
	/// *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_prefix_sort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.sort_unstable_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn sort_unstable_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts the array drawing pivot samples from `rng`, but might not preserve the order of equal
	/// elements.
	///
	/// Same as [`sort_unstable`](Slice1Ext::sort_unstable) except for the random source.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_prefix_sort::{
	/// 	ndarray::Array1,
	/// 	rand::{SeedableRng, rngs::SmallRng},
	/// 	Slice1Ext,
	/// };
	///
	/// let mut rng = SmallRng::seed_from_u64(7);
	/// let mut v = Array1::from_iter((0..100).rev());
	///
	/// v.sort_unstable_with_rng(&mut rng);
	/// assert!(v == Array1::from_iter(0..100));
	/// ```
	fn sort_unstable_with_rng<R>(&mut self, rng: &mut R)
	where
		A: Ord,
		R: Rng + ?Sized,
		S: DataMut;
	/// Sorts the array with a comparator function drawing pivot samples from `rng`, but might not
	/// preserve the order of equal elements.
	///
	/// Same as [`sort_unstable_by`](Slice1Ext::sort_unstable_by) except for the random source.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_prefix_sort::{
	/// 	ndarray::arr1,
	/// 	rand::{SeedableRng, rngs::SmallRng},
	/// 	Slice1Ext,
	/// };
	///
	/// let mut rng = SmallRng::seed_from_u64(7);
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	///
	/// v.sort_unstable_by_with_rng(|a, b| b.cmp(a), &mut rng);
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn sort_unstable_by_with_rng<F, R>(&mut self, compare: F, rng: &mut R)
	where
		F: FnMut(&A, &A) -> Ordering,
		R: Rng + ?Sized,
		S: DataMut;
	/// Sorts the array whose first `prefix` elements are already sorted, but might not preserve
	/// the order of equal elements.
	///
	/// The known prefix serves as the first pivot sample. If `prefix` covers the whole array, no
	/// element is compared or moved.
	///
	/// If the first `prefix` elements are not sorted, the order of the elements is unspecified.
	///
	/// # Panics
	///
	/// Panics if `prefix` exceeds the length of the array.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_prefix_sort::{ndarray::{arr1, Array1, Axis}, Slice1Ext};
	///
	/// let mut v = Array1::from_iter(0..100);
	/// v.append(Axis(0), arr1(&[50, 3, 77]).view()).unwrap();
	///
	/// v.sort_unstable_from_prefix(100);
	/// assert!(v.is_sorted());
	/// ```
	fn sort_unstable_from_prefix(&mut self, prefix: usize)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array drawing pivot samples from `rng`, and reports every partition side to
	/// `trace` before sorting it.
	///
	/// The sorted result is the same as with
	/// [`sort_unstable_with_rng`](Slice1Ext::sort_unstable_with_rng) for an equally seeded `rng`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_prefix_sort::{
	/// 	ndarray::Array1,
	/// 	rand::{SeedableRng, rngs::SmallRng},
	/// 	Descent, Side, Slice1Ext,
	/// };
	///
	/// let mut rng = SmallRng::seed_from_u64(7);
	/// let mut v = Array1::from_iter((0..1000).map(|i| i * 7919 % 1000));
	/// let mut sides = 0;
	///
	/// v.sort_unstable_traced(&mut rng, |descent: &Descent<'_, i32>| {
	/// 	match descent.side {
	/// 		Side::Left => assert!(descent.elements.iter().all(|x| x < descent.pivot)),
	/// 		Side::Right => assert!(descent.elements.iter().all(|x| x >= descent.pivot)),
	/// 	}
	/// 	sides += 1;
	/// });
	/// assert!(v == Array1::from_iter(0..1000));
	/// assert!(sides > 0);
	/// ```
	fn sort_unstable_traced<R, H>(&mut self, rng: &mut R, trace: H)
	where
		A: Ord,
		R: Rng + ?Sized,
		H: Trace<A>,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// Note that if `Self::Item` is only `PartialOrd`, but not `Ord`, the above definition
	/// implies that this function returns `false` if any two consecutive items are not
	/// comparable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_prefix_sort::{ndarray::arr1, Slice1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given comparator function.
	///
	/// Instead of using `PartialOrd::partial_cmp`, this function uses the given `compare`
	/// function to determine the ordering of two elements. Apart from that, it's equivalent to
	/// [`is_sorted`]; see its documentation for more information.
	///
	/// [`is_sorted`]: Slice1Ext::is_sorted
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
	/// Checks if the elements of this array are sorted using the given key extraction function.
	///
	/// Instead of comparing the array's elements directly, this function compares the keys of the
	/// elements, as determined by `f`. Apart from that, it's equivalent to [`is_sorted`]; see its
	/// documentation for more information.
	///
	/// [`is_sorted`]: Slice1Ext::is_sorted
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_prefix_sort::{ndarray::arr1, Slice1Ext};
	///
	/// assert!(arr1(&["c", "bb", "aaa"]).is_sorted_by_key(|s| s.len()));
	/// assert!(!arr1(&[-2i32, -1, 0, 3]).is_sorted_by_key(|n| n.abs()));
	/// ```
	#[must_use]
	fn is_sorted_by_key<F, K>(&self, f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd;
}

impl<A, S> Slice1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn sort_unstable(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		prefix_sort(self.view_mut(), 0, A::lt, &mut seeded_rng(), Untraced);
	}
	#[inline]
	fn sort_unstable_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		self.sort_unstable_by_with_rng(compare, &mut seeded_rng());
	}
	#[inline]
	fn sort_unstable_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		let is_less = |a: &A, b: &A| f(a).lt(&f(b));
		prefix_sort(self.view_mut(), 0, is_less, &mut seeded_rng(), Untraced);
	}
	#[inline]
	fn sort_unstable_with_rng<R>(&mut self, rng: &mut R)
	where
		A: Ord,
		R: Rng + ?Sized,
		S: DataMut,
	{
		prefix_sort(self.view_mut(), 0, A::lt, rng, Untraced);
	}
	#[inline]
	fn sort_unstable_by_with_rng<F, R>(&mut self, mut compare: F, rng: &mut R)
	where
		F: FnMut(&A, &A) -> Ordering,
		R: Rng + ?Sized,
		S: DataMut,
	{
		let is_less = |a: &A, b: &A| compare(a, b) == Less;
		prefix_sort(self.view_mut(), 0, is_less, rng, Untraced);
	}
	#[inline]
	fn sort_unstable_from_prefix(&mut self, prefix: usize)
	where
		A: Ord,
		S: DataMut,
	{
		prefix_sort(self.view_mut(), prefix, A::lt, &mut seeded_rng(), Untraced);
	}
	#[inline]
	fn sort_unstable_traced<R, H>(&mut self, rng: &mut R, trace: H)
	where
		A: Ord,
		R: Rng + ?Sized,
		H: Trace<A>,
		S: DataMut,
	{
		prefix_sort(self.view_mut(), 0, A::lt, rng, trace);
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
	#[inline]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		is_sorted(self.view(), compare)
	}
	#[inline]
	fn is_sorted_by_key<F, K>(&self, mut f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd,
	{
		is_sorted(self.view(), |a, b| f(a).partial_cmp(&f(b)))
	}
}
