//! Single partitioning step of the prefix sort.
//!
//! A view arrives with a `prefix`, the count of its leading elements known to be mutually sorted.
//! The unsorted tail is partitioned around a pivot out of that prefix. Then the prefix elements not
//! less than the pivot move next to the partition boundary, so both sides start out with a sorted
//! prefix of their own.

use crate::network::{MAX_NETWORK, network_sort};
use core::{cmp, cmp::Ordering};
use ndarray::{ArrayView1, ArrayViewMut1, s};
use rand::Rng;

/// Shortest prefix a pivot is chosen from without seeding a new one.
pub const MIN_PREFIX: usize = 3;
/// Length of a freshly seeded prefix.
pub const SEED_PREFIX: usize = MAX_NETWORK;

/// Seeds a sorted prefix of `min(SEED_PREFIX, v.len())` elements and returns its length.
///
/// Elements past the current `prefix` are drawn uniformly from the whole view by a partial
/// Fisher-Yates shuffle, so the seeded prefix is an unbiased sample of `v`.
pub fn seed_prefix<T, F, R>(
	mut v: ArrayViewMut1<'_, T>,
	prefix: usize,
	is_less: &mut F,
	rng: &mut R,
) -> usize
where
	F: FnMut(&T, &T) -> bool,
	R: Rng + ?Sized,
{
	let len = v.len();
	let seeded = cmp::min(SEED_PREFIX, len);
	for i in prefix..seeded {
		v.swap(i, rng.random_range(i..len));
	}
	network_sort(v.slice_mut(s![..seeded]), is_less);
	seeded
}

/// Chooses the pivot out of the sorted `prefix` of `v` and returns its index.
///
/// Starts at the middle of the prefix and rewinds to the first element of its run of equal
/// elements. The returned index is hence the count of prefix elements less than the pivot.
pub fn choose_pivot<T, F>(v: ArrayView1<'_, T>, prefix: usize, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	debug_assert!(0 < prefix && prefix <= v.len());
	let mut pivot = prefix / 2;
	while pivot > 0 && !is_less(&v[pivot - 1], &v[pivot]) {
		pivot -= 1;
	}
	pivot
}

/// Partitions `v` into elements less than `pivot` followed by elements not less than `pivot`.
///
/// Returns the count of elements less than `pivot`.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, pivot: &T, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let mut l = 0;
	let mut r = v.len();
	loop {
		while l < r && is_less(&v[l], pivot) {
			l += 1;
		}
		while l < r && !is_less(&v[r - 1], pivot) {
			r -= 1;
		}
		if l >= r {
			break;
		}
		r -= 1;
		v.swap(l, r);
		l += 1;
	}
	l
}

/// Moves the prefix elements `left_prefix..prefix` up to end at `boundary`.
///
/// The elements between `prefix` and `boundary` are less than the pivot and move down into the
/// vacated slots. Returns the new index of the pivot, which is the length of the left side.
pub fn rebalance<T>(
	v: &mut ArrayViewMut1<'_, T>,
	left_prefix: usize,
	prefix: usize,
	boundary: usize,
) -> usize {
	debug_assert!(left_prefix < prefix && prefix <= boundary);
	let right_prefix = prefix - left_prefix;
	// Swapping from the top keeps the moved block in order even when both ranges overlap.
	for i in 1..=right_prefix {
		v.swap(boundary - i, prefix - i);
	}
	boundary - right_prefix
}

/// Returns the end of the run of elements equal to the pivot at `mid`.
///
/// Every element past `mid` is known to be not less than the pivot.
pub fn skip_pivot_run<T, F>(v: ArrayView1<'_, T>, mid: usize, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let pivot = &v[mid];
	let mut end = mid + 1;
	while end < v.len() && !is_less(pivot, &v[end]) {
		end += 1;
	}
	end
}

/// Checks whether `v` is sorted with respect to `compare`.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	v.iter()
		.zip(v.iter().skip(1))
		.all(|(a, b)| matches!(compare(a, b), Some(Ordering::Less | Ordering::Equal)))
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{
		MIN_PREFIX, SEED_PREFIX, choose_pivot, is_sorted, partition, rebalance, seed_prefix,
		skip_pivot_run,
	};
	use ndarray::{Array1, ArrayView1, arr1, s};
	use quickcheck_macros::quickcheck;
	use rand::{SeedableRng, rngs::StdRng};

	fn sorted_copy(v: ArrayView1<'_, u8>) -> Vec<u8> {
		let mut v = v.to_vec();
		v.sort_unstable();
		v
	}

	fn ascending(v: ArrayView1<'_, u8>) -> bool {
		is_sorted(v, |a, b| a.partial_cmp(b))
	}

	#[test]
	fn pivot_of_single_run() {
		let array = arr1(&[7u8; 15]);
		assert_eq!(choose_pivot(array.view(), 15, &mut u8::lt), 0);
		assert_eq!(choose_pivot(array.view(), MIN_PREFIX, &mut u8::lt), 0);
	}

	#[test]
	fn pivot_rewinds_to_first_of_run() {
		let array = arr1(&[1u8, 2, 2, 2, 3]);
		assert_eq!(choose_pivot(array.view(), 5, &mut u8::lt), 1);
		let array = arr1(&[1u8, 2, 3, 4, 5, 6]);
		assert_eq!(choose_pivot(array.view(), 6, &mut u8::lt), 3);
	}

	#[test]
	fn rebalance_overlapping() {
		// Prefix `[1, 5, 6, 7]` around pivot 5 with a single tail element less than the pivot.
		let mut array = arr1(&[1u8, 5, 6, 7, 2, 9, 8]);
		let mid = rebalance(&mut array.view_mut(), 1, 4, 5);
		assert_eq!(mid, 2);
		assert_eq!(array, arr1(&[1, 2, 5, 6, 7, 9, 8]));
	}

	#[test]
	fn run_reaches_end() {
		let array = arr1(&[1u8, 4, 4, 4]);
		assert_eq!(skip_pivot_run(array.view(), 1, &mut u8::lt), 4);
		let array = arr1(&[1u8, 4, 4, 5]);
		assert_eq!(skip_pivot_run(array.view(), 1, &mut u8::lt), 3);
	}

	#[quickcheck]
	fn seeded(xs: Vec<u8>, seed: u64) {
		let mut rng = StdRng::seed_from_u64(seed);
		let expected = sorted_copy(arr1(&xs).view());
		let mut array = Array1::from_vec(xs);
		let seeded = seed_prefix(array.view_mut(), 0, &mut u8::lt, &mut rng);
		assert_eq!(seeded, array.len().min(SEED_PREFIX));
		assert!(ascending(array.slice(s![..seeded])));
		assert_eq!(sorted_copy(array.view()), expected);
	}

	#[quickcheck]
	fn partitioned(xs: Vec<u8>, pivot: u8) {
		let expected = sorted_copy(arr1(&xs).view());
		let mut array = Array1::from_vec(xs);
		let mid = partition(array.view_mut(), &pivot, &mut u8::lt);
		assert!(array.slice(s![..mid]).iter().all(|&x| x < pivot));
		assert!(array.slice(s![mid..]).iter().all(|&x| x >= pivot));
		assert_eq!(sorted_copy(array.view()), expected);
	}

	// One full step: all zones are bounded by the pivot and both sides keep a sorted prefix of the
	// announced length.
	#[quickcheck]
	fn step(xs: Vec<u8>, seed: u64) {
		if xs.len() <= SEED_PREFIX {
			return;
		}
		let mut rng = StdRng::seed_from_u64(seed);
		let expected = sorted_copy(arr1(&xs).view());
		let mut array = Array1::from_vec(xs);
		let is_less = &mut u8::lt;

		let prefix = seed_prefix(array.view_mut(), 0, is_less, &mut rng);
		let left_prefix = choose_pivot(array.view(), prefix, is_less);
		let pivot = array[left_prefix];
		let boundary = prefix + partition(array.slice_mut(s![prefix..]), &pivot, is_less);
		let mid = rebalance(&mut array.view_mut(), left_prefix, prefix, boundary);
		let end = skip_pivot_run(array.view(), mid, is_less);
		let right_prefix = boundary.saturating_sub(end);

		assert_eq!(array[mid], pivot);
		assert!(array.slice(s![..mid]).iter().all(|&x| x < pivot));
		assert!(array.slice(s![mid..end]).iter().all(|&x| x == pivot));
		assert!(array.slice(s![end..]).iter().all(|&x| x >= pivot));
		assert!(ascending(array.slice(s![..left_prefix])));
		assert!(ascending(array.slice(s![end..end + right_prefix])));
		assert_eq!(sorted_copy(array.view()), expected);
	}
}
