//! Prefix sort, a randomized quicksort that carries sortedness over from one partition to the
//! next.
//!
//! Views of up to [`MAX_NETWORK`] elements are sorted by a sorting network. Longer views choose
//! their pivot out of a sorted prefix, which is seeded by random sampling whenever fewer than
//! [`MIN_PREFIX`] sorted elements are known. Partitioning splits that prefix between both sides,
//! so each side inherits a sorted prefix instead of sampling a fresh one.
//!
//! [`MAX_NETWORK`]: crate::network::MAX_NETWORK

use crate::{
	network::{apply, network},
	partition::{MIN_PREFIX, choose_pivot, partition, rebalance, seed_prefix, skip_pivot_run},
	trace::{Descent, Side, Trace},
};
use core::mem;
use ndarray::{ArrayViewMut1, Axis, IndexLonger};
use rand::Rng;

/// Sorts `v` whose first `prefix` elements are known to be sorted.
///
/// # Panics
///
/// Panics if `prefix > v.len()`.
pub fn prefix_sort<T, F, R, H>(
	v: ArrayViewMut1<'_, T>,
	prefix: usize,
	mut is_less: F,
	rng: &mut R,
	mut trace: H,
) where
	F: FnMut(&T, &T) -> bool,
	R: Rng + ?Sized,
	H: Trace<T>,
{
	assert!(
		prefix <= v.len(),
		"prefix of {prefix} elements exceeds length {}",
		v.len()
	);

	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	recurse(v, 0, prefix, &mut is_less, rng, &mut trace);
}

/// Sorts `v` recursively.
///
/// `offset` is the index of `v` within the view passed to [`prefix_sort`], it is only reported to
/// `trace`.
fn recurse<'a, T, F, R, H>(
	mut v: ArrayViewMut1<'a, T>,
	mut offset: usize,
	mut prefix: usize,
	is_less: &mut F,
	rng: &mut R,
	trace: &mut H,
) where
	F: FnMut(&T, &T) -> bool,
	R: Rng + ?Sized,
	H: Trace<T>,
{
	loop {
		let len = v.len();
		debug_assert!(prefix <= len);

		if prefix == len {
			return;
		}
		if let Some(pairs) = network(len) {
			apply(&mut v, pairs, is_less);
			return;
		}

		if prefix < MIN_PREFIX {
			prefix = seed_prefix(v.view_mut(), prefix, is_less, rng);
		}

		// Partition the unsorted tail around a pivot out of the sorted prefix.
		let left_prefix = choose_pivot(v.view(), prefix, is_less);
		let boundary = {
			let (head, tail) = v.view_mut().split_at(Axis(0), prefix);
			prefix + partition(tail, &head[left_prefix], is_less)
		};
		let mid = rebalance(&mut v, left_prefix, prefix, boundary);
		let end = skip_pivot_run(v.view(), mid, is_less);
		// If the run of pivots swallowed every prefix element moved to the right side, no sorted
		// prefix is known there.
		let right_prefix = boundary.saturating_sub(end);

		// Split the view into `left`, the run of pivots, and `right`.
		let (left, rest) = v.split_at(Axis(0), mid);
		let (run, right) = rest.split_at(Axis(0), end - mid);
		let pivot: &T = run.index(0);
		let right_offset = offset + end;

		// Recurse into the shorter side only in order to bound the stack depth by *O*(log *n*).
		// Then just continue with the longer side.
		if left.len() < right.len() {
			announce(trace, Side::Left, pivot, offset, left_prefix, &left);
			grow(|| recurse(left, offset, left_prefix, is_less, rng, trace));
			announce(trace, Side::Right, pivot, right_offset, right_prefix, &right);
			(v, offset, prefix) = (right, right_offset, right_prefix);
		} else {
			announce(trace, Side::Right, pivot, right_offset, right_prefix, &right);
			grow(|| recurse(right, right_offset, right_prefix, is_less, rng, trace));
			announce(trace, Side::Left, pivot, offset, left_prefix, &left);
			(v, prefix) = (left, left_prefix);
		}
	}
}

#[inline]
fn announce<T, H>(
	trace: &mut H,
	side: Side,
	pivot: &T,
	offset: usize,
	prefix: usize,
	v: &ArrayViewMut1<'_, T>,
) where
	H: Trace<T>,
{
	trace.descend(&Descent {
		side,
		pivot,
		offset,
		prefix,
		elements: v.view(),
	});
}

#[cfg(feature = "stacker")]
#[inline]
fn grow<R>(f: impl FnOnce() -> R) -> R {
	// Remaining stack below which a new segment is allocated, and the size of that segment.
	const RED_ZONE: usize = 64 * 1024;
	const STACK_SIZE: usize = 1024 * 1024;

	stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
}

#[cfg(not(feature = "stacker"))]
#[inline(always)]
fn grow<R>(f: impl FnOnce() -> R) -> R {
	f()
}
