//! Observation hook invoked before each side of a partition is sorted.

use ndarray::ArrayView1;

/// Side of a partition relative to its pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
	/// Elements less than the pivot.
	Left,
	/// Elements not less than the pivot, past the run of elements equal to it.
	Right,
}

/// Side of a partition that is about to be sorted.
#[derive(Debug, Clone)]
pub struct Descent<'a, T> {
	/// Which side of `pivot` the elements lie on.
	pub side: Side,
	/// Pivot the elements were partitioned around.
	pub pivot: &'a T,
	/// Index of the first element within the view being sorted.
	pub offset: usize,
	/// Count of leading elements already known to be sorted.
	pub prefix: usize,
	/// Elements as they are before being sorted.
	pub elements: ArrayView1<'a, T>,
}

/// Receives a [`Descent`] whenever a partition side is about to be sorted.
///
/// Implemented for closures taking `&Descent<'_, T>` and for [`Untraced`].
pub trait Trace<T> {
	/// Observes `descent`.
	fn descend(&mut self, descent: &Descent<'_, T>);
}

/// Hook observing nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untraced;

impl<T> Trace<T> for Untraced {
	#[inline(always)]
	fn descend(&mut self, _descent: &Descent<'_, T>) {}
}

impl<T, F> Trace<T> for F
where
	F: FnMut(&Descent<'_, T>),
{
	#[inline]
	fn descend(&mut self, descent: &Descent<'_, T>) {
		self(descent);
	}
}
