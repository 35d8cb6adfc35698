use ndarray_prefix_sort::{
	Descent, Slice1Ext,
	ndarray::{Array1, Array2, arr1},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const TRIALS: usize = 1000;
const TRIAL_SIZE: usize = 10_000;

fn reference(v: &Array1<u32>) -> Array1<u32> {
	let mut v = v.to_vec();
	v.sort_unstable();
	Array1::from_vec(v)
}

#[test]
fn small_with_duplicates() {
	let mut v = arr1(&[5, 3, 3, 1, 4, 3, 2]);
	v.sort_unstable();
	assert_eq!(v, arr1(&[1, 2, 3, 3, 3, 4, 5]));
}

#[test]
fn empty_and_single() {
	let mut comparisons = 0;
	let mut empty = Array1::<u32>::zeros(0);
	empty.sort_unstable_by(|a, b| {
		comparisons += 1;
		a.cmp(b)
	});
	assert_eq!(empty.len(), 0);

	let mut single = arr1(&[7]);
	single.sort_unstable_by(|a, b| {
		comparisons += 1;
		a.cmp(b)
	});
	assert_eq!(single, arr1(&[7]));
	assert_eq!(comparisons, 0);
}

#[test]
fn random_bytes_match_reference() {
	let mut rng = StdRng::seed_from_u64(0xB17E_5EED);
	for trial in 0..TRIALS {
		let input = Array1::from_iter((0..TRIAL_SIZE).map(|_| rng.random_range(0..=255u32)));
		let mut output = input.clone();
		output.sort_unstable_with_rng(&mut rng);
		assert!(output.is_sorted(), "trial={trial}");
		assert_eq!(output, reference(&input), "trial={trial}");
	}
}

#[test]
fn single_value_run() {
	let input = Array1::from_elem(50, 9u32);
	let mut output = input.clone();
	let mut rng = StdRng::seed_from_u64(1);
	let mut sides = Vec::new();
	output.sort_unstable_traced(&mut rng, |descent: &Descent<'_, u32>| {
		sides.push(descent.elements.len());
	});
	assert_eq!(output, input);
	assert_eq!(sides, [0, 0]);
}

#[test]
fn already_sorted_with_full_prefix() {
	let input = Array1::from_iter(0..10_000u32);
	let mut output = input.clone();
	output.sort_unstable_from_prefix(input.len());
	assert_eq!(output, input);
}

#[test]
fn patterns() {
	let len = 20_000u32;
	let inputs = [
		Array1::from_iter((0..len).rev()),
		Array1::from_iter(0..len),
		Array1::from_iter((0..len).map(|i| i % 16)),
		Array1::from_iter((0..len).map(|i| if i % 2 == 0 { i } else { len - i })),
		Array1::from_iter((0..len).map(|i| u32::from(i > len / 2))),
	];
	for (pattern, input) in inputs.iter().enumerate() {
		let mut output = input.clone();
		output.sort_unstable();
		assert_eq!(output, reference(input), "pattern={pattern}");
	}
}

#[test]
fn non_contiguous_column() {
	let mut rng = StdRng::seed_from_u64(2);
	let mut matrix = Array2::from_shape_fn((1000, 3), |_| rng.random_range(0..100u32));
	let untouched = matrix.column(0).to_owned();
	let expected = reference(&matrix.column(1).to_owned());
	let mut column = matrix.column_mut(1);
	column.sort_unstable();
	assert_eq!(matrix.column(1), expected);
	assert_eq!(matrix.column(0), untouched);
}

#[test]
fn by_key_descending() {
	let mut rng = StdRng::seed_from_u64(3);
	let input = Array1::from_iter((0..5000).map(|_| rng.random_range(0..1000u32)));
	let mut output = input.clone();
	output.sort_unstable_by_key(|&x| core::cmp::Reverse(x));
	let mut expected = reference(&input).to_vec();
	expected.reverse();
	assert_eq!(output, Array1::from_vec(expected));
}
