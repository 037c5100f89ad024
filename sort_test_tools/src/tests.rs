use std::cmp::Ordering;
use std::fmt::Debug;

use rand::prelude::*;

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
const TEST_SIZES: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 17, 19, 20, 21, 22, 24, 25, 30, 31, 32,
    33, 35, 50, 64, 100, 128, 200, 256, 500, 1000,
];

#[cfg(feature = "large_test_sizes")]
const TEST_SIZES: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 17, 19, 20, 21, 22, 24, 25, 30, 31, 32,
    33, 35, 50, 64, 100, 128, 200, 256, 500, 1000, 2048, 4096, 10_000,
];

fn sort_comp<T, S>(v: &mut Vec<T>)
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();
    let is_small_test = v.len() <= 100;
    let original = v.clone();

    let mut stdlib_sorted = v.clone();
    stdlib_sorted.sort();

    S::sort(v);

    if v != &stdlib_sorted {
        if is_small_test {
            eprintln!("Original: {:?}", original);
            eprintln!("Expected: {:?}", stdlib_sorted);
            eprintln!("Got:      {:?}", v);
        }

        panic!(
            "Sort {} failed for len {}, seed: {seed}",
            S::name(),
            original.len()
        );
    }
}

fn test_impl<T, S>(pattern_fn: impl Fn(usize) -> Vec<T>)
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(*test_size);
        sort_comp::<T, S>(&mut test_data);
    }
}

// --- TESTS ---

pub fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut vec![]);
    sort_comp::<(), S>(&mut vec![]);
    sort_comp::<(), S>(&mut vec![()]);
    sort_comp::<(), S>(&mut vec![(), ()]);
    sort_comp::<i32, S>(&mut vec![77]);
    sort_comp::<i32, S>(&mut vec![2, 3]);
    sort_comp::<i32, S>(&mut vec![3, 2]);
    sort_comp::<i32, S>(&mut vec![2, 3, 6]);
    sort_comp::<i32, S>(&mut vec![6, 3, 2]);
    sort_comp::<i32, S>(&mut vec![2, 6, 3]);
    sort_comp::<i32, S>(&mut vec![3, 2, 3]);
    sort_comp::<i32, S>(&mut vec![2, 2, 2]);
}

pub fn fixed_scenario<S: Sort>() {
    let mut v = vec![5, 3, 5, 1, 4, 3];
    S::sort(&mut v);
    assert_eq!(v, [1, 3, 3, 4, 5, 5], "{}", S::name());

    // Above both insertion sort cutoffs.
    let mut v = patterns::descending(25);
    S::sort(&mut v);
    assert_eq!(v, patterns::ascending(25), "{}", S::name());

    let mut v = vec![42];
    S::sort(&mut v);
    assert_eq!(v, [42], "{}", S::name());
}

pub fn random<S: Sort>() {
    test_impl::<i32, S>(patterns::random);
}

pub fn random_string<S: Sort>() {
    test_impl::<String, S>(|test_size| {
        patterns::random(test_size)
            .into_iter()
            .map(|val| format!("{}", val))
            .collect()
    });
}

pub fn random_zipf<S: Sort>() {
    test_impl::<i32, S>(|test_size| patterns::random_zipf(test_size, 1.0));
}

pub fn random_binary<S: Sort>() {
    test_impl::<i32, S>(patterns::random_binary);
}

pub fn random_narrow<S: Sort>() {
    test_impl::<i32, S>(|test_size| {
        let max = ((test_size.max(2) as f64).log2().round() as i32) * 10;
        patterns::random_uniform(test_size, 0..=max)
    });
}

pub fn all_equal<S: Sort>() {
    test_impl::<i32, S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_impl::<i32, S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<i32, S>(patterns::descending);
}

pub fn saw_mixed<S: Sort>() {
    test_impl::<i32, S>(|test_size| {
        patterns::saw_mixed(test_size, ((test_size as f64).log2().round()) as usize)
    });
}

pub fn pipe_organ<S: Sort>() {
    test_impl::<i32, S>(patterns::pipe_organ);
}

pub fn cutoff_sizes<S: Sort>() {
    // Median-of-three needs 3 elements, merge sort switches at 10 and quicksort at 20.
    for len in [2, 3, 4, 9, 10, 11, 19, 20, 21] {
        sort_comp::<i32, S>(&mut patterns::random(len));
        sort_comp::<i32, S>(&mut patterns::descending(len));
        sort_comp::<i32, S>(&mut patterns::random_binary(len));
    }
}

pub fn comp_reverse<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut test_data = patterns::random(*test_size);

        let mut expected = test_data.clone();
        expected.sort_by(|a, b| b.cmp(a));

        S::sort_by(&mut test_data, |a, b| b.cmp(a));
        assert_eq!(test_data, expected, "{}", S::name());
    }
}

pub fn sort_twice<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut test_data = patterns::random_zipf(*test_size, 1.0);

        S::sort(&mut test_data);
        let sorted_once = test_data.clone();
        S::sort(&mut test_data);

        assert_eq!(test_data, sorted_once, "{}", S::name());
    }
}

pub fn violate_ord_retain_elements<S: Sort>() {
    // A comparison function that is not a strict weak ordering must not lose or duplicate
    // elements, and must not hang.
    let mut rng = patterns::new_seeded_rng();

    for test_size in TEST_SIZES {
        let original = patterns::random(*test_size);
        let mut test_data = original.clone();

        S::sort_by(&mut test_data, |_, _| {
            if rng.gen::<bool>() {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });

        let mut expected = original;
        expected.sort();
        test_data.sort();
        assert_eq!(test_data, expected, "{}", S::name());
    }
}

// --- STABLE ---

fn stability_impl<S: Sort>(keys: Vec<i32>) {
    let mut test_data: Vec<(i32, usize)> = keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, i))
        .collect();

    // The stdlib sort is stable.
    let mut expected = test_data.clone();
    expected.sort_by(|a, b| a.0.cmp(&b.0));

    S::sort_by(&mut test_data, |a, b| a.0.cmp(&b.0));

    assert_eq!(
        test_data,
        expected,
        "{} reordered equal elements, seed: {}",
        S::name(),
        patterns::random_init_seed()
    );
}

pub fn stability<S: Sort>() {
    for test_size in TEST_SIZES {
        let key_range = (*test_size as i32 / 4).max(1);
        stability_impl::<S>(patterns::random_uniform(*test_size, 0..=key_range));
    }
}

pub fn stability_with_patterns<S: Sort>() {
    for test_size in TEST_SIZES {
        stability_impl::<S>(patterns::random_binary(*test_size));
        stability_impl::<S>(patterns::all_equal(*test_size));
        stability_impl::<S>(patterns::random_zipf(*test_size, 1.0));
    }
}

pub fn stability_scenario<S: Sort>() {
    let mut v = vec![(1, "a"), (1, "b"), (0, "c")];
    S::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, [(0, "c"), (1, "a"), (1, "b")], "{}", S::name());
}
