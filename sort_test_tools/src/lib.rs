//! Shared test battery for sort implementations.
//!
//! Implement [`Sort`] for a type and expand [`instantiate_sort_tests!`] (and, for stable sorts,
//! [`instantiate_stable_sort_tests!`]) inside a module of an integration test.

use std::cmp::Ordering;

pub mod patterns;
pub mod tests;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        #[test]
        fn $test_fn_name() {
            $crate::tests::$test_fn_name::<$sort_impl>();
        }
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, fixed_scenario);
        $crate::instantiate_sort_test_inner!($sort_impl, random);
        $crate::instantiate_sort_test_inner!($sort_impl, random_string);
        $crate::instantiate_sort_test_inner!($sort_impl, random_zipf);
        $crate::instantiate_sort_test_inner!($sort_impl, random_binary);
        $crate::instantiate_sort_test_inner!($sort_impl, random_narrow);
        $crate::instantiate_sort_test_inner!($sort_impl, all_equal);
        $crate::instantiate_sort_test_inner!($sort_impl, ascending);
        $crate::instantiate_sort_test_inner!($sort_impl, descending);
        $crate::instantiate_sort_test_inner!($sort_impl, saw_mixed);
        $crate::instantiate_sort_test_inner!($sort_impl, pipe_organ);
        $crate::instantiate_sort_test_inner!($sort_impl, cutoff_sizes);
        $crate::instantiate_sort_test_inner!($sort_impl, comp_reverse);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_twice);
        $crate::instantiate_sort_test_inner!($sort_impl, violate_ord_retain_elements);
    };
}

#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, stability);
        $crate::instantiate_sort_test_inner!($sort_impl, stability_with_patterns);
        $crate::instantiate_sort_test_inner!($sort_impl, stability_scenario);
    };
}
