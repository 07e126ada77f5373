//! Fuzz target for the built-in predicates.
//!
//! Checks the invariants every predicate must hold for arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;

use fieldcheck_validation::predicates::*;

fuzz_target!(|data: &str| {
    let number = is_number(data);
    let list = is_comma_separated_numbers(data);
    let alpha = is_alphabet(data);
    let sort = is_sort_format(data);

    // Blank input is never valid
    if data.trim().is_empty() {
        assert!(!number && !list && !alpha && !sort);
    }

    // A single number is a one-element list
    if number {
        assert!(list);
    }

    // Every segment of an accepted list is a number
    if list {
        assert!(data.split(',').all(is_number));
    }

    // Letters-only input is a bare sort field
    if alpha {
        assert!(sort);
        assert!(!number);
    }

    if sort {
        assert!(data.split(' ').count() <= 2);
    }
});
