use std::collections::HashSet;
use std::thread;

use securepass::pass::charset::{self, CharClass};
use securepass::{Error, MAX_LENGTH, MIN_LENGTH, generate_password};

fn class_counts(password: &str) -> [usize; 4] {
    let mut counts = [0; 4];
    for b in password.bytes() {
        let class = CharClass::of(b).unwrap_or_else(|| panic!("foreign char {b:#x}"));
        counts[class_index(class)] += 1;
    }
    counts
}

fn class_index(class: CharClass) -> usize {
    CharClass::ALL.iter().position(|c| *c == class).unwrap()
}

fn assert_valid(password: &str, length: usize) {
    assert_eq!(password.len(), length, "{password}");
    assert!(
        class_counts(password).iter().all(|&n| n >= 1),
        "missing class in {password}"
    );
}

#[test]
fn length_four_is_one_of_each_class() {
    let password = generate_password(4).unwrap();
    assert_eq!(class_counts(&password), [1, 1, 1, 1], "{password}");
}

#[test]
fn length_twelve() {
    assert_valid(&generate_password(12).unwrap(), 12);
}

#[test]
fn length_one_hundred() {
    assert_valid(&generate_password(100).unwrap(), 100);
}

#[test]
fn large_length() {
    assert_valid(&generate_password(10_000).unwrap(), 10_000);
}

#[test]
fn lengths_below_four_fail() {
    for length in [0, 1, 2, 3] {
        let err = generate_password(length).unwrap_err();
        assert_eq!(err, Error::InvalidArgument { length, min: MIN_LENGTH });
        assert!(err.to_string().contains("at least 4"));
    }
}

#[test]
fn absurd_lengths_fail_without_allocating() {
    let err = generate_password(usize::MAX).unwrap_err();
    assert_eq!(
        err,
        Error::TooLong {
            length: usize::MAX,
            max: MAX_LENGTH
        }
    );
    assert!(err.to_string().contains("at most"));
}

#[test]
fn every_char_comes_from_the_pool() {
    let pool: HashSet<char> = charset::pool().into_iter().map(char::from).collect();
    for length in [4, 5, 17, 64] {
        let password = generate_password(length).unwrap();
        assert!(password.chars().all(|c| pool.contains(&c)), "{password}");
    }
}

#[test]
fn passwords_differ() {
    let seen: HashSet<String> = (0..100).map(|_| generate_password(16).unwrap()).collect();
    assert_eq!(seen.len(), 100);
}

#[test]
fn seed_characters_are_not_pinned_to_the_front() {
    const RUNS: usize = 8_000;
    // counts[position][class]
    let mut counts = [[0usize; 4]; 4];
    let mut seed_order = 0;

    for _ in 0..RUNS {
        let password = generate_password(4).unwrap();
        let mut order = [0usize; 4];
        for (pos, b) in password.bytes().enumerate() {
            let idx = class_index(CharClass::of(b).unwrap());
            counts[pos][idx] += 1;
            order[pos] = idx;
        }
        if order == [0, 1, 2, 3] {
            seed_order += 1;
        }
    }

    // Expect RUNS / 4 = 2000 per cell, sigma is about 39.
    for (pos, row) in counts.iter().enumerate() {
        for (class, &n) in row.iter().enumerate() {
            assert!(
                (1_700..=2_300).contains(&n),
                "class {class} at position {pos}: {n} of {RUNS}"
            );
        }
    }
    // One of 24 orderings: about 333 expected.
    assert!((200..=470).contains(&seed_order), "seed order seen {seed_order} times");
}

#[test]
fn fill_characters_are_spread_over_the_pool() {
    const RUNS: usize = 2_000;
    let mut seen = HashSet::new();
    for _ in 0..RUNS {
        seen.extend(generate_password(8).unwrap().bytes());
    }
    assert_eq!(seen.len(), charset::size());
}

#[test]
fn concurrent_callers() {
    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (0..200)
                        .map(|_| generate_password(20).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for password in handle.join().unwrap() {
                assert_valid(&password, 20);
            }
        }
    });
}
