//! Case-insensitive, numeric-aware string comparison.
//!
//! Runs of ASCII digits compare by numeric value, everything else compares
//! character by character after lowercasing. `"Item 2"` sorts before
//! `"Item 10"`, and `"apple"` equals `"Apple"`.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compares two strings the way a human reads a product list.
///
/// # Examples
///
/// ```
/// use catalogue::query::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("Item 2", "Item 10"), Ordering::Less);
/// assert_eq!(natural_cmp("apple", "APPLE"), Ordering::Equal);
/// ```
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let ordering = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                compare_digit_runs(&l_run, &r_run)
            }
            (Some(l), Some(r)) => {
                left.next();
                right.next();
                fold(l).cmp(&fold(r))
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

// Leading zeros are ignored for value; "007" sorts after "7" only as a tiebreak.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_value = a.trim_start_matches('0');
    let b_value = b.trim_start_matches('0');

    a_value
        .len()
        .cmp(&b_value.len())
        .then_with(|| a_value.cmp(b_value))
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(natural_cmp("Item 2", "Item 10"), Ordering::Less);
        assert_eq!(natural_cmp("Item 10", "Item 9"), Ordering::Greater);
        assert_eq!(natural_cmp("a100b", "a100c"), Ordering::Less);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(natural_cmp("MacBook Pro", "macbook pro"), Ordering::Equal);
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn digits_sort_before_letters() {
        assert_eq!(natural_cmp("iPhone 9", "iPhone X"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(natural_cmp("Oil", "Oil Free"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_break_ties_only() {
        assert_eq!(natural_cmp("v07", "v7"), Ordering::Greater);
        assert_eq!(natural_cmp("v07", "v8"), Ordering::Less);
    }
}
