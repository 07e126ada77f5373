// Built-in rule predicates

use once_cell::sync::Lazy;
use regex::Regex;

// Digit classes are spelled out so non-ASCII digits never match.
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+\-]?(?:(?:0|[1-9][0-9]*)(?:\.[0-9]*)?|\.[0-9]+)$").unwrap()
});

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

// Whitespace is limited to tab, newline, form feed, carriage return and space;
// vertical tab is rejected.
static SORT_CHARS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_\t\n\f\r ]+$").unwrap());

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Decimal literal: optional sign, no leading zeros, optional fraction.
///
/// ```
/// use fieldcheck_validation::predicates::is_number;
///
/// assert!(is_number("-3.5"));
/// assert!(is_number(".5"));
/// assert!(!is_number("12.3.4"));
/// ```
pub fn is_number(s: &str) -> bool {
    !is_blank(s) && NUMBER_REGEX.is_match(s)
}

/// One or more numbers joined by commas, e.g. `1,2,3`
pub fn is_comma_separated_numbers(s: &str) -> bool {
    !is_blank(s) && s.split(',').all(is_number)
}

/// ASCII letters only
pub fn is_alphabet(s: &str) -> bool {
    !is_blank(s) && ALPHA_REGEX.is_match(s)
}

/// Sort expression: `field`, `field asc` or `field desc`.
///
/// The field may contain letters and underscores; the direction is
/// case-insensitive. Tokens are separated by exactly one space.
pub fn is_sort_format(s: &str) -> bool {
    if is_blank(s) || !SORT_CHARS_REGEX.is_match(s) {
        return false;
    }

    let tokens: Vec<&str> = s.split(' ').collect();
    match tokens.as_slice() {
        [_] => true,
        [_, direction] => {
            direction.eq_ignore_ascii_case("asc") || direction.eq_ignore_ascii_case("desc")
        }
        _ => false,
    }
}
