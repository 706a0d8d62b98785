use core::cmp::Ordering;

use super::traits::StrOrder;

/// Case-insensitive, digit-run-aware string ordering.
///
/// Runs of ASCII digits are compared as numeric magnitudes rather than
/// character by character, so `"item2"` sorts before `"item10"`. Everything
/// else compares byte-wise with ASCII case folded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl StrOrder for NaturalOrder {
    fn cmp(&self, a: &str, b: &str) -> Ordering {
        natural_cmp(a, b)
    }
}

/// Compares two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let ra = digit_run(a, i);
            let rb = digit_run(b, j);
            match numeric_cmp(&a[i..ra], &b[j..rb]) {
                Ordering::Equal => {
                    i = ra;
                    j = rb;
                }
                other => return other,
            }
        } else {
            match a[i].to_ascii_lowercase().cmp(&b[j].to_ascii_lowercase()) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Returns the end of the digit run starting at `start`.
fn digit_run(s: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Compares two digit runs by magnitude.
///
/// Leading zeros are skipped first, so runs of any length compare without
/// overflow: a longer significant run is the larger number, equal lengths
/// fall back to byte order.
fn numeric_cmp(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_zeros(a);
    let b = strip_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_zeros(run: &[u8]) -> &[u8] {
    let first = run.iter().position(|&d| d != b'0').unwrap_or(run.len());
    &run[first..]
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::natural_cmp;

    #[test]
    fn test_digit_runs_compare_numerically() {
        assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
        assert_eq!(natural_cmp("item10", "item2"), Ordering::Greater);
        assert_eq!(natural_cmp("a99b", "a100b"), Ordering::Less);
    }

    #[test]
    fn test_case_insensitive_letters() {
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Equal);
        assert_eq!(natural_cmp("Apple", "banana"), Ordering::Less);
        assert_eq!(natural_cmp("ZEBRA", "ant"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_is_smaller() {
        assert_eq!(natural_cmp("ab", "abc"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "ab"), Ordering::Greater);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn test_leading_zeros_equal_magnitude() {
        assert_eq!(natural_cmp("a01", "a1"), Ordering::Equal);
        assert_eq!(natural_cmp("a007b", "a7b"), Ordering::Equal);
        assert_eq!(natural_cmp("a0", "a1"), Ordering::Less);
    }

    #[test]
    fn test_huge_runs_do_not_overflow() {
        let small = "n123456789012345678901234567890";
        let large = "n123456789012345678901234567891";
        assert_eq!(natural_cmp(small, large), Ordering::Less);
    }

    #[test]
    fn test_digits_against_letters_stay_bytewise() {
        // Only paired digit runs go numeric; digit vs letter is byte order.
        assert_eq!(natural_cmp("1a", "a1"), Ordering::Less);
    }
}
