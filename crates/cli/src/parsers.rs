use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a walker thread count constrained to the inclusive range [1, 512].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range [1, 512].
pub fn parse_usize_1_to_512(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

/// Parse a positive `u64` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_u64(s: &str) -> Result<u64, String> {
    parse_bounded_number(s, 1, None)
}

/// 拡張子を正規化する (`.P8` → `p8`)
///
/// # Errors
/// Returns an error if nothing is left after removing the leading dot.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.trim().trim_start_matches('.');
    if ext.is_empty() {
        return Err(format!("empty extension: '{s}'"));
    }
    Ok(ext.to_ascii_lowercase())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Test positive usize parsing
        #[test]
        fn test_positive_usize(n in 1usize..1_000_000) {
            let formatted = format!("{n}");
            let parsed = parse_positive_usize(&formatted).unwrap();
            prop_assert_eq!(parsed, n);
        }

        /// Test bounded usize rejects values above max
        #[test]
        fn test_bounded_usize_rejects_large(n in 513usize..10_000) {
            let formatted = format!("{n}");
            prop_assert!(parse_usize_1_to_512(&formatted).is_err());
        }

        #[test]
        fn test_extension_drops_leading_dots(ext in "[a-zA-Z0-9]{1,8}", dots in 0usize..3) {
            let input = format!("{}{ext}", ".".repeat(dots));
            prop_assert_eq!(parse_extension(&input).unwrap(), ext.to_ascii_lowercase());
        }
    }
}
