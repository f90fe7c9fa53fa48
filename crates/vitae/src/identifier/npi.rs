//! National Provider Identifier (NPI) validation and formatting.
//!
//! An NPI is a 10-digit identifier whose final digit is a Luhn check digit
//! computed over the first nine digits plus the implied "80840" card-issuer
//! prefix assigned to the US health industry.

/// Contribution of the implied "80840" prefix to the Luhn sum of a
/// 10-digit NPI.
const NPI_PREFIX_SUM: u32 = 24;

/// Validate an NPI number.
///
/// Non-digit characters are stripped before validation, so formatted input
/// like `1234-567-893` is accepted. Returns `false` for any deviation:
/// wrong length, or a check digit that does not match the checksum.
pub fn validate_npi(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 10 {
        return false;
    }

    let mut sum = NPI_PREFIX_SUM;
    for (position, &digit) in digits[..9].iter().enumerate() {
        let mut value = digit;
        // Alternating doubling starts at the first digit.
        if position % 2 == 0 {
            value *= 2;
            if value >= 10 {
                value -= 9;
            }
        }
        sum += value;
    }

    let check_digit = (10 - sum % 10) % 10;
    check_digit == digits[9]
}

/// Format an NPI for display as `XXXX-XXX-XXX`.
///
/// Best-effort only: if the input does not strip to exactly 10 digits it
/// is returned unchanged. Formatting is not a validity signal.
pub fn format_npi(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("{}-{}-{}", &digits[..4], &digits[4..7], &digits[7..])
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Independent checksum computation so the tests don't share the
    /// implementation's arithmetic.
    fn luhn_check_digit(first_nine: &[u32]) -> u32 {
        let mut sum = 24;
        for (i, &d) in first_nine.iter().enumerate() {
            sum += if i % 2 == 0 {
                let doubled = d * 2;
                doubled / 10 + doubled % 10
            } else {
                d
            };
        }
        (10 - sum % 10) % 10
    }

    #[test]
    fn test_known_valid_npi() {
        assert!(validate_npi("1234567893"));
    }

    #[test]
    fn test_known_invalid_npi() {
        // Same leading nine digits as the valid demo value, wrong check digit.
        assert!(!validate_npi("1234567890"));
    }

    #[test]
    fn test_checksum_agrees_with_independent_computation() {
        let first_nine = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let check = luhn_check_digit(&first_nine);

        let npi: String = first_nine
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(check.to_string()))
            .collect();
        assert!(validate_npi(&npi));

        // Every other check digit must fail.
        for wrong in 0..10 {
            if wrong == check {
                continue;
            }
            let bad: String = first_nine
                .iter()
                .map(ToString::to_string)
                .chain(std::iter::once(wrong.to_string()))
                .collect();
            assert!(!validate_npi(&bad), "check digit {wrong} should fail");
        }
    }

    #[test]
    fn test_formatted_input_is_stripped() {
        assert!(validate_npi("1234-567-893"));
        assert!(validate_npi(" 1234 567 893 "));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(!validate_npi(""));
        assert!(!validate_npi("123456789"));
        assert!(!validate_npi("12345678931"));
        assert!(!validate_npi("not an npi"));
    }

    #[test]
    fn test_format_npi() {
        assert_eq!(format_npi("1234567893"), "1234-567-893");
        assert_eq!(format_npi("1234-567-893"), "1234-567-893");
    }

    #[test]
    fn test_format_npi_passthrough() {
        assert_eq!(format_npi("12345"), "12345");
        assert_eq!(format_npi("hello"), "hello");
        assert_eq!(format_npi(""), "");
    }
}
