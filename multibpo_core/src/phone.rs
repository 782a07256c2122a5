/// The country code we prepend to bare local numbers.
const COUNTRY_CODE: &str = "55";

/// Keep only the digits of whatever the deep link carried.
fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Pre-fill transform for the WhatsApp field of the registration form.
///
/// An eleven-digit local mobile number gains a `+55` prefix; a thirteen-digit
/// number that already carries the country code gains only the `+`. Anything
/// else is left as its bare digits so the user can fix it by hand.
#[must_use]
pub fn prefill(raw: &str) -> String {
    let digits = digits(raw);

    if digits.len() == 11 && !digits.starts_with(COUNTRY_CODE) {
        format!("+{COUNTRY_CODE}{digits}")
    } else if digits.len() == 13 && digits.starts_with(COUNTRY_CODE) {
        format!("+{digits}")
    } else {
        digits
    }
}

/// Format a number for the subscription backend: strip punctuation and make
/// sure the result is international-prefixed.
#[must_use]
pub fn format(raw: &str) -> String {
    let digits = digits(raw);

    if digits.starts_with(COUNTRY_CODE) {
        format!("+{digits}")
    } else {
        format!("+{COUNTRY_CODE}{digits}")
    }
}

/// Decide whether a number is plausible enough to send to the subscription
/// backend. Numbers already carrying the country code must be 12–13 digits in
/// total; bare local numbers must be the full 11 digits of a mobile number.
#[must_use]
pub fn validate(raw: &str) -> bool {
    let digits = digits(raw);

    if digits.starts_with(COUNTRY_CODE) {
        (12..=13).contains(&digits.len())
    } else {
        digits.len() == 11
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn prefill_adds_country_code_to_local_mobile() {
        assert_eq!(prefill("11999998888"), "+5511999998888");
    }

    #[test]
    fn prefill_adds_plus_to_coded_number() {
        assert_eq!(prefill("5511999998888"), "+5511999998888");
    }

    #[test]
    fn prefill_strips_punctuation() {
        assert_eq!(prefill("(11) 99999-8888"), "+5511999998888");
    }

    #[test]
    fn prefill_leaves_odd_lengths_alone() {
        assert_eq!(prefill("99998888"), "99998888");
    }

    #[test]
    fn format_always_ensures_country_code() {
        assert_eq!(format("11999998888"), "+5511999998888");
        assert_eq!(format("5511999998888"), "+5511999998888");
    }

    #[test]
    fn ten_digit_number_is_invalid() {
        assert!(!validate("1199998888"));
    }

    #[test]
    fn eleven_digit_number_is_valid() {
        assert!(validate("11999998888"));
    }

    #[test]
    fn coded_numbers_accept_twelve_or_thirteen_digits() {
        assert!(validate("551199998888"));
        assert!(validate("5511999998888"));
        assert!(!validate("55119999888"));
        assert!(!validate("55119999988888"));
    }

    #[test]
    fn short_input_is_invalid() {
        assert!(!validate("999"));
        assert!(!validate(""));
    }

    proptest! {
        #[test]
        fn format_output_is_always_international(raw in "[0-9() +-]{0,20}") {
            prop_assert!(format(&raw).starts_with('+'));
        }

        #[test]
        fn valid_local_numbers_prefill_and_format_agree(digits in "[1-4][0-9]{10}") {
            prop_assert!(validate(&digits));
            prop_assert_eq!(prefill(&digits), format(&digits));
        }
    }
}
