//! Weekday-token bitmask codec.

use crate::error::TaskError;
use crate::types::DaySpec;

/// Bitmask weight for every accepted token. `*` saturates all seven bits.
const DAY_VALUES: [(&str, u32); 8] = [
    ("SUN", 1),
    ("MON", 2),
    ("TUE", 4),
    ("WED", 8),
    ("THU", 16),
    ("FRI", 32),
    ("SAT", 64),
    ("*", 127),
];

/// Encode a day specification into the scheduler's `DaysOfWeek` bitmask.
///
/// Tokens are case-insensitive and reduce by bitwise OR; a pre-mixed
/// [`DaySpec::Mask`] passes through unchanged.
pub fn encode_days(days: &DaySpec) -> Result<u32, TaskError> {
    match days {
        DaySpec::Mask(mask) => Ok(*mask),
        DaySpec::Tokens(tokens) => tokens
            .split(',')
            .try_fold(0, |mask, token| Ok(mask | day_value(token)?)),
        DaySpec::List(tokens) => tokens
            .iter()
            .try_fold(0, |mask, token| Ok(mask | day_value(token)?)),
    }
}

fn day_value(token: &str) -> Result<u32, TaskError> {
    let upper = token.to_uppercase();
    DAY_VALUES
        .iter()
        .find(|(name, _)| *name == upper)
        .map(|(_, value)| *value)
        .ok_or_else(|| TaskError::InvalidDayToken {
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    // === Unit Tests ===

    #[test_case("SUN", 1)]
    #[test_case("MON", 2)]
    #[test_case("TUE", 4)]
    #[test_case("WED", 8)]
    #[test_case("THU", 16)]
    #[test_case("FRI", 32)]
    #[test_case("SAT", 64)]
    #[test_case("*", 127)]
    fn test_single_token_weight(token: &str, expected: u32) {
        let mask = encode_days(&DaySpec::Tokens(token.to_string())).unwrap();
        assert_eq!(mask, expected);
    }

    #[test]
    fn test_comma_separated_tokens_or_together() {
        let mask = encode_days(&DaySpec::Tokens("MON,WED,FRI".to_string())).unwrap();
        assert_eq!(mask, 2 | 8 | 32);
        assert_eq!(mask, 42);
    }

    #[test]
    fn test_tokens_are_case_insensitive() {
        assert_eq!(encode_days(&DaySpec::Tokens("sun".to_string())).unwrap(), 1);
        assert_eq!(
            encode_days(&DaySpec::Tokens("Mon,fRi".to_string())).unwrap(),
            2 | 32
        );
    }

    #[test]
    fn test_list_form_matches_string_form() {
        let from_list = encode_days(&DaySpec::List(vec![
            "MON".to_string(),
            "WED".to_string(),
            "FRI".to_string(),
        ]))
        .unwrap();
        let from_string = encode_days(&DaySpec::Tokens("MON,WED,FRI".to_string())).unwrap();
        assert_eq!(from_list, from_string);
    }

    #[test]
    fn test_unknown_token_is_rejected_and_names_the_accepted_set() {
        let err = encode_days(&DaySpec::Tokens("XYZ".to_string())).unwrap_err();
        assert!(matches!(
            &err,
            TaskError::InvalidDayToken { token } if token == "XYZ"
        ));
        let message = err.to_string();
        for token in ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN", "*"] {
            assert!(message.contains(token), "message should name {token}: {message}");
        }
    }

    #[test]
    fn test_unknown_token_in_a_valid_run_still_fails() {
        let err = encode_days(&DaySpec::Tokens("MON,XYZ,FRI".to_string())).unwrap_err();
        assert!(matches!(err, TaskError::InvalidDayToken { .. }));
    }

    #[test]
    fn test_premixed_mask_passes_through() {
        assert_eq!(encode_days(&DaySpec::Mask(42)).unwrap(), 42);
        assert_eq!(encode_days(&DaySpec::Mask(127)).unwrap(), 127);
    }

    // === Property-Based Tests ===

    const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

    fn weekday_subset() -> impl Strategy<Value = Vec<&'static str>> {
        proptest::sample::subsequence(WEEKDAYS.to_vec(), 1..=7)
    }

    proptest! {
        // The mask is the OR of the singleton masks, whatever the order.
        #[test]
        fn encoding_is_order_independent(tokens in weekday_subset().prop_shuffle()) {
            let shuffled = encode_days(&DaySpec::Tokens(tokens.join(","))).unwrap();

            let mut sorted = tokens.clone();
            sorted.sort_unstable();
            let ordered = encode_days(&DaySpec::Tokens(sorted.join(","))).unwrap();

            prop_assert_eq!(shuffled, ordered);
        }

        #[test]
        fn mask_is_or_of_singletons(tokens in weekday_subset()) {
            let combined = encode_days(&DaySpec::Tokens(tokens.join(","))).unwrap();

            let mut expected = 0;
            for token in &tokens {
                expected |= encode_days(&DaySpec::Tokens((*token).to_string())).unwrap();
            }

            prop_assert_eq!(combined, expected);
        }

        // Re-encoding the codec's own output is the identity.
        #[test]
        fn reencoding_output_is_identity(tokens in weekday_subset()) {
            let mask = encode_days(&DaySpec::Tokens(tokens.join(","))).unwrap();
            prop_assert_eq!(encode_days(&DaySpec::Mask(mask)).unwrap(), mask);
        }

        // Duplicated tokens never change the mask.
        #[test]
        fn duplicates_are_absorbed(tokens in weekday_subset()) {
            let once = encode_days(&DaySpec::Tokens(tokens.join(","))).unwrap();
            let doubled = [tokens.clone(), tokens.clone()].concat();
            let twice = encode_days(&DaySpec::Tokens(doubled.join(","))).unwrap();
            prop_assert_eq!(once, twice);
        }

        // Every weekday mask fits inside the wildcard mask.
        #[test]
        fn masks_are_subsets_of_wildcard(tokens in weekday_subset()) {
            let mask = encode_days(&DaySpec::Tokens(tokens.join(","))).unwrap();
            prop_assert_eq!(mask & 127, mask);
        }
    }
}
