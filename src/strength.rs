//! Password Strength
//!
//! Five-point heuristic score and its strength-bar rendering.

/// Number of bars in the strength meter
pub const BAR_COUNT: usize = 5;

/// Score a candidate password in `0..=5`.
///
/// One point each for length >= 8, >= 12, >= 16, and for containing a
/// lowercase letter, an uppercase letter, a digit and a symbol. The raw
/// total (at most 7) is divided by 1.4 and floored.
pub fn password_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.chars().count();
    let mut raw = 0u8;

    for threshold in [8, 12, 16] {
        if length >= threshold {
            raw += 1;
        }
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        raw += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        raw += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        raw += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        raw += 1;
    }

    // floor(raw / 1.4) == floor(raw * 5 / 7)
    (raw * 5 / 7).min(BAR_COUNT as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

/// CSS classes for each bar of the meter, left to right
pub fn strength_bar_classes(score: u8) -> [&'static str; BAR_COUNT] {
    let level = StrengthLevel::from_score(score);
    let active = match level {
        StrengthLevel::Weak => "strength-bar active weak",
        StrengthLevel::Medium => "strength-bar active medium",
        StrengthLevel::Strong => "strength-bar active strong",
    };
    std::array::from_fn(|index| {
        if index < score as usize {
            active
        } else {
            "strength-bar"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(password_strength(""), 0);
    }

    #[test]
    fn test_short_single_class_scores_zero() {
        for pw in ["a", "abc", "abcdefg", "ABCDEFG", "1234567", "!!!!"] {
            assert_eq!(password_strength(pw), 0, "{pw}");
        }
    }

    #[test]
    fn test_all_classes_long_scores_five() {
        assert_eq!(password_strength("Abcdefgh1234567!"), 5);
        assert_eq!(password_strength("Zz9#Zz9#Zz9#Zz9#Zz9#"), 5);
    }

    #[test]
    fn test_lower_digit_eight_chars_is_weak() {
        let score = password_strength("abc12345");
        assert_eq!(score, 2);
        assert_eq!(StrengthLevel::from_score(score), StrengthLevel::Weak);
    }

    #[test]
    fn test_monotonic_across_length_thresholds() {
        for unit in ["a", "aB", "aB3", "aB3$"] {
            let mut previous = 0;
            for len in 1..=20 {
                let pw: String = unit.chars().cycle().take(len).collect();
                let score = password_strength(&pw);
                assert!(score >= previous, "{pw}: {score} < {previous}");
                previous = score;
            }
        }
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        // 'é' is neither an ASCII letter nor digit
        assert_eq!(password_strength("abcdefgé"), password_strength("abcdefg!"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // seven multi-byte characters stay under the 8 threshold
        assert_eq!(password_strength("ééééééé"), 0);
    }

    #[test]
    fn test_bar_classes() {
        let bars = strength_bar_classes(2);
        assert_eq!(bars[0], "strength-bar active weak");
        assert_eq!(bars[1], "strength-bar active weak");
        assert_eq!(bars[2], "strength-bar");

        let bars = strength_bar_classes(3);
        assert!(bars[..3].iter().all(|c| c.ends_with("medium")));

        let bars = strength_bar_classes(5);
        assert!(bars.iter().all(|c| c.ends_with("strong")));

        assert!(strength_bar_classes(0).iter().all(|c| *c == "strength-bar"));
    }
}
