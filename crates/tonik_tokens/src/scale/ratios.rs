//! Named ratios for modular scales
//!
//! The classic musical-interval multipliers plus the golden section.
//! Lookup is by camelCase identifier; hyphen-case spellings from input
//! documents are folded before the table is consulted.

/// Resolve a camelCase ratio name to its multiplier.
///
/// Returns `None` for names outside the table; callers surface that as
/// [`BuildError::UnknownRatio`](crate::BuildError::UnknownRatio).
pub fn lookup(name: &str) -> Option<f64> {
    let ratio = match name {
        "minorSecond" => 16.0 / 15.0,
        "majorSecond" => 1.125,
        "minorThird" => 1.2,
        "majorThird" => 1.25,
        "perfectFourth" => 4.0 / 3.0,
        "augmentedFourth" => 1.414,
        "perfectFifth" => 1.5,
        "minorSixth" => 1.6,
        "goldenSection" => 1.61803398875,
        "majorSixth" => 5.0 / 3.0,
        "minorSeventh" => 16.0 / 9.0,
        "majorSeventh" => 1.875,
        "octave" => 2.0,
        "majorTenth" => 2.5,
        "majorEleventh" => 8.0 / 3.0,
        "majorTwelfth" => 3.0,
        "doubleOctave" => 4.0,
        _ => return None,
    };

    Some(ratio)
}

/// The default ratio for recipes that leave `ratio` unset.
pub const DEFAULT_RATIO: f64 = 1.5;

/// Fold a hyphen-case ratio spelling (`perfect-fifth`) into the table's
/// camelCase identifier (`perfectFifth`). Names without hyphens pass
/// through unchanged.
pub fn fold_hyphen_case(name: &str) -> String {
    if !name.contains('-') {
        return name.to_string();
    }

    let mut folded = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            folded.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            folded.push(ch);
        }
    }

    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_holds_all_seventeen_ratios() {
        let names = [
            "minorSecond",
            "majorSecond",
            "minorThird",
            "majorThird",
            "perfectFourth",
            "augmentedFourth",
            "perfectFifth",
            "minorSixth",
            "goldenSection",
            "majorSixth",
            "minorSeventh",
            "majorSeventh",
            "octave",
            "majorTenth",
            "majorEleventh",
            "majorTwelfth",
            "doubleOctave",
        ];

        for name in names {
            let ratio = lookup(name).unwrap_or_else(|| panic!("missing ratio {name}"));
            assert!(ratio.is_finite() && ratio > 1.0, "{name} = {ratio}");
        }
    }

    #[test]
    fn unknown_names_miss() {
        assert_eq!(lookup("diminishedNinth"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn hyphen_case_folds_to_camel_case() {
        assert_eq!(fold_hyphen_case("perfect-fifth"), "perfectFifth");
        assert_eq!(fold_hyphen_case("golden-section"), "goldenSection");
        assert_eq!(fold_hyphen_case("octave"), "octave");
    }

    #[test]
    fn default_ratio_is_the_perfect_fifth() {
        assert_eq!(lookup("perfectFifth"), Some(DEFAULT_RATIO));
    }
}
