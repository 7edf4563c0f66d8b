//! Bundled color schemes
//!
//! Each scheme is an ordered twelve-color ramp, light background first,
//! high-contrast text last, matching the twelve ramp steps in
//! [`super::COLOR_STEPS`]. The table is the external collaborator the
//! expander queries; a miss means the name was misspelled.

/// Scheme names available from [`lookup`], for diagnostics and tests.
pub const NAMES: [&str; 12] = [
    "gray", "slate", "blue", "indigo", "violet", "purple", "cyan", "teal", "green", "amber",
    "orange", "red",
];

/// Look up a scheme's ordered ramp by name.
pub fn lookup(name: &str) -> Option<&'static [&'static str; 12]> {
    let ramp: &[&str; 12] = match name {
        "gray" => &[
            "#fcfcfc", "#f9f9f9", "#f0f0f0", "#e8e8e8", "#e0e0e0", "#d9d9d9", "#cecece",
            "#bbbbbb", "#8d8d8d", "#838383", "#646464", "#202020",
        ],
        "slate" => &[
            "#fcfcfd", "#f9f9fb", "#f0f0f3", "#e8e8ec", "#e0e1e6", "#d9d9e0", "#cdced6",
            "#b9bbc6", "#8b8d98", "#80838d", "#60646c", "#1c2024",
        ],
        "blue" => &[
            "#fbfdff", "#f4faff", "#e6f4fe", "#d5efff", "#c2e5ff", "#acd8fc", "#8ec8f6",
            "#5eb1ef", "#0090ff", "#0588f0", "#0d74ce", "#113264",
        ],
        "indigo" => &[
            "#fdfdfe", "#f7f9ff", "#edf2fe", "#e1e9ff", "#d2deff", "#c1d0ff", "#abbdf9",
            "#8da4ef", "#3e63dd", "#3358d4", "#3a5bc7", "#1f2d5c",
        ],
        "violet" => &[
            "#fdfcfe", "#faf8ff", "#f4f0fe", "#ebe4ff", "#e1d9ff", "#d4cafe", "#c2b5f5",
            "#aa99ec", "#6e56cf", "#654dc4", "#6550b9", "#2f265f",
        ],
        "purple" => &[
            "#fefcfe", "#fbf7fe", "#f7edfe", "#f2e2fc", "#ead5f9", "#e0c4f4", "#d1afec",
            "#be93e4", "#8e4ec6", "#8347b9", "#8145b5", "#402060",
        ],
        "cyan" => &[
            "#fafdfe", "#f2fafb", "#def7f9", "#caf1f6", "#b5e9f0", "#9ddde7", "#7dcedc",
            "#3db9cf", "#00a2c7", "#0797b9", "#107d98", "#0d3c48",
        ],
        "teal" => &[
            "#fafefd", "#f3fbf9", "#e0f8f3", "#ccf3ea", "#b8eae0", "#a1ded2", "#83cdc1",
            "#53b9ab", "#12a594", "#0d9b8a", "#008573", "#0d3d38",
        ],
        "green" => &[
            "#fbfefc", "#f4fbf6", "#e6f6eb", "#d6f1df", "#c4e8d1", "#adddc0", "#8eceaa",
            "#5bb98b", "#30a46c", "#2b9a66", "#218358", "#193b2d",
        ],
        "amber" => &[
            "#fefdfb", "#fefbe9", "#fff7c2", "#ffee9c", "#fbe577", "#f3d673", "#e9c162",
            "#e2a336", "#ffc53d", "#ffba18", "#ab6400", "#4f3422",
        ],
        "orange" => &[
            "#fefcfb", "#fff7ed", "#ffefd6", "#ffdfb5", "#ffd19a", "#ffc182", "#f5ae73",
            "#ec9455", "#f76b15", "#ef5f00", "#cc4e00", "#582d1d",
        ],
        "red" => &[
            "#fffcfc", "#fff7f7", "#feebec", "#ffdbdc", "#ffcdce", "#fdbdbe", "#f4a9aa",
            "#eb8e90", "#e5484d", "#dc3e42", "#ce2c31", "#641723",
        ],
        _ => return None,
    };

    Some(ramp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_and_table_agree() {
        for name in NAMES {
            assert!(lookup(name).is_some(), "catalog lists missing scheme {name}");
        }
    }

    #[test]
    fn ramps_hold_hex_colors() {
        for name in NAMES {
            for color in lookup(name).unwrap() {
                assert!(color.starts_with('#') && color.len() == 7, "{name}: {color}");
            }
        }
    }

    #[test]
    fn misses_return_none() {
        assert!(lookup("chartreuse").is_none());
        assert!(lookup("").is_none());
    }
}
