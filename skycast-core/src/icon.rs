use serde::{Deserialize, Serialize};

/// Display-facing bucket derived from an OpenWeather condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    VolcanicAsh,
    Squall,
    Tornado,
    Clear,
    Clouds,
    Unknown,
}

impl IconCategory {
    /// Map a provider condition code to its display category.
    ///
    /// Total over all integers: anything outside the documented ranges
    /// falls through to `Unknown`.
    pub fn from_code(code: i64) -> Self {
        match code {
            200..=232 => IconCategory::Thunderstorm,
            300..=321 => IconCategory::Drizzle,
            500..=531 => IconCategory::Rain,
            600..=622 => IconCategory::Snow,
            701..=741 => IconCategory::Atmosphere,
            762 => IconCategory::VolcanicAsh,
            771 => IconCategory::Squall,
            781 => IconCategory::Tornado,
            800 => IconCategory::Clear,
            801..=804 => IconCategory::Clouds,
            _ => IconCategory::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Thunderstorm => "thunderstorm",
            IconCategory::Drizzle => "drizzle",
            IconCategory::Rain => "rain",
            IconCategory::Snow => "snow",
            IconCategory::Atmosphere => "atmosphere",
            IconCategory::VolcanicAsh => "volcanic-ash",
            IconCategory::Squall => "squall",
            IconCategory::Tornado => "tornado",
            IconCategory::Clear => "clear",
            IconCategory::Clouds => "clouds",
            IconCategory::Unknown => "unknown",
        }
    }

    /// Glyph used by display surfaces.
    pub fn emoji(&self) -> &'static str {
        match self {
            IconCategory::Thunderstorm => "⛈️",
            IconCategory::Drizzle => "🌦️",
            IconCategory::Rain => "🌧️",
            IconCategory::Snow => "❄️",
            IconCategory::Atmosphere => "🌫️",
            IconCategory::VolcanicAsh => "🌋",
            IconCategory::Squall => "💨",
            IconCategory::Tornado => "🌪️",
            IconCategory::Clear => "☀️",
            IconCategory::Clouds => "⛅",
            IconCategory::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_ranges_map_to_their_category() {
        for code in 200..=232 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Thunderstorm, "code {code}");
        }
        for code in 300..=321 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Drizzle, "code {code}");
        }
        for code in 500..=531 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Rain, "code {code}");
        }
        for code in 600..=622 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Snow, "code {code}");
        }
        for code in 701..=741 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Atmosphere, "code {code}");
        }
    }

    #[test]
    fn gaps_between_ranges_are_unknown() {
        let gaps = [233..=299, 322..=499, 532..=599, 623..=700, 742..=761, 763..=770, 772..=780, 782..=799];
        for gap in gaps {
            for code in gap {
                assert_eq!(IconCategory::from_code(code), IconCategory::Unknown, "code {code}");
            }
        }
    }

    #[test]
    fn range_boundaries() {
        assert_eq!(IconCategory::from_code(200), IconCategory::Thunderstorm);
        assert_eq!(IconCategory::from_code(232), IconCategory::Thunderstorm);
        assert_eq!(IconCategory::from_code(233), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(300), IconCategory::Drizzle);
        assert_eq!(IconCategory::from_code(321), IconCategory::Drizzle);
        assert_eq!(IconCategory::from_code(499), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(500), IconCategory::Rain);
        assert_eq!(IconCategory::from_code(531), IconCategory::Rain);
        assert_eq!(IconCategory::from_code(600), IconCategory::Snow);
        assert_eq!(IconCategory::from_code(622), IconCategory::Snow);
        assert_eq!(IconCategory::from_code(700), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(701), IconCategory::Atmosphere);
        assert_eq!(IconCategory::from_code(741), IconCategory::Atmosphere);
        assert_eq!(IconCategory::from_code(742), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(762), IconCategory::VolcanicAsh);
        assert_eq!(IconCategory::from_code(771), IconCategory::Squall);
        assert_eq!(IconCategory::from_code(781), IconCategory::Tornado);
        assert_eq!(IconCategory::from_code(800), IconCategory::Clear);
        assert_eq!(IconCategory::from_code(801), IconCategory::Clouds);
        assert_eq!(IconCategory::from_code(804), IconCategory::Clouds);
        assert_eq!(IconCategory::from_code(805), IconCategory::Unknown);
    }

    #[test]
    fn out_of_range_codes_are_unknown() {
        assert_eq!(IconCategory::from_code(-1), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(0), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(199), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(i64::MAX), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(i64::MIN), IconCategory::Unknown);
    }

    #[test]
    fn classification_is_stable() {
        for code in [210, 762, 800, 999, -5] {
            assert_eq!(IconCategory::from_code(code), IconCategory::from_code(code));
        }
    }

    #[test]
    fn labels_are_kebab_case() {
        assert_eq!(IconCategory::VolcanicAsh.as_str(), "volcanic-ash");
        assert_eq!(IconCategory::Thunderstorm.to_string(), "thunderstorm");
    }
}
