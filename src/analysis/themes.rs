//! Theme detection over entry text.

use super::lexicon::{normalize, THEME_LEXICON};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A recurring life area an entry can touch on.
///
/// Variants are listed in declaration order, which is also the tie-break order
/// when two themes score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Work,
    Family,
    Relationships,
    Health,
    Hobbies,
    Education,
    Travel,
    Finance,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Work,
        Theme::Family,
        Theme::Relationships,
        Theme::Health,
        Theme::Hobbies,
        Theme::Education,
        Theme::Travel,
        Theme::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Work => "work",
            Theme::Family => "family",
            Theme::Relationships => "relationships",
            Theme::Health => "health",
            Theme::Hobbies => "hobbies",
            Theme::Education => "education",
            Theme::Travel => "travel",
            Theme::Finance => "finance",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        THEME_LEXICON.keywords(*self)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme found in a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeMatch {
    pub theme: Theme,
    /// Fraction of the theme's keywords found at least once.
    pub confidence: f64,
    /// Number of distinct keywords found.
    pub matches: usize,
}

/// Detects which themes `text` touches on, most confident first.
///
/// A keyword counts when any lowercased whitespace token contains it.
/// Themes without a single matching keyword are left out. The sort is
/// stable, so equally confident themes keep their declaration order.
///
/// # Examples
///
/// ```
/// use reverie::analysis::{detect_themes, Theme};
///
/// let themes = detect_themes("I went to the gym for a workout");
/// assert_eq!(themes[0].theme, Theme::Health);
/// assert_eq!(themes[0].matches, 2);
/// ```
pub fn detect_themes(text: &str) -> Vec<ThemeMatch> {
    let normalized = normalize(text);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.is_empty() {
        return Vec::new();
    }

    let mode = THEME_LEXICON.mode;
    let mut detected: Vec<ThemeMatch> = THEME_LEXICON
        .categories
        .iter()
        .filter_map(|(theme, keywords)| {
            let matches = keywords
                .iter()
                .filter(|keyword| tokens.iter().any(|token| mode.matches(token, keyword)))
                .count();
            (matches > 0).then(|| ThemeMatch {
                theme: *theme,
                confidence: matches as f64 / keywords.len() as f64,
                matches,
            })
        })
        .collect();

    detected.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    trace!(count = detected.len(), "Detected themes");
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_themes() {
        assert!(detect_themes("").is_empty());
        assert!(detect_themes("   ").is_empty());
    }

    #[test]
    fn test_substring_matching_catches_inflections() {
        let themes = detect_themes("I went to the gym for a workout");
        let health = themes
            .iter()
            .find(|m| m.theme == Theme::Health)
            .expect("health should be detected");
        assert_eq!(health.matches, 2);
        assert!((health.confidence - 0.2).abs() < f64::EPSILON);

        // "workout" contains "work", so the work theme fires too
        assert!(themes.iter().any(|m| m.theme == Theme::Work));
    }

    #[test]
    fn test_confidence_is_fraction_of_keywords() {
        let themes = detect_themes("budget salary money");
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].theme, Theme::Finance);
        assert_eq!(themes[0].matches, 3);
        assert!((themes[0].confidence - 3.0 / 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_keyword_counted_once_regardless_of_repeats() {
        let themes = detect_themes("project project project");
        assert_eq!(themes[0].theme, Theme::Work);
        assert_eq!(themes[0].matches, 1);
    }

    #[test]
    fn test_sorted_by_confidence_descending() {
        // work: job, boss, deadline (3/10); finance: money (1/9)
        let themes = detect_themes("job boss deadline money");
        assert_eq!(themes[0].theme, Theme::Work);
        assert_eq!(themes[1].theme, Theme::Finance);
        assert!(themes[0].confidence > themes[1].confidence);
    }

    #[test]
    fn test_equal_confidence_keeps_declaration_order() {
        // work: job (1/10); health: doctor (1/10)
        let themes = detect_themes("doctor job");
        assert_eq!(themes.len(), 2);
        assert_eq!(themes[0].theme, Theme::Work);
        assert_eq!(themes[1].theme, Theme::Health);
        assert_eq!(themes[0].confidence, themes[1].confidence);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let text = "Trip with my sister, then a long study session";
        assert_eq!(detect_themes(text), detect_themes(text));
    }

    #[test]
    fn test_theme_display_and_serde() {
        assert_eq!(Theme::Relationships.to_string(), "relationships");
        assert_eq!(serde_json::to_string(&Theme::Finance).unwrap(), "\"finance\"");
    }
}
