//! Localized strings for the chart decorations.
//!
//! Two bundles ship with the engine: Thai (the default) and English. A
//! language is selected from a BCP-47-ish tag; only the primary subtag is
//! inspected, so `en-US` and `EN` both select English.

use std::fmt;

use log::warn;

/// Display language of the chart captions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Thai,
    English,
}

/// The fixed set of localized captions used by the annotation planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBundle {
    /// Rotated caption of the x axis.
    pub x_axis_label: &'static str,
    /// Caption under the terminal callout.
    pub premium_end: &'static str,
    /// Small caption above age-marked years.
    pub at_age: &'static str,
    /// Chart title.
    pub coverage: &'static str,
    /// Chart subtitle.
    pub or_clause: &'static str,
}

const THAI: TextBundle = TextBundle {
    x_axis_label: "สิ้นปีกรมธรรม์ที่",
    premium_end: "ชำระเบี้ยครบ",
    at_age: "ครบอายุ",
    coverage: "ความคุ้มครองชีวิต : จำนวนที่มากกว่าระหว่าง 100% ของทุนประกันภัย",
    or_clause: "หรือ มูลค่าเวนคืนเงินสด หรือ เบี้ยประกันภัยสะสม",
};

const ENGLISH: TextBundle = TextBundle {
    x_axis_label: "End of Year",
    premium_end: "Premium Payment Finished",
    at_age: "At age",
    coverage: "Death coverage*",
    or_clause: "or Cash Value or Accumulated Premium",
};

impl Language {
    /// Resolves a language tag, falling back to [`Language::Thai`] for
    /// anything unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use paytrail::i18n::Language;
    ///
    /// assert_eq!(Language::from_tag("en-US"), Language::English);
    /// assert_eq!(Language::from_tag("fr"), Language::Thai);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match primary.as_str() {
            "th" => Self::Thai,
            "en" => Self::English,
            _ => {
                warn!(tag; "Unsupported language tag, falling back to Thai");
                Self::Thai
            }
        }
    }

    /// Returns the primary language subtag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Thai => "th",
            Self::English => "en",
        }
    }

    /// Returns the caption bundle for this language.
    pub fn bundle(self) -> &'static TextBundle {
        match self {
            Self::Thai => &THAI,
            Self::English => &ENGLISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_thai() {
        assert_eq!(Language::default(), Language::Thai);
        assert_eq!(Language::default().bundle().premium_end, "ชำระเบี้ยครบ");
    }

    #[test]
    fn test_from_tag_primary_subtag() {
        assert_eq!(Language::from_tag("en"), Language::English);
        assert_eq!(Language::from_tag("EN-gb"), Language::English);
        assert_eq!(Language::from_tag("en_US"), Language::English);
        assert_eq!(Language::from_tag("th-TH"), Language::Thai);
    }

    #[test]
    fn test_from_tag_unknown_falls_back() {
        assert_eq!(Language::from_tag("fr"), Language::Thai);
        assert_eq!(Language::from_tag(""), Language::Thai);
    }

    #[test]
    fn test_english_bundle() {
        let bundle = Language::English.bundle();
        assert_eq!(bundle.x_axis_label, "End of Year");
        assert_eq!(bundle.premium_end, "Premium Payment Finished");
        assert_eq!(bundle.at_age, "At age");
        assert_eq!(bundle.coverage, "Death coverage*");
        assert_eq!(bundle.or_clause, "or Cash Value or Accumulated Premium");
    }

    #[test]
    fn test_display_tag() {
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(Language::Thai.to_string(), "th");
    }
}
