//! Name suggestion records as rendered by the client.
//!
//! The server passes provider output through untouched, so these types are
//! only decoded on the client side. They stay lenient: an unexpected
//! availability label is kept rather than rejected, missing attributes decode
//! as blanks, and a score sent as a numeric string is read as a number.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Provider's guess at whether the suggested domain is free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DomainAvailability {
    /// `"Likely Available"`.
    LikelyAvailable,
    /// `"Likely Taken"`.
    LikelyTaken,
    /// `"Check Required"`.
    CheckRequired,
    /// Any other label the provider produced.
    Unrecognised(String),
}

impl DomainAvailability {
    /// Label as shown to users.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::LikelyAvailable => "Likely Available",
            Self::LikelyTaken => "Likely Taken",
            Self::CheckRequired => "Check Required",
            Self::Unrecognised(label) => label.as_str(),
        }
    }
}

impl Default for DomainAvailability {
    fn default() -> Self {
        Self::Unrecognised(String::new())
    }
}

impl From<String> for DomainAvailability {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Likely Available" => Self::LikelyAvailable,
            "Likely Taken" => Self::LikelyTaken,
            "Check Required" => Self::CheckRequired,
            _ => Self::Unrecognised(value),
        }
    }
}

impl From<DomainAvailability> for String {
    fn from(value: DomainAvailability) -> Self {
        match value {
            DomainAvailability::Unrecognised(label) => label,
            other => other.label().to_owned(),
        }
    }
}

/// One generated name.
///
/// Provider content is trusted as-is, so no attribute is mandatory: a missing
/// or null attribute decodes as blank text, and a score that is neither a
/// number nor a numeric string decodes as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NameSuggestion {
    /// The business or project name.
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    /// Suggested `.com` or `.io` domain.
    #[serde(deserialize_with = "lenient_text")]
    pub domain: String,
    /// Availability guess for `domain`.
    #[serde(deserialize_with = "lenient_availability")]
    pub domain_available: DomainAvailability,
    /// Why the name works.
    #[serde(deserialize_with = "lenient_text")]
    pub rationale: String,
    /// Catchiness rating, nominally 1 to 10.
    #[serde(deserialize_with = "lenient_score")]
    pub vibe_score: f64,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_availability<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DomainAvailability, D::Error> {
    lenient_text(deserializer).map(DomainAvailability::from)
}

fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().unwrap_or_default(),
        Value::String(text) => text.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

impl NameSuggestion {
    /// Presentation band for this suggestion's vibe score.
    #[must_use]
    pub fn vibe_band(&self) -> VibeBand {
        VibeBand::from_score(self.vibe_score)
    }
}

/// Successful generation payload: `{ "names": [...] }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuggestionList {
    /// Suggestions in provider order. Ten are requested; the count is not
    /// enforced.
    pub names: Vec<NameSuggestion>,
}

/// Display band for a vibe score.
///
/// # Examples
/// ```
/// use nameforge::domain::VibeBand;
///
/// assert_eq!(VibeBand::from_score(9.0), VibeBand::Fire);
/// assert_eq!(VibeBand::from_score(4.0).emoji(), "😐");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibeBand {
    /// Score of 9 or more.
    Fire,
    /// Score of 7 or 8.
    Sparkle,
    /// Score of 5 or 6.
    ThumbsUp,
    /// Anything lower.
    Meh,
}

impl VibeBand {
    /// Classify a score using the fixed thresholds 9, 7 and 5.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Self::Fire
        } else if score >= 7.0 {
            Self::Sparkle
        } else if score >= 5.0 {
            Self::ThumbsUp
        } else {
            Self::Meh
        }
    }

    /// Emoji shown next to the score.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Fire => "🔥",
            Self::Sparkle => "✨",
            Self::ThumbsUp => "👍",
            Self::Meh => "😐",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(10.0, VibeBand::Fire)]
    #[case(9.0, VibeBand::Fire)]
    #[case(8.0, VibeBand::Sparkle)]
    #[case(7.0, VibeBand::Sparkle)]
    #[case(6.0, VibeBand::ThumbsUp)]
    #[case(5.0, VibeBand::ThumbsUp)]
    #[case(4.0, VibeBand::Meh)]
    #[case(1.0, VibeBand::Meh)]
    fn bands_follow_thresholds(#[case] score: f64, #[case] expected: VibeBand) {
        assert_eq!(VibeBand::from_score(score), expected);
    }

    #[test]
    fn decodes_provider_shaped_suggestion() {
        let value = json!({
            "name": "Standly",
            "domain": "standly.io",
            "domainAvailable": "Likely Available",
            "rationale": "Stand-up plus friendly suffix.",
            "vibeScore": 8
        });
        let suggestion: NameSuggestion =
            serde_json::from_value(value).expect("suggestion should decode");
        assert_eq!(suggestion.domain_available, DomainAvailability::LikelyAvailable);
        assert_eq!(suggestion.vibe_band(), VibeBand::Sparkle);
    }

    #[test]
    fn numeric_string_scores_are_read_as_numbers() {
        let list: SuggestionList = serde_json::from_value(json!({
            "names": [{
                "name": "Barkery",
                "domain": "barkery.com",
                "domainAvailable": "Likely Taken",
                "rationale": "Pun.",
                "vibeScore": "9"
            }]
        }))
        .expect("list should decode");
        let suggestion = list.names.first().expect("one suggestion");
        assert_eq!(suggestion.vibe_score, 9.0);
        assert_eq!(suggestion.vibe_band(), VibeBand::Fire);
    }

    #[test]
    fn missing_attributes_decode_as_blanks() {
        let list: SuggestionList = serde_json::from_value(json!({
            "names": [
                {"name": "Standly", "domain": "standly.io", "vibeScore": 7},
                {"name": null, "vibeScore": "not a number"}
            ]
        }))
        .expect("list should decode");
        let [first, second] = list.names.as_slice() else {
            panic!("expected two suggestions, got {}", list.names.len());
        };
        assert_eq!(first.rationale, "");
        assert_eq!(first.domain_available.label(), "");
        assert_eq!(first.vibe_band(), VibeBand::Sparkle);
        assert_eq!(second.name, "");
        assert_eq!(second.domain, "");
        assert_eq!(second.vibe_score, 0.0);
        assert_eq!(second.vibe_band(), VibeBand::Meh);
    }

    #[test]
    fn keeps_unrecognised_availability_labels() {
        let availability: DomainAvailability =
            serde_json::from_value(json!("Probably Fine")).expect("label should decode");
        assert_eq!(
            availability,
            DomainAvailability::Unrecognised("Probably Fine".to_owned())
        );
        assert_eq!(availability.label(), "Probably Fine");
        assert_eq!(
            serde_json::to_value(&availability).expect("label should encode"),
            json!("Probably Fine")
        );
    }
}
