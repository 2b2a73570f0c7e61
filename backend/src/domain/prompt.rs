//! Fixed naming instruction sent to the text-generation provider.
//!
//! The template is deliberately not configurable: the completion parser and
//! the client both rely on the attribute names it asks for.

use super::BusinessDescription;

/// Number of names the provider is asked for.
pub const REQUESTED_NAME_COUNT: usize = 10;

/// Render the naming instruction for `description`.
///
/// The description is embedded verbatim between double quotes.
///
/// # Examples
/// ```
/// use nameforge::domain::{render_naming_prompt, BusinessDescription};
///
/// let description = BusinessDescription::new("A bakery for dogs").expect("valid");
/// let prompt = render_naming_prompt(&description);
/// assert!(prompt.contains("Business description: \"A bakery for dogs\""));
/// ```
#[must_use]
pub fn render_naming_prompt(description: &BusinessDescription) -> String {
    format!(
        r#"You are a creative business naming expert. Given a business/project description, generate exactly {count} unique, creative name suggestions.

For each name, provide:
- name: The business/project name (short, memorable, brandable)
- domain: A suggested .com or .io domain
- domainAvailable: One of "Likely Available", "Likely Taken", or "Check Required" (make educated guesses based on how common/generic the name is)
- rationale: 1-2 sentences explaining the name's meaning, wordplay, or why it works
- vibeScore: 1-10 rating of how catchy/memorable/brandable the name is

Business description: "{description}"

Respond ONLY with valid JSON, no markdown. Format:
{{"names": [{{"name": "...", "domain": "...", "domainAvailable": "...", "rationale": "...", "vibeScore": 8}}, ...]}}

Be creative! Mix wordplay, portmanteaus, metaphors, and invented words. Avoid generic names."#,
        count = REQUESTED_NAME_COUNT,
        description = description.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_for(raw: &str) -> String {
        let description = BusinessDescription::new(raw).expect("valid description");
        render_naming_prompt(&description)
    }

    #[test]
    fn asks_for_exactly_ten_names() {
        let prompt = prompt_for("A bakery for dogs");
        assert!(prompt.contains("generate exactly 10 unique, creative name suggestions"));
    }

    #[test]
    fn names_every_expected_attribute() {
        let prompt = prompt_for("A bakery for dogs");
        for attribute in ["name:", "domain:", "domainAvailable:", "rationale:", "vibeScore:"] {
            assert!(prompt.contains(attribute), "prompt should mention {attribute}");
        }
    }

    #[test]
    fn shows_a_strict_json_example() {
        let prompt = prompt_for("A bakery for dogs");
        assert!(prompt.contains(
            r#"{"names": [{"name": "...", "domain": "...", "domainAvailable": "...", "rationale": "...", "vibeScore": 8}, ...]}"#
        ));
    }

    #[test]
    fn is_deterministic_and_embeds_description_verbatim() {
        let raw = r#"Tea shop with "quotes" and {braces}"#;
        assert_eq!(prompt_for(raw), prompt_for(raw));
        assert!(prompt_for(raw).contains(&format!("Business description: \"{raw}\"")));
    }
}
