//! Terminal rendering for the Client View.
//!
//! Colour follows `colored`'s global switch, so `NO_COLOR` and
//! `CLICOLOR_FORCE` are honoured automatically.

use colored::{Color, Colorize};

use super::{ClientState, ClientView};
use crate::domain::{DomainAvailability, NameSuggestion, VibeBand};

/// Colour for a vibe band.
#[must_use]
pub fn band_color(band: VibeBand) -> Color {
    match band {
        VibeBand::Fire => Color::Green,
        VibeBand::Sparkle => Color::Cyan,
        VibeBand::ThumbsUp => Color::Yellow,
        VibeBand::Meh => Color::Red,
    }
}

/// Colour for an availability label.
#[must_use]
pub fn availability_color(availability: &DomainAvailability) -> Color {
    match availability {
        DomainAvailability::LikelyAvailable => Color::Green,
        DomainAvailability::LikelyTaken => Color::Red,
        _ => Color::Yellow,
    }
}

/// Heading shown above a result list.
#[must_use]
pub fn heading(count: usize) -> String {
    format!("🎯 {count} Names Forged")
}

/// Format one score the way it is displayed, dropping a zero fraction.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score}")
    }
}

/// Render a single suggestion as a three-line block.
#[must_use]
pub fn render_suggestion(suggestion: &NameSuggestion) -> String {
    let band = suggestion.vibe_band();
    let score = format!("{} {}/10", band.emoji(), format_score(suggestion.vibe_score));
    let availability = suggestion.domain_available.label();
    format!(
        "{name}  {score}\n  {domain}  {availability}\n  {rationale}",
        name = suggestion.name.bold(),
        score = score.color(band_color(band)),
        domain = suggestion.domain.underline(),
        availability = availability.color(availability_color(&suggestion.domain_available)),
        rationale = suggestion.rationale.dimmed(),
    )
}

/// Render the whole view for the current state.
///
/// An empty successful result renders nothing, like the idle view.
#[must_use]
pub fn render_view(view: &ClientView) -> String {
    match view.state() {
        ClientState::Idle => String::new(),
        ClientState::Loading => "Forging names...".dimmed().to_string(),
        ClientState::Error(message) => format!("{}: {message}", "error".red().bold()),
        ClientState::Success(list) if list.names.is_empty() => String::new(),
        ClientState::Success(list) => {
            let mut blocks = vec![heading(list.names.len()).cyan().bold().to_string()];
            blocks.extend(list.names.iter().map(render_suggestion));
            blocks.join("\n\n")
        }
    }
}

#[cfg(test)]
mod tests {
    //! Rendering coverage with colour disabled.

    use super::*;
    use crate::client::GatewayError;
    use crate::domain::SuggestionList;
    use rstest::rstest;

    fn plain() {
        colored::control::set_override(false);
    }

    fn suggestion(vibe_score: f64, availability: &str) -> NameSuggestion {
        NameSuggestion {
            name: "Barkery".to_owned(),
            domain: "barkery.com".to_owned(),
            domain_available: DomainAvailability::from(availability.to_owned()),
            rationale: "Pun on bark and bakery.".to_owned(),
            vibe_score,
        }
    }

    #[rstest]
    #[case::fire(10.0, Color::Green)]
    #[case::fire_floor(9.0, Color::Green)]
    #[case::sparkle(7.0, Color::Cyan)]
    #[case::thumbs_up(5.0, Color::Yellow)]
    #[case::meh(4.0, Color::Red)]
    fn vibe_colours_follow_thresholds(#[case] score: f64, #[case] expected: Color) {
        assert_eq!(band_color(VibeBand::from_score(score)), expected);
    }

    #[rstest]
    #[case::available("Likely Available", Color::Green)]
    #[case::taken("Likely Taken", Color::Red)]
    #[case::check("Check Required", Color::Yellow)]
    #[case::unexpected("Maybe", Color::Yellow)]
    fn availability_colours(#[case] label: &str, #[case] expected: Color) {
        let availability = DomainAvailability::from(label.to_owned());
        assert_eq!(availability_color(&availability), expected);
    }

    #[test]
    fn suggestion_block_shows_every_attribute() {
        plain();
        let rendered = render_suggestion(&suggestion(9.0, "Likely Taken"));
        assert_eq!(
            rendered,
            "Barkery  🔥 9/10\n  barkery.com  Likely Taken\n  Pun on bark and bakery."
        );
    }

    #[test]
    fn fractional_scores_keep_their_fraction() {
        plain();
        let rendered = render_suggestion(&suggestion(6.5, "Check Required"));
        assert!(rendered.starts_with("Barkery  👍 6.5/10"), "got {rendered}");
    }

    #[test]
    fn success_view_starts_with_heading() {
        plain();
        let mut view = ClientView::new();
        view.set_description("A bakery for dogs");
        view.begin_submit().expect("submits");
        view.complete(Ok(SuggestionList {
            names: vec![suggestion(9.0, "Likely Available"), suggestion(3.0, "Likely Taken")],
        }));

        let rendered = render_view(&view);
        assert!(rendered.starts_with("🎯 2 Names Forged\n\n"), "got {rendered}");
        assert!(rendered.contains("😐 3/10"));
    }

    #[test]
    fn empty_success_renders_nothing() {
        plain();
        let mut view = ClientView::new();
        view.set_description("A bakery for dogs");
        view.begin_submit().expect("submits");
        view.complete(Ok(SuggestionList { names: Vec::new() }));

        assert!(view.results().is_empty());
        assert_eq!(render_view(&view), "");
    }

    #[test]
    fn error_view_shows_message() {
        plain();
        let mut view = ClientView::new();
        view.set_description("x");
        view.begin_submit().expect("submits");
        view.complete(Err(GatewayError::Transport("refused".to_owned())));
        assert_eq!(render_view(&view), "error: Something went wrong");
    }
}
