//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod name_suggestion_command;
mod text_generation_provider;

#[cfg(test)]
pub use name_suggestion_command::MockNameSuggestionCommand;
pub use name_suggestion_command::{FixtureNameSuggestionCommand, NameSuggestionCommand};
#[cfg(test)]
pub use text_generation_provider::MockTextGenerationProvider;
pub use text_generation_provider::{
    FixtureTextGenerationProvider, TextGenerationError, TextGenerationProvider,
};
