//! Wire DTOs for the hosted provider APIs.
//!
//! Only the fields the adapters read are modelled; everything else in the
//! provider payloads is ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

// Gemini `generateContent`.

#[derive(Debug, Serialize)]
pub(super) struct GeminiRequestDto<'a> {
    pub(super) contents: [GeminiContentDto<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(super) struct GeminiContentDto<'a> {
    pub(super) role: &'static str,
    pub(super) parts: [GeminiRequestPartDto<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(super) struct GeminiRequestPartDto<'a> {
    pub(super) text: &'a str,
}

impl<'a> GeminiRequestDto<'a> {
    pub(super) fn user_prompt(prompt: &'a str) -> Self {
        Self {
            contents: [GeminiContentDto {
                role: "user",
                parts: [GeminiRequestPartDto { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GeminiResponseDto {
    #[serde(default)]
    pub(super) candidates: Vec<GeminiCandidateDto>,
    pub(super) prompt_feedback: Option<GeminiPromptFeedbackDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GeminiCandidateDto {
    pub(super) content: Option<GeminiCandidateContentDto>,
    pub(super) finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeminiCandidateContentDto {
    #[serde(default)]
    pub(super) parts: Vec<GeminiResponsePartDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeminiResponsePartDto {
    pub(super) text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GeminiPromptFeedbackDto {
    pub(super) block_reason: Option<String>,
}

impl GeminiResponseDto {
    /// Concatenated text of the first candidate's parts, or a reason for its
    /// absence.
    ///
    /// A candidate without text yields an empty completion; only a blocked
    /// prompt or a reply without candidates is an error.
    pub(super) fn into_completion(self) -> Result<String, String> {
        let block_reason = self
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason);
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match block_reason {
                Some(reason) => format!("prompt blocked: {reason}"),
                None => "response has no candidates".to_owned(),
            });
        };

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.is_empty() {
            let finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
            debug!(finish_reason, "first Gemini candidate has no text");
        }
        Ok(text)
    }
}

// OpenAI-compatible `chat/completions`.

#[derive(Debug, Serialize)]
pub(super) struct ChatCompletionRequestDto<'a> {
    pub(super) model: &'a str,
    pub(super) messages: [ChatMessageDto<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessageDto<'a> {
    pub(super) role: &'static str,
    pub(super) content: &'a str,
}

impl<'a> ChatCompletionRequestDto<'a> {
    pub(super) fn user_prompt(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: [ChatMessageDto {
                role: "user",
                content: prompt,
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatCompletionResponseDto {
    #[serde(default)]
    pub(super) choices: Vec<ChatChoiceDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatChoiceDto {
    pub(super) message: Option<ChatChoiceMessageDto>,
    pub(super) finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatChoiceMessageDto {
    pub(super) content: Option<String>,
}

impl ChatCompletionResponseDto {
    /// Content of the first choice, or a reason for its absence.
    ///
    /// A choice with null or empty content yields an empty completion.
    pub(super) fn into_completion(self) -> Result<String, String> {
        let Some(choice) = self.choices.into_iter().next() else {
            return Err("response has no choices".to_owned());
        };
        let content = choice
            .message
            .and_then(|message| message.content)
            .unwrap_or_default();
        if content.is_empty() {
            let finish_reason = choice.finish_reason.as_deref().unwrap_or("unknown");
            debug!(finish_reason, "first chat choice has no content");
        }
        Ok(content)
    }
}
