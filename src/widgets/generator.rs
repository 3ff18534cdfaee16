// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generative text collaborator.
//!
//! Widgets describe what they want as a [`Prompt`]; a [`TextGenerator`] turns
//! it into text or returns an error. The vendor integration lives outside this
//! crate; [`ExtractiveGenerator`] is the offline stand-in used by the CLI.

use crate::i18n::{language_name, Lang};
use anyhow::{bail, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Plain prose.
    Text,
    /// A JSON array of short strings.
    JsonList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub instruction: String,
    pub source: String,
    pub lang: Lang,
    pub format: ResponseFormat,
    /// Sentence budget for text, item budget for lists.
    pub limit: usize,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = language_name(self.lang.code()).unwrap_or("English");
        writeln!(f, "{}", self.instruction)?;
        match self.format {
            ResponseFormat::Text => writeln!(
                f,
                "Answer in {} with at most {} sentences.",
                language, self.limit
            )?,
            ResponseFormat::JsonList => writeln!(
                f,
                "Answer in {} as a JSON array of at most {} short strings and nothing else.",
                language, self.limit
            )?,
        }
        writeln!(f)?;
        write!(f, "{}", self.source)
    }
}

pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &Prompt) -> Result<String>;

    /// Short name for logs and diagnostics.
    fn name(&self) -> &str {
        "generator"
    }
}

impl<F> TextGenerator for F
where
    F: Fn(&Prompt) -> Result<String> + Send + Sync,
{
    fn generate(&self, prompt: &Prompt) -> Result<String> {
        self(prompt)
    }
}

/// Deterministic offline generator: picks the leading sentences of the
/// source text. Ignores the requested language.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractiveGenerator;

impl TextGenerator for ExtractiveGenerator {
    fn generate(&self, prompt: &Prompt) -> Result<String> {
        let sentences = split_sentences(&prompt.source);
        if sentences.is_empty() {
            bail!("nothing to summarize");
        }
        let picked: Vec<&str> = sentences.into_iter().take(prompt.limit.max(1)).collect();
        match prompt.format {
            ResponseFormat::Text => Ok(picked.join(" ")),
            ResponseFormat::JsonList => {
                let items: Vec<String> = picked
                    .iter()
                    .map(|sentence| sentence.trim_end_matches(['.', '!', '?']).to_string())
                    .collect();
                Ok(serde_json::to_string(&items)?)
            }
        }
    }

    fn name(&self) -> &str {
        "extractive"
    }
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    for (idx, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?' | '؟') {
            let end = idx + ch.len_utf8();
            let at_boundary = bytes.get(end).map_or(true, |b| b.is_ascii_whitespace());
            if at_boundary {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end;
            }
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}
