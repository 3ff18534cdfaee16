// SPDX-License-Identifier: PMPL-1.0-or-later

//! Side effects the site asks of whatever is displaying it.
//!
//! A browser host would scroll the window, set `<html lang dir>` and push the
//! location hash. The terminal browser and the CLI use [`NullHost`]; tests use
//! [`RecordingHost`] to observe what happened.

use crate::i18n::{Direction, Lang};
use crate::router::{Animation, Transition};

pub trait Host {
    fn scroll_to_top(&mut self);
    fn set_document_language(&mut self, lang: Lang, dir: Direction);
    fn set_location(&mut self, hash: &str);
    fn play_transition(&mut self, transition: &Transition);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl Host for NullHost {
    fn scroll_to_top(&mut self) {}
    fn set_document_language(&mut self, _lang: Lang, _dir: Direction) {}
    fn set_location(&mut self, _hash: &str) {}
    fn play_transition(&mut self, _transition: &Transition) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEffect {
    ScrollToTop,
    DocumentLanguage { lang: Lang, dir: Direction },
    Location(String),
    Animation(Animation),
}

/// Host that records every effect in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub effects: Vec<HostEffect>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent document direction, if one was set.
    pub fn document_direction(&self) -> Option<Direction> {
        self.effects.iter().rev().find_map(|effect| match effect {
            HostEffect::DocumentLanguage { dir, .. } => Some(*dir),
            _ => None,
        })
    }

    pub fn location(&self) -> Option<&str> {
        self.effects.iter().rev().find_map(|effect| match effect {
            HostEffect::Location(hash) => Some(hash.as_str()),
            _ => None,
        })
    }

    pub fn count(&self, wanted: &HostEffect) -> usize {
        self.effects.iter().filter(|effect| *effect == wanted).count()
    }
}

impl Host for RecordingHost {
    fn scroll_to_top(&mut self) {
        self.effects.push(HostEffect::ScrollToTop);
    }

    fn set_document_language(&mut self, lang: Lang, dir: Direction) {
        self.effects.push(HostEffect::DocumentLanguage { lang, dir });
    }

    fn set_location(&mut self, hash: &str) {
        self.effects.push(HostEffect::Location(hash.to_string()));
    }

    fn play_transition(&mut self, transition: &Transition) {
        self.effects.push(HostEffect::Animation(transition.animation));
    }
}
