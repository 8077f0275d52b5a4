// ABOUTME: Classification entry points for coach replies
// ABOUTME: Fixed-priority heuristics plus intro-text helpers for renderers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reply Classification
//!
//! [`parse_ai_response`] runs the extractors in fixed priority order —
//! workout plan first, then tips list — and the first success wins, so text
//! matching both heuristics is classified as a workout plan. Every input,
//! including the empty string, yields a valid result; there are no error
//! conditions.
//!
//! The intro helpers expose the text preceding the first structural marker
//! so renderers can show it as a plain bubble above the cards without
//! re-deriving the patterns themselves.

use tracing::debug;

use crate::models::ParsedResponse;
use crate::patterns;
use crate::tips::parse_tips_list;
use crate::workout::parse_workout_plan;

/// Classify one coach reply into a tagged result
///
/// Total function: attempts workout-plan extraction, then tips-list
/// extraction, and falls back to the `Text` variant. The returned value
/// always carries the untouched input text.
#[must_use]
pub fn parse_ai_response(text: &str) -> ParsedResponse {
    if let Some(workout_plans) = parse_workout_plan(text) {
        let days = workout_plans.len();
        debug!("classified reply as workout plan with {days} day(s)");
        return ParsedResponse::WorkoutPlan {
            text: text.to_owned(),
            workout_plans,
        };
    }

    if let Some(tips_list) = parse_tips_list(text) {
        let count = tips_list.tips.len();
        debug!("classified reply as tips list with {count} tip(s)");
        return ParsedResponse::TipsList {
            text: text.to_owned(),
            tips_list,
        };
    }

    ParsedResponse::Text {
        text: text.to_owned(),
    }
}

/// True when the reply contains recognizable structured content
#[must_use]
pub fn has_structured_content(text: &str) -> bool {
    parse_ai_response(text).is_structured()
}

/// Text preceding the first day label, trimmed
///
/// `None` when no day label occurs or nothing but whitespace precedes it.
#[must_use]
pub fn workout_intro(text: &str) -> Option<&str> {
    let first = patterns::day_label()?.find(text)?;
    let intro = text[..first.start()].trim();
    if intro.is_empty() {
        None
    } else {
        Some(intro)
    }
}

/// Text preceding the first tips-title occurrence, trimmed
///
/// `None` when no tips title occurs or nothing but whitespace precedes it.
#[must_use]
pub fn tips_intro(text: &str) -> Option<&str> {
    let first = patterns::tips_label()?.find(text)?;
    let intro = text[..first.start()].trim();
    if intro.is_empty() {
        None
    } else {
        Some(intro)
    }
}

/// Intro text for a classified reply, dispatched on its variant
#[must_use]
pub fn intro_text(parsed: &ParsedResponse) -> Option<&str> {
    match parsed {
        ParsedResponse::Text { .. } => None,
        ParsedResponse::WorkoutPlan { text, .. } => workout_intro(text),
        ParsedResponse::TipsList { text, .. } => tips_intro(text),
    }
}
