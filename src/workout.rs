// ABOUTME: Workout-plan extractor for day-sectioned coach replies
// ABOUTME: Splits text on day headers and extracts per-day exercise records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout-Plan Extraction
//!
//! Detects day-based workout content: a reply qualifies only when at least
//! two day-section headers ("Day 1:", "Monday - Cardio", ...) are present,
//! so an incidental single day-mention is not promoted to a plan. Each
//! header's body is scanned for exercise list items and an optional trailing
//! note; days without any extracted exercise are dropped.

use regex::Regex;
use tracing::trace;

use crate::models::{DayPlan, Exercise};
use crate::patterns;

/// Extract a multi-day workout plan from reply text
///
/// Returns `None` when fewer than two day headers are found, or when no day
/// ends up with at least one exercise. Plans preserve header order.
#[must_use]
pub fn parse_workout_plan(text: &str) -> Option<Vec<DayPlan>> {
    let header_re = patterns::day_header()?;

    let headers: Vec<regex::Captures<'_>> = header_re.captures_iter(text).collect();
    if headers.len() < 2 {
        return None; // Not a workout plan
    }
    trace!("found {} day headers", headers.len());

    let mut plans = Vec::new();

    for (i, caps) in headers.iter().enumerate() {
        let Some(header) = caps.get(0) else { continue };

        // Body runs from the end of this header to the start of the next
        let body_end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        let body = &text[header.end()..body_end];

        let day = caps.get(1).map_or_else(
            || format!("Day {}", i + 1),
            |m| m.as_str().trim().to_owned(),
        );
        let focus = caps
            .get(2)
            .map(|m| m.as_str().trim().to_owned())
            .filter(|f| !f.is_empty());

        let exercises = parse_exercises(body);

        // Trailing remark for the day, usually at the end of the section
        let notes = patterns::day_notes()
            .and_then(|re| re.captures(body))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_owned());

        if !exercises.is_empty() {
            plans.push(DayPlan {
                day,
                focus,
                exercises,
                notes,
            });
        }
    }

    if plans.is_empty() {
        None
    } else {
        Some(plans)
    }
}

/// Extract exercise records from a day-section body
///
/// Only lines starting with a list marker (numbered, hyphen, bullet,
/// asterisk) are candidates; prose and blank separators are skipped.
#[must_use]
pub fn parse_exercises(text: &str) -> Vec<Exercise> {
    let Some(item_re) = patterns::list_item() else {
        return Vec::new();
    };

    let mut exercises = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.chars().count() < 3 {
            continue;
        }

        let Some(content) = item_re.captures(trimmed).and_then(|c| c.get(1)) else {
            continue;
        };

        if let Some(exercise) = parse_exercise_details(content.as_str().trim()) {
            exercises.push(exercise);
        }
    }

    exercises
}

/// Extract the fields of a single exercise from a list-item remainder
///
/// Field scans are independent lexical matches over the same content and
/// are not mutually exclusive: "3x15 reps" captures "3" as sets via the "x"
/// rule and "15" as reps, and "(30 seconds)" populates both duration and
/// notes. Returns `None` when the name is shorter than 2 characters.
#[must_use]
pub fn parse_exercise_details(content: &str) -> Option<Exercise> {
    let name = exercise_name(content)?;

    Some(Exercise {
        name,
        sets: first_capture(patterns::sets(), content),
        reps: first_capture(patterns::reps(), content),
        duration: first_capture(patterns::duration(), content),
        notes: exercise_note(content),
    })
}

/// Leading name run of the content
///
/// Stops at the first ':' or '(' anywhere, but at a '-' only when it is
/// preceded by whitespace, so hyphenated names like "Push-ups" survive
/// while " - 3 sets" separators still split.
fn exercise_name(content: &str) -> Option<String> {
    let mut end = content.len();
    let mut prev_was_space = false;

    for (idx, ch) in content.char_indices() {
        match ch {
            ':' | '(' => {
                end = idx;
                break;
            }
            '-' if prev_was_space => {
                end = idx;
                break;
            }
            _ => {}
        }
        prev_was_space = ch.is_whitespace();
    }

    let name = content[..end].trim();
    if name.chars().count() < 2 {
        return None;
    }
    Some(name.to_owned())
}

/// First capture group of a pattern over the content, trimmed
fn first_capture(re: Option<&Regex>, content: &str) -> Option<String> {
    re.and_then(|re| re.captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_owned())
}

/// Exercise remark: parenthesized text, else text after a "note:" marker
fn exercise_note(content: &str) -> Option<String> {
    let caps = patterns::exercise_notes()?.captures(content)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().trim().to_owned())
}
