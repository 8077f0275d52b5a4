// ABOUTME: Shared pattern vocabulary for reply heuristics
// ABOUTME: Day names, list markers, note keywords, and compiled regexes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pattern Vocabulary
//!
//! Single source for every lexical pattern the extractors share: English
//! weekday names, list-marker glyphs, and note keywords, plus the regexes
//! built from them. Patterns compile once into `LazyLock` statics; a
//! compilation failure (never expected for these static patterns) yields
//! `None` and the extractors degrade to "no structured content" instead of
//! panicking.
//!
//! The `regex` crate's linear-time engine rules out catastrophic
//! backtracking on pathological input by construction.

use regex::Regex;
use std::sync::LazyLock;

/// English weekday names accepted as day-section headers
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Keywords that introduce a per-day trailing remark
pub const NOTE_KEYWORDS: [&str; 3] = ["note", "tip", "remember"];

/// Glyphs accepted as unnumbered list markers
const BULLET_GLYPHS: &str = "-•*";

/// Alternation of all day labels: `day\s+\d+` plus each weekday
fn day_alternation() -> String {
    format!(r"day\s+\d+|{}", WEEKDAYS.join("|"))
}

/// Day-section header anchored at line start
///
/// Matches: "Day 1:", "## Day 2 - Upper Body:", "Monday - Cardio"
/// Group 1 is the day token, group 2 the optional focus text.
static DAY_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let days = day_alternation();
    Regex::new(&format!(
        r"(?im)^(?:##\s*)?({days})(?:\s*-\s*([^\n:]+))?[:\n]"
    ))
    .ok()
});

/// Unanchored day label, used to locate intro text before the first day
static DAY_LABEL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let days = day_alternation();
    Regex::new(&format!(r"(?i)(?:{days})")).ok()
});

/// List-item line: "1. text", "- text", "• text", "* text"
/// Group 1 is the remainder after the marker.
static LIST_ITEM: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!(r"^(?:\d+\.|[{BULLET_GLYPHS}])\s*(.+)$")).ok());

/// Sets count: integer followed by "set"/"sets" or "x"
/// Matches: "3 sets", "4 set", "3x15" (captures "3")
static SETS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:sets?|x)").ok());

/// Reps count: integer followed by "rep"/"reps", optionally after an "x"
/// Matches: "15 reps", "x 12 reps" (captures the integer)
static REPS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(?:x\s*)?(\d+)\s*reps?").ok());

/// Duration phrase: integer plus unit word
/// Matches: "30 seconds", "5 minutes", "10 min"
static DURATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+\s*(?:seconds?|minutes?|mins?))").ok());

/// Exercise notes: first parenthesized text (group 1) or text after a
/// "note:" marker (group 2)
static EXERCISE_NOTES: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\(([^)]+)\)|note:\s*(.+)").ok());

/// Per-day trailing remark: note keyword, a colon or whitespace, then the
/// rest of the line (group 1)
static DAY_NOTES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let keywords = NOTE_KEYWORDS.join("|");
    Regex::new(&format!(r"(?i)(?:{keywords})[:\s]+([^\n]+)")).ok()
});

/// Tips-list title anchored at line start
///
/// Matches: "Top 5 tips:", "Tips for recovery:" (group 1 is the title)
static TIPS_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?im)^((?:top\s+\d+\s+)?tips?[^\n:]*)[:\n]").ok());

/// Unanchored tips title, used to locate intro text before the list
static TIPS_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(?:top\s+\d+\s+)?tips?[^\n:]*[:\n]").ok());

/// Day-section header pattern
#[must_use]
pub fn day_header() -> Option<&'static Regex> {
    DAY_HEADER.as_ref()
}

/// Unanchored day label pattern
#[must_use]
pub fn day_label() -> Option<&'static Regex> {
    DAY_LABEL.as_ref()
}

/// List-item line pattern
#[must_use]
pub fn list_item() -> Option<&'static Regex> {
    LIST_ITEM.as_ref()
}

/// Sets-count pattern
#[must_use]
pub fn sets() -> Option<&'static Regex> {
    SETS.as_ref()
}

/// Reps-count pattern
#[must_use]
pub fn reps() -> Option<&'static Regex> {
    REPS.as_ref()
}

/// Duration-phrase pattern
#[must_use]
pub fn duration() -> Option<&'static Regex> {
    DURATION.as_ref()
}

/// Exercise-notes pattern
#[must_use]
pub fn exercise_notes() -> Option<&'static Regex> {
    EXERCISE_NOTES.as_ref()
}

/// Per-day notes pattern
#[must_use]
pub fn day_notes() -> Option<&'static Regex> {
    DAY_NOTES.as_ref()
}

/// Tips-title pattern
#[must_use]
pub fn tips_title() -> Option<&'static Regex> {
    TIPS_TITLE.as_ref()
}

/// Unanchored tips label pattern
#[must_use]
pub fn tips_label() -> Option<&'static Regex> {
    TIPS_LABEL.as_ref()
}
