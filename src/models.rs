// ABOUTME: Data model for structured content extracted from coach replies
// ABOUTME: Exercise, day plan, tips list, and the tagged classification result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A single exercise extracted from one list line
///
/// Every field besides `name` is independently optional: absence means the
/// reply did not mention it, not zero. Numeric fields stay strings because
/// they are display values, captured as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name (trimmed, at least 2 characters)
    pub name: String,

    /// Number of sets, e.g. "3" from "3 sets" or "3x15"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,

    /// Number of reps, e.g. "15" from "x 15 reps"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,

    /// Duration phrase with unit, e.g. "30 seconds"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Free-form remark, from parentheses or a "note:" marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One day of a workout plan
///
/// Only emitted when at least one exercise was extracted for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day label, e.g. "Day 1" or a weekday name
    pub day: String,

    /// Short focus label from the header, e.g. "Upper Body"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,

    /// Exercises in order of appearance in the reply
    pub exercises: Vec<Exercise>,

    /// Trailing remark for the day, from a note/tip/remember line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An enumerated list of tips with an optional heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipsList {
    /// Heading line, e.g. "Top 5 tips"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Tip lines in order of appearance (at least 2 for validity)
    pub tips: Vec<String>,
}

/// Classification result for one coach reply
///
/// Internally tagged so the serialized form matches the mobile client's
/// `{ type, text, workoutPlans?, tipsList? }` contract. The raw input text
/// is always carried, letting the renderer fall back to it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParsedResponse {
    /// No structured content recognized; render the raw text
    Text {
        /// The original reply text
        text: String,
    },
    /// A multi-day workout plan was recognized
    WorkoutPlan {
        /// The original reply text
        text: String,
        /// One entry per detected day, in header order
        #[serde(rename = "workoutPlans")]
        workout_plans: Vec<DayPlan>,
    },
    /// An enumerated tips list was recognized
    TipsList {
        /// The original reply text
        text: String,
        /// Extracted title and tip lines
        #[serde(rename = "tipsList")]
        tips_list: TipsList,
    },
}

impl ParsedResponse {
    /// The original reply text, regardless of variant
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text }
            | Self::WorkoutPlan { text, .. }
            | Self::TipsList { text, .. } => text,
        }
    }

    /// True when the reply carries a structured payload
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        !matches!(self, Self::Text { .. })
    }

    /// The workout plans, when classified as a workout plan
    #[must_use]
    pub fn workout_plans(&self) -> Option<&[DayPlan]> {
        match self {
            Self::WorkoutPlan { workout_plans, .. } => Some(workout_plans),
            _ => None,
        }
    }

    /// The tips list, when classified as a tips list
    #[must_use]
    pub const fn tips_list(&self) -> Option<&TipsList> {
        match self {
            Self::TipsList { tips_list, .. } => Some(tips_list),
            _ => None,
        }
    }
}
