// ABOUTME: Library entry point for the AI coach reply parser
// ABOUTME: Recognizes workout plans and tips lists in free-form chat replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Reply Parser
//!
//! Heuristic extraction of structured content from AI coach chat replies.
//! Free-form text is inspected for two domain shapes — multi-day workout
//! plans and enumerated tip lists — and classified into a tagged
//! [`ParsedResponse`] the rendering layer can display as cards instead of a
//! plain bubble. Text matching neither shape falls back to the `Text`
//! variant; there is no failure mode.
//!
//! The heuristics are a fixed set of lexical patterns (English day names and
//! keywords only). There is no natural-language understanding: ambiguous or
//! malformed AI output is the expected common case and simply degrades to
//! plain text.
//!
//! ## Example
//!
//! ```rust
//! use coach_reply_parser::{parse_ai_response, ParsedResponse};
//!
//! let reply = "Here is your plan:\n\
//!              Day 1 - Upper Body:\n\
//!              1. Push-ups - 3 sets x 15 reps\n\
//!              Day 2 - Core:\n\
//!              1. Plank (30 seconds)\n";
//!
//! match parse_ai_response(reply) {
//!     ParsedResponse::WorkoutPlan { workout_plans, .. } => {
//!         assert_eq!(workout_plans.len(), 2);
//!         assert_eq!(workout_plans[0].day, "Day 1");
//!         assert_eq!(workout_plans[0].exercises[0].name, "Push-ups");
//!     }
//!     _ => unreachable!("two day headers with exercises qualify as a plan"),
//! }
//! ```

/// Classification entry points and intro-text helpers
pub mod classifier;

/// Data model for parsed replies
pub mod models;

/// Shared pattern vocabulary and compiled regexes
pub mod patterns;

/// Tips-list extractor
pub mod tips;

/// Workout-plan and exercise extractors
pub mod workout;

pub use classifier::{
    has_structured_content, intro_text, parse_ai_response, tips_intro, workout_intro,
};
pub use models::{DayPlan, Exercise, ParsedResponse, TipsList};
pub use tips::parse_tips_list;
pub use workout::{parse_exercise_details, parse_exercises, parse_workout_plan};
