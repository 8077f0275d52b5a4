// ABOUTME: Tips-list extractor for enumerated advice in coach replies
// ABOUTME: Finds an optional title line and bulleted or numbered tip lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tips-List Extraction
//!
//! Recognizes enumerated advice lists ("Top 5 tips:" followed by bullets).
//! At least two qualifying tip lines are required, mirroring the workout
//! plan's header threshold: a single stray bullet should not be promoted to
//! a structured tips display.

use crate::models::TipsList;
use crate::patterns;

/// Minimum remainder length for a line to count as a tip
const MIN_TIP_LEN: usize = 6;

/// Extract an enumerated tips list from reply text
///
/// The title is the first line matching an optional "top N" prefix followed
/// by "tip"/"tips"; it is absent when no such line exists. Returns `None`
/// when fewer than two qualifying tip lines are found.
#[must_use]
pub fn parse_tips_list(text: &str) -> Option<TipsList> {
    let item_re = patterns::list_item()?;

    let title = patterns::tips_title()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_owned());

    let mut tips = Vec::new();

    for line in text.lines() {
        let Some(remainder) = item_re.captures(line.trim()).and_then(|c| c.get(1)) else {
            continue;
        };

        let tip = remainder.as_str().trim();
        if tip.chars().count() >= MIN_TIP_LEN {
            tips.push(tip.to_owned());
        }
    }

    if tips.len() >= 2 {
        Some(TipsList { title, tips })
    } else {
        None
    }
}
