// ABOUTME: Unit tests for the tips-list extractor
// ABOUTME: Covers title detection, tip qualification, and the validity threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use coach_reply_parser::parse_tips_list;

#[test]
fn test_parse_tips_list_titled() {
    let reply = "Top 3 tips:\n\
                 1. Sleep well\n\
                 2. Hydrate often\n\
                 3. Stretch daily";

    let tips = parse_tips_list(reply).unwrap();
    assert_eq!(tips.title.as_deref(), Some("Top 3 tips"));
    assert_eq!(tips.tips, vec!["Sleep well", "Hydrate often", "Stretch daily"]);
}

#[test]
fn test_parse_tips_list_title_with_suffix() {
    let reply = "Tips for faster recovery:\n\
                 - Prioritize sleep every night\n\
                 - Eat protein after training\n";

    let tips = parse_tips_list(reply).unwrap();
    assert_eq!(tips.title.as_deref(), Some("Tips for faster recovery"));
    assert_eq!(tips.tips.len(), 2);
}

#[test]
fn test_parse_tips_list_without_title() {
    let reply = "Some advice:\n\
                 - Drink more water\n\
                 - Sleep 8 hours every night\n";

    let tips = parse_tips_list(reply).unwrap();
    assert_eq!(tips.title, None);
    assert_eq!(tips.tips.len(), 2);
}

#[test]
fn test_parse_tips_list_bullet_glyphs() {
    let reply = "• Warm up before lifting\n\
                 * Cool down after lifting\n";

    let tips = parse_tips_list(reply).unwrap();
    assert_eq!(
        tips.tips,
        vec!["Warm up before lifting", "Cool down after lifting"]
    );
}

#[test]
fn test_parse_tips_list_single_tip_rejected() {
    // One stray bullet is not promoted to a structured tips display
    let reply = "Tips:\n- Drink more water\n";
    assert!(parse_tips_list(reply).is_none());
}

#[test]
fn test_parse_tips_list_short_tips_filtered() {
    // Five characters or fewer does not qualify as a tip
    let reply = "Tips:\n- water\n- sleep\n";
    assert!(parse_tips_list(reply).is_none());
}

#[test]
fn test_parse_tips_list_mixed_lengths() {
    let reply = "- ok\n\
                 - Stretch every morning\n\
                 - Walk after meals\n";

    let tips = parse_tips_list(reply).unwrap();
    assert_eq!(tips.tips, vec!["Stretch every morning", "Walk after meals"]);
}

#[test]
fn test_parse_tips_list_plain_prose_rejected() {
    assert!(parse_tips_list("I went for a run today and it was great").is_none());
}

#[test]
fn test_parse_tips_list_empty_input() {
    assert!(parse_tips_list("").is_none());
}
