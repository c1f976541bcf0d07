use humanizer_testing::assertions::{
    assert_detection_score, assert_phase, assert_word_count_preserved,
};
use humanizer_testing::fixtures::{AI_PARAGRAPH, QUICK_BROWN_FOX, sample_words};
use humanizer_testing::TestWorld;

#[test]
fn test_level_zero_echoes_input() {
    let world = TestWorld::new().with_input("fox.txt", QUICK_BROWN_FOX);

    let result = world
        .run(&[
            "--format", "json", "humanize", "--input", "fox.txt", "--level", "0",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_phase(&json, "results").unwrap();
    assert_detection_score(&json, 90).unwrap();
    assert_eq!(json["view"], "results");
    assert_eq!(json["result"]["humanized_text"], QUICK_BROWN_FOX);
    assert_eq!(json["result"]["band"], "ai_like");
    assert_eq!(json["banner"]["word_count"], 5);
    assert_eq!(json["settings"]["intensity"], "subtle");
}

#[test]
fn test_plain_report_layout() {
    let world = TestWorld::new().with_input("fox.txt", QUICK_BROWN_FOX);

    let result = world
        .run(&["humanize", "--input", "fox.txt", "--level", "0", "--tier", "pro"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    insta::assert_snapshot!(result.stdout().trim_end(), @r"
Pro  5 words
Level 0 (Subtle)  Style: academic  Key points: preserved

Original
  The quick brown fox jumps

Humanized
  The quick brown fox jumps

Detection score: 90 (AI-like)
Human-likeness:  [##------------------] 10%
");
}

#[test]
fn test_reads_stdin() {
    let world = TestWorld::new();

    let result = world
        .run_with_stdin(
            &["--format", "json", "humanize", "--level", "100", "--seed", "7"],
            Some(AI_PARAGRAPH),
        )
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_detection_score(&json, 5).unwrap();
    assert_word_count_preserved(&json).unwrap();
}

#[test]
fn test_seed_is_reproducible() {
    let world = TestWorld::new().with_input("draft.txt", AI_PARAGRAPH);
    let args = [
        "--format", "json", "humanize", "--input", "draft.txt", "--level", "80", "--seed", "42",
    ];

    let first = world.run(&args).unwrap().json().unwrap();
    let second = world.run(&args).unwrap().json().unwrap();
    assert_eq!(
        first["result"]["humanized_text"],
        second["result"]["humanized_text"]
    );
}

#[test]
fn test_over_limit_on_free_tier_fails_with_upgrade_prompt() {
    let world = TestWorld::new().with_input("long.txt", &sample_words(501));

    let result = world.run(&["humanize", "--input", "long.txt"]).unwrap();
    assert!(!result.success());
    assert!(result.stdout().contains("501 / 500 words"));
    assert!(result.stdout().contains("Upgrade to Premium or Pro"));
    assert!(
        result
            .stderr()
            .contains("501 words exceeds the 500 word limit of the Free Tier plan")
    );
}

#[test]
fn test_over_limit_json_reports_blocked_phase() {
    let world = TestWorld::new().with_input("long.txt", &sample_words(501));

    let result = world
        .run(&["--format", "json", "humanize", "--input", "long.txt"])
        .unwrap();
    assert!(!result.success());

    let json = result.json().unwrap();
    assert_phase(&json, "blocked").unwrap();
    assert!(json["result"].is_null());
    assert_eq!(json["banner"]["blocked"], true);
    assert_eq!(json["banner"]["usage_ratio"], 100);
}

#[test]
fn test_exact_limit_is_processed() {
    let world = TestWorld::new().with_input("exact.txt", &sample_words(500));

    let result = world
        .run(&["--format", "json", "humanize", "--input", "exact.txt"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_phase(&result.json().unwrap(), "results").unwrap();
}

#[test]
fn test_paid_tier_is_never_blocked() {
    let world = TestWorld::new().with_input("long.txt", &sample_words(2_000));

    let result = world
        .run(&[
            "--format", "json", "humanize", "--input", "long.txt", "--tier", "premium",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert!(json["banner"]["word_limit"].is_null());
    assert_eq!(json["banner"]["show_upgrade"], false);
}

#[test]
fn test_out_of_range_level_rejected() {
    let world = TestWorld::new().with_input("fox.txt", QUICK_BROWN_FOX);

    for level in ["101", "-1"] {
        let result = world
            .run(&["humanize", "--input", "fox.txt", "--level", level])
            .unwrap();
        assert!(!result.success());
        assert!(
            result.stderr().contains("level must be in range 0-100"),
            "stderr: {}",
            result.stderr()
        );
    }
}

#[test]
fn test_blank_input_rejected() {
    let world = TestWorld::new().with_input("blank.txt", "   \n\t ");

    let result = world.run(&["humanize", "--input", "blank.txt"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("no text to humanize"));
}

#[test]
fn test_copy_prints_humanized_text_verbatim() {
    let world = TestWorld::new().with_input("fox.txt", QUICK_BROWN_FOX);

    let result = world
        .run(&["humanize", "--input", "fox.txt", "--level", "0", "--copy"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout(), QUICK_BROWN_FOX);
}

#[test]
fn test_config_defaults_apply() {
    let world = TestWorld::new()
        .with_input("fox.txt", QUICK_BROWN_FOX)
        .with_config(
            r#"
[subscription]
tier = "free"
word_limit = 3

[defaults]
level = 0
style = "casual"
"#,
        );

    let blocked = world
        .run(&["--format", "json", "humanize", "--input", "fox.txt"])
        .unwrap();
    assert!(!blocked.success());
    assert_phase(&blocked.json().unwrap(), "blocked").unwrap();

    let raised = world
        .run(&[
            "--format", "json", "humanize", "--input", "fox.txt", "--word-limit", "10",
        ])
        .unwrap();
    assert!(raised.success(), "stderr: {}", raised.stderr());

    let json = raised.json().unwrap();
    assert_detection_score(&json, 90).unwrap();
    assert_eq!(json["settings"]["style"], "casual");
}
