use humanizer_types::*;

#[test]
fn test_word_count() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("   \n\t "), 0);
    assert_eq!(word_count("The quick brown fox jumps"), 5);
    assert_eq!(word_count("  leading and trailing  "), 3);
    assert_eq!(word_count("line\nbreaks\tand  tabs"), 4);
}

#[test]
fn test_is_blank() {
    assert!(is_blank(""));
    assert!(is_blank(" \n "));
    assert!(!is_blank(" a "));
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");

    let truncated = truncate("this is a very long string", 10);
    assert_eq!(truncated, "this is a ...");
}

#[test]
fn test_detection_band() {
    assert_eq!(DetectionBand::from_score(5), DetectionBand::HumanLike);
    assert_eq!(DetectionBand::from_score(29), DetectionBand::HumanLike);
    assert_eq!(DetectionBand::from_score(30), DetectionBand::Mixed);
    assert_eq!(DetectionBand::from_score(59), DetectionBand::Mixed);
    assert_eq!(DetectionBand::from_score(60), DetectionBand::AiLike);
    assert_eq!(DetectionBand::from_score(90), DetectionBand::AiLike);
}

#[test]
fn test_human_likeness() {
    let humanized = Humanized {
        text: "ok".to_string(),
        detection_score: 25,
    };
    assert_eq!(humanized.human_likeness(), 75);
    assert_eq!(humanized.band(), DetectionBand::HumanLike);
}
