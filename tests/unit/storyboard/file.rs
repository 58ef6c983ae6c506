use super::*;
use crate::foundation::config::StrategyKind;
use crate::storyboard::builder::Storyboard;

const STORY: &str = r#"{
    "config": { "name": "co2", "strategy": "juxtaposed" },
    "reader": { "user": "u", "session": "s" },
    "steps": [
        { "from": 0, "to": 100, "name": "A" },
        { "from": 100, "to": 250, "name": "B", "interpolatable": true }
    ]
}"#;

#[test]
fn parses_story_with_defaults() {
    let story = StoryFile::from_json(STORY).unwrap();
    assert_eq!(story.config.name, "co2");
    assert_eq!(story.config.strategy, StrategyKind::Juxtaposed);
    assert_eq!(story.reader.user, "u");
    assert_eq!(story.steps.len(), 2);
    assert!(!story.steps[0].interpolatable);
    assert!(story.steps[1].interpolatable);
}

#[test]
fn trace_defs_build_named_entities() {
    let story = StoryFile::from_json(STORY).unwrap();
    let log = DrawLog::new();
    let board = Storyboard::build(story.trace_defs(&log));
    assert_eq!(board.to_string(), "0–100: A\n100–250: B\n");
}

#[test]
fn unnamed_step_is_rejected() {
    let err = StoryFile::from_json(r#"{ "steps": [{ "from": 0, "to": 1, "name": "" }] }"#)
        .unwrap_err();
    assert!(matches!(err, ScrollyError::Validation(_)));
}

#[test]
fn empty_document_is_an_empty_story() {
    let story = StoryFile::from_json("{}").unwrap();
    assert!(story.steps.is_empty());
    assert_eq!(story.config, DirectorConfig::default());
}
