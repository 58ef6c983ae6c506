use super::*;
use crate::draw::drawable::shared;
use crate::draw::trace::{DrawLog, TraceDrawable};

fn defs(ranges: &[(f64, f64, &str)]) -> Vec<StepDef> {
    let log = DrawLog::new();
    ranges
        .iter()
        .map(|(from, to, name)| {
            StepDef::new(*from, *to, shared(TraceDrawable::plain(*name, &log)))
        })
        .collect()
}

#[test]
fn build_copies_fields_in_order() {
    let board = Storyboard::build(defs(&[(0.0, 100.0, "A"), (100.0, 250.0, "B")]));
    assert_eq!(board.len(), 2);
    assert_eq!(board.steps()[0].from, 0.0);
    assert_eq!(board.steps()[0].to, 100.0);
    assert_eq!(board.steps()[1].name(), "B");
    assert!(board.is_sorted());
}

#[test]
fn build_does_not_reorder_or_validate() {
    let board = Storyboard::build(defs(&[(300.0, 200.0, "Z"), (0.0, 50.0, "A")]));
    assert_eq!(board.steps()[0].name(), "Z");
    assert!(!board.is_sorted());
}

#[test]
fn story_length_is_last_start_clamped() {
    let board = Storyboard::build(defs(&[(0.0, 100.0, "A"), (100.0, 250.0, "B")]));
    assert_eq!(board.story_length(), 100.0);

    let board = Storyboard::build(defs(&[(-40.0, -10.0, "N")]));
    assert_eq!(board.story_length(), 0.0);

    assert_eq!(Storyboard::default().story_length(), 0.0);
    assert!(Storyboard::default().is_empty());
}

#[test]
fn overlaps_lists_intersecting_pairs() {
    let board = Storyboard::build(defs(&[
        (0.0, 100.0, "A"),
        (100.0, 250.0, "B"),
        (200.0, 300.0, "C"),
    ]));
    assert_eq!(board.overlaps(), vec![(1, 2)]);
}

#[test]
fn dump_has_one_line_per_step() {
    let board = Storyboard::build(defs(&[(0.0, 100.0, "A"), (100.0, 250.5, "B")]));
    assert_eq!(board.to_string(), "0–100: A\n100–250.5: B\n");
    assert_eq!((&board).into_iter().count(), 2);
}
