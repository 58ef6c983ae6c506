use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::draw::drawable::shared;
use crate::draw::trace::{DrawLog, DrawOp, TraceDrawable};
use crate::host::simulated::SimulatedHost;
use crate::storyboard::step::StepDef;
use crate::foundation::error::ScrollyResult;
use crate::telemetry::batch::{
    BatchingTelemetry, EventBody, ReaderSession, TelemetryEvent, Transport,
};

#[derive(Debug, Default)]
struct Outbox {
    fail: bool,
    batches: Vec<Vec<TelemetryEvent>>,
}

impl Transport for Outbox {
    fn deliver(&mut self, batch: &[TelemetryEvent]) -> ScrollyResult<()> {
        if self.fail {
            return Err(ScrollyError::telemetry_send("offline"));
        }
        self.batches.push(batch.to_vec());
        Ok(())
    }
}

type Sink = Rc<RefCell<BatchingTelemetry<Outbox>>>;

fn sink(fail: bool) -> Sink {
    Rc::new(RefCell::new(BatchingTelemetry::new(
        ReaderSession::default(),
        Outbox {
            fail,
            ..Outbox::default()
        },
    )))
}

fn setup(
    host: SimulatedHost,
    sink: &Sink,
    timing: LoopConfig,
) -> (AnimationLoop<SimulatedHost>, DrawLog) {
    let log = DrawLog::new();
    let director = Director::superposed(
        "co2",
        vec![
            StepDef::new(0.0, 100.0, shared(TraceDrawable::plain("A", &log))),
            StepDef::new(100.0, 250.0, shared(TraceDrawable::plain("B", &log))),
        ],
        sink.clone(),
    );
    (AnimationLoop::new(director, host, timing), log)
}

fn draws(log: &DrawLog) -> Vec<String> {
    log.take()
        .into_iter()
        .filter(|c| c.op == DrawOp::Draw)
        .map(|c| c.entity)
        .collect()
}

#[test]
fn start_sizes_page_and_renders_initial_offset() {
    let mut host = SimulatedHost::new(600.0);
    host.scroll_to(50.0);
    let sink = sink(false);
    let (mut lp, log) = setup(host, &sink, LoopConfig::default());

    assert_eq!(lp.state(), LoopState::Idle);
    assert_eq!(lp.start(), LoopState::Running);
    assert_eq!(lp.host().min_page_height(), Some(100.0 + 600.0 + 400.0));
    assert_eq!(lp.host().frames_requested(), 1);
    assert_eq!(draws(&log), vec!["A".to_string()]);
    assert_eq!(lp.director().passes(), 1);

    // Starting twice is a no-op.
    assert_eq!(lp.start(), LoopState::Running);
    assert_eq!(lp.director().passes(), 1);
}

#[test]
fn unchanged_offset_only_reschedules() {
    let sink = sink(false);
    let (mut lp, log) = setup(SimulatedHost::new(600.0), &sink, LoopConfig::default());
    lp.start();
    log.take();
    for _ in 0..5 {
        lp.host_mut().advance(16.0);
        lp.on_frame();
    }
    assert!(log.is_empty());
    assert_eq!(lp.director().passes(), 1);
    assert_eq!(lp.host().frames_requested(), 6);
    assert_eq!(lp.stats().frames, 5);
}

#[test]
fn changed_offset_triggers_redraw() {
    let sink = sink(false);
    let (mut lp, log) = setup(SimulatedHost::new(600.0), &sink, LoopConfig::default());
    lp.start();
    log.take();

    lp.host_mut().advance(16.0);
    lp.host_mut().scroll_to(175.0);
    lp.on_frame();
    assert_eq!(lp.last_offset(), 175.0);
    assert_eq!(draws(&log), vec!["B".to_string()]);
    assert_eq!(lp.stats().redraws, 1);
}

#[test]
fn redraws_within_ten_ms_collapse_into_one() {
    let sink = sink(false);
    let (mut lp, _log) = setup(SimulatedHost::new(600.0), &sink, LoopConfig::default());
    lp.start();

    lp.host_mut().advance(20.0);
    assert!(lp.scrolling(50.0));
    lp.host_mut().advance(4.0);
    assert!(!lp.scrolling(60.0));
    lp.host_mut().advance(6.0);
    assert!(!lp.scrolling(70.0));
    lp.host_mut().advance(0.5);
    assert!(lp.scrolling(80.0));

    let stats = lp.stats();
    assert_eq!(stats.redraws, 2);
    assert_eq!(stats.throttled, 2);
    assert_eq!(lp.director().passes(), 3);
}

#[test]
fn first_redraw_waits_for_throttle_window_after_construction() {
    let sink = sink(false);
    let (mut lp, _log) = setup(SimulatedHost::new(600.0), &sink, LoopConfig::default());
    lp.start();
    lp.host_mut().advance(5.0);
    assert!(!lp.scrolling(50.0));
}

#[test]
fn throttled_change_is_not_redrawn_once_scrolling_stops() {
    let sink = sink(false);
    let (mut lp, log) = setup(SimulatedHost::new(600.0), &sink, LoopConfig::default());
    lp.start();
    log.take();

    lp.host_mut().advance(16.0);
    lp.host_mut().scroll_to(50.0);
    lp.on_frame();
    assert_eq!(draws(&log), vec!["A".to_string()]);

    lp.host_mut().advance(5.0);
    lp.host_mut().scroll_to(175.0);
    lp.on_frame();
    for _ in 0..10 {
        lp.host_mut().advance(16.0);
        lp.on_frame();
    }
    assert!(draws(&log).is_empty());
    assert_eq!(lp.last_offset(), 175.0);
    assert_eq!(lp.stats().throttled, 1);

    let settled = lp.last_offset();
    lp.director_mut().draw_all(settled);
    assert_eq!(draws(&log), vec!["B".to_string()]);
}

#[test]
fn start_failure_freezes_loop_and_reports_once() {
    let host = SimulatedHost::new(600.0).without_frame_callbacks();
    let sink = sink(false);
    let (mut lp, log) = setup(host, &sink, LoopConfig::default());

    assert_eq!(lp.start(), LoopState::Frozen);
    // The static render still happened.
    assert_eq!(lp.director().passes(), 1);
    log.take();

    lp.host_mut().scroll_to(150.0);
    lp.host_mut().advance(100.0);
    lp.on_frame();
    assert!(log.is_empty());
    assert_eq!(lp.stats().frames, 0);

    let errors: Vec<_> = sink
        .borrow()
        .pending()
        .iter()
        .filter(|e| matches!(e.body, EventBody::Error { .. }))
        .cloned()
        .collect();
    assert_eq!(errors.len(), 1);
    match &errors[0].body {
        EventBody::Error { message } => assert!(message.contains("scheduler start failure")),
        _ => unreachable!(),
    }
}

#[test]
fn telemetry_flushes_on_interval_even_when_frozen() {
    let host = SimulatedHost::new(600.0).without_frame_callbacks();
    let sink = sink(false);
    let (mut lp, _log) = setup(host, &sink, LoopConfig::default());
    lp.start();

    lp.host_mut().advance(4_999.0);
    lp.poll_timers();
    assert_eq!(lp.stats().flushes, 0);

    lp.host_mut().advance(1.0);
    lp.poll_timers();
    assert_eq!(lp.stats().flushes, 1);
    assert!(sink.borrow().pending().is_empty());
    assert_eq!(sink.borrow().transport().batches.len(), 1);
}

#[test]
fn failed_flush_is_counted_and_dropped() {
    let sink = sink(true);
    let (mut lp, _log) = setup(SimulatedHost::new(600.0), &sink, LoopConfig::default());
    lp.start();
    lp.host_mut().advance(20.0);
    lp.scrolling(50.0);

    lp.host_mut().advance(5_000.0);
    lp.poll_timers();
    assert_eq!(lp.stats().failed_flushes, 1);
    assert!(sink.borrow().pending().is_empty());
    assert_eq!(lp.state(), LoopState::Running);
}

#[test]
fn heartbeat_emits_alive_when_configured() {
    let sink = sink(false);
    let timing = LoopConfig {
        heartbeat_interval_ms: Some(20_000.0),
        ..LoopConfig::default()
    };
    let (mut lp, _log) = setup(SimulatedHost::new(600.0), &sink, timing);
    lp.start();
    lp.host_mut().advance(20_000.0);
    lp.poll_timers();

    let alive = sink
        .borrow()
        .transport()
        .batches
        .iter()
        .flatten()
        .filter(|e| e.body == EventBody::Alive)
        .count();
    assert_eq!(alive, 1);
}
