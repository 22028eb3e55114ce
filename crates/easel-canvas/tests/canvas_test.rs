//! End-to-end canvas behavior, driven through a serial host queue.
//!
//! Every test pumps the queue by hand, so the exact order of collaborator
//! calls is visible in the journal.

use std::sync::Arc;
use std::thread;

use easel_canvas::{Canvas, CanvasConfig, RunState};
use easel_core::{EventQueue, LogLevel};
use easel_testkit::{
    CountingAudio, CountingInput, RecordingListener, RecordingStore, ScriptedGraphics, SerialQueue,
    TraceLog,
};

/// Collaborator calls of one undisturbed tick, in order.
const TICK: [&str; 6] = [
    "graphics.update_time",
    "input.update",
    "input.process_events",
    "listener.render",
    "audio.update",
    "graphics.present",
];

fn quiet() -> CanvasConfig {
    CanvasConfig::default()
        .with_vsync(false)
        .with_log_level(LogLevel::Off)
}

fn host_queue(queue: &Arc<SerialQueue>) -> Arc<dyn EventQueue> {
    Arc::clone(queue) as Arc<dyn EventQueue>
}

/// A canvas with journaling doubles in every collaborator slot.
fn build_canvas(queue: &Arc<SerialQueue>, log: &TraceLog) -> Canvas {
    build_with_listener(queue, log, RecordingListener::new(log))
}

fn build_with_listener(
    queue: &Arc<SerialQueue>,
    log: &TraceLog,
    listener: RecordingListener,
) -> Canvas {
    Canvas::builder(host_queue(queue), ScriptedGraphics::new(log), listener)
        .audio(CountingAudio::new(log))
        .input(CountingInput::new(log))
        .config(quiet())
        .build()
}

#[test]
fn start_runs_setup_create_then_an_explicit_resize() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    // Attaching only queues the start; nothing ran yet.
    assert_eq!(canvas.run_state(), RunState::Created);
    assert!(log.entries().is_empty());

    assert!(queue.pump_one());
    assert_eq!(
        log.entries(),
        ["graphics.setup", "listener.create", "listener.resize(640x480)"]
    );
    assert_eq!(canvas.run_state(), RunState::Running);
    // The first tick was queued, not run inline.
    assert_eq!(queue.pending(), 1);
}

#[test]
fn a_tick_follows_the_fixed_order_and_resubmits() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    assert!(queue.pump_one());
    assert_eq!(log.entries(), TICK);
    assert_eq!(queue.pending(), 1);
    assert_eq!(canvas.run_state(), RunState::Running);
}

#[test]
fn vsync_paces_after_present() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = Canvas::builder(
        host_queue(&queue),
        ScriptedGraphics::new(&log),
        RecordingListener::new(&log),
    )
    .config(CanvasConfig::default().with_log_level(LogLevel::Off))
    .build();

    canvas.surface_attached();
    queue.pump_one();
    log.clear();
    queue.pump_one();

    // Default audio and input are silent no-ops.
    assert_eq!(
        log.entries(),
        [
            "graphics.update_time",
            "listener.render",
            "graphics.present",
            "graphics.pace",
        ]
    );
}

#[test]
fn zero_sized_surface_is_clamped_before_delivery() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = Canvas::builder(
        host_queue(&queue),
        ScriptedGraphics::new(&log).with_size(0, 0),
        RecordingListener::new(&log),
    )
    .config(quiet())
    .build();

    canvas.surface_attached();
    queue.pump_one();

    assert_eq!(
        log.entries(),
        ["graphics.setup", "listener.create", "listener.resize(1x1)"]
    );
    assert_eq!(canvas.run_state(), RunState::Running);
}

#[test]
fn resize_is_delivered_before_render_and_only_on_change() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let graphics = ScriptedGraphics::new(&log);
    let size = graphics.size_handle();
    let canvas = Canvas::builder(host_queue(&queue), graphics, RecordingListener::new(&log))
        .config(quiet())
        .build();

    canvas.surface_attached();
    queue.pump_one();

    size.set(800, 600);
    log.clear();
    queue.pump_one();
    assert_eq!(
        log.entries(),
        [
            "graphics.update_time",
            "listener.resize(800x600)",
            "listener.render",
            "graphics.present",
        ]
    );

    log.clear();
    queue.pump_one();
    assert_eq!(
        log.entries(),
        ["graphics.update_time", "listener.render", "graphics.present"]
    );
}

#[test]
fn host_flapping_between_zero_and_one_reports_nothing() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let graphics = ScriptedGraphics::new(&log).with_size(640, 0);
    let size = graphics.size_handle();
    let canvas = Canvas::builder(host_queue(&queue), graphics, RecordingListener::new(&log))
        .config(quiet())
        .build();

    canvas.surface_attached();
    queue.pump_one();
    assert_eq!(log.count_of("listener.resize(640x1)"), 1);
    log.clear();

    size.set(640, 1);
    queue.pump_one();
    size.set(640, 0);
    queue.pump_one();

    // Both raw sizes clamp to the size already delivered.
    assert_eq!(log.count_of("listener.resize(640x1)"), 0);
    assert_eq!(log.count_of("listener.render"), 2);
}

#[test]
fn tasks_run_after_the_clock_in_post_order() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    let first = log.clone();
    canvas.post(move || first.record("task.first"));
    let second = log.clone();
    canvas.post(move || second.record("task.second"));

    queue.pump_one();
    assert_eq!(
        log.entries(),
        [
            "graphics.update_time",
            "task.first",
            "task.second",
            "input.update",
            "input.process_events",
            "listener.render",
            "audio.update",
            "graphics.present",
        ]
    );
}

#[test]
fn task_posted_from_a_task_waits_for_the_next_tick() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    let handle = canvas.handle();
    let outer = log.clone();
    canvas.post(move || {
        outer.record("task.outer");
        let inner = outer.clone();
        handle.post(move || inner.record("task.inner"));
    });

    queue.pump_one();
    assert_eq!(log.count_of("task.outer"), 1);
    assert_eq!(log.count_of("task.inner"), 0);

    queue.pump_one();
    assert_eq!(log.count_of("task.inner"), 1);
}

#[test]
fn posts_from_worker_threads_land_in_the_next_tick() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    let handle = canvas.handle();
    let worker = log.clone();
    thread::spawn(move || handle.post(move || worker.record("task.from_worker")))
        .join()
        .unwrap();

    queue.pump_one();
    assert_eq!(log.entries()[1], "task.from_worker");
}

#[test]
fn stop_tears_down_before_returning_then_pauses_and_disposes() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    // The test thread pumped the deferred start, so it is the loop
    // thread and the teardown happens inline.
    canvas.stop();
    assert_eq!(log.entries(), ["graphics.teardown"]);
    assert_eq!(canvas.run_state(), RunState::Stopping);

    queue.pump_all();
    assert_eq!(
        log.entries(),
        ["graphics.teardown", "listener.pause", "listener.dispose"]
    );
    assert_eq!(canvas.run_state(), RunState::Stopped);
    assert_eq!(queue.pending(), 0);
}

#[test]
fn stop_twice_runs_the_final_callbacks_once() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();

    canvas.stop();
    canvas.stop();
    queue.pump_all();
    canvas.stop();

    assert_eq!(log.count_of("graphics.teardown"), 1);
    assert_eq!(log.count_of("listener.pause"), 1);
    assert_eq!(log.count_of("listener.dispose"), 1);
}

#[test]
fn tick_queued_before_a_stop_does_nothing() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    canvas.stop();
    log.clear();

    // First in the queue is the tick scheduled before the stop.
    assert!(queue.pump_one());
    assert!(log.entries().is_empty());
}

#[test]
fn setup_failure_stops_the_canvas_without_create() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = Canvas::builder(
        host_queue(&queue),
        ScriptedGraphics::failing(&log),
        RecordingListener::new(&log),
    )
    .config(quiet())
    .build();

    canvas.surface_attached();
    queue.pump_all();

    assert_eq!(log.entries(), ["graphics.setup"]);
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn tasks_posted_before_a_stop_run_before_pause() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    let flush = log.clone();
    canvas.post(move || flush.record("task.flush"));
    canvas.stop();
    queue.pump_all();

    assert_eq!(
        log.entries(),
        [
            "graphics.teardown",
            "task.flush",
            "listener.pause",
            "listener.dispose",
        ]
    );
}

#[test]
fn tasks_posted_after_a_stop_are_dropped() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();

    canvas.stop();
    let late = log.clone();
    canvas.post(move || late.record("task.late"));
    queue.pump_all();

    assert_eq!(log.count_of("task.late"), 0);
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn stop_from_a_task_skips_the_rest_of_the_tick() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    let handle = canvas.handle();
    let stopper = log.clone();
    canvas.post(move || {
        stopper.record("task.stop");
        handle.stop();
    });
    queue.pump_all();

    // No input, render, or present after the task; teardown runs inside
    // the same tick.
    assert_eq!(
        log.entries(),
        [
            "graphics.update_time",
            "task.stop",
            "graphics.teardown",
            "listener.pause",
            "listener.dispose",
        ]
    );
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn stop_from_render_still_presents_the_frame() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let listener = RecordingListener::new(&log).with_render_hook(|app, _frame| app.stop());
    let canvas = build_with_listener(&queue, &log, listener);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();
    queue.pump_all();

    assert_eq!(
        log.entries(),
        [
            "graphics.update_time",
            "input.update",
            "input.process_events",
            "listener.render",
            "audio.update",
            "graphics.present",
            "graphics.teardown",
            "listener.pause",
            "listener.dispose",
        ]
    );
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn stop_inside_create_prevents_the_first_tick() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let listener = RecordingListener::new(&log).with_create_hook(|app| app.stop());
    let canvas = build_with_listener(&queue, &log, listener);

    canvas.surface_attached();
    queue.pump_all();

    assert_eq!(
        log.entries(),
        [
            "graphics.setup",
            "listener.create",
            "listener.resize(640x480)",
            "graphics.teardown",
            "listener.pause",
            "listener.dispose",
        ]
    );
    assert_eq!(log.count_of("listener.render"), 0);
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn cross_thread_stop_marshals_through_the_queue() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    let handle = canvas.handle();
    thread::spawn(move || handle.stop()).join().unwrap();

    // The request is sitting in the queue; nothing stopped yet.
    assert_eq!(canvas.run_state(), RunState::Running);
    assert!(log.entries().is_empty());

    queue.pump_all();
    // The tick already queued ahead of the request still ran.
    assert_eq!(log.count_of("listener.render"), 1);
    assert_eq!(log.count_of("listener.dispose"), 1);
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn close_request_parks_the_loop_without_stopping() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    queue.request_close();
    queue.pump_all();

    // The pending tick ran in full but did not re-submit.
    assert_eq!(log.count_of("listener.render"), 1);
    assert_eq!(log.count_of("graphics.teardown"), 0);
    assert_eq!(queue.pending(), 0);
    assert_eq!(canvas.run_state(), RunState::Running);

    // The embedder's detach afterwards still shuts down cleanly.
    canvas.surface_detached();
    queue.pump_all();
    assert_eq!(log.count_of("listener.dispose"), 1);
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn detach_right_after_attach_still_runs_a_full_cycle() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    // Both notifications arrive before the queue gets pumped; the stop
    // is marshalled behind the start, so the listener sees a complete
    // create/resize/pause/dispose cycle with no frame in between.
    canvas.surface_attached();
    canvas.surface_detached();
    queue.pump_all();

    assert_eq!(
        log.entries(),
        [
            "graphics.setup",
            "listener.create",
            "listener.resize(640x480)",
            "graphics.teardown",
            "listener.pause",
            "listener.dispose",
        ]
    );
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn stop_without_attach_is_a_clean_no_op() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.stop();
    queue.pump_all();
    assert!(log.entries().is_empty());
    assert_eq!(canvas.run_state(), RunState::Stopped);

    // A late attach cannot revive it.
    canvas.surface_attached();
    queue.pump_all();
    assert!(log.entries().is_empty());
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn second_attach_is_ignored() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    canvas.surface_attached();
    queue.pump_one(); // the first tick, queued before the second attach
    queue.pump_one(); // the second deferred start, ignored

    assert_eq!(log.count_of("graphics.setup"), 1);
    assert_eq!(log.count_of("listener.create"), 1);
    assert_eq!(canvas.run_state(), RunState::Running);
}

#[test]
fn exit_requests_the_same_graceful_stop() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);

    canvas.surface_attached();
    queue.pump_one();
    log.clear();

    canvas.handle().exit();
    queue.pump_all();

    assert_eq!(
        log.entries(),
        ["graphics.teardown", "listener.pause", "listener.dispose"]
    );
    assert_eq!(canvas.run_state(), RunState::Stopped);
}

#[test]
fn dropping_the_canvas_does_not_stop_the_application() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);
    let handle = canvas.handle();

    canvas.surface_attached();
    queue.pump_one();
    drop(canvas);
    log.clear();

    queue.pump_one();
    assert_eq!(log.entries(), TICK);

    handle.stop();
    queue.pump_all();
    assert_eq!(log.count_of("listener.dispose"), 1);
    assert!(handle.run_state().is_stopped());
}

#[test]
fn preferences_open_once_per_name() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = Canvas::builder(
        host_queue(&queue),
        ScriptedGraphics::new(&log),
        RecordingListener::new(&log),
    )
    .preferences(RecordingStore::new(&log))
    .config(quiet())
    .build();

    // Preferences need no running loop.
    let handle = canvas.handle();
    let settings = handle.preferences("settings");
    settings.put("theme", "dark");

    let again = handle.preferences("settings");
    assert_eq!(again.get("theme"), Some("dark".to_owned()));
    let _scores = handle.preferences("scores");

    assert_eq!(log.count_of("prefs.open(settings)"), 1);
    assert_eq!(log.count_of("prefs.open(scores)"), 1);
}

#[test]
fn frame_numbers_count_up_from_zero() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let frames = log.clone();
    let listener = RecordingListener::new(&log).with_render_hook(move |_app, frame| {
        frames.record(format!("frame.{}@{:.3}", frame.frame, frame.delta_seconds));
    });
    let canvas = build_with_listener(&queue, &log, listener);

    canvas.surface_attached();
    queue.pump_one();
    queue.pump_one();
    queue.pump_one();
    queue.pump_one();

    // Three ticks: frames 0..2, each carrying the scripted delta.
    assert_eq!(log.count_of("frame.0@0.016"), 1);
    assert_eq!(log.count_of("frame.1@0.016"), 1);
    assert_eq!(log.count_of("frame.2@0.016"), 1);
    assert_eq!(log.count_of("frame.3@0.016"), 0);
}

#[test]
fn log_threshold_is_adjustable_at_runtime() {
    let log = TraceLog::new();
    let queue = Arc::new(SerialQueue::new());
    let canvas = build_canvas(&queue, &log);
    let handle = canvas.handle();

    assert_eq!(handle.log_level(), LogLevel::Off);
    handle.set_log_level(LogLevel::Debug);
    assert_eq!(handle.log_level(), LogLevel::Debug);

    // Suppressed messages never build their strings.
    handle.set_log_level(LogLevel::Off);
    handle.log("demo", || unreachable!("suppressed message was formatted"));
}
