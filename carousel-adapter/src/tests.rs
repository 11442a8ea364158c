use crate::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use carousel::{EngineEvent, EngineOptions, PointerEvent, SlideLayout};

fn five_slides() -> SlideLayout {
    SlideLayout::packed(80.0, vec![80.0; 5])
}

fn controller() -> Controller {
    Controller::try_new(EngineOptions::new(), five_slides()).expect("controller")
}

fn recorded(options: EngineOptions) -> (Controller, Arc<Mutex<Vec<EngineEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let options = options.with_on_event(move |e| sink.lock().unwrap().push(e));
    let controller = Controller::try_new(options, five_slides()).expect("controller");
    (controller, events)
}

fn drive(controller: &mut Controller) {
    let mut ticks = 0;
    while controller.is_animating() {
        controller.tick();
        ticks += 1;
        assert!(ticks < 1_000, "controller failed to settle");
    }
}

#[test]
fn init_fires_first_and_select_precedes_settle() {
    let (mut controller, events) = recorded(EngineOptions::new());
    controller.scroll_to(2);
    drive(&mut controller);

    let events = events.lock().unwrap();
    assert_eq!(events.first(), Some(&EngineEvent::Init));
    let select_at = events
        .iter()
        .position(|&e| e == EngineEvent::Select)
        .expect("select fired");
    let settle_at = events
        .iter()
        .position(|&e| e == EngineEvent::Settle)
        .expect("settle fired");
    assert!(select_at < settle_at);
    assert_eq!(
        events.iter().filter(|&&e| e == EngineEvent::Settle).count(),
        1
    );
}

#[test]
fn emitter_listeners_receive_engine_events() {
    let mut controller = controller();
    let scrolls = Arc::new(AtomicUsize::new(0));
    let settles = Arc::new(AtomicUsize::new(0));
    let s1 = Arc::clone(&scrolls);
    let s2 = Arc::clone(&settles);
    controller.on(EngineEvent::Scroll, move |_| {
        s1.fetch_add(1, Ordering::SeqCst);
    });
    controller.on(EngineEvent::Settle, move |_| {
        s2.fetch_add(1, Ordering::SeqCst);
    });

    controller.scroll_to(1);
    drive(&mut controller);

    assert!(scrolls.load(Ordering::SeqCst) > 0);
    assert_eq!(settles.load(Ordering::SeqCst), 1);
}

#[test]
fn off_is_idempotent_and_unknown_ids_are_noops() {
    let controller = controller();
    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);
    let id = controller.on(EngineEvent::Scroll, move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    assert!(controller.off(id));
    assert!(!controller.off(id));
    assert!(!controller.off(id));
}

#[test]
fn multiple_listeners_per_event_all_fire_in_order() {
    let emitter = EventEmitter::new();
    let calls = Arc::new(Mutex::new(Vec::new()));
    for tag in ["a", "b", "c"] {
        let sink = Arc::clone(&calls);
        emitter.on(EngineEvent::Select, move |_| {
            sink.lock().unwrap().push(tag);
        });
    }
    emitter.emit(EngineEvent::Select);
    emitter.emit(EngineEvent::Settle);
    assert_eq!(&*calls.lock().unwrap(), &["a", "b", "c"]);
}

#[test]
fn event_store_runs_each_disposer_exactly_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut store = EventStore::new();
    for _ in 0..3 {
        let sink = Arc::clone(&count);
        store.add(move || {
            sink.fetch_add(1, Ordering::SeqCst);
        });
    }
    assert_eq!(store.len(), 3);
    store.clear();
    assert_eq!(count.load(Ordering::SeqCst), 3);
    store.clear();
    assert_eq!(count.load(Ordering::SeqCst), 3);
    assert!(store.is_empty());
}

#[test]
fn resize_preserves_the_selected_snap() {
    let (mut controller, events) = recorded(EngineOptions::new());
    controller.scroll_to(2);
    drive(&mut controller);
    assert_eq!(controller.selected_index(), 2);

    // Equivalent layout at a new scale: same index, no visual jump.
    controller
        .resize(SlideLayout::packed(100.0, vec![100.0; 5]))
        .expect("resize");
    assert_eq!(controller.selected_index(), 2);
    assert_eq!(controller.engine().location(), -200.0);
    assert!(!controller.is_animating());

    let events = events.lock().unwrap();
    let resize_at = events
        .iter()
        .position(|&e| e == EngineEvent::Resize)
        .expect("resize fired");
    let reinit_at = events
        .iter()
        .position(|&e| e == EngineEvent::ReInit)
        .expect("reinit fired");
    assert!(resize_at < reinit_at);
}

#[test]
fn failed_reinit_leaves_the_previous_engine_running() {
    let mut controller = controller();
    controller.scroll_to(1);
    drive(&mut controller);

    let bad = SlideLayout::packed(100.0, vec![f64::NAN]);
    assert!(controller.reinit(bad).is_err());
    assert_eq!(controller.selected_index(), 1);
    assert_eq!(controller.engine().location(), -80.0);
}

#[test]
fn destroy_is_idempotent_and_runs_cleanups_once() {
    let (mut controller, events) = recorded(EngineOptions::new());
    let cleanups = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&cleanups);
    controller.defer_cleanup(move || {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    controller.destroy();
    controller.destroy();

    assert_eq!(cleanups.load(Ordering::SeqCst), 1);
    assert_eq!(
        events
            .lock()
            .unwrap()
            .iter()
            .filter(|&&e| e == EngineEvent::Destroy)
            .count(),
        1
    );

    // A destroyed controller ignores further requests.
    let recorded_len = events.lock().unwrap().len();
    controller.scroll_to(3);
    controller.tick();
    assert!(!controller.is_animating());
    assert_eq!(events.lock().unwrap().len(), recorded_len);
}

#[test]
fn scheduler_keeps_one_outstanding_request_and_cancels_on_stop() {
    let requests = Arc::new(AtomicUsize::new(0));
    let cancels = Arc::new(AtomicUsize::new(0));
    let r = Arc::clone(&requests);
    let c = Arc::clone(&cancels);
    let mut controller = controller()
        .with_scheduler(SchedulerHooks::new(
            move || {
                r.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                c.fetch_add(1, Ordering::SeqCst);
            },
        ));

    controller.scroll_to(1);
    assert_eq!(requests.load(Ordering::SeqCst), 1);

    // A second mutation while a tick is outstanding does not double-arm.
    controller.scroll_to(2);
    assert_eq!(requests.load(Ordering::SeqCst), 1);

    let mut ticks = 0;
    while controller.is_animating() {
        controller.tick();
        ticks += 1;
        assert!(ticks < 1_000);
    }
    // One request per frame while animating, none after settling.
    assert_eq!(requests.load(Ordering::SeqCst), ticks);
    assert_eq!(cancels.load(Ordering::SeqCst), 0);

    controller.scroll_to(0);
    assert_eq!(requests.load(Ordering::SeqCst), ticks + 1);
    controller.stop();
    assert_eq!(cancels.load(Ordering::SeqCst), 1);
    assert!(!controller.is_animating());
}

#[test]
fn scroll_next_and_prev_wrap_in_loop_mode() {
    let options = EngineOptions::new().with_looping(true);
    let mut controller = Controller::try_new(options, five_slides()).expect("controller");

    controller.scroll_prev();
    assert_eq!(controller.selected_index(), 4);
    drive(&mut controller);
    assert_eq!(controller.engine().location(), -320.0);

    controller.scroll_next();
    assert_eq!(controller.selected_index(), 0);
    drive(&mut controller);
    assert_eq!(controller.engine().location(), 0.0);
}

#[test]
fn scroll_next_clamps_at_the_end_when_bounded() {
    let mut controller = controller();
    controller.scroll_to(4);
    drive(&mut controller);

    controller.scroll_next();
    assert_eq!(controller.selected_index(), 4);
    assert!(!controller.is_animating());
}

#[test]
fn tap_through_controller_keeps_clicks_allowed() {
    let (mut controller, events) = recorded(EngineOptions::new());
    controller.pointer(PointerEvent::down(50.0, 0.0, 0));
    controller.pointer(PointerEvent::up(50.0, 0.0, 30));
    drive(&mut controller);

    assert!(controller.click_allowed());
    let events = events.lock().unwrap();
    assert!(events.contains(&EngineEvent::PointerDown));
    assert!(events.contains(&EngineEvent::PointerUp));
}
