// Example: a synthetic pointer flick and its momentum landing.
use carousel::{Engine, EngineOptions, PointerEvent, SlideLayout};

fn main() {
    let layout = SlideLayout::packed(80.0, vec![80.0; 5]);
    let mut engine = Engine::try_new(EngineOptions::new(), layout).expect("valid configuration");

    // A quick leftward swipe: ~1.2 px/ms at release.
    engine.pointer(PointerEvent::down(200.0, 0.0, 0));
    engine.pointer(PointerEvent::move_to(180.0, 0.0, 16));
    engine.pointer(PointerEvent::move_to(160.0, 0.0, 32));
    engine.pointer(PointerEvent::up(140.0, 0.0, 48));

    println!("click_allowed={}", engine.click_allowed());

    while engine.is_animating() {
        engine.tick();
    }
    println!(
        "landed on index={} at location={}",
        engine.selected_index(),
        engine.location()
    );
}
