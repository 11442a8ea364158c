use carousel::{EngineEvent, EngineOptions, PointerEvent, SlideLayout};
use carousel_adapter::Controller;

fn main() {
    // Example: a framework-neutral controller driving a looping carousel
    // without holding any UI objects.
    //
    // An adapter would:
    // - forward pointer events from the host (mouse/touch/synthetic)
    // - call tick() in a frame loop (or install SchedulerHooks)
    // - apply the per-frame location + loop offsets as transforms
    let options = EngineOptions::new().with_looping(true);
    let layout = SlideLayout::packed(80.0, vec![80.0; 5]);
    let mut c = Controller::try_new(options, layout).expect("valid configuration");

    c.on(EngineEvent::Select, |_| println!("select"));
    c.on(EngineEvent::Settle, |_| println!("settle"));

    // Wrap backward through the seam.
    c.scroll_prev();
    while c.is_animating() {
        c.tick();
    }
    println!(
        "index={} location={} loop_offsets={:?}",
        c.selected_index(),
        c.engine().location(),
        c.engine().loop_offsets()
    );

    // Then a drag, released with momentum.
    c.pointer(PointerEvent::down(120.0, 0.0, 1000));
    for i in 1..=6 {
        c.pointer(PointerEvent::move_to(120.0 + 12.0 * i as f64, 0.0, 1000 + 16 * i));
        c.tick();
    }
    c.pointer(PointerEvent::up(200.0, 0.0, 1120));
    while c.is_animating() {
        c.tick();
    }
    println!("after drag: index={}", c.selected_index());
}
