// Example: minimal usage — scroll to a snap and watch the body settle.
use carousel::{Engine, EngineOptions, SlideLayout};

fn main() {
    let layout = SlideLayout::packed(80.0, vec![80.0; 5]);
    let mut engine = Engine::try_new(EngineOptions::new(), layout).expect("valid configuration");

    println!("snaps={:?}", engine.snap_list());
    println!("limit={:?}", engine.limit());

    engine.scroll_to_index(3, None);
    let mut frames = 0;
    while engine.is_animating() {
        if let Some(frame) = engine.tick() {
            frames += 1;
            if frames % 10 == 0 || frame.just_settled {
                println!(
                    "frame={frames} location={:.2} progress={:.3}",
                    frame.location, frame.progress
                );
            }
        }
    }

    println!(
        "settled: index={} in_view={:?}",
        engine.selected_index(),
        engine.slides_in_view()
    );
}
