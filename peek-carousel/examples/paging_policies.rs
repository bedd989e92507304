// Example: how the release trigger and scroll bounds shape a gesture.
use peek_carousel::{CarouselOptions, FixedSource, PeekingBehavior, Size};

fn release(options: CarouselOptions, start: f32, velocity: f32, target: f32) -> (f32, usize) {
    let source = FixedSource::new(12, Size::new(375.0, 220.0));
    let mut carousel = PeekingBehavior::new(options).expect("valid options");
    carousel.on_drag_begin(start);
    let r = carousel.resolve_release(&source, velocity, target);
    (r.offset, r.index)
}

fn main() {
    let base = CarouselOptions::default().with_items_to_show(2);

    // Fast release with a short drag still pages one item.
    println!("fling:        {:?}", release(base, 0.0, 1.2, 30.0));
    // Same drag, slow release: snaps back.
    println!("slow:         {:?}", release(base, 0.0, 0.1, 30.0));
    // A long fling capped to two items per gesture.
    let capped = base.with_maximum_items_to_scroll(Some(2));
    println!("capped fling: {:?}", release(capped, 0.0, 3.0, 1400.0));
    // Page-at-a-time: a short fling still moves a whole page.
    let paged = base.with_minimum_items_to_scroll(Some(2));
    println!("page fling:   {:?}", release(paged, 0.0, 1.2, 30.0));
    // Distance-driven paging for hosts without a release velocity.
    let distance = base.with_displacement_threshold(40.0);
    println!("displacement: {:?}", release(distance, 0.0, 0.0, 45.0));
}
