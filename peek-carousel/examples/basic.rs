// Example: minimal layout queries and a single fling.
use peek_carousel::{CarouselOptions, FixedSource, PeekingBehavior, Rect, Size};

fn main() {
    let mut carousel = PeekingBehavior::new(CarouselOptions::default()).expect("valid options");
    let source = FixedSource::new(10, Size::new(320.0, 200.0));

    println!("item_size={:?}", carousel.item_size(&source));
    println!("content_size={:?}", carousel.content_size(&source));
    println!("insets={:?}", carousel.section_insets(&source));

    let viewport = Rect::new(0.0, 0.0, 320.0, 200.0);
    println!("visible={:?}", carousel.visible_items(&source, viewport));

    carousel.on_drag_begin(0.0);
    let corrected = carousel.on_drag_will_end(&source, 0.8, 90.0);
    println!(
        "after fling: offset={corrected} index={}",
        carousel.current_index(&source)
    );
}
