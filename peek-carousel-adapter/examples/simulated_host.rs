use peek_carousel::{CarouselOptions, Point, Size};
use peek_carousel_adapter::{Controller, ScrollHost, SimulatedHost};

fn main() {
    let host = SimulatedHost::new(Size::new(375.0, 240.0), 6);
    let options = CarouselOptions::default()
        .with_peek_length(24.0)
        .with_spacing_length(12.0)
        .with_maximum_items_to_scroll(Some(2));
    let mut c = match Controller::new(options, host) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };

    println!("item_size={:?} content_size={:?}", c.item_size(), c.content_size());

    // A series of (velocity, drag distance) releases.
    for (velocity, distance) in [(1.2, 140.0), (0.05, 60.0), (3.0, 900.0), (-2.0, -40.0)] {
        c.scroll_view_will_begin_dragging();
        let start = c.host().content_offset();
        let mut target = Point::new(start.x + distance, start.y);
        let r = c.scroll_view_will_end_dragging(Point::new(velocity, 0.0), &mut target);
        c.host_mut().set_content_offset(target, true);
        println!(
            "v={velocity:>5} from={:>7.1} proposed={:>7.1} -> {:>7.1} (index {})",
            start.x,
            start.x + distance,
            target.x,
            r.index
        );
    }

    c.scroll_to_item(0, false);
    println!(
        "after scroll_to_item(0): offset={:?} active_indexes={:?}",
        c.host().content_offset(),
        c.host().active_indexes
    );
}
