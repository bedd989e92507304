use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

/// SplitMix64: seeded, reproducible input generation for the randomized tests.
struct Rng {
    state: u64,
}

impl Rng {
    fn seeded(state: u64) -> Self {
        Self { state }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform-ish pick from `lo..hi`.
    fn index(&mut self, lo: usize, hi: usize) -> usize {
        lo + (self.next() % (hi - lo) as u64) as usize
    }

    /// Whole-point lengths keep the float arithmetic exact.
    fn length(&mut self, lo: u32, hi: u32) -> f32 {
        self.index(lo as usize, hi as usize) as f32
    }

    fn coin(&mut self) -> bool {
        self.next() >> 63 == 1
    }
}

fn params(peek: f32, spacing: f32, items_to_show: usize) -> LayoutParameters {
    LayoutParameters::new(peek, spacing, items_to_show, ScrollDirection::Horizontal).unwrap()
}

fn horizontal(peek: f32, spacing: f32, width: f32, count: usize) -> PeekLayout {
    PeekLayout::new(params(peek, spacing, 1), Size::new(width, 200.0), count)
}

fn displacement_carousel(
    peek: f32,
    spacing: f32,
    threshold: f32,
    maximum: Option<usize>,
) -> PeekingBehavior {
    let options = CarouselOptions::default()
        .with_peek_length(peek)
        .with_spacing_length(spacing)
        .with_displacement_threshold(threshold)
        .with_maximum_items_to_scroll(maximum);
    PeekingBehavior::new(options).unwrap()
}

/// Begins a drag at `start` and releases it `distance` points later.
fn drag(
    carousel: &mut PeekingBehavior,
    source: &FixedSource,
    start: f32,
    distance: f32,
    velocity: f32,
) -> f32 {
    carousel.on_drag_begin(start);
    carousel.on_drag_will_end(source, velocity, start + distance)
}

#[test]
fn item_length_subtracts_spacing_and_peek_on_both_sides() {
    let layout = horizontal(30.0, 20.0, 320.0, 4);
    // 320 - 20 * 2 - 30 * 2
    assert_eq!(layout.item_length(Axis::Main), 220.0);
    assert_eq!(layout.item_length(Axis::Cross), 200.0);
    assert_eq!(layout.item_size(), Size::new(220.0, 200.0));
}

#[test]
fn section_insets_are_spacing_plus_peek() {
    let layout = horizontal(30.0, 20.0, 320.0, 4);
    let insets = layout.section_insets();
    assert_eq!(insets.left, 50.0);
    assert_eq!(insets.right, 50.0);
    assert_eq!(insets.top, 0.0);
    assert_eq!(insets.bottom, 0.0);
    assert_eq!(layout.line_spacing(), 20.0);
    assert_eq!(layout.interitem_spacing(), 0.0);
}

#[test]
fn zero_viewport_yields_zero_item_size() {
    let layout = PeekLayout::new(params(30.0, 20.0, 1), Size::ZERO, 4);
    assert_eq!(layout.item_length(Axis::Main), 0.0);
    assert_eq!(layout.item_size(), Size::new(0.0, 0.0));
}

#[test]
fn item_length_never_goes_negative() {
    let layout = horizontal(100.0, 100.0, 50.0, 3);
    assert_eq!(layout.item_length(Axis::Main), 0.0);
}

#[test]
fn items_to_show_splits_the_remaining_length() {
    // 400 - 20 * 3 - 20 * 2 = 300, split between two items.
    let layout = PeekLayout::new(params(20.0, 20.0, 2), Size::new(400.0, 100.0), 6);
    assert_eq!(layout.item_length(Axis::Main), 150.0);
    assert_eq!(layout.stride(), 170.0);
    assert_eq!(layout.starting_offset_for_item(2), 340.0);
}

#[test]
fn content_size_matches_peek_and_spacing() {
    // 375 wide, four items.
    assert_eq!(horizontal(100.0, 0.0, 375.0, 4).content_size().width, 900.0);
    assert_eq!(horizontal(0.0, 0.0, 375.0, 4).content_size().width, 1500.0);
    assert_eq!(horizontal(0.0, 100.0, 375.0, 4).content_size().width, 1300.0);
    assert_eq!(horizontal(0.0, 100.0, 375.0, 4).content_size().height, 200.0);
}

#[test]
fn frames_are_laid_out_after_the_leading_peek() {
    let layout = horizontal(20.0, 20.0, 320.0, 4);
    assert_eq!(layout.frame_for_item(0), Rect::new(40.0, 0.0, 240.0, 200.0));
    assert_eq!(layout.frame_for_item(1), Rect::new(300.0, 0.0, 240.0, 200.0));
    assert_eq!(layout.frame_for_item(3), Rect::new(820.0, 0.0, 240.0, 200.0));
}

#[test]
fn vertical_layout_swaps_axes() {
    let p = LayoutParameters::new(30.0, 20.0, 1, ScrollDirection::Vertical).unwrap();
    let layout = PeekLayout::new(p, Size::new(320.0, 200.0), 4);
    // Main axis is the 200pt height: 200 - 40 - 60 = 100.
    assert_eq!(layout.item_size(), Size::new(320.0, 100.0));
    assert_eq!(layout.frame_for_item(1), Rect::new(0.0, 170.0, 320.0, 100.0));
    assert_eq!(layout.starting_point_for_item(1), Point::new(0.0, 120.0));
    assert_eq!(layout.index_for_point(Point::new(999.0, 120.0)), 1);

    let insets = layout.section_insets();
    assert_eq!(insets.top, 50.0);
    assert_eq!(insets.bottom, 50.0);
    assert_eq!(insets.left, 0.0);

    let content = layout.content_size();
    assert_eq!(content.width, 320.0);
    assert_eq!(content.height, 100.0 * 4.0 + 20.0 * 4.0 + 40.0 + 60.0);
}

#[test]
fn starting_offsets_and_indexes() {
    let layout = horizontal(20.0, 20.0, 320.0, 4);
    assert_eq!(layout.starting_offset_for_item(0), 0.0);
    assert_eq!(layout.starting_offset_for_item(1), 260.0);
    // Clamped to item_count.
    assert_eq!(layout.starting_offset_for_item(99), 1040.0);

    let flat = horizontal(0.0, 0.0, 320.0, 4);
    assert_eq!(flat.index_for_offset(640.0), 2);
    assert_eq!(layout.index_for_offset(520.0), 2);
    let wide_spacing = horizontal(20.0, 50.0, 320.0, 4);
    assert_eq!(wide_spacing.index_for_offset(600.0), 3);

    assert_eq!(layout.index_for_offset(-500.0), 0);
    assert_eq!(layout.index_for_offset(1e9), 4);
}

#[test]
fn index_for_offset_with_zero_stride_is_zero() {
    let layout = PeekLayout::new(params(0.0, 0.0, 1), Size::ZERO, 4);
    assert_eq!(layout.stride(), 0.0);
    assert_eq!(layout.index_for_offset(100.0), 0);
    assert_eq!(layout.index_for_offset(f32::NAN), 0);
}

#[test]
fn visible_items_follow_the_rect() {
    let layout = horizontal(20.0, 20.0, 320.0, 10);
    let viewport_at_item_1 = Rect::new(260.0, 0.0, 320.0, 200.0);
    // Item 1 fully visible, items 0 and 2 peeking.
    assert_eq!(layout.items_visible_in(viewport_at_item_1), [0, 1, 2]);

    // Touching an edge is not an intersection.
    let edge = Rect::new(0.0, 0.0, 40.0, 200.0);
    assert!(layout.items_visible_in(edge).is_empty());

    let attrs = layout.layout_attributes_in(Rect::new(0.0, 0.0, 100.0, 10.0));
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].index, 0);
    assert_eq!(attrs[0].frame, layout.frame_for_item(0));
}

#[test]
fn zero_sized_items_are_never_visible() {
    let layout = PeekLayout::new(params(20.0, 20.0, 1), Size::ZERO, 5);
    assert!(layout.items_visible_in(Rect::new(-10.0, -10.0, 1e6, 1e6)).is_empty());
}

#[test]
fn round_trip_law_and_monotonic_offsets_hold_for_random_layouts() {
    let mut rng = Rng::seeded(0x5eed);
    for _ in 0..500 {
        let peek = rng.length(0, 80);
        let spacing = rng.length(0, 60);
        let shown = rng.index(1, 4);
        let count = rng.index(0, 40);
        let dir = if rng.coin() {
            ScrollDirection::Horizontal
        } else {
            ScrollDirection::Vertical
        };
        let p = LayoutParameters::new(peek, spacing, shown, dir).unwrap();
        let viewport = Size::new(rng.length(1, 1200), rng.length(1, 1200));
        let layout = PeekLayout::new(p, viewport, count);
        if layout.stride() <= 0.0 {
            continue;
        }

        let mut prev = f32::NEG_INFINITY;
        for i in 0..=count {
            let off = layout.starting_offset_for_item(i);
            assert!(off >= prev, "offsets must be non-decreasing (i={i})");
            prev = off;
            assert_eq!(layout.index_for_offset(off), i, "round trip failed (i={i})");
        }
    }
}

#[test]
fn options_defaults_match_the_stock_carousel() {
    let o = CarouselOptions::default();
    assert_eq!(o.peek_length, 20.0);
    assert_eq!(o.spacing_length, 20.0);
    assert_eq!(o.items_to_show, 1);
    assert_eq!(o.scroll_direction, ScrollDirection::Horizontal);
    assert_eq!(o.velocity_threshold, 0.2);
    assert_eq!(o.release_trigger, ReleaseTrigger::Velocity);
    assert_eq!(o.minimum_items_to_scroll, None);
    assert_eq!(o.maximum_items_to_scroll, None);
    assert!(o.validate().is_ok());
}

#[test]
fn invalid_options_are_rejected_at_construction() {
    let base = CarouselOptions::default();
    assert_eq!(
        PeekingBehavior::new(base.with_items_to_show(0)).unwrap_err(),
        ConfigError::ItemsToShowZero
    );
    assert_eq!(
        base.with_peek_length(-1.0).validate(),
        Err(ConfigError::NegativePeekLength(-1.0))
    );
    assert_eq!(
        base.with_spacing_length(-2.0).validate(),
        Err(ConfigError::NegativeSpacingLength(-2.0))
    );
    assert_eq!(
        base.with_velocity_threshold(-0.5).validate(),
        Err(ConfigError::NegativeThreshold(-0.5))
    );
    assert!(matches!(
        base.with_spacing_length(f32::INFINITY).validate(),
        Err(ConfigError::NonFiniteLength {
            field: "spacing_length",
            ..
        })
    ));
    assert_eq!(
        base.with_maximum_items_to_scroll(Some(0)).validate(),
        Err(ConfigError::ZeroMaximumItemsToScroll)
    );
    assert_eq!(
        base.with_minimum_items_to_scroll(Some(3))
            .with_maximum_items_to_scroll(Some(2))
            .validate(),
        Err(ConfigError::InvertedScrollBounds {
            minimum: 3,
            maximum: 2
        })
    );
}

#[test]
fn clamp_step_applies_minimum_only_to_nonzero_steps() {
    let policy = PagingPolicy::new(0.2, ReleaseTrigger::Velocity, Some(2), Some(4)).unwrap();
    assert_eq!(policy.clamp_step(0), 0);
    assert_eq!(policy.clamp_step(1), 2);
    assert_eq!(policy.clamp_step(3), 3);
    assert_eq!(policy.clamp_step(9), 4);
}

#[test]
fn displacement_at_threshold_pages_forward() {
    let mut c = displacement_carousel(20.0, 20.0, 50.0, None);
    let source = FixedSource::new(4, Size::new(320.0, 200.0));
    assert_eq!(drag(&mut c, &source, 0.0, 50.0, 0.0), 260.0);

    let mut c = displacement_carousel(20.0, 0.0, 50.0, None);
    assert_eq!(drag(&mut c, &source, 0.0, 50.0, 0.0), 280.0);
}

#[test]
fn displacement_below_threshold_snaps_back() {
    let mut c = displacement_carousel(20.0, 20.0, 50.0, None);
    let source = FixedSource::new(4, Size::new(320.0, 200.0));
    assert_eq!(drag(&mut c, &source, 260.0, 49.0, 0.0), 260.0);
    assert_eq!(drag(&mut c, &source, 260.0, -49.0, 0.0), 260.0);
}

#[test]
fn displacement_backward_pages_to_previous_item() {
    let mut c = displacement_carousel(0.0, 0.0, 50.0, None);
    let source = FixedSource::new(4, Size::new(400.0, 200.0));
    assert_eq!(drag(&mut c, &source, 800.0, -51.0, 0.0), 400.0);

    let mut c = displacement_carousel(20.0, 20.0, 50.0, None);
    let source = FixedSource::new(4, Size::new(320.0, 200.0));
    assert_eq!(drag(&mut c, &source, 260.0, -210.0, 0.0), 0.0);
}

#[test]
fn maximum_items_to_scroll_caps_long_drags() {
    let mut c = displacement_carousel(20.0, 20.0, 50.0, Some(2));
    let source = FixedSource::new(4, Size::new(320.0, 200.0));
    assert_eq!(drag(&mut c, &source, 0.0, 640.0, 0.0), 520.0);

    let mut c = displacement_carousel(20.0, 20.0, 50.0, Some(1));
    assert_eq!(drag(&mut c, &source, 0.0, 500.0, 0.0), 260.0);
}

#[test]
fn minimum_items_to_scroll_forces_larger_steps() {
    let options = CarouselOptions::default()
        .with_displacement_threshold(50.0)
        .with_minimum_items_to_scroll(Some(2))
        .with_maximum_items_to_scroll(Some(4));
    let mut c = PeekingBehavior::new(options).unwrap();
    let source = FixedSource::new(4, Size::new(320.0, 200.0));
    assert_eq!(drag(&mut c, &source, 0.0, 51.0, 0.0), 520.0);
}

#[test]
fn zero_viewport_passes_the_target_through() {
    let mut c = displacement_carousel(20.0, 20.0, 50.0, None);
    let source = FixedSource::new(4, Size::ZERO);
    c.on_drag_begin(0.0);
    let r = c.resolve_release(&source, 0.0, 49.0);
    assert_eq!(r.offset, 49.0);
    assert!(!r.corrected);
    assert_eq!(c.pager().current_offset(), 49.0);
}

fn velocity_carousel() -> (PeekingBehavior, FixedSource) {
    let options = CarouselOptions::default()
        .with_peek_length(0.0)
        .with_spacing_length(0.0);
    let c = PeekingBehavior::new(options).unwrap();
    (c, FixedSource::new(4, Size::new(375.0, 200.0)))
}

#[test]
fn velocity_at_threshold_is_a_slow_release() {
    let (mut c, source) = velocity_carousel();
    let start = c.scroll_to_item(&source, 1, false).offset;
    assert_eq!(drag(&mut c, &source, start, 50.0, 0.2), 375.0);
}

#[test]
fn velocity_above_threshold_moves_one_item() {
    let (mut c, source) = velocity_carousel();
    let start = c.scroll_to_item(&source, 1, false).offset;
    assert_eq!(drag(&mut c, &source, start, 190.0, 0.21), 750.0);

    let start = c.scroll_to_item(&source, 1, false).offset;
    assert_eq!(drag(&mut c, &source, start, -50.0, -0.21), 0.0);
}

#[test]
fn fling_past_the_last_item_stays_put() {
    let (mut c, source) = velocity_carousel();
    let start = c.scroll_to_item(&source, 3, false).offset;
    assert_eq!(drag(&mut c, &source, start, 50.0, 0.21), 1125.0);
}

#[test]
fn fling_before_the_first_item_stays_put() {
    let (mut c, source) = velocity_carousel();
    let start = c.scroll_to_item(&source, 0, false).offset;
    assert_eq!(drag(&mut c, &source, start, -50.0, -0.21), 0.0);
}

#[test]
fn slow_release_snaps_to_nearest_item() {
    let (mut c, source) = velocity_carousel();
    // Tap at 350: nearest boundary is item 1.
    assert_eq!(drag(&mut c, &source, 350.0, 0.0, 0.0), 375.0);
    assert_eq!(drag(&mut c, &source, 0.0, 190.0, 0.0), 375.0);

    let start = c.scroll_to_item(&source, 1, false).offset;
    assert_eq!(drag(&mut c, &source, start, -190.0, 0.0), 0.0);
}

#[test]
fn backward_fling_can_cover_several_items() {
    let (mut c, source) = velocity_carousel();
    let source = FixedSource::new(8, source.viewport);
    let start = c.scroll_to_item(&source, 6, false).offset;
    // Target lands on item 3.
    assert_eq!(drag(&mut c, &source, start, -3.0 * 375.0, -3.0), 3.0 * 375.0);
}

#[test]
fn slow_release_respects_maximum_step() {
    let options = CarouselOptions::default()
        .with_peek_length(0.0)
        .with_spacing_length(0.0)
        .with_maximum_items_to_scroll(Some(1));
    let mut c = PeekingBehavior::new(options).unwrap();
    let source = FixedSource::new(8, Size::new(100.0, 100.0));
    c.scroll_to_item(&source, 5, false);
    // Slow release near item 1 moves a single item back.
    assert_eq!(drag(&mut c, &source, 500.0, -400.0, 0.0), 400.0);
}

#[test]
fn slow_release_with_huge_minimum_saturates_at_the_ends() {
    let options = CarouselOptions::default()
        .with_peek_length(0.0)
        .with_spacing_length(0.0)
        .with_minimum_items_to_scroll(Some(usize::MAX));
    let mut c = PeekingBehavior::new(options).unwrap();
    let source = FixedSource::new(8, Size::new(100.0, 100.0));

    let start = c.scroll_to_item(&source, 1, false).offset;
    assert_eq!(drag(&mut c, &source, start, 100.0, 0.0), 700.0);
    assert_eq!(c.current_index(&source), 7);

    let start = c.scroll_to_item(&source, 5, false).offset;
    assert_eq!(drag(&mut c, &source, start, -100.0, 0.0), 0.0);
}

#[test]
fn state_is_committed_after_each_release() {
    let (mut c, source) = velocity_carousel();
    drag(&mut c, &source, 0.0, 190.0, 1.0);
    assert_eq!(c.current_index(&source), 1);
    assert_eq!(c.state(), PagingState { current_offset: 375.0 });

    // A cancelled drag leaves the begin offset in place.
    c.on_drag_begin(420.0);
    assert_eq!(c.pager().current_offset(), 420.0);

    c.restore(PagingState { current_offset: 750.0 });
    assert_eq!(c.current_index(&source), 2);
}

#[test]
fn scroll_to_item_clamps_and_commits() {
    let (mut c, source) = velocity_carousel();
    let req = c.scroll_to_item(&source, 2, true);
    assert_eq!(req.offset, 750.0);
    assert_eq!(req.index, 2);
    assert!(req.animated);
    assert_eq!(c.current_index(&source), 2);

    let req = c.scroll_to_item(&source, 40, false);
    assert_eq!(req.offset, 1500.0);
    assert_eq!(req.index, 3);
}

#[test]
fn active_index_callback_fires_once_per_corrected_release() {
    let calls = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(AtomicUsize::new(usize::MAX));
    let (c, source) = velocity_carousel();
    let calls2 = Arc::clone(&calls);
    let last2 = Arc::clone(&last);
    let mut c = c.with_on_active_index_change(Some(move |i: usize| {
        calls2.fetch_add(1, Ordering::Relaxed);
        last2.store(i, Ordering::Relaxed);
    }));

    drag(&mut c, &source, 0.0, 190.0, 1.0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(last.load(Ordering::Relaxed), 1);

    // Programmatic scrolls do not notify.
    c.scroll_to_item(&source, 3, false);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    // A zero-sized viewport passes through without a correction.
    drag(&mut c, &FixedSource::new(4, Size::ZERO), 0.0, 10.0, 1.0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn empty_carousel_always_resolves_to_zero() {
    let (mut c, _) = velocity_carousel();
    let source = FixedSource::new(0, Size::new(375.0, 200.0));
    assert_eq!(drag(&mut c, &source, 0.0, 300.0, 5.0), 0.0);
    assert_eq!(drag(&mut c, &source, 0.0, 300.0, 0.0), 0.0);
    assert_eq!(c.current_index(&source), 0);
}

#[test]
fn resolve_stays_in_range_and_flings_move_at_least_one_item() {
    let mut rng = Rng::seeded(42);
    for _ in 0..2_000 {
        let peek = rng.length(0, 40);
        let spacing = rng.length(0, 40);
        let shown = rng.index(1, 3);
        let count = rng.index(1, 12);
        let minimum = rng.coin().then(|| rng.index(1, 3));
        let maximum = rng.coin().then(|| rng.index(3, 6));
        let options = CarouselOptions::default()
            .with_peek_length(peek)
            .with_spacing_length(spacing)
            .with_items_to_show(shown)
            .with_minimum_items_to_scroll(minimum)
            .with_maximum_items_to_scroll(maximum);
        let mut c = PeekingBehavior::new(options).unwrap();
        let source = FixedSource::new(count, Size::new(rng.length(200, 900), 100.0));
        let layout = c.layout(&source);
        if layout.stride() <= 0.0 {
            continue;
        }

        let start_index = rng.index(0, count);
        let start = c.scroll_to_item(&source, start_index, false).offset;
        let distance = rng.length(0, 3000) - 1500.0;
        let velocity = rng.length(0, 8) - 4.0;

        c.on_drag_begin(start);
        let r = c.resolve_release(&source, velocity, start + distance);
        assert!(r.index < count, "index out of range (index={}, count={count})", r.index);
        assert_eq!(r.offset, layout.starting_offset_for_item(r.index));

        let target_index = layout.safe_index_for_offset(start + distance);
        if velocity.abs() > 0.2 {
            let forward = velocity > 0.0;
            let delta = if forward {
                target_index as isize - start_index as isize
            } else {
                start_index as isize - target_index as isize
            };
            let step = c.pager().policy().clamp_step(delta.max(1) as usize);
            // Flings that would overshoot the last item stay put.
            let lands = if forward {
                start_index + step < count
            } else {
                start_index > 0
            };
            if lands {
                assert_ne!(r.index, start_index, "fling must move (v={velocity})");
                assert_eq!(r.index > start_index, forward);
            }
        } else if minimum.is_none() && maximum.is_none() {
            assert_eq!(r.index, target_index.min(count - 1));
        }
    }
}

#[test]
fn collected_indexes_match_allocation_free_iteration() {
    let layout = horizontal(10.0, 5.0, 200.0, 50);
    let rect = Rect::new(900.0, 0.0, 400.0, 10.0);
    let mut seen = Vec::new();
    layout.for_each_visible_item(rect, |i| seen.push(i));
    assert_eq!(seen, layout.items_visible_in(rect));
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}
