use crate::math;
use crate::{Axis, PageDirection, PagingPolicy, PagingState, PeekLayout, ReleaseTrigger};

/// Outcome of one drag release.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Corrected main-axis target offset the host must animate to.
    pub offset: f32,
    /// Item index at `offset` (the new active index).
    pub index: usize,
    /// `false` when the release was passed through untouched (zero-length viewport).
    pub corrected: bool,
}

/// The snap decision state machine.
///
/// A `Pager` remembers the main-axis offset of the last committed position. Between gestures it
/// is idle; [`Self::begin_drag`] records the live offset and [`Self::end_drag`] resolves the
/// release against a [`PeekLayout`], commits the corrected offset and reports it.
///
/// A drag that never reaches `end_drag` (cancelled by the host) leaves the recorded offset in
/// place for the next gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pager {
    policy: PagingPolicy,
    current_offset: f32,
}

impl Pager {
    pub fn new(policy: PagingPolicy) -> Self {
        pdebug!(
            threshold = policy.threshold(),
            minimum = ?policy.minimum_items_to_scroll(),
            maximum = ?policy.maximum_items_to_scroll(),
            "Pager::new"
        );
        Self {
            policy,
            current_offset: 0.0,
        }
    }

    pub fn policy(&self) -> &PagingPolicy {
        &self.policy
    }

    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    /// Index of the last committed position.
    pub fn current_index(&self, layout: &PeekLayout) -> usize {
        layout.safe_index_for_offset(self.current_offset)
    }

    /// Idle → dragging: remembers where the drag started.
    pub fn begin_drag(&mut self, live_offset: f32) {
        ptrace!(live_offset, "Pager::begin_drag");
        self.current_offset = live_offset;
    }

    /// Dragging → idle: resolves the release and commits the corrected offset.
    ///
    /// Must be called at most once per release.
    pub fn end_drag(
        &mut self,
        layout: &PeekLayout,
        velocity: f32,
        target_offset: f32,
    ) -> Resolution {
        let resolution = self.resolve(layout, self.current_offset, velocity, target_offset);
        self.current_offset = resolution.offset;
        resolution
    }

    /// Moves the committed position to item `index` (as a programmatic scroll would).
    ///
    /// Returns the offset of that item.
    pub fn set_index(&mut self, layout: &PeekLayout, index: usize) -> f32 {
        self.current_offset = layout.starting_offset_for_item(index);
        self.current_offset
    }

    pub fn state(&self) -> PagingState {
        PagingState {
            current_offset: self.current_offset,
        }
    }

    pub fn restore(&mut self, state: PagingState) {
        self.current_offset = state.current_offset;
    }

    /// Computes the corrected target for a release without touching any state.
    pub fn resolve(
        &self,
        layout: &PeekLayout,
        starting_offset: f32,
        velocity: f32,
        target_offset: f32,
    ) -> Resolution {
        if layout.viewport_length(Axis::Main) <= 0.0 {
            pdebug!(target_offset, "resolve: zero-length viewport, passing target through");
            return Resolution {
                offset: target_offset,
                index: layout.safe_index_for_offset(target_offset),
                corrected: false,
            };
        }

        let count = layout.item_count();
        let current_index = layout.safe_index_for_offset(starting_offset);
        let target_index = layout.safe_index_for_offset(target_offset);

        let fling = match self.policy.trigger() {
            ReleaseTrigger::Velocity => {
                let fast = math::abs(velocity) > self.policy.threshold();
                fast.then(|| PageDirection::from_delta(velocity))
            }
            ReleaseTrigger::Displacement => {
                let displacement = target_offset - starting_offset;
                let far = math::abs(displacement) >= self.policy.threshold();
                far.then(|| PageDirection::from_delta(displacement))
            }
        };

        let final_index = match fling {
            Some(direction) => {
                let at_first = current_index == 0 && direction == PageDirection::Backward;
                let at_end = current_index == count && direction == PageDirection::Forward;
                if at_first || at_end {
                    pdebug!(current_index, ?direction, "resolve: fling blocked at boundary");
                    return Resolution {
                        offset: starting_offset,
                        index: current_index.min(count.saturating_sub(1)),
                        corrected: true,
                    };
                }
                let delta = (target_index as isize - current_index as isize)
                    * direction.multiplier();
                let step = self.policy.clamp_step(delta.max(1) as usize);
                self.fling_index(current_index, step, direction, count)
            }
            None => self.settle_index(current_index, target_index),
        };

        let final_index = final_index.min(count.saturating_sub(1));
        let offset = layout.starting_offset_for_item(final_index);
        ptrace!(
            starting_offset,
            velocity,
            target_offset,
            current_index,
            target_index,
            final_index,
            offset,
            "resolve"
        );
        Resolution {
            offset,
            index: final_index,
            corrected: true,
        }
    }

    fn fling_index(
        &self,
        current_index: usize,
        step: usize,
        direction: PageDirection,
        count: usize,
    ) -> usize {
        match direction {
            PageDirection::Forward => {
                let next = current_index.saturating_add(step);
                // Never land past the last item; stay put instead.
                if next >= count { current_index } else { next }
            }
            PageDirection::Backward => current_index.saturating_sub(step),
        }
    }

    fn settle_index(&self, current_index: usize, target_index: usize) -> usize {
        if target_index >= current_index {
            let step = self.policy.clamp_step(target_index - current_index);
            current_index.saturating_add(step)
        } else {
            let step = self.policy.clamp_step(current_index - target_index);
            current_index.saturating_sub(step)
        }
    }
}
