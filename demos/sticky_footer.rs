// Example: a sticky footer driven through the pure transition function.
use sticky_virtualizer::{
    Layouts, StickyDirection, StickyEvent, StickyOptions, StickyTracker, TrackerState,
};

fn main() {
    // 50 rows of 24px, a 240px viewport, summary rows that stick to the bottom.
    let layouts = Layouts::from_sizes([24.0f32; 50]).with_scrollable_height(240.0);
    let tracker = StickyTracker::new(StickyOptions::footer([15usize, 30, 45]));

    let mut state = TrackerState::initial(StickyDirection::Footer);
    let offsets = [0.0f32, 120.0, 140.0, 150.0, 160.0, 300.0, 500.0, 520.0, 300.0, 100.0];
    for offset in offsets {
        state = tracker.transition(state, &StickyEvent::Scroll { offset }, &layouts);
        let active = tracker.sticky_indices()[state.current_pointer];
        println!(
            "scroll={offset:>5} footer_row={active:>2} offset={:>5} sliding={}",
            state.offset, state.tentative_sliding
        );
    }
}
