// Example: section headers that push each other out while scrolling.
use sticky_virtualizer::{ItemLayout, LayoutSource, Layouts, StickyContainer};

const ROWS: usize = 200;
const VIEWPORT: f32 = 120.0;

fn main() {
    // A section header every 20 rows; headers are taller than regular rows.
    let headers: Vec<usize> = (0..ROWS).step_by(20).collect();
    let layouts = Layouts::from_sizes((0..ROWS).map(|i| if i % 20 == 0 { 16.0 } else { 10.0 }))
        .with_scrollable_height(VIEWPORT);

    let mut sticky = StickyContainer::new(headers, Vec::<usize>::new())
        .with_row_renderer(|i| format!("Section {}", i / 20));

    // Simulate an adapter: every tick it reports the scroll offset and the realized window.
    let mut scroll = 0.0f32;
    while scroll <= 400.0 {
        let window = realized_window(&layouts, scroll, VIEWPORT);
        sticky.on_visible_indices_changed(&window, &[], &[]);
        sticky.on_scroll(scroll, &layouts);

        match sticky.render_header() {
            Some(view) => println!(
                "scroll={scroll:>5} header={:?} offset={:>5}",
                view.content, view.offset
            ),
            None => println!("scroll={scroll:>5} header=<hidden>"),
        }
        scroll += 7.0;
    }
}

fn realized_window(layouts: &Layouts, scroll: f32, viewport: f32) -> Vec<usize> {
    (0..layouts.len())
        .filter(|&i| {
            layouts
                .layout(i)
                .is_some_and(|it: ItemLayout| it.end() > scroll && it.y < scroll + viewport)
        })
        .collect()
}
