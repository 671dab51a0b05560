pub mod layout;
pub mod svg;

pub use layout::{label_stride, ChartLayout};
pub use svg::SvgDocument;

use crate::model::{DayStat, Totals};
use crate::util::human;
use layout::{GRID_STEPS, PAD_LEFT};
use svg::{AXIS_TEXT, TICK_TEXT, TITLE_TEXT};

pub const ADDED_FILL: &str = "#6cc04a";
pub const REMOVED_FILL: &str = "#e5533d";
const GRID_STROKE: &str = "#eee";
const BASELINE_STROKE: &str = "#333";

/// Render `days` as a dual bar chart: added lines above the baseline,
/// removed lines below it.
pub fn render_svg(days: &[DayStat], width: u32, height: u32) -> String {
    let Some(layout) = ChartLayout::new(days, width, height) else {
        return SvgDocument::placeholder(i64::from(width), i64::from(height), "No data");
    };

    let mut doc = SvgDocument::new(layout.width, layout.height);
    draw_grid(&mut doc, &layout);
    draw_bars(&mut doc, &layout, days);
    draw_date_labels(&mut doc, &layout, days);
    draw_title(&mut doc, days);
    doc.finish()
}

fn draw_grid(doc: &mut SvgDocument, layout: &ChartLayout) {
    let (left, right) = (layout.plot_left(), layout.plot_right());
    let tick_x = left - 6;

    for step in 1..=GRID_STEPS {
        let offset = layout.grid_offset(step);
        let y_up = layout.baseline_y - offset;
        let y_down = layout.baseline_y + offset;
        doc.line(left, y_up, right, y_up, GRID_STROKE);
        doc.line(left, y_down, right, y_down, GRID_STROKE);

        let tick = human(layout.tick_value(step));
        doc.text(tick_x, y_up, TICK_TEXT, &format!("+{tick}"));
        doc.text(tick_x, y_down, TICK_TEXT, &format!("-{tick}"));
    }

    doc.line(left, layout.baseline_y, right, layout.baseline_y, BASELINE_STROKE);
    doc.text(tick_x, layout.baseline_y, TICK_TEXT, "0");
}

fn draw_bars(doc: &mut SvgDocument, layout: &ChartLayout, days: &[DayStat]) {
    for (i, day) in days.iter().enumerate() {
        let x = layout.bar_x(i);

        let up = layout.bar_height(day.added);
        if up > 0 {
            doc.rect(x, layout.baseline_y - up, layout.bar_width, up, ADDED_FILL);
        }

        let down = layout.bar_height(day.removed);
        if down > 0 {
            doc.rect(x, layout.baseline_y, layout.bar_width, down, REMOVED_FILL);
        }
    }
}

fn draw_date_labels(doc: &mut SvgDocument, layout: &ChartLayout, days: &[DayStat]) {
    let y = layout.height - 10;
    for (i, day) in days.iter().enumerate() {
        if !layout.is_labeled(i) {
            continue;
        }
        let x = format!("{:.1}", layout.slot_center(i));
        doc.text(x, y, AXIS_TEXT, &day.date.format("%m-%d").to_string());
    }
}

fn draw_title(doc: &mut SvgDocument, days: &[DayStat]) {
    let totals = Totals::of(days);
    let title = format!(
        "Daily code churn ({} days): +{}  -{}",
        days.len(),
        human(totals.added),
        human(totals.removed)
    );
    doc.text(PAD_LEFT, 18, TITLE_TEXT, &title);
}
