use crate::model::DayStat;

pub const PAD_LEFT: i64 = 64;
pub const PAD_RIGHT: i64 = 12;
pub const PAD_TOP: i64 = 12;
pub const PAD_BOTTOM: i64 = 28;

/// Gap kept between the tallest bar and the plot edge.
const BAR_INSET: i64 = 8;
const BAR_FILL: f64 = 0.68;
const MIN_BAR_WIDTH: i64 = 2;
const MAX_BAR_WIDTH: i64 = 18;

pub const GRID_STEPS: i64 = 4;

/// Pixel geometry for a dual bar chart of `days`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: i64,
    pub height: i64,
    pub days: usize,
    pub baseline_y: i64,
    /// Largest added or removed value, at least 1.
    pub max_value: u64,
    /// Pixels available above (and below) the baseline.
    pub max_bar_height: i64,
    pub slot_width: f64,
    pub bar_width: i64,
}

impl ChartLayout {
    /// `None` for an empty sequence, which has nothing to lay out.
    pub fn new(days: &[DayStat], width: u32, height: u32) -> Option<Self> {
        if days.is_empty() {
            return None;
        }

        let width = i64::from(width);
        let height = i64::from(height);
        let inner_w = width - PAD_LEFT - PAD_RIGHT;
        let inner_h = height - PAD_TOP - PAD_BOTTOM;

        let max_value = days
            .iter()
            .map(|d| d.added.max(d.removed))
            .max()
            .unwrap_or(0)
            .max(1);

        let slot_width = inner_w as f64 / days.len() as f64;
        let bar_width = ((slot_width * BAR_FILL) as i64).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);

        Some(Self {
            width,
            height,
            days: days.len(),
            baseline_y: PAD_TOP + inner_h / 2,
            max_value,
            max_bar_height: (inner_h / 2 - BAR_INSET).max(0),
            slot_width,
            bar_width,
        })
    }

    pub fn plot_left(&self) -> i64 {
        PAD_LEFT
    }

    pub fn plot_right(&self) -> i64 {
        self.width - PAD_RIGHT
    }

    /// Bar height in pixels; zero means no bar is drawn.
    pub fn bar_height(&self, value: u64) -> i64 {
        (value as f64 * self.max_bar_height as f64 / self.max_value as f64).round() as i64
    }

    pub fn slot_center(&self, index: usize) -> f64 {
        PAD_LEFT as f64 + (index as f64 + 0.5) * self.slot_width
    }

    /// Left edge of the bar centred in slot `index`.
    pub fn bar_x(&self, index: usize) -> i64 {
        self.slot_center(index) as i64 - self.bar_width / 2
    }

    /// Distance of gridline `step` (1..=4) from the baseline.
    pub fn grid_offset(&self, step: i64) -> i64 {
        (self.max_bar_height as f64 * step as f64 / GRID_STEPS as f64).round() as i64
    }

    /// Value annotated on gridline `step`.
    pub fn tick_value(&self, step: i64) -> u64 {
        (self.max_value as f64 * step as f64 / GRID_STEPS as f64).round() as u64
    }

    pub fn is_labeled(&self, index: usize) -> bool {
        index % label_stride(self.days) == 0 || index + 1 == self.days
    }
}

/// Every day up to 20, every third up to 45, weekly beyond that.
pub fn label_stride(days: usize) -> usize {
    if days > 45 {
        7
    } else if days > 20 {
        3
    } else {
        1
    }
}
