//! Character-cell supply and demand chart.
//!
//! The chart is laid out on a unit square (quantity right, price up) and
//! rasterized into a grid of [`Cell`]s:
//!
//! ```text
//! ^
//! |  \             / S
//! |   \          /
//! |     \      /
//! |       \  /
//! |         o
//! |       /  \
//! |     /      \
//! |   /          \
//! | /              \ D
//! +------------------>
//! ```
//!
//! On the result screen the original curve fades, the moved curve is drawn
//! in the verdict color and an arrow points the way it moved.

// Chart coordinates are small and positive; casts are intentional.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use super::{ChartState, ColorRole};
use crate::catalog::{Curve, Shift};

/// Smallest grid the chart will draw into.
const MIN_WIDTH: u16 = 12;
const MIN_HEIGHT: u16 = 6;

/// Curves span this band of the unit square.
const LOW: f64 = 0.1;
const HIGH: f64 = 0.9;

/// Horizontal distance a curve moves when it shifts.
const SHIFT_DISTANCE: f64 = 0.2;

/// One character of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Glyph to draw.
    pub ch: char,
    /// Semantic color.
    pub role: ColorRole,
    /// Draw emphasized.
    pub bold: bool,
}

impl Cell {
    const BLANK: Self = Self {
        ch: ' ',
        role: ColorRole::Muted,
        bold: false,
    };
}

/// Rasterized chart, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl ChartGrid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    /// Width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Cell at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }

    /// The chart as plain text, one line per row with trailing spaces trimmed.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.ch).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    /// Column of the plot area for a quantity in `[0, 1]`. Column 0 is the
    /// price axis.
    fn column(&self, q: f64) -> usize {
        let span = (self.width - 2) as f64;
        1 + (q.clamp(0.0, 1.0) * span).round() as usize
    }

    /// Row of the plot area for a price in `[0, 1]`. The last row is the
    /// quantity axis.
    fn row(&self, p: f64) -> usize {
        let span = (self.height - 2) as f64;
        (self.height - 2) - (p.clamp(0.0, 1.0) * span).round() as usize
    }

    fn plot(&mut self, q: f64, p: f64, cell: Cell) {
        let (x, y) = (self.column(q), self.row(p));
        self.set(x, y, cell);
    }

    /// Draw the segment from `from` to `to` in unit coordinates.
    fn segment(&mut self, from: (f64, f64), to: (f64, f64), cell: Cell) {
        let steps = 4 * (self.width + self.height);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let q = from.0 + (to.0 - from.0) * t;
            let p = from.1 + (to.1 - from.1) * t;
            if (0.0..=1.0).contains(&q) {
                self.plot(q, p, cell);
            }
        }
    }
}

/// Endpoints of a curve moved `offset` along the quantity axis.
fn endpoints(curve: Curve, offset: f64) -> ((f64, f64), (f64, f64)) {
    match curve {
        Curve::Supply => ((LOW + offset, LOW), (HIGH + offset, HIGH)),
        Curve::Demand => ((LOW + offset, HIGH), (HIGH + offset, LOW)),
    }
}

const fn glyph(curve: Curve) -> char {
    match curve {
        Curve::Supply => '/',
        Curve::Demand => '\\',
    }
}

/// Quantity where `curve`, moved `offset`, crosses price `p`.
fn quantity_at(curve: Curve, offset: f64, p: f64) -> f64 {
    match curve {
        Curve::Supply => p + offset,
        Curve::Demand => 1.0 - p + offset,
    }
}

/// Rasterize `state` into a `width` x `height` grid.
///
/// Sizes below 12 x 6 are raised to that minimum.
#[must_use]
pub fn render_chart(state: &ChartState, width: u16, height: u16) -> ChartGrid {
    let width = usize::from(width.max(MIN_WIDTH));
    let height = usize::from(height.max(MIN_HEIGHT));
    let mut grid = ChartGrid::new(width, height);

    draw_axes(&mut grid);

    let shifted = state.shift.map(|s| s.curve);
    for curve in Curve::ALL {
        let (from, to) = endpoints(curve, 0.0);
        let cell = if shifted == Some(curve) {
            Cell {
                ch: ':',
                role: ColorRole::Muted,
                bold: false,
            }
        } else {
            Cell {
                ch: glyph(curve),
                role: ColorRole::for_curve(curve),
                bold: state.highlight == Some(curve),
            }
        };
        grid.segment(from, to, cell);
    }

    grid.plot(
        0.5,
        0.5,
        Cell {
            ch: 'o',
            role: if state.shift.is_some() {
                ColorRole::Muted
            } else {
                ColorRole::Text
            },
            bold: state.shift.is_none(),
        },
    );

    if let Some(shift) = state.shift {
        let offset = match shift.direction {
            Shift::Left => -SHIFT_DISTANCE,
            Shift::Right => SHIFT_DISTANCE,
        };
        let role = ColorRole::for_verdict(shift.is_correct);
        let (from, to) = endpoints(shift.curve, offset);
        grid.segment(
            from,
            to,
            Cell {
                ch: glyph(shift.curve),
                role,
                bold: true,
            },
        );
        draw_arrow(&mut grid, shift.curve, shift.direction, offset, role);
    }

    draw_labels(&mut grid, state);
    grid
}

fn draw_axes(grid: &mut ChartGrid) {
    let axis = |ch| Cell {
        ch,
        role: ColorRole::Axis,
        bold: false,
    };
    let bottom = grid.height - 1;
    for y in 0..bottom {
        grid.set(0, y, axis('|'));
    }
    for x in 1..grid.width {
        grid.set(x, bottom, axis('-'));
    }
    grid.set(0, 0, axis('^'));
    grid.set(0, bottom, axis('+'));
    grid.set(grid.width - 1, bottom, axis('>'));
}

/// Arrow between the old and new position of the moved curve, away from
/// the equilibrium point.
fn draw_arrow(grid: &mut ChartGrid, curve: Curve, direction: Shift, offset: f64, role: ColorRole) {
    let p = match curve {
        Curve::Supply => 0.35,
        Curve::Demand => 0.65,
    };
    let y = grid.row(p);
    let old = grid.column(quantity_at(curve, 0.0, p));
    let new = grid.column(quantity_at(curve, offset, p));
    let shaft = Cell {
        ch: '-',
        role,
        bold: true,
    };

    match direction {
        Shift::Right if new > old + 2 => {
            for x in old + 1..new - 1 {
                grid.set(x, y, shaft);
            }
            grid.set(new - 1, y, Cell { ch: '>', ..shaft });
        }
        Shift::Left if old > new + 2 => {
            for x in new + 2..old {
                grid.set(x, y, shaft);
            }
            grid.set(new + 1, y, Cell { ch: '<', ..shaft });
        }
        _ => {}
    }
}

fn draw_labels(grid: &mut ChartGrid, state: &ChartState) {
    for curve in Curve::ALL {
        let (_, end) = endpoints(curve, 0.0);
        let x = grid.column(end.0) + 1;
        let y = grid.row(end.1);
        let emphasized = state.highlight == Some(curve);
        let ch = match curve {
            Curve::Supply => 'S',
            Curve::Demand => 'D',
        };
        grid.set(
            x,
            y,
            Cell {
                ch,
                role: ColorRole::for_curve(curve),
                bold: emphasized,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ShiftOverlay;

    /// Sum and count of the columns holding cells with `role`.
    fn columns(grid: &ChartGrid, role: ColorRole) -> (usize, usize) {
        let mut sum = 0;
        let mut count = 0;
        for row in grid.rows() {
            for (x, cell) in row.iter().enumerate() {
                if cell.role == role && cell.ch != ' ' {
                    sum += x;
                    count += 1;
                }
            }
        }
        (sum, count)
    }

    fn shifted(curve: Curve, direction: Shift, is_correct: bool) -> ChartState {
        ChartState {
            highlight: None,
            shift: Some(ShiftOverlay {
                curve,
                direction,
                is_correct,
            }),
        }
    }

    #[test]
    fn test_plain_chart_has_both_curves() {
        let grid = render_chart(&ChartState::default(), 40, 16);
        assert_eq!(grid.width(), 40);
        assert_eq!(grid.height(), 16);

        let text = grid.to_plain_string();
        assert!(text.contains('/'));
        assert!(text.contains('\\'));
        assert!(text.contains('o'));
        assert!(text.contains('S'));
        assert!(text.contains('D'));
        assert_eq!(text.lines().count(), 16);
        assert_eq!(columns(&grid, ColorRole::Correct).1, 0);
    }

    #[test]
    fn test_minimum_size() {
        let grid = render_chart(&ChartState::default(), 1, 1);
        assert_eq!((grid.width(), grid.height()), (12, 6));
        assert!(grid.get(12, 0).is_none());
        assert_eq!(grid.get(0, 5).map(|c| c.ch), Some('+'));
    }

    #[test]
    fn test_highlight_is_bold() {
        let state = ChartState {
            highlight: Some(Curve::Supply),
            shift: None,
        };
        let grid = render_chart(&state, 40, 16);
        let supply_bold = grid
            .rows()
            .flatten()
            .filter(|c| c.role == ColorRole::Supply && c.ch == '/')
            .all(|c| c.bold);
        let demand_plain = grid
            .rows()
            .flatten()
            .filter(|c| c.role == ColorRole::Demand && c.ch == '\\')
            .all(|c| !c.bold);
        assert!(supply_bold);
        assert!(demand_plain);
    }

    #[test]
    fn test_right_shift_lands_right_of_original() {
        let grid = render_chart(&shifted(Curve::Supply, Shift::Right, true), 48, 18);
        let (moved_sum, moved) = columns(&grid, ColorRole::Correct);
        let (faded_sum, faded) = columns(&grid, ColorRole::Muted);
        assert!(moved > 0 && faded > 0);
        // Compare mean columns without dividing.
        assert!(moved_sum * faded > faded_sum * moved);
        assert!(grid.to_plain_string().contains('>'));
    }

    #[test]
    fn test_left_shift_lands_left_of_original() {
        let grid = render_chart(&shifted(Curve::Demand, Shift::Left, false), 48, 18);
        let (moved_sum, moved) = columns(&grid, ColorRole::Incorrect);
        assert!(moved > 0);
        assert_eq!(columns(&grid, ColorRole::Correct).1, 0);

        let faded: Vec<usize> = grid
            .rows()
            .flat_map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, c)| c.ch == ':')
                    .map(|(x, _)| x)
            })
            .collect();
        assert!(!faded.is_empty());
        let faded_sum: usize = faded.iter().sum();
        assert!(moved_sum * faded.len() < faded_sum * moved);
        assert!(grid.to_plain_string().contains('<'));
    }
}
