//! Text rendering of canvases for terminals

use glam::Vec2;

use crate::consts::CANVAS_HALF_EXTENT;
use crate::sim::Coverage;

const INK: char = '#';
const BLANK: char = '.';
const GUTTER: &str = "   ";

/// Render a canvas as `rows` lines of `columns` characters, top row first
pub fn render_canvas<C: Coverage + ?Sized>(canvas: &C, columns: usize, rows: usize) -> Vec<String> {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let extent = 2.0 * CANVAS_HALF_EXTENT;

    (0..rows)
        .map(|row| {
            // Sample cell centres; y grows upward on the canvas
            let y = CANVAS_HALF_EXTENT - (row as f32 + 0.5) / rows as f32 * extent;
            (0..columns)
                .map(|col| {
                    let x = -CANVAS_HALF_EXTENT + (col as f32 + 0.5) / columns as f32 * extent;
                    if canvas.has_ink(Vec2::new(x, y)) { INK } else { BLANK }
                })
                .collect()
        })
        .collect()
}

/// Render two canvases next to each other under a title row
pub fn render_side_by_side<L, R>(left: &L, right: &R, columns: usize, rows: usize) -> String
where
    L: Coverage + ?Sized,
    R: Coverage + ?Sized,
{
    let columns = columns.max(1);
    let left_lines = render_canvas(left, columns, rows);
    let right_lines = render_canvas(right, columns, rows);

    let mut out = format!("{:<columns$}{GUTTER}{}\n", "Original", "Copy");
    for (l, r) in left_lines.iter().zip(&right_lines) {
        out.push_str(l);
        out.push_str(GUTTER);
        out.push_str(r);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CopySurface;

    struct TopHalf;

    impl Coverage for TopHalf {
        fn has_ink(&self, point: Vec2) -> bool {
            point.y > 0.0
        }
    }

    #[test]
    fn test_render_canvas_orientation() {
        let lines = render_canvas(&TopHalf, 4, 4);
        assert_eq!(lines, vec!["####", "####", "....", "...."]);
    }

    #[test]
    fn test_render_ink_dot() {
        let mut copy = CopySurface::new(0.1);
        copy.add_ink(Vec2::new(-0.375, 0.375));
        let lines = render_canvas(&copy, 4, 4);
        assert_eq!(lines[0], "#...");
        assert!(lines[1..].iter().all(|l| l == "...."));
    }

    #[test]
    fn test_side_by_side_layout() {
        let empty = CopySurface::new(0.1);
        let out = render_side_by_side(&TopHalf, &empty, 8, 2);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Original   Copy");
        assert_eq!(lines[1], "########   ........");
        assert_eq!(lines[2], "........   ........");
    }
}
