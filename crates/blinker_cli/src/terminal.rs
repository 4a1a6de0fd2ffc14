//! Text rendering of blinker frames

use blinker_view::{Bounds, Canvas, ContentSize, Frame, Viewport};

/// Glyphs from transparent to opaque
const SHADES: [char; 5] = [' ', '.', ':', '*', '#'];

fn shade(alpha: u8) -> char {
    let index = (alpha as usize * (SHADES.len() - 1) + 127) / 255;
    SHADES[index.min(SHADES.len() - 1)]
}

/// A canvas that keeps the last drawn frame for text output
#[derive(Debug, Default)]
pub struct TextCanvas {
    last: Option<Frame>,
}

impl TextCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame before a render pass
    pub fn begin(&mut self) {
        self.last = None;
    }

    pub fn last(&self) -> Option<Frame> {
        self.last
    }

    /// One-line summary: opacity bar, alpha, bounds
    pub fn status_line(&self, bar_width: usize) -> String {
        match self.last {
            Some(frame) => {
                let filled = (frame.opacity * bar_width as f32).round() as usize;
                format!(
                    "[{}{}] alpha={:>3} bounds={}{}",
                    "#".repeat(filled.min(bar_width)),
                    " ".repeat(bar_width - filled.min(bar_width)),
                    frame.alpha,
                    frame.bounds,
                    if frame.is_hidden() { " (hidden)" } else { "" }
                )
            }
            None => format!("[{}] (nothing drawn)", " ".repeat(bar_width)),
        }
    }

    /// Character picture of the viewport with the content drawn in
    ///
    /// The viewport is scaled down to `columns` x `rows` cells; `+` marks
    /// the padded area, content cells are shaded by alpha.
    pub fn picture(&self, viewport: &Viewport, columns: usize, rows: usize) -> Vec<String> {
        let padded = viewport.padded_bounds();
        let cell_w = viewport.width.max(1) as f64 / columns.max(1) as f64;
        let cell_h = viewport.height.max(1) as f64 / rows.max(1) as f64;

        let mut lines = Vec::with_capacity(rows + 2);
        lines.push(format!("+{}+", "-".repeat(columns)));
        for row in 0..rows {
            let y = ((row as f64 + 0.5) * cell_h) as i32;
            let mut line = String::with_capacity(columns + 2);
            line.push('|');
            for column in 0..columns {
                let x = ((column as f64 + 0.5) * cell_w) as i32;
                let glyph = match self.last {
                    Some(frame) if covers(&frame.bounds, x, y) => shade(frame.alpha),
                    _ if !covers(&padded, x, y) => '+',
                    _ => ' ',
                };
                line.push(glyph);
            }
            line.push('|');
            lines.push(line);
        }
        lines.push(format!("+{}+", "-".repeat(columns)));
        lines
    }
}

fn covers(bounds: &Bounds, x: i32, y: i32) -> bool {
    x >= bounds.left && x < bounds.right && y >= bounds.top && y < bounds.bottom
}

impl Canvas<ContentSize> for TextCanvas {
    fn draw_content(&mut self, _content: &ContentSize, frame: Frame) {
        self.last = Some(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(alpha: u8) -> Frame {
        Frame {
            bounds: Bounds::new(0, 0, 10, 10),
            opacity: alpha as f32 / 255.0,
            alpha,
        }
    }

    #[test]
    fn test_shades_cover_the_range() {
        assert_eq!(shade(0), ' ');
        assert_eq!(shade(255), '#');
        assert_eq!(shade(128), ':');
    }

    #[test]
    fn test_status_line() {
        let mut canvas = TextCanvas::new();
        assert!(canvas.status_line(4).contains("nothing drawn"));

        canvas.draw_content(&ContentSize::UNKNOWN, frame(255));
        assert_eq!(canvas.status_line(4), "[####] alpha=255 bounds=[0, 0, 10, 10]");

        canvas.draw_content(&ContentSize::UNKNOWN, frame(0));
        assert_eq!(
            canvas.status_line(4),
            "[    ] alpha=  0 bounds=[0, 0, 10, 10] (hidden)"
        );
    }

    #[test]
    fn test_picture_marks_content_and_padding() {
        let mut canvas = TextCanvas::new();
        canvas.draw_content(&ContentSize::UNKNOWN, frame(255));
        let viewport = Viewport::new(20, 20);
        let lines = canvas.picture(&viewport, 4, 2);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "|##  |");
        assert_eq!(lines[2], "|    |");
    }
}
