//! Terminal canvas
//!
//! Keeps a 128x64 monochrome pixel buffer and prints it with half-block
//! characters, two pixel rows per terminal row. Text is laid over the pixels
//! one character per column.

use std::io::{self, Write};

use crossterm::{QueueableCommand, cursor, style::Print, terminal};
use glam::IVec2;

use super::Canvas;
use super::shapes::{Span, box_spans, line_points, triangle_spans};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

const COLS: usize = SCREEN_WIDTH as usize;
const ROWS: usize = (SCREEN_HEIGHT / 2) as usize;

/// Text placed on the character grid
#[derive(Debug, Clone)]
struct Label {
    col: i32,
    row: i32,
    text: String,
}

/// Canvas that renders to a terminal through crossterm
pub struct TerminalCanvas<W: Write> {
    out: W,
    pixels: Vec<bool>,
    labels: Vec<Label>,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pixels: vec![false; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            labels: Vec::new(),
        }
    }

    /// Underlying writer
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    fn set(&mut self, p: IVec2) {
        if p.x < 0 || p.y < 0 || p.x >= SCREEN_WIDTH || p.y >= SCREEN_HEIGHT {
            return;
        }
        self.pixels[(p.y * SCREEN_WIDTH + p.x) as usize] = true;
    }

    fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[y * COLS + x]
    }

    fn fill(&mut self, spans: &[Span]) {
        for span in spans {
            for x in span.x_start..=span.x_end {
                self.set(IVec2::new(x, span.y));
            }
        }
    }

    /// Compose the buffer and labels into terminal rows
    pub fn rows(&self) -> Vec<String> {
        let mut grid: Vec<Vec<char>> = (0..ROWS)
            .map(|row| {
                (0..COLS)
                    .map(|x| match (self.get(x, row * 2), self.get(x, row * 2 + 1)) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    })
                    .collect()
            })
            .collect();

        for label in &self.labels {
            if label.row < 0 || label.row >= ROWS as i32 {
                continue;
            }
            let line = &mut grid[label.row as usize];
            for (i, ch) in label.text.chars().enumerate() {
                let col = label.col + i as i32;
                if (0..COLS as i32).contains(&col) {
                    line[col as usize] = ch;
                }
            }
        }

        grid.into_iter().map(|line| line.into_iter().collect()).collect()
    }

    /// Write the composed frame to the terminal and flush
    pub fn present(&mut self) -> io::Result<()> {
        let rows = self.rows();
        for (row, line) in rows.iter().enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            self.out.queue(Print(line))?;
        }
        self.out
            .queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        self.out.flush()
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self) {
        self.pixels.fill(false);
        self.labels.clear();
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2) {
        for p in line_points(from, to) {
            self.set(p);
        }
    }

    fn draw_box(&mut self, pos: IVec2, size: IVec2) {
        self.fill(&box_spans(pos, size));
    }

    fn draw_triangle(&mut self, points: [IVec2; 3]) {
        self.fill(&triangle_spans(points));
    }

    fn draw_str(&mut self, pos: IVec2, text: &str) {
        // Baseline sits at the bottom of the glyph; put the text on the
        // character row just above it
        self.labels.push(Label {
            col: pos.x,
            row: (pos.y - 1).div_euclid(2),
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_frame;
    use crate::sim::GameState;

    #[test]
    fn test_ground_row() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.draw_line(IVec2::new(0, 55), IVec2::new(128, 55));
        let rows = canvas.rows();
        assert_eq!(rows.len(), 32);
        // Pixel row 55 is the lower half of terminal row 27
        assert!(rows[27].chars().all(|c| c == '▄'));
        assert!(rows[26].chars().all(|c| c == ' '));
    }

    #[test]
    fn test_labels_clip_at_edges() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.draw_str(IVec2::new(-3, 10), "abcdef");
        canvas.draw_str(IVec2::new(126, 10), "xyz");
        let row: Vec<char> = canvas.rows()[4].chars().collect();
        assert_eq!(&row[..3], &['d', 'e', 'f']);
        assert_eq!(&row[126..], &['x', 'y']);
    }

    #[test]
    fn test_clear_resets_buffer() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.draw_box(IVec2::new(0, 0), IVec2::new(4, 4));
        canvas.draw_str(IVec2::new(0, 10), "hi");
        canvas.clear();
        assert!(canvas.rows().iter().all(|r| r.chars().all(|c| c == ' ')));
    }

    #[test]
    fn test_present_writes_frame() {
        let state = GameState::new();
        let mut canvas = TerminalCanvas::new(Vec::new());
        draw_frame(&mut canvas, &state.snapshot(), None);
        canvas.present().unwrap();
        let written = String::from_utf8_lossy(canvas.writer().as_slice()).to_string();
        assert!(written.contains("Score: 0"));
        // Player box spans pixel rows 50..55: full blocks on rows 25 and 26
        let rows = canvas.rows();
        assert_eq!(rows[25].chars().nth(15), Some('█'));
        assert_eq!(rows[26].chars().nth(19), Some('█'));
    }
}
