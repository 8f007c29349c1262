//! Character-cell rendering of a clock [`Frame`].

use crate::event::Surface;
use crate::{Error, Result};
use analogclock::{Color, Dimensions, Frame, Point, Segment, Text};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{self, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::fmt;
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    glyph: char,
    color: Color,
}

/// A grid of character cells covering a [`Dimensions`]-sized surface.
///
/// Terminal cells are roughly twice as tall as they are wide, so the grid
/// has about two columns per row to keep the dial round.
#[derive(Clone, Debug)]
pub struct Canvas {
    columns: usize,
    rows: usize,
    dimensions: Dimensions,
    cells: Vec<Option<Cell>>,
}

impl Canvas {
    pub fn new(rows: usize, dimensions: Dimensions) -> Result<Self> {
        let rows = rows.max(1);
        let columns = rows
            .checked_mul(2)
            .map(|c| c - 1)
            .ok_or(Error::InvalidSize(rows))?;
        let cells = columns
            .checked_mul(rows)
            .ok_or(Error::InvalidSize(rows))?;

        Ok(Canvas {
            columns,
            rows,
            dimensions,
            cells: vec![None; cells],
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn glyph(&self, column: usize, row: usize) -> Option<char> {
        self.cell(column, row).map(|cell| cell.glyph)
    }

    pub fn color(&self, column: usize, row: usize) -> Option<Color> {
        self.cell(column, row).map(|cell| cell.color)
    }

    fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        if column < self.columns && row < self.rows {
            self.cells[row * self.columns + column]
        } else {
            None
        }
    }

    /// Ticks first, so the hands stay visible where they cross the rim.
    pub fn draw(&mut self, frame: &Frame) {
        for segment in frame.ticks().iter().chain(frame.hands()) {
            self.segment(segment);
        }

        if let Some(text) = &frame.text {
            self.text(text);
        }
    }

    /// Map surface coordinates (origin at the centre) to a grid position.
    fn locate(&self, point: Point) -> (i64, i64) {
        let column = (point.x / self.dimensions.width + 0.5) * (self.columns - 1) as f64;
        let row = (point.y / self.dimensions.height + 0.5) * (self.rows - 1) as f64;

        (column.round() as i64, row.round() as i64)
    }

    fn plot(&mut self, column: i64, row: i64, cell: Cell) {
        if column < 0 || row < 0 {
            return;
        }

        let (column, row) = (column as usize, row as usize);
        if column < self.columns && row < self.rows {
            self.cells[row * self.columns + column] = Some(cell);
        }
    }

    fn segment(&mut self, segment: &Segment) {
        let cell = Cell {
            glyph: glyph(segment),
            color: segment.color,
        };

        // Bresenham
        let (mut x, mut y) = self.locate(segment.from);
        let (x1, y1) = self.locate(segment.to);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, cell);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// The readout keeps the horizontal centre and baseline it has on a pixel
    /// surface; its characters take one cell each.
    fn text(&mut self, text: &Text) {
        let centre = Point::new(text.origin.x + text.width() / 2.0, text.origin.y);
        let (column, row) = self.locate(centre);
        let start = column - (text.content.chars().count() / 2) as i64;

        for (i, glyph) in text.content.chars().enumerate() {
            self.plot(
                start + i as i64,
                row,
                Cell {
                    glyph,
                    color: Color::Black,
                },
            );
        }
    }

    /// Write the grid, highlighting red cells with ANSI escapes if `color` is set.
    pub fn write_to<W: Write>(&self, out: &mut W, color: bool) -> io::Result<()> {
        for row in self.cells.chunks(self.columns) {
            let end = row.iter().rposition(Option::is_some).map_or(0, |i| i + 1);

            for cell in &row[..end] {
                match cell {
                    None => queue!(out, Print(' '))?,
                    Some(Cell {
                        glyph,
                        color: Color::Red,
                    }) if color => queue!(
                        out,
                        SetForegroundColor(style::Color::Red),
                        Print(glyph),
                        ResetColor
                    )?,
                    Some(cell) => queue!(out, Print(cell.glyph))?,
                }
            }

            queue!(out, Print('\n'))?;
        }

        Ok(())
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, false).map_err(|_| fmt::Error)?;

        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}

fn glyph(segment: &Segment) -> char {
    match segment.color {
        Color::Red => '+',
        Color::Black if segment.width >= 7.0 => '#',
        Color::Black if segment.width >= 5.0 => '*',
        Color::Black => '.',
    }
}

/// A [`Surface`] painting onto a terminal (or any other writer).
#[derive(Debug)]
pub struct Terminal<W> {
    out: W,
    rows: usize,
    dimensions: Dimensions,
    color: bool,
    clear: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, rows: usize, dimensions: Dimensions) -> Self {
        Terminal {
            out,
            rows,
            dimensions,
            color: true,
            clear: true,
        }
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Clear the screen before each frame.
    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for Terminal<W> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let mut canvas = Canvas::new(self.rows, self.dimensions)?;
        canvas.draw(frame);

        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        canvas.write_to(&mut self.out, self.color)?;
        self.out.flush()?;

        Ok(())
    }
}
