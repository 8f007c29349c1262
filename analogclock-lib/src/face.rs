//! Clock face geometry.
//!
//! Coordinates are relative to the centre of the face, with `x` growing to
//! the right and `y` growing downwards, so 12 o'clock is at negative `y`.
//! Every hand is rebuilt from its upward-pointing rest position on each call.

use crate::digital::Format;
use crate::time::{HandAngles, STEP_ANGLE};

pub const HOUR_HAND_WIDTH: f64 = 7.0;
pub const MINUTE_HAND_WIDTH: f64 = 5.0;
pub const SECOND_HAND_WIDTH: f64 = 2.0;

pub const QUARTER_TICK_WIDTH: f64 = 10.0;
pub const HOUR_TICK_WIDTH: f64 = 6.0;
pub const SECOND_TICK_WIDTH: f64 = 2.0;

pub const TICKS: usize = 60;

// distances from the rim
const HAND_INSET: f64 = 110.0;
const MINUTE_HAND_INSET: f64 = 15.0;
const TICK_OUTER_INSET: f64 = 30.0;
const TICK_INNER_INSET: f64 = 40.0;

const TEXT_SIZE: f64 = 32.0;
const TEXT_BASELINE: f64 = 76.0;
/// Horizontal advance of one readout glyph, relative to the text size.
const GLYPH_ADVANCE: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Rotate clockwise (on screen) around the origin.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();

        Point {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    Black,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub content: String,
    /// Left end of the baseline
    pub origin: Point,
    pub size: f64,
}

impl Text {
    /// Approximate width on a pixel surface.
    pub fn width(&self) -> f64 {
        self.content.chars().count() as f64 * self.size * GLYPH_ADVANCE
    }
}

/// Size of the surface the face is drawn on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn square(side: f64) -> Self {
        Dimensions {
            width: side,
            height: side,
        }
    }

    /// Half of the shorter side.
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    /// Length of the second hand; the other hands derive from it.
    pub fn reach(&self) -> f64 {
        (self.radius() - HAND_INSET).max(0.0)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::square(584.0)
    }
}

/// Everything needed to paint one refresh of the clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Hour, minute and second hand, followed by the rim ticks
    pub segments: Vec<Segment>,
    pub text: Option<Text>,
}

impl Frame {
    pub fn new(angles: &HandAngles, dimensions: Dimensions, text: Option<Text>) -> Self {
        let mut segments = Vec::with_capacity(3 + TICKS);
        segments.extend(hands(angles, dimensions));
        segments.extend(ticks(dimensions));

        Frame { segments, text }
    }

    pub fn hands(&self) -> &[Segment] {
        &self.segments[..3]
    }

    pub fn ticks(&self) -> &[Segment] {
        &self.segments[3..]
    }
}

/// Hour, minute and second hand, in paint order.
pub fn hands(angles: &HandAngles, dimensions: Dimensions) -> [Segment; 3] {
    let reach = dimensions.reach();

    let hand = |length: f64, angle: f64, width: f64, color: Color| Segment {
        from: Point::ORIGIN,
        to: Point::new(0.0, -length).rotate(angle),
        width,
        color,
    };

    [
        hand(2.0 * reach / 3.0, angles.hour, HOUR_HAND_WIDTH, Color::Black),
        hand(
            (reach - MINUTE_HAND_INSET).max(0.0),
            angles.minute,
            MINUTE_HAND_WIDTH,
            Color::Black,
        ),
        hand(reach, angles.second, SECOND_HAND_WIDTH, Color::Red),
    ]
}

/// The 60 rim ticks, starting at 12 o'clock and going clockwise.
pub fn ticks(dimensions: Dimensions) -> impl Iterator<Item = Segment> {
    let radius = dimensions.radius();
    let outer = Point::new(0.0, -(radius - TICK_OUTER_INSET));
    let inner = Point::new(0.0, -(radius - TICK_INNER_INSET));

    (0..TICKS).map(move |i| {
        let angle = i as f64 * STEP_ANGLE;

        Segment {
            from: outer.rotate(angle),
            to: inner.rotate(angle),
            width: tick_width(i),
            color: Color::Black,
        }
    })
}

fn tick_width(i: usize) -> f64 {
    if i % 15 == 0 {
        QUARTER_TICK_WIDTH
    } else if i % 5 == 0 {
        HOUR_TICK_WIDTH
    } else {
        SECOND_TICK_WIDTH
    }
}

/// Place the digital readout below the centre.
pub fn overlay(content: String, format: Format) -> Text {
    // the AM/PM suffix makes the 12-hour string wider
    let x = match format {
        Format::Hour24 => -40.0,
        Format::Hour12 => -64.0,
    };

    Text {
        content,
        origin: Point::new(x, TEXT_BASELINE),
        size: TEXT_SIZE,
    }
}
