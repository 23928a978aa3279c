// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil` and `floor`
use kurbo::{Circle, Line, Point, Rect, Size};

use crate::bounds::{MIN_EXTENT, WorldBounds};
use crate::snapshot::SceneSnapshot;

/// Tunables for mini‑map drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MiniMapConfig {
    /// Grid spacing in world units. Non‑positive values disable the grid.
    pub grid_spacing: f64,
    /// Radius of the tracked‑entity marker in display units.
    pub marker_radius: f64,
}

impl Default for MiniMapConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 200.0,
            marker_radius: 4.0,
        }
    }
}

/// Letterboxed mapping between world space and a mini‑map display.
///
/// World space is Y‑up; the display is Y‑down with its origin at the top‑left
/// corner. The world is scaled uniformly to fit the display and centered, so
/// one axis is padded whenever the aspect ratios differ.
///
/// The projector holds no state beyond what it derives from
/// `(world, display)`; build a new one whenever either changes.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_camera2d::{MiniMapProjector, WorldBounds};
///
/// let world = WorldBounds::from_min_max(0.0, 0.0, 2000.0, 1500.0);
/// let map = MiniMapProjector::new(world, Size::new(150.0, 120.0));
/// assert_eq!(map.scale(), 0.075);
/// assert_eq!(map.content_rect(), Rect::new(0.0, 3.75, 150.0, 116.25));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MiniMapProjector {
    world: Rect,
    display: Size,
    scale: f64,
    content_rect: Rect,
}

impl MiniMapProjector {
    /// Builds the mapping for `world` shown in a display of size `display`.
    ///
    /// Negative display extents are treated as zero; a zero‑sized display
    /// produces a zero‑area content rectangle.
    #[must_use]
    pub fn new(world: WorldBounds, display: Size) -> Self {
        let world = world.rect();
        let display = Size::new(display.width.max(0.0), display.height.max(0.0));
        let sx = display.width / world.width().max(MIN_EXTENT);
        let sy = display.height / world.height().max(MIN_EXTENT);
        let scale = sx.min(sy);

        let content = Size::new(world.width() * scale, world.height() * scale);
        let offset_x = (display.width - content.width) * 0.5;
        let offset_y = (display.height - content.height) * 0.5;
        Self {
            world,
            display,
            scale,
            content_rect: Rect::from_origin_size(Point::new(offset_x, offset_y), content),
        }
    }

    /// World rectangle being projected.
    #[must_use]
    pub fn world(&self) -> Rect {
        self.world
    }

    /// Display size.
    #[must_use]
    pub fn display(&self) -> Size {
        self.display
    }

    /// Display units per world unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Letterboxed area of the display that shows the world.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content_rect
    }

    /// Maps a world point (Y‑up) to display coordinates (Y‑down).
    #[must_use]
    pub fn world_to_mini(&self, pt: Point) -> Point {
        Point::new(
            self.content_rect.min_x() + (pt.x - self.world.min_x()) * self.scale,
            self.content_rect.max_y() - (pt.y - self.world.min_y()) * self.scale,
        )
    }

    /// Maps a world rectangle to a canonical display rectangle.
    ///
    /// The world top‑left `(min_x, max_y)` and bottom‑right `(max_x, min_y)`
    /// corners become the display top‑left and bottom‑right.
    #[must_use]
    pub fn world_rect_to_mini_rect(&self, rect: Rect) -> Rect {
        let tl = self.world_to_mini(Point::new(rect.min_x(), rect.max_y()));
        let br = self.world_to_mini(Point::new(rect.max_x(), rect.min_y()));
        Rect::from_points(tl, br)
    }

    /// Maps a display point back to world space.
    ///
    /// The point is first clamped into the content rectangle, so drags in the
    /// letterbox padding (or off the mini‑map entirely) still land inside the
    /// world. A zero‑area content rectangle maps everything to the world
    /// center.
    #[must_use]
    pub fn mini_to_world(&self, pt: Point) -> Point {
        if self.scale <= 0.0 {
            return self.world.center();
        }
        let content = self.content_rect;
        let lx = (pt.x - content.min_x()).clamp(0.0, content.width());
        let ly = (content.max_y() - pt.y).clamp(0.0, content.height());
        Point::new(
            self.world.min_x() + lx / self.scale,
            self.world.min_y() + ly / self.scale,
        )
    }

    /// World‑aligned grid lines, projected into display space.
    ///
    /// Vertical lines sit at every multiple of `spacing` within
    /// `[min_x, max_x]`, followed by horizontal lines at every multiple within
    /// `[min_y, max_y]`. Non‑positive or non‑finite spacing yields nothing.
    #[must_use]
    pub fn grid_lines(&self, spacing: f64) -> GridLines {
        let (x, y) = if spacing.is_finite() && spacing > 0.0 {
            (
                AxisLines::new(self.world.min_x(), self.world.max_x(), spacing),
                AxisLines::new(self.world.min_y(), self.world.max_y(), spacing),
            )
        } else {
            (AxisLines::EMPTY, AxisLines::EMPTY)
        };
        GridLines {
            projector: *self,
            spacing,
            x,
            y,
        }
    }

    /// Builds the drawing list for one mini‑map frame.
    ///
    /// The viewport box is taken from the presented (in‑flight) camera state
    /// so it moves smoothly with the main view.
    #[must_use]
    pub fn frame(&self, snapshot: &SceneSnapshot, config: &MiniMapConfig) -> MiniMapFrame {
        MiniMapFrame {
            content_rect: self.content_rect,
            marker: Circle::new(
                self.world_to_mini(snapshot.tracked),
                config.marker_radius.max(0.0),
            ),
            viewport: self.world_rect_to_mini_rect(snapshot.presented_world_rect()),
            focused: snapshot.camera.focused,
        }
    }
}

/// Iterator over mini‑map grid lines; see [`MiniMapProjector::grid_lines`].
#[derive(Clone, Debug)]
pub struct GridLines {
    projector: MiniMapProjector,
    spacing: f64,
    x: AxisLines,
    y: AxisLines,
}

/// Multiples of the grid spacing that fall inside one world axis.
#[derive(Clone, Copy, Debug)]
struct AxisLines {
    first: f64,
    index: u64,
    count: u64,
}

impl AxisLines {
    const EMPTY: Self = Self {
        first: 0.0,
        index: 0,
        count: 0,
    };

    fn new(min: f64, max: f64, spacing: f64) -> Self {
        let first = (min / spacing).ceil();
        let last = (max / spacing).floor();
        let span = last - first;
        // Spacings too fine to count in `f64` yield nothing.
        if !(span.is_finite() && span >= 0.0) {
            return Self::EMPTY;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "`span` is a finite, non-negative whole number; the cast saturates"
        )]
        let count = (span as u64).saturating_add(1);
        Self {
            first,
            index: 0,
            count,
        }
    }

    fn next(&mut self, spacing: f64) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let k = self.first + self.index as f64;
        self.index += 1;
        Some(k * spacing)
    }

    fn remaining(&self) -> u64 {
        self.count - self.index
    }
}

impl Iterator for GridLines {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let world = self.projector.world;
        if let Some(x) = self.x.next(self.spacing) {
            return Some(Line::new(
                self.projector.world_to_mini(Point::new(x, world.min_y())),
                self.projector.world_to_mini(Point::new(x, world.max_y())),
            ));
        }
        let y = self.y.next(self.spacing)?;
        Some(Line::new(
            self.projector.world_to_mini(Point::new(world.min_x(), y)),
            self.projector.world_to_mini(Point::new(world.max_x(), y)),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.x.remaining().saturating_add(self.y.remaining());
        match usize::try_from(n) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Everything an overlay needs to draw one mini‑map frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MiniMapFrame {
    /// Letterboxed content area, in display coordinates.
    pub content_rect: Rect,
    /// Tracked‑entity marker.
    pub marker: Circle,
    /// Camera's visible world rectangle, in display coordinates.
    pub viewport: Rect,
    /// Whether the camera follows the tracked entity; overlays typically
    /// draw the viewport box more prominently when it does.
    pub focused: bool,
}
