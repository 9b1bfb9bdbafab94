//! Drawing cursor and marker layout
//!
//! The cursor mirrors a turtle pen in world degrees: it has a position, a
//! heading measured counter-clockwise from east, a pen that can be lifted,
//! a pen color and a visibility flag for the station icon it carries.

use crate::config::{MarkerStyle, ReferenceLocation};
use bevy::math::DVec2;
use bevy::prelude::*;

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Cursor {
    pub position: DVec2,
    /// Degrees, 0 = east, 90 = north
    pub heading: f64,
    pub pen_down: bool,
    pub visible: bool,
    pub pen_color: Color,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
            pen_down: true,
            visible: true,
            pen_color: Color::BLACK,
        }
    }
}

impl Cursor {
    /// Cursor ready to carry the station icon: hidden, facing east, pen up.
    pub fn for_icon() -> Self {
        let mut cursor = Self::default();
        cursor.hide();
        cursor.set_heading(0.0);
        cursor.pen_up();
        cursor
    }

    pub fn goto(&mut self, position: DVec2) {
        self.position = position;
    }

    pub fn forward(&mut self, distance: f64) {
        let heading = self.heading.to_radians();
        self.position += DVec2::new(heading.cos(), heading.sin()) * distance;
    }

    pub fn set_heading(&mut self, degrees: f64) {
        self.heading = degrees.rem_euclid(360.0);
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn set_pen_color(&mut self, color: Color) {
        self.pen_color = color;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }
}

/// Where and how the reference location is drawn
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceMarker {
    pub dot_at: DVec2,
    pub dot_diameter: f32,
    pub dot_color: Color,
    pub label_at: DVec2,
    pub label: String,
    pub label_color: Color,
}

/// Walk the cursor through the reference marker: dot at the location, a short
/// step along the heading, then the label in the marker color.
pub fn mark_reference(
    cursor: &mut Cursor,
    reference: &ReferenceLocation,
    style: &MarkerStyle,
    label: impl Into<String>,
) -> ReferenceMarker {
    cursor.goto(DVec2::new(reference.longitude, reference.latitude));
    let dot_at = cursor.position;
    cursor.forward(style.label_offset);
    cursor.set_pen_color(style.label_color);

    ReferenceMarker {
        dot_at,
        dot_diameter: style.dot_diameter,
        dot_color: style.dot_color,
        label_at: cursor.position,
        label: label.into(),
        label_color: cursor.pen_color,
    }
}
