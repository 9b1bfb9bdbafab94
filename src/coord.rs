use bevy::math::{DVec2, Vec2};
use std::fmt;

#[derive(Debug)]
pub struct CoordError {
    pub msg: String,
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for CoordError {}

/// Geographic position in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordError {
                msg: format!("Invalid latitude: {latitude:?}"),
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordError {
                msg: format!("Invalid longitude: {longitude:?}"),
            });
        }
        Ok(Coordinate {
            longitude,
            latitude,
        })
    }

    /// `(longitude, latitude)`, i.e. canvas x then y
    pub fn lon_lat(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }
}

// Maps a value from one range to another
fn map((in_min, in_max): (f64, f64), (out_min, out_max): (f64, f64), value: f64) -> f64 {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// Equirectangular mapping from world degrees onto a canvas of `width` x `height` pixels.
///
/// Longitude spans the canvas horizontally and latitude vertically, both linearly.
/// No distortion correction is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldFrame {
    pub width: f64,
    pub height: f64,
    pub lon_range: (f64, f64),
    pub lat_range: (f64, f64),
}

impl WorldFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            lon_range: (-180.0, 180.0),
            lat_range: (-90.0, 90.0),
        }
    }

    /// Pixel position with the origin at the top-left corner and y growing downwards
    #[cfg(test)]
    pub fn to_canvas(&self, point: DVec2) -> DVec2 {
        let (lat_min, lat_max) = self.lat_range;
        DVec2::new(
            map(self.lon_range, (0.0, self.width), point.x),
            map((lat_max, lat_min), (0.0, self.height), point.y),
        )
    }

    /// Translation for a 2D camera centered on the canvas, y up
    pub fn to_translation(&self, point: DVec2) -> Vec2 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Vec2::new(
            map(self.lon_range, (-half_w, half_w), point.x) as f32,
            map(self.lat_range, (-half_h, half_h), point.y) as f32,
        )
    }

    pub fn pixels_per_degree(&self) -> DVec2 {
        DVec2::new(
            self.width / (self.lon_range.1 - self.lon_range.0),
            self.height / (self.lat_range.1 - self.lat_range.0),
        )
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn frame() -> WorldFrame {
        WorldFrame::new(720, 360)
    }

    fn assert_close(actual: DVec2, expected: DVec2) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_coordinate_from_degrees_boundary_values() {
        assert!(Coordinate::from_degrees(90.0, 180.0).is_ok());
        assert!(Coordinate::from_degrees(-90.0, -180.0).is_ok());
        assert!(Coordinate::from_degrees(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_coordinate_from_degrees_invalid() {
        assert!(Coordinate::from_degrees(91.0, 0.0).is_err());
        assert!(Coordinate::from_degrees(-91.0, 0.0).is_err());
        assert!(Coordinate::from_degrees(0.0, 181.0).is_err());
        let err = Coordinate::from_degrees(0.0, -181.0).unwrap_err();
        assert!(err.to_string().contains("-181"));
    }

    #[test]
    fn test_lon_lat_is_longitude_first() {
        let coord = Coordinate::from_degrees(10.0, 20.0).unwrap();
        assert_eq!(coord.lon_lat(), (20.0, 10.0));
    }

    #[test]
    fn test_canvas_edges() {
        let f = frame();
        assert_close(f.to_canvas(DVec2::new(-180.0, 90.0)), DVec2::new(0.0, 0.0));
        assert_close(f.to_canvas(DVec2::new(180.0, 90.0)), DVec2::new(720.0, 0.0));
        assert_close(f.to_canvas(DVec2::new(-180.0, -90.0)), DVec2::new(0.0, 360.0));
        assert_close(f.to_canvas(DVec2::new(180.0, -90.0)), DVec2::new(720.0, 360.0));
    }

    #[test]
    fn test_canvas_center() {
        assert_close(frame().to_canvas(DVec2::ZERO), DVec2::new(360.0, 180.0));
    }

    #[test]
    fn test_translation_edges_and_center() {
        let f = frame();
        assert_eq!(f.to_translation(DVec2::new(-180.0, 0.0)), Vec2::new(-360.0, 0.0));
        assert_eq!(f.to_translation(DVec2::new(180.0, 0.0)), Vec2::new(360.0, 0.0));
        assert_eq!(f.to_translation(DVec2::new(0.0, -90.0)), Vec2::new(0.0, -180.0));
        assert_eq!(f.to_translation(DVec2::new(0.0, 90.0)), Vec2::new(0.0, 180.0));
        assert_eq!(f.to_translation(DVec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_pixels_per_degree() {
        assert_close(frame().pixels_per_degree(), DVec2::new(2.0, 2.0));
    }
}
