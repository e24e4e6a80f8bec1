//! Structural geometry values owned by features.
//!
//! Geometry here is a value type: cloning deep-copies every coordinate and
//! equality is structural (same variant, same coordinates in the same
//! order), never instance identity.

use std::fmt::{self, Write};

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(x: f64, y: f64) -> Coord {
        Coord { x, y }
    }
}

/// Geometry owned by a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coord),
    MultiPoint(Vec<Coord>),
    LineString(Vec<Coord>),
    /// The first ring is the exterior, the rest are holes.
    Polygon(Vec<Vec<Coord>>),
}

impl Geometry {
    /// Returns the display name of the geometry type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
        }
    }

    /// Writes a WKT-flavoured one-line dump, prefixed with the caller's
    /// indentation.
    pub fn dump_readable(&self, out: &mut dyn Write, prefix: &str) -> fmt::Result {
        match self {
            Geometry::Point(c) => writeln!(out, "{prefix}POINT ({} {})", c.x, c.y),
            Geometry::MultiPoint(coords) => {
                writeln!(out, "{prefix}MULTIPOINT ({})", coord_list(coords))
            }
            Geometry::LineString(coords) => {
                writeln!(out, "{prefix}LINESTRING ({})", coord_list(coords))
            }
            Geometry::Polygon(rings) => {
                let body: Vec<String> = rings.iter().map(|r| format!("({})", coord_list(r))).collect();
                writeln!(out, "{prefix}POLYGON ({})", body.join(", "))
            }
        }
    }
}

fn coord_list(coords: &[Coord]) -> String {
    let parts: Vec<String> = coords.iter().map(|c| format!("{} {}", c.x, c.y)).collect();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Geometry {
        Geometry::Polygon(vec![vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 1.0),
            Coord::new(0.0, 0.0),
        ]])
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(square(), square());
        assert_eq!(square().clone(), square());
        assert_ne!(
            Geometry::Point(Coord::new(1.0, 2.0)),
            Geometry::Point(Coord::new(2.0, 1.0))
        );
        assert_ne!(
            Geometry::Point(Coord::new(1.0, 2.0)),
            Geometry::MultiPoint(vec![Coord::new(1.0, 2.0)])
        );
    }

    #[test]
    fn test_dump_point() {
        let mut out = String::new();
        Geometry::Point(Coord::new(-120.5, 46.25))
            .dump_readable(&mut out, "  ")
            .unwrap();
        assert_eq!(out, "  POINT (-120.5 46.25)\n");
    }

    #[test]
    fn test_dump_linestring() {
        let mut out = String::new();
        Geometry::LineString(vec![Coord::new(0.0, 0.0), Coord::new(3.0, 4.0)])
            .dump_readable(&mut out, "")
            .unwrap();
        assert_eq!(out, "LINESTRING (0 0, 3 4)\n");
    }

    #[test]
    fn test_dump_polygon_with_hole() {
        let geometry = Geometry::Polygon(vec![
            vec![Coord::new(0.0, 0.0), Coord::new(4.0, 0.0), Coord::new(4.0, 4.0), Coord::new(0.0, 0.0)],
            vec![Coord::new(1.0, 1.0), Coord::new(2.0, 1.0), Coord::new(1.0, 1.0)],
        ]);
        let mut out = String::new();
        geometry.dump_readable(&mut out, "").unwrap();
        assert_eq!(out, "POLYGON ((0 0, 4 0, 4 4, 0 0), (1 1, 2 1, 1 1))\n");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Geometry::Point(Coord::new(0.0, 0.0)).type_name(), "Point");
        assert_eq!(square().type_name(), "Polygon");
    }
}
