//! Planar boundaries that constrain point sampling.
//!
//! A [`Boundary`] wraps a [`geo::MultiPolygon`] (holes allowed) together with an optional
//! EPSG code describing its coordinate reference system. The rest of the crate only needs
//! three capabilities from it: closed point containment, the bounding box, and the area.
use geo::{
    Area, BoundingRect, Centroid, Coord, CoordsIter, Intersects, MultiPolygon, Polygon, Rect,
};
use glam::DVec2;

use crate::error::{Error, Result};

/// EPSG code of WGS 84 longitude/latitude coordinates.
pub const EPSG_WGS84: u32 = 4326;

/// Axis-aligned bounding box of a boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns `(min_x, min_y, max_x, max_y)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min.x, self.min.y, self.max.x, self.max.y)
    }
}

/// Immutable planar region plus its coordinate reference identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    region: MultiPolygon<f64>,
    bbox: BoundingBox,
    area: f64,
    crs: Option<u32>,
}

impl Boundary {
    /// Create a boundary from a polygon or multipolygon.
    ///
    /// Fails with [`Error::InvalidInput`] if the region has no polygons, no exterior
    /// coordinates, or any non-finite coordinate.
    pub fn new(region: impl Into<MultiPolygon<f64>>) -> Result<Self> {
        let region = region.into();
        if region.0.is_empty() {
            return Err(Error::InvalidInput("boundary has no polygons".into()));
        }
        if region
            .coords_iter()
            .any(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(Error::InvalidInput(
                "boundary contains non-finite coordinates".into(),
            ));
        }
        let rect = region
            .bounding_rect()
            .ok_or_else(|| Error::InvalidInput("boundary has no coordinates".into()))?;
        let bbox = BoundingBox {
            min: DVec2::new(rect.min().x, rect.min().y),
            max: DVec2::new(rect.max().x, rect.max().y),
        };
        let area = region.unsigned_area();

        Ok(Self {
            region,
            bbox,
            area,
            crs: None,
        })
    }

    /// Axis-aligned rectangle spanning `a` and `b` (corner order does not matter).
    pub fn rectangle(a: DVec2, b: DVec2) -> Result<Self> {
        let rect = Rect::new(Coord { x: a.x, y: a.y }, Coord { x: b.x, y: b.y });
        Self::new(rect.to_polygon())
    }

    /// Square with the given side length and its lower-left corner at the origin.
    pub fn square(side: f64) -> Result<Self> {
        Self::rectangle(DVec2::ZERO, DVec2::splat(side))
    }

    /// Assign a coordinate reference system (EPSG code), builder-style.
    pub fn with_crs(mut self, epsg: u32) -> Self {
        self.crs = Some(epsg);
        self
    }

    pub fn crs(&self) -> Option<u32> {
        self.crs
    }

    pub fn region(&self) -> &MultiPolygon<f64> {
        &self.region
    }

    pub fn polygons(&self) -> &[Polygon<f64>] {
        &self.region.0
    }

    /// Whether `point` lies inside the region or on its edge.
    pub fn contains(&self, point: DVec2) -> bool {
        if point.x < self.bbox.min.x
            || point.x > self.bbox.max.x
            || point.y < self.bbox.min.y
            || point.y > self.bbox.max.y
        {
            return false;
        }
        self.region.intersects(&Coord {
            x: point.x,
            y: point.y,
        })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Unsigned area of the region (holes subtracted).
    pub fn area(&self) -> f64 {
        self.area
    }

    /// A boundary with zero (or non-finite) area cannot host sampled points.
    pub fn is_degenerate(&self) -> bool {
        !(self.area.is_finite() && self.area > 0.0)
    }

    /// Suggest a projected reference system for distance computations.
    ///
    /// An assigned projected CRS is returned unchanged and an unset CRS yields `None`. For
    /// WGS 84 longitude/latitude boundaries the UTM zone containing the region's centroid
    /// is suggested: EPSG 326xx north of the equator, 327xx south.
    pub fn suggested_crs(&self) -> Option<u32> {
        match self.crs {
            None => return None,
            Some(code) if code != EPSG_WGS84 => return Some(code),
            Some(_) => {}
        }

        let in_range = self.bbox.min.x >= -180.0
            && self.bbox.max.x <= 180.0
            && self.bbox.min.y >= -90.0
            && self.bbox.max.y <= 90.0;
        if !in_range {
            return None;
        }

        let centroid = self.region.centroid()?;
        let zone = (((centroid.x() + 180.0) / 6.0).floor() as i64 + 1).clamp(1, 60) as u32;
        if centroid.y() >= 0.0 {
            Some(32600 + zone)
        } else {
            Some(32700 + zone)
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::{polygon, LineString};

    use super::*;

    #[test]
    fn square_reports_area_and_extent() {
        let b = Boundary::square(10.0).unwrap();
        assert!((b.area() - 100.0).abs() < 1e-12);
        assert_eq!(b.bounding_box().as_tuple(), (0.0, 0.0, 10.0, 10.0));
        assert!(!b.is_degenerate());
        assert_eq!(b.crs(), None);
    }

    #[test]
    fn contains_is_closed_on_the_edge() {
        let b = Boundary::square(1.0).unwrap();
        assert!(b.contains(DVec2::new(0.5, 0.5)));
        assert!(b.contains(DVec2::new(0.0, 0.5)));
        assert!(b.contains(DVec2::new(1.0, 1.0)));
        assert!(!b.contains(DVec2::new(1.0001, 0.5)));
        assert!(!b.contains(DVec2::new(-0.5, -0.5)));
    }

    #[test]
    fn holes_are_excluded() {
        let exterior = LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let hole = LineString::from(vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]);
        let b = Boundary::new(Polygon::new(exterior, vec![hole])).unwrap();
        assert!((b.area() - 96.0).abs() < 1e-9);
        assert!(!b.contains(DVec2::new(5.0, 5.0)));
        assert!(b.contains(DVec2::new(1.0, 1.0)));
    }

    #[test]
    fn empty_region_is_rejected() {
        let err = Boundary::new(MultiPolygon::<f64>::new(vec![])).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: f64::NAN, y: 0.0), (x: 1.0, y: 1.0)];
        assert!(matches!(
            Boundary::new(poly).unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn zero_width_rectangle_is_degenerate() {
        let b = Boundary::rectangle(DVec2::new(0.0, 0.0), DVec2::new(0.0, 5.0)).unwrap();
        assert!(b.is_degenerate());
    }

    #[test]
    fn suggested_crs_picks_utm_zone_for_lon_lat() {
        // Around Berlin (13.4E, 52.5N) -> UTM 33N.
        let b = Boundary::rectangle(DVec2::new(13.0, 52.0), DVec2::new(13.8, 52.8))
            .unwrap()
            .with_crs(EPSG_WGS84);
        assert_eq!(b.suggested_crs(), Some(32633));

        // Around Sydney (151.2E, 33.9S) -> UTM 56S.
        let b = Boundary::rectangle(DVec2::new(151.0, -34.2), DVec2::new(151.4, -33.6))
            .unwrap()
            .with_crs(EPSG_WGS84);
        assert_eq!(b.suggested_crs(), Some(32756));
    }

    #[test]
    fn suggested_crs_needs_an_assigned_crs() {
        // Small planar extents look like lon/lat but carry no CRS.
        assert_eq!(Boundary::square(1.0).unwrap().suggested_crs(), None);

        let out_of_range = Boundary::square(500.0).unwrap().with_crs(EPSG_WGS84);
        assert_eq!(out_of_range.suggested_crs(), None);
    }

    #[test]
    fn suggested_crs_keeps_assigned_projection() {
        let b = Boundary::square(1000.0).unwrap().with_crs(3857);
        assert_eq!(b.suggested_crs(), Some(3857));

        let projected_unset = Boundary::square(5000.0).unwrap();
        assert_eq!(projected_unset.suggested_crs(), None);
    }
}
