use crate::{
    codec::{FromSql, SqlType, ToSql},
    error::*,
    value::{Point, ScanValue},
};

/// A point column that may hold SQL NULL.
///
/// "No location" is carried by the `valid` flag rather than a sentinel
/// coordinate, so `(0, 0)` stays a legitimate position. When `valid` is
/// false the embedded point is unspecified and must not be read.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NullPoint {
    pub point: Point,
    pub valid: bool,
}

impl NullPoint {
    pub fn new(point: Point) -> Self {
        Self { point, valid: true }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

impl FromSql for NullPoint {
    /// Lenient by contract, unlike [`Point::from_sql`]: a NULL column comes
    /// back as `valid: false` without touching the inner decoder, and an
    /// inner decode error is swallowed into `valid: false` as well. A broken
    /// optional location degrades to "no location" instead of failing the
    /// whole row read.
    fn from_sql(value: ScanValue) -> Result<Self> {
        if let ScanValue::Null = value {
            return Ok(Self::none());
        }
        match Point::from_sql(value) {
            Ok(point) => Ok(Self::new(point)),
            Err(_) => Ok(Self::none()),
        }
    }
}

impl ToSql for NullPoint {
    fn to_sql(&self) -> ScanValue {
        if !self.valid {
            return ScanValue::Null;
        }
        self.point.to_sql()
    }
}

impl SqlType for NullPoint {
    fn sql_type() -> &'static str {
        Point::sql_type()
    }
}

impl From<Point> for NullPoint {
    fn from(point: Point) -> Self {
        Self::new(point)
    }
}

impl From<Option<Point>> for NullPoint {
    fn from(point: Option<Point>) -> Self {
        match point {
            Some(point) => Self::new(point),
            None => Self::none(),
        }
    }
}

impl From<NullPoint> for Option<Point> {
    fn from(null_point: NullPoint) -> Self {
        if null_point.valid {
            Some(null_point.point)
        } else {
            None
        }
    }
}
