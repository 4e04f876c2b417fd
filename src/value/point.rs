use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
    codec::{get_byte_order, get_f64, get_u64, Expr, FromSql, SqlType, ToSql},
    error::*,
    value::ScanValue,
};

pub(crate) const SRID_WGS84: u32 = 4326;

/// A 2-D geographic point, longitude and latitude in degrees (WGS84).
///
/// Every serialized form carries SRID 4326 implicitly. The type is a plain
/// value: copyable, immutable once built, no identity beyond its coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lng: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Builds a point from decimal text coordinates, as submitted in request
    /// payloads.
    pub fn parse(lng: &str, lat: &str) -> Result<Self> {
        let lng = lng
            .parse()
            .map_err(|_| Error::InvalidCoordinate(lng.to_string()))?;
        let lat = lat
            .parse()
            .map_err(|_| Error::InvalidCoordinate(lat.to_string()))?;
        Ok(Self { lng, lat })
    }

    /// Decodes a point from raw WKB bytes: one byte-order flag byte, an
    /// 8-byte geometry tag, then two f64 coordinates under that byte order.
    ///
    /// The tag field is consumed but not interpreted. Every column this crate
    /// scans holds a single 2-D point, and on SRID-flagged streams the field
    /// folds the type word and the SRID word together, so its width (not its
    /// value) is what keeps the coordinate reads aligned. Trailing bytes are
    /// left unread.
    fn from_wkb(mut bytes: Bytes) -> Result<Self> {
        let byte_order = get_byte_order(&mut bytes)?;
        get_u64(&mut bytes, byte_order)?;
        let lng = get_f64(&mut bytes, byte_order)?;
        let lat = get_f64(&mut bytes, byte_order)?;
        Ok(Self { lng, lat })
    }
}

/// EWKT rendering: `SRID=4326;POINT(<lng> <lat>)`, longitude first.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SRID={};POINT({} {})", SRID_WGS84, self.lng, self.lat)
    }
}

impl FromSql for Point {
    fn from_sql(value: ScanValue) -> Result<Self> {
        match value {
            ScanValue::Text(hex_wkb) => {
                let raw = hex::decode(hex_wkb)?;
                Self::from_wkb(Bytes::from(raw))
            }
            other => Err(Error::TypeMismatch(other)),
        }
    }
}

impl ToSql for Point {
    fn to_sql(&self) -> ScanValue {
        ScanValue::Text(self.to_string())
    }

    /// INSERT/UPDATE expression: `ST_PointFromText(?, 4326)` with a single
    /// `POINT(<lat> <lng>)` argument. Note the argument renders latitude
    /// before longitude, unlike [`Display`]; downstream consumers depend on
    /// each order, so the two paths stay separate.
    fn to_expr(&self) -> Expr {
        Expr {
            sql: "ST_PointFromText(?, 4326)",
            vars: vec![ScanValue::Text(format!(
                "POINT({} {})",
                self.lat, self.lng
            ))],
        }
    }
}

impl SqlType for Point {
    fn sql_type() -> &'static str {
        "geometry(point, 4326)"
    }
}

#[cfg(test)]
mod tests {
    use bytes::{BufMut, BytesMut};

    use crate::codec::{BYTE_ORDER_BIG, BYTE_ORDER_LITTLE};

    use super::*;

    const SF_LNG: f64 = -122.4194;
    const SF_LAT: f64 = 37.7749;

    fn wkb_hex(byte_order: u8, lng: f64, lat: f64) -> String {
        let mut bytes = BytesMut::with_capacity(25);
        bytes.put_u8(byte_order);
        if byte_order == BYTE_ORDER_BIG {
            bytes.put_u64(1);
            bytes.put_f64(lng);
            bytes.put_f64(lat);
        } else {
            bytes.put_u64_le(1);
            bytes.put_f64_le(lng);
            bytes.put_f64_le(lat);
        }
        hex::encode(&bytes)
    }

    #[test]
    fn display_is_ewkt_lng_first() {
        let point = Point::new(SF_LNG, SF_LAT);
        assert_eq!(point.to_string(), "SRID=4326;POINT(-122.4194 37.7749)");
    }

    #[test]
    fn to_sql_is_ewkt_text() {
        let point = Point::new(SF_LNG, SF_LAT);
        assert_eq!(
            point.to_sql(),
            ScanValue::Text(String::from("SRID=4326;POINT(-122.4194 37.7749)"))
        );
    }

    #[test]
    fn to_expr_is_lat_first() {
        let expr = Point::new(SF_LNG, SF_LAT).to_expr();
        assert_eq!(expr.sql, "ST_PointFromText(?, 4326)");
        assert_eq!(
            expr.vars,
            vec![ScanValue::Text(String::from("POINT(37.7749 -122.4194)"))]
        );
    }

    #[test]
    fn from_sql_little_endian() {
        let value = ScanValue::Text(wkb_hex(BYTE_ORDER_LITTLE, SF_LNG, SF_LAT));
        let point = Point::from_sql(value).unwrap();
        assert_eq!(point.lng.to_bits(), SF_LNG.to_bits());
        assert_eq!(point.lat.to_bits(), SF_LAT.to_bits());
    }

    #[test]
    fn from_sql_big_endian() {
        let value = ScanValue::Text(wkb_hex(BYTE_ORDER_BIG, SF_LNG, SF_LAT));
        let point = Point::from_sql(value).unwrap();
        assert_eq!(point, Point::new(SF_LNG, SF_LAT));
    }

    #[test]
    fn from_sql_hex_literal() {
        // flag 01, tag 1, lng 1.0, lat 2.0, all little-endian
        let hex_wkb = "010100000000000000000000000000f03f0000000000000040";
        let point = Point::from_sql(ScanValue::from(hex_wkb)).unwrap();
        assert_eq!(point, Point::new(1.0, 2.0));
    }

    #[test]
    fn from_sql_ignores_trailing_bytes() {
        let mut hex_wkb = wkb_hex(BYTE_ORDER_LITTLE, SF_LNG, SF_LAT);
        hex_wkb.push_str("deadbeef");
        let point = Point::from_sql(ScanValue::Text(hex_wkb)).unwrap();
        assert_eq!(point, Point::new(SF_LNG, SF_LAT));
    }

    #[test]
    fn from_sql_rejects_non_hex() {
        let err = Point::from_sql(ScanValue::from("zz17")).unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding(_)));
    }

    #[test]
    fn from_sql_rejects_odd_length_hex() {
        let err = Point::from_sql(ScanValue::from("abc")).unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding(_)));
    }

    #[test]
    fn from_sql_rejects_empty_input() {
        let err = Point::from_sql(ScanValue::from("")).unwrap_err();
        assert!(matches!(err, Error::TruncatedInput(1, 0)));
    }

    #[test]
    fn from_sql_rejects_truncated_buffer() {
        // flag plus a single tag byte
        let err = Point::from_sql(ScanValue::from("0101")).unwrap_err();
        assert!(matches!(err, Error::TruncatedInput(8, 1)));
    }

    #[test]
    fn from_sql_rejects_truncated_coordinates() {
        // flag, full tag, then only four coordinate bytes
        let err = Point::from_sql(ScanValue::from("010100000000000000000000f0")).unwrap_err();
        assert!(matches!(err, Error::TruncatedInput(8, 4)));
    }

    #[test]
    fn from_sql_rejects_unknown_byte_order() {
        let value = ScanValue::Text(wkb_hex(0x02, SF_LNG, SF_LAT));
        let err = Point::from_sql(value).unwrap_err();
        assert!(matches!(err, Error::UnsupportedByteOrder(2)));
    }

    #[test]
    fn from_sql_rejects_non_text_values() {
        for value in vec![
            ScanValue::Null,
            ScanValue::Boolean(true),
            ScanValue::Integer(7),
            ScanValue::Float(1.5),
            ScanValue::Bytes(vec![0x01]),
        ] {
            let err = Point::from_sql(value).unwrap_err();
            assert!(matches!(err, Error::TypeMismatch(_)));
        }
    }

    #[test]
    fn parse_coordinates() {
        let point = Point::parse("-122.4194", "37.7749").unwrap();
        assert_eq!(point, Point::new(SF_LNG, SF_LAT));

        let err = Point::parse("not-a-number", "37.7749").unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate(_)));
    }

    #[test]
    fn sql_type_descriptor() {
        assert_eq!(Point::sql_type(), "geometry(point, 4326)");
    }

    #[test]
    fn serializes_to_lng_lat_json() {
        let point = Point::new(SF_LNG, SF_LAT);
        assert_eq!(
            serde_json::to_string(&point).unwrap(),
            r#"{"lng":-122.4194,"lat":37.7749}"#
        );
        let back: Point = serde_json::from_str(r#"{"lng":-122.4194,"lat":37.7749}"#).unwrap();
        assert_eq!(back, point);
    }
}
