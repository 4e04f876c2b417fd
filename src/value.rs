pub use null_point::NullPoint;
pub use point::Point;

pub(crate) mod conversions;
pub(crate) mod null_point;
pub(crate) mod point;

/// A raw column value as exchanged with the database driver.
///
/// Inbound, this is whatever the driver scanned out of a result-set column;
/// spatial columns arrive as [`ScanValue::Text`] holding hex-encoded WKB.
/// Outbound, [`crate::ToSql`] implementations produce the variant the driver
/// should store, [`ScanValue::Null`] for SQL NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}
