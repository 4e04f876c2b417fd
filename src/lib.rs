//! Column-level codec for geographic point values stored in a spatial
//! database extension.
//!
//! The read path scans a hex-encoded WKB column value into a [`Point`]; the
//! write path renders a point either as an SRID-qualified EWKT string or as a
//! parameterized `ST_PointFromText` expression for query builders. A
//! [`NullPoint`] wrapper models nullable point columns without a sentinel
//! coordinate.

pub use codec::{Expr, FromSql, SqlType, ToSql};
pub use value::{NullPoint, Point, ScanValue};

pub mod error;

mod codec;
pub mod value;
