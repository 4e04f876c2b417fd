use crate::value::*;

// ----------------------- FROM -----------------------

impl From<bool> for ScanValue {
    fn from(value: bool) -> Self {
        ScanValue::Boolean(value)
    }
}

macro_rules! impl_from_int {
    ($($T:ty),+) => {
        $(
            impl From<$T> for $crate::ScanValue {
                fn from(value: $T) -> Self {
                    ScanValue::Integer(i64::from(value))
                }
            }
        )*
    };
}
impl_from_int!(i8, i16, i32, i64);

impl From<f64> for ScanValue {
    fn from(value: f64) -> Self {
        ScanValue::Float(value)
    }
}

impl From<&str> for ScanValue {
    fn from(value: &str) -> Self {
        ScanValue::Text(String::from(value))
    }
}

impl From<String> for ScanValue {
    fn from(value: String) -> Self {
        ScanValue::Text(value)
    }
}

impl From<Vec<u8>> for ScanValue {
    fn from(value: Vec<u8>) -> Self {
        ScanValue::Bytes(value)
    }
}

impl<T> From<Option<T>> for ScanValue
where
    T: Into<ScanValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => ScanValue::Null,
        }
    }
}

impl From<Point> for ScanValue {
    fn from(point: Point) -> Self {
        ScanValue::Text(point.to_string())
    }
}
