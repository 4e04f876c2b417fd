use std::mem;

use bytes::Buf;

use crate::{error::*, ScanValue};

pub(crate) const BYTE_ORDER_BIG: u8 = 0;
pub(crate) const BYTE_ORDER_LITTLE: u8 = 1;

/// Conversion from a raw driver column value into a typed value.
///
/// The strict counterpart to a driver's row-scanning hook: implementations
/// must surface the first decode error rather than produce a partial value.
pub trait FromSql: Sized {
    fn from_sql(value: ScanValue) -> Result<Self>;
}

/// Conversion from a typed value into what the driver stores.
pub trait ToSql {
    /// A driver-storable scalar for generic value contexts.
    fn to_sql(&self) -> ScanValue;

    /// The expression contributed when a query builder assembles an
    /// INSERT or UPDATE. Defaults to binding the scalar form directly.
    fn to_expr(&self) -> Expr {
        Expr {
            sql: "?",
            vars: vec![self.to_sql()],
        }
    }
}

/// Declared column type, for schema provisioning.
pub trait SqlType {
    fn sql_type() -> &'static str;
}

/// A SQL fragment template paired with its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub sql: &'static str,
    pub vars: Vec<ScanValue>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ByteOrder {
    Big,
    Little,
}

/// Reads the leading WKB byte-order flag and resolves it.
pub(crate) fn get_byte_order(bytes: &mut impl Buf) -> Result<ByteOrder> {
    if bytes.remaining() < mem::size_of::<u8>() {
        return Err(Error::TruncatedInput(
            mem::size_of::<u8>(),
            bytes.remaining(),
        ));
    }
    match bytes.get_u8() {
        BYTE_ORDER_BIG => Ok(ByteOrder::Big),
        BYTE_ORDER_LITTLE => Ok(ByteOrder::Little),
        flag => Err(Error::UnsupportedByteOrder(flag)),
    }
}

pub(crate) fn get_u64(bytes: &mut impl Buf, byte_order: ByteOrder) -> Result<u64> {
    if bytes.remaining() < mem::size_of::<u64>() {
        return Err(Error::TruncatedInput(
            mem::size_of::<u64>(),
            bytes.remaining(),
        ));
    }
    match byte_order {
        ByteOrder::Big => Ok(bytes.get_u64()),
        ByteOrder::Little => Ok(bytes.get_u64_le()),
    }
}

pub(crate) fn get_f64(bytes: &mut impl Buf, byte_order: ByteOrder) -> Result<f64> {
    if bytes.remaining() < mem::size_of::<f64>() {
        return Err(Error::TruncatedInput(
            mem::size_of::<f64>(),
            bytes.remaining(),
        ));
    }
    match byte_order {
        ByteOrder::Big => Ok(bytes.get_f64()),
        ByteOrder::Little => Ok(bytes.get_f64_le()),
    }
}
