//! Generic mapping of PostgreSQL rows to JSON objects.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo};
use uuid::Uuid;

/// A row rendered as column name to JSON value, in select order.
pub type JsonRow = Map<String, Value>;

/// Converts a row into a JSON object keyed by column name.
///
/// # Errors
/// Returns [`sqlx::Error::ColumnDecode`] if a column value cannot be decoded
/// or its type has no JSON mapping.
pub fn row_to_json(row: &PgRow) -> Result<JsonRow, sqlx::Error> {
    let mut object = Map::with_capacity(row.len());
    for column in row.columns() {
        let value = column_value(row, column.ordinal(), column.type_info().name())?;
        object.insert(column.name().to_string(), value);
    }
    Ok(object)
}

fn column_value(row: &PgRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    let value = match type_name {
        "BOOL" => row.try_get::<Option<bool>, _>(index)?.map(Value::Bool),
        "INT2" => row.try_get::<Option<i16>, _>(index)?.map(Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(index)?.map(Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(index)?.map(Value::from),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)?
            .map(|v| Value::from(f64::from(v))),
        "FLOAT8" => row.try_get::<Option<f64>, _>(index)?.map(Value::from),
        "NUMERIC" => row
            .try_get::<Option<Decimal>, _>(index)?
            .map(|v| Value::String(v.to_string())),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(index)?.map(Value::String)
        }
        // Single-byte internal `"char"` type.
        "\"CHAR\"" => row
            .try_get::<Option<i8>, _>(index)?
            .map(|v| Value::String(char::from(v as u8).to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)?
            .map(|v| Value::String(format_timestamptz(&v))),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map(|v| Value::String(format_timestamp(&v))),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)?
            .map(|v| Value::String(v.to_string())),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(index)?
            .map(|v| Value::String(v.to_string())),
        "UUID" => row
            .try_get::<Option<Uuid>, _>(index)?
            .map(|v| Value::String(v.to_string())),
        other => return Err(unsupported_type(index, other)),
    };
    Ok(value.unwrap_or(Value::Null))
}

/// RFC 3339 with a `Z` suffix and only as many fractional digits as needed.
fn format_timestamptz(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

fn unsupported_type(index: usize, type_name: &str) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: format!("unsupported column type {type_name}").into(),
    }
}
