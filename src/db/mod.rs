//! Database module for PostgreSQL connection and queries.

mod items;
mod pool;
mod row;

#[cfg(test)]
pub(crate) mod test_support;

pub use items::DEFAULT_ITEMS_LIMIT;
pub use pool::DatabasePool;
pub use row::JsonRow;
