pub mod postgres;

pub use postgres::PostgresAccountDirectory;
