//! SQL schema identifiers for the menagerie zoo registry.
//!
//! This crate holds the Sea-Query column identifiers for the menagerie schema.
//! It is the shared vocabulary between the migration crate
//! (`menagerie-sql-migrator`) and any query code built on top of the schema.
//!
//! # Schema
//!
//! The registry models which animals live in which zoos:
//!
//! - [`Zoo`] - the `zoos` table
//! - [`Species`] - the `species` table
//! - [`Animal`] - the `animals` table, each animal optionally belonging to a
//!   species
//! - [`ZooAnimal`] - the `zoos_animals` join table recording one residency
//!   interval per `(zoo, animal)` pair
//!
//! # Usage
//!
//! ```rust,ignore
//! use menagerie_sql::{Animal, Species};
//! use sea_query::{Query, SqliteQueryBuilder};
//!
//! let statement = Query::select()
//!     .columns([Animal::Id, Animal::Name])
//!     .from(Animal::Table)
//!     .to_string(SqliteQueryBuilder);
//! ```

mod sql;

pub use sql::*;
