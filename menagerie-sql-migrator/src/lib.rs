//! SQL database migrations for the menagerie zoo registry.
//!
//! This crate provides the database schema migrations for the menagerie
//! registry. It supports SQLite, MySQL, and PostgreSQL through feature flags.
//!
//! # Features
//!
//! - **`sqlite`** - Enables SQLite database support
//! - **`mysql`** - Enables MySQL database support
//! - **`postgres`** - Enables PostgreSQL database support
//!
//! All features are enabled by default. You can selectively enable only the
//! databases you need:
//!
//! ```toml
//! [dependencies]
//! menagerie-sql-migrator = { version = "0.1", default-features = false, features = ["postgres"] }
//! ```
//!
//! # Usage
//!
//! The main entry point is the [`new`] function, which creates a [`Migrator`]
//! instance configured with all menagerie migrations.
//!
//! ```rust,ignore
//! use sqlx_migrator::{Migrate, Plan};
//!
//! // Acquire a database connection
//! let mut conn = pool.acquire().await?;
//!
//! // Create the migrator for your database type
//! let migrator = menagerie_sql_migrator::new::<sqlx::Sqlite>()?;
//!
//! // Run all pending migrations
//! migrator.run(&mut *conn, &Plan::apply_all()).await?;
//!
//! // Or tear the schema back down
//! migrator.run(&mut *conn, &Plan::revert_all()).await?;
//! ```
//!
//! Migration failures are not recovered locally: the first failing statement
//! aborts the run and the error surfaces to the caller, which decides whether
//! to retry or roll back an enclosing transaction. Reverting is safe against a
//! partially-applied schema because every drop is guarded with `IF EXISTS`.
//!
//! # Database Schema
//!
//! After running all migrations, the database will contain:
//!
//! ## Zoos Table
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `id` | INTEGER | Surrogate key (auto-increment) |
//! | `name` | VARCHAR | Zoo name |
//! | `address` | VARCHAR | Postal address (unique) |
//!
//! ## Species Table
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `id` | INTEGER | Surrogate key (auto-increment) |
//! | `name` | VARCHAR | Species name (unique) |
//!
//! ## Animals Table
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `id` | INTEGER | Surrogate key (auto-increment) |
//! | `name` | VARCHAR | Animal name |
//! | `species_id` | INTEGER | Nullable FK to `species.id`, cascade on update and delete |
//!
//! ## Zoos-Animals Table
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `zoo_id` | INTEGER | FK to `zoos.id`, cascade on update and delete |
//! | `animal_id` | INTEGER | FK to `animals.id`, cascade on update and delete |
//! | `from_date` | DATE | Start of the residency interval |
//! | `to_date` | DATE | End of the residency interval |
//!
//! The primary key of `zoos_animals` is the composite `(zoo_id, animal_id)`.
//! Deletes cascade transitively: removing a species removes its animals, and
//! removing an animal removes its residency rows.

use sqlx_migrator::{Info, Migrator};

mod m0001;
mod plan;

pub use m0001::InitMigration;

/// Creates a new [`Migrator`] instance with all menagerie migrations registered.
///
/// The migrator is generic over the database type and works with SQLite, MySQL,
/// and PostgreSQL when the corresponding feature is enabled.
///
/// # Example
///
/// ```rust,ignore
/// use sqlx_migrator::{Migrate, Plan};
///
/// // For SQLite
/// let migrator = menagerie_sql_migrator::new::<sqlx::Sqlite>()?;
///
/// // For PostgreSQL
/// let migrator = menagerie_sql_migrator::new::<sqlx::Postgres>()?;
///
/// // Run migrations
/// migrator.run(&mut *conn, &Plan::apply_all()).await?;
/// ```
///
/// # Errors
///
/// Returns an error if migration registration fails.
pub fn new<DB: sqlx::Database>() -> Result<Migrator<DB>, sqlx_migrator::Error>
where
    InitMigration: sqlx_migrator::Migration<DB>,
{
    let mut migrator = Migrator::default();
    migrator.add_migration(Box::new(InitMigration))?;

    Ok(migrator)
}
