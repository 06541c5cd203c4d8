//! Initial database schema migration.
//!
//! This module contains the first migration that creates the menagerie
//! registry schema.

mod animal;
mod species;
mod zoo;
mod zoo_animal;

use crate::plan::{self, SchemaTable};

/// Initial migration that creates the menagerie registry schema.
///
/// This migration creates the following tables, in an order derived from
/// their foreign-key dependencies (see the `plan` module):
///
/// ## Zoos Table
///
/// - `id` - Surrogate key (auto-increment)
/// - `name` - Zoo name
/// - `address` - Postal address, unique
///
/// ## Species Table
///
/// - `id` - Surrogate key (auto-increment)
/// - `name` - Species name, unique
///
/// ## Animals Table
///
/// - `id` - Surrogate key (auto-increment)
/// - `name` - Animal name
/// - `species_id` - Nullable foreign key to `species.id` with cascade on
///   update and delete
///
/// ## Zoos-Animals Table
///
/// - `zoo_id` / `animal_id` - Foreign keys to `zoos.id` and `animals.id`,
///   each with cascade on update and delete
/// - `from_date` / `to_date` - Residency interval
/// - Primary key: composite `(zoo_id, animal_id)`, no surrogate key
///
/// Applying this migration is not idempotent: the create statements carry no
/// `IF NOT EXISTS`, so re-running them against a populated database surfaces
/// the engine's duplicate-object error. Reverting is safe at any point
/// because every drop is guarded with `IF EXISTS`.
pub struct InitMigration;

fn operations<DB>() -> Vec<Box<dyn sqlx_migrator::Operation<DB>>>
where
    DB: sqlx::Database,
    zoo::create_table::Operation: sqlx_migrator::Operation<DB>,
    species::create_table::Operation: sqlx_migrator::Operation<DB>,
    animal::create_table::Operation: sqlx_migrator::Operation<DB>,
    zoo_animal::create_table::Operation: sqlx_migrator::Operation<DB>,
{
    let order = plan::creation_order();
    tracing::debug!(?order, "derived table creation order");

    order
        .into_iter()
        .map(|table| -> Box<dyn sqlx_migrator::Operation<DB>> {
            match table {
                SchemaTable::Zoos => Box::new(zoo::create_table::Operation),
                SchemaTable::Species => Box::new(species::create_table::Operation),
                SchemaTable::Animals => Box::new(animal::create_table::Operation),
                SchemaTable::ZoosAnimals => Box::new(zoo_animal::create_table::Operation),
            }
        })
        .collect()
}

#[cfg(feature = "sqlite")]
impl sqlx_migrator::Migration<sqlx::Sqlite> for InitMigration {
    fn app(&self) -> &str {
        "menagerie"
    }

    fn name(&self) -> &str {
        "init_migration"
    }

    fn parents(&self) -> Vec<Box<dyn sqlx_migrator::Migration<sqlx::Sqlite>>> {
        vec![]
    }

    fn operations(&self) -> Vec<Box<dyn sqlx_migrator::Operation<sqlx::Sqlite>>> {
        operations()
    }
}

#[cfg(feature = "mysql")]
impl sqlx_migrator::Migration<sqlx::MySql> for InitMigration {
    fn app(&self) -> &str {
        "menagerie"
    }

    fn name(&self) -> &str {
        "init_migration"
    }

    fn parents(&self) -> Vec<Box<dyn sqlx_migrator::Migration<sqlx::MySql>>> {
        vec![]
    }

    fn operations(&self) -> Vec<Box<dyn sqlx_migrator::Operation<sqlx::MySql>>> {
        operations()
    }
}

#[cfg(feature = "postgres")]
impl sqlx_migrator::Migration<sqlx::Postgres> for InitMigration {
    fn app(&self) -> &str {
        "menagerie"
    }

    fn name(&self) -> &str {
        "init_migration"
    }

    fn parents(&self) -> Vec<Box<dyn sqlx_migrator::Migration<sqlx::Postgres>>> {
        vec![]
    }

    fn operations(&self) -> Vec<Box<dyn sqlx_migrator::Operation<sqlx::Postgres>>> {
        operations()
    }
}
