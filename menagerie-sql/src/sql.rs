use sea_query::Iden;

/// Sea-Query identifiers for the `zoos` table.
///
/// Columns:
/// - `Id` - Surrogate key (auto-incrementing integer)
/// - `Name` - Zoo name
/// - `Address` - Postal address, unique across all zoos
#[derive(Iden, Clone)]
pub enum Zoo {
    /// The table name: `zoos`
    #[iden = "zoos"]
    Table,
    /// Surrogate key
    Id,
    /// Zoo name
    Name,
    /// Postal address (unique)
    Address,
}

/// Sea-Query identifiers for the `species` table.
///
/// Columns:
/// - `Id` - Surrogate key (auto-incrementing integer)
/// - `Name` - Species name, unique
#[derive(Iden, Clone)]
pub enum Species {
    /// The table name: `species`
    Table,
    /// Surrogate key
    Id,
    /// Species name (unique)
    Name,
}

/// Sea-Query identifiers for the `animals` table.
///
/// Each animal optionally references a row in `species`. The reference
/// cascades on both update and delete: renumbering a species id follows into
/// `SpeciesId`, and deleting a species deletes its animals.
#[derive(Iden, Clone)]
pub enum Animal {
    /// The table name: `animals`
    #[iden = "animals"]
    Table,
    /// Surrogate key
    Id,
    /// Animal name
    Name,
    /// Nullable foreign key to `species.id`
    SpeciesId,
}

/// Sea-Query identifiers for the `zoos_animals` join table.
///
/// Records one residency interval per `(zoo, animal)` pair. The pair of
/// foreign keys is the primary key; there is no surrogate key, so a duplicate
/// residency row is rejected by the engine.
#[derive(Iden, Clone)]
pub enum ZooAnimal {
    /// The table name: `zoos_animals`
    #[iden = "zoos_animals"]
    Table,
    /// Foreign key to `zoos.id`
    ZooId,
    /// Foreign key to `animals.id`
    AnimalId,
    /// Start of the residency interval
    FromDate,
    /// End of the residency interval
    ToDate,
}
