use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use sqlx_migrator::{Migrate, Plan};

const TABLES: [&str; 4] = ["zoos", "species", "animals", "zoos_animals"];

#[tokio::test]
async fn sqlite_apply_creates_every_table() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("apply_creates_every_table").await?;

    apply(&pool).await?;

    for table in TABLES {
        assert!(table_exists(&pool, table).await?, "{table} missing");
    }

    Ok(())
}

#[tokio::test]
async fn sqlite_apply_then_revert_leaves_no_tables() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("apply_then_revert").await?;

    apply(&pool).await?;
    revert(&pool).await?;

    for table in TABLES {
        assert!(!table_exists(&pool, table).await?, "{table} still present");
    }

    Ok(())
}

#[tokio::test]
async fn sqlite_revert_without_apply_is_safe() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("revert_without_apply").await?;

    revert(&pool).await?;
    revert(&pool).await?;

    Ok(())
}

#[tokio::test]
async fn sqlite_revert_tolerates_partial_teardown() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("revert_partial_teardown").await?;

    apply(&pool).await?;
    sqlx::query("DROP TABLE zoos_animals").execute(&pool).await?;

    revert(&pool).await?;

    for table in TABLES {
        assert!(!table_exists(&pool, table).await?, "{table} still present");
    }

    Ok(())
}

#[tokio::test]
async fn sqlite_rejects_animal_with_unknown_species() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("rejects_unknown_species").await?;

    apply(&pool).await?;

    let result = sqlx::query("INSERT INTO animals (name, species_id) VALUES ('Leo', 999)")
        .execute(&pool)
        .await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn sqlite_species_delete_cascades_two_levels() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("species_delete_cascades").await?;

    apply(&pool).await?;
    seed_residency(&pool).await?;

    sqlx::query("DELETE FROM species WHERE id = 1")
        .execute(&pool)
        .await?;

    assert_eq!(count(&pool, "animals").await?, 0);
    assert_eq!(count(&pool, "zoos_animals").await?, 0);
    assert_eq!(count(&pool, "zoos").await?, 1);

    Ok(())
}

#[tokio::test]
async fn sqlite_species_update_cascades_into_animals() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("species_update_cascades").await?;

    apply(&pool).await?;
    seed_residency(&pool).await?;

    sqlx::query("UPDATE species SET id = 7 WHERE id = 1")
        .execute(&pool)
        .await?;

    let species_id: i64 = sqlx::query_scalar("SELECT species_id FROM animals WHERE id = 5")
        .fetch_one(&pool)
        .await?;

    assert_eq!(species_id, 7);

    Ok(())
}

#[tokio::test]
async fn sqlite_rejects_duplicate_residency_pair() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("rejects_duplicate_residency").await?;

    apply(&pool).await?;
    seed_residency(&pool).await?;

    let result = sqlx::query(
        "INSERT INTO zoos_animals (zoo_id, animal_id, from_date, to_date)
         VALUES (2, 5, '2021-06-01', NULL)",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn sqlite_rejects_duplicate_zoo_address() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("rejects_duplicate_address").await?;

    apply(&pool).await?;

    sqlx::query("INSERT INTO zoos (name, address) VALUES ('City Zoo', '1 Zoo Way')")
        .execute(&pool)
        .await?;

    let result = sqlx::query("INSERT INTO zoos (name, address) VALUES ('Other Zoo', '1 Zoo Way')")
        .execute(&pool)
        .await;

    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn sqlite_rejects_duplicate_species_name() -> anyhow::Result<()> {
    let pool = create_sqlite_pool("rejects_duplicate_species").await?;

    apply(&pool).await?;

    sqlx::query("INSERT INTO species (name) VALUES ('Lion')")
        .execute(&pool)
        .await?;

    let result = sqlx::query("INSERT INTO species (name) VALUES ('Lion')")
        .execute(&pool)
        .await;

    assert!(result.is_err());

    Ok(())
}

async fn apply(pool: &SqlitePool) -> anyhow::Result<()> {
    let migrator = menagerie_sql_migrator::new::<sqlx::Sqlite>()?;
    let mut conn = pool.acquire().await?;
    migrator.run(&mut *conn, &Plan::apply_all()).await?;

    Ok(())
}

async fn revert(pool: &SqlitePool) -> anyhow::Result<()> {
    let migrator = menagerie_sql_migrator::new::<sqlx::Sqlite>()?;
    let mut conn = pool.acquire().await?;
    migrator.run(&mut *conn, &Plan::revert_all()).await?;

    Ok(())
}

async fn seed_residency(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO zoos (id, name, address) VALUES (2, 'City Zoo', '1 Zoo Way')")
        .execute(pool)
        .await?;
    sqlx::query("INSERT INTO species (id, name) VALUES (1, 'Lion')")
        .execute(pool)
        .await?;
    sqlx::query("INSERT INTO animals (id, name, species_id) VALUES (5, 'Leo', 1)")
        .execute(pool)
        .await?;
    sqlx::query(
        "INSERT INTO zoos_animals (zoo_id, animal_id, from_date, to_date)
         VALUES (2, 5, '2020-01-01', NULL)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn table_exists(pool: &SqlitePool, table: &str) -> anyhow::Result<bool> {
    let found: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(table)
            .fetch_one(pool)
            .await?;

    Ok(found > 0)
}

async fn count(pool: &SqlitePool, table: &str) -> anyhow::Result<i64> {
    let statement = format!("SELECT COUNT(*) FROM {table}");
    let count: i64 = sqlx::query_scalar(&statement).fetch_one(pool).await?;

    Ok(count)
}

async fn create_sqlite_pool(key: impl Into<String>) -> anyhow::Result<SqlitePool> {
    let key = key.into();

    std::fs::create_dir_all("../target/tmp")?;
    let path = format!("../target/tmp/test_migrator_{key}.db");
    let _ = std::fs::remove_file(&path);

    // foreign_keys is per-connection in SQLite; setting it on the connect
    // options covers every connection the pool opens.
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{path}"))?
        .create_if_missing(true)
        .foreign_keys(true);

    Ok(SqlitePoolOptions::new().connect_with(options).await?)
}
