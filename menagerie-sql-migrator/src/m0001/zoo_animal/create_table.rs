use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use menagerie_sql::{Animal, Zoo, ZooAnimal};

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(ZooAnimal::Table)
        .col(ColumnDef::new(ZooAnimal::ZooId).integer().not_null())
        .col(ColumnDef::new(ZooAnimal::AnimalId).integer().not_null())
        .col(ColumnDef::new(ZooAnimal::FromDate).date())
        .col(ColumnDef::new(ZooAnimal::ToDate).date())
        .foreign_key(
            // Both references cascade so that a species delete, already
            // cascaded into animals, keeps propagating into this table
            // instead of failing on a dangling residency row.
            ForeignKey::create()
                .name("fk_zoos_animals_zoo_id")
                .from(ZooAnimal::Table, ZooAnimal::ZooId)
                .to(Zoo::Table, Zoo::Id)
                .on_update(ForeignKeyAction::Cascade)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_zoos_animals_animal_id")
                .from(ZooAnimal::Table, ZooAnimal::AnimalId)
                .to(Animal::Table, Animal::Id)
                .on_update(ForeignKeyAction::Cascade)
                .on_delete(ForeignKeyAction::Cascade),
        )
        // One residency interval per (zoo, animal) pair, no surrogate key.
        .primary_key(Index::create().col(ZooAnimal::ZooId).col(ZooAnimal::AnimalId))
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(ZooAnimal::Table).if_exists().to_owned()
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}

#[cfg(feature = "mysql")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::MySql> for Operation {
    async fn up(&self, connection: &mut sqlx::MySqlConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::MysqlQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::MySqlConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::MysqlQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}

#[cfg(feature = "postgres")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Postgres> for Operation {
    async fn up(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement().to_string(sea_query::PostgresQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::PostgresQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
