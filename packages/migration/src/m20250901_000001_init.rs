use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    IsActive,
    FirstName,
    LastName,
}

#[derive(Iden)]
enum Planets {
    Table,
    Id,
    Name,
    Climate,
    Population,
}

#[derive(Iden)]
enum People {
    Table,
    Id,
    Name,
    Gender,
    Height,
}

#[derive(Iden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PlanetId,
    PeopleId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Email).string_len(120).not_null())
                    .col(ColumnDef::new(Users::Password).string_len(80).not_null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::FirstName).string_len(120).null())
                    .col(ColumnDef::new(Users::LastName).string_len(120).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // planets
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Planets::Name).string_len(120).null())
                    .col(ColumnDef::new(Planets::Climate).string_len(120).null())
                    .col(ColumnDef::new(Planets::Population).string_len(120).null())
                    .to_owned(),
            )
            .await?;

        // people
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(People::Name).string_len(120).null())
                    .col(ColumnDef::new(People::Gender).string_len(50).null())
                    .col(ColumnDef::new(People::Height).string_len(50).null())
                    .to_owned(),
            )
            .await?;

        // favorites: planet_id / people_id are both nullable; the API always sets exactly one.
        // No foreign keys: favorites may reference ids that do not exist.
        // Planet/person deletes remove their favorites in the same transaction.
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).integer().not_null())
                    .col(ColumnDef::new(Favorites::PlanetId).integer().null())
                    .col(ColumnDef::new(Favorites::PeopleId).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_favorites_user_id")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_favorites_planet_id")
                    .table(Favorites::Table)
                    .col(Favorites::PlanetId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("ix_favorites_people_id")
                    .table(Favorites::Table)
                    .col(Favorites::PeopleId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_favorites_people_id")
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ix_favorites_planet_id")
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ix_favorites_user_id")
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ux_users_email")
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
