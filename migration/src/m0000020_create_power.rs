use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Power::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Power::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Power::Name).string().not_null())
                    .col(ColumnDef::new(Power::Description).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Power::Table)
                    .name(INDEX_BY_NAME)
                    .if_not_exists()
                    .unique()
                    .col(Power::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Power::Table)
                    .name(INDEX_BY_NAME)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Power::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

pub const INDEX_BY_NAME: &str = "by_power_name";

#[derive(DeriveIden)]
pub enum Power {
    Table,
    Id,
    Name,
    Description,
}
