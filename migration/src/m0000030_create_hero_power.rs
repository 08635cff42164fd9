use sea_orm_migration::prelude::*;

use crate::{m0000010_create_hero::Hero, m0000020_create_power::Power};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroPower::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeroPower::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // one of "Strong", "Weak", "Average", checked by the application
                    .col(ColumnDef::new(HeroPower::Strength).string().not_null())
                    .col(ColumnDef::new(HeroPower::HeroId).integer().not_null())
                    .col(ColumnDef::new(HeroPower::PowerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from_col(HeroPower::HeroId)
                            .to(Hero::Table, Hero::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from_col(HeroPower::PowerId)
                            .to(Power::Table, Power::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(HeroPower::Table)
                    .name(INDEX_BY_HERO)
                    .if_not_exists()
                    .col(HeroPower::HeroId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(HeroPower::Table)
                    .name(INDEX_BY_POWER)
                    .if_not_exists()
                    .col(HeroPower::PowerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [INDEX_BY_POWER, INDEX_BY_HERO] {
            manager
                .drop_index(
                    Index::drop()
                        .table(HeroPower::Table)
                        .name(name)
                        .if_exists()
                        .to_owned(),
                )
                .await?;
        }
        manager
            .drop_table(Table::drop().table(HeroPower::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

pub const INDEX_BY_HERO: &str = "by_hero_power_hero_id";
pub const INDEX_BY_POWER: &str = "by_hero_power_power_id";

#[derive(DeriveIden)]
pub enum HeroPower {
    Table,
    Id,
    Strength,
    HeroId,
    PowerId,
}
