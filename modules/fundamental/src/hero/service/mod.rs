use crate::{
    graph::Graph,
    hero::model::{HeroDetails, HeroInput},
    serializer::{Kind, Serializer},
    validation::{validate_hero_name, validate_super_name},
    Error,
};
use heroes_common::db::Database;
use heroes_entity::{hero, hero_power};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};

pub struct HeroService {
    db: Database,
}

impl HeroService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all heroes, with their powers.
    pub async fn fetch_heroes(&self) -> Result<Vec<HeroDetails>, Error> {
        let graph = Graph::load(&self.db).await?;
        Ok(Serializer::new(&graph).heroes())
    }

    pub async fn fetch_hero(&self, id: i32) -> Result<Option<HeroDetails>, Error> {
        Ok(Graph::around_hero(id, &self.db)
            .await?
            .and_then(|graph| Serializer::new(&graph).hero(id)))
    }

    pub async fn create_hero(&self, input: HeroInput) -> Result<HeroDetails, Error> {
        let name = validate_hero_name(input.name.as_deref())?;
        let super_name = validate_super_name(input.super_name.as_deref())?;

        let tx = self.db.begin().await?;

        let hero = hero::ActiveModel {
            name: Set(name),
            super_name: Set(super_name),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;

        log::info!("created hero {}", hero.id);

        let id = hero.id;
        let mut graph = Graph::new();
        graph.add_hero(hero);

        Serializer::new(&graph)
            .hero(id)
            .ok_or_else(|| Error::not_found(Kind::Hero, id))
    }

    /// Update the fields present in the input.
    ///
    /// Returns `None` if the hero doesn't exist.
    pub async fn update_hero(
        &self,
        id: i32,
        input: HeroInput,
    ) -> Result<Option<HeroDetails>, Error> {
        let name = input
            .name
            .as_deref()
            .map(|name| validate_hero_name(Some(name)))
            .transpose()?;
        let super_name = input
            .super_name
            .as_deref()
            .map(|super_name| validate_super_name(Some(super_name)))
            .transpose()?;

        if name.is_none() && super_name.is_none() {
            return self.fetch_hero(id).await;
        }

        let tx = self.db.begin().await?;

        let Some(hero) = hero::Entity::find_by_id(id).one(&tx).await? else {
            return Ok(None);
        };

        let mut hero: hero::ActiveModel = hero.into();
        if let Some(name) = name {
            hero.name = Set(name);
        }
        if let Some(super_name) = super_name {
            hero.super_name = Set(super_name);
        }
        hero.update(&tx).await?;

        let graph = Graph::around_hero(id, &tx).await?;

        tx.commit().await?;

        Ok(graph.and_then(|graph| Serializer::new(&graph).hero(id)))
    }

    /// Delete a hero, and its hero powers.
    ///
    /// Returns `false` if the hero doesn't exist.
    pub async fn delete_hero(&self, id: i32) -> Result<bool, Error> {
        let tx = self.db.begin().await?;

        let Some(mut graph) = Graph::around_hero(id, &tx).await? else {
            return Ok(false);
        };
        let Some((_, hero_powers)) = graph.remove_hero(id) else {
            return Ok(false);
        };

        if !hero_powers.is_empty() {
            hero_power::Entity::delete_many()
                .filter(hero_power::Column::Id.is_in(hero_powers.iter().map(|hp| hp.id)))
                .exec(&tx)
                .await?;
        }

        let result = hero::Entity::delete_by_id(id).exec(&tx).await?;

        tx.commit().await?;

        log::info!(
            "deleted hero {id}, together with {} hero power(s)",
            hero_powers.len()
        );

        Ok(result.rows_affected > 0)
    }
}
