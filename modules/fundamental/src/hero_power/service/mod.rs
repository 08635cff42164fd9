use crate::{
    graph::Graph,
    hero::model::HeroHead,
    hero_power::model::{AssignPower, HeroPowerDetails},
    power::model::PowerHead,
    serializer::{Kind, Serializer},
    validation::validate_strength,
    Error,
};
use heroes_common::db::Database;
use heroes_entity::{hero, hero_power, power};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};

pub struct HeroPowerService {
    db: Database,
}

impl HeroPowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Assign a power to a hero.
    ///
    /// The strength is validated first, then the hero and the power must exist.
    pub async fn assign_power(
        &self,
        hero_id: i32,
        input: AssignPower,
    ) -> Result<HeroPowerDetails, Error> {
        let strength = validate_strength(input.strength.as_deref())?;

        let tx = self.db.begin().await?;

        let Some(hero) = hero::Entity::find_by_id(hero_id).one(&tx).await? else {
            return Err(Error::not_found(Kind::Hero, hero_id));
        };
        let Some(power) = power::Entity::find_by_id(input.power_id).one(&tx).await? else {
            return Err(Error::not_found(Kind::Power, input.power_id));
        };

        let hero_power = hero_power::ActiveModel {
            strength: Set(strength),
            hero_id: Set(hero.id),
            power_id: Set(power.id),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;

        log::info!(
            "assigned power {} to hero {} as {strength}",
            power.id,
            hero.id
        );

        let id = hero_power.id;
        let mut graph = Graph::new();
        graph.add_hero(hero);
        graph.add_power(power);
        graph.link(hero_power)?;

        Serializer::new(&graph)
            .hero_power(id)
            .ok_or_else(|| Error::not_found(Kind::HeroPower, id))
    }

    pub async fn fetch_hero_power(&self, id: i32) -> Result<Option<HeroPowerDetails>, Error> {
        Ok(Graph::around_hero_power(id, &self.db)
            .await?
            .and_then(|graph| Serializer::new(&graph).hero_power(id)))
    }

    /// Returns `false` if the hero power doesn't exist.
    pub async fn delete_hero_power(&self, id: i32) -> Result<bool, Error> {
        let tx = self.db.begin().await?;
        let result = hero_power::Entity::delete_by_id(id).exec(&tx).await?;
        tx.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// The hero powers of a hero, each carrying its power.
    pub async fn list_powers_for_hero(&self, hero_id: i32) -> Result<Vec<HeroPowerDetails>, Error> {
        let graph = Graph::around_hero(hero_id, &self.db)
            .await?
            .ok_or_else(|| Error::not_found(Kind::Hero, hero_id))?;

        Ok(Serializer::new(&graph).hero_powers_of_hero(hero_id))
    }

    /// The hero powers of a power, each carrying its hero.
    pub async fn list_heroes_for_power(
        &self,
        power_id: i32,
    ) -> Result<Vec<HeroPowerDetails>, Error> {
        let graph = Graph::around_power(power_id, &self.db)
            .await?
            .ok_or_else(|| Error::not_found(Kind::Power, power_id))?;

        Ok(Serializer::new(&graph).hero_powers_of_power(power_id))
    }

    /// The powers of a hero, without the hero powers in between.
    pub async fn powers_of(&self, hero_id: i32) -> Result<Vec<PowerHead>, Error> {
        let graph = Graph::around_hero(hero_id, &self.db)
            .await?
            .ok_or_else(|| Error::not_found(Kind::Hero, hero_id))?;

        Ok(graph.powers_of(hero_id).map(PowerHead::from_entity).collect())
    }

    /// The heroes having a power, without the hero powers in between.
    pub async fn heroes_of(&self, power_id: i32) -> Result<Vec<HeroHead>, Error> {
        let graph = Graph::around_power(power_id, &self.db)
            .await?
            .ok_or_else(|| Error::not_found(Kind::Power, power_id))?;

        Ok(graph.heroes_of(power_id).map(HeroHead::from_entity).collect())
    }
}
