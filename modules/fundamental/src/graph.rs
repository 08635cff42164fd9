//! The relationship graph between heroes and powers.
//!
//! Heroes and powers are associated through hero powers. The graph keeps an index from each hero,
//! and each power, to the hero powers referencing it, in creation order. A hero power can only be
//! linked when both of its ends are present, and removing an end removes all hero powers
//! referencing it.

use heroes_entity::{hero, hero_power, power};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("hero power {hero_power} references missing hero {hero}")]
    MissingHero { hero_power: i32, hero: i32 },
    #[error("hero power {hero_power} references missing power {power}")]
    MissingPower { hero_power: i32, power: i32 },
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    heroes: BTreeMap<i32, hero::Model>,
    powers: BTreeMap<i32, power::Model>,
    hero_powers: BTreeMap<i32, hero_power::Model>,

    by_hero: HashMap<i32, Vec<i32>>,
    by_power: HashMap<i32, Vec<i32>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hero(&mut self, hero: hero::Model) {
        self.by_hero.entry(hero.id).or_default();
        self.heroes.insert(hero.id, hero);
    }

    pub fn add_power(&mut self, power: power::Model) {
        self.by_power.entry(power.id).or_default();
        self.powers.insert(power.id, power);
    }

    /// Link a hero and a power through a hero power.
    ///
    /// Both ends must already be part of the graph.
    pub fn link(&mut self, hero_power: hero_power::Model) -> Result<(), GraphError> {
        if !self.heroes.contains_key(&hero_power.hero_id) {
            return Err(GraphError::MissingHero {
                hero_power: hero_power.id,
                hero: hero_power.hero_id,
            });
        }
        if !self.powers.contains_key(&hero_power.power_id) {
            return Err(GraphError::MissingPower {
                hero_power: hero_power.id,
                power: hero_power.power_id,
            });
        }

        self.unlink(hero_power.id);

        self.by_hero
            .entry(hero_power.hero_id)
            .or_default()
            .push(hero_power.id);
        self.by_power
            .entry(hero_power.power_id)
            .or_default()
            .push(hero_power.id);
        self.hero_powers.insert(hero_power.id, hero_power);

        Ok(())
    }

    /// Remove a hero power, returning it if it was present.
    pub fn unlink(&mut self, id: i32) -> Option<hero_power::Model> {
        let hero_power = self.hero_powers.remove(&id)?;

        if let Some(ids) = self.by_hero.get_mut(&hero_power.hero_id) {
            ids.retain(|hp| *hp != id);
        }
        if let Some(ids) = self.by_power.get_mut(&hero_power.power_id) {
            ids.retain(|hp| *hp != id);
        }

        Some(hero_power)
    }

    /// Remove a hero, and all hero powers referencing it.
    pub fn remove_hero(&mut self, id: i32) -> Option<(hero::Model, Vec<hero_power::Model>)> {
        let hero = self.heroes.remove(&id)?;
        let removed = self
            .by_hero
            .remove(&id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|hp| self.unlink(hp))
            .collect();

        Some((hero, removed))
    }

    /// Remove a power, and all hero powers referencing it.
    pub fn remove_power(&mut self, id: i32) -> Option<(power::Model, Vec<hero_power::Model>)> {
        let power = self.powers.remove(&id)?;
        let removed = self
            .by_power
            .remove(&id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|hp| self.unlink(hp))
            .collect();

        Some((power, removed))
    }

    pub fn hero(&self, id: i32) -> Option<&hero::Model> {
        self.heroes.get(&id)
    }

    pub fn power(&self, id: i32) -> Option<&power::Model> {
        self.powers.get(&id)
    }

    pub fn hero_power(&self, id: i32) -> Option<&hero_power::Model> {
        self.hero_powers.get(&id)
    }

    /// All heroes, ordered by id.
    pub fn heroes(&self) -> impl Iterator<Item = &hero::Model> {
        self.heroes.values()
    }

    /// All powers, ordered by id.
    pub fn powers(&self) -> impl Iterator<Item = &power::Model> {
        self.powers.values()
    }

    /// The hero powers of a hero, in creation order.
    pub fn hero_powers_of_hero(&self, hero: i32) -> impl Iterator<Item = &hero_power::Model> {
        self.resolve(self.by_hero.get(&hero))
    }

    /// The hero powers of a power, in creation order.
    pub fn hero_powers_of_power(&self, power: i32) -> impl Iterator<Item = &hero_power::Model> {
        self.resolve(self.by_power.get(&power))
    }

    /// The powers a hero has, following its hero powers.
    pub fn powers_of(&self, hero: i32) -> impl Iterator<Item = &power::Model> {
        self.hero_powers_of_hero(hero)
            .filter_map(move |hp| self.powers.get(&hp.power_id))
    }

    /// The heroes having a power, following its hero powers.
    pub fn heroes_of(&self, power: i32) -> impl Iterator<Item = &hero::Model> {
        self.hero_powers_of_power(power)
            .filter_map(move |hp| self.heroes.get(&hp.hero_id))
    }

    fn resolve<'a>(
        &'a self,
        ids: Option<&'a Vec<i32>>,
    ) -> impl Iterator<Item = &'a hero_power::Model> + 'a {
        ids.into_iter()
            .flatten()
            .filter_map(move |id| self.hero_powers.get(id))
    }

    /// Load everything.
    pub async fn load<C: ConnectionTrait>(db: &C) -> Result<Self, crate::Error> {
        let mut graph = Self::new();

        for hero in hero::Entity::find()
            .order_by_asc(hero::Column::Id)
            .all(db)
            .await?
        {
            graph.add_hero(hero);
        }
        for power in power::Entity::find()
            .order_by_asc(power::Column::Id)
            .all(db)
            .await?
        {
            graph.add_power(power);
        }
        for hero_power in hero_power::Entity::find()
            .order_by_asc(hero_power::Column::Id)
            .all(db)
            .await?
        {
            graph.link(hero_power)?;
        }

        Ok(graph)
    }

    /// Load a hero, its hero powers and their powers.
    ///
    /// Returns `None` if the hero doesn't exist.
    pub async fn around_hero<C: ConnectionTrait>(
        id: i32,
        db: &C,
    ) -> Result<Option<Self>, crate::Error> {
        let Some(hero) = hero::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut graph = Self::new();
        graph.add_hero(hero);

        for (hero_power, power) in hero_power::Entity::find()
            .filter(hero_power::Column::HeroId.eq(id))
            .order_by_asc(hero_power::Column::Id)
            .find_also_related(power::Entity)
            .all(db)
            .await?
        {
            if let Some(power) = power {
                graph.add_power(power);
            }
            graph.link(hero_power)?;
        }

        Ok(Some(graph))
    }

    /// Load a power, its hero powers and their heroes.
    ///
    /// Returns `None` if the power doesn't exist.
    pub async fn around_power<C: ConnectionTrait>(
        id: i32,
        db: &C,
    ) -> Result<Option<Self>, crate::Error> {
        let Some(power) = power::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut graph = Self::new();
        graph.add_power(power);

        for (hero_power, hero) in hero_power::Entity::find()
            .filter(hero_power::Column::PowerId.eq(id))
            .order_by_asc(hero_power::Column::Id)
            .find_also_related(hero::Entity)
            .all(db)
            .await?
        {
            if let Some(hero) = hero {
                graph.add_hero(hero);
            }
            graph.link(hero_power)?;
        }

        Ok(Some(graph))
    }

    /// Load a hero power, together with its hero and power.
    ///
    /// Returns `None` if the hero power doesn't exist.
    pub async fn around_hero_power<C: ConnectionTrait>(
        id: i32,
        db: &C,
    ) -> Result<Option<Self>, crate::Error> {
        let Some(hero_power) = hero_power::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut graph = Self::new();
        if let Some(hero) = hero::Entity::find_by_id(hero_power.hero_id).one(db).await? {
            graph.add_hero(hero);
        }
        if let Some(power) = power::Entity::find_by_id(hero_power.power_id)
            .one(db)
            .await?
        {
            graph.add_power(power);
        }
        graph.link(hero_power)?;

        Ok(Some(graph))
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use heroes_entity::hero_power::Strength;

    pub fn hero(id: i32, name: &str, super_name: &str) -> hero::Model {
        hero::Model {
            id,
            name: name.into(),
            super_name: super_name.into(),
        }
    }

    pub fn power(id: i32, name: &str, description: &str) -> power::Model {
        power::Model {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn hero_power(id: i32, hero_id: i32, power_id: i32, strength: Strength) -> hero_power::Model {
        hero_power::Model {
            id,
            strength,
            hero_id,
            power_id,
        }
    }

    /// Two heroes, two powers, three hero powers.
    pub fn sample() -> Graph {
        let mut graph = Graph::new();
        graph.add_hero(hero(1, "Clark Kent", "Superman"));
        graph.add_hero(hero(2, "Diana Prince", "Wonder Woman"));
        graph.add_power(power(1, "Flight", "Can fly through the air"));
        graph.add_power(power(2, "Super strength", "Can lift very heavy things"));

        for hp in [
            hero_power(1, 1, 1, Strength::Strong),
            hero_power(2, 1, 2, Strength::Average),
            hero_power(3, 2, 2, Strength::Weak),
        ] {
            graph.link(hp).expect("must link");
        }

        graph
    }

    fn ids<'a>(iter: impl Iterator<Item = &'a hero_power::Model>) -> Vec<i32> {
        iter.map(|hp| hp.id).collect()
    }

    #[test]
    fn navigation() {
        let graph = sample();

        assert_eq!(ids(graph.hero_powers_of_hero(1)), vec![1, 2]);
        assert_eq!(ids(graph.hero_powers_of_hero(2)), vec![3]);
        assert_eq!(ids(graph.hero_powers_of_power(2)), vec![2, 3]);
        assert_eq!(ids(graph.hero_powers_of_power(42)), Vec::<i32>::new());

        assert_eq!(
            graph.powers_of(1).map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["Flight", "Super strength"]
        );
        assert_eq!(
            graph
                .heroes_of(2)
                .map(|h| h.super_name.as_str())
                .collect::<Vec<_>>(),
            vec!["Superman", "Wonder Woman"]
        );
    }

    #[test]
    fn link_requires_both_ends() {
        let mut graph = sample();

        assert_eq!(
            graph.link(hero_power(10, 3, 1, Strength::Weak)),
            Err(GraphError::MissingHero {
                hero_power: 10,
                hero: 3
            })
        );
        assert_eq!(
            graph.link(hero_power(10, 1, 3, Strength::Weak)),
            Err(GraphError::MissingPower {
                hero_power: 10,
                power: 3
            })
        );
        assert!(graph.hero_power(10).is_none());
    }

    #[test]
    fn relink_replaces() {
        let mut graph = sample();

        graph
            .link(hero_power(1, 2, 1, Strength::Weak))
            .expect("must link");

        assert_eq!(ids(graph.hero_powers_of_hero(1)), vec![2]);
        assert_eq!(ids(graph.hero_powers_of_hero(2)), vec![3, 1]);
        assert_eq!(ids(graph.hero_powers_of_power(1)), vec![1]);
    }

    #[test]
    fn remove_hero_cascades() {
        let mut graph = sample();

        let (hero, removed) = graph.remove_hero(1).expect("must exist");
        assert_eq!(hero.name, "Clark Kent");
        assert_eq!(ids(removed.iter()), vec![1, 2]);

        assert!(graph.hero(1).is_none());
        assert!(graph.hero_power(1).is_none());
        assert!(graph.hero_power(2).is_none());
        assert_eq!(ids(graph.hero_powers_of_power(2)), vec![3]);
        assert_eq!(ids(graph.hero_powers_of_power(1)), Vec::<i32>::new());

        assert!(graph.remove_hero(1).is_none());
    }

    #[test]
    fn remove_power_cascades() {
        let mut graph = sample();

        let (_, removed) = graph.remove_power(2).expect("must exist");
        assert_eq!(ids(removed.iter()), vec![2, 3]);

        assert_eq!(ids(graph.hero_powers_of_hero(1)), vec![1]);
        assert_eq!(ids(graph.hero_powers_of_hero(2)), Vec::<i32>::new());
        assert_eq!(graph.heroes().count(), 2);
    }

    #[test]
    fn unlink() {
        let mut graph = sample();

        assert_eq!(graph.unlink(2).map(|hp| hp.strength), Some(Strength::Average));
        assert!(graph.unlink(2).is_none());
        assert_eq!(ids(graph.hero_powers_of_hero(1)), vec![1]);
        assert_eq!(ids(graph.hero_powers_of_power(2)), vec![3]);
    }
}
