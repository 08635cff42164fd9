//! Turning parts of the [`Graph`] into response documents.
//!
//! Relations are followed recursively, carrying the kinds visited on the way down as a
//! [`Trail`]. A relation is not followed when the kind it leads to is already on the trail. So a
//! hero's hero powers don't carry the hero again, and the depth of a document is bounded by the
//! number of kinds.

use crate::{
    graph::Graph,
    hero::model::{HeroDetails, HeroHead},
    hero_power::model::{HeroPowerDetails, HeroPowerHead},
    power::model::{PowerDetails, PowerHead},
};
use heroes_entity::{hero, hero_power, power};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(test, derive(strum::EnumIter))]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    Hero,
    Power,
    HeroPower,
}

impl Kind {
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The kinds visited on the way from the root of a document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Trail(u8);

impl Trail {
    pub fn starting_at(kind: Kind) -> Self {
        Self::default().then(kind)
    }

    pub fn then(self, kind: Kind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub fn contains(self, kind: Kind) -> bool {
        self.0 & kind.bit() != 0
    }
}

pub struct Serializer<'g> {
    graph: &'g Graph,
}

impl<'g> Serializer<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    pub fn hero(&self, id: i32) -> Option<HeroDetails> {
        self.graph
            .hero(id)
            .map(|hero| self.hero_in(hero, Trail::default()))
    }

    pub fn power(&self, id: i32) -> Option<PowerDetails> {
        self.graph
            .power(id)
            .map(|power| self.power_in(power, Trail::default()))
    }

    pub fn hero_power(&self, id: i32) -> Option<HeroPowerDetails> {
        self.graph
            .hero_power(id)
            .map(|hero_power| self.hero_power_in(hero_power, Trail::default()))
    }

    pub fn heroes(&self) -> Vec<HeroDetails> {
        self.graph
            .heroes()
            .map(|hero| self.hero_in(hero, Trail::default()))
            .collect()
    }

    pub fn powers(&self) -> Vec<PowerDetails> {
        self.graph
            .powers()
            .map(|power| self.power_in(power, Trail::default()))
            .collect()
    }

    /// The hero powers of a hero, as seen from that hero.
    pub fn hero_powers_of_hero(&self, hero: i32) -> Vec<HeroPowerDetails> {
        let trail = Trail::starting_at(Kind::Hero);
        self.graph
            .hero_powers_of_hero(hero)
            .map(|hero_power| self.hero_power_in(hero_power, trail))
            .collect()
    }

    /// The hero powers of a power, as seen from that power.
    pub fn hero_powers_of_power(&self, power: i32) -> Vec<HeroPowerDetails> {
        let trail = Trail::starting_at(Kind::Power);
        self.graph
            .hero_powers_of_power(power)
            .map(|hero_power| self.hero_power_in(hero_power, trail))
            .collect()
    }

    fn hero_in(&self, hero: &hero::Model, trail: Trail) -> HeroDetails {
        let trail = trail.then(Kind::Hero);

        HeroDetails {
            head: HeroHead::from_entity(hero),
            hero_powers: (!trail.contains(Kind::HeroPower)).then(|| {
                self.graph
                    .hero_powers_of_hero(hero.id)
                    .map(|hero_power| self.hero_power_in(hero_power, trail))
                    .collect()
            }),
        }
    }

    fn power_in(&self, power: &power::Model, trail: Trail) -> PowerDetails {
        let trail = trail.then(Kind::Power);

        PowerDetails {
            head: PowerHead::from_entity(power),
            hero_powers: (!trail.contains(Kind::HeroPower)).then(|| {
                self.graph
                    .hero_powers_of_power(power.id)
                    .map(|hero_power| self.hero_power_in(hero_power, trail))
                    .collect()
            }),
        }
    }

    fn hero_power_in(&self, hero_power: &hero_power::Model, trail: Trail) -> HeroPowerDetails {
        let trail = trail.then(Kind::HeroPower);

        // below a hero power, heroes and powers are cut off at their hero powers
        let hero = match trail.contains(Kind::Hero) {
            true => None,
            false => self
                .graph
                .hero(hero_power.hero_id)
                .map(|hero| self.hero_in(hero, trail).head),
        };
        let power = match trail.contains(Kind::Power) {
            true => None,
            false => self
                .graph
                .power(hero_power.power_id)
                .map(|power| self.power_in(power, trail).head),
        };

        HeroPowerDetails {
            head: HeroPowerHead::from_entity(hero_power),
            hero,
            power,
        }
    }
}
