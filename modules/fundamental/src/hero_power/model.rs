use crate::{hero::model::HeroHead, power::model::PowerHead};
use heroes_entity::hero_power::{self, Strength};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroPowerHead {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
}

impl HeroPowerHead {
    pub fn from_entity(hero_power: &hero_power::Model) -> Self {
        Self {
            id: hero_power.id,
            strength: hero_power.strength,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroPowerDetails {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    /// The hero, unless serialized as part of that hero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroHead>,
    /// The power, unless serialized as part of that power
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerHead>,
}

/// Assign a power to a hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssignPower {
    /// The power to assign
    pub power_id: i32,
    /// One of `Strong`, `Weak` or `Average`
    #[serde(default)]
    pub strength: Option<String>,
}
