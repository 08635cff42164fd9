use crate::hero_power::model::HeroPowerDetails;
use heroes_entity::hero;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroHead {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

impl HeroHead {
    pub fn from_entity(hero: &hero::Model) -> Self {
        Self {
            id: hero.id,
            name: hero.name.clone(),
            super_name: hero.super_name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroDetails {
    #[serde(flatten)]
    pub head: HeroHead,

    /// The hero's powers, each carrying its power but not the hero again
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_powers: Option<Vec<HeroPowerDetails>>,
}

/// The fields of a hero, for creating or updating one.
///
/// When updating, absent fields stay unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "alias")]
    pub super_name: Option<String>,
}

impl HeroInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.super_name.is_none()
    }
}
