use crate::hero_power::model::HeroPowerDetails;
use heroes_entity::power;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PowerHead {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl PowerHead {
    pub fn from_entity(power: &power::Model) -> Self {
        Self {
            id: power.id,
            name: power.name.clone(),
            description: power.description.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PowerDetails {
    #[serde(flatten)]
    pub head: PowerHead,

    /// The power's hero powers, each carrying its hero but not the power again
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_powers: Option<Vec<HeroPowerDetails>>,
}

/// The fields of a power, for creating or updating one.
///
/// When updating, absent fields stay unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PowerInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PowerInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
