use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_power")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "Column::HeroId",
        to = "super::hero::Column::Id",
        on_delete = "Cascade"
    )]
    Hero,
    #[sea_orm(
        belongs_to = "super::power::Entity",
        from = "Column::PowerId",
        to = "super::power::Column::Id",
        on_delete = "Cascade"
    )]
    Power,
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hero.def()
    }
}

impl Related<super::power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Power.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// How strongly a hero possesses a power.
///
/// Values are case-sensitive, `strong` is not a valid strength.
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Strength {
    #[sea_orm(string_value = "Strong")]
    Strong,
    #[sea_orm(string_value = "Weak")]
    Weak,
    #[sea_orm(string_value = "Average")]
    Average,
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::Iterable;
    use std::str::FromStr;
    use strum::VariantNames;

    #[test]
    fn names() {
        assert_eq!(Strength::Strong.to_string(), "Strong");
        assert_eq!(Strength::VARIANTS, ["Strong", "Weak", "Average"]);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Strength::from_str("Average"), Ok(Strength::Average));
        assert!(Strength::from_str("average").is_err());
        assert!(Strength::from_str("Deadly").is_err());
    }

    #[test]
    fn active_value_matches_display() {
        for strength in Strength::iter() {
            assert_eq!(strength.to_value(), strength.to_string());
        }
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_value(Strength::Weak).expect("must serialize"),
            serde_json::json!("Weak")
        );
    }
}
