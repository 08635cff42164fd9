use crate::{
    graph::Graph,
    power::model::{PowerDetails, PowerInput},
    serializer::{Kind, Serializer},
    validation::{validate_description, validate_power_name, ValidationError},
    Error,
};
use heroes_common::db::{Database, DatabaseErrors};
use heroes_entity::{hero_power, power};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

pub struct PowerService {
    db: Database,
}

impl PowerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all powers, with their heroes.
    pub async fn fetch_powers(&self) -> Result<Vec<PowerDetails>, Error> {
        let graph = Graph::load(&self.db).await?;
        Ok(Serializer::new(&graph).powers())
    }

    pub async fn fetch_power(&self, id: i32) -> Result<Option<PowerDetails>, Error> {
        Ok(Graph::around_power(id, &self.db)
            .await?
            .and_then(|graph| Serializer::new(&graph).power(id)))
    }

    pub async fn create_power(&self, input: PowerInput) -> Result<PowerDetails, Error> {
        let name = validate_power_name(input.name.as_deref())?;
        let description = validate_description(input.description.as_deref())?;

        let tx = self.db.begin().await?;

        ensure_unique_name(&name, None, &tx).await?;

        let power = power::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        }
        .insert(&tx)
        .await
        .map_err(duplicate_name)?;

        tx.commit().await?;

        log::info!("created power {}", power.id);

        let id = power.id;
        let mut graph = Graph::new();
        graph.add_power(power);

        Serializer::new(&graph)
            .power(id)
            .ok_or_else(|| Error::not_found(Kind::Power, id))
    }

    /// Update the fields present in the input.
    ///
    /// Returns `None` if the power doesn't exist.
    pub async fn update_power(
        &self,
        id: i32,
        input: PowerInput,
    ) -> Result<Option<PowerDetails>, Error> {
        let name = input
            .name
            .as_deref()
            .map(|name| validate_power_name(Some(name)))
            .transpose()?;
        let description = input
            .description
            .as_deref()
            .map(|description| validate_description(Some(description)))
            .transpose()?;

        if name.is_none() && description.is_none() {
            return self.fetch_power(id).await;
        }

        let tx = self.db.begin().await?;

        let Some(power) = power::Entity::find_by_id(id).one(&tx).await? else {
            return Ok(None);
        };

        let mut power: power::ActiveModel = power.into();
        if let Some(name) = name {
            ensure_unique_name(&name, Some(id), &tx).await?;
            power.name = Set(name);
        }
        if let Some(description) = description {
            power.description = Set(description);
        }
        power.update(&tx).await.map_err(duplicate_name)?;

        let graph = Graph::around_power(id, &tx).await?;

        tx.commit().await?;

        Ok(graph.and_then(|graph| Serializer::new(&graph).power(id)))
    }

    /// Delete a power, and its hero powers.
    ///
    /// Returns `false` if the power doesn't exist.
    pub async fn delete_power(&self, id: i32) -> Result<bool, Error> {
        let tx = self.db.begin().await?;

        let Some(mut graph) = Graph::around_power(id, &tx).await? else {
            return Ok(false);
        };
        let Some((_, hero_powers)) = graph.remove_power(id) else {
            return Ok(false);
        };

        if !hero_powers.is_empty() {
            hero_power::Entity::delete_many()
                .filter(hero_power::Column::Id.is_in(hero_powers.iter().map(|hp| hp.id)))
                .exec(&tx)
                .await?;
        }

        let result = power::Entity::delete_by_id(id).exec(&tx).await?;

        tx.commit().await?;

        log::info!(
            "deleted power {id}, together with {} hero power(s)",
            hero_powers.len()
        );

        Ok(result.rows_affected > 0)
    }
}

fn name_taken() -> ValidationError {
    ValidationError::new("name", "is already used by another power")
}

/// Fail if another power, not being `except`, already uses the name.
async fn ensure_unique_name<C: ConnectionTrait>(
    name: &str,
    except: Option<i32>,
    db: &C,
) -> Result<(), Error> {
    let mut query = power::Entity::find().filter(power::Column::Name.eq(name));
    if let Some(except) = except {
        query = query.filter(power::Column::Id.ne(except));
    }

    match query.one(db).await? {
        Some(_) => Err(name_taken().into()),
        None => Ok(()),
    }
}

/// Map a unique constraint violation of the power's name to a validation error.
fn duplicate_name(err: DbErr) -> Error {
    match err.is_duplicate() {
        true => name_taken().into(),
        false => err.into(),
    }
}
