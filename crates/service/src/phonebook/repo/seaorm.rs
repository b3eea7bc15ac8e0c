use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};
use tracing::debug;

use models::person;

use crate::errors::ServiceError;
use crate::phonebook::domain::{Person, PersonId, PersonInput};
use crate::phonebook::repository::PersonStore;

/// PostgreSQL-backed store over the `phonebook` table.
///
/// Each operation is one statement; no explicit transaction.
pub struct SeaOrmPersonStore {
    db: DatabaseConnection,
}

impl SeaOrmPersonStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl PersonStore for SeaOrmPersonStore {
    async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        let rows = person::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn get(&self, id: PersonId) -> Result<Person, ServiceError> {
        person::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Person::from)
            .ok_or_else(|| ServiceError::not_found("person"))
    }

    async fn create(&self, input: PersonInput) -> Result<PersonId, ServiceError> {
        let am = person::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            phone_nr: Set(input.phone_nr),
        };
        let created = am.insert(&self.db).await?;
        Ok(created.id)
    }

    async fn update(&self, p: Person) -> Result<(), ServiceError> {
        let res = person::Entity::update_many()
            .col_expr(person::Column::Name, Expr::value(p.name))
            .col_expr(person::Column::PhoneNr, Expr::value(p.phone_nr))
            .filter(person::Column::Id.eq(p.id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            debug!(id = p.id, "update matched no rows");
        }
        Ok(())
    }

    async fn delete(&self, id: PersonId) -> Result<(), ServiceError> {
        person::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}


#[cfg(test)]
mod live_tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn crud_against_postgres() -> Result<(), ServiceError> {
        let Some(db) = get_db().await else { return Ok(()) };
        let store = SeaOrmPersonStore::new(db);

        let id = store.create(PersonInput::new("Charlie", "8734265034")).await?;
        assert_eq!(
            store.get(id).await?,
            Person { id, name: "Charlie".into(), phone_nr: "8734265034".into() }
        );
        assert!(store.list().await?.iter().any(|p| p.id == id));

        store.update(Person { id, name: "Bob".into(), phone_nr: "4398754345".into() }).await?;
        let updated = store.get(id).await?;
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Bob");
        assert_eq!(updated.phone_nr, "4398754345");

        store.delete(id).await?;
        assert!(matches!(store.get(id).await, Err(ServiceError::NotFound(_))));
        store.delete(id).await?;
        Ok(())
    }
}
