use crate::database::Database;
use crate::domain::ports::person_repository::{PersonRepository, StoreError, StoreResult};
use crate::models::Person;
use crate::utils::validation::validate_person;
use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

// Normalizes an incoming identifier to the canonical stored form. Anything
// that does not parse as a UUID cannot address a record.
fn parse_person_id(id: &str) -> Result<String, StoreError> {
    let parsed = Uuid::parse_str(id).map_err(|_| StoreError::MalformedId)?;
    Ok(parsed.to_string())
}

#[async_trait]
impl PersonRepository for Database {
    async fn list_persons(&self) -> StoreResult<Vec<Person>> {
        let rows = sqlx::query("SELECT id, name, number FROM persons")
            .fetch_all(&self.pool)
            .await?;

        let mut persons = Vec::new();
        for row in rows {
            persons.push(Person {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                number: row.try_get("number")?,
            });
        }

        Ok(persons)
    }

    async fn find_person(&self, id: &str) -> StoreResult<Person> {
        let id = parse_person_id(id)?;

        let row = sqlx::query("SELECT id, name, number FROM persons WHERE id = ?")
            .bind(&id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Person {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                number: row.try_get("number")?,
            }),
            None => Err(StoreError::NotFound),
        }
    }

    async fn create_person(&self, name: &str, number: &str) -> StoreResult<Person> {
        validate_person(name, number)?;

        let person = Person::new(name.to_string(), number.to_string());
        sqlx::query("INSERT INTO persons (id, name, number) VALUES (?, ?, ?)")
            .bind(&person.id)
            .bind(&person.name)
            .bind(&person.number)
            .execute(&self.pool)
            .await?;

        Ok(person)
    }

    // Identifier check first: a malformed id wins over invalid fields.
    async fn update_person(&self, id: &str, name: &str, number: &str) -> StoreResult<Person> {
        let id = parse_person_id(id)?;
        validate_person(name, number)?;

        let result = sqlx::query("UPDATE persons SET name = ?, number = ? WHERE id = ?")
            .bind(name)
            .bind(number)
            .bind(&id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        // Re-read after the write so the caller sees the stored state.
        self.find_person(&id).await
    }

    async fn delete_person(&self, id: &str) -> StoreResult<()> {
        let id = parse_person_id(id)?;

        let result = sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(&id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn count_persons(&self) -> StoreResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM persons")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }
}
