use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::{count_star, sum};
use diesel::prelude::*;
use std::sync::Arc;

use super::model::{NewRsvpDB, RsvpDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::rsvps;
use crate::schema::rsvps::dsl::*;
use weddingsite_core::errors::Result;
use weddingsite_core::rsvps::{MealCount, NewRsvp, Rsvp, RsvpRepositoryTrait};

pub struct RsvpRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RsvpRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RsvpRepository { pool, writer }
    }
}

#[async_trait]
impl RsvpRepositoryTrait for RsvpRepository {
    async fn insert_rsvp(&self, new_rsvp: NewRsvp) -> Result<Rsvp> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Rsvp> {
                let row = NewRsvpDB::new(new_rsvp, Utc::now().naive_utc());
                let created = diesel::insert_into(rsvps::table)
                    .values(&row)
                    .returning(RsvpDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Rsvp::from(created))
            })
            .await
    }

    fn load_rsvps(&self) -> Result<Vec<Rsvp>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = rsvps
            .select(RsvpDB::as_select())
            .order((created_at.desc(), id.desc()))
            .load::<RsvpDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Rsvp::from).collect())
    }

    async fn delete_rsvp(&self, rsvp_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(rsvps.find(rsvp_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn count_rsvps(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(rsvps
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn sum_guests(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total = rsvps
            .select(sum(guests))
            .first::<Option<i64>>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(total.unwrap_or(0))
    }

    fn count_meals(&self) -> Result<Vec<MealCount>> {
        let mut conn = get_connection(&self.pool)?;
        let grouped = rsvps
            .filter(meal.is_not_null())
            .group_by(meal)
            .select((meal, count_star()))
            .load::<(Option<String>, i64)>(&mut conn)
            .map_err(StorageError::from)?;

        let mut counts: Vec<MealCount> = grouped
            .into_iter()
            .filter_map(|(name, count)| name.map(|meal_name| MealCount { meal: meal_name, count }))
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.meal.cmp(&b.meal)));
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, spawn_writer};
    use tempfile::TempDir;

    fn setup() -> (TempDir, RsvpRepository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.db");
        let db_path = init(path.to_str().unwrap()).unwrap();
        let pool = create_pool(&db_path).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer(pool.clone());
        (dir, RsvpRepository::new(pool, writer))
    }

    fn new_rsvp(first: &str, party: i32, choice: Option<&str>) -> NewRsvp {
        NewRsvp {
            fname: first.to_string(),
            lname: "Guest".to_string(),
            email: None,
            guests: party,
            meal: choice.map(str::to_string),
            song: None,
            message: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let (_dir, repo) = setup();
        let before = Utc::now().naive_utc() - chrono::Duration::seconds(1);
        let created = repo
            .insert_rsvp(new_rsvp("Ana", 2, Some("Fish")))
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.fname, "Ana");
        assert_eq!(created.guests, 2);
        assert!(created.created_at >= before);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (_dir, repo) = setup();
        let first = repo.insert_rsvp(new_rsvp("A", 1, None)).await.unwrap();
        let second = repo.insert_rsvp(new_rsvp("B", 1, None)).await.unwrap();
        let third = repo.insert_rsvp(new_rsvp("C", 1, None)).await.unwrap();

        let ids: Vec<i32> = repo.load_rsvps().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn test_stats_queries() {
        let (_dir, repo) = setup();
        assert_eq!(repo.count_rsvps().unwrap(), 0);
        assert_eq!(repo.sum_guests().unwrap(), 0);
        assert!(repo.count_meals().unwrap().is_empty());

        repo.insert_rsvp(new_rsvp("A", 2, Some("Fish"))).await.unwrap();
        repo.insert_rsvp(new_rsvp("B", 3, Some("Chicken"))).await.unwrap();
        repo.insert_rsvp(new_rsvp("C", 1, Some("Fish"))).await.unwrap();
        repo.insert_rsvp(new_rsvp("D", 4, None)).await.unwrap();

        assert_eq!(repo.count_rsvps().unwrap(), 4);
        assert_eq!(repo.sum_guests().unwrap(), 10);
        assert_eq!(
            repo.count_meals().unwrap(),
            vec![
                MealCount {
                    meal: "Fish".into(),
                    count: 2
                },
                MealCount {
                    meal: "Chicken".into(),
                    count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_dir, repo) = setup();
        let created = repo.insert_rsvp(new_rsvp("A", 1, None)).await.unwrap();

        assert_eq!(repo.delete_rsvp(created.id).await.unwrap(), 1);
        assert_eq!(repo.delete_rsvp(created.id).await.unwrap(), 0);
        assert_eq!(repo.delete_rsvp(9999).await.unwrap(), 0);
        assert!(repo.load_rsvps().unwrap().is_empty());
    }
}
