use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use super::model::*;
use super::repo::*;

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(db_path: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(db_path)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let repo = Self { pool };

        repo.init_schema().await?;

        info!("Database initialized at {}", db_path);

        Ok(repo)
    }

    async fn init_schema(&self) -> DbResult<()> {
        let schema = include_str!("schema.sql");
        sqlx::query(schema).execute(&self.pool).await?;
        Ok(())
    }
}

type LikedMovieRow = (
    i64,
    i64,
    String,
    String,
    Option<String>,
    String,
    String,
    f64,
    String,
    String,
);

fn decode_row(row: LikedMovieRow) -> DbResult<LikedMovie> {
    let genre_ids: Vec<i32> = serde_json::from_str(&row.3)
        .map_err(|e| DbError::Corrupt(format!("genre_ids for row {}: {}", row.0, e)))?;

    Ok(LikedMovie {
        id: row.0,
        tmdb_id: row.1,
        title: row.2,
        genre_ids,
        poster_path: row.4,
        overview: row.5,
        release_date: row.6,
        vote_average: row.7,
        original_language: row.8,
        liked_at: DateTime::parse_from_rfc3339(&row.9)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
    })
}

#[async_trait]
impl LikesRepo for SqliteRepository {
    async fn replace_all(&self, likes: &[NewLikedMovie]) -> DbResult<u64> {
        let liked_at = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM liked_movies")
            .execute(&mut *tx)
            .await?;

        for movie in likes {
            let genre_ids = serde_json::to_string(&movie.genre_ids)
                .map_err(|e| DbError::Corrupt(format!("genre_ids encode: {}", e)))?;

            sqlx::query(
                "INSERT INTO liked_movies
                (tmdb_id, title, genre_ids, poster_path, overview, release_date, vote_average, original_language, liked_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(movie.id)
            .bind(&movie.title)
            .bind(&genre_ids)
            .bind(&movie.poster_path)
            .bind(&movie.overview)
            .bind(&movie.release_date)
            .bind(movie.vote_average)
            .bind(&movie.original_language)
            .bind(&liked_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(likes.len() as u64)
    }

    async fn list_all(&self) -> DbResult<Vec<LikedMovie>> {
        // Rowid breaks ties between rows inserted in the same sync batch,
        // so "most recent first" is deterministic.
        let rows = sqlx::query_as::<_, LikedMovieRow>(
            "SELECT id, tmdb_id, title, genre_ids, poster_path, overview, release_date, vote_average, original_language, liked_at
             FROM liked_movies ORDER BY liked_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(decode_row).collect()
    }

    async fn count(&self) -> DbResult<i64> {
        let result = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM liked_movies")
            .fetch_one(&self.pool)
            .await?;
        Ok(result.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_repo(name: &str) -> SqliteRepository {
        let path = std::env::temp_dir().join(format!(
            "likestats-test-{}-{}.db",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_file(&path);
        SqliteRepository::new(&format!("sqlite://{}", path.display()))
            .await
            .unwrap()
    }

    fn movie(id: i64, title: &str) -> NewLikedMovie {
        NewLikedMovie {
            id,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_replace_all_is_full_replace() {
        let repo = test_repo("replace").await;

        let n = repo
            .replace_all(&[movie(1, "Alien"), movie(2, "Heat")])
            .await
            .unwrap();
        assert_eq!(n, 2);

        let n = repo.replace_all(&[movie(3, "Ran")]).await.unwrap();
        assert_eq!(n, 1);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].tmdb_id, 3);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_all_most_recent_first() {
        let repo = test_repo("order").await;

        repo.replace_all(&[movie(1, "First"), movie(2, "Second"), movie(3, "Third")])
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|m| m.tmdb_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_genre_ids_round_trip() {
        let repo = test_repo("genres").await;

        let mut m = movie(7, "Seven Samurai");
        m.genre_ids = vec![28, 12, 18];
        repo.replace_all(&[m]).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all[0].genre_ids, vec![28, 12, 18]);
        assert_eq!(all[0].original_language, "en");
        assert!(all[0].liked_at.is_some());
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = test_repo("empty").await;
        assert!(repo.list_all().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.replace_all(&[]).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
