use super::{is_foreign_key_violation, is_unique_violation, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::idea::{
    Idea, IdeaDescription, IdeaId, IdeaRepository, IdeaTitle, IdeaWithLikes, LikeOutcome, NewIdea,
    NewLike,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

const SELECT_IDEA_WITH_LIKES: &str = "SELECT i.id, i.title, i.description, i.owner_id, i.created_at,
        (SELECT COUNT(1) FROM likes l WHERE l.idea_id = i.id) AS likes
     FROM ideas i";

#[derive(Clone)]
pub struct SqliteIdeaRepository {
    pool: SqlitePool,
}

impl SqliteIdeaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct IdeaRow {
    id: i64,
    title: String,
    description: Option<String>,
    owner_id: i64,
    created_at: DateTime<Utc>,
    likes: i64,
}

impl TryFrom<IdeaRow> for IdeaWithLikes {
    type Error = DomainError;

    fn try_from(row: IdeaRow) -> Result<Self, Self::Error> {
        let idea = Idea {
            id: IdeaId::new(row.id)?,
            title: IdeaTitle::new(row.title)?,
            description: row.description.map(IdeaDescription::new).transpose()?,
            owner_id: UserId::new(row.owner_id)?,
            created_at: row.created_at,
        };
        let likes = u64::try_from(row.likes)
            .map_err(|_| DomainError::Persistence("negative like count".into()))?;
        Ok(IdeaWithLikes::new(idea, likes))
    }
}

async fn fetch_idea(conn: &mut SqliteConnection, id: IdeaId) -> DomainResult<Option<IdeaWithLikes>> {
    let row = sqlx::query_as::<_, IdeaRow>(&format!("{SELECT_IDEA_WITH_LIKES} WHERE i.id = ?"))
        .bind(i64::from(id))
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    row.map(IdeaWithLikes::try_from).transpose()
}

/// Insert the like when the idea exists and the pair is new. Returns whether
/// a row was written.
///
/// This must be the first statement of the like transaction: SQLite only
/// waits on a busy writer when the transaction has not read yet, a read
/// followed by a write fails with `SQLITE_BUSY` instead. A concurrent insert
/// that slips past `ON CONFLICT` still surfaces as a unique violation and is
/// treated the same as an existing like.
async fn insert_like(conn: &mut SqliteConnection, like: NewLike) -> DomainResult<bool> {
    let result = sqlx::query(
        "INSERT INTO likes (user_id, idea_id, created_at)
         SELECT ?, ?, ?
         WHERE EXISTS (SELECT 1 FROM ideas WHERE id = ?)
         ON CONFLICT (user_id, idea_id) DO NOTHING",
    )
    .bind(i64::from(like.user_id))
    .bind(i64::from(like.idea_id))
    .bind(like.created_at)
    .bind(i64::from(like.idea_id))
    .execute(&mut *conn)
    .await;

    match result {
        Ok(done) => Ok(done.rows_affected() == 1),
        Err(err) if is_unique_violation(&err) => Ok(false),
        Err(err) if is_foreign_key_violation(&err) => {
            Err(DomainError::IdeaNotFound(i64::from(like.idea_id)))
        }
        Err(err) => Err(map_sqlx(err)),
    }
}

#[async_trait]
impl IdeaRepository for SqliteIdeaRepository {
    async fn insert(&self, new_idea: NewIdea) -> DomainResult<IdeaWithLikes> {
        let NewIdea {
            title,
            description,
            owner_id,
            created_at,
        } = new_idea;

        let row = sqlx::query_as::<_, IdeaRow>(
            "INSERT INTO ideas (title, description, owner_id, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING id, title, description, owner_id, created_at, 0 AS likes",
        )
        .bind(title.as_str())
        .bind(description.as_ref().map(IdeaDescription::as_str))
        .bind(i64::from(owner_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        IdeaWithLikes::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<IdeaWithLikes>> {
        let rows = sqlx::query_as::<_, IdeaRow>(&format!("{SELECT_IDEA_WITH_LIKES} ORDER BY i.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(IdeaWithLikes::try_from).collect()
    }

    async fn like(&self, like: NewLike) -> DomainResult<LikeOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let created = insert_like(&mut tx, like).await?;

        // Nothing was written when the idea is missing, dropping `tx` rolls back.
        let idea = fetch_idea(&mut tx, like.idea_id)
            .await?
            .ok_or(DomainError::IdeaNotFound(i64::from(like.idea_id)))?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok(if created {
            LikeOutcome::Created(idea)
        } else {
            LikeOutcome::AlreadyLiked(idea)
        })
    }
}
