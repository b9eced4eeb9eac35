use async_trait::async_trait;

use super::model::*;

/// Storage contract for the liked-movie table. Sync is full-replace: the
/// store always equals the last payload handed to `replace_all`.
#[async_trait]
pub trait LikesRepo: Send + Sync {
    /// Delete every stored like and insert the given ones in payload order,
    /// as one transaction. Returns the number of rows inserted.
    async fn replace_all(&self, likes: &[NewLikedMovie]) -> DbResult<u64>;

    /// Full scan, most recently liked first.
    async fn list_all(&self) -> DbResult<Vec<LikedMovie>>;

    async fn count(&self) -> DbResult<i64>;
}
