//! Post Queries

use async_trait::async_trait;

use crate::error::ApiError;
use crate::loader::PostSource;
use crate::models::{Post, PostId, Session};

use super::{post_by_id, visible_posts, SupabaseClient};

impl SupabaseClient {
    /// Single post by id; `None` when no row has that id
    pub async fn get_post(&self, id: &PostId, session: &Session) -> Result<Option<Post>, ApiError> {
        let rows: Vec<Post> = self.fetch_rows(&post_by_id(&id.0), session).await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait(?Send)]
impl PostSource for SupabaseClient {
    async fn visible_posts(&self, session: &Session) -> Result<Vec<Post>, ApiError> {
        let posts: Vec<Post> = self.fetch_rows(&visible_posts(), session).await?;
        log::info!("[API] Loaded {} posts", posts.len());
        Ok(posts)
    }
}
