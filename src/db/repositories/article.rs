//! Article repository
//!
//! Database operations for articles. Mutations are scoped by (id, author)
//! in a single query, so a non-owned row behaves like a missing one.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::models::{Article, NewArticle};

/// Article repository trait
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Create a new article owned by the given author
    async fn create(&self, author_id: i64, input: &NewArticle) -> Result<Article>;

    /// Get an article by ID
    async fn get_by_id(&self, id: i64) -> Result<Option<Article>>;

    /// List all articles, newest first
    async fn list(&self) -> Result<Vec<Article>>;

    /// Update an article scoped by (id, author); None when no such row
    async fn update_owned(
        &self,
        id: i64,
        author_id: i64,
        input: &NewArticle,
    ) -> Result<Option<Article>>;

    /// Delete an article scoped by (id, author); false when no such row
    async fn delete_owned(&self, id: i64, author_id: i64) -> Result<bool>;
}

/// SQLx-based article repository implementation
pub struct SqlxArticleRepository {
    pool: SqlitePool,
}

impl SqlxArticleRepository {
    /// Create a new SQLx article repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn ArticleRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl ArticleRepository for SqlxArticleRepository {
    async fn create(&self, author_id: i64, input: &NewArticle) -> Result<Article> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO articles (title, content, tags, published_date, author_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.tags)
        .bind(now)
        .bind(author_id)
        .execute(&self.pool)
        .await
        .context("Failed to create article")?;

        Ok(Article {
            id: result.last_insert_rowid(),
            title: input.title.clone(),
            content: input.content.clone(),
            tags: input.tags.clone(),
            published_date: now,
            author_id,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Article>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, tags, published_date, author_id
            FROM articles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get article by ID")?;

        match row {
            Some(row) => Ok(Some(row_to_article(&row))),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Article>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, tags, published_date, author_id
            FROM articles
            ORDER BY published_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list articles")?;

        Ok(rows.iter().map(row_to_article).collect())
    }

    async fn update_owned(
        &self,
        id: i64,
        author_id: i64,
        input: &NewArticle,
    ) -> Result<Option<Article>> {
        let result = sqlx::query(
            r#"
            UPDATE articles
            SET title = ?, content = ?, tags = ?
            WHERE id = ? AND author_id = ?
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.tags)
        .bind(id)
        .bind(author_id)
        .execute(&self.pool)
        .await
        .context("Failed to update article")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    async fn delete_owned(&self, id: i64, author_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ? AND author_id = ?")
            .bind(id)
            .bind(author_id)
            .execute(&self.pool)
            .await
            .context("Failed to delete article")?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_article(row: &sqlx::sqlite::SqliteRow) -> Article {
    Article {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        tags: row.get("tags"),
        published_date: row.get("published_date"),
        author_id: row.get("author_id"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::user::{SqlxUserRepository, UserRepository};
    use crate::db::{create_test_pool, migrations};
    use crate::models::User;
    use crate::services::password::hash_password;

    async fn setup() -> (SqlitePool, SqlxArticleRepository, i64) {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let users = SqlxUserRepository::new(pool.clone());
        let user = users
            .create(&User::new(
                "author".to_string(),
                "author@example.com".to_string(),
                hash_password("pw").expect("Failed to hash password"),
            ))
            .await
            .expect("Failed to create user");

        let repo = SqlxArticleRepository::new(pool.clone());
        (pool, repo, user.id)
    }

    async fn second_user(pool: &SqlitePool) -> i64 {
        let users = SqlxUserRepository::new(pool.clone());
        users
            .create(&User::new(
                "other".to_string(),
                "other@example.com".to_string(),
                hash_password("pw").expect("Failed to hash password"),
            ))
            .await
            .expect("Failed to create user")
            .id
    }

    fn sample_article() -> NewArticle {
        NewArticle {
            title: "Hello".to_string(),
            content: "First post".to_string(),
            tags: "intro".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_article() {
        let (_pool, repo, author_id) = setup().await;

        let created = repo
            .create(author_id, &sample_article())
            .await
            .expect("Failed to create article");

        assert!(created.id > 0);
        assert_eq!(created.author_id, author_id);

        let found = repo
            .get_by_id(created.id)
            .await
            .expect("Failed to get article")
            .expect("Article not found");
        assert_eq!(found.title, "Hello");
        assert_eq!(found.content, "First post");
        assert_eq!(found.tags, "intro");
    }

    #[tokio::test]
    async fn test_get_article_not_found() {
        let (_pool, repo, _author_id) = setup().await;

        let found = repo.get_by_id(999).await.expect("Failed to get article");

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_articles_empty() {
        let (_pool, repo, _author_id) = setup().await;

        let articles = repo.list().await.expect("Failed to list articles");

        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_list_articles() {
        let (_pool, repo, author_id) = setup().await;
        repo.create(author_id, &sample_article())
            .await
            .expect("Failed to create article");
        repo.create(
            author_id,
            &NewArticle {
                title: "Second".to_string(),
                content: "Another post".to_string(),
                tags: String::new(),
            },
        )
        .await
        .expect("Failed to create article");

        let articles = repo.list().await.expect("Failed to list articles");

        assert_eq!(articles.len(), 2);
    }

    #[tokio::test]
    async fn test_update_owned() {
        let (_pool, repo, author_id) = setup().await;
        let created = repo
            .create(author_id, &sample_article())
            .await
            .expect("Failed to create article");

        let updated = repo
            .update_owned(
                created.id,
                author_id,
                &NewArticle {
                    title: "Edited".to_string(),
                    content: "Edited body".to_string(),
                    tags: "edited".to_string(),
                },
            )
            .await
            .expect("Failed to update article")
            .expect("Article should be updatable by its author");

        assert_eq!(updated.title, "Edited");
        assert_eq!(updated.content, "Edited body");
    }

    #[tokio::test]
    async fn test_update_owned_wrong_author() {
        let (pool, repo, author_id) = setup().await;
        let other_id = second_user(&pool).await;
        let created = repo
            .create(author_id, &sample_article())
            .await
            .expect("Failed to create article");

        let result = repo
            .update_owned(created.id, other_id, &sample_article())
            .await
            .expect("Failed to run update");

        assert!(result.is_none());

        // The row is untouched
        let found = repo
            .get_by_id(created.id)
            .await
            .expect("Failed to get article")
            .expect("Article not found");
        assert_eq!(found.title, "Hello");
    }

    #[tokio::test]
    async fn test_delete_owned() {
        let (_pool, repo, author_id) = setup().await;
        let created = repo
            .create(author_id, &sample_article())
            .await
            .expect("Failed to create article");

        let deleted = repo
            .delete_owned(created.id, author_id)
            .await
            .expect("Failed to delete article");

        assert!(deleted);
        let found = repo.get_by_id(created.id).await.expect("Failed to get article");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_owned_wrong_author() {
        let (pool, repo, author_id) = setup().await;
        let other_id = second_user(&pool).await;
        let created = repo
            .create(author_id, &sample_article())
            .await
            .expect("Failed to create article");

        let deleted = repo
            .delete_owned(created.id, other_id)
            .await
            .expect("Failed to run delete");

        assert!(!deleted);
        let found = repo.get_by_id(created.id).await.expect("Failed to get article");
        assert!(found.is_some());
    }
}
