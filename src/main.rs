//! Bloggin API server binary

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bloggin::api::{self, AppState};
use bloggin::config::Config;
use bloggin::db::repositories::{
    SqlxArticleRepository, SqlxCategoryRepository, SqlxCommentRepository, SqlxFaqRepository,
    SqlxTokenRepository, SqlxUserRepository,
};
use bloggin::db::{self, migrations};
use bloggin::services::{
    ArticleService, AuthService, CategoryService, CommentService, FaqService,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bloggin=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load_with_env(Path::new("config.yml")).context("Failed to load config")?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database)
        .await
        .context("Failed to create database pool")?;
    tracing::info!(url = %config.database.url, "Database connected");

    migrations::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let user_repo = SqlxUserRepository::boxed(pool.clone());
    let token_repo = SqlxTokenRepository::boxed(pool.clone());
    let article_repo = SqlxArticleRepository::boxed(pool.clone());
    let category_repo = SqlxCategoryRepository::boxed(pool.clone());
    let comment_repo = SqlxCommentRepository::boxed(pool.clone());
    let faq_repo = SqlxFaqRepository::boxed(pool.clone());

    let state = AppState {
        pool: pool.clone(),
        auth_service: Arc::new(AuthService::new(user_repo.clone(), token_repo)),
        user_repo,
        article_service: Arc::new(ArticleService::new(article_repo.clone())),
        category_service: Arc::new(CategoryService::new(category_repo)),
        comment_service: Arc::new(CommentService::new(comment_repo, article_repo)),
        faq_service: Arc::new(FaqService::new(faq_repo)),
        auth_config: Arc::new(config.auth.clone()),
    };

    let app = api::build_router(state, &config.server.cors_origin);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
