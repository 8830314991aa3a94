mod core;
mod features;
mod modules;
mod shared;

use crate::core::app::{api_router, AppServices};
use crate::core::config::{Config, StorageBackend};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::categories::{CategoryRepository, PgCategoryRepository};
use crate::features::questions::{PgQuestionRepository, QuestionRepository};
use crate::features::quizzes::{QuestionPicker, RandomPicker, SeededPicker};
use crate::modules::storage::InMemoryStore;
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

type Repositories = (Arc<dyn CategoryRepository>, Arc<dyn QuestionRepository>);

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn build_repositories(config: &Config) -> anyhow::Result<Repositories> {
    match (config.storage.backend, &config.database) {
        (StorageBackend::Postgres, Some(db_config)) => {
            let pool = database::create_pool(db_config).await?;
            tracing::info!("Database connection pool created");

            let missing = database::missing_tables(&pool).await?;
            if !missing.is_empty() {
                tracing::warn!(
                    "Database is missing tables {:?}; requests touching them will fail",
                    missing
                );
            }

            let categories: Arc<dyn CategoryRepository> =
                Arc::new(PgCategoryRepository::new(pool.clone()));
            let questions: Arc<dyn QuestionRepository> = Arc::new(PgQuestionRepository::new(pool));
            Ok((categories, questions))
        }
        (StorageBackend::Postgres, None) => Err(anyhow::anyhow!(
            "Postgres backend selected without database configuration"
        )),
        (StorageBackend::Memory, _) => {
            let store = if config.storage.seed_categories {
                Arc::new(InMemoryStore::with_default_categories())
            } else {
                Arc::new(InMemoryStore::new())
            };
            tracing::info!(
                "In-memory store initialized (seed_categories={})",
                config.storage.seed_categories
            );
            let categories: Arc<dyn CategoryRepository> = store.clone();
            let questions: Arc<dyn QuestionRepository> = store;
            Ok((categories, questions))
        }
    }
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: backend={:?}, tokio_worker_threads={}, pid={}",
        config.storage.backend,
        worker_threads,
        std::process::id()
    );

    let (category_repository, question_repository) = build_repositories(&config).await?;

    let picker: Arc<dyn QuestionPicker> = match config.quiz.random_seed {
        Some(seed) => {
            tracing::info!("Quiz picker seeded with {}", seed);
            Arc::new(SeededPicker::new(seed))
        }
        None => Arc::new(RandomPicker),
    };

    let services = AppServices::new(category_repository, question_repository, picker);
    tracing::info!("Services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let app = Router::new()
        .merge(swagger)
        .merge(api_router(&services))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;
    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
