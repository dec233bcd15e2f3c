use std::sync::Arc;

use jobboard_storage::FileJobStore;

#[tokio::main]
async fn main() {
    jobboard_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());

    let data_path =
        std::env::var("JOBS_DATA_PATH").unwrap_or_else(|_| "data/jobs.json".to_string());

    let store = Arc::new(FileJobStore::new(data_path));
    let app = jobboard_api::app::build_app(jwt_secret, store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap_or_else(|e| panic!("failed to bind 0.0.0.0:{port}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
