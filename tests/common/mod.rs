use tokio::net::TcpListener;
use workforce::{build_router, WorkerStorage};

/// Helper: serve the API over a fresh in-memory database on an ephemeral port.
/// Returns the base URL.
pub async fn spawn_app() -> String {
    let storage = WorkerStorage::in_memory().await.unwrap();
    storage.init_schema().await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(storage)).await.unwrap();
    });

    format!("http://{}", addr)
}
