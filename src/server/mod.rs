//! HTTP surface of the list stores.

mod error;
mod handlers;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post, put};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::ListConfig;
use crate::store::{ListStore, NameStore};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub todos: Arc<ListStore>,
    pub names: Arc<NameStore>,
}

impl ServerState {
    pub fn open(config: &ListConfig) -> Self {
        Self {
            todos: Arc::new(ListStore::new(config.todos_path())),
            names: Arc::new(NameStore::new(config.names_path())),
        }
    }
}

pub fn router(state: ServerState, static_directory: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/todos", get(handlers::list_todos))
        .route("/todo", post(handlers::create_todo))
        .route("/todo/checked/:id", put(handlers::toggle_checked))
        .route("/todo/prio/:id", put(handlers::update_priority))
        .route("/todo/delete/:id", delete(handlers::delete_todo))
        .route("/names", get(handlers::list_names))
        .route("/data", get(handlers::list_names))
        .route("/hello/:name", get(handlers::greet).post(handlers::greet))
        .route("/delete/:id", delete(handlers::delete_name));

    if let Some(dir) = static_directory.filter(|dir| dir.is_dir()) {
        log::info!(dir:% = dir.display(); "serving static assets");
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(middleware::from_fn(log_request)).with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    log::info!(
        method = method.as_str(),
        path = path.as_str(),
        status = response.status().as_u16();
        "handled request"
    );
    response
}

/// Seed the data files, bind and serve until the process is stopped.
pub async fn serve(config: &ListConfig) -> anyhow::Result<()> {
    config.ensure_files()?;

    let app = router(ServerState::open(config), config.static_directory.as_deref());
    let listener = TcpListener::bind(config.listen).await?;
    let addr = listener.local_addr()?;

    log::info!(
        addr:% = addr,
        data:% = config.data_directory.display();
        "list server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
