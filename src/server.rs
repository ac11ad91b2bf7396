//! HTTP endpoint for the GraphQL schema.
//!
//! A single route, `/graphql`: `POST` executes a request, `GET` serves the
//! GraphiQL explorer (or executes a query-string request when the explorer
//! is disabled).

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use crate::error::{BookshelfError, Result};
use crate::graphql::BookshelfSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub fn router(schema: BookshelfSchema, graphiql: bool) -> Router {
    let route = if graphiql {
        get(graphiql_handler).post(graphql_handler)
    } else {
        get(graphql_handler).post(graphql_handler)
    };

    Router::new().route(GRAPHQL_PATH, route).with_state(schema)
}

/// Binds `address` and serves until Ctrl-C.
pub async fn run_server(schema: BookshelfSchema, address: &str, graphiql: bool) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| BookshelfError::Server(format!("Failed to bind {}: {}", address, e)))?;
    serve(listener, schema, graphiql).await
}

pub async fn serve(listener: TcpListener, schema: BookshelfSchema, graphiql: bool) -> Result<()> {
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, graphiql, "Server is running !");

    axum::serve(listener, router(schema, graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
