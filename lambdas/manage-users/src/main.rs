use admin_gateway_shared::admin::AdminClient;
use admin_gateway_shared::config::Config;
use admin_gateway_shared::AppState;
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Read configuration and build the admin client once at startup
    let config = Config::from_env()?;
    let state = AppState::new(AdminClient::new(&config));

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
