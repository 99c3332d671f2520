use admin_gateway_shared::{responses, users, AppState};
use lambda_http::{http::Method, Body, Error, Request, Response};
use std::sync::Arc;

/// Main Lambda handler - a single route where the verb selects the operation
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    tracing::info!("manage-users invoked - Method: {}", method);

    // Handle CORS preflight
    if method == "OPTIONS" {
        return responses::preflight();
    }

    match method {
        &Method::GET => users::list_users(&state.admin_client).await,
        &Method::POST => users::create_user(&state.admin_client, event.body()).await,
        &Method::PUT => users::update_user(&state.admin_client, event.body()).await,
        &Method::DELETE => users::deactivate_user(&state.admin_client, event.body()).await,
        _ => responses::method_not_allowed(),
    }
}
