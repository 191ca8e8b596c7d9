pub mod car;
pub mod customer;
pub mod health;
pub mod resource;
pub mod sales_order;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::models::{Car, Customer, SalesOrder};
use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/customers", resource::router::<Customer>())
        .nest("/cars", resource::router::<Car>())
        .nest("/sales-orders", resource::router::<SalesOrder>())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
