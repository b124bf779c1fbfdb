pub mod feed_routes;
pub mod tracking_routes;
