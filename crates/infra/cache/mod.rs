pub mod redis_connection;
pub mod shipping_costs;
