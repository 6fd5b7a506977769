pub mod couriers;
pub mod order_statuses;
pub mod refund_statuses;
pub mod sort_order;
pub mod wallet_history_directions;
