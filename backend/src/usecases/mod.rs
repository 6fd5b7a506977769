pub mod refunds;
pub mod shipping_costs;
pub mod wallet_adjustments;
