pub mod enums;
pub mod refunds;
pub mod shipping_costs;
pub mod wallets;
