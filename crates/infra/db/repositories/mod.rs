pub mod orders;
pub mod product_details;
pub mod refunds;
pub mod wallets;
