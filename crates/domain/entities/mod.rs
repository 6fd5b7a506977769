pub mod order_items;
pub mod orders;
pub mod product_details;
pub mod refunds;
pub mod wallet_histories;
pub mod wallets;
