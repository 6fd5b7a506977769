use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::wallet_histories;

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = wallet_histories)]
pub struct InsertWalletHistoryEntity {
    pub wallet_id: Uuid,
    pub direction: String,
    pub amount: i64,
    pub description: String,
}
