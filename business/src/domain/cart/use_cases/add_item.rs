use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::model::{CartLineItem, LineItemAttributes};
use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::ShopperId;

pub struct AddCartItemParams {
    pub shopper_id: ShopperId,
    pub product_id: Uuid,
    pub attributes: LineItemAttributes,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartLineItem, ProductError>;
}
