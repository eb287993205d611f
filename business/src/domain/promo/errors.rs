#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PromoError {
    #[error("promo.invalid_code")]
    InvalidCode,
}
