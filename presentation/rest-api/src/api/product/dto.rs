use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Base unit price, two decimals
    pub price: String,
    /// Product discount in percent
    #[oai(skip_serializing_if_is_none)]
    pub discount_percent: Option<String>,
    /// Unit price after the product discount
    pub effective_price: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            effective_price: product.effective_price().to_string(),
            price: product.price.to_string(),
            discount_percent: product.discount.map(|d| d.value().normalize().to_string()),
            name: product.name,
            image_url: product.image_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RefreshCatalogResponse {
    /// Number of products published to the catalog feed
    pub published: u64,
}
