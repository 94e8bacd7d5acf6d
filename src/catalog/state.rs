//! Product Catalog State
//!
//! Holds the storefront listing and answers id/category lookups. The catalog
//! is owned by the application state and is never mutated by the stores.

use super::models::{Product, ProductCategory};

/// Read-only product listing.
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::storefront_listing()
    }
}

impl ProductCatalog {
    /// Creates a catalog over an explicit listing.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in storefront listing.
    pub fn storefront_listing() -> Self {
        fn entry(
            id: i64,
            name: &str,
            price: f64,
            category: ProductCategory,
            description: &str,
        ) -> Product {
            Product {
                id,
                name: name.to_string(),
                description: Some(description.to_string()),
                price,
                original_price: None,
                image_url: None,
                category: Some(category),
            }
        }

        Self::new(vec![
            entry(
                1,
                "Explosion Box",
                799.0,
                ProductCategory::Bestseller,
                "Pop-up photo box with hidden compartments",
            ),
            entry(
                2,
                "Photo Lamp",
                999.0,
                ProductCategory::Bestseller,
                "Warm-glow lamp printed with your photo",
            ),
            entry(
                3,
                "Chocolate Bouquet",
                599.0,
                ProductCategory::Bestseller,
                "Assorted chocolates arranged as a bouquet",
            ),
            entry(
                4,
                "Custom Mug",
                349.0,
                ProductCategory::Bestseller,
                "Ceramic mug with a personalized print",
            ),
            entry(
                5,
                "Birthday Candle Set",
                299.0,
                ProductCategory::Birthday,
                "Scented candles in a celebration tin",
            ),
            entry(
                6,
                "Balloon Surprise Kit",
                449.0,
                ProductCategory::Birthday,
                "Confetti balloons with a message banner",
            ),
            entry(
                7,
                "Anniversary Photo Frame",
                699.0,
                ProductCategory::Anniversary,
                "Engraved twin frame for your milestone",
            ),
            entry(
                8,
                "Leather Wallet",
                899.0,
                ProductCategory::ForHim,
                "Full-grain wallet with monogram option",
            ),
            entry(
                9,
                "Scented Candle Trio",
                549.0,
                ProductCategory::ForHer,
                "Lavender, vanilla and rose trio",
            ),
            entry(
                10,
                "Engraved Keychain",
                249.0,
                ProductCategory::Personalized,
                "Steel keychain engraved with a name",
            ),
            entry(
                11,
                "Polaroid Album",
                399.0,
                ProductCategory::NewArrival,
                "Hand-bound album for instant photos",
            ),
        ])
    }

    /// Full listing, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Looks a product up by id.
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products carrying the given category tag.
    pub fn by_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == Some(category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id_and_category() {
        let catalog = ProductCatalog::storefront_listing();

        let mug = catalog.get(4).unwrap();
        assert_eq!(mug.name, "Custom Mug");
        assert_eq!(mug.price, 349.0);

        assert!(catalog.get(9999).is_none());

        let bestsellers = catalog.by_category(ProductCategory::Bestseller);
        assert_eq!(bestsellers.len(), 4);
        assert!(bestsellers.iter().all(|p| p.category == Some(ProductCategory::Bestseller)));
    }
}
