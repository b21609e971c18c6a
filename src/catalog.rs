//! In-memory product catalog

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Product ID type
pub type ProductId = i64;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u32,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// Immutable collection of products, fixed for the process lifetime.
///
/// Constructed once at startup and shared behind `Arc`; every operation is a
/// pure read over immutable data.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(Error::DuplicateProductId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// All products in definition order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a single product.
    ///
    /// Absence is a normal outcome for any id, including zero and negative
    /// values; this never panics.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn product(
    id: ProductId,
    name: &str,
    price: u32,
    category: &str,
    image: &str,
    description: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
        image: image.to_string(),
        description: description.to_string(),
    }
}

/// The built-in storefront dataset.
pub fn builtin_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Oversized Structure Blazer",
            189,
            "Outerwear",
            "https://images.unsplash.com/photo-1737540995419-21ed4ded15a6?crop=entropy&cs=srgb&fm=jpg&q=85",
            "A contemporary take on tailoring with exaggerated shoulders and a relaxed silhouette. Perfect for both professional and casual settings.",
        ),
        product(
            2,
            "Essential Cotton Sweatshirt",
            85,
            "Tops",
            "https://images.unsplash.com/photo-1693901257178-b5fcb8f036a8?crop=entropy&cs=srgb&fm=jpg&q=85",
            "Soft, breathable cotton in a classic fit. Your everyday essential for effortless style and comfort.",
        ),
        product(
            3,
            "Tailored Wool Coat",
            245,
            "Outerwear",
            "https://images.unsplash.com/photo-1737540995958-1b1b3efd391f?crop=entropy&cs=srgb&fm=jpg&q=85",
            "Premium wool blend with impeccable tailoring. A timeless investment piece for the modern wardrobe.",
        ),
        product(
            4,
            "Noir Leather Jacket",
            320,
            "Outerwear",
            "https://images.unsplash.com/photo-1616404662085-b81be2812cf2?crop=entropy&cs=srgb&fm=jpg&q=85",
            "Genuine leather with a sleek, minimalist design. Crafted to develop character over time while maintaining its sophisticated edge.",
        ),
        product(
            5,
            "Winter Trench Coat",
            210,
            "Outerwear",
            "https://images.unsplash.com/photo-1632149877166-f75d49000351?crop=entropy&cs=srgb&fm=jpg&q=85",
            "Classic trench styling with modern proportions. Water-resistant fabric meets timeless design for unpredictable weather.",
        ),
        product(
            6,
            "Signature White Suit",
            299,
            "Suits",
            "https://images.unsplash.com/photo-1746864946956-0c047289abaf?crop=entropy&cs=srgb&fm=jpg&q=85",
            "A statement piece in pristine white. Impeccably tailored for those who dare to stand out with understated elegance.",
        ),
        product(
            7,
            "Silk Evening Dress",
            180,
            "Dresses",
            "https://images.unsplash.com/photo-1641840007671-06412f440b65?crop=entropy&cs=srgb&fm=jpg&q=85",
            "Luxurious silk that drapes beautifully. Designed for special occasions with a minimalist aesthetic that lets the fabric speak.",
        ),
        product(
            8,
            "Everyday Tote",
            120,
            "Accessories",
            "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?crop=entropy&cs=srgb&fm=jpg&q=85",
            "Spacious and structured with clean lines. The perfect companion for work, travel, and everything in between.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_holds_eight_products() {
        let catalog = Catalog::new(builtin_products()).unwrap();
        assert_eq!(catalog.len(), 8);

        let first = &catalog.list_all()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Oversized Structure Blazer");
        assert_eq!(first.price, 189);
        assert_eq!(first.category, "Outerwear");
    }

    #[test]
    fn listing_is_stable_across_calls() {
        let catalog = Catalog::new(builtin_products()).unwrap();
        let first: Vec<ProductId> = catalog.list_all().iter().map(|p| p.id).collect();
        let second: Vec<ProductId> = catalog.list_all().iter().map(|p| p.id).collect();
        assert_eq!(first, second);
        assert_eq!(first, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn find_by_id_round_trips_every_listed_product() {
        let catalog = Catalog::new(builtin_products()).unwrap();
        for product in catalog.list_all() {
            assert_eq!(catalog.find_by_id(product.id), Some(product));
        }
    }

    #[test]
    fn absent_ids_return_none() {
        let catalog = Catalog::new(builtin_products()).unwrap();
        for id in [999, 0, -1, i64::MIN, i64::MAX] {
            assert!(catalog.find_by_id(id).is_none());
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut products = builtin_products();
        products.push(products[0].clone());

        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, Error::DuplicateProductId(1)));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.list_all().is_empty());
    }

    #[test]
    fn description_defaults_to_empty_string() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "Bare",
            "price": 10,
            "category": "Misc",
            "image": "https://example.com/bare.jpg"
        }))
        .unwrap();

        assert_eq!(product.description, "");
    }
}
