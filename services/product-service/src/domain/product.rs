//! 商品与商品目录

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 商品（启动时定义，运行期只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    pub category: String,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: Decimal,
        stock: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            category: category.into(),
        }
    }
}

/// 只读商品目录，克隆只复制引用
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Arc<[Product]>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// 内置目录
    pub fn builtin() -> Self {
        Self::new(vec![
            Product::new(1, "Laptop", Decimal::new(99999, 2), 15, "Electronics"),
            Product::new(2, "Headphones", Decimal::new(7999, 2), 50, "Electronics"),
            Product::new(3, "Coffee Maker", Decimal::new(4999, 2), 30, "Home"),
            Product::new(4, "Running Shoes", Decimal::new(8999, 2), 25, "Sports"),
            Product::new(5, "Backpack", Decimal::new(3999, 2), 40, "Accessories"),
        ])
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 名称不区分大小写的子串匹配，空查询匹配全部
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
