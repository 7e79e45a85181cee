//! 产品内存存储
//!
//! 按插入顺序保存产品，`next_id` 只增不减，删除后的 id 不会被复用。

use serde_json::Number;

use super::model::{Product, ProductPayload};
use crate::core::error::CoreError;

#[derive(Debug)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: u64,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// 带三条示例数据的存储，下一个 id 为 4
    pub fn seeded() -> Self {
        let seeds = [
            ("Organic Tomatoes", "Vegetables", 3.50),
            ("Fresh Apples", "Fruits", 2.75),
            ("Farm Eggs", "Dairy", 4.25),
        ];

        let mut store = Self::new();
        for (name, category, price) in seeds {
            if let Some(price) = Number::from_f64(price) {
                store.push(name.to_string(), category.to_string(), price);
            }
        }
        store
    }

    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get_by_id(&self, id: u64) -> Result<&Product, CoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))
    }

    pub fn insert(&mut self, payload: &ProductPayload) -> Result<Product, CoreError> {
        let fields = payload.validate()?;
        Ok(self.push(fields.name, fields.category, fields.price))
    }

    /// 整体替换，id 和位置保持不变；不存在时先返回 NotFound，不做校验
    pub fn replace(&mut self, id: u64, payload: &ProductPayload) -> Result<Product, CoreError> {
        let index = self.position(id)?;
        let fields = payload.validate()?;

        let product = &mut self.products[index];
        product.name = fields.name;
        product.category = fields.category;
        product.price = fields.price;
        Ok(product.clone())
    }

    pub fn remove(&mut self, id: u64) -> Result<Product, CoreError> {
        let index = self.position(id)?;
        Ok(self.products.remove(index))
    }

    fn push(&mut self, name: String, category: String, price: Number) -> Product {
        let product = Product {
            id: self.next_id,
            name,
            category,
            price,
        };
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    fn position(&self, id: u64) -> Result<usize, CoreError> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: impl std::fmt::Display) -> CoreError {
    CoreError::NotFound(format!("Product with ID {} not found", id))
}

/// 路径参数无法解析为整数时使用，原样带回请求中的值
pub fn not_found_raw(raw: &str) -> CoreError {
    not_found(raw)
}
