//! 产品数据模型

use serde::Serialize;
use serde_json::{Number, Value};

use crate::core::error::CoreError;

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide name, category, and price";
pub const INVALID_PRICE_MESSAGE: &str = "Price must be a positive number";

/// 价格按提交时的 JSON 数字原样保存，`1` 返回时仍是 `1`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: Number,
}

/// 创建/更新请求体
///
/// 字段保持为原始 JSON 值，类型检查在 [`ProductPayload::validate`] 中完成。
/// 字符串价格（如 `"5"`）不做转换。
#[derive(Debug, Clone, Default)]
pub struct ProductPayload {
    pub name: Option<Value>,
    pub category: Option<Value>,
    pub price: Option<Value>,
}

/// 校验通过后的字段
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub price: Number,
}

impl ProductPayload {
    pub fn new(name: impl Into<Value>, category: impl Into<Value>, price: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            price: Some(price.into()),
        }
    }

    /// 从任意 JSON 值构造请求体，非对象视为所有字段缺失
    pub fn from_json(body: &Value) -> Self {
        match body {
            Value::Object(map) => Self {
                name: map.get("name").cloned(),
                category: map.get("category").cloned(),
                price: map.get("price").cloned(),
            },
            _ => Self::default(),
        }
    }

    /// 先检查字段是否存在（空字符串、null、0 都算缺失），再检查价格
    pub fn validate(&self) -> Result<ProductFields, CoreError> {
        let name = non_empty_string(self.name.as_ref());
        let category = non_empty_string(self.category.as_ref());
        let price_present = self.price.as_ref().is_some_and(is_truthy);

        let (Some(name), Some(category), true) = (name, category, price_present) else {
            return Err(CoreError::InvalidInput(MISSING_FIELDS_MESSAGE.to_string()));
        };

        let price = match self.price.as_ref() {
            Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f > 0.0) => n.clone(),
            _ => return Err(CoreError::InvalidInput(INVALID_PRICE_MESSAGE.to_string())),
        };

        Ok(ProductFields {
            name: name.to_string(),
            category: category.to_string(),
            price,
        })
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && f.is_finite()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(payload: Value) -> String {
        match ProductPayload::from_json(&payload).validate() {
            Err(CoreError::InvalidInput(msg)) => msg,
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_payload() {
        let fields = ProductPayload::from_json(&json!({
            "name": "Goat Cheese",
            "category": "Dairy",
            "price": 6.5
        }))
        .validate()
        .unwrap();

        assert_eq!(fields.name, "Goat Cheese");
        assert_eq!(fields.category, "Dairy");
        assert_eq!(fields.price.as_f64(), Some(6.5));
    }

    #[test]
    fn test_integer_price_kept_as_integer() {
        let fields = ProductPayload::new("X", "Y", 1).validate().unwrap();
        assert_eq!(fields.price, Number::from(1));
        assert_eq!(serde_json::to_string(&fields.price).unwrap(), "1");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(message(json!({})), MISSING_FIELDS_MESSAGE);
        assert_eq!(message(json!({"name": "X", "category": "Y"})), MISSING_FIELDS_MESSAGE);
        assert_eq!(message(json!({"name": "", "category": "Y", "price": 1})), MISSING_FIELDS_MESSAGE);
        assert_eq!(message(json!({"name": "X", "category": null, "price": 1})), MISSING_FIELDS_MESSAGE);
        assert_eq!(message(json!({"name": 12, "category": "Y", "price": 1})), MISSING_FIELDS_MESSAGE);
        assert_eq!(message(json!(["X", "Y", 1])), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_empty_name_rejected_even_without_price() {
        assert_eq!(message(json!({"name": "", "category": "Y"})), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_zero_price_reported_as_missing() {
        assert_eq!(message(json!({"name": "X", "category": "Y", "price": 0})), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_invalid_price() {
        assert_eq!(message(json!({"name": "X", "category": "Y", "price": -1})), INVALID_PRICE_MESSAGE);
        assert_eq!(message(json!({"name": "X", "category": "Y", "price": "5"})), INVALID_PRICE_MESSAGE);
        assert_eq!(message(json!({"name": "X", "category": "Y", "price": true})), INVALID_PRICE_MESSAGE);
    }
}
