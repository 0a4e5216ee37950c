//! Catalog Context - Value Objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CatalogError;

/// 商品名称最大长度（与 products.name 列宽一致）
const PRODUCT_NAME_MAX_LEN: usize = 255;

/// 分类名称最大长度（与 categories.name 列宽一致）
const CATEGORY_NAME_MAX_LEN: usize = 100;

/// 价格小数位数
const PRICE_SCALE: u32 = 2;

/// 商品名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(name: impl Into<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidProductName("名称不能为空"));
        }
        if name.chars().count() > PRODUCT_NAME_MAX_LEN {
            return Err(CatalogError::InvalidProductName("名称长度不能超过255字符"));
        }
        Ok(Self(name))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// 分类名称
///
/// 分类通过名称进行 get-or-create，因此名称在表内唯一
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(name: impl Into<String>) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidCategoryName("名称不能为空"));
        }
        if name.chars().count() > CATEGORY_NAME_MAX_LEN {
            return Err(CatalogError::InvalidCategoryName("名称长度不能超过100字符"));
        }
        Ok(Self(name))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// 商品价格 - 定点小数，保留两位
///
/// 不变量:
/// - 非负
/// - 整数部分不超过 8 位（DECIMAL(10,2)）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, CatalogError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CatalogError::InvalidPrice("价格不能为负数"));
        }
        let value = value.round_dp(PRICE_SCALE);
        if value >= Self::upper_bound() {
            return Err(CatalogError::InvalidPrice("价格超出范围"));
        }
        Ok(Self(value))
    }

    fn upper_bound() -> Decimal {
        Decimal::new(100_000_000, 0)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}
