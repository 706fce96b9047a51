//! 订单草稿模块
//!
//! 详情页确认数量后构造 `OrderDraft`，经导航临时传递给下单页，
//! 不做任何持久化。数量校验同时约束下界与库存上界。

use crate::Product;
use std::fmt::Display;

/// 临时订单草稿：商品快照 + 数量
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub product: Product,
    pub quantity: u32,
}

impl OrderDraft {
    /// 订单总价
    pub fn total_price(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// 数量校验失败的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// 输入不是一个非负整数
    NotANumber,
    /// 数量必须至少为 1
    TooSmall,
    /// 超出当前库存
    ExceedsStock(u32),
}

impl Display for QuantityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityError::NotANumber => write!(f, "Quantity must be a whole number"),
            QuantityError::TooSmall => write!(f, "Quantity must be at least 1"),
            QuantityError::ExceedsStock(available) => {
                write!(f, "Only {} item(s) available", available)
            }
        }
    }
}

/// 校验用户输入的数量
///
/// 合法区间为 `1..=available`，返回解析后的数量。
pub fn validate_quantity(raw: &str, available: u32) -> Result<u32, QuantityError> {
    let quantity: u32 = raw
        .trim()
        .parse()
        .map_err(|_| QuantityError::NotANumber)?;
    if quantity < 1 {
        return Err(QuantityError::TooSmall);
    }
    if quantity > available {
        return Err(QuantityError::ExceedsStock(available));
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(validate_quantity("0", 10), Err(QuantityError::TooSmall));
    }

    #[test]
    fn one_is_accepted() {
        assert_eq!(validate_quantity("1", 10), Ok(1));
    }

    #[test]
    fn stock_boundary_is_inclusive() {
        assert_eq!(validate_quantity("10", 10), Ok(10));
        assert_eq!(
            validate_quantity("11", 10),
            Err(QuantityError::ExceedsStock(10))
        );
    }

    #[test]
    fn garbage_and_negatives_are_rejected() {
        assert_eq!(validate_quantity("abc", 10), Err(QuantityError::NotANumber));
        assert_eq!(validate_quantity("-1", 10), Err(QuantityError::NotANumber));
        assert_eq!(validate_quantity("", 10), Err(QuantityError::NotANumber));
        assert_eq!(validate_quantity("1.5", 10), Err(QuantityError::NotANumber));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(validate_quantity(" 2 ", 10), Ok(2));
    }

    #[test]
    fn draft_total_price() {
        let draft = OrderDraft {
            product: Product {
                id: 1,
                name: "Widget".into(),
                category: "tools".into(),
                price: 19.5,
                available_items: 5,
                description: String::new(),
                image_url: String::new(),
                date: String::new(),
            },
            quantity: 2,
        };
        assert!((draft.total_price() - 39.0).abs() < f64::EPSILON);
    }
}
