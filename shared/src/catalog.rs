//! 商品目录查询模块
//!
//! 分类过滤、名称搜索与排序的组合逻辑。每次重新计算都从
//! 原始抓取列表出发，三个谓词叠加生效，互不破坏。

use crate::Product;
use chrono::{DateTime, NaiveDate};
use std::cmp::{Ordering, Reverse};

/// 分类选择器中"全部"的特殊取值
pub const CATEGORY_ALL: &str = "all";

/// 排序方式
///
/// `key()` 返回 UI 下拉框使用的短键，与 `from_key` 互逆。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// 保持后端返回顺序
    #[default]
    Default,
    /// 价格从低到高
    PriceLowToHigh,
    /// 价格从高到低
    PriceHighToLow,
    /// 最新优先（按商品日期）
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Default,
        SortKey::PriceHighToLow,
        SortKey::PriceLowToHigh,
        SortKey::Newest,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "lth" => SortKey::PriceLowToHigh,
            "htl" => SortKey::PriceHighToLow,
            "nwst" => SortKey::Newest,
            _ => SortKey::Default,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceLowToHigh => "lth",
            SortKey::PriceHighToLow => "htl",
            SortKey::Newest => "nwst",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
            SortKey::Newest => "Newest",
        }
    }
}

/// 目录查询：分类 + 搜索 + 排序
///
/// `category` 为 `None` 表示"全部"。`search` 为空串时不过滤。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub sort: SortKey,
    pub search: String,
}

impl CatalogQuery {
    /// 从 UI 的分类键构造过滤项，"all" 映射为 `None`
    pub fn category_from_key(key: &str) -> Option<String> {
        if key == CATEGORY_ALL {
            None
        } else {
            Some(key.to_string())
        }
    }

    /// 对原始列表应用查询，返回新的展示列表
    ///
    /// 过滤在先、排序在后；排序均为稳定排序，等价元素保持
    /// 抓取顺序。`Default` 不重排。
    pub fn apply(&self, original: &[Product]) -> Vec<Product> {
        let needle = self.search.to_lowercase();
        let mut result: Vec<Product> = original
            .iter()
            .filter(|p| {
                self.category
                    .as_deref()
                    .map_or(true, |c| p.category == c)
            })
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Default => {}
            SortKey::PriceLowToHigh => {
                result.sort_by(|a, b| cmp_price(a.price, b.price));
            }
            SortKey::PriceHighToLow => {
                result.sort_by(|a, b| cmp_price(b.price, a.price));
            }
            SortKey::Newest => {
                // 解析失败的日期沉底
                result.sort_by_key(|p| Reverse(date_millis(&p.date).unwrap_or(i64::MIN)));
            }
        }
        result
    }
}

fn cmp_price(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// 将商品日期字符串解析为毫秒时间戳
///
/// 依次尝试 RFC 3339 与 `YYYY-MM-DD`，均失败返回 `None`。
pub fn date_millis(raw: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    None
}

#[cfg(test)]
mod tests;
