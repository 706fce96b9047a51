//! 订单草稿上下文
//!
//! 详情页确认数量后写入草稿，下单页读取。草稿只存在于内存，
//! 导航中断即丢弃；直接访问下单页时草稿为空，页面自行回退。

use eshop_shared::order::OrderDraft;
use leptos::prelude::*;

/// 跨页面传递的订单草稿
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，便于在组件间传递。
#[derive(Clone, Copy)]
pub struct OrderDraftContext {
    pub draft: RwSignal<Option<OrderDraft>>,
}

impl OrderDraftContext {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(None),
        }
    }
}

impl Default for OrderDraftContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取订单草稿上下文
pub fn use_order_draft() -> OrderDraftContext {
    use_context::<OrderDraftContext>().expect("OrderDraftContext should be provided")
}
