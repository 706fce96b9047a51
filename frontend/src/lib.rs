//! E-Shop 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，含认证守卫）
//! - `auth`: 认证状态管理
//! - `order`: 订单草稿的跨页面传递
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    mod icons;
    mod navbar;
    mod toast;
    pub mod login;
    pub mod place_order;
    pub mod product_detail;
    pub mod product_form;
    pub mod product_list;
    pub mod signup;
}
mod config;
mod order;

use crate::auth::{AuthContext, init_auth};
use crate::components::login::LoginPage;
use crate::components::place_order::PlaceOrderPage;
use crate::components::product_detail::ProductDetailPage;
use crate::components::product_form::ProductFormPage;
use crate::components::product_list::ProductListPage;
use crate::components::signup::SignupPage;
use crate::order::OrderDraftContext;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::{HttpClient, HttpRequestBuilder};
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Products => view! { <ProductListPage /> }.into_any(),
        AppRoute::ProductDetail(id) => view! { <ProductDetailPage id=id /> }.into_any(),
        AppRoute::AddProduct => view! { <ProductFormPage /> }.into_any(),
        AppRoute::EditProduct(id) => view! { <ProductFormPage id=id /> }.into_any(),
        AppRoute::PlaceOrder => view! { <PlaceOrderPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化认证状态（从 LocalStorage 预填上次邮箱）
    init_auth(&auth_ctx);

    // 3. 订单草稿上下文：详情页 -> 下单页 的临时状态通道
    provide_context(OrderDraftContext::new());

    // 4. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 5. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
