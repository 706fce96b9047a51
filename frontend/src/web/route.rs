//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、路径解析与守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Signup,
    /// 商品列表 (需要认证)
    Products,
    /// 商品详情 (需要认证)
    ProductDetail(u32),
    /// 新增商品 (需要认证)
    AddProduct,
    /// 编辑商品 (需要认证)
    EditProduct(u32),
    /// 下单页面 (需要认证)
    PlaceOrder,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        if let Some(rest) = path.strip_prefix("/products/") {
            return rest
                .parse::<u32>()
                .map(Self::ProductDetail)
                .unwrap_or(Self::NotFound);
        }
        if let Some(rest) = path.strip_prefix("/editProduct/") {
            return rest
                .parse::<u32>()
                .map(Self::EditProduct)
                .unwrap_or(Self::NotFound);
        }
        match path {
            "/" | "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/products" => Self::Products,
            "/addProduct" => Self::AddProduct,
            "/placeOrder" => Self::PlaceOrder,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Products => "/products".to_string(),
            Self::ProductDetail(id) => format!("/products/{}", id),
            Self::AddProduct => "/addProduct".to_string(),
            Self::EditProduct(id) => format!("/editProduct/{}", id),
            Self::PlaceOrder => "/placeOrder".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Products
                | Self::ProductDetail(_)
                | Self::AddProduct
                | Self::EditProduct(_)
                | Self::PlaceOrder
        )
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Products
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
