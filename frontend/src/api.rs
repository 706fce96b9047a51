//! API 网关层
//!
//! 无状态的远程调用集合：持有后端地址与可选的会话令牌，
//! 存在令牌时为请求附加 `Authorization: Bearer <token>`。
//! 不做重试、退避或超时，每个调用要么成功一次，要么作为
//! 终态失败交给 UI 呈现。

use crate::web::{HttpClient, HttpRequestBuilder};
use eshop_shared::{
    CreateOrderRequest, HEADER_AUTHORIZATION, Product, SaveProductRequest, SigninRequest,
    SigninResponse, SignupRequest,
};

#[derive(Clone, Debug, PartialEq)]
pub struct EshopApi {
    pub base_url: String,
    token: Option<String>,
}

impl EshopApi {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // 附加 Bearer 认证头（未登录时原样返回）
    fn authorize(&self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        match &self.token {
            Some(token) => builder.header(HEADER_AUTHORIZATION, &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// 登录
    pub async fn signin(&self, req: &SigninRequest) -> Result<SigninResponse, String> {
        let res = HttpClient::post(&self.url("/api/auth/signin"))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("sign in rejected: {}", res.status()));
        }

        res.json::<SigninResponse>().await.map_err(|e| e.to_string())
    }

    /// 注册新账号
    pub async fn signup(&self, req: &SignupRequest) -> Result<(), String> {
        let res = HttpClient::post(&self.url("/api/auth/signup"))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("sign up rejected: {}", res.status()));
        }
        Ok(())
    }

    /// 获取商品列表
    pub async fn get_products(&self) -> Result<Vec<Product>, String> {
        let res = self
            .authorize(HttpClient::get(&self.url("/api/products")))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("fetching products failed: {}", res.status()));
        }

        res.json::<Vec<Product>>().await.map_err(|e| e.to_string())
    }

    /// 获取分类列表
    pub async fn get_categories(&self) -> Result<Vec<String>, String> {
        let res = self
            .authorize(HttpClient::get(&self.url("/api/products/categories")))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("fetching categories failed: {}", res.status()));
        }

        res.json::<Vec<String>>().await.map_err(|e| e.to_string())
    }

    /// 获取单个商品
    pub async fn get_product(&self, id: u32) -> Result<Product, String> {
        let res = self
            .authorize(HttpClient::get(&self.url(&format!("/api/products/{}", id))))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("fetching product failed: {}", res.status()));
        }

        res.json::<Product>().await.map_err(|e| e.to_string())
    }

    /// 删除商品（管理员能力，后端最终裁决）
    pub async fn delete_product(&self, id: u32) -> Result<(), String> {
        let res = self
            .authorize(HttpClient::delete(
                &self.url(&format!("/api/products/{}", id)),
            ))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("deleting product failed: {}", res.status()));
        }
        Ok(())
    }

    /// 新增商品
    pub async fn create_product(&self, req: &SaveProductRequest) -> Result<(), String> {
        let res = self
            .authorize(
                HttpClient::post(&self.url("/api/products"))
                    .json(req)
                    .map_err(|e| e.to_string())?,
            )
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("creating product failed: {}", res.status()));
        }
        Ok(())
    }

    /// 更新商品
    pub async fn update_product(&self, id: u32, req: &SaveProductRequest) -> Result<(), String> {
        let res = self
            .authorize(
                HttpClient::put(&self.url(&format!("/api/products/{}", id)))
                    .json(req)
                    .map_err(|e| e.to_string())?,
            )
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("updating product failed: {}", res.status()));
        }
        Ok(())
    }

    /// 提交订单
    pub async fn place_order(&self, req: &CreateOrderRequest) -> Result<(), String> {
        let res = self
            .authorize(
                HttpClient::post(&self.url("/api/orders"))
                    .json(req)
                    .map_err(|e| e.to_string())?,
            )
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("placing order failed: {}", res.status()));
        }
        Ok(())
    }
}
