//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 替代 `gloo-net`，提供简洁的 HTTP 客户端接口。
//! JSON 编解码经由 `serde-json-wasm`。

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// HTTP 请求方法
#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// HTTP 错误类型
#[derive(Debug)]
pub enum HttpError {
    /// 请求构建失败
    RequestBuildFailed(String),
    /// 网络请求失败
    NetworkError(String),
    /// 响应解析失败
    ResponseParseFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::RequestBuildFailed(msg) => write!(f, "request build failed: {}", msg),
            HttpError::NetworkError(msg) => write!(f, "network error: {}", msg),
            HttpError::ResponseParseFailed(msg) => write!(f, "response parse failed: {}", msg),
        }
    }
}

/// HTTP 响应封装
pub struct HttpResponse {
    inner: Response,
}

impl HttpResponse {
    /// 获取 HTTP 状态码
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    /// 检查响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        self.inner.ok()
    }

    /// 获取响应体文本
    pub async fn text(self) -> Result<String, HttpError> {
        let promise = self
            .inner
            .text()
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| HttpError::ResponseParseFailed("body is not a string".to_string()))
    }

    /// 将响应体按 JSON 反序列化
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let text = self.text().await?;
        serde_json_wasm::from_str(&text)
            .map_err(|e| HttpError::ResponseParseFailed(e.to_string()))
    }
}

/// HTTP 请求构建器
pub struct HttpRequestBuilder {
    url: String,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl HttpRequestBuilder {
    fn new(url: String, method: HttpMethod) -> Self {
        Self {
            url,
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// 添加请求头
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// 设置 JSON 请求体，同时带上 Content-Type
    pub fn json<T: Serialize>(self, value: &T) -> Result<Self, HttpError> {
        let body = serde_json_wasm::to_string(value)
            .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?;
        Ok(self.header("Content-Type", "application/json").body(body))
    }

    /// 设置原始请求体
    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// 发送请求
    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        let headers = Headers::new()
            .map_err(|e| HttpError::RequestBuildFailed(format!("create headers: {:?}", e)))?;

        for (key, value) in &self.headers {
            headers
                .set(key, value)
                .map_err(|e| HttpError::RequestBuildFailed(format!("set header: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(self.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &self.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::NetworkError("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::NetworkError(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::ResponseParseFailed(format!("not a Response: {:?}", e)))?;

        Ok(HttpResponse { inner: response })
    }
}

/// 轻量级 HTTP 客户端
pub struct HttpClient;

impl HttpClient {
    /// 创建 GET 请求
    pub fn get(url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), HttpMethod::Get)
    }

    /// 创建 POST 请求
    pub fn post(url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), HttpMethod::Post)
    }

    /// 创建 PUT 请求
    pub fn put(url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), HttpMethod::Put)
    }

    /// 创建 DELETE 请求
    pub fn delete(url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), HttpMethod::Delete)
    }
}
