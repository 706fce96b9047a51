//! 应用配置模块
//!
//! 后端地址在编译期注入：`build.rs` 读取 `.env` 并导出为
//! rustc 环境变量，此处通过 `option_env!` 取用。

/// 默认后端 API 根地址
const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// 获取 API 根地址
///
/// 可通过 `.env` 或构建环境中的 `ESHOP_API_URL` 覆盖。
pub fn api_base_url() -> String {
    option_env!("ESHOP_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}
