use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod order;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const ROLE_ADMIN: &str = "ADMIN";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 商品。后端返回的只读副本，前端按视图缓存。
///
/// `date` 为后端下发的原始字符串，排序时再解析（见 `catalog::date_millis`）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub available_items: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub date: String,
}

/// 登录请求体。后端以 `username` 字段承载邮箱。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// 登录响应。`token` 与 `user` 均可能为 null，调用方需逐一校验。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserInfo {
    /// 角色列表中含 ADMIN 即视为管理员
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }
}

/// 注册请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub contact_number: String,
}

/// 新增/编辑商品的表单载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProductRequest {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub available_items: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

/// 下单请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: u32,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_anywhere_in_list() {
        let user = UserInfo {
            id: "u1".into(),
            roles: vec!["USER".into(), "ADMIN".into()],
        };
        assert!(user.is_admin());
    }

    #[test]
    fn non_admin_roles() {
        let user = UserInfo {
            id: "u1".into(),
            roles: vec!["USER".into()],
        };
        assert!(!user.is_admin());

        let empty = UserInfo {
            id: "u2".into(),
            roles: vec![],
        };
        assert!(!empty.is_admin());
    }

    #[test]
    fn product_wire_format_is_camel_case() {
        let json = r#"{
            "id": 5,
            "name": "Widget",
            "category": "tools",
            "price": 19.5,
            "availableItems": 3,
            "description": "A widget",
            "imageUrl": "http://img/5.png",
            "date": "2023-01-15"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 5);
        assert_eq!(p.available_items, 3);
        assert_eq!(p.image_url, "http://img/5.png");
    }

    #[test]
    fn signin_response_tolerates_null_fields() {
        let json = r#"{"token": null}"#;
        let resp: SigninResponse = serde_json::from_str(json).unwrap();
        assert!(resp.token.is_none());
        assert!(resp.user.is_none());
    }

    #[test]
    fn order_request_wire_format() {
        let req = CreateOrderRequest {
            product_id: 5,
            quantity: 2,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"productId\":5"));
        assert!(json.contains("\"quantity\":2"));
    }
}
