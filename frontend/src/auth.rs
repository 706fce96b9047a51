//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//! 会话仅存活于内存：LocalStorage 只保存上次登录邮箱用于预填，
//! 令牌从不落盘，刷新页面即回到未登录状态。

use crate::api::EshopApi;
use crate::config;
use crate::web::LocalStorage;
use eshop_shared::SigninRequest;
use leptos::prelude::*;

const STORAGE_EMAIL_KEY: &str = "eshop_last_email";

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// API 客户端实例（仅在认证成功后存在）
    pub api: Option<EshopApi>,
    /// 会话令牌
    pub token: Option<String>,
    /// 登录用户 id
    pub user_id: Option<String>,
    /// 是否为管理员（由角色列表推导，仅用于界面展示层的能力门控）
    pub is_admin: bool,
    /// 上次登录邮箱（用于登录表单预填）
    pub last_email: String,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().token.is_some())
    }

    /// 获取管理员标记信号
    pub fn is_admin_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_admin)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 预填上次邮箱（方便用户），令牌不做任何恢复。
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_state.update(|state| {
        if let Some(email) = LocalStorage::get(STORAGE_EMAIL_KEY) {
            state.last_email = email;
        }
    });
}

/// 登录并保存状态 (仅内存)
///
/// # Arguments
/// * `ctx` - 认证上下文
/// * `email` - 邮箱（后端作为 username 接收）
/// * `password` - 密码
///
/// # Returns
/// 登录是否成功；凭据被拒或响应缺少令牌均视为失败，状态不变
pub async fn login(ctx: &AuthContext, email: String, password: String) -> bool {
    let api = EshopApi::new(config::api_base_url(), None);
    let request = SigninRequest {
        username: email.clone(),
        password,
    };

    match api.signin(&request).await {
        Ok(response) => {
            let Some(token) = response.token else {
                return false;
            };

            // 只保存邮箱用于下次预填，绝不保存令牌
            LocalStorage::set(STORAGE_EMAIL_KEY, &email);

            let (user_id, is_admin) = match response.user {
                Some(user) => (Some(user.id.clone()), user.is_admin()),
                None => (None, false),
            };

            let authed_api = EshopApi::new(config::api_base_url(), Some(token.clone()));

            ctx.set_state.update(|state| {
                state.api = Some(authed_api);
                state.token = Some(token);
                state.user_id = user_id;
                state.is_admin = is_admin;
                state.last_email = email;
            });
            true
        }
        Err(_) => false,
    }
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.set_state.update(|state| {
        state.api = None;
        state.token = None;
        state.user_id = None;
        state.is_admin = false;
        // 保留邮箱方便下次登录
    });
}
