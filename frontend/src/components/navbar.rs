//! 顶部导航栏
//!
//! 搜索框由列表页注入信号，仅在列表页出现；
//! 管理员可见"新增商品"入口（仅展示层门控，后端最终裁决）。

use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, Plus, Search, ShoppingCart};
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn NavBar(
    /// 搜索框信号（读/写），仅列表页传入
    #[prop(optional)]
    search: Option<(ReadSignal<String>, WriteSignal<String>)>,
) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let is_logged = auth.is_authenticated_signal();
    let is_admin = auth.is_admin_signal();

    let on_logout = move |_| {
        // 重定向由路由服务的认证状态监听自动处理
        logout(&auth);
    };

    view! {
        <div class="navbar bg-primary text-primary-content shadow-lg px-4">
            <div class="flex-1 gap-2">
                <ShoppingCart attr:class="h-6 w-6" />
                <a
                    class="btn btn-ghost text-xl"
                    on:click=move |_| {
                        if is_logged.get_untracked() {
                            router.navigate("/products");
                        } else {
                            router.navigate("/login");
                        }
                    }
                >
                    "E-Shop"
                </a>
            </div>

            {search.map(|(term, set_term)| view! {
                <div class="flex-none mx-2">
                    <label class="input input-bordered input-sm flex items-center gap-2 text-base-content">
                        <Search attr:class="h-4 w-4 opacity-70" />
                        <input
                            type="text"
                            placeholder="Search..."
                            prop:value=term
                            on:input=move |ev| set_term.set(event_target_value(&ev))
                        />
                    </label>
                </div>
            })}

            <div class="flex-none gap-2">
                <Show
                    when=move || is_logged.get()
                    fallback=move || view! {
                        <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/login")>
                            "Login"
                        </a>
                        <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/signup")>
                            "Sign Up"
                        </a>
                    }
                >
                    <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/products")>
                        "Home"
                    </a>
                    <Show when=move || is_admin.get()>
                        <a class="btn btn-ghost btn-sm gap-1" on:click=move |_| router.navigate("/addProduct")>
                            <Plus attr:class="h-4 w-4" /> "Add Product"
                        </a>
                    </Show>
                    <button on:click=on_logout class="btn btn-outline btn-sm gap-1">
                        <LogOut attr:class="h-4 w-4" /> "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
