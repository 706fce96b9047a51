use crate::auth::{login, use_auth};
use crate::components::icons::Lock;
use crate::components::navbar::NavBar;
use crate::components::toast::{Notification, Toast};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // 预填上次登录邮箱
    let (email, set_email) = signal(auth.state.get_untracked().last_email.clone());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(false);
    let (password_error, set_password_error) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (notification, set_notification) = signal(Notification::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        // 空字段作为行内错误标记，不发请求
        let email_val = email.get();
        let password_val = password.get();
        set_email_error.set(email_val.is_empty());
        set_password_error.set(password_val.is_empty());
        if email_val.is_empty() || password_val.is_empty() {
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let success = login(&auth, email_val, password_val).await;
            if success {
                // 登录成功：路由服务监听到认证变化也会兜底重定向
                router.navigate("/products");
            } else {
                // 任何失败（网络或凭据被拒）统一呈现
                let _ = set_notification
                    .try_set(Some(("Invalid Credentials".to_string(), true)));
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    view! {
        <NavBar />
        <Toast notification=notification set_notification=set_notification />
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-full text-primary">
                            <Lock attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Sign in"</h1>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email Address"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class=move || if email_error.get() {
                                    "input input-bordered input-error"
                                } else {
                                    "input input-bordered"
                                }
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class=move || if password_error.get() {
                                    "input input-bordered input-error"
                                } else {
                                    "input input-bordered"
                                }
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                        <div class="text-center mt-2">
                            <a class="link link-primary text-sm" on:click=move |_| router.navigate("/signup")>
                                "Don't have an account? Sign Up"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
