use crate::api::EshopApi;
use crate::components::navbar::NavBar;
use crate::components::toast::{Notification, Toast};
use crate::config;
use crate::web::router::use_router;
use eshop_shared::SignupRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 注册表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，便于整体传入闭包。
#[derive(Clone, Copy)]
struct SignupForm {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
    contact_number: RwSignal<String>,
}

impl SignupForm {
    fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
            contact_number: RwSignal::new(String::new()),
        }
    }

    /// 校验并转换为注册请求
    fn to_request(&self) -> Result<SignupRequest, String> {
        if self.first_name.get().is_empty()
            || self.last_name.get().is_empty()
            || self.email.get().is_empty()
            || self.password.get().is_empty()
        {
            return Err("Please fill in all required fields".to_string());
        }
        if self.password.get() != self.confirm_password.get() {
            return Err("Passwords do not match".to_string());
        }
        Ok(SignupRequest {
            first_name: self.first_name.get(),
            last_name: self.last_name.get(),
            email: self.email.get(),
            password: self.password.get(),
            contact_number: self.contact_number.get(),
        })
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let router = use_router();
    let form = SignupForm::new();

    let (is_submitting, set_is_submitting) = signal(false);
    let (notification, set_notification) = signal(Notification::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = match form.to_request() {
            Ok(req) => req,
            Err(msg) => {
                set_notification.set(Some((msg, true)));
                return;
            }
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            let api = EshopApi::new(config::api_base_url(), None);
            match api.signup(&request).await {
                Ok(()) => {
                    router.navigate("/login");
                }
                Err(_) => {
                    let _ = set_notification.try_set(Some((
                        "Error: There was an issue signing up, please try again later."
                            .to_string(),
                        true,
                    )));
                }
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    let text_field = move |label: &'static str,
                           input_type: &'static str,
                           value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    type=input_type
                    class="input input-bordered"
                    prop:value=value
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <NavBar />
        <Toast notification=notification set_notification=set_notification />
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold mb-2">"Sign up"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {text_field("First Name", "text", form.first_name)}
                        {text_field("Last Name", "text", form.last_name)}
                        {text_field("Email Address", "email", form.email)}
                        {text_field("Password", "password", form.password)}
                        {text_field("Confirm Password", "password", form.confirm_password)}
                        {text_field("Contact Number", "tel", form.contact_number)}
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing up..." }.into_any()
                                } else {
                                    "Sign Up".into_any()
                                }}
                            </button>
                        </div>
                        <div class="text-center mt-2">
                            <a class="link link-primary text-sm" on:click=move |_| router.navigate("/login")>
                                "Already have an account? Sign In"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
