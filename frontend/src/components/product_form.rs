//! 新增/编辑商品表单
//!
//! `id` 为 `Some` 时是编辑模式：先抓取现有商品预填，提交走 PUT；
//! 否则为新增，提交走 POST。入口仅对管理员展示（展示层门控）。

use crate::auth::use_auth;
use crate::components::navbar::NavBar;
use crate::components::toast::{Notification, Toast};
use crate::web::router::use_router;
use eshop_shared::{Product, SaveProductRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，便于整体传入闭包。
#[derive(Clone, Copy)]
struct ProductForm {
    name: RwSignal<String>,
    category: RwSignal<String>,
    price: RwSignal<String>,
    available_items: RwSignal<String>,
    description: RwSignal<String>,
    image_url: RwSignal<String>,
}

impl ProductForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            available_items: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            image_url: RwSignal::new(String::new()),
        }
    }

    /// 用已有商品预填（编辑模式）
    fn fill(&self, product: &Product) {
        let _ = self.name.try_set(product.name.clone());
        let _ = self.category.try_set(product.category.clone());
        let _ = self.price.try_set(product.price.to_string());
        let _ = self
            .available_items
            .try_set(product.available_items.to_string());
        let _ = self.description.try_set(product.description.clone());
        let _ = self.image_url.try_set(product.image_url.clone());
    }

    /// 校验并转换为保存请求
    fn to_request(&self) -> Result<SaveProductRequest, String> {
        if self.name.get().trim().is_empty() || self.category.get().trim().is_empty() {
            return Err("Name and category are required".to_string());
        }
        let price: f64 = self
            .price
            .get()
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if price <= 0.0 {
            return Err("Price must be positive".to_string());
        }
        let available_items: u32 = self
            .available_items
            .get()
            .trim()
            .parse()
            .map_err(|_| "Available items must be a non-negative integer".to_string())?;

        Ok(SaveProductRequest {
            name: self.name.get().trim().to_string(),
            category: self.category.get().trim().to_string(),
            price,
            available_items,
            description: self.description.get(),
            image_url: self.image_url.get(),
        })
    }
}

#[component]
pub fn ProductFormPage(#[prop(optional)] id: Option<u32>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let form = ProductForm::new();

    let (notification, set_notification) = signal(Notification::None);
    let (is_submitting, set_is_submitting) = signal(false);

    // 编辑模式：抓取现有商品预填表单
    Effect::new(move |_| {
        let state = auth.state.get();
        if let (Some(api), Some(product_id)) = (state.api, id) {
            spawn_local(async move {
                match api.get_product(product_id).await {
                    Ok(p) => form.fill(&p),
                    Err(_) => {
                        let _ = set_notification.try_set(Some((
                            "Error: There was an issue in fetching the product details."
                                .to_string(),
                            true,
                        )));
                    }
                }
            });
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = match form.to_request() {
            Ok(req) => req,
            Err(msg) => {
                set_notification.set(Some((msg, true)));
                return;
            }
        };

        let state = auth.state.get_untracked();
        if let Some(api) = state.api {
            set_is_submitting.set(true);
            spawn_local(async move {
                let result = match id {
                    Some(product_id) => api.update_product(product_id, &request).await,
                    None => api.create_product(&request).await,
                };
                match result {
                    Ok(()) => {
                        router.navigate("/products");
                    }
                    Err(_) => {
                        let _ = set_notification.try_set(Some((
                            "Error: There was an issue in saving the product, please try again later."
                                .to_string(),
                            true,
                        )));
                        let _ = set_is_submitting.try_set(false);
                    }
                }
            });
        }
    };

    let text_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    type="text"
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
        <div class="max-w-xl mx-auto p-4">
            <h1 class="text-2xl font-bold mb-4">
                {if id.is_some() { "Edit Product" } else { "Add Product" }}
            </h1>
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_submit>
                    {text_field("Name", form.name)}
                    {text_field("Category", form.category)}
                    {text_field("Price", form.price)}
                    {text_field("Available Items", form.available_items)}
                    {text_field("Image URL", form.image_url)}
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered"
                            prop:value=form.description
                            on:input=move |ev| form.description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                            } else {
                                "Save Product".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
