use crate::auth::use_auth;
use crate::components::navbar::NavBar;
use crate::components::toast::{Notification, Toast};
use crate::order::use_order_draft;
use crate::web::router::use_router;
use eshop_shared::CreateOrderRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

#[component]
pub fn PlaceOrderPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let order_ctx = use_order_draft();

    let (notification, set_notification) = signal(Notification::None);
    let (is_submitting, set_is_submitting) = signal(false);

    // 无草稿（如直接输入地址栏）则回到商品列表
    Effect::new(move |_| {
        if order_ctx.draft.get().is_none() {
            router.navigate("/products");
        }
    });

    let on_confirm = move |_| {
        let Some(draft) = order_ctx.draft.get_untracked() else {
            return;
        };
        let state = auth.state.get_untracked();
        if let Some(api) = state.api {
            set_is_submitting.set(true);
            spawn_local(async move {
                let request = CreateOrderRequest {
                    product_id: draft.product.id,
                    quantity: draft.quantity,
                };
                match api.place_order(&request).await {
                    Ok(()) => {
                        let _ = set_notification
                            .try_set(Some(("Order placed successfully!".to_string(), false)));
                        // 稍候清空草稿，上方 Effect 随即回到商品列表
                        set_timeout(
                            move || {
                                let _ = order_ctx.draft.try_set(None);
                            },
                            Duration::from_millis(1200),
                        );
                    }
                    Err(_) => {
                        let _ = set_notification.try_set(Some((
                            "Error: There was an issue in placing the order, please try again later."
                                .to_string(),
                            true,
                        )));
                        let _ = set_is_submitting.try_set(false);
                    }
                }
            });
        }
    };

    let on_cancel = move |_| order_ctx.draft.set(None);

    view! {
        <NavBar />
        <Toast notification=notification set_notification=set_notification />

        {move || order_ctx.draft.get().map(|draft| {
            let p = draft.product.clone();
            view! {
                <div class="max-w-2xl mx-auto p-4">
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body space-y-2">
                            <h2 class="card-title">"Confirm Order"</h2>
                            <div class="flex gap-6 items-center">
                                <img
                                    src=p.image_url.clone()
                                    alt=p.name.clone()
                                    width="120"
                                    height="120"
                                    class="rounded-box bg-base-200 object-contain"
                                />
                                <div class="space-y-1">
                                    <p class="text-lg font-bold">{p.name.clone()}</p>
                                    <p>"Quantity: " {draft.quantity}</p>
                                    <p>
                                        "Unit Price: "
                                        {format!("\u{20b9}{}", p.price)}
                                    </p>
                                    <p class="text-xl text-error font-bold">
                                        "Total: "
                                        {format!("\u{20b9}{:.2}", draft.total_price())}
                                    </p>
                                </div>
                            </div>
                            <div class="card-actions justify-end mt-4">
                                <button class="btn btn-ghost" on:click=on_cancel>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn-primary"
                                    disabled=move || is_submitting.get()
                                    on:click=on_confirm
                                >
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Placing..." }.into_any()
                                    } else {
                                        "Confirm Order".into_any()
                                    }}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
