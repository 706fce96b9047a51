use crate::auth::use_auth;
use crate::components::navbar::NavBar;
use crate::components::toast::{Notification, Toast};
use crate::order::use_order_draft;
use crate::web::router::use_router;
use eshop_shared::Product;
use eshop_shared::order::{OrderDraft, validate_quantity};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProductDetailPage(id: u32) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let order_ctx = use_order_draft();

    let (product, set_product) = signal(Option::<Product>::None);
    let (category_list, set_category_list) = signal(Vec::<String>::new());
    let (quantity, set_quantity) = signal("1".to_string());
    let (notification, set_notification) = signal(Notification::None);

    // 分类列表与商品详情相互独立抓取，任一失败不影响另一方
    Effect::new(move |_| {
        let state = auth.state.get();
        if let Some(api) = state.api {
            {
                let api = api.clone();
                spawn_local(async move {
                    match api.get_categories().await {
                        Ok(list) => {
                            let _ = set_category_list.try_set(list);
                        }
                        Err(_) => {
                            let _ = set_notification.try_set(Some((
                                "Error: There was an issue in retrieving categories list."
                                    .to_string(),
                                true,
                            )));
                        }
                    }
                });
            }
            spawn_local(async move {
                match api.get_product(id).await {
                    Ok(p) => {
                        let _ = set_product.try_set(Some(p));
                    }
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

    // 数量校验：1..=库存，商品未加载时无结论
    let quantity_check = Memo::new(move |_| {
        product.with(|p| {
            p.as_ref()
                .map(|p| validate_quantity(&quantity.get(), p.available_items))
        })
    });
    let can_order = move || matches!(quantity_check.get(), Some(Ok(_)));
    let quantity_hint = move || match quantity_check.get() {
        Some(Err(e)) => Some(e.to_string()),
        _ => None,
    };

    let on_place_order = move |_| {
        if let (Some(p), Some(Ok(qty))) =
            (product.get_untracked(), quantity_check.get_untracked())
        {
            // 商品快照 + 数量写入草稿，经导航传给下单页
            order_ctx.draft.set(Some(OrderDraft {
                product: p,
                quantity: qty,
            }));
            router.navigate("/placeOrder");
        }
    };

    view! {
        <NavBar />
        <Toast notification=notification set_notification=set_notification />

        {move || product.get().map(|p| {
            let own_category = p.category.clone();
            view! {
                <div class="max-w-5xl mx-auto p-4 space-y-6">
                    // 分类条：仅展示商品自身分类，不可交互
                    <div class="flex justify-center">
                        <div class="join">
                            <button class="btn btn-sm join-item" disabled=true>"ALL"</button>
                            <For
                                each=move || category_list.get()
                                key=|c| c.clone()
                                children={
                                    let own_category = own_category.clone();
                                    move |c: String| {
                                        let label = c.to_uppercase();
                                        let is_own = c == own_category;
                                        view! {
                                            <button
                                                class=if is_own {
                                                    "btn btn-sm join-item btn-primary"
                                                } else {
                                                    "btn btn-sm join-item"
                                                }
                                                disabled=true
                                            >
                                                {label}
                                            </button>
                                        }
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="flex flex-col md:flex-row gap-8">
                        <div class="flex-none">
                            <img
                                src=p.image_url.clone()
                                alt=p.name.clone()
                                width="250"
                                height="250"
                                class="rounded-box bg-base-200 object-contain"
                            />
                        </div>
                        <div class="flex-1 space-y-3">
                            <div class="flex items-center gap-4">
                                <h1 class="text-2xl font-bold">{p.name.clone()}</h1>
                                <span class="badge badge-primary">
                                    {format!("Available Quantity: {}", p.available_items)}
                                </span>
                            </div>
                            <p>
                                "Category: "
                                <span class="font-bold">{p.category.clone()}</span>
                            </p>
                            <p class="italic text-base-content/70">{p.description.clone()}</p>
                            <p class="text-2xl text-error font-bold">
                                {format!("\u{20b9}{}", p.price)}
                            </p>

                            <div class="form-control w-3/4">
                                <label class="label">
                                    <span class="label-text">"Enter Quantity"</span>
                                </label>
                                <input
                                    type="number"
                                    min="1"
                                    class="input input-bordered"
                                    prop:value=quantity
                                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                                />
                                {move || quantity_hint().map(|hint| view! {
                                    <span class="label-text-alt text-error mt-1">{hint}</span>
                                })}
                            </div>

                            <button
                                class="btn btn-primary mt-4"
                                disabled=move || !can_order()
                                on:click=on_place_order
                            >
                                "Place Order"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
