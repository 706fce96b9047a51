use crate::auth::use_auth;
use crate::components::icons::{Pencil, Trash2};
use crate::components::navbar::NavBar;
use crate::components::toast::{Notification, Toast};
use crate::web::router::use_router;
use eshop_shared::Product;
use eshop_shared::catalog::{CATEGORY_ALL, CatalogQuery, SortKey};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProductListPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let is_admin = auth.is_admin_signal();

    // 原始抓取列表；展示列表始终由它重新推导
    let (original_data, set_original_data) = signal(Vec::<Product>::new());
    let (category_list, set_category_list) = signal(Vec::<String>::new());
    let (category, set_category) = signal(CATEGORY_ALL.to_string());
    let (sort_by, set_sort_by) = signal(SortKey::Default);
    let (search_term, set_search_term) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Notification::None);

    // 两个相互独立的请求：分类列表与商品列表。
    // 完成顺序不定，各自更新不相交的状态切片，一方失败不阻塞另一方。
    let trigger_data_fetch = move || {
        let state = auth.state.get_untracked();
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
                match api.get_products().await {
                    Ok(data) => {
                        let _ = set_original_data.try_set(data);
                    }
                    Err(_) => {
                        let _ = set_notification.try_set(Some((
                            "Error: There was an issue in retrieving products.".to_string(),
                            true,
                        )));
                    }
                }
                let _ = set_loading.try_set(false);
            });
        }
    };

    // 初始加载（路由守卫保证未认证时根本不会挂载到这里）
    Effect::new(move |_| {
        if auth.state.get().api.is_some() {
            trigger_data_fetch();
        }
    });

    // 查询组合：分类、搜索、排序全部作用于原始列表，叠加生效
    let displayed = Memo::new(move |_| {
        let query = CatalogQuery {
            category: CatalogQuery::category_from_key(&category.get()),
            sort: sort_by.get(),
            search: search_term.get(),
        };
        original_data.with(|data| query.apply(data))
    });

    let handle_delete = move |id: u32, name: String| {
        let state = auth.state.get_untracked();
        if let Some(api) = state.api {
            spawn_local(async move {
                match api.delete_product(id).await {
                    Ok(()) => {
                        let _ = set_notification.try_set(Some((
                            format!("Product {} deleted successfully!", name),
                            false,
                        )));
                        // 删除后重新执行完整的两次抓取
                        trigger_data_fetch();
                    }
                    Err(_) => {
                        // 失败时不改动展示状态
                        let _ = set_notification.try_set(Some((
                            "Error: There was an issue in deleting product, please try again later."
                                .to_string(),
                            true,
                        )));
                    }
                }
            });
        }
    };

    view! {
        <NavBar search=(search_term, set_search_term) />
        <Toast notification=notification set_notification=set_notification />

        <Show
            when=move || !original_data.with(Vec::is_empty)
            fallback=move || view! {
                <div class="text-center py-16 text-base-content/60">
                    <Show
                        when=move || loading.get()
                        fallback=|| "There are no products available."
                    >
                        <span class="loading loading-spinner loading-lg"></span>
                    </Show>
                </div>
            }
        >
            <div class="max-w-7xl mx-auto p-4 space-y-6">
                // 分类选择
                <div class="flex justify-center">
                    <div class="join">
                        <button
                            class=move || if category.get() == CATEGORY_ALL {
                                "btn btn-sm join-item btn-primary"
                            } else {
                                "btn btn-sm join-item"
                            }
                            on:click=move |_| set_category.set(CATEGORY_ALL.to_string())
                        >
                            "ALL"
                        </button>
                        <For
                            each=move || category_list.get()
                            key=|c| c.clone()
                            children=move |c: String| {
                                let label = c.to_uppercase();
                                let value = c.clone();
                                let active = c;
                                view! {
                                    <button
                                        class=move || if category.get() == active {
                                            "btn btn-sm join-item btn-primary"
                                        } else {
                                            "btn btn-sm join-item"
                                        }
                                        on:click=move |_| set_category.set(value.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            }
                        />
                    </div>
                </div>

                // 排序方式
                <div class="form-control w-52">
                    <label class="label">
                        <span class="label-text">"Sort By"</span>
                    </label>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| set_sort_by.set(SortKey::from_key(&event_target_value(&ev)))
                    >
                        {SortKey::ALL
                            .iter()
                            .map(|k| {
                                let k = *k;
                                view! {
                                    <option value=k.key() selected=move || sort_by.get() == k>
                                        {k.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                // 商品卡片网格
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || displayed.get()
                        key=|p| p.id
                        children=move |item: Product| {
                            let id = item.id;
                            let delete_name = item.name.clone();
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <figure class="h-48 bg-base-200">
                                        <img
                                            src=item.image_url.clone()
                                            alt=item.name.clone()
                                            class="object-contain h-full"
                                        />
                                    </figure>
                                    <div class="card-body">
                                        <div class="flex items-start justify-between">
                                            <h2 class="card-title">{item.name.clone()}</h2>
                                            <span class="text-lg font-bold text-error">
                                                {format!("\u{20b9}{}", item.price)}
                                            </span>
                                        </div>
                                        <div class="badge badge-outline">{item.category.clone()}</div>
                                        <p class="text-sm text-base-content/70 line-clamp-2">
                                            {item.description.clone()}
                                        </p>
                                        <div class="card-actions justify-between items-center mt-2">
                                            <button
                                                class="btn btn-primary btn-sm"
                                                on:click=move |_| router.navigate(&format!("/products/{}", id))
                                            >
                                                "Buy"
                                            </button>
                                            // 管理员操作（展示层门控，后端最终裁决）
                                            <Show when=move || is_admin.get()>
                                                <div class="flex gap-1">
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square"
                                                        on:click=move |_| router.navigate(&format!("/editProduct/{}", id))
                                                    >
                                                        <Pencil attr:class="h-4 w-4" />
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                        on:click={
                                                            let delete_name = delete_name.clone();
                                                            move |_| handle_delete(id, delete_name.clone())
                                                        }
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </div>
                                            </Show>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
