use super::*;

fn make_product(id: u32, name: &str, category: &str, price: f64, date: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        available_items: 10,
        description: String::new(),
        image_url: String::new(),
        date: date.to_string(),
    }
}

fn fixture() -> Vec<Product> {
    vec![
        make_product(1, "Widget", "tools", 30.0, "2023-03-01"),
        make_product(2, "Gadget", "electronics", 10.0, "2023-01-01"),
        make_product(3, "Sprocket", "tools", 20.0, "2023-02-01"),
        make_product(4, "Doohickey", "misc", 20.0, "2023-04-01"),
    ]
}

fn ids(list: &[Product]) -> Vec<u32> {
    list.iter().map(|p| p.id).collect()
}

#[test]
fn filter_by_category_yields_exact_subset() {
    let query = CatalogQuery {
        category: Some("tools".to_string()),
        ..Default::default()
    };
    let result = query.apply(&fixture());
    assert_eq!(ids(&result), vec![1, 3]);
    assert!(result.iter().all(|p| p.category == "tools"));
}

#[test]
fn filter_all_is_identity_in_order() {
    let query = CatalogQuery {
        category: CatalogQuery::category_from_key(CATEGORY_ALL),
        ..Default::default()
    };
    let original = fixture();
    assert_eq!(query.apply(&original), original);
}

#[test]
fn filter_by_absent_category_is_empty() {
    let query = CatalogQuery {
        category: Some("books".to_string()),
        ..Default::default()
    };
    assert!(query.apply(&fixture()).is_empty());
}

#[test]
fn sort_low_to_high_is_nondecreasing_permutation() {
    let query = CatalogQuery {
        sort: SortKey::PriceLowToHigh,
        ..Default::default()
    };
    let original = fixture();
    let result = query.apply(&original);
    assert_eq!(result.len(), original.len());
    assert!(result.windows(2).all(|w| w[0].price <= w[1].price));
    // 同一批商品，只是顺序不同
    let mut sorted_ids = ids(&result);
    sorted_ids.sort_unstable();
    assert_eq!(sorted_ids, vec![1, 2, 3, 4]);
}

#[test]
fn sort_high_to_low_is_nonincreasing() {
    let query = CatalogQuery {
        sort: SortKey::PriceHighToLow,
        ..Default::default()
    };
    let result = query.apply(&fixture());
    assert!(result.windows(2).all(|w| w[0].price >= w[1].price));
}

#[test]
fn sort_default_restores_fetch_order() {
    let query = CatalogQuery {
        sort: SortKey::Default,
        ..Default::default()
    };
    let original = fixture();
    assert_eq!(ids(&query.apply(&original)), ids(&original));
}

#[test]
fn sort_is_stable_for_equal_prices() {
    // id=3 与 id=4 同价，须保持抓取顺序
    let query = CatalogQuery {
        sort: SortKey::PriceLowToHigh,
        ..Default::default()
    };
    let result = query.apply(&fixture());
    assert_eq!(ids(&result), vec![2, 3, 4, 1]);
}

#[test]
fn sort_newest_puts_most_recent_first() {
    let query = CatalogQuery {
        sort: SortKey::Newest,
        ..Default::default()
    };
    let result = query.apply(&fixture());
    assert_eq!(ids(&result), vec![4, 1, 3, 2]);
}

#[test]
fn sort_newest_sinks_unparsable_dates() {
    let mut original = fixture();
    original.push(make_product(5, "Relic", "misc", 5.0, "not-a-date"));
    let query = CatalogQuery {
        sort: SortKey::Newest,
        ..Default::default()
    };
    let result = query.apply(&original);
    assert_eq!(result.last().unwrap().id, 5);
}

#[test]
fn search_is_case_insensitive_substring() {
    let query = CatalogQuery {
        search: "GET".to_string(),
        ..Default::default()
    };
    let result = query.apply(&fixture());
    assert_eq!(ids(&result), vec![1, 2]); // Widget, Gadget
}

#[test]
fn search_empty_is_identity() {
    let query = CatalogQuery::default();
    let original = fixture();
    assert_eq!(query.apply(&original), original);
}

#[test]
fn search_without_match_is_empty() {
    let query = CatalogQuery {
        search: "zzz".to_string(),
        ..Default::default()
    };
    assert!(query.apply(&fixture()).is_empty());
}

#[test]
fn filter_search_and_sort_compose() {
    let mut original = fixture();
    original.push(make_product(6, "Power Widget", "tools", 5.0, "2023-05-01"));

    let query = CatalogQuery {
        category: Some("tools".to_string()),
        search: "widget".to_string(),
        sort: SortKey::PriceLowToHigh,
    };
    let result = query.apply(&original);
    // tools 且名称含 widget，再按价格升序
    assert_eq!(ids(&result), vec![6, 1]);
}

#[test]
fn date_millis_accepts_rfc3339_and_plain_dates() {
    assert!(date_millis("2023-03-01").is_some());
    assert!(date_millis("2023-03-01T10:30:00Z").is_some());
    assert!(date_millis("garbage").is_none());
    assert!(
        date_millis("2023-03-01T10:30:00Z").unwrap() > date_millis("2023-03-01").unwrap()
    );
}

#[test]
fn sort_key_round_trips_through_ui_keys() {
    for key in SortKey::ALL {
        assert_eq!(SortKey::from_key(key.key()), key);
    }
    assert_eq!(SortKey::from_key("unknown"), SortKey::Default);
}
