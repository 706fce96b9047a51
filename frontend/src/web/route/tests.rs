use super::*;

#[test]
fn root_and_login_map_to_login() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
}

#[test]
fn static_paths_parse() {
    assert_eq!(AppRoute::from_path("/signup"), AppRoute::Signup);
    assert_eq!(AppRoute::from_path("/products"), AppRoute::Products);
    assert_eq!(AppRoute::from_path("/addProduct"), AppRoute::AddProduct);
    assert_eq!(AppRoute::from_path("/placeOrder"), AppRoute::PlaceOrder);
}

#[test]
fn detail_path_carries_numeric_id() {
    assert_eq!(AppRoute::from_path("/products/5"), AppRoute::ProductDetail(5));
    assert_eq!(
        AppRoute::from_path("/editProduct/12"),
        AppRoute::EditProduct(12)
    );
}

#[test]
fn malformed_ids_are_not_found() {
    assert_eq!(AppRoute::from_path("/products/abc"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/products/"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/editProduct/"), AppRoute::NotFound);
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
}

#[test]
fn to_path_round_trips() {
    for route in [
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Products,
        AppRoute::ProductDetail(5),
        AppRoute::AddProduct,
        AppRoute::EditProduct(7),
        AppRoute::PlaceOrder,
    ] {
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }
}

#[test]
fn data_routes_require_auth() {
    assert!(AppRoute::Products.requires_auth());
    assert!(AppRoute::ProductDetail(1).requires_auth());
    assert!(AppRoute::AddProduct.requires_auth());
    assert!(AppRoute::EditProduct(1).requires_auth());
    assert!(AppRoute::PlaceOrder.requires_auth());
}

#[test]
fn public_routes_do_not_require_auth() {
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::Signup.requires_auth());
    assert!(!AppRoute::NotFound.requires_auth());
}

#[test]
fn only_login_bounces_authenticated_users() {
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(!AppRoute::Signup.should_redirect_when_authenticated());
    assert!(!AppRoute::Products.should_redirect_when_authenticated());
}

#[test]
fn redirect_targets() {
    assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
    assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Products);
    assert_eq!(AppRoute::auth_failure_redirect().to_path(), "/login");
}
