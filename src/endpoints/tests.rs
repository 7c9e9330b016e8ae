use super::*;
use crate::resolver::resolve;

const ID: &str = "1aA2bB3cC4dD5eE6fF7gG8hH9iJ0";

fn id() -> CloudId {
    resolve(&format!("https://drive.google.com/open?id={ID}")).unwrap()
}

fn base_of(url: &str) -> &str {
    url.split("&cb=").next().unwrap()
}

fn nonce_of(url: &str) -> &str {
    url.split("&cb=").nth(1).unwrap()
}

#[test]
fn generates_exactly_three_distinct_variants() {
    let endpoints = generate(&id(), 12);
    assert_eq!(endpoints.len(), VARIANTS);

    let bases: Vec<&str> = endpoints.iter().map(|u| base_of(u)).collect();
    for (i, base) in bases.iter().enumerate() {
        assert!(!bases[..i].contains(base), "duplicate variant: {base}");
    }
    for endpoint in &endpoints {
        assert!(endpoint.contains(ID));
    }
}

#[test]
fn variant_order_is_stable_across_calls() {
    let a = generate(&id(), 8);
    let b = generate(&id(), 8);

    let a_bases: Vec<&str> = a.iter().map(|u| base_of(u)).collect();
    let b_bases: Vec<&str> = b.iter().map(|u| base_of(u)).collect();
    assert_eq!(a_bases, b_bases);
}

#[test]
fn each_call_gets_fresh_nonces() {
    let a = generate(&id(), 16);
    let b = generate(&id(), 16);

    // 16 alphanumeric characters colliding would be remarkable
    for (x, y) in a.iter().zip(&b) {
        assert_ne!(nonce_of(x), nonce_of(y));
    }
}

#[test]
fn nonce_honours_the_configured_length() {
    for endpoint in generate(&id(), 5) {
        let nonce = nonce_of(&endpoint).to_string();
        assert_eq!(nonce.len(), 5);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
