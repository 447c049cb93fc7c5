//! Sharing a site configuration as a link.
//!
//! A policy edited by the user is written into the page's query string,
//! then read back the way a visitor opening the link would see it.
//!
//! Run with: `cargo run --example share_link`

use pwdhash_policy::{decode, decode_site, decode_strict, encode_into, Policy, QueryParams};

fn main() {
    println!("=== Share Link Example ===\n");

    let policy = Policy::new()
        .min_length(10)
        .max_length(24)
        .require_uppercase()
        .require_number()
        .require_symbol();

    println!("--- Scenario 1: Encode into an existing query ---");
    let mut params = QueryParams::parse("?lang=en");
    encode_into(&mut params, &policy, "united.com", Some("work account"));
    println!("Link: https://pwdhash.example/?{}", params);

    println!("\n--- Scenario 2: Decode the link ---");
    let opened = QueryParams::parse(&params.to_query_string());
    let restored = decode(&opened);
    println!("Site:   {:?}", decode_site(&opened));
    println!("Policy: {:?}", restored);
    println!("Same rules as shared: {}", restored.clone().with_hint(None) == policy);

    println!("\n--- Scenario 3: Hand-edited link with bad values ---");
    let tampered = QueryParams::parse("keyword=united.com&min=-5&max=lots&reqcap=t");
    println!("Lenient decode: {:?}", decode(&tampered));
    match decode_strict(&tampered) {
        Ok(policy) => println!("Strict decode:  {:?}", policy),
        Err(err) => println!("Strict decode rejected it: {}", err),
    }
}
