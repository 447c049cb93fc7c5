use pwdhash_policy::{
    decode, decode_site, derive_for_site, encode, encode_into, normalize, transform, Policy,
    PolicyStore, QueryParams, Secret, SecretPair,
};

#[test]
fn doubling_example() {
    let policy = Policy::new().min_length(8);
    assert_eq!(transform("ab12", &policy), "ab12ab12");
}

#[test]
fn symbol_ban_example() {
    let derived = transform("Kj8#mQ2z", &Policy::new().ban_symbols());
    assert_eq!(derived, "Kj8mQ2z");
    assert_eq!(derived.chars().count(), 7);
}

#[test]
fn normalizer_examples() {
    assert_eq!(normalize("secure.chase.com").as_str(), "chase");
    assert_eq!(normalize("www.bankofamerica.com").as_str(), "bankofamerica");
}

#[test]
fn infeasible_example() {
    let policy = Policy::new()
        .max_length(3)
        .require_uppercase()
        .require_lowercase()
        .require_number()
        .require_symbol();

    assert_eq!(transform("zz9#", &policy), "zz9");
}

#[test]
fn lookup_example() {
    let store = PolicyStore::global();

    let chase = store.lookup("chase").expect("chase is listed");
    assert_eq!(chase.max(), Some(32));
    assert!(chase.bans_symbols());
    assert!(chase.requires_uppercase());
    assert!(chase.requires_number());

    let boa = store.lookup("boa").expect("alias");
    let bank = store.lookup("bankofamerica").expect("listed");
    assert!(std::ptr::eq(boa, bank));
}

#[test]
fn site_text_to_share_link_and_back() {
    let site_text = "https://www.paypal.com/signin";
    let key = normalize(site_text);
    let policy = PolicyStore::global()
        .lookup(key.as_str())
        .expect("paypal is listed");

    let mut pair = SecretPair::with_policy("k2#pq".to_string(), policy);
    let derived = pair.derived().expose_secret().clone();
    assert!(derived.chars().count() >= 8);
    assert!(derived.chars().count() <= 20);
    assert!(derived.chars().any(|c| c.is_ascii_uppercase()));
    assert!(derived.chars().any(|c| c.is_ascii_digit()));
    assert!(derived.chars().any(|c| !c.is_ascii_alphanumeric()));

    let link = encode(policy, site_text, None).to_query_string();
    let params = QueryParams::parse(&format!("?{link}"));
    let restored = decode(&params);
    assert_eq!(&restored, policy);
    assert_eq!(decode_site(&params).as_deref(), Some(site_text));

    // re-deriving under the restored policy gives the same password
    pair.apply(&restored);
    assert_eq!(pair.derived().expose_secret(), &derived);
}

#[test]
fn user_edits_survive_a_shared_link() {
    let table = PolicyStore::global()
        .lookup_site("netflix.com")
        .expect("netflix is listed")
        .clone();
    let edited = table.max_length(12).require_symbol();

    let mut params = QueryParams::parse("ref=newsletter");
    encode_into(&mut params, &edited, "netflix.com", Some("my own note"));

    let restored = decode(&params);
    assert_eq!(restored.max(), Some(12));
    assert_eq!(restored.min(), Some(4));
    assert!(restored.requires_symbol());
    assert_eq!(restored.hint_text(), Some("my own note"));
    assert_eq!(params.get("ref"), Some("newsletter"));
}

#[test]
fn unknown_site_keeps_raw_secret() {
    assert_eq!(derive_for_site("raw$secret", "intranet.example"), "raw$secret");
}

#[test]
fn derived_secret_is_redacted() {
    let pair = SecretPair::with_policy("hunter2hunter2".to_string(), &Policy::new());
    let debug_out = format!("{:?}", pair);
    assert!(!debug_out.contains("hunter2"));

    let secret = Secret::new("sk-secret123".to_string());
    assert_eq!(format!("{}", secret), "[REDACTED]");
}
