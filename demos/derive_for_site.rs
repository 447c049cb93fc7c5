//! Deriving site passwords from the built-in table.
//!
//! Shows the page flow: site text is normalized, the policy is looked up,
//! and the raw secret is rewritten to fit it. Debug-level tracing output
//! shows each lookup and the enforcement decisions.
//!
//! Run with: `cargo run --example derive_for_site`

use pwdhash_policy::{normalize, PolicyStore, SecretPair};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Site Password Derivation ===\n");

    // Stand-in for the upstream generator's output
    let raw = "p4$Wq-7zr!xK";
    let store = PolicyStore::global();

    for site in [
        "https://secure.chase.com/web/auth",
        "www.bankofamerica.com",
        "boa",
        "fidelity.com",
        "Home Depot",
        "intranet.example",
    ] {
        let key = normalize(site);
        let pair = match store.lookup(key.as_str()) {
            Some(policy) => {
                println!(
                    "{site:<36} key={key:<14} hint={}",
                    policy.hint_text().unwrap_or("-")
                );
                SecretPair::with_policy(raw.to_string(), policy)
            }
            None => {
                println!("{site:<36} key={key:<14} (no known policy)");
                SecretPair::new(raw.to_string())
            }
        };

        // Printing the pair itself never shows the passwords
        println!("    pair:    {:?}", pair);
        println!("    derived: {}", pair.derived().expose_secret());
    }
}
