//! How class enforcement behaves at the length cap.
//!
//! Below the cap missing classes are appended. At the cap they overwrite
//! characters, skipping those that satisfy classes handled earlier in the
//! pass. Under a cap smaller than the number of required classes nothing is
//! enforced at all.
//!
//! Run with: `cargo run --example cap_enforcement`

use pwdhash_policy::{is_feasible, transform, Policy};

fn main() {
    println!("=== Enforcement At The Cap ===\n");

    let all_classes = Policy::new()
        .require_uppercase()
        .require_lowercase()
        .require_number()
        .require_symbol();

    for (raw, max) in [
        ("abcdefgh", None),
        ("abcdefgh", Some(8)),
        ("1234", Some(4)),
        ("abcd", Some(4)),
        ("abcdef", Some(3)),
    ] {
        let policy = all_classes.clone().with_max(max);
        println!(
            "raw={raw:<10} max={:<5} feasible={:<5} -> {}",
            max.map_or("-".to_string(), |m| m.to_string()),
            is_feasible(&policy),
            transform(raw, &policy)
        );
    }

    println!("\n--- Symbol ban with fallback ---");
    let banned = Policy::new().ban_symbols().min_length(8);
    for raw in ["Kj8#mQ2z", "#$%^&*"] {
        println!("raw={raw:<10} -> {}", transform(raw, &banned));
    }
}
