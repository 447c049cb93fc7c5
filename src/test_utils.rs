//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

use crate::policy::Policy;

/// Raw secrets as a generator would emit them: letters, digits and symbols.
pub(crate) fn arb_raw_secret() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9!@#$%^&*+/=_-]{1,40}").unwrap()
}

/// Raw secrets made of symbols only, to exercise the ban fallback.
pub(crate) fn arb_symbol_secret() -> impl Strategy<Value = String> {
    prop::string::string_regex("[!@#$%^&*+/=_-]{1,20}").unwrap()
}

fn arb_flags() -> impl Strategy<Value = (bool, bool, bool, bool, bool)> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
}

fn with_flags(policy: Policy, flags: (bool, bool, bool, bool, bool)) -> Policy {
    let (no_sym, num, sym, cap, lower) = flags;
    policy
        .with_ban_symbols(no_sym)
        .with_require_number(num)
        .with_require_symbol(sym)
        .with_require_uppercase(cap)
        .with_require_lowercase(lower)
}

/// Any policy, including infeasible and inverted bounds.
pub(crate) fn arb_policy() -> impl Strategy<Value = Policy> {
    (
        prop::option::of(0u32..48),
        prop::option::of(0u32..48),
        arb_flags(),
    )
        .prop_map(|(min, max, flags)| with_flags(Policy::new().with_min(min).with_max(max), flags))
}

/// Policies without a maximum length, so every required class fits.
pub(crate) fn arb_uncapped_policy() -> impl Strategy<Value = Policy> {
    (prop::option::of(0u32..48), arb_flags())
        .prop_map(|(min, flags)| with_flags(Policy::new().with_min(min), flags))
}

/// Policies requiring every class under a cap too small to hold them.
pub(crate) fn arb_infeasible_policy() -> impl Strategy<Value = Policy> {
    (prop::option::of(0u32..48), 0u32..3, any::<bool>()).prop_map(|(min, max, no_sym)| {
        with_flags(
            Policy::new().with_min(min).max_length(max),
            (no_sym, true, true, true, true),
        )
    })
}
