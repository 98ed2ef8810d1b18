//! Self-reference filter: excludes the business's own address-branded site.
//!
//! A domain like `miamibeachguide.com` for a Miami Beach restaurant encodes
//! the location but none of the business's distinguishing name tokens. Such
//! a domain looks like the business's own (or a purely local) presence, not
//! a competing identity, so it must not feed the fracture signal.

use std::collections::HashSet;

use super::tokens::clean_token;

/// Returns `true` when `domain` is judged self-referential: every address
/// token appears inside some domain label, and no business token (after
/// removing tokens shared with the address) appears in any label.
///
/// Token matching is substring containment against each cleaned
/// `"."`-separated label of `domain`.
///
/// When `address_tokens` is empty the address condition is vacuously true
/// and the check degrades to "no business-name leak anywhere" — callers
/// wanting the full heuristic must supply a location. Kept unguarded to
/// match the tuned behaviour.
pub fn is_self_reference(
    business_tokens: &HashSet<String>,
    address_tokens: &HashSet<String>,
    domain: &str,
) -> bool {
    let labels: Vec<String> = domain.split('.').map(clean_token).collect();

    let token_in_domain =
        |token: &str| -> bool { labels.iter().any(|label| label.contains(token)) };

    // Tokens shared between name and address discriminate nothing; drop
    // them before testing for a business-name leak.
    let refined_business: HashSet<&String> = business_tokens.difference(address_tokens).collect();

    let address_match = address_tokens.iter().all(|token| token_in_domain(token));
    let no_business_leak = refined_business
        .iter()
        .all(|token| !token_in_domain(token.as_str()));

    address_match && no_business_leak
}
