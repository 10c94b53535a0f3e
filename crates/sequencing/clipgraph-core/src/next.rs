//! Next-clip rule: which clip plays after this one.

use crate::clip::Clip;
use crate::lookup::find_first;
use crate::name::{ClipName, Transition};

/// Names reachable directly after `name`, in priority order.
///
/// Non-primary alternates never chain forward; they are reached through the
/// alternate relation instead. A transition tail resolves through its target
/// and skips the plain increment entirely.
pub fn next_clips(name: &str, clips: &[Clip]) -> Vec<String> {
    let Some(parsed) = ClipName::parse(name) else {
        return Vec::new();
    };
    if !parsed.is_primary() {
        return Vec::new();
    }
    if let Some(transition) = &parsed.transition {
        return resolve_transition(&parsed, transition, clips);
    }

    // An outgoing transition clip rooted at this exact name outranks the
    // plain increment: `A_intro_01` chains to `A_intro_01-02`, not straight
    // to `A_intro_02`.
    let outgoing = format!("^{}-", regex::escape(parsed.transition_prefix()));
    let plain_next = parsed.sibling_name(parsed.clip_index + 1);

    let found = find_first(&outgoing, clips)
        .or_else(|| find_first(&primary_of(&plain_next), clips));

    found.map(|clip| clip.name.clone()).into_iter().collect()
}

/// Anchored pattern accepting `base`, `baseA`, and `base_A` as equivalent
/// spellings of the same primary clip.
pub(crate) fn primary_of(base: &str) -> String {
    format!("^{}_?A?$", regex::escape(base))
}

fn resolve_transition(parsed: &ClipName, transition: &Transition, clips: &[Clip]) -> Vec<String> {
    let destination = match &transition.next_action {
        // `A_intro_01-relax_01`: the target text names the destination.
        Some(_) => format!("A_{}", transition.raw),
        // `A_intro_01-02`: stay in the group, jump to the written index.
        None => parsed.sibling_name(transition.next_index),
    };
    find_first(&primary_of(&destination), clips)
        .map(|clip| clip.name.clone())
        .into_iter()
        .collect()
}
