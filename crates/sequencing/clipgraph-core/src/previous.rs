//! Previous-clip rule: the inverse of the plain `NN+1` relation.

use crate::clip::Clip;
use crate::lookup::find_first;
use crate::name::ClipName;
use crate::next::primary_of;

/// The clip `name` directly follows, if any.
///
/// Transitions cannot be played backwards and non-primary alternates sit
/// outside the forward chain, so neither gets a predecessor. Index `00`
/// opens its group and has nothing before it.
pub fn previous_clip(name: &str, clips: &[Clip]) -> Option<String> {
    let parsed = ClipName::parse(name)?;
    if parsed.transition.is_some() || !parsed.is_primary() {
        return None;
    }

    let index = parsed.clip_index.checked_sub(1)?;
    let predecessor = parsed.sibling_name(index);
    find_first(&primary_of(&predecessor), clips).map(|clip| clip.name.clone())
}
