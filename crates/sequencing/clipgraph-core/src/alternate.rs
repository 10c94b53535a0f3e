//! Alternate-clip rule: variants sharing the same position.

use crate::clip::Clip;
use crate::lookup::find_all;
use crate::name::ClipName;

/// Variant family of `name`, in collection order, excluding the clip itself.
///
/// The family is everything at the same action/character/index with any
/// variant letter or none, so the unlettered and `A`-lettered spellings show
/// up in each other's sets. Transition clips have no alternates.
pub fn alternate_clips(name: &str, clips: &[Clip]) -> Vec<String> {
    let Some(parsed) = ClipName::parse(name) else {
        return Vec::new();
    };
    if parsed.transition.is_some() {
        return Vec::new();
    }

    let family = format!("^{}_?[A-Z]?$", regex::escape(&parsed.base_name()));
    find_all(&family, clips)
        .into_iter()
        .filter(|clip| clip.name != name)
        .map(|clip| clip.name.clone())
        .collect()
}
