//! Linear lookups over the clip collection.
//!
//! Patterns are compiled per call and matched against raw clip names in
//! collection order; the first match wins ties. Callers anchor their
//! patterns at the start of the name and escape literal fragments.

use regex::Regex;

use crate::clip::Clip;

/// First clip whose name matches `expression`, in collection order.
pub fn find_first<'a>(expression: &str, clips: &'a [Clip]) -> Option<&'a Clip> {
    let pattern = compile(expression)?;
    clips.iter().find(|clip| pattern.is_match(&clip.name))
}

/// Every clip whose name matches `expression`, in collection order.
pub fn find_all<'a>(expression: &str, clips: &'a [Clip]) -> Vec<&'a Clip> {
    match compile(expression) {
        Some(pattern) => clips
            .iter()
            .filter(|clip| pattern.is_match(&clip.name))
            .collect(),
        None => Vec::new(),
    }
}

// An unusable pattern behaves as a lookup miss; the rules only build
// patterns from escaped name fragments, so this should stay silent.
fn compile(expression: &str) -> Option<Regex> {
    match Regex::new(expression) {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            log::warn!("unusable lookup pattern {expression:?}: {err}");
            None
        }
    }
}
