//! Clip-name decomposition.
//!
//! Names follow `A_<action>_[<char>_]<NN>[_<alt>][-<target>]`:
//! - `action` is the sequence group (`intro`, `relax`, ...).
//! - `char` is an optional single uppercase letter separating otherwise
//!   identical sequences for different characters (`A_walk_A_01` and
//!   `A_walk_B_01` are two sequences, not variants of one).
//! - `NN` is the two-digit position within the sequence.
//! - `alt` is an optional variant letter; the underscore before it is
//!   sometimes omitted (`A_intro_01B`).
//! - `target` is a transition tail: either another index in the same group
//!   (`A_intro_01-02`) or a group switch (`A_intro_01-relax_01`).

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled pattern for the naming convention, shared process-wide.
/// The leading `A` marks an animation asset.
static CLIP_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"A_(?P<action>[a-z]+)_(?:(?P<char>[A-Z]?)_?(?P<clip>\d{2}))_?(?P<alternate>[A-Z]?)?-?(?P<target>(?P<next_name>[a-z]+)?_?(?P<next_clip>\d{2}))?",
    )
    .expect("clip name pattern compiles")
});

/// Decomposed fields of one clip name, derived purely from the name itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipName {
    pub action: String,
    pub character: Option<char>,
    pub clip_index: u8,
    /// Variant letter. `None` and `Some('A')` both denote the primary clip.
    pub alternate: Option<char>,
    pub transition: Option<Transition>,
    matched: String,
}

/// Hyphen-separated transition tail of a clip name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Target text as written, e.g. `02` or `relax_01`.
    pub raw: String,
    /// Destination group for cross-group transitions, absent when the target
    /// stays in the same group.
    pub next_action: Option<String>,
    pub next_index: u8,
}

impl ClipName {
    /// Decompose `name`, or `None` when it does not follow the convention.
    pub fn parse(name: &str) -> Option<Self> {
        let caps = CLIP_NAME.captures(name)?;
        let group = |key: &str| {
            caps.name(key)
                .map(|m| m.as_str())
                .filter(|text| !text.is_empty())
        };

        let transition = group("target").map(|raw| Transition {
            raw: raw.to_string(),
            next_action: group("next_name").map(str::to_string),
            next_index: parse_index(group("next_clip").unwrap_or_default()),
        });

        Some(Self {
            action: group("action")?.to_string(),
            character: group("char").and_then(|s| s.chars().next()),
            clip_index: parse_index(group("clip").unwrap_or_default()),
            alternate: group("alternate").and_then(|s| s.chars().next()),
            transition,
            matched: caps[0].to_string(),
        })
    }

    /// `true` for the unlettered and `A`-lettered variants, which both act
    /// as the primary clip of their position.
    pub fn is_primary(&self) -> bool {
        matches!(self.alternate, None | Some('A'))
    }

    /// Base name without any variant letter, e.g. `A_intro_01` or
    /// `A_walk_B_01`.
    pub fn base_name(&self) -> String {
        self.sibling_name(self.clip_index)
    }

    /// Name of the clip at `index` in the same group and character lane.
    pub fn sibling_name(&self, index: u8) -> String {
        match self.character {
            Some(character) => format!("A_{}_{}_{:02}", self.action, character, index),
            None => format!("A_{}_{:02}", self.action, index),
        }
    }

    /// Matched text with a trailing `_A` stripped. Transition clips rooted
    /// at this clip are named `<prefix>-...`.
    pub fn transition_prefix(&self) -> &str {
        self.matched.strip_suffix("_A").unwrap_or(&self.matched)
    }
}

/// Two-digit index as written. A malformed capture degrades to 0 instead of
/// failing the whole clip.
fn parse_index(digits: &str) -> u8 {
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_name() {
        let parsed = ClipName::parse("A_intro_01").unwrap();
        assert_eq!(parsed.action, "intro");
        assert_eq!(parsed.character, None);
        assert_eq!(parsed.clip_index, 1);
        assert_eq!(parsed.alternate, None);
        assert_eq!(parsed.transition, None);
        assert!(parsed.is_primary());
        assert_eq!(parsed.base_name(), "A_intro_01");
    }

    #[test]
    fn character_lane() {
        let parsed = ClipName::parse("A_walk_B_07").unwrap();
        assert_eq!(parsed.character, Some('B'));
        assert_eq!(parsed.clip_index, 7);
        assert_eq!(parsed.sibling_name(8), "A_walk_B_08");
    }

    #[test]
    fn alternate_with_and_without_underscore() {
        let lettered = ClipName::parse("A_intro_01_B").unwrap();
        assert_eq!(lettered.alternate, Some('B'));
        assert!(!lettered.is_primary());

        let glued = ClipName::parse("A_intro_01B").unwrap();
        assert_eq!(glued.alternate, Some('B'));

        let first = ClipName::parse("A_intro_01_A").unwrap();
        assert_eq!(first.alternate, Some('A'));
        assert!(first.is_primary());
    }

    #[test]
    fn same_group_transition() {
        let parsed = ClipName::parse("A_intro_01-02").unwrap();
        let transition = parsed.transition.unwrap();
        assert_eq!(transition.raw, "02");
        assert_eq!(transition.next_action, None);
        assert_eq!(transition.next_index, 2);
    }

    #[test]
    fn cross_group_transition() {
        let parsed = ClipName::parse("A_intro_02-relax_01").unwrap();
        let transition = parsed.transition.unwrap();
        assert_eq!(transition.raw, "relax_01");
        assert_eq!(transition.next_action.as_deref(), Some("relax"));
        assert_eq!(transition.next_index, 1);
    }

    #[test]
    fn transition_prefix_strips_primary_letter() {
        let plain = ClipName::parse("A_intro_01").unwrap();
        assert_eq!(plain.transition_prefix(), "A_intro_01");

        let lettered = ClipName::parse("A_intro_01_A").unwrap();
        assert_eq!(lettered.transition_prefix(), "A_intro_01");
    }

    #[test]
    fn names_outside_the_convention() {
        assert_eq!(ClipName::parse("intro_01"), None);
        assert_eq!(ClipName::parse("A_intro"), None);
        assert_eq!(ClipName::parse("A_intro_1"), None);
        assert_eq!(ClipName::parse("title_card"), None);
        assert_eq!(ClipName::parse(""), None);
    }
}
