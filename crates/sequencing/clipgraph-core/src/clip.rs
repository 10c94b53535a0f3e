//! Clip record handed to serializers.

use serde::{Deserialize, Serialize};

/// One animation asset and its inferred sequencing edges.
///
/// `name` is the parse subject and never changes; the three derived fields
/// are filled in by [`Catalog::link`](crate::catalog::Catalog::link). A name
/// outside the convention keeps them empty/absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub name: String,
    /// Clips reachable as a direct successor (typically 0 or 1).
    #[serde(default)]
    pub next_clips: Vec<String>,
    /// Variants at the same position, excluding this clip.
    #[serde(default)]
    pub alternate_clips: Vec<String>,
    /// Direct predecessor, absent at the start of a sequence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_clip: Option<String>,
}

impl Clip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_omits_absent_previous() {
        let clip = Clip {
            name: "A_intro_01".into(),
            next_clips: vec!["A_intro_02".into()],
            alternate_clips: vec![],
            previous_clip: None,
        };
        let json = serde_json::to_string(&clip).unwrap();
        assert_eq!(
            json,
            r#"{"name":"A_intro_01","nextClips":["A_intro_02"],"alternateClips":[]}"#
        );
    }

    #[test]
    fn serializes_previous_when_present() {
        let clip = Clip {
            previous_clip: Some("A_intro_01".into()),
            ..Clip::new("A_intro_02")
        };
        let json = serde_json::to_string(&clip).unwrap();
        assert!(json.contains(r#""previousClip":"A_intro_01""#));
    }
}
