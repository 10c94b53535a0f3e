//! Catalog: the clip collection and the two inference passes.

use crate::alternate::alternate_clips;
use crate::clip::Clip;
use crate::next::next_clips;
use crate::previous::previous_clip;

/// Ordered collection of clips plus the inferred sequencing graph.
///
/// Collection order is the enumeration order of the input names and decides
/// lookup ties; membership never changes after construction.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    clips: Vec<Clip>,
}

impl Catalog {
    /// Build a catalog from raw clip names (no extension, no path).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clips: names.into_iter().map(|name| Clip::new(name.into())).collect(),
        }
    }

    /// Infer `next_clips`, `alternate_clips`, and `previous_clip` for every
    /// clip: one pass for the forward edges and the alternates, one pass for
    /// the predecessors. Both passes read only the immutable names, so
    /// relinking an already linked catalog yields the same graph.
    pub fn link(&mut self) {
        let forward: Vec<_> = self
            .clips
            .iter()
            .map(|clip| {
                (
                    next_clips(&clip.name, &self.clips),
                    alternate_clips(&clip.name, &self.clips),
                )
            })
            .collect();
        for (clip, (next, alternates)) in self.clips.iter_mut().zip(forward) {
            clip.next_clips = next;
            clip.alternate_clips = alternates;
        }

        let backward: Vec<_> = self
            .clips
            .iter()
            .map(|clip| previous_clip(&clip.name, &self.clips))
            .collect();
        for (clip, previous) in self.clips.iter_mut().zip(backward) {
            clip.previous_clip = previous;
        }

        log::debug!("linked {} clips", self.clips.len());
    }

    /// The decorated records, in input order.
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn into_clips(self) -> Vec<Clip> {
        self.clips
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
