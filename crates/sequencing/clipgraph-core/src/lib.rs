//! Clipgraph core (engine-agnostic)
//!
//! Infers a sequencing graph over a collection of animation clip names that
//! follow the studio naming convention (`A_intro_01`, `A_intro_01-02`,
//! `A_intro_01_A`, ...). For each clip the catalog derives the next clips,
//! the alternate clips, and the previous clip. I/O stays outside this crate:
//! callers supply the ordered name list and serialize the resulting records.

pub mod alternate;
pub mod catalog;
pub mod clip;
pub mod lookup;
pub mod name;
pub mod next;
pub mod previous;

// Re-exports for consumers (CLI, tests)
pub use alternate::alternate_clips;
pub use catalog::Catalog;
pub use clip::Clip;
pub use lookup::{find_all, find_first};
pub use name::{ClipName, Transition};
pub use next::next_clips;
pub use previous::previous_clip;
