//! Pitch and scale model.
//!
//! Notes are integer scale-degree offsets. A [`Tuning`] maps them to
//! frequencies; [`NoteList`] builds chords, scales and arpeggios out of them;
//! the [`scales`] and [`arpeggios`] tables name the common shapes.

/// Readable names for the twelve pitch classes.
pub mod notes;
/// Ordered chord/scale/arpeggio offsets with value semantics.
pub mod note_list;
/// Named scale and arpeggio tables.
pub mod tables;
/// Equal temperament and reference-pitch tuning.
pub mod tuning;

pub use note_list::NoteList;
pub use tables::{arpeggios, scales};
pub use tuning::{equal_temperament, frequency, octave, octave_in, Tuning};
