use std::ops::Index;

use crate::error::{AmusiaError, Result};

/// An ordered list of scale-degree offsets: a chord, scale or arpeggio.
///
/// Order is meaningful (degree `n` is `list[n]`) and equality/ordering are
/// lexicographic over the offsets.
///
/// `NoteList` is a plain value. The shaping methods consume the list and hand
/// the modified one back, so chaining never touches a list anyone else holds:
///
/// ```
/// use amusia::pitch::{arpeggios, notes, NoteList};
///
/// let chord = NoteList::from(arpeggios::MINOR_SEVEN)
///     .translate(notes::A)
///     .extend(1)
///     .extend_root(1)
///     .unwrap();
/// assert_eq!(chord.as_slice(), &[9, 12, 16, 19, 21, 24, 28, 31, 21]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteList {
    notes: Vec<i32>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, note: i32) -> Self {
        self.notes.push(note);
        self
    }

    pub fn push_all(mut self, notes: &[i32]) -> Self {
        self.notes.extend_from_slice(notes);
        self
    }

    /// Add `amount` to every note.
    pub fn translate(mut self, amount: i32) -> Self {
        for note in &mut self.notes {
            *note += amount;
        }
        self
    }

    pub fn translate_octave(self, octave_amount: i32) -> Self {
        self.translate_octave_in(octave_amount, 12)
    }

    pub fn translate_octave_in(self, octave_amount: i32, notes_per_octave: i32) -> Self {
        self.translate(octave_amount * notes_per_octave)
    }

    /// Append a copy of the list for each of the next `number_of_octaves`
    /// octaves.
    pub fn extend(self, number_of_octaves: i32) -> Self {
        self.extend_in(number_of_octaves, 12)
    }

    pub fn extend_in(mut self, number_of_octaves: i32, notes_per_octave: i32) -> Self {
        let original_len = self.notes.len();
        self.notes
            .reserve(original_len * number_of_octaves.max(0) as usize);
        for octave in 1..=number_of_octaves {
            let offset = octave * notes_per_octave;
            // index only the pre-extension prefix so octaves stack, not compound
            for i in 0..original_len {
                let note = self.notes[i] + offset;
                self.notes.push(note);
            }
        }
        self
    }

    /// Append only the root, `number_of_octaves` octaves up.
    pub fn extend_root(self, number_of_octaves: i32) -> Result<Self> {
        self.extend_root_in(number_of_octaves, 12)
    }

    pub fn extend_root_in(mut self, number_of_octaves: i32, notes_per_octave: i32) -> Result<Self> {
        let root = *self.notes.first().ok_or(AmusiaError::EmptyNoteList)?;
        self.notes.push(root + number_of_octaves * notes_per_octave);
        Ok(self)
    }

    /// Ascending order.
    pub fn sort(mut self) -> Self {
        self.notes.sort_unstable();
        self
    }

    /// Index of the first occurrence of `note`.
    pub fn find(&self, note: i32) -> Option<usize> {
        self.notes.iter().position(|&n| n == note)
    }

    pub fn contains(&self, note: i32) -> bool {
        self.find(note).is_some()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.notes.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.notes.iter()
    }
}

impl From<&[i32]> for NoteList {
    fn from(notes: &[i32]) -> Self {
        Self {
            notes: notes.to_vec(),
        }
    }
}

impl<const N: usize> From<[i32; N]> for NoteList {
    fn from(notes: [i32; N]) -> Self {
        Self {
            notes: notes.to_vec(),
        }
    }
}

impl From<Vec<i32>> for NoteList {
    fn from(notes: Vec<i32>) -> Self {
        Self { notes }
    }
}

impl FromIterator<i32> for NoteList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for NoteList {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.notes[index]
    }
}

impl IntoIterator for NoteList {
    type Item = i32;
    type IntoIter = std::vec::IntoIter<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
