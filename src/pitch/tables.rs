//! Named scales and arpeggios.
//!
//! The tables are plain `&'static [i32]` constants and can't be changed.
//! Build a [`NoteList`](super::NoteList) from one to get your own copy to
//! shape.

/// Seven- and six-note scales, as semitone offsets from the tonic.
pub mod scales {
    pub const MAJOR: &[i32] = &[0, 2, 4, 5, 7, 9, 11];
    pub const MINOR: &[i32] = &[0, 2, 3, 5, 7, 8, 10];
    pub const HARMONIC_MINOR: &[i32] = &[0, 2, 3, 5, 7, 8, 11];
    pub const MAJOR_BLUES: &[i32] = &[0, 2, 4, 7, 9, 10];
    pub const MINOR_BLUES: &[i32] = &[0, 2, 3, 7, 8, 10];

    pub const ALL: &[(&str, &[i32])] = &[
        ("major", MAJOR),
        ("minor", MINOR),
        ("harmonic_minor", HARMONIC_MINOR),
        ("major_blues", MAJOR_BLUES),
        ("minor_blues", MINOR_BLUES),
    ];

    /// Look a scale up by its snake_case name.
    pub fn named(name: &str) -> Option<&'static [i32]> {
        super::lookup(ALL, name)
    }
}

/// Chord tones, as semitone offsets from the root.
pub mod arpeggios {
    pub const MAJOR: &[i32] = &[0, 4, 7];
    pub const MINOR: &[i32] = &[0, 3, 7];
    pub const DIMINISHED: &[i32] = &[0, 3, 6];
    pub const DIMINISHED_SEVEN: &[i32] = &[0, 3, 6, 9];
    pub const AUGMENTED: &[i32] = &[0, 4, 8];
    pub const MAJOR_SIX: &[i32] = &[0, 4, 7, 9];
    pub const MINOR_SIX: &[i32] = &[0, 3, 7, 9];
    pub const MAJOR_SEVEN: &[i32] = &[0, 4, 7, 10];
    pub const MINOR_SEVEN: &[i32] = &[0, 3, 7, 10];
    pub const MAJOR_NINE: &[i32] = &[0, 4, 7, 10, 14];
    pub const MINOR_NINE: &[i32] = &[0, 3, 7, 10, 14];
    pub const MAJOR_MAJOR_SEVEN: &[i32] = &[0, 4, 7, 11];
    pub const MINOR_MAJOR_SEVEN: &[i32] = &[0, 3, 7, 11];
    pub const MAJOR_MAJOR_NINE: &[i32] = &[0, 4, 7, 11, 13];
    pub const MINOR_MAJOR_NINE: &[i32] = &[0, 3, 7, 11, 13];

    pub const ALL: &[(&str, &[i32])] = &[
        ("major", MAJOR),
        ("minor", MINOR),
        ("diminished", DIMINISHED),
        ("diminished_seven", DIMINISHED_SEVEN),
        ("augmented", AUGMENTED),
        ("major_six", MAJOR_SIX),
        ("minor_six", MINOR_SIX),
        ("major_seven", MAJOR_SEVEN),
        ("minor_seven", MINOR_SEVEN),
        ("major_nine", MAJOR_NINE),
        ("minor_nine", MINOR_NINE),
        ("major_major_seven", MAJOR_MAJOR_SEVEN),
        ("minor_major_seven", MINOR_MAJOR_SEVEN),
        ("major_major_nine", MAJOR_MAJOR_NINE),
        ("minor_major_nine", MINOR_MAJOR_NINE),
    ];

    /// Look an arpeggio up by its snake_case name.
    pub fn named(name: &str) -> Option<&'static [i32]> {
        super::lookup(ALL, name)
    }
}

fn lookup(table: &'static [(&'static str, &'static [i32])], name: &str) -> Option<&'static [i32]> {
    table
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, notes)| *notes)
}
