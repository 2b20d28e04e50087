/*
Note Name Constants
===================

Readable names for the twelve pitch classes of one octave, as scale-degree
offsets. With the standard tuning, offset 0 is middle C and A (9) sounds at
440 Hz. Move between octaves with `octave(note, n)`.

Enharmonic spellings are aliases for the same offset:
  C_SHARP = D_FLAT = 1
  E_SHARP = F = 5,   F_FLAT = E = 4
  B_SHARP = 12 (the next C), C_FLAT = 11 (same as B)

Example usage:
  let a_minor = NoteList::from(arpeggios::MINOR).translate(notes::A);
  let low_e = octave(notes::E, -1);
*/

pub const C: i32 = 0;
pub const C_SHARP: i32 = 1;
pub const D_FLAT: i32 = 1;
pub const D: i32 = 2;
pub const D_SHARP: i32 = 3;
pub const E_FLAT: i32 = 3;
pub const E: i32 = 4;
pub const F_FLAT: i32 = 4;
pub const E_SHARP: i32 = 5;
pub const F: i32 = 5;
pub const F_SHARP: i32 = 6;
pub const G_FLAT: i32 = 6;
pub const G: i32 = 7;
pub const G_SHARP: i32 = 8;
pub const A_FLAT: i32 = 8;
pub const A: i32 = 9; // A440 tuning reference
pub const A_SHARP: i32 = 10;
pub const B_FLAT: i32 = 10;
pub const B: i32 = 11;
pub const C_FLAT: i32 = 11;
pub const B_SHARP: i32 = 12;
