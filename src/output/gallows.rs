//! ASCII gallows drawing
//!
//! The scaffold is always drawn. One body part appears per wrong guess,
//! in the order of [`BodyPart::ALL`].

use crate::game::MAX_ATTEMPTS;

/// A piece of the hanged figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    /// Reveal order, one entry per allowed wrong guess
    pub const ALL: [Self; MAX_ATTEMPTS as usize] = [
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Parts shown after `wrong_count` wrong guesses
    pub fn visible(wrong_count: u8) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().take(usize::from(wrong_count))
    }

    /// (row, column, glyph) in the scaffold grid
    const fn glyph(self) -> (usize, usize, char) {
        match self {
            Self::Head => (2, 2, 'O'),
            Self::Body => (3, 2, '|'),
            Self::LeftArm => (3, 1, '/'),
            Self::RightArm => (3, 3, '\\'),
            Self::LeftLeg => (4, 1, '/'),
            Self::RightLeg => (4, 3, '\\'),
        }
    }
}

const SCAFFOLD: [&str; 7] = [
    "  +---+",
    "  |   |",
    "      |",
    "      |",
    "      |",
    "      |",
    "=========",
];

/// Draw the gallows for a given wrong-guess count
///
/// ```
/// use hangman::output::gallows::render;
///
/// let lines = render(2);
/// assert_eq!(lines[2], "  O   |");
/// assert_eq!(lines[3], "  |   |");
/// ```
#[must_use]
pub fn render(wrong_count: u8) -> Vec<String> {
    let mut grid: Vec<Vec<char>> = SCAFFOLD.iter().map(|line| line.chars().collect()).collect();

    for part in BodyPart::visible(wrong_count) {
        let (row, col, glyph) = part.glyph();
        grid[row][col] = glyph;
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}
