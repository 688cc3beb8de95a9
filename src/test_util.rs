// Test utilities that are shared between unit tests and the "tests" folder.

use std::convert::Infallible;

use itertools::Itertools;

use crate::coord::NUM_COLS;
use crate::display::{DisplayCoord, SquareShade};
use crate::view::{BoardView, RenderedSquare};


// In-memory `BoardView`: keeps the squares of the latest render pass and every notice shown.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    pub squares: Vec<RenderedSquare>,
    pub notices: Vec<String>,
    pub num_renders: usize,
}

impl RecordingView {
    pub fn new() -> Self { Self::default() }

    pub fn square(&self, coord: DisplayCoord) -> Option<&RenderedSquare> {
        self.squares.iter().find(|square| square.coord == coord)
    }

    // One line per row, top row first: the piece glyph, or '.' / ':' for an empty light /
    // dark square.
    pub fn ascii_board(&self) -> String {
        self.squares
            .chunks(NUM_COLS as usize)
            .map(|row| {
                row.iter()
                    .map(|square| match (square.piece, square.shade) {
                        (Some(piece), _) => piece.glyph,
                        (None, SquareShade::Light) => '.',
                        (None, SquareShade::Dark) => ':',
                    })
                    .collect::<String>()
            })
            .join("\n")
    }

    pub fn draggable_glyphs(&self) -> String {
        self.squares
            .iter()
            .filter_map(|square| square.piece.filter(|piece| piece.draggable))
            .map(|piece| piece.glyph)
            .collect()
    }
}

impl BoardView for RecordingView {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.squares.clear();
        self.num_renders += 1;
        Ok(())
    }

    fn add_square(&mut self, square: &RenderedSquare) -> Result<(), Self::Error> {
        self.squares.push(*square);
        Ok(())
    }

    fn show_notice(&mut self, message: &str) -> Result<(), Self::Error> {
        self.notices.push(message.to_owned());
        Ok(())
    }
}
