use crate::display::{DisplayCoord, SquareShade};
use crate::piece::Piece;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderedPiece {
    pub piece: Piece,
    pub glyph: char,
    pub draggable: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderedSquare {
    pub coord: DisplayCoord,
    pub shade: SquareShade,
    pub piece: Option<RenderedPiece>,
}

// What the view's listeners report back to the controller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Gesture {
    DragStart(DisplayCoord),
    DragEnd,
    DragOver(DisplayCoord),
    Drop(DisplayCoord),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GestureResponse {
    // Whether the browser's default handling must be suppressed. Suppressing it on drag-over
    // is what makes a square a valid drop target.
    pub prevent_default: bool,
}

// A surface the board is drawn on. `add_square` is called for all 64 squares, top row first,
// after every `clear`. Implementations are responsible for turning user input on the squares
// and pieces they create into `Gesture`s.
pub trait BoardView {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;
    fn add_square(&mut self, square: &RenderedSquare) -> Result<(), Self::Error>;
    // Blocking, user-visible message.
    fn show_notice(&mut self, message: &str) -> Result<(), Self::Error>;
}
