use std::cell::RefCell;
use std::rc::Weak;

use chessboard_sync::{
    BoardController, BoardView, Force, Gesture, RenderedSquare, ShakmatyEngine, SquareShade,
};
use log::warn;
use wasm_bindgen::JsValue;

use crate::config::WebConfig;
use crate::web_document::{web_document, web_window};
use crate::web_element_ext::{EventListener, WebElementExt};
use crate::web_error_handling::JsResult;


pub type WebController = BoardController<ShakmatyEngine, WebBoardView>;

// Draws the board as a grid of <div>s inside the board container. Every square is a drop
// target; every piece is a drag source (the browser only lets the `draggable` ones move).
pub struct WebBoardView {
    board: web_sys::Element,
    config: WebConfig,
    // Gestures are forwarded here. Weak, since the controller owns this view.
    controller: Weak<RefCell<WebController>>,
    // Listeners attached to the nodes of the current render pass.
    listeners: Vec<EventListener<web_sys::DragEvent>>,
    // Listeners of the previous pass. The one that triggered a re-render is still running
    // while the board is cleared, so these are dropped one pass later.
    stale_listeners: Vec<EventListener<web_sys::DragEvent>>,
}

impl WebBoardView {
    pub fn new(
        board: web_sys::Element, config: WebConfig, controller: Weak<RefCell<WebController>>,
    ) -> Self {
        WebBoardView {
            board,
            config,
            controller,
            listeners: Vec::new(),
            stale_listeners: Vec::new(),
        }
    }

    fn listen(
        &mut self, node: &web_sys::Element, event_type: &str, gesture: Gesture,
    ) -> JsResult<()> {
        let controller = self.controller.clone();
        let listener = node.add_event_listener(event_type, move |event: web_sys::DragEvent| {
            if let Gesture::DragStart(_) = gesture {
                // Firefox does not start a drag without some payload.
                if let Some(data_transfer) = event.data_transfer() {
                    data_transfer.set_data("text/plain", "")?;
                }
            }
            dispatch_gesture(&controller, gesture, &event)
        })?;
        self.listeners.push(listener);
        Ok(())
    }

    fn make_piece_node(&mut self, square: &RenderedSquare) -> JsResult<Option<web_sys::Element>> {
        let Some(piece) = square.piece else {
            return Ok(None);
        };
        let force_classes = match piece.piece.force {
            Force::White => &self.config.white_piece_classes,
            Force::Black => &self.config.black_piece_classes,
        };
        let node = web_document()?
            .create_element("div")?
            .with_classes(self.config.piece_classes.iter().map(String::as_str))?
            .with_classes(force_classes.iter().map(String::as_str))?
            .with_attribute("draggable", if piece.draggable { "true" } else { "false" })?
            .with_text_content(&piece.glyph.to_string());

        self.listen(&node, "dragstart", Gesture::DragStart(square.coord))?;
        self.listen(&node, "dragend", Gesture::DragEnd)?;
        Ok(Some(node))
    }
}

impl BoardView for WebBoardView {
    type Error = JsValue;

    fn clear(&mut self) -> JsResult<()> {
        self.board.remove_all_children();
        self.stale_listeners = std::mem::take(&mut self.listeners);
        Ok(())
    }

    fn add_square(&mut self, square: &RenderedSquare) -> JsResult<()> {
        let (row, col) = (square.coord.row(), square.coord.col());
        let shade_classes = match square.shade {
            SquareShade::Light => &self.config.light_square_classes,
            SquareShade::Dark => &self.config.dark_square_classes,
        };
        let node = web_document()?
            .create_element("div")?
            .with_classes(self.config.square_classes.iter().map(String::as_str))?
            .with_classes(shade_classes.iter().map(String::as_str))?
            .with_attribute("data-row", &row.to_string())?
            .with_attribute("data-col", &col.to_string())?;
        if let Some(piece_node) = self.make_piece_node(square)? {
            node.append_element(&piece_node)?;
        }

        self.listen(&node, "dragover", Gesture::DragOver(square.coord))?;
        self.listen(&node, "drop", Gesture::Drop(square.coord))?;

        self.board.append_element(&node)
    }

    fn show_notice(&mut self, message: &str) -> JsResult<()> {
        web_window()?.alert_with_message(message)
    }
}

fn dispatch_gesture(
    controller: &Weak<RefCell<WebController>>, gesture: Gesture, event: &web_sys::DragEvent,
) -> JsResult<()> {
    let Some(controller) = controller.upgrade() else {
        return Ok(());
    };
    let Ok(mut controller) = controller.try_borrow_mut() else {
        warn!("Ignoring {:?}: board is busy", gesture);
        return Ok(());
    };
    let response = controller.handle_gesture(gesture)?;
    if response.prevent_default {
        event.prevent_default();
    }
    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use chessboard_sync::{DisplayCoord, Piece, PieceKind, RenderedPiece};
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn draw(view: &mut WebBoardView) {
        view.clear().unwrap();
        for coord in DisplayCoord::all() {
            let piece = (coord.row() == 6).then(|| RenderedPiece {
                piece: Piece::new(PieceKind::Pawn, Force::White),
                glyph: '♙',
                draggable: true,
            });
            view.add_square(&RenderedSquare { coord, shade: coord.shade(), piece }).unwrap();
        }
    }

    #[wasm_bindgen_test]
    fn listeners_are_released_after_next_render() {
        let board = web_document().unwrap().create_element("div").unwrap();
        let mut view = WebBoardView::new(board.clone(), WebConfig::default(), Weak::new());
        // Two per square, two more per piece.
        let per_pass = 64 * 2 + 8 * 2;
        for _ in 0..5 {
            draw(&mut view);
            assert_eq!(view.listeners.len(), per_pass);
            assert!(view.stale_listeners.len() <= per_pass);
            assert_eq!(board.child_element_count(), 64);
        }
        assert_eq!(view.stale_listeners.len(), per_pass);
    }
}
