// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::sync::mpsc;

use chessboard_sync::display::to_display_coord;
use chessboard_sync::test_util::RecordingView;
use chessboard_sync::{
    BoardConfig, BoardController, ClientEvent, Coord, DisplayCoord, PlayerRole, ServerEvent,
    ShakmatyEngine,
};


pub struct TestClient {
    pub controller: BoardController<ShakmatyEngine, RecordingView>,
    outgoing: mpsc::Receiver<ClientEvent>,
}

impl TestClient {
    #[allow(dead_code)]
    pub fn new() -> Self {
        let (events_tx, outgoing) = mpsc::channel();
        let controller = BoardController::new(
            ShakmatyEngine::new(),
            RecordingView::new(),
            BoardConfig::default(),
            events_tx,
        );
        TestClient { controller, outgoing }
    }

    #[allow(dead_code)]
    pub fn with_role(role: PlayerRole) -> Self {
        let mut client = Self::new();
        client.controller.process_server_event(ServerEvent::PlayerRole(role)).unwrap();
        client
    }

    #[allow(dead_code)]
    pub fn view(&self) -> &RecordingView { self.controller.view() }

    #[allow(dead_code)]
    pub fn outgoing_events(&self) -> Vec<ClientEvent> { self.outgoing.try_iter().collect() }
}

// Grid position of the square with the given name, e.g. `sq("e2")`.
#[allow(dead_code)]
pub fn sq(name: &str) -> DisplayCoord {
    to_display_coord(Coord::from_algebraic(name).unwrap())
}
