use std::sync::mpsc;

use log::{debug, info, warn};

use crate::config::BoardConfig;
use crate::display::{DisplayCoord, from_display_coord};
use crate::error::ClientError;
use crate::event::{ClientEvent, ServerEvent};
use crate::piece::piece_to_pictogram;
use crate::role::PlayerRole;
use crate::rules::{AUTO_PROMOTION, IllegalMove, MoveRecord, MoveRequest, RulesEngine};
use crate::view::{BoardView, Gesture, GestureResponse, RenderedPiece, RenderedSquare};


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Accepted(MoveRecord),
    Rejected(IllegalMove),
}

// A piece picked up by the user and not yet dropped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PieceDrag {
    pub source: DisplayCoord,
}

// Keeps the view in sync with the engine's position, turns drag&drop into move requests and
// applies what the server tells us. All methods run to completion, including the re-render,
// before the next event is handled.
pub struct BoardController<E: RulesEngine, V: BoardView> {
    engine: E,
    view: V,
    config: BoardConfig,
    role: PlayerRole,
    drag: Option<PieceDrag>,
    events_tx: mpsc::Sender<ClientEvent>,
}

impl<E: RulesEngine, V: BoardView> BoardController<E, V> {
    pub fn new(
        engine: E, view: V, config: BoardConfig, events_tx: mpsc::Sender<ClientEvent>,
    ) -> Self {
        BoardController {
            engine,
            view,
            config,
            role: PlayerRole::Observer,
            drag: None,
            events_tx,
        }
    }

    pub fn engine(&self) -> &E { &self.engine }
    pub fn view(&self) -> &V { &self.view }
    pub fn view_mut(&mut self) -> &mut V { &mut self.view }
    pub fn config(&self) -> &BoardConfig { &self.config }
    pub fn role(&self) -> PlayerRole { self.role }
    pub fn lifted_piece(&self) -> Option<PieceDrag> { self.drag }

    pub fn render(&mut self) -> Result<(), V::Error> {
        let grid = self.engine.current_board();
        self.view.clear()?;
        for coord in DisplayCoord::all() {
            let piece = grid[from_display_coord(coord)].map(|piece| RenderedPiece {
                piece,
                glyph: piece_to_pictogram(piece),
                draggable: self.role.can_drag(piece.force),
            });
            self.view.add_square(&RenderedSquare { coord, shade: coord.shade(), piece })?;
        }
        Ok(())
    }

    pub fn request_move(
        &mut self, source: DisplayCoord, target: DisplayCoord,
    ) -> Result<MoveOutcome, V::Error> {
        let request = MoveRequest::new(
            from_display_coord(source),
            from_display_coord(target),
            Some(AUTO_PROMOTION),
        );
        match self.engine.apply_move(&request) {
            Ok(record) => {
                debug!("Local move {} ({})", record.san, record.lan);
                self.send(ClientEvent::Move(record.clone()));
                self.render()?;
                Ok(MoveOutcome::Accepted(record))
            }
            Err(err) => {
                info!("Rejected move {}-{}: {:?}", request.from, request.to, err);
                self.view.show_notice(&self.config.invalid_move_notice)?;
                Ok(MoveOutcome::Rejected(err))
            }
        }
    }

    // Returns whether a piece was lifted. Only pieces of the assigned color can be.
    pub fn drag_start(&mut self, source: DisplayCoord) -> bool {
        let piece = self.engine.current_board()[from_display_coord(source)];
        match piece {
            Some(piece) if self.role.can_drag(piece.force) => {
                self.drag = Some(PieceDrag { source });
                true
            }
            _ => false,
        }
    }

    pub fn drag_end(&mut self) { self.drag = None; }

    // Every square accepts drops.
    pub fn drag_over(&mut self, _target: DisplayCoord) -> bool { true }

    // Dropping consumes the lifted piece: the re-render removes the dragged element, so the
    // matching drag-end may never arrive.
    pub fn drop_piece(&mut self, target: DisplayCoord) -> Result<Option<MoveOutcome>, V::Error> {
        match self.drag.take() {
            Some(drag) => self.request_move(drag.source, target).map(Some),
            None => Ok(None),
        }
    }

    pub fn handle_gesture(&mut self, gesture: Gesture) -> Result<GestureResponse, V::Error> {
        let prevent_default = match gesture {
            Gesture::DragStart(source) => {
                self.drag_start(source);
                false
            }
            Gesture::DragEnd => {
                self.drag_end();
                false
            }
            Gesture::DragOver(target) => self.drag_over(target),
            Gesture::Drop(target) => {
                self.drop_piece(target)?;
                true
            }
        };
        Ok(GestureResponse { prevent_default })
    }

    // The board is re-rendered even if the event could not be applied. In that case the
    // position stays as it was and `CannotApplyEvent` says why.
    pub fn process_server_event(&mut self, event: ServerEvent) -> Result<(), ClientError<V::Error>> {
        debug!("Server event: {:?}", event);
        let applied = match event {
            ServerEvent::PlayerRole(role) => {
                self.role = role;
                Ok(())
            }
            ServerEvent::Move(request) => {
                self.engine.replay_move(&request).map(drop).map_err(|err| {
                    ClientError::CannotApplyEvent(format!(
                        "Cannot replay move {}-{}: {:?}",
                        request.from, request.to, err
                    ))
                })
            }
            ServerEvent::BoardState(fen) => self.engine.load_position(&fen).map_err(|err| {
                ClientError::CannotApplyEvent(format!("Cannot load position: {}", err.0))
            }),
        };
        self.render().map_err(ClientError::View)?;
        applied
    }

    fn send(&self, event: ClientEvent) {
        if self.events_tx.send(event).is_err() {
            warn!("Outgoing event dropped: transport is gone");
        }
    }
}
