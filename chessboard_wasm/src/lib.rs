// Browser front-end of the board. The page owns the socket: it feeds every socket message to
// `WebClient::process_socket_event` and emits whatever `next_outgoing_event` returns.
// Everything else (rendering, drag&drop) happens here.

#![cfg_attr(feature = "strict", deny(warnings))]

pub mod config;
pub mod web_board_view;
pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::mpsc;

use chessboard_sync::{
    BoardController, ClientError, ClientEvent, ServerEvent, ShakmatyEngine, internal_error_message,
};
use chessboard_sync::rules::RulesEngine;
use log::warn;
use wasm_bindgen::prelude::*;

use crate::config::WebConfig;
use crate::web_board_view::{WebBoardView, WebController};
use crate::web_document::web_document;
use crate::web_error_handling::JsResult;


#[wasm_bindgen]
pub fn init_logging(level: &str) -> JsResult<()> {
    let level = log::Level::from_str(level).map_err(|err| rust_error!("{}", err))?;
    console_log::init_with_level(level).map_err(|err| rust_error!("{}", err))
}

#[wasm_bindgen(getter_with_clone)]
pub struct OutgoingSocketEvent {
    pub name: String,
    pub payload: String,
}

#[wasm_bindgen]
pub struct WebClient {
    controller: Rc<RefCell<WebController>>,
    events_rx: mpsc::Receiver<ClientEvent>,
}

#[wasm_bindgen]
impl WebClient {
    // `config_json` is a serialized `WebConfig`; empty string for defaults.
    pub fn new_client(config_json: &str) -> JsResult<WebClient> {
        let config =
            WebConfig::from_json(config_json).map_err(|err| rust_error!("Bad config: {}", err))?;
        let (events_tx, events_rx) = mpsc::channel();
        let board = web_document()?.query_selector_existing(&config.board_selector)?;
        let board_config = config.board.clone();
        let controller = Rc::new_cyclic(|weak| {
            RefCell::new(BoardController::new(
                ShakmatyEngine::new(),
                WebBoardView::new(board, config, weak.clone()),
                board_config,
                events_tx,
            ))
        });
        controller.borrow_mut().render()?;
        Ok(WebClient { controller, events_rx })
    }

    pub fn render(&self) -> JsResult<()> { self.controller.borrow_mut().render() }

    // Only a failure to draw the board is reported to the page. Events that cannot be parsed
    // or applied are logged and otherwise ignored.
    pub fn process_socket_event(&self, name: &str, payload_json: &str) -> JsResult<()> {
        let event = match ServerEvent::from_socket_message(name, payload_json) {
            Ok(event) => event,
            Err(err) => {
                warn!("Ignoring unparsable \"{}\" event: {}", name, err);
                return Ok(());
            }
        };
        match self.controller.borrow_mut().process_server_event(event) {
            Ok(()) => Ok(()),
            Err(ClientError::View(err)) => Err(err),
            Err(ClientError::CannotApplyEvent(message)) => {
                warn!("{}", message);
                Ok(())
            }
        }
    }

    // Returns `OutgoingSocketEvent` or null if there is nothing to send.
    pub fn next_outgoing_event(&self) -> JsResult<JsValue> {
        match self.events_rx.try_recv() {
            Ok(event) => {
                let payload = event
                    .payload_json()
                    .map_err(|err| rust_error!("Cannot serialize event: {}", err))?;
                Ok(OutgoingSocketEvent { name: event.socket_name().to_owned(), payload }.into())
            }
            Err(mpsc::TryRecvError::Empty) => Ok(JsValue::NULL),
            Err(mpsc::TryRecvError::Disconnected) => {
                Err(rust_error!("{}", internal_error_message!("event channel disconnected")))
            }
        }
    }

    // "w", "b" or null.
    pub fn role(&self) -> Option<String> {
        self.controller.borrow().role().force().map(|force| force.to_wire().to_string())
    }

    pub fn fen(&self) -> String { self.controller.borrow().engine().fen() }
}
