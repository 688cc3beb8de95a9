use chessboard_sync::BoardConfig;
use serde::Deserialize;


// Page-level settings. Class lists default to what the stock page's stylesheet expects.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    #[serde(flatten)]
    pub board: BoardConfig,
    pub board_selector: String,
    pub square_classes: Vec<String>,
    pub light_square_classes: Vec<String>,
    pub dark_square_classes: Vec<String>,
    pub piece_classes: Vec<String>,
    pub white_piece_classes: Vec<String>,
    pub black_piece_classes: Vec<String>,
}

fn classes(names: &[&str]) -> Vec<String> { names.iter().map(|&name| name.to_owned()).collect() }

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            board: BoardConfig::default(),
            board_selector: ".chessboard".to_owned(),
            square_classes: classes(&[
                "square",
                "w-full",
                "h-full",
                "flex",
                "items-center",
                "justify-center",
            ]),
            light_square_classes: classes(&["bg-green-600"]),
            dark_square_classes: classes(&["bg-brown-200"]),
            piece_classes: classes(&["piece", "text-4xl", "font-bold"]),
            white_piece_classes: classes(&["text-white"]),
            black_piece_classes: classes(&["text-black"]),
        }
    }
}

impl WebConfig {
    // Empty input means "all defaults".
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            Ok(WebConfig::default())
        } else {
            serde_json::from_str(json)
        }
    }
}
