use crate::cookie::*;
use crate::game::*;
use crate::scores::*;
use wasm_bindgen::prelude::*;

// Re-export types for JavaScript

#[wasm_bindgen]
pub struct WasmSavedGameState(SavedGameState);

#[wasm_bindgen]
pub struct WasmGameState(GameState);

fn scores() -> Scores<Cookies<DocumentJar>> {
    Scores::with_sink(Cookies::new(DocumentJar), |e: &DecodeError| {
        web_sys::console::error_2(
            &JsValue::from_str("Failed to parse game state from cookie:"),
            &JsValue::from_str(&e.to_string()),
        )
    })
}

fn hand(s: Option<String>) -> Result<Option<Hand>, JsValue> {
    s.map(|s| Hand::try_from(s.as_str()).map_err(|e| JsValue::from_str(&e)))
        .transpose()
}

// Initialize function
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

// SavedGameState implementation
#[wasm_bindgen]
impl WasmSavedGameState {
    /// Rejects counters that are negative, fractional or not finite.
    #[wasm_bindgen(constructor)]
    pub fn new(
        player_score: f64,
        computer_score: f64,
        draw_count: f64,
    ) -> Result<Self, JsValue> {
        validate(SavedGameState::new(player_score, computer_score, draw_count))
            .map(Self)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter, js_name = "playerScore")]
    pub fn player_score(&self) -> f64 {
        self.0.player_score
    }

    #[wasm_bindgen(getter, js_name = "computerScore")]
    pub fn computer_score(&self) -> f64 {
        self.0.computer_score
    }

    #[wasm_bindgen(getter, js_name = "drawCount")]
    pub fn draw_count(&self) -> f64 {
        self.0.draw_count
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        encode(&self.0)
    }

    #[wasm_bindgen]
    pub fn from_string(s: &str) -> Result<Self, JsValue> {
        decode(s)
            .map(Self)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

// GameState implementation
#[wasm_bindgen]
impl WasmGameState {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self(GameState::default())
    }

    #[wasm_bindgen(getter, js_name = "playerHand")]
    pub fn player_hand(&self) -> Option<String> {
        self.0.player_hand.map(|h| h.to_string())
    }

    #[wasm_bindgen(getter, js_name = "computerHand")]
    pub fn computer_hand(&self) -> Option<String> {
        self.0.computer_hand.map(|h| h.to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn result(&self) -> Option<String> {
        self.0.result.map(|r| r.to_string())
    }

    #[wasm_bindgen]
    pub fn saved(&self) -> WasmSavedGameState {
        WasmSavedGameState(self.0.saved())
    }

    /// Replace the round details and counters in one go. The outcome is
    /// decided by the caller.
    #[wasm_bindgen]
    pub fn update(
        &mut self,
        player_hand: Option<String>,
        computer_hand: Option<String>,
        result: Option<String>,
        scores: &WasmSavedGameState,
    ) -> Result<(), JsValue> {
        let result = result
            .map(|s| Outcome::try_from(s.as_str()).map_err(|e| JsValue::from_str(&e)))
            .transpose()?;
        self.0 = GameState {
            player_hand: hand(player_hand)?,
            computer_hand: hand(computer_hand)?,
            result,
            ..GameState::from(scores.0)
        };
        Ok(())
    }
}

// Score persistence

#[wasm_bindgen(js_name = "saveGameStateToCookie")]
pub fn save_game_state(state: &WasmSavedGameState) {
    scores().save(&state.0);
}

#[wasm_bindgen(js_name = "loadGameStateFromCookie")]
pub fn load_game_state() -> Option<WasmSavedGameState> {
    scores().load().map(WasmSavedGameState)
}

#[wasm_bindgen(js_name = "clearGameStateFromCookie")]
pub fn clear_game_state() {
    scores().clear();
}

#[wasm_bindgen(js_name = "restoreGameState")]
pub fn restore_game_state() -> WasmGameState {
    WasmGameState(scores().restore())
}

// Cookie primitive

#[wasm_bindgen(js_name = "setCookie")]
pub fn set_cookie(name: &str, value: &str, days: Option<i32>) {
    let days = days.map(crate::Days::from).unwrap_or(crate::DEFAULT_TTL_DAYS);
    Cookies::new(DocumentJar).set(name, value, days);
}

#[wasm_bindgen(js_name = "getCookie")]
pub fn get_cookie(name: &str) -> Option<String> {
    Cookies::new(DocumentJar).get(name)
}

#[wasm_bindgen(js_name = "deleteCookie")]
pub fn delete_cookie(name: &str) {
    Cookies::new(DocumentJar).delete(name);
}
