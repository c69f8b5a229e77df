use std::collections::HashMap;

use tracing::warn;

use gridseer_core::{Prompt, Rejection, SessionState, Step, generate_prediction};
use gridseer_protocol::{
    Button, CALLBACK_HOW_TO_USE, CALLBACK_START, Callback, Keyboard, Message, Reply, Update,
};

use crate::render;

const WELCOME_TEXT: &str = "Welcome to the mines predictor.\n\n\
    Predictions are derived with provably-fair hash-based logic and reveal \
    4-6 safe positions.";
const HOW_TO_USE_TEXT: &str = "How to use:\n\
    1. Press Start.\n\
    2. Paste the server seed from your game.\n\
    3. Enter the nonce, then pick the mine count (1-7).\n\
    The bot answers with a 5x5 grid of safe and unsafe cells.";
const SEED_PROMPT: &str = "Enter your server seed:";
const NONCE_PROMPT: &str = "Enter your nonce:";
const MINE_COUNT_PROMPT: &str = "Select mine count (1-7):";
const START_FIRST: &str = "Please press Start first.";
const EMPTY_SEED: &str = "The server seed cannot be empty. Enter your server seed:";
const BAD_MINE_COUNT: &str = "Enter a number between 1 and 7.";
const SEED_UNUSABLE: &str = "That server seed could not be used. Enter your server seed:";
const PREDICT_AGAIN: &str = "Want to predict again?";

/// Maps one incoming update to the outbound replies for its chat.
pub fn handle_update(sessions: &mut HashMap<i64, SessionState>, update: Update) -> Vec<Reply> {
    if let Some(callback) = update.callback {
        return handle_callback(sessions, callback);
    }
    if let Some(message) = update.message {
        return handle_message(sessions, message);
    }
    Vec::new()
}

fn handle_callback(sessions: &mut HashMap<i64, SessionState>, callback: Callback) -> Vec<Reply> {
    match callback.data.as_str() {
        CALLBACK_START => {
            sessions.insert(callback.chat_id, SessionState::default());
            vec![Reply::text(callback.chat_id, SEED_PROMPT)]
        }
        CALLBACK_HOW_TO_USE => vec![Reply::text(callback.chat_id, HOW_TO_USE_TEXT)],
        other => {
            warn!("ignoring unknown callback {other:?}");
            Vec::new()
        }
    }
}

fn handle_message(sessions: &mut HashMap<i64, SessionState>, message: Message) -> Vec<Reply> {
    let chat_id = message.chat_id;

    if message.text.trim() == "/start" {
        return vec![welcome(chat_id)];
    }

    let Some(session) = sessions.remove(&chat_id) else {
        return vec![start_nudge(chat_id)];
    };
    let (next, step) = session.advance(&message.text);
    sessions.insert(chat_id, next);

    match step {
        Step::Prompt(Prompt::Nonce) => vec![Reply::text(chat_id, NONCE_PROMPT)],
        Step::Prompt(Prompt::MineCount) => vec![mine_count_prompt(chat_id)],
        Step::Rejected(Rejection::EmptySeed) => vec![Reply::text(chat_id, EMPTY_SEED)],
        Step::Rejected(Rejection::MineCountInvalid) => vec![Reply::text(chat_id, BAD_MINE_COUNT)],
        Step::Completed(request) => match generate_prediction(&request, &mut rand::rng()) {
            Ok(prediction) => vec![
                Reply::text(chat_id, render::prediction_text(&request, &prediction)),
                predict_again(chat_id),
            ],
            Err(err) => {
                // advance() already reset the session to AwaitingSeed
                warn!("prediction failed for chat {chat_id}: {err}");
                vec![Reply::text(chat_id, SEED_UNUSABLE)]
            }
        },
    }
}

fn welcome(chat_id: i64) -> Reply {
    Reply::with_keyboard(
        chat_id,
        WELCOME_TEXT,
        Keyboard::Inline(vec![
            vec![Button::new("Start", CALLBACK_START)],
            vec![Button::new("How to use", CALLBACK_HOW_TO_USE)],
        ]),
    )
}

fn start_nudge(chat_id: i64) -> Reply {
    Reply::with_keyboard(
        chat_id,
        START_FIRST,
        Keyboard::Inline(vec![vec![Button::new("Start", CALLBACK_START)]]),
    )
}

fn mine_count_prompt(chat_id: i64) -> Reply {
    Reply::with_keyboard(
        chat_id,
        MINE_COUNT_PROMPT,
        Keyboard::Tap(vec![(1..=7).map(|n| n.to_string()).collect()]),
    )
}

fn predict_again(chat_id: i64) -> Reply {
    Reply::with_keyboard(
        chat_id,
        PREDICT_AGAIN,
        Keyboard::Inline(vec![vec![Button::new("Predict again", CALLBACK_START)]]),
    )
}
