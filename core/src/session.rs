use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

/// Which input a conversation is currently waiting on.
///
/// One value per conversation id, owned by the chat layer. Transitions consume
/// the state so collected inputs move forward without cloning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    AwaitingSeed,
    AwaitingNonce {
        server_seed: String,
    },
    AwaitingMineCount {
        server_seed: String,
        nonce: String,
    },
}

impl Default for SessionState {
    fn default() -> Self {
        Self::AwaitingSeed
    }
}

/// What the chat layer should do after feeding one user message in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Input accepted, ask for the next piece.
    Prompt(Prompt),
    /// All three inputs collected; invoke the engine exactly once.
    Completed(PredictionRequest),
    /// Input refused, state unchanged; re-prompt.
    Rejected(Rejection),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    Nonce,
    MineCount,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    EmptySeed,
    MineCountInvalid,
}

impl SessionState {
    /// Feeds one user message into the conversation. Input is trimmed first.
    ///
    /// Completion resets the state to [`SessionState::AwaitingSeed`] so the
    /// next message starts a fresh collection.
    pub fn advance(self, input: &str) -> (Self, Step) {
        let input = input.trim();

        match self {
            Self::AwaitingSeed => {
                if input.is_empty() {
                    (Self::AwaitingSeed, Step::Rejected(Rejection::EmptySeed))
                } else {
                    (
                        Self::AwaitingNonce {
                            server_seed: input.to_string(),
                        },
                        Step::Prompt(Prompt::Nonce),
                    )
                }
            }
            Self::AwaitingNonce { server_seed } => (
                Self::AwaitingMineCount {
                    server_seed,
                    nonce: input.to_string(),
                },
                Step::Prompt(Prompt::MineCount),
            ),
            Self::AwaitingMineCount { server_seed, nonce } => match parse_mine_count(input) {
                Some(mine_count) => (
                    Self::AwaitingSeed,
                    Step::Completed(PredictionRequest {
                        server_seed,
                        nonce,
                        mine_count,
                    }),
                ),
                None => (
                    Self::AwaitingMineCount { server_seed, nonce },
                    Step::Rejected(Rejection::MineCountInvalid),
                ),
            },
        }
    }
}

fn parse_mine_count(input: &str) -> Option<u8> {
    let value: u8 = input.parse().ok()?;
    (MIN_MINE_COUNT..=MAX_MINE_COUNT)
        .contains(&value)
        .then_some(value)
}
