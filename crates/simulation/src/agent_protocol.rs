//! Line protocol for driving a city from another process.
//!
//! One JSON object per line in each direction. Requests are tagged by `cmd`,
//! replies by `type`, and every reply carries [`PROTOCOL_VERSION`] so a
//! client can refuse a server it doesn't understand. The stdin/stdout loop
//! itself lives in the `ecocity` binary.

use serde::{Deserialize, Serialize};

use crate::city_observation::CityObservation;
use crate::game_actions::{ActionResult, GameAction};

pub const PROTOCOL_VERSION: u32 = 1;

/// Largest number of ticks a single `step` will run.
pub const MAX_STEP_TICKS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum AgentCommand {
    Observe,
    Act { action: GameAction },
    /// Applied in order within one frame; a refusal does not stop the rest.
    BatchAct { actions: Vec<GameAction> },
    Step { ticks: u64 },
    Quit,
}

impl AgentCommand {
    /// Parses one request line, ignoring surrounding whitespace.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line.trim())
    }
}

pub fn capped_step(ticks: u64) -> u64 {
    ticks.min(MAX_STEP_TICKS)
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponsePayload {
    Ready,
    Observation { observation: CityObservation },
    ActionResult { result: ActionResult },
    /// One entry per submitted action, same order.
    BatchResult { results: Vec<ActionResult> },
    /// `tick` is the counter after the step, not the number of ticks run.
    StepComplete { tick: u64 },
    Error { message: String },
    Goodbye,
}

impl AgentResponse {
    pub fn new(payload: ResponsePayload) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            payload,
        }
    }

    pub fn is_goodbye(&self) -> bool {
        matches!(self.payload, ResponsePayload::Goodbye)
    }

    /// Encodes the reply as a single line, without the trailing newline.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
