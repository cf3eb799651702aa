//! Agent collaborator boundary.
//!
//! An external agent turns free-text prompts into notation strings through
//! its own generate/validate/retry loop. That loop lives outside this crate;
//! here we only define the shape of its answer and re-validate the notation
//! ourselves before it reaches the renderer — the collaborator's `is_valid`
//! claim is never trusted.

use serde::{Deserialize, Serialize};

use crate::notation::{self, NoteEvent};

/// Result reported by the external melody agent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentResponse {
    /// The agent's own validation verdict.
    #[serde(default)]
    pub is_valid: bool,
    /// Notation string in the same format the parser accepts.
    #[serde(default)]
    pub notes: String,
    /// Agent-side failure description, if any.
    #[serde(default)]
    pub error: Option<String>,
}

/// Re-validate an agent response against our own parser.
///
/// Returns the parsed events only when the agent claims success AND the
/// notation actually contains events. A response that parses to nothing, or
/// one flagged invalid by the agent itself, yields `None`.
pub fn vet_response(response: &AgentResponse) -> Option<Vec<NoteEvent>> {
    if !response.is_valid {
        return None;
    }
    let events = notation::parse_melody(&response.notes);
    if events.is_empty() {
        None
    } else {
        Some(events)
    }
}
