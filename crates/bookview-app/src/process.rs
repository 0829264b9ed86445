//! Message processing
//!
//! Runs a message through the TEA update function, following up any
//! messages the handlers return until the chain settles.

use tracing::{trace, warn};

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Upper bound on follow-up chains, guarding against handler cycles
const MAX_FOLLOW_UPS: usize = 16;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    let mut steps = 0;
    while let Some(m) = msg {
        if steps > MAX_FOLLOW_UPS {
            warn!("Dropping follow-up message chain after {} steps", steps);
            break;
        }
        trace!("Processing {:?}", m);
        msg = handler::update(state, m).message;
        steps += 1;
    }
}
