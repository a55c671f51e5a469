use crate::openai::{Message, RelayError, Role};

use super::relay::CompletionRelay;
use super::store::TranscriptStore;

/// Runs one turn of the conversation: sends the message along with
/// the transcript to the completion API and, if that succeeds,
/// records both the user's message and the reply.
///
/// Turns run one after another, the transcript stays readable while
/// a turn waits on the completion API. A failed turn leaves the
/// transcript untouched.
pub async fn next_turn(
    store: &TranscriptStore,
    relay: &CompletionRelay,
    user_input: &str,
) -> Result<String, RelayError> {
    let mut turn = store.turn().await;
    let history = turn.snapshot().await;

    let reply = relay.complete(user_input, &history).await?;

    turn.record(
        Message::new(Role::User, user_input),
        Message::new(Role::Assistant, &reply),
    )
    .await;

    Ok(reply)
}
