//! End-to-end session flow tests.
//!
//! Drive the session controller with simulated fragment streams, the same
//! shape the completion client produces, and check the externally observable
//! transcript behavior.

#![allow(clippy::unwrap_used)]

use futures_util::StreamExt;
use skygpt_cli::completion::{CompletionError, ErrorKind};
use skygpt_cli::session::{Role, SessionController, SessionStatus};

fn fragment_stream(
    items: Vec<Result<&'static str, CompletionError>>,
) -> impl futures_util::Stream<Item = Result<String, CompletionError>> + Unpin {
    futures_util::stream::iter(
        items
            .into_iter()
            .map(|item| item.map(str::to_string))
            .collect::<Vec<_>>(),
    )
}

#[tokio::test]
async fn test_streamed_turn_applies_fragments_in_order() {
    let mut controller = SessionController::new();
    controller.update_draft("Hello");
    let turn = controller.submit().unwrap();

    let mut stream = fragment_stream(vec![Ok("Hi"), Ok(" there")]);
    while let Some(item) = stream.next().await {
        controller.on_token(turn.generation, &item.unwrap());
    }
    controller.on_complete(turn.generation);

    assert_eq!(controller.status(), SessionStatus::Idle);
    let messages = controller.transcript().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "Hello");
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].content, "Hi there");
}

#[tokio::test]
async fn test_mid_stream_error_keeps_partial_reply() {
    let mut controller = SessionController::new();
    controller.update_draft("A");
    let turn = controller.submit().unwrap();

    let mut stream = fragment_stream(vec![
        Ok("X"),
        Err(CompletionError::Network("connection reset".to_string())),
    ]);
    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => controller.on_token(turn.generation, &fragment),
            Err(e) => {
                controller.on_error(turn.generation, e.kind());
                break;
            }
        }
    }

    assert_eq!(controller.status(), SessionStatus::Error(ErrorKind::Network));
    assert_eq!(controller.transcript().len(), 2);
    assert_eq!(controller.transcript().last().unwrap().content, "X");

    controller.dismiss_error();
    assert_eq!(controller.status(), SessionStatus::Idle);
    assert_eq!(controller.transcript().last().unwrap().content, "X");
}

#[tokio::test]
async fn test_multi_turn_context_accumulates() {
    let mut controller = SessionController::new();

    for (question, answer) in [("one", "1"), ("two", "2")] {
        controller.update_draft(question);
        let turn = controller.submit().unwrap();

        let mut stream = fragment_stream(vec![Ok(answer)]);
        while let Some(item) = stream.next().await {
            controller.on_token(turn.generation, &item.unwrap());
        }
        controller.on_complete(turn.generation);
    }

    controller.update_draft("three");
    let turn = controller.submit().unwrap();

    // The third request carries both earlier turns plus the new question.
    let contents: Vec<_> = turn.context.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "1", "two", "2", "three"]);
}
