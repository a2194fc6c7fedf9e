//! Terminal host for the todo items screen.
//!
//! # Overview
//! `todo-core` decides what to request and what to show; this crate does the
//! I/O. A `Session` executes the controller's effects through a `Transport`
//! and `run` multiplexes typed commands with request completions on one
//! task, redrawing the screen after each event.

pub mod input;
pub mod session;
pub mod transport;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

pub use input::{ParseActionError, UserAction, HELP};
pub use session::Session;
pub use transport::{ReqwestTransport, Transport};

/// Run the screen until `quit`, or until input closes and every request
/// has settled.
pub async fn run<T, R, W>(mut session: Session<T>, input: R, mut output: W) -> std::io::Result<()>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut input_open = true;

    session.mount();
    output.write_all(format!("{HELP}\n").as_bytes()).await?;
    draw(&mut session, &mut output).await?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<UserAction>() {
                    Ok(UserAction::Quit) => {
                        info!("quitting");
                        break;
                    }
                    Ok(action) => {
                        if let Err(err) = session.apply(action) {
                            output.write_all(format!("ALERT: {err}\n").as_bytes()).await?;
                        }
                    }
                    Err(err) => {
                        output.write_all(format!("{err}; {HELP}\n").as_bytes()).await?;
                        continue;
                    }
                }
            }
            _ = session.next_completion(), if session.has_inflight() => {}
            else => break,
        }
        draw(&mut session, &mut output).await?;
    }

    session.unmount();
    output.flush().await
}

async fn draw<T, W>(session: &mut Session<T>, output: &mut W) -> std::io::Result<()>
where
    T: Transport,
    W: AsyncWrite + Unpin,
{
    let mut frame = session.screen().to_string();
    for notification in session.take_notifications() {
        frame.push_str(&format!("ALERT: {notification}\n"));
    }
    let draft = session.controller().draft();
    frame.push_str(&format!(
        "[title: {}] [description: {}]\n\n",
        draft.title, draft.description
    ));
    output.write_all(frame.as_bytes()).await?;
    output.flush().await
}
