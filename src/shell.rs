//! Terminal front end. Forwards each stdin line to the session, prints
//! the reply, and wakes up on its own when a reminder comes due.

use std::future;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::scheduler::delay_until;
use crate::session::{messages, Notice, Session};

/// Drive `session` until the user exits or input ends.
pub async fn run_shell<R, W>(
    mut session: Session,
    warnings: Vec<String>,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    say(&mut output, messages::GREETING).await?;
    for warning in &warnings {
        say(&mut output, warning).await?;
    }

    loop {
        for notice in session.due_notifications() {
            notify(&mut output, &notice).await?;
        }

        let wait = session
            .next_notification_at()
            .map(|at| delay_until(session.now(), at));

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("Input closed");
                    break;
                };
                if let Some(reply) = session.handle(&line) {
                    say(&mut output, &reply.text).await?;
                    if reply.exit {
                        break;
                    }
                }
            }
            () = sleep_for(wait) => {}
        }
    }
    Ok(())
}

async fn sleep_for(wait: Option<Duration>) {
    match wait {
        Some(delay) => tokio::time::sleep(delay).await,
        None => future::pending().await,
    }
}

async fn say<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    write_line(output, &format!("Bot: {text}")).await
}

async fn notify<W: AsyncWrite + Unpin>(output: &mut W, notice: &Notice) -> std::io::Result<()> {
    write_line(output, &format!("[{}] {}", notice.title(), notice.message())).await
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> std::io::Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
