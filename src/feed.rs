//! Transcript feed: reads recorded WebSocket traffic and hands records to the UI.
//!
//! Runs on its own thread with a Tokio runtime. Records are decoded line by
//! line and sent over an unbounded crossbeam channel which the UI drains
//! once per frame. Dropping the [`FeedHandle`] stops the feed at the next line
//! boundary (or the next poll, when following a file).

use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::error::{ConsoleError, Result};
use crate::protocol::{FeedEvent, FeedSource};
use crate::record::decode_line;

/// How often a followed file is checked for appended lines
pub const FOLLOW_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// UI side of a running feed
pub struct FeedHandle {
    pub events: Receiver<FeedEvent>,
    // Dropping this disconnects the stop channel
    _stop_tx: Sender<()>,
}

/// Start reading `source` on a background thread.
///
/// With `follow`, reaching the end of a file waits for more data instead of
/// finishing. `follow` has no effect on stdin.
pub fn spawn_feed(source: FeedSource, follow: bool) -> Result<FeedHandle> {
    let (event_tx, event_rx) = unbounded::<FeedEvent>();
    let (stop_tx, stop_rx) = unbounded::<()>();

    thread::Builder::new()
        .name("ws-feed".to_string())
        .spawn(move || run_feed(source, follow, event_tx, stop_rx))?;

    Ok(FeedHandle {
        events: event_rx,
        _stop_tx: stop_tx,
    })
}

/// Run the feed to completion on a fresh Tokio runtime
fn run_feed(source: FeedSource, follow: bool, event_tx: Sender<FeedEvent>, stop_rx: Receiver<()>) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(FeedEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            let _ = event_tx.send(FeedEvent::Finished);
            return;
        }
    };

    rt.block_on(async move {
        let label = source.label();
        let result = match source {
            FeedSource::Stdin => {
                let reader = BufReader::new(tokio::io::stdin());
                let _ = event_tx.send(FeedEvent::Opened(label.clone()));
                info!(source = %label, "reading transcript");
                read_lines(reader, false, &event_tx, &stop_rx).await
            }
            FeedSource::File(path) => match tokio::fs::File::open(&path).await {
                Ok(file) => {
                    let _ = event_tx.send(FeedEvent::Opened(label.clone()));
                    info!(source = %label, follow, "reading transcript");
                    read_lines(BufReader::new(file), follow, &event_tx, &stop_rx).await
                }
                Err(e) => Err(e.into()),
            },
        };

        if let Err(e) = result {
            warn!(source = %label, error = %e, "transcript feed failed");
            let _ = event_tx.send(FeedEvent::Error(format!("{}: {}", label, e)));
        }
        info!(source = %label, "transcript feed finished");
        let _ = event_tx.send(FeedEvent::Finished);
    });
}

fn stop_requested(stop_rx: &Receiver<()>) -> bool {
    !matches!(stop_rx.try_recv(), Err(TryRecvError::Empty))
}

/// Read and forward every line. Returns early when the UI goes away.
async fn read_lines<R>(
    mut reader: R,
    follow: bool,
    event_tx: &Sender<FeedEvent>,
    stop_rx: &Receiver<()>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    // Raw bytes so one badly encoded line cannot end the feed
    let mut pending = Vec::new();
    let mut line_no = 0usize;

    loop {
        if stop_requested(stop_rx) {
            debug!("feed stop requested");
            return Ok(());
        }

        let read = reader.read_until(b'\n', &mut pending).await?;

        if read > 0 && pending.ends_with(b"\n") {
            line_no += 1;
            if !forward_line(&pending, line_no, event_tx) {
                return Ok(());
            }
            pending.clear();
            continue;
        }

        if read == 0 {
            if follow {
                // Partial trailing line stays in `pending` until its newline arrives
                tokio::time::sleep(FOLLOW_POLL_INTERVAL).await;
                continue;
            }
            if !pending.is_empty() {
                line_no += 1;
                forward_line(&pending, line_no, event_tx);
            }
            return Ok(());
        }
    }
}

/// Decode one line and send the outcome. Returns false once the UI is gone.
fn forward_line(bytes: &[u8], line_no: usize, event_tx: &Sender<FeedEvent>) -> bool {
    let decoded = String::from_utf8(bytes.to_vec())
        .map_err(|source| ConsoleError::Encoding {
            line: line_no,
            source,
        })
        .and_then(|line| decode_line(&line, line_no));

    let event = match decoded {
        Ok(Some(record)) => {
            debug!(line = line_no, direction = ?record.direction, "record");
            FeedEvent::Record(record)
        }
        Ok(None) => return true,
        Err(e) => {
            warn!(line = line_no, error = %e, "skipping transcript line");
            FeedEvent::Error(e.to_string())
        }
    };
    event_tx.send(event).is_ok()
}
