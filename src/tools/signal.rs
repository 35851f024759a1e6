//! Ctrl-C handling for the binary.
//!
//! The session does blocking reads on stdin, which cannot be cancelled. It
//! runs on its own thread while the async side waits for either its result
//! or an interrupt. After an interrupt the thread is abandoned and the
//! process ends normally.

use std::future::Future;
use std::thread;

use tokio::sync::oneshot;
use tracing::{debug, warn};

/// How a session ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Finish<T> {
    Completed(T),
    Interrupted,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to start the session thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("session thread stopped without reporting a result")]
    Lost,
}

/// Run `session` on a dedicated thread until it returns or `interrupt`
/// resolves, whichever comes first.
pub async fn until_interrupted<T, S, I>(session: S, interrupt: I) -> Result<Finish<T>, SessionError>
where
    T: Send + 'static,
    S: FnOnce() -> T + Send + 'static,
    I: Future<Output = ()>,
{
    let (done, finished) = oneshot::channel();
    thread::Builder::new()
        .name("session".to_string())
        .spawn(move || {
            // The receiver is gone once we were interrupted.
            let _ = done.send(session());
        })
        .map_err(SessionError::Spawn)?;

    tokio::select! {
        biased;
        result = finished => result.map(Finish::Completed).map_err(|_| SessionError::Lost),
        () = interrupt => {
            debug!("session interrupted");
            Ok(Finish::Interrupted)
        }
    }
}

/// Resolves on the first Ctrl-C. Never resolves if the handler cannot be
/// installed.
pub async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Read, Write};
    use std::sync::{mpsc, Arc, Mutex};
    use std::time::Duration;

    use crate::io::interactive;

    /// Stdin stand-in: blocks until the test sends a chunk, EOF when the
    /// sender is dropped.
    struct ChannelReader {
        chunks: mpsc::Receiver<Vec<u8>>,
        pending: Vec<u8>,
    }

    impl Read for ChannelReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pending.is_empty() {
                match self.chunks.recv() {
                    Ok(chunk) => self.pending = chunk,
                    Err(_) => return Ok(0),
                }
            }
            let n = buf.len().min(self.pending.len());
            buf[..n].copy_from_slice(&self.pending[..n]);
            self.pending = self.pending.split_off(n);
            Ok(n)
        }
    }

    #[derive(Clone, Default)]
    struct SharedOutput(Arc<Mutex<Vec<u8>>>);

    impl SharedOutput {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_completed_session_reports_its_value() {
        let finish = until_interrupted(|| 42, std::future::pending()).await.unwrap();
        assert_eq!(finish, Finish::Completed(42));
    }

    #[tokio::test]
    async fn test_interrupt_abandons_blocked_session() {
        let (_keep_open, rx) = mpsc::channel::<()>();
        let finish = until_interrupted(move || rx.recv().is_ok(), async {}).await.unwrap();
        assert_eq!(finish, Finish::Interrupted);
    }

    #[tokio::test]
    async fn test_panicking_session_is_lost() {
        let result = until_interrupted(|| -> u8 { panic!("boom") }, std::future::pending()).await;
        assert!(matches!(result, Err(SessionError::Lost)));
    }

    #[tokio::test]
    async fn test_interrupt_during_prompt_leaves_quietly() {
        let (stdin, chunks) = mpsc::channel();
        let output = SharedOutput::default();

        let mut writer = output.clone();
        let session = move || {
            let mut reader = BufReader::new(ChannelReader {
                chunks,
                pending: Vec::new(),
            });
            interactive::run(&mut reader, &mut writer).is_ok()
        };

        stdin.send(b"3\n".to_vec()).unwrap();
        let watched = output.clone();
        let interrupt = async move {
            while !watched.text().ends_with("Target cell: ") {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        };

        let finish = until_interrupted(session, interrupt).await.unwrap();
        assert_eq!(finish, Finish::Interrupted);
        assert_eq!(output.text(), "Grid size: Target cell: ");
        drop(stdin);
    }
}
