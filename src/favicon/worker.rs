/// Background export runner
///
/// Image resampling is CPU-bound, so the pipeline runs on tokio's blocking
/// pool. Progress from the pipeline's callback is forwarded over a channel and
/// surfaces as a stream of [`ExportEvent`]s the UI can subscribe to.
use iced::futures::{SinkExt, Stream};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;

use super::export::{ExportError, ExportRequest, Progress};

/// Events emitted while one export runs
#[derive(Debug, Clone)]
pub enum ExportEvent {
    /// A resize step finished
    Progressed(Progress),
    /// The export ended; always the last event
    Finished(Result<Vec<PathBuf>, Arc<ExportError>>),
}

/// Run `request` on the blocking pool and stream its progress and outcome
pub fn export_stream(request: ExportRequest) -> impl Stream<Item = ExportEvent> {
    iced::stream::channel(8, move |mut output| async move {
        let (progress_tx, mut progress_rx) = mpsc::unbounded_channel();

        let job = task::spawn_blocking(move || {
            request.run(|progress| {
                // Receiver only goes away if the UI dropped the stream
                let _ = progress_tx.send(progress);
            })
        });

        // Ends once the blocking job drops its sender
        while let Some(progress) = progress_rx.recv().await {
            // Receiver only goes away if the UI dropped the stream
            let _ = output.send(ExportEvent::Progressed(progress)).await;
        }

        let outcome = match job.await {
            Ok(result) => result.map_err(Arc::new),
            Err(join_error) => std::panic::resume_unwind(join_error.into_panic()),
        };

        // Same here: nobody left to tell
        let _ = output.send(ExportEvent::Finished(outcome)).await;
    })
}
