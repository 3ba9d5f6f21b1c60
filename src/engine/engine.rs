use tokio::sync::watch;

pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;
pub const DEFAULT_PROCESS_LATENCY_MS: u64 = 5;

/// Resolves once either signal is raised.
///
/// A cancellation source whose sender was dropped without ever raising can no
/// longer fire and is ignored. A closed stop signal means the engine itself is
/// gone, which terminates the worker.
pub(crate) async fn cancelled(cancel: &mut watch::Receiver<bool>, stopped: &mut watch::Receiver<bool>)
{
    let external = async {
        if cancel.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    tokio::select! {
        biased;
        _ = stopped.wait_for(|stopped| *stopped) => {}
        _ = external => {}
    }
}
