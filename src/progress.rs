//! Progress indicator
//!
//! A side task that prints a dot per second while the pipeline runs. It
//! carries no data dependency; the caller cancels the token and awaits the
//! handle before writing any output so dots never interleave with the
//! report.

use crate::report::ServiceKind;
use std::io::{self, Write};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Spawn the dot printer; cancel the token to stop it
pub fn spawn_dots(service: ServiceKind, token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        print!("Getting cloud storage size for {service}");
        let _ = io::stdout().flush();
        loop {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(Duration::from_secs(1)) => {
                    print!(".");
                    let _ = io::stdout().flush();
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancellation_stops_the_task() {
        let token = CancellationToken::new();
        let handle = spawn_dots(ServiceKind::Backup, token.clone());

        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("progress task did not stop after cancellation")
            .unwrap();
    }
}
