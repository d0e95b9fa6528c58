//! Report Assembler
//!
//! Dispatches to a resolver by service kind, sizes every resolved entry
//! against the object store, and attaches the formatted size. Fail-fast:
//! one sizing failure aborts the whole report. Output order is the
//! resolver's emission order regardless of size-fetch completion timing.

use crate::api::ArrayMetadata;
use crate::error::{Error, Result};
use crate::objectstore::{self, ObjectLister};
use crate::resolve::{backup, tiering};
use crate::sizefmt;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Size fetches in flight at once; entries stay in resolver order
pub const SIZE_CONCURRENCY: usize = 4;

// =============================================================================
// Service selection
// =============================================================================

/// Which cloud consumer to report on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Backup,
    Tiering,
}

impl FromStr for ServiceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "backup" => Ok(ServiceKind::Backup),
            "tiering" => Ok(ServiceKind::Tiering),
            other => Err(Error::Config(format!(
                "unknown service {other:?}: expected \"backup\" or \"tiering\""
            ))),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Backup => write!(f, "backup"),
            ServiceKind::Tiering => write!(f, "tiering"),
        }
    }
}

// =============================================================================
// Report records
// =============================================================================

/// One line of the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedEntry {
    pub server: String,
    pub volume_name: String,
    /// Unit-scaled rendering of `size_bytes`
    pub size: String,
    pub size_bytes: u64,
    pub container: String,
    pub cloud_object_id: String,
}

// =============================================================================
// Assembly
// =============================================================================

/// Build the full report for one service on one cluster
pub async fn build_report(
    kind: ServiceKind,
    api: &dyn ArrayMetadata,
    lister: &dyn ObjectLister,
) -> Result<Vec<SizedEntry>> {
    let entries = match kind {
        ServiceKind::Backup => backup::resolve(api).await?,
        ServiceKind::Tiering => tiering::resolve(api).await?,
    };
    info!(service = %kind, entries = entries.len(), "resolved cloud-backed volumes");

    // buffered() keeps resolver emission order even when later fetches
    // finish first; try_collect aborts on the first sizing failure.
    let report: Vec<SizedEntry> = stream::iter(entries.into_iter().map(|entry| async move {
        let bytes =
            objectstore::compute_size(lister, &entry.container_name, &entry.cloud_object_id)
                .await?;
        Ok::<_, Error>(SizedEntry {
            size: sizefmt::format_bytes(bytes),
            size_bytes: bytes,
            server: entry.server_name,
            volume_name: entry.volume_name,
            container: entry.container_name,
            cloud_object_id: entry.cloud_object_id,
        })
    }))
    .buffered(SIZE_CONCURRENCY)
    .try_collect()
    .await?;

    Ok(report)
}
