//! Start-up of the embedded PostgreSQL cluster shared by a test binary.
//!
//! Without `PG_RUNTIME_DIR` and `PG_DATA_DIR`, `pg-embed-setup-unpriv`
//! installs under `/var/tmp`, which sandboxed runners may not allow. Missing
//! variables are pointed at a fresh directory below the cargo target dir
//! while the cluster boots.

use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use pg_embedded_setup_unpriv::ClusterHandle;
use uuid::Uuid;

static BOOTSTRAP: Mutex<()> = Mutex::new(());

/// Attempts made when the binary download fails transiently.
const ATTEMPTS: u32 = 4;
const FIRST_BACKOFF: Duration = Duration::from_millis(500);

/// Lower-cased fragments of errors worth retrying.
const TRANSIENT: [&str; 6] = [
    "error decoding response body",
    "connection reset",
    "connection refused",
    "timed out",
    "temporarily unavailable",
    "dns error",
];

fn scratch_root() -> PathBuf {
    std::env::var_os("CARGO_TARGET_DIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../target"),
        PathBuf::from,
    )
}

/// Per-process runtime and data directories, unless both are configured.
fn scratch_dirs() -> Result<Option<(String, String)>, String> {
    if std::env::var_os("PG_RUNTIME_DIR").is_some() && std::env::var_os("PG_DATA_DIR").is_some() {
        return Ok(None);
    }
    let base = scratch_root()
        .join("pg-embed")
        .join(format!("{}-{}", std::process::id(), Uuid::new_v4().simple()));
    let runtime = base.join("install");
    let data = base.join("data");
    for dir in [&runtime, &data] {
        std::fs::create_dir_all(dir).map_err(|err| format!("{}: {err}", dir.display()))?;
    }
    Ok(Some((
        runtime.to_string_lossy().into_owned(),
        data.to_string_lossy().into_owned(),
    )))
}

fn is_transient(message: &str) -> bool {
    let lowered = message.to_lowercase();
    TRANSIENT.iter().any(|fragment| lowered.contains(fragment))
}

/// The cluster for this test binary, booted on first call.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let _serialised = BOOTSTRAP.lock().unwrap_or_else(|err| err.into_inner());
    let _env = scratch_dirs()?.map(|(runtime, data)| {
        env_lock::lock_env([("PG_RUNTIME_DIR", Some(runtime)), ("PG_DATA_DIR", Some(data))])
    });

    let mut backoff = FIRST_BACKOFF;
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                let message = format!("{err:?}");
                if attempt == ATTEMPTS || !is_transient(&message) {
                    return Err(message);
                }
                eprintln!("pg-embed: attempt {attempt}/{ATTEMPTS} failed, retrying: {message}");
                thread::sleep(backoff);
                backoff *= 2;
                attempt += 1;
            }
        }
    }
}
