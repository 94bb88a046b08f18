//! Runs embedded `PostgreSQL` lifecycle steps on behalf of the test cluster.
//!
//! ```text
//! pg_worker <setup|start|stop> <payload.json>
//! ```
//!
//! The integration suite launches this binary when it runs as root, because
//! `PostgreSQL` refuses to run under the superuser account. The payload is a
//! serialized `pg_embedded_setup_unpriv` [`WorkerPayload`] holding the cluster
//! settings and the environment overrides to apply. A worker started as root
//! switches to `nobody` before it touches the cluster.

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[cfg(unix)]
use camino::{Utf8Path, Utf8PathBuf};
#[cfg(unix)]
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
#[cfg(unix)]
use postgresql_embedded::{PostgreSQL, Status};
#[cfg(unix)]
use thiserror::Error;

#[cfg(unix)]
const UNPRIVILEGED_USER: &str = "nobody";

/// Failures reported by the worker.
#[cfg(unix)]
#[derive(Debug, Error)]
enum WorkerError {
    #[error("usage: pg_worker <setup|start|stop> <payload.json>: {0}")]
    Usage(String),
    #[error("failed to read worker payload {path}: {source}")]
    PayloadRead {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse worker payload: {0}")]
    PayloadParse(#[source] serde_json::Error),
    #[error("invalid cluster settings: {0}")]
    Settings(String),
    #[error("failed to switch to user {user}: {reason}")]
    PrivilegeDrop { user: String, reason: String },
    #[error("failed to build runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("postgres {operation} failed: {reason}")]
    Postgres {
        operation: &'static str,
        reason: String,
    },
}

#[cfg(unix)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Setup,
    Start,
    Stop,
}

#[cfg(unix)]
impl Operation {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

#[cfg(unix)]
impl TryFrom<&str> for Operation {
    type Error = WorkerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "setup" => Ok(Self::Setup),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            other => Err(WorkerError::Usage(format!("unknown operation '{other}'"))),
        }
    }
}

#[cfg(unix)]
fn main() -> Result<(), BoxError> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let (operation, payload_path) = parse_args(&args)?;
    let payload = load_payload(&payload_path)?;
    drop_privileges_if_root(UNPRIVILEGED_USER)?;
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| WorkerError::Settings(err.to_string()))?;
    apply_environment(&payload.environment);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(WorkerError::Runtime)?;
    runtime.block_on(run(operation, PostgreSQL::new(settings)))?;
    Ok(())
}

#[cfg(unix)]
fn parse_args(args: &[String]) -> Result<(Operation, Utf8PathBuf), WorkerError> {
    match args {
        [operation, payload] => Ok((
            Operation::try_from(operation.as_str())?,
            Utf8PathBuf::from(payload),
        )),
        _ => Err(WorkerError::Usage(format!(
            "expected 2 arguments, got {}",
            args.len()
        ))),
    }
}

#[cfg(unix)]
fn load_payload(path: &Utf8Path) -> Result<WorkerPayload, WorkerError> {
    let read_error = |source: std::io::Error| WorkerError::PayloadRead {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error(std::io::Error::other("payload path has no file name")))?;
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let dir = cap_std::fs_utf8::Dir::open_ambient_dir(parent, cap_std::ambient_authority())
        .map_err(read_error)?;
    let bytes = dir.read(file_name).map_err(read_error)?;
    serde_json::from_slice(&bytes).map_err(WorkerError::PayloadParse)
}

#[cfg(unix)]
fn drop_privileges_if_root(username: &str) -> Result<(), WorkerError> {
    use nix::unistd::{Uid, User, initgroups, setgid, setuid};

    if !Uid::effective().is_root() {
        return Ok(());
    }
    let failed = |reason: String| WorkerError::PrivilegeDrop {
        user: username.to_owned(),
        reason,
    };
    let user = User::from_name(username)
        .map_err(|err| failed(err.to_string()))?
        .ok_or_else(|| failed("no such user".to_owned()))?;
    let name = std::ffi::CString::new(user.name.clone()).map_err(|err| failed(err.to_string()))?;
    initgroups(&name, user.gid).map_err(|err| failed(err.to_string()))?;
    setgid(user.gid).map_err(|err| failed(err.to_string()))?;
    setuid(user.uid).map_err(|err| failed(err.to_string()))?;

    // SAFETY: the worker is still single-threaded; the runtime is built later.
    unsafe {
        std::env::set_var("HOME", &user.dir);
        std::env::set_var("USER", &user.name);
        std::env::set_var("LOGNAME", &user.name);
    }
    Ok(())
}

#[cfg(unix)]
fn apply_environment(environment: &[(String, Option<PlainSecret>)]) {
    for (key, value) in environment {
        // SAFETY: the worker is still single-threaded; the runtime is built later.
        unsafe {
            match value {
                Some(secret) => std::env::set_var(key, secret.expose()),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[cfg(unix)]
async fn run(operation: Operation, mut postgres: PostgreSQL) -> Result<(), WorkerError> {
    let failed = |err: postgresql_embedded::Error| WorkerError::Postgres {
        operation: operation.as_str(),
        reason: err.to_string(),
    };
    match operation {
        Operation::Setup => {
            postgres.setup().await.map_err(failed)?;
            start_unless_running(&mut postgres).await.map_err(failed)
        }
        Operation::Start => {
            start_unless_running(&mut postgres).await.map_err(failed)?;
            // The server must outlive the worker process.
            let _running = std::mem::ManuallyDrop::new(postgres);
            Ok(())
        }
        Operation::Stop => postgres.stop().await.map_err(failed),
    }
}

#[cfg(unix)]
async fn start_unless_running(postgres: &mut PostgreSQL) -> Result<(), postgresql_embedded::Error> {
    if matches!(postgres.status(), Status::Started) {
        return Ok(());
    }
    postgres.start().await
}

#[cfg(not(unix))]
fn main() -> Result<(), BoxError> {
    Err("pg_worker is only supported on Unix platforms".into())
}
