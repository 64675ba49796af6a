//! Environment isolation for tests that read `HOME`.

use std::env;
use std::ffi::OsString;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `key` set to `value`, then put the previous value back.
///
/// Holds a process-wide lock for the duration, since the environment is
/// shared by every test thread.
#[allow(unsafe_code)]
pub fn with_env_var<T>(key: &str, value: &str, f: impl FnOnce() -> T) -> T {
    let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let previous: Option<OsString> = env::var_os(key);

    unsafe { env::set_var(key, value) };
    let result = f();
    match previous {
        Some(value) => unsafe { env::set_var(key, value) },
        None => unsafe { env::remove_var(key) },
    }
    result
}
