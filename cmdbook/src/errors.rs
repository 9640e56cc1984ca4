use cmdbook_types::StoreError;
use std::process::ExitCode;
use tracing::error;

/// Display an error in a user-friendly format without stack traces.
///
/// Caller mistakes (bad filters, unknown ids) get a one-line message;
/// storage failures abort with the full error chain.
pub fn display_user_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<StoreError>() {
        Some(store_err) if store_err.is_user_error() => {
            eprintln!("cbk: {store_err}");
            ExitCode::FAILURE
        }
        Some(store_err) => {
            error!("storage failure: {store_err}");
            eprintln!("cbk: {err:#}");
            ExitCode::FAILURE
        }
        None => {
            eprintln!("cbk: {err:#}");
            ExitCode::FAILURE
        }
    }
}
