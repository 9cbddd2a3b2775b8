//! Error handling utilities

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// An `EatsyError` anywhere in the chain supplies the user message and exit
/// code; anything else exits with 1. With `verbose >= 1` the full error chain
/// is printed as well.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::EatsyError;

    error!("Fatal error: {:#}", error);

    let exit_code = if let Some(eatsy_err) = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<EatsyError>())
    {
        eprintln!("{}", eatsy_err.user_message());

        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", eatsy_err.developer_message());
        }

        eatsy_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}
