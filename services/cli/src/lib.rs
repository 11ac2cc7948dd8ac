mod cli;
mod infra;
mod input;
mod render;

use docscope::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
