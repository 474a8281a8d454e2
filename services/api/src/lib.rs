mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use pesi_eligibility::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
