//! `jobboard` binary.

#[tokio::main]
async fn main() -> Result<(), jobboard::cli::CliError> {
    jobboard::cli::run().await
}
