//! Redactum CLI entry point. All command logic lives in the `cli` module.

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
