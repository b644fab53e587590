//! Binary entry point for the billing terminal.

#[tokio::main]
async fn main() {
    if let Err(err) = bookstall_terminal::run().await {
        eprintln!("fatal: {}", err);
        std::process::exit(1);
    }
}
