use clap::Parser;
use quickcourt::console::{self, Cli};
use quickcourt::{ApiClient, Config, SessionStore};
use tracing::Level;

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_max_level(Level::WARN)
		.with_target(false)
		.init();

	let config = Config::from_env();

	let client = ApiClient::new(&config);
	let store = SessionStore::new(config.session_file.clone());

	let cli = Cli::parse();

	if let Err(err) = console::run(cli, &client, &store).await {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}
