use elixir_chess_client::session::bridge::stdin_lines;
use elixir_chess_client::session::StdioBridge;
use elixir_chess_client::ClientConfig;
use log::{error, info};

fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    info!("Starting client session, reading commands and frames from stdin");

    let system = actix::System::new();
    system.block_on(async move {
        StdioBridge::start_with(config, stdin_lines());
    });
    system.run()
}
