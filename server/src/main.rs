use clap::Parser;

use greeter_server::config::ServerConfig;
use greeter_server::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = ServerConfig::parse();
    init_logging(&config);
    greeter_server::serve(config).await
}
