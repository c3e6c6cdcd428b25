use ladder_paths::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Usage: web_server [port] [dictionary-file]
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let port = match args.get(1) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("invalid port {:?}, using {}", raw, defaults.port);
            defaults.port
        }),
        None => defaults.port,
    };

    let config = ServerConfig {
        port,
        dictionary_path: args.get(2).cloned(),
        ..defaults
    };

    println!("🔧 Starting Ladder Paths Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Port: {}", config.port);
    println!(
        "   📖 Dictionary: {}",
        config.dictionary_path.as_deref().unwrap_or("(none)")
    );
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   👥 Max sessions: {}", config.max_sessions);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
