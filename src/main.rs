use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use voicechat::core::config::{self, VoiceChatConfig};
use voicechat::tui;

#[derive(Parser)]
#[command(name = "voicechat", about = "Voice messenger mockup TUI")]
struct Args {
    /// Color theme: "light" or "dark"
    #[arg(short, long)]
    theme: Option<String>,

    /// Skip ~/.voicechat/config.toml and use built-in defaults
    #[arg(long)]
    no_config: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to voicechat.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("voicechat.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = if args.no_config {
        VoiceChatConfig::default()
    } else {
        match config::load_config() {
            Ok(c) => c,
            Err(e) => {
                // Terminal is not in raw mode yet, so stderr is safe here
                log::error!("Failed to load config: {}", e);
                eprintln!("voicechat: {e}");
                std::process::exit(1);
            }
        }
    };
    let resolved = config::resolve(&file_config, args.theme.as_deref());

    log::info!("VoiceChat starting up (dark_mode: {})", resolved.dark_mode);

    tui::run(resolved)
}
