use stornext_cli::logging;
use stornext_core::ClientConfig;

fn main() {
    if let Err(err) = logging::init_logging() {
        eprintln!("stornext: {err:#}");
    }

    let stdout = std::io::stdout();
    if let Err(err) = stornext_cli::run(std::env::args_os(), ClientConfig::default(), &mut stdout.lock()) {
        eprintln!("stornext error: {err:#}");
        std::process::exit(1);
    }
}
