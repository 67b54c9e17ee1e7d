use please::cli::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(code) = enable_ansi_support::enable_ansi_support() {
        log::debug!("ANSI support unavailable (error {})", code);
    }

    // User errors are reported by the commands themselves; anything that
    // reaches here is an unexpected failure (unwritable config, broken stdin)
    if let Err(e) = run() {
        eprintln!("Internal error: {}", e);
        let mut source = e.source();
        if source.is_some() {
            eprintln!("\nCaused by:");
            let mut indent = 1;
            while let Some(err) = source {
                eprintln!("{:indent$}  {}", "", err);
                source = err.source();
                indent += 1;
            }
        }
        std::process::exit(2);
    }
}
