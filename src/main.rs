use std::error::Error;

/// Print the build banner and the area of the circle.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let stdout = std::io::stdout();
    scm_pooling::report::run(&mut stdout.lock())?;

    Ok(())
}
