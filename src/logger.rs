//! stderr logging through `fern`.

use log::LevelFilter;

pub fn setup_logger(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // Driver internals are noisy below warn
        .level_for("mongodb", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
