// vim: set ai et ts=4 sts=4 sw=4:
use log::LevelFilter;

/// Routes this crate's log records to stderr; verbose enables the per-line
/// trace output of the clue checker.
pub fn init(verbose: bool) -> Result<(), fern::InitError> {
    let level = match verbose {
        true  => LevelFilter::Trace,
        false => LevelFilter::Info,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
