use log::{LevelFilter, info};

use crate::EPOCH;

pub fn init_logger(level_filter: LevelFilter) {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<27}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .expect("could not initialize logger");
    info!(
        "time: {}",
        humantime::format_rfc3339_seconds(std::time::SystemTime::now())
    );
}
