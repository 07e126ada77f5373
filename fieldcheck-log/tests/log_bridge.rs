//! Records forwarded to the `log` facade

use fieldcheck_log::{Level, debug, set_level, trace};
use std::sync::Mutex;

struct Capture {
    records: Mutex<Vec<(log::Level, String, String)>>,
}

impl log::Log for Capture {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_debug_record_is_forwarded() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    set_level(Level::Debug);
    debug!(target: "fieldcheck::rules", "rule {} registered", "slug");
    trace!(target: "fieldcheck::rules", "below the configured level");

    let records = CAPTURE.records.lock().unwrap();
    assert_eq!(
        *records,
        vec![(
            log::Level::Debug,
            "fieldcheck::rules".to_string(),
            "rule slug registered".to_string()
        )]
    );
}
