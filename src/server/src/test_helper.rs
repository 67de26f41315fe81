use env_logger::Env;

use crate::app_data::JournalAppData;

pub fn init_test_env() {
    let env = Env::default();
    if env_logger::try_init_from_env(env).is_ok() {
        log::debug!("Logger initialized");
    }
}

/// Fresh, empty store for a single test
pub fn app_data() -> JournalAppData {
    init_test_env();
    JournalAppData::in_memory()
}
