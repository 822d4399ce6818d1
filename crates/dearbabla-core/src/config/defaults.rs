pub fn default_log_level() -> String {
    "warn".to_string()
}
pub fn default_host() -> String {
    "en.bab.la".to_string()
}
pub fn default_timeout_secs() -> u64 {
    5
}
pub fn default_delay_secs() -> u64 {
    2
}
