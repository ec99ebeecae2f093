pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn debug_log(debug: bool, message: &str) {
    if debug {
        web_sys::console::log_1(&message.into());
    }
}
