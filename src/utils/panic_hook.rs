use std::panic;

use leptos::logging::log;

/// Sets up a panic hook that logs the panic message through the console so
/// a crashed wasm bundle leaves a trace beyond the default stack dump.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        log!("[PANIC] {}", message);
        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected: a signal or effect ran after its component was unmounted");
        }
    }));
}

/// Call in main.rs or app initialization
pub fn init() {
    set_custom_panic_hook();
}
