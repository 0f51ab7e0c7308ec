use leptos::mount;
use vista_landing::App;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    log::info!("mounting Central Vista Farms");
    mount::mount_to_body(App);
}
