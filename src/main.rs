//! Browser entry point for the `spent` expense tracker.
//!
//! Built with `trunk` and the `csr` feature: installs the panic hook and the
//! console logger, mounts the app and registers the service worker. A native
//! build has nothing to serve and exits after saying so.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed, which then takes the report.
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {e}");
    }

    leptos::mount::mount_to_body(client::app::App);
    client::util::service_worker::register();
    log::info!("spent mounted");
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("spent is a browser app; build it with `trunk build --features csr`");
}
