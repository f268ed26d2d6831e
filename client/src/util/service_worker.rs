//! Service worker registration for offline caching.
//!
//! Registration only happens over https or on a loopback host, where browsers
//! allow service workers at all.

#[cfg(test)]
#[path = "service_worker_test.rs"]
mod service_worker_test;

use std::net::Ipv4Addr;

pub const SERVICE_WORKER_URL: &str = "/service-worker.js";

/// `localhost`, `[::1]` or any `127.0.0.0/8` address.
pub fn is_localhost(hostname: &str) -> bool {
    hostname == "localhost"
        || hostname == "[::1]"
        || hostname.parse::<Ipv4Addr>().is_ok_and(|ip| ip.octets()[0] == 127)
}

pub fn should_register(protocol: &str, hostname: &str) -> bool {
    protocol == "https:" || is_localhost(hostname)
}

/// Register [`SERVICE_WORKER_URL`] in the background.
pub fn register() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_default();
        let hostname = location.hostname().unwrap_or_default();
        if !should_register(&protocol, &hostname) {
            log::info!("service worker skipped on {protocol}//{hostname}");
            return;
        }
        let promise = window.navigator().service_worker().register(SERVICE_WORKER_URL);
        wasm_bindgen_futures::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => log::info!("service worker registered"),
                Err(e) => log::warn!("service worker registration failed: {e:?}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    log::debug!("service worker {SERVICE_WORKER_URL} not registered outside the browser");
}
