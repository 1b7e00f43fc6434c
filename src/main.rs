// The shared modules are driven by the wasm frontend; the native build only
// hosts `dist/` and runs their tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod catalog;
mod config;
mod contact;
mod motion;
mod showcase;
mod skills;
mod state;
mod telemetry;
mod theme;
mod timers;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
