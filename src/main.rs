//! `pitwall` command line. The wasm build only ships the library, so every
//! module here is native-only.

#[cfg(not(target_arch = "wasm32"))]
mod app;
#[cfg(not(target_arch = "wasm32"))]
mod cli;
#[cfg(not(target_arch = "wasm32"))]
mod commands;
#[cfg(not(target_arch = "wasm32"))]
mod output;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    app::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
