#![allow(non_snake_case)]

use dioxus_logger::tracing::Level;

fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    dioxus::launch(vehicle_admin::client::App);
}
