//! Forwards backend configuration from the environment (or a `.env` file) into the
//! compiled binary, since the browser bundle has no process environment at runtime.

const FORWARDED_VARS: [&str; 2] = ["VEHICLE_BACKEND_URL", "VEHICLE_BACKEND_ANON_KEY"];

fn main() {
    println!("cargo:rerun-if-changed=.env");

    dotenvy::dotenv().ok();

    for var in FORWARDED_VARS {
        println!("cargo:rerun-if-env-changed={}", var);

        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={}={}", var, value);
        }
    }
}
