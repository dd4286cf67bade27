use std::env;
use std::fs;
use std::path::Path;

/// Keys forwarded from `.env` to the compiler
const PREFIX: &str = "HRIS_";

fn main() {
    // WASM bundles read their backend URL at compile time, so values from
    // .env are exported as rustc env vars unless already set in the shell.
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if key.starts_with(PREFIX) && env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-env-changed=HRIS_API_BASE_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
