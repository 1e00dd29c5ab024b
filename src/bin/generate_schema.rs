//! Generate the JSON Schema for the theme config
//!
//! This binary generates JSON Schemas from Rust structs using schemars.
//!
//! Usage:
//!   cargo run --features dev-bins --bin generate_schema config > schemas/theme-config.schema.json

use glasspath_theme::config::get_config_schema;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let schema_type = args.get(1).map(|s| s.as_str()).unwrap_or("config");

    let json = match schema_type {
        "config" => get_config_schema(),
        other => {
            eprintln!("Unknown schema type: {}. Use 'config'.", other);
            std::process::exit(1);
        }
    };

    let output = serde_json::to_string_pretty(&json).expect("Failed to serialize schema");
    println!("{}", output);
}
