use schemars::schema_for;
use tabgen_core::GenerateRequest;

fn main() {
    let schema = schema_for!(GenerateRequest);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
