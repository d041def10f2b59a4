use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=BUILD_VERSION");
    println!("cargo:rerun-if-changed=.env");

    // Pick up BUILD_VERSION from a local .env the same way the process env is read
    dotenvy::dotenv().ok();

    // Set BUILD_TIME
    let now = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", now);

    // Forward BUILD_VERSION only when it carries a value; blank means absent
    let build_version = env::var("BUILD_VERSION")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    if let Some(build_version) = build_version {
        println!("cargo:rustc-env=APP_BUILD_VERSION={}", build_version);
    }
}
