// Stamps BUILD_TIME (RFC 3339) for the footer's copyright year.
fn main() {
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");
    println!("cargo:rerun-if-changed=build.rs");
}
