fn main() {
    println!("cargo:rerun-if-env-changed=INFRAWIRE_VERSION");
    let version = std::env::var("INFRAWIRE_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=APP_VERSION={}", version);
}
