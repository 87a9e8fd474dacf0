fn main() {
    // Stamped into the footer as "last deployed"
    let built_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={built_at}");

    println!("cargo:rerun-if-changed=build.rs");
    // Posts are embedded, so a new post should restamp the build
    println!("cargo:rerun-if-changed=blog");
}
