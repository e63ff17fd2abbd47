use chrono::Datelike;

fn main() {
    // Footer year is the build year, not the visitor's clock
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Sub-path hosting (e.g. GitHub Pages project sites)
    println!("cargo:rerun-if-env-changed=SITE_BASE_PATH");
    println!("cargo:rerun-if-changed=build.rs");
}
