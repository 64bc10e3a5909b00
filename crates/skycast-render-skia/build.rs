// File: crates/skycast-render-skia/build.rs
// Summary: Link the Windows system libraries Skia's font manager and ICU expect.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by the system font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
