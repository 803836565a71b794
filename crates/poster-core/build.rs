// File: crates/poster-core/build.rs
// Summary: Links the Windows registry API that Skia's font manager and ICU pull in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW come from advapi32.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
