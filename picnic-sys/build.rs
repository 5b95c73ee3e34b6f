use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=PICNIC_LIB_DIR");
    println!("cargo:rerun-if-env-changed=PICNIC_INCLUDE_DIR");
    println!("cargo:rerun-if-env-changed=PICNIC_STATIC");

    let target = env::var("TARGET").unwrap_or_default();
    if target.contains("wasm") {
        panic!("picnic-sys links the native libpicnic and does not support {}", target);
    }

    let link_static = env::var("PICNIC_STATIC").map(|v| v != "0").unwrap_or(false);
    let kind = if link_static { "static" } else { "dylib" };

    // Explicit location wins over pkg-config
    if let Ok(dir) = env::var("PICNIC_LIB_DIR") {
        let dir = PathBuf::from(dir);
        println!("cargo:rustc-link-search=native={}", dir.display());
        println!("cargo:rustc-link-lib={}=picnic", kind);
        if let Ok(include) = env::var("PICNIC_INCLUDE_DIR") {
            println!("cargo:include={}", include);
        }
        return;
    }

    // Same probe as the upstream Python bindings: picnic >= 3
    match pkg_config::Config::new()
        .atleast_version("3")
        .statik(link_static)
        .probe("picnic")
    {
        Ok(library) => {
            if let Some(include) = library.include_paths.first() {
                println!("cargo:include={}", include.display());
            }
        }
        Err(err) => {
            let reason = err.to_string().replace('\n', " ");
            println!("cargo:warning=pkg-config could not find picnic >= 3 ({}), linking -lpicnic", reason);
            println!("cargo:rustc-link-lib={}=picnic", kind);
        }
    }
}
