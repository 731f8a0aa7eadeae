fn main() {
    #[cfg(windows)]
    {
        let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
        let ico_path = std::path::Path::new(&manifest_dir)
            .join("resources")
            .join("icon.ico");

        let mut res = winres::WindowsResource::new();

        // Embed the same icon the runtime locator would find next to the exe
        if ico_path.exists() {
            res.set_icon(ico_path.to_str().unwrap());
        } else {
            println!("cargo:warning=resources/icon.ico not found, skipping icon embedding");
        }

        res.compile().unwrap();
    }
}
