pub mod footer;
pub mod header;

pub use footer::footer::Footer;
pub use header::header::Header;

/// Trunk copy-dir кладёт `public/` в `dist/public/`
pub const LOGO_SRC: &str = "/public/logo.svg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_is_served_from_copied_public_dir() {
        let index = include_str!("../../index.html");
        assert!(index.contains(r#"rel="copy-dir" href="public""#));
        assert!(LOGO_SRC.starts_with("/public/"));

        let file = LOGO_SRC.trim_start_matches("/public/");
        let on_disk = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(file);
        assert!(on_disk.exists(), "{} is missing", on_disk.display());
    }
}
