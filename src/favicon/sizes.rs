use std::path::Path;

/// One generated icon: its pixel size and the file stem it is saved under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
    /// File stem; the source extension is appended to it
    pub name_template: &'static str,
}

impl SizeSpec {
    const fn square(side: u32, name_template: &'static str) -> Self {
        Self {
            width: side,
            height: side,
            name_template,
        }
    }

    /// Output file name for a source with the given extension (".png", ".JPG", ...)
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.name_template, extension)
    }
}

/// Every icon written per export, in output order.
/// Maskable variants share the pixels of their plain counterpart.
pub const SIZES: [SizeSpec; 4] = [
    SizeSpec::square(512, "Icon-512"),
    SizeSpec::square(512, "Icon-maskable-512"),
    SizeSpec::square(192, "Icon-192"),
    SizeSpec::square(192, "Icon-maskable-192"),
];

/// Source extensions offered by the file dialog and accepted on drop
pub const ACCEPTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Check if a path has one of the accepted image extensions (case-insensitive)
pub fn is_accepted(path: &Path) -> bool {
    if let Some(extension) = path.extension() {
        let ext = extension.to_string_lossy().to_lowercase();
        ACCEPTED_EXTENSIONS.contains(&ext.as_str())
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_are_square() {
        for spec in SIZES {
            assert_eq!(spec.width, spec.height, "{} is not square", spec.name_template);
        }
    }

    #[test]
    fn test_size_order() {
        let names: Vec<&str> = SIZES.iter().map(|s| s.name_template).collect();
        assert_eq!(
            names,
            ["Icon-512", "Icon-maskable-512", "Icon-192", "Icon-maskable-192"]
        );
        let sides: Vec<u32> = SIZES.iter().map(|s| s.width).collect();
        assert_eq!(sides, [512, 512, 192, 192]);
    }

    #[test]
    fn test_file_name_keeps_extension_case() {
        assert_eq!(SIZES[0].file_name(".png"), "Icon-512.png");
        assert_eq!(SIZES[3].file_name(".JPG"), "Icon-maskable-192.JPG");
    }

    #[test]
    fn test_is_accepted() {
        assert!(is_accepted(Path::new("/tmp/logo.png")));
        assert!(is_accepted(Path::new("photo.JPEG")));
        assert!(is_accepted(Path::new("anim.gif")));
        assert!(is_accepted(Path::new("old.Bmp")));
        assert!(!is_accepted(Path::new("notes.txt")));
        assert!(!is_accepted(Path::new("image.webp")));
        assert!(!is_accepted(Path::new("no_extension")));
        assert!(!is_accepted(Path::new("/tmp/.png")));
    }
}
