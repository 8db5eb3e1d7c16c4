use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::image_pipeline::conversions::types::OutputNaming;

/// Derives the destination path for `input`.
///
/// With [`OutputNaming::FullPath`] the prefix is glued to the path string
/// as given, which only yields a sibling file for bare file names.
pub fn derive_output_path(input: &Path, prefix: &str, naming: OutputNaming) -> PathBuf {
    match (naming, input.file_name()) {
        (OutputNaming::FileName, Some(name)) => {
            let mut prefixed = OsString::from(prefix);
            prefixed.push(name);
            input.with_file_name(prefixed)
        }
        _ => {
            let mut prefixed = OsString::from(prefix);
            prefixed.push(input.as_os_str());
            PathBuf::from(prefixed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_file_name() {
        for naming in [OutputNaming::FileName, OutputNaming::FullPath] {
            assert_eq!(
                derive_output_path(Path::new("photo.bmp"), "new-", naming),
                PathBuf::from("new-photo.bmp")
            );
        }
    }

    #[test]
    fn test_file_name_naming_keeps_directory() {
        assert_eq!(
            derive_output_path(Path::new("dir/sub/photo.bmp"), "new-", OutputNaming::FileName),
            PathBuf::from("dir/sub/new-photo.bmp")
        );
    }

    #[test]
    fn test_full_path_naming_prefixes_whole_string() {
        assert_eq!(
            derive_output_path(Path::new("dir/photo.bmp"), "new-", OutputNaming::FullPath),
            PathBuf::from("new-dir/photo.bmp")
        );
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(
            derive_output_path(Path::new("a.bmp"), "gray_", OutputNaming::FileName),
            PathBuf::from("gray_a.bmp")
        );
    }
}
