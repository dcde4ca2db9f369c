//! Archive extraction: compressed tarballs and zip files by extension

use crate::error::VerifyError;
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::Path;
use tracing::info;
use zip::ZipArchive;

/// Unpack `archive` into `dest`, picking the format from the file name.
///
/// Supports `.tar.gz`/`.tgz`, plain `.tar`, and `.zip`.
pub fn unpack(archive: &Path, dest: &Path) -> Result<(), VerifyError> {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    info!(archive = %archive.display(), dest = %dest.display(), "Unpacking archive");

    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        let file = File::open(archive)?;
        tar::Archive::new(GzDecoder::new(file))
            .unpack(dest)
            .map_err(|e| extract_error(archive, e))
    } else if name.ends_with(".tar") {
        let file = File::open(archive)?;
        tar::Archive::new(file)
            .unpack(dest)
            .map_err(|e| extract_error(archive, e))
    } else if name.ends_with(".zip") {
        let file = File::open(archive)?;
        let mut zip = ZipArchive::new(file).map_err(|e| extract_error(archive, e))?;
        zip.extract(dest).map_err(|e| extract_error(archive, e))
    } else {
        Err(VerifyError::UnsupportedArchive(archive.to_path_buf()))
    }
}

fn extract_error(archive: &Path, err: impl std::fmt::Display) -> VerifyError {
    VerifyError::Extract {
        archive: archive.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::FileOptions;

    fn write_tar_gz(dest: &Path) {
        let file = File::create(dest).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        let mut header = tar::Header::new_gnu();
        header.set_path("release/greeting.txt").unwrap();
        header.set_size(5);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append(&header, &b"hello"[..]).unwrap();
        builder.into_inner().unwrap().finish().unwrap();
    }

    fn write_zip(dest: &Path) {
        let file = File::create(dest).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer.add_directory("release/", FileOptions::default()).unwrap();
        writer
            .start_file("release/greeting.txt", FileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn test_unpack_tar_gz() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("release.tar.gz");
        write_tar_gz(&archive);

        let dest = temp_dir.path().join("out");
        fs::create_dir(&dest).unwrap();
        unpack(&archive, &dest).unwrap();

        let content = fs::read_to_string(dest.join("release").join("greeting.txt")).unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_unpack_zip() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("release.zip");
        write_zip(&archive);

        let dest = temp_dir.path().join("out");
        fs::create_dir(&dest).unwrap();
        unpack(&archive, &dest).unwrap();

        let content = fs::read_to_string(dest.join("release").join("greeting.txt")).unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("release.rar");
        fs::write(&archive, b"not really").unwrap();

        let err = unpack(&archive, temp_dir.path()).unwrap_err();
        assert!(matches!(err, VerifyError::UnsupportedArchive(_)));
    }

    #[test]
    fn test_corrupt_tarball_is_an_extract_error() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("release.tar.gz");
        fs::write(&archive, b"definitely not gzip").unwrap();

        let err = unpack(&archive, temp_dir.path()).unwrap_err();
        assert!(matches!(err, VerifyError::Extract { .. }));
    }
}
