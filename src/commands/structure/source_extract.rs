use super::*;

pub(super) fn resolve_source_kind(path: &Path, requested: SourceKind) -> SourceKind {
    match requested {
        SourceKind::Auto => {
            let is_pdf = path
                .extension()
                .and_then(|extension| extension.to_str())
                .map(|extension| extension.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false);
            if is_pdf {
                SourceKind::Pdf
            } else {
                SourceKind::Text
            }
        }
        explicit => explicit,
    }
}

/// Source lines; form feeds at page breaks are left in place.
pub(super) fn read_source_lines(path: &Path, kind: SourceKind) -> Result<Vec<String>> {
    let text = match kind {
        SourceKind::Pdf => extract_text_with_pdftotext(path)?,
        SourceKind::Text | SourceKind::Auto => {
            let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            String::from_utf8_lossy(&raw).into_owned()
        }
    };

    Ok(split_source_lines(&text))
}

/// Splits into lines, dropping NULs and the replacement characters left by
/// lossy decoding of invalid bytes.
pub(super) fn split_source_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.chars()
                .filter(|character| !matches!(character, '\u{0000}' | '\u{FFFD}'))
                .collect()
        })
        .collect()
}

/// Name recorded in the manifest for the extraction path taken.
pub(super) fn backend_name(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Pdf => "pdftotext",
        SourceKind::Text | SourceKind::Auto => "text",
    }
}

fn extract_text_with_pdftotext(pdf_path: &Path) -> Result<String> {
    if !command_available("pdftotext") {
        bail!(
            "pdftotext is required to read {} but is not installed",
            pdf_path.display()
        );
    }

    let output = Command::new("pdftotext")
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf_path)
        .arg("-")
        .output()
        .with_context(|| format!("failed to execute pdftotext for {}", pdf_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "pdftotext returned non-zero exit status for {}: {}",
            pdf_path.display(),
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn command_available(program: &str) -> bool {
    Command::new(program).arg("-v").output().is_ok()
}
