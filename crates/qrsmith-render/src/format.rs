//! Download format negotiation.
//!
//! `HTMLCanvasElement.toDataURL` silently substitutes its default
//! format (PNG) when asked for a MIME type the browser cannot encode.
//! The download flow therefore trusts the data URI's declared type,
//! never the request, and resolves the file extension from there.

/// A resolved download: the format the canvas actually produced and
/// the file extension to ship it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// MIME type declared by the produced data URI.
    pub mime: String,
    /// File extension matching `mime`.
    pub extension: &'static str,
    /// True when the browser substituted another format for the
    /// requested one. Callers should log the substitution and proceed.
    pub substituted: bool,
}

/// Errors in resolving a download format.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The produced MIME type has no entry in the extension table.
    /// Fatal for the download: shipping a file with a wrong or missing
    /// extension would break the contract with the user.
    #[error("unknown image format {0:?}")]
    UnknownFormat(String),

    /// The serialized surface was not a data URI.
    #[error("not a data URI: {0:?}")]
    MalformedDataUrl(String),
}

/// File extension for a canvas-exportable MIME type.
///
/// # Errors
///
/// Returns [`FormatError::UnknownFormat`] for any MIME type outside
/// the fixed table.
pub fn extension_for_mime(mime: &str) -> Result<&'static str, FormatError> {
    match mime {
        "image/png" => Ok("png"),
        "image/webp" => Ok("webp"),
        "image/jpeg" => Ok("jpg"),
        "image/tiff" => Ok("tif"),
        "image/gif" => Ok("gif"),
        other => Err(FormatError::UnknownFormat(other.to_owned())),
    }
}

/// Extract the declared MIME type from a data URI: everything between
/// `data:` and the first `;` or `,`.
///
/// # Errors
///
/// Returns [`FormatError::MalformedDataUrl`] if the input does not
/// have the `data:<mime>[;...],<payload>` shape.
pub fn mime_from_data_url(data_url: &str) -> Result<&str, FormatError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| FormatError::MalformedDataUrl(truncate(data_url)))?;
    let end = rest
        .find([';', ','])
        .ok_or_else(|| FormatError::MalformedDataUrl(truncate(data_url)))?;
    Ok(&rest[..end])
}

/// Resolve a download against what the canvas actually produced.
///
/// # Errors
///
/// Returns [`FormatError::MalformedDataUrl`] if `data_url` is not a
/// data URI, or [`FormatError::UnknownFormat`] if its declared type is
/// outside the extension table.
pub fn negotiate(requested: &str, data_url: &str) -> Result<DownloadTarget, FormatError> {
    let actual = mime_from_data_url(data_url)?;
    let extension = extension_for_mime(actual)?;
    Ok(DownloadTarget {
        mime: actual.to_owned(),
        extension,
        substituted: actual != requested,
    })
}

/// Keep error messages readable: data URIs can run to megabytes.
fn truncate(s: &str) -> String {
    const LIMIT: usize = 48;
    if s.len() <= LIMIT {
        s.to_owned()
    } else {
        let mut cut = LIMIT;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…", &s[..cut])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn extension_table_covers_the_five_formats() {
        assert_eq!(extension_for_mime("image/png").unwrap(), "png");
        assert_eq!(extension_for_mime("image/webp").unwrap(), "webp");
        assert_eq!(extension_for_mime("image/jpeg").unwrap(), "jpg");
        assert_eq!(extension_for_mime("image/tiff").unwrap(), "tif");
        assert_eq!(extension_for_mime("image/gif").unwrap(), "gif");
    }

    #[test]
    fn unknown_mime_is_fatal() {
        assert_eq!(
            extension_for_mime("image/bmp"),
            Err(FormatError::UnknownFormat("image/bmp".to_owned()))
        );
    }

    #[test]
    fn mime_extraction_handles_base64_and_bare_uris() {
        assert_eq!(
            mime_from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap(),
            "image/png"
        );
        // Data URIs without parameters terminate the type with ','.
        assert_eq!(
            mime_from_data_url("data:image/webp,payload").unwrap(),
            "image/webp"
        );
    }

    #[test]
    fn mime_extraction_rejects_non_data_uris() {
        assert!(matches!(
            mime_from_data_url("https://example.com/qr.png"),
            Err(FormatError::MalformedDataUrl(_))
        ));
        assert!(matches!(
            mime_from_data_url("data:image/png"),
            Err(FormatError::MalformedDataUrl(_))
        ));
    }

    #[test]
    fn negotiate_flags_browser_substitution() {
        // A browser that cannot encode JPEG falls back to PNG; the
        // download proceeds under the actual format and extension.
        let target = negotiate("image/jpeg", "data:image/png;base64,AAAA").unwrap();
        assert_eq!(target.mime, "image/png");
        assert_eq!(target.extension, "png");
        assert!(target.substituted);
    }

    #[test]
    fn negotiate_honored_request_is_not_flagged() {
        let target = negotiate("image/jpeg", "data:image/jpeg;base64,AAAA").unwrap();
        assert_eq!(target.extension, "jpg");
        assert!(!target.substituted);
    }

    #[test]
    fn negotiate_unknown_produced_format_aborts() {
        let result = negotiate("image/bmp", "data:image/bmp;base64,AAAA");
        assert_eq!(
            result,
            Err(FormatError::UnknownFormat("image/bmp".to_owned()))
        );
    }

    #[test]
    fn long_inputs_are_truncated_in_errors() {
        let url = format!("nonsense:{}", "a".repeat(4096));
        let Err(FormatError::MalformedDataUrl(shown)) = mime_from_data_url(&url) else {
            unreachable!("expected MalformedDataUrl");
        };
        assert!(shown.chars().count() < 64);
    }
}
