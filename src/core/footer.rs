//! Trailing marker ("footer") line
//!
//! Every synced document ends with one `#EXTM3U billed-msg="..."` line. Before a
//! new footer is written any existing one is stripped, so repeated syncs never
//! stack markers.

use crate::domain::{Result, SyncError};
use regex::Regex;

/// Payload written once a document has expired
pub const EXPIRED_MESSAGE: &str = "MASA BERLAKU HABIS| lynk.id/magelife😎";

/// Marker line grammar, one whole line, case-insensitive
const FOOTER_PATTERN: &str = r#"(?mi)^[ \t]*#EXTM3U[ \t]+billed-msg="[^"\n]+"[ \t\r]*$"#;

/// Strips and applies footer lines
#[derive(Debug, Clone)]
pub struct FooterCodec {
    marker: Regex,
}

impl FooterCodec {
    /// Compiles the marker grammar
    pub fn new() -> Result<Self> {
        let marker = Regex::new(FOOTER_PATTERN)
            .map_err(|e| SyncError::Other(format!("Invalid footer pattern: {e}")))?;
        Ok(Self { marker })
    }

    /// Removes every marker line and trims the remainder
    pub fn strip_footer(&self, text: &str) -> String {
        self.marker.replace_all(text, "").trim().to_string()
    }

    /// Builds the marker line for a document
    pub fn compose_footer(&self, identifier: &str, expired: bool) -> String {
        if expired {
            format!("#EXTM3U billed-msg=\"{EXPIRED_MESSAGE}\"")
        } else {
            format!("#EXTM3U billed-msg=\"😎{identifier}| lynk.id/magelife😎\"")
        }
    }

    /// Replaces any marker in `text` with a fresh one
    pub fn add_footer(&self, text: &str, identifier: &str, expired: bool) -> String {
        format!(
            "{}\n\n{}\n",
            self.strip_footer(text),
            self.compose_footer(identifier, expired)
        )
    }

    /// Number of marker lines in `text`
    pub fn count_markers(&self, text: &str) -> usize {
        self.marker.find_iter(text).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "#EXTINF:-1,Channel\nhttp://example.com/a.m3u8",
        "#EXTINF:-1,Channel\nhttp://example.com/a.m3u8\n\n#EXTM3U billed-msg=\"old\"\n",
        "#extm3u BILLED-MSG=\"lower\"\n#EXTINF:-1,X\nhttp://x\n  #EXTM3U billed-msg=\"two\"  \r\n",
        "\n\n  line with spaces  \n\n",
    ];

    #[test]
    fn test_strip_removes_marker_lines() {
        let codec = FooterCodec::new().unwrap();
        let text = "#EXTINF:-1,A\nhttp://a\n\n#EXTM3U billed-msg=\"😎WN01OKTOBER2026| lynk.id/magelife😎\"\n";
        assert_eq!(codec.strip_footer(text), "#EXTINF:-1,A\nhttp://a");
    }

    #[test]
    fn test_strip_is_line_anchored() {
        let codec = FooterCodec::new().unwrap();
        let text = "#EXTINF:-1,A #EXTM3U billed-msg=\"inline\"\nhttp://a";
        assert_eq!(codec.strip_footer(text), text);
    }

    #[test]
    fn test_strip_leaves_plain_header() {
        let codec = FooterCodec::new().unwrap();
        let text = "#EXTM3U\n#EXTINF:-1,A\nhttp://a";
        assert_eq!(codec.strip_footer(text), text);
    }

    #[test]
    fn test_strip_is_case_insensitive_and_allows_indent() {
        let codec = FooterCodec::new().unwrap();
        let text = "body\n   #extm3u Billed-Msg=\"x\"\t";
        assert_eq!(codec.strip_footer(text), "body");
    }

    #[test]
    fn test_compose_footer_live_embeds_identifier() {
        let codec = FooterCodec::new().unwrap();
        assert_eq!(
            codec.compose_footer("WN01OKTOBER2026", false),
            "#EXTM3U billed-msg=\"😎WN01OKTOBER2026| lynk.id/magelife😎\""
        );
    }

    #[test]
    fn test_compose_footer_expired_is_fixed() {
        let codec = FooterCodec::new().unwrap();
        let footer = codec.compose_footer("WN01OKTOBER2026", true);
        assert_eq!(
            footer,
            "#EXTM3U billed-msg=\"MASA BERLAKU HABIS| lynk.id/magelife😎\""
        );
        assert!(!footer.contains("WN01OKTOBER2026"));
    }

    #[test]
    fn test_add_footer_layout() {
        let codec = FooterCodec::new().unwrap();
        assert_eq!(
            codec.add_footer("  body  \n", "ID", true),
            format!("body\n\n#EXTM3U billed-msg=\"{EXPIRED_MESSAGE}\"\n")
        );
    }

    #[test]
    fn test_strip_after_add_equals_strip() {
        let codec = FooterCodec::new().unwrap();
        for text in SAMPLES {
            for expired in [false, true] {
                let added = codec.add_footer(text, "WN05MEI2025", expired);
                assert_eq!(codec.strip_footer(&added), codec.strip_footer(text));
            }
        }
    }

    #[test]
    fn test_add_twice_keeps_one_marker() {
        let codec = FooterCodec::new().unwrap();
        for text in SAMPLES {
            for expired in [false, true] {
                let once = codec.add_footer(text, "WN05MEI2025", expired);
                let twice = codec.add_footer(&once, "WN05MEI2025", expired);
                assert_eq!(codec.count_markers(&twice), 1);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_switching_marker_replaces_it() {
        let codec = FooterCodec::new().unwrap();
        let live = codec.add_footer("body", "WN05MEI2025", false);
        let expired = codec.add_footer(&live, "WN05MEI2025", true);
        assert_eq!(codec.count_markers(&expired), 1);
        assert!(expired.contains(EXPIRED_MESSAGE));
        assert!(!expired.contains("😎WN05MEI2025"));
    }
}
