use crate::MailError;
use mailparse::{MailHeaderMap, ParsedMail};

/// A file carried by a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Finds the attachment of a raw RFC 822 message, if any.
///
/// Parts are visited depth first. Multipart containers and parts without a
/// `Content-Disposition` header are skipped. When several remaining parts
/// name a file, the last one wins.
pub fn extract_attachment(raw: &[u8]) -> Result<Option<Attachment>, MailError> {
    let message = mailparse::parse_mail(raw)?;

    let mut parts = Vec::new();
    walk(&message, &mut parts);

    let chosen = parts
        .into_iter()
        .filter(|part| !part.ctype.mimetype.starts_with("multipart/"))
        .filter(|part| part.headers.get_first_value("Content-Disposition").is_some())
        .filter_map(|part| filename(part).map(|name| (name, part)))
        .last();

    let Some((filename, part)) = chosen else {
        return Ok(None);
    };

    let data = part.get_body_raw()?;
    log::debug!("Found attachment {} ({} bytes)", filename, data.len());

    Ok(Some(Attachment { filename, data }))
}

fn walk<'a>(part: &'a ParsedMail<'a>, out: &mut Vec<&'a ParsedMail<'a>>) {
    out.push(part);
    for sub in &part.subparts {
        walk(sub, out);
    }
}

fn filename(part: &ParsedMail<'_>) -> Option<String> {
    part.get_content_disposition()
        .params
        .get("filename")
        .or_else(|| part.ctype.params.get("name"))
        .filter(|name| !name.is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_ATTACHMENT: &str = "From: sbdservice@sbd.iridium.com\r\n\
Subject: SBD Msg From Unit: 300234010753370\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/mixed; boundary=\"XYZ\"\r\n\
\r\n\
--XYZ\r\n\
Content-Type: text/plain\r\n\
\r\n\
MOMSN: 42\r\n\
--XYZ\r\n\
Content-Type: application/octet-stream; name=\"300234010753370_000042.sbd\"\r\n\
Content-Disposition: attachment; filename=\"300234010753370_000042.sbd\"\r\n\
Content-Transfer-Encoding: base64\r\n\
\r\n\
WCwxMDEzLDQ1LDIyLDIzLDE1MDAsMTI6MDA6MDAsMzYwMDAwMDAsWCwtMTE4ODAwMDAw\r\n\
--XYZ--\r\n";

    #[test]
    fn test_extracts_base64_attachment() {
        let attachment = extract_attachment(WITH_ATTACHMENT.as_bytes())
            .unwrap()
            .unwrap();

        assert_eq!(attachment.filename, "300234010753370_000042.sbd");
        assert_eq!(
            attachment.data,
            b"X,1013,45,22,23,1500,12:00:00,36000000,X,-118800000"
        );
    }

    #[test]
    fn test_plain_message_has_no_attachment() {
        let raw = "From: a@example.com\r\nSubject: hi\r\n\r\nno files here\r\n";

        assert_eq!(extract_attachment(raw.as_bytes()).unwrap(), None);
    }

    #[test]
    fn test_inline_part_without_filename_is_skipped() {
        let raw = "Content-Type: multipart/mixed; boundary=\"B\"\r\n\
\r\n\
--B\r\n\
Content-Type: text/plain\r\n\
Content-Disposition: inline\r\n\
\r\n\
body\r\n\
--B\r\n\
Content-Type: application/octet-stream; name=\"rb.bin\"\r\n\
Content-Disposition: attachment\r\n\
\r\n\
payload\r\n\
--B--\r\n";

        let attachment = extract_attachment(raw.as_bytes()).unwrap().unwrap();

        assert_eq!(attachment.filename, "rb.bin");
        assert_eq!(attachment.data.trim_ascii_end(), b"payload");
    }

    #[test]
    fn test_last_named_part_wins() {
        let raw = "Content-Type: multipart/mixed; boundary=\"B\"\r\n\
\r\n\
--B\r\n\
Content-Type: application/octet-stream\r\n\
Content-Disposition: attachment; filename=\"old.sbd\"\r\n\
\r\n\
stale\r\n\
--B\r\n\
Content-Type: text/plain\r\n\
Content-Disposition: inline\r\n\
\r\n\
note\r\n\
--B\r\n\
Content-Type: application/octet-stream\r\n\
Content-Disposition: attachment; filename=\"new.sbd\"\r\n\
\r\n\
fresh\r\n\
--B--\r\n";

        let attachment = extract_attachment(raw.as_bytes()).unwrap().unwrap();

        assert_eq!(attachment.filename, "new.sbd");
        assert_eq!(attachment.data.trim_ascii_end(), b"fresh");
    }
}
