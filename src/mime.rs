use crate::models::ResourceType;

const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for the multipart `file` part. Images are sniffed from their
/// magic bytes; raw files are always sent as an octet stream.
pub fn content_type_for(bytes: &[u8], resource_type: ResourceType) -> &'static str {
    match resource_type {
        ResourceType::Image => detect_image_mime(bytes),
        ResourceType::Raw => OCTET_STREAM,
    }
}

pub fn detect_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x47, 0x49, 0x46, 0x38, ..] => "image/gif",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        _ => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?}), sending as {}",
                &bytes[..bytes.len().min(4)],
                OCTET_STREAM
            );
            OCTET_STREAM
        }
    }
}
