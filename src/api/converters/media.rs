//! Media attachment conversion

use crate::api::converters::Converter;
use crate::api::dto::{MediaAttachmentResponse, MediaDimensions, MediaFocus, MediaMeta};
use crate::api::fields::{frame_rate_string, size_string};
use crate::data::{FileType, MediaAttachment};

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl Converter {
    /// Convert a MediaAttachment to MediaAttachmentResponse
    ///
    /// Original size, aspect and focus are exposed for images only; duration,
    /// frame rate and bitrate for videos only.
    pub fn attachment_to_response(&self, attachment: &MediaAttachment) -> MediaAttachmentResponse {
        let meta = &attachment.meta;
        let mut original = MediaDimensions {
            width: meta.original.width,
            height: meta.original.height,
            ..Default::default()
        };
        let small = MediaDimensions {
            width: meta.small.width,
            height: meta.small.height,
            size: size_string(meta.small.width, meta.small.height),
            aspect: meta.small.aspect as f32,
            ..Default::default()
        };
        let mut focus = None;

        match attachment.kind {
            FileType::Image => {
                original.size = size_string(meta.original.width, meta.original.height);
                original.aspect = meta.original.aspect as f32;
                focus = Some(MediaFocus {
                    x: meta.focus.x,
                    y: meta.focus.y,
                });
            }
            FileType::Video => {
                original.duration = meta.original.duration.unwrap_or_default();
                original.frame_rate = meta
                    .original
                    .framerate
                    .map(frame_rate_string)
                    .unwrap_or_default();
                original.bitrate = meta.original.bitrate.unwrap_or_default();
            }
            FileType::Gifv | FileType::Audio | FileType::Unknown => {}
        }

        MediaAttachmentResponse {
            id: attachment.id.clone(),
            media_type: attachment.kind.as_str().to_string(),
            url: non_empty(&attachment.url),
            text_url: attachment.url.clone(),
            preview_url: attachment.thumbnail.url.clone(),
            remote_url: non_empty(&attachment.remote_url),
            preview_remote_url: non_empty(&attachment.thumbnail.remote_url),
            meta: MediaMeta {
                original,
                small,
                focus,
            },
            description: non_empty(&attachment.description),
            blurhash: attachment.blurhash.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::converters::test_support::converter;
    use crate::data::{FileMeta, Focus, MockStore, OriginalMeta, SmallMeta, Thumbnail};

    fn video() -> MediaAttachment {
        MediaAttachment {
            id: "v1".to_string(),
            kind: FileType::Video,
            url: "https://example.org/media/v1.mp4".to_string(),
            thumbnail: Thumbnail {
                url: "https://example.org/media/v1.jpg".to_string(),
                ..Default::default()
            },
            meta: FileMeta {
                original: OriginalMeta {
                    width: 1280,
                    height: 720,
                    aspect: 1.7777778,
                    duration: Some(12.5),
                    framerate: Some(29.97),
                    bitrate: Some(1_000_000),
                },
                small: SmallMeta {
                    width: 512,
                    height: 288,
                    aspect: 1.7777778,
                },
                focus: Focus::default(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn video_frame_rate_is_rounded() {
        let response = converter(MockStore::new()).attachment_to_response(&video());

        assert_eq!(response.media_type, "video");
        assert_eq!(response.meta.original.frame_rate, "30/1");
        assert!(response.meta.original.size.is_empty());
        assert_eq!(response.meta.original.aspect, 0.0);
        assert_eq!(response.meta.original.width, 1280);
        assert_eq!(response.meta.original.duration, 12.5);
        assert_eq!(response.meta.original.bitrate, 1_000_000);
        assert_eq!(response.meta.small.size, "512x288");
        assert!(response.meta.focus.is_none());
    }

    #[test]
    fn empty_optional_strings_become_none() {
        let response = converter(MockStore::new()).attachment_to_response(&video());

        assert_eq!(
            response.url.as_deref(),
            Some("https://example.org/media/v1.mp4")
        );
        assert_eq!(response.preview_url, "https://example.org/media/v1.jpg");
        assert!(response.remote_url.is_none());
        assert!(response.preview_remote_url.is_none());
        assert!(response.description.is_none());
    }

    #[test]
    fn image_carries_focus_but_no_stream_info() {
        let image = MediaAttachment {
            kind: FileType::Image,
            description: "a cat".to_string(),
            meta: FileMeta {
                focus: Focus { x: 0.5, y: -0.25 },
                ..video().meta
            },
            ..video()
        };

        let response = converter(MockStore::new()).attachment_to_response(&image);

        assert_eq!(response.meta.focus, Some(MediaFocus { x: 0.5, y: -0.25 }));
        assert!(response.meta.original.frame_rate.is_empty());
        assert_eq!(response.meta.original.duration, 0.0);
        assert_eq!(response.description.as_deref(), Some("a cat"));
    }

    #[test]
    fn audio_and_gifv_carry_no_stream_info() {
        for kind in [FileType::Audio, FileType::Gifv, FileType::Unknown] {
            let attachment = MediaAttachment { kind, ..video() };

            let response = converter(MockStore::new()).attachment_to_response(&attachment);

            let original = &response.meta.original;
            assert_eq!(original.duration, 0.0, "{kind:?}");
            assert_eq!(original.bitrate, 0, "{kind:?}");
            assert!(original.frame_rate.is_empty(), "{kind:?}");
            assert!(original.size.is_empty(), "{kind:?}");
            assert!(response.meta.focus.is_none(), "{kind:?}");
            assert_eq!(response.meta.small.size, "512x288");
        }
    }
}
