//! Fills in missing clip bounds from the metadata provider.

use crate::catalog::CatalogVideo;
use crate::duration::parse_iso8601_seconds;
use crate::error::Error;
use crate::provider::DurationProvider;

/// Resolve a catalog entry's section end.
///
/// Entries with explicit bounds pass through untouched. An entry with both
/// bounds at zero gets its full duration from the provider: one blocking
/// network call, no caching, no retry. The start stays 0.
pub fn resolve_section_end<P: DurationProvider>(
    video: &CatalogVideo,
    provider: &P,
) -> Result<CatalogVideo, Error> {
    if !video.needs_resolution() {
        return Ok(video.clone());
    }

    let duration_text = provider.video_duration(&video.id)?;
    let seconds = parse_iso8601_seconds(&duration_text)?;
    tracing::debug!("resolved video {} to {} seconds", video.id, seconds);

    Ok(CatalogVideo {
        id: video.id.clone(),
        section_start: 0,
        section_end: seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(&'static str);

    impl DurationProvider for FixedProvider {
        fn video_duration(&self, _video_id: &str) -> Result<String, Error> {
            Ok(self.0.to_string())
        }
    }

    struct FailingProvider;

    impl DurationProvider for FailingProvider {
        fn video_duration(&self, video_id: &str) -> Result<String, Error> {
            Err(Error::VideoNotFound(video_id.to_string()))
        }
    }

    fn unresolved(id: &str) -> CatalogVideo {
        CatalogVideo {
            id: id.to_string(),
            section_start: 0,
            section_end: 0,
        }
    }

    #[test]
    fn test_explicit_bounds_pass_through() {
        let video = CatalogVideo {
            id: "v1".to_string(),
            section_start: 10,
            section_end: 50,
        };
        // FailingProvider proves the provider is never consulted.
        let resolved = resolve_section_end(&video, &FailingProvider).unwrap();
        assert_eq!(resolved.section_start, 10);
        assert_eq!(resolved.section_end, 50);
    }

    #[test]
    fn test_resolution_fills_section_end() {
        let resolved = resolve_section_end(&unresolved("v1"), &FixedProvider("PT1M30S")).unwrap();
        assert_eq!(resolved.section_start, 0);
        assert_eq!(resolved.section_end, 90);
    }

    #[test]
    fn test_not_found_propagates() {
        let err = resolve_section_end(&unresolved("v404"), &FailingProvider).unwrap_err();
        assert!(matches!(err, Error::VideoNotFound(_)));
    }

    #[test]
    fn test_unparseable_duration_propagates() {
        let err = resolve_section_end(&unresolved("v1"), &FixedProvider("4 minutes")).unwrap_err();
        assert!(matches!(err, Error::InvalidDuration(_)));
    }
}
