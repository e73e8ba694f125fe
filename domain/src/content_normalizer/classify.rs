use serde_json::Value;

use super::field::field;

/// Which backend produced a payload. Selects the formatter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Drupal-style REST endpoint answering `?_format=json`.
    Cms,
    /// The public mock API of the first prototype.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementKind {
    General,
    Festival,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmsCollection {
    Activities,
    Events,
    Articles,
    BookingForms,
    Trustees,
    Prayers,
    Services,
    Blog,
    Announcements(AnnouncementKind),
    GalleryEvents,
    Generic,
}

impl CmsCollection {
    /// Matches a whole path segment, never a substring of one.
    pub fn from_segment(segment: &str) -> Self {
        match segment.to_ascii_lowercase().as_str() {
            "activities" => CmsCollection::Activities,
            "events" => CmsCollection::Events,
            "article" | "articles" => CmsCollection::Articles,
            "booking-forms" | "booking_forms" => CmsCollection::BookingForms,
            "trustees" => CmsCollection::Trustees,
            "prayers" => CmsCollection::Prayers,
            "services" => CmsCollection::Services,
            "blog" => CmsCollection::Blog,
            "announcements" => CmsCollection::Announcements(AnnouncementKind::General),
            "festival-announcements" => CmsCollection::Announcements(AnnouncementKind::Festival),
            "gallery-events" => CmsCollection::GalleryEvents,
            _ => CmsCollection::Generic,
        }
    }

    /// Stable name, used as content id fallback and template tag.
    pub fn slug(&self) -> &'static str {
        match self {
            CmsCollection::Activities => "activities",
            CmsCollection::Events => "events",
            CmsCollection::Articles => "articles",
            CmsCollection::BookingForms => "booking-forms",
            CmsCollection::Trustees => "trustees",
            CmsCollection::Prayers => "prayers",
            CmsCollection::Services => "services",
            CmsCollection::Blog => "blog",
            CmsCollection::Announcements(AnnouncementKind::General) => "announcements",
            CmsCollection::Announcements(AnnouncementKind::Festival) => "festival-announcements",
            CmsCollection::GalleryEvents => "gallery-events",
            CmsCollection::Generic => "collection",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyResource {
    PostPage,
    PostList,
    UserPage,
    UserList,
    Photos,
}

/// The content kind of a payload, derived once from (endpoint, shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    CmsCollection(CmsCollection),
    CmsPage,
    Legacy(LegacyResource),
    Fallback,
}

/// The parts of an endpoint the classifier looks at.
#[derive(Debug, PartialEq, Eq)]
pub struct EndpointPath<'a> {
    segments: Vec<&'a str>,
    query: Option<&'a str>,
}

impl<'a> EndpointPath<'a> {
    /// Accepts absolute URLs as well as bare paths.
    pub fn parse(endpoint: &'a str) -> Self {
        let without_fragment = endpoint.split('#').next().unwrap_or_default();
        let without_origin = match without_fragment.find("://") {
            Some(scheme_end) => {
                let rest = &without_fragment[scheme_end + 3..];
                rest.find(['/', '?']).map(|i| &rest[i..]).unwrap_or_default()
            }
            None => without_fragment,
        };
        let (path, query) = match without_origin.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (without_origin, None),
        };
        let segments = path.split('/').filter(|s| !s.is_empty()).collect();
        Self { segments, query }
    }

    pub fn source(&self) -> ContentSource {
        let is_cms = self.query.is_some_and(|query| {
            query
                .split('&')
                .any(|pair| pair.eq_ignore_ascii_case("_format=json"))
        });
        if is_cms {
            ContentSource::Cms
        } else {
            ContentSource::Legacy
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    fn last_segment(&self) -> &'a str {
        self.segments.last().copied().unwrap_or_default()
    }

    /// The last `posts`, `users` or `photos` segment and whether an id
    /// follows it.
    fn legacy_resource(&self) -> Option<(&'a str, bool)> {
        self.segments
            .iter()
            .enumerate()
            .rev()
            .find(|(_, segment)| matches!(**segment, "posts" | "users" | "photos"))
            .map(|(i, segment)| (*segment, i + 1 < self.segments.len()))
    }
}

pub fn classify(payload: &Value, endpoint: &str) -> Classification {
    let path = EndpointPath::parse(endpoint);
    match (path.source(), payload) {
        (ContentSource::Cms, Value::Array(_)) => {
            Classification::CmsCollection(CmsCollection::from_segment(path.last_segment()))
        }
        (ContentSource::Cms, Value::Object(item)) if field(item, "title").is_some() => {
            Classification::CmsPage
        }
        (ContentSource::Cms, _) => Classification::Fallback,
        (ContentSource::Legacy, _) => classify_legacy(&path, payload)
            .map(Classification::Legacy)
            .unwrap_or(Classification::Fallback),
    }
}

fn classify_legacy(path: &EndpointPath, payload: &Value) -> Option<LegacyResource> {
    let (resource, has_id) = path.legacy_resource()?;
    let resource = match (resource, has_id, payload) {
        ("posts", true, Value::Object(_)) => LegacyResource::PostPage,
        ("posts", _, Value::Array(_)) => LegacyResource::PostList,
        ("users", true, Value::Object(_)) => LegacyResource::UserPage,
        ("users", _, Value::Array(_)) => LegacyResource::UserList,
        ("photos", _, Value::Array(_)) => LegacyResource::Photos,
        _ => return None,
    };
    Some(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_endpoint_path() {
        let path = EndpointPath::parse("https://cms.example.org/api/events?_format=json#top");
        assert_eq!(path.segments(), &["api", "events"]);
        assert_eq!(path.source(), ContentSource::Cms);

        let path = EndpointPath::parse("https://jsonplaceholder.typicode.com/posts/1");
        assert_eq!(path.segments(), &["posts", "1"]);
        assert_eq!(path.source(), ContentSource::Legacy);

        let path = EndpointPath::parse("https://cms.example.org?_format=json");
        assert!(path.segments().is_empty());
        assert_eq!(path.source(), ContentSource::Cms);
    }

    #[test]
    fn test_format_parameter_must_match_whole_pair() {
        let path = EndpointPath::parse("/events?x_format=json");
        assert_eq!(path.source(), ContentSource::Legacy);
        let path = EndpointPath::parse("/events?page=2&_format=json");
        assert_eq!(path.source(), ContentSource::Cms);
    }

    #[test]
    fn test_cms_collections_by_segment() {
        let test_cases = vec![
            ("/activities?_format=json", CmsCollection::Activities),
            ("/events?_format=json", CmsCollection::Events),
            ("/gallery-events?_format=json", CmsCollection::GalleryEvents),
            ("/article?_format=json", CmsCollection::Articles),
            ("/booking-forms?_format=json", CmsCollection::BookingForms),
            ("/trustees?_format=json", CmsCollection::Trustees),
            ("/prayers?_format=json", CmsCollection::Prayers),
            ("/services?_format=json", CmsCollection::Services),
            ("/blog?_format=json", CmsCollection::Blog),
            (
                "/announcements?_format=json",
                CmsCollection::Announcements(AnnouncementKind::General),
            ),
            (
                "/festival-announcements?_format=json",
                CmsCollection::Announcements(AnnouncementKind::Festival),
            ),
            ("/newsletters?_format=json", CmsCollection::Generic),
        ];

        for (endpoint, expected) in test_cases {
            assert_eq!(
                classify(&json!([]), endpoint),
                Classification::CmsCollection(expected),
                "endpoint: {endpoint}"
            );
        }
    }

    #[test]
    fn test_cms_single_item_requires_title() {
        assert_eq!(
            classify(&json!({ "title": [{ "value": "Puja" }] }), "/node/4?_format=json"),
            Classification::CmsPage
        );
        assert_eq!(
            classify(&json!({ "nid": [{ "value": 4 }] }), "/node/4?_format=json"),
            Classification::Fallback
        );
    }

    #[test]
    fn test_legacy_resources() {
        let test_cases = vec![
            ("posts/1", json!({}), Classification::Legacy(LegacyResource::PostPage)),
            ("posts", json!([]), Classification::Legacy(LegacyResource::PostList)),
            ("posts/1", json!([]), Classification::Legacy(LegacyResource::PostList)),
            ("users/3", json!({}), Classification::Legacy(LegacyResource::UserPage)),
            ("users", json!([]), Classification::Legacy(LegacyResource::UserList)),
            ("photos", json!([]), Classification::Legacy(LegacyResource::Photos)),
            ("users/1/posts", json!([]), Classification::Legacy(LegacyResource::PostList)),
            ("posts", json!({}), Classification::Fallback),
            ("photos", json!({}), Classification::Fallback),
            ("comments", json!([]), Classification::Fallback),
        ];

        for (endpoint, payload, expected) in test_cases {
            assert_eq!(classify(&payload, endpoint), expected, "endpoint: {endpoint}");
        }
    }

    #[test]
    fn test_legacy_patterns_ignored_for_cms_endpoints() {
        assert_eq!(
            classify(&json!({ "id": 1 }), "/posts/1?_format=json"),
            Classification::Fallback
        );
    }

    #[test]
    fn test_scalar_payload_falls_back() {
        assert_eq!(classify(&json!("oops"), "/events?_format=json"), Classification::Fallback);
        assert_eq!(classify(&json!(null), "posts/1"), Classification::Fallback);
    }
}
