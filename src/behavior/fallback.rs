use quick_xml::escape::escape;

pub const PLACEHOLDER_BACKGROUND: &str = "#1e1b4b";
pub const PLACEHOLDER_LABEL_COLOR: &str = "#c7d2fe";

/// Generic thumbnail used when a project or gallery image can't be loaded.
pub const GENERIC_THUMBNAIL: &str = "https://source.unsplash.com/720x480/?design";

/// Image source that switches to a fallback the first time loading fails.
///
/// There is no retry: once on the fallback, further errors are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
    primary: String,
    fallback: String,
    failed: bool,
}

impl FallbackImage {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            failed: false,
        }
    }

    pub fn src(&self) -> &str {
        if self.failed {
            &self.fallback
        } else {
            &self.primary
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.failed
    }

    /// Handles a load failure. Returns true when the source changed.
    pub fn fail(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }
}

/// Inline portrait placeholder: a solid background, a head circle and a name label.
pub fn placeholder_svg(label: &str) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='320' height='320' viewBox='0 0 320 320'>\
<rect width='100%' height='100%' fill='{PLACEHOLDER_BACKGROUND}' />\
<circle cx='160' cy='120' r='70' fill='#fff' opacity='0.95'/>\
<text x='160' y='300' font-size='18' font-family='Arial' fill='{PLACEHOLDER_LABEL_COLOR}' text-anchor='middle'>{}</text>\
</svg>",
        escape(label)
    )
}

pub fn placeholder_data_uri(label: &str) -> String {
    format!(
        "data:image/svg+xml;utf8,{}",
        urlencoding::encode(&placeholder_svg(label))
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_one_shot() {
        let mut img = FallbackImage::new("/profile.jpg", "data:placeholder");
        assert_eq!(img.src(), "/profile.jpg");
        assert!(!img.is_fallback());

        assert!(img.fail());
        assert_eq!(img.src(), "data:placeholder");

        // a broken fallback doesn't flip back or loop
        assert!(!img.fail());
        assert_eq!(img.src(), "data:placeholder");
    }

    #[test]
    fn test_unreachable_profile_shows_placeholder() {
        let mut img = FallbackImage::new("/missing.jpg", placeholder_data_uri("Ruchitha"));
        img.fail();
        assert!(img.src().starts_with("data:image/svg+xml;utf8,"));
    }

    #[test]
    fn test_placeholder_content() {
        let svg = placeholder_svg("Ruchitha");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("fill='#1e1b4b'"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains(">Ruchitha</text>"));
    }

    #[test]
    fn test_placeholder_label_escaped() {
        let svg = placeholder_svg("A & <B>");
        assert!(svg.contains(">A &amp; &lt;B&gt;</text>"));

        let svg = placeholder_svg("O'Neil \"Jr\"");
        assert!(svg.contains(">O&apos;Neil &quot;Jr&quot;</text>"));
    }

    #[test]
    fn test_data_uri_is_encoded() {
        let uri = placeholder_data_uri("Ruchitha");
        let payload = uri
            .strip_prefix("data:image/svg+xml;utf8,")
            .expect("data uri prefix");
        assert!(!payload.contains('#'));
        assert!(!payload.contains('<'));
        assert!(payload.contains("%231e1b4b"));
        assert_eq!(
            urlencoding::decode(payload).unwrap(),
            placeholder_svg("Ruchitha")
        );
    }
}
