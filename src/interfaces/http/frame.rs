use crate::domain::outcome::{ImageSet, Outcome};

/// Renders outcomes as Farcaster frame documents.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    images: ImageSet,
    post_url: String,
}

impl FrameRenderer {
    /// `site_url` is the public origin; buttons post back to `<site_url>/api/frame`.
    pub fn new(images: ImageSet, site_url: &str) -> Self {
        Self {
            images,
            post_url: format!("{}/api/frame", site_url.trim_end_matches('/')),
        }
    }

    pub fn render(&self, outcome: Outcome) -> String {
        let image = escape_attr(outcome.image(&self.images));
        let post_url = escape_attr(&self.post_url);
        let button = if outcome.should_retry() {
            "\n    <meta property=\"fc:frame:button:1\" content=\"Try again\" />"
        } else {
            ""
        };

        format!(
            "<!DOCTYPE html><html><head>\n    \
             <meta property=\"fc:frame\" content=\"vNext\" />\n    \
             <meta property=\"fc:frame:image\" content=\"{image}\" />\n    \
             <meta property=\"fc:frame:image:aspect_ratio\" content=\"1:1\" />\n    \
             <meta property=\"fc:frame:post_url\" content=\"{post_url}\" />{button}\n  \
             </head></html>"
        )
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
