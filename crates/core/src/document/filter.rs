//! SEO view extraction with author-marked ignore regions.

/// Marker that opens or closes an ignore region when found anywhere in a line.
pub const SEO_IGNORE: &str = "SEO_IGNORE";

/// Body text considered for metadata generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeoView {
    /// Lines outside ignore regions, with their original line breaks.
    pub text: String,
    /// Number of marker lines seen.
    pub markers: usize,
    /// An ignore region was still open at end of input.
    pub excluding: bool,
}

/// Derive the SEO view of a body.
///
/// Each line containing [`SEO_IGNORE`] toggles exclusion and is itself never
/// part of the view. Regions do not nest. An odd number of markers leaves the
/// rest of the body excluded.
pub fn filter_seo_view(body: &str) -> SeoView {
    let mut view = SeoView::default();

    for line in body.split_inclusive('\n') {
        if line.contains(SEO_IGNORE) {
            view.excluding = !view.excluding;
            view.markers += 1;
            continue;
        }
        if !view.excluding {
            view.text.push_str(line);
        }
    }

    if view.excluding {
        tracing::warn!(
            markers = view.markers,
            "unpaired {SEO_IGNORE} marker, remainder of the body is excluded"
        );
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn body_without_markers_is_unchanged() {
        let body = "Hello\n\nWorld\n";
        let view = filter_seo_view(body);
        assert_eq!(view.text, body);
        assert_eq!(view.markers, 0);
        assert!(!view.excluding);
    }

    #[test]
    fn paired_markers_exclude_region_and_marker_lines() {
        let view = filter_seo_view("Hello\nSEO_IGNORE\nsecret\nSEO_IGNORE\nWorld\n");
        assert_eq!(view.text, "Hello\nWorld\n");
        assert!(!view.excluding);
    }

    #[test]
    fn marker_inside_a_line_still_toggles() {
        let view = filter_seo_view("a\n<!-- SEO_IGNORE -->\nb\n<!-- /SEO_IGNORE -->\nc\n");
        assert_eq!(view.text, "a\nc\n");
    }

    #[test]
    fn unpaired_marker_excludes_rest_of_body() {
        let view = filter_seo_view("kept\nSEO_IGNORE\ngone\nalso gone\n");
        assert_eq!(view.text, "kept\n");
        assert!(view.excluding);
    }

    #[test]
    fn regions_do_not_nest() {
        // second marker always closes, third opens again
        let view = filter_seo_view("a\nSEO_IGNORE\nb\nSEO_IGNORE\nc\nSEO_IGNORE\nd\nSEO_IGNORE\ne\n");
        assert_eq!(view.text, "a\nc\ne\n");
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(2, false)]
    #[case(3, true)]
    #[case(6, false)]
    fn marker_parity_decides_final_state(#[case] markers: usize, #[case] excluding: bool) {
        let body: String = (0..markers).map(|i| format!("line {i}\nSEO_IGNORE\n")).collect();
        let view = filter_seo_view(&body);
        assert_eq!(view.markers, markers);
        assert_eq!(view.excluding, excluding);
    }
}
