use super::*;

#[test]
fn display_style_hides_only_dismissed_banner() {
    assert_eq!(display_style(BannerState { dismissed: false }), "");
    assert_eq!(display_style(BannerState { dismissed: true }), "none");
}
