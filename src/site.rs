//! Owner details and asset locations shared by every page.

pub const OWNER_NAME: &str = "Shiv Gandhi";
pub const OWNER_INITIALS: &str = "SG";
pub const TAGLINE: &str = "Software • AI/ML • Automation • Cloud";
pub const LOCATION: &str = "Winnipeg, MB";
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub const CONTACT_EMAIL: &str = "shivvgandhii@gmail.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/shivgandhi10/";
pub const GITHUB_URL: &str = "https://github.com/Shivv10";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/shivv__10/";

pub const RESUME_PDF: &str = "Shiv-Gandhi-Resume.pdf";

const DEFAULT_BASE_PATH: &str = "/";

pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// Path prefix the site is served under, set at build time with
/// `SITE_BASE_PATH`.
pub fn base_path() -> &'static str {
    option_env!("SITE_BASE_PATH").unwrap_or(DEFAULT_BASE_PATH)
}

/// Absolute URL path for a file in the assets dir.
pub fn asset_path(path: &str) -> String {
    join_path(base_path(), path)
}

/// Prefix the client router strips before matching routes. Empty when the
/// site is served from the root.
pub fn router_base() -> String {
    route_prefix(base_path())
}

pub fn resume_pdf_path() -> String {
    asset_path(&format!("resume/{RESUME_PDF}"))
}

fn join_path(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() || base.starts_with('/') || base.contains("://") {
        format!("{base}/{path}")
    } else {
        format!("/{base}/{path}")
    }
}

fn route_prefix(base: &str) -> String {
    let path = match base.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => base,
    };
    let path = path.trim_matches('/');
    if path.is_empty() {
        String::new()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/", "img/banff.jpg"), "/img/banff.jpg");
        assert_eq!(join_path("", "img/banff.jpg"), "/img/banff.jpg");
        assert_eq!(join_path("/portfolio/", "/img/banff.jpg"), "/portfolio/img/banff.jpg");
        assert_eq!(join_path("/portfolio", "img/banff.jpg"), "/portfolio/img/banff.jpg");
        assert_eq!(join_path("portfolio", "img/banff.jpg"), "/portfolio/img/banff.jpg");
        assert_eq!(
            join_path("https://cdn.example.com/", "videos/football.mp4"),
            "https://cdn.example.com/videos/football.mp4"
        );
    }

    #[test]
    fn test_route_prefix() {
        assert_eq!(route_prefix("/"), "");
        assert_eq!(route_prefix(""), "");
        assert_eq!(route_prefix("/portfolio"), "/portfolio");
        assert_eq!(route_prefix("/portfolio/"), "/portfolio");
        assert_eq!(route_prefix("portfolio"), "/portfolio");
        assert_eq!(route_prefix("https://example.github.io/portfolio/"), "/portfolio");
        assert_eq!(route_prefix("https://cdn.example.com"), "");
    }

    #[test]
    fn test_router_base_matches_asset_prefix() {
        for base in ["/", "/portfolio", "/portfolio/", "portfolio"] {
            let asset = join_path(base, "img/banff.jpg");
            let prefix = route_prefix(base);
            assert_eq!(asset, format!("{prefix}/img/banff.jpg"));
        }
        assert!(asset_path("img/banff.jpg").starts_with(&format!("{}/", router_base())));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto(), "mailto:shivvgandhii@gmail.com");
    }

    #[test]
    fn test_resume_pdf_path() {
        assert!(resume_pdf_path().ends_with("/resume/Shiv-Gandhi-Resume.pdf"));
        assert!(resume_pdf_path().starts_with('/'));
    }
}
