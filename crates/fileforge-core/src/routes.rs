//! Site Routes

/// Page the site is showing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    PremiumAi,
    SignIn,
    /// Conversion page keyed by catalog `target_path`, e.g. "/pdf_to_word"
    Convert(String),
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/premium-ai" => Route::PremiumAi,
            "/signin" => Route::SignIn,
            p if is_convert_slug(p) => Route::Convert(p.to_string()),
            p => Route::NotFound(p.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::PremiumAi => "/premium-ai".to_string(),
            Route::SignIn => "/signin".to_string(),
            Route::Convert(p) | Route::NotFound(p) => p.clone(),
        }
    }
}

fn is_convert_slug(path: &str) -> bool {
    path.strip_prefix("/pdf_to_").is_some_and(|rest| {
        !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/premium-ai/"), Route::PremiumAi);
        assert_eq!(Route::from_path("/signin?next=/"), Route::SignIn);
        assert_eq!(
            Route::from_path("/pdf_to_word"),
            Route::Convert("/pdf_to_word".to_string())
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(
            Route::from_path("/pdf_to_"),
            Route::NotFound("/pdf_to_".to_string())
        );
        assert_eq!(
            Route::from_path("/admin"),
            Route::NotFound("/admin".to_string())
        );
    }

    #[test]
    fn test_path_round_trip() {
        for path in ["/", "/premium-ai", "/signin", "/pdf_to_png"] {
            assert_eq!(Route::from_path(path).path(), path);
        }
    }
}
