use slidecast_core::{FormViewModel, ResultView};
use slidecast_engine::ServiceConfig;

/// Renders the result area as output lines. Pure: the same view and config
/// always produce the same lines.
pub fn render(view: &FormViewModel, config: &ServiceConfig) -> Vec<String> {
    match &view.result {
        ResultView::Hidden => Vec::new(),
        ResultView::Pending => vec!["Processing...".to_string()],
        ResultView::Ready { message, artifact } => {
            let mut lines = vec![message.clone()];
            if let Some(artifact) = artifact {
                lines.push(format!("Download: {}", config.download_url(artifact)));
            }
            lines
        }
        ResultView::Error { message } => vec![format!("Error: {message}")],
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn config() -> ServiceConfig {
        ServiceConfig::with_base_url(Url::parse("http://127.0.0.1:8000").unwrap())
    }

    fn ready(artifact: Option<&str>) -> FormViewModel {
        FormViewModel {
            result: ResultView::Ready {
                message: "Done".to_string(),
                artifact: artifact.map(str::to_string),
            },
            ..FormViewModel::default()
        }
    }

    #[test]
    fn hidden_renders_nothing() {
        assert!(render(&FormViewModel::default(), &config()).is_empty());
    }

    #[test]
    fn pending_renders_busy_line_only() {
        let view = FormViewModel {
            submit_enabled: false,
            result: ResultView::Pending,
            ..FormViewModel::default()
        };
        assert_eq!(render(&view, &config()), vec!["Processing...".to_string()]);
    }

    #[test]
    fn artifact_link_resolves_against_the_base_address() {
        assert_eq!(
            render(&ready(Some("abc123.mp4")), &config()),
            vec![
                "Done".to_string(),
                "Download: http://127.0.0.1:8000/download/abc123.mp4".to_string(),
            ]
        );
    }

    #[test]
    fn message_alone_when_no_artifact() {
        assert_eq!(render(&ready(None), &config()), vec!["Done".to_string()]);
    }

    #[test]
    fn error_is_marked_as_such() {
        let view = FormViewModel {
            result: ResultView::Error {
                message: "boom".to_string(),
            },
            ..FormViewModel::default()
        };
        assert_eq!(render(&view, &config()), vec!["Error: boom".to_string()]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let view = ready(Some("out1.mp4"));
        assert_eq!(render(&view, &config()), render(&view, &config()));
    }
}
