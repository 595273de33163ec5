use clip_client::ClipInfo;
use clip_core::PageView;

/// Render the page view as terminal lines. The caller prints the result
/// whenever the state reports a change.
pub fn render(view: &PageView) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(form) = &view.form {
        if form.loading_visible {
            lines.push("Submitting clip request...".to_string());
        }
    }

    if let Some(alert) = &view.alert {
        lines.push(format!("Error: {alert}"));
    }

    if let Some(watch) = &view.watch {
        match &watch.status_text {
            Some(status) => lines.push(format!("Clip {}: {}", watch.clip_id, status)),
            None => lines.push(format!("Clip {}: waiting for status...", watch.clip_id)),
        }
        if watch.ready_visible {
            lines.push("Your clip is ready.".to_string());
        }
        if watch.error_visible {
            let message = watch.error_message.as_deref().unwrap_or("unknown error");
            lines.push(format!("Clip generation failed: {message}"));
        }
    }

    lines
}

/// Header lines for a watched clip record.
pub fn render_info(info: &ClipInfo) -> Vec<String> {
    let mut lines = Vec::new();

    let title = info.title.as_deref().unwrap_or("(untitled)");
    match info.channel.as_deref() {
        Some(channel) => lines.push(format!("{title} ({channel})")),
        None => lines.push(title.to_string()),
    }
    if let Some(duration) = info.duration {
        lines.push(format!("Source duration: {duration}s"));
    }
    if let Some(download_url) = info.download_url.as_deref() {
        lines.push(format!("Download: {download_url}"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use clip_core::{FormView, WatchView};

    fn watch_view() -> WatchView {
        WatchView {
            clip_id: "2b7e1f3a".to_string(),
            status_text: Some("processing".to_string()),
            ready_visible: false,
            error_visible: false,
            error_message: None,
        }
    }

    #[test]
    fn empty_page_renders_nothing() {
        assert!(render(&PageView::default()).is_empty());
    }

    #[test]
    fn loading_form_renders_indicator() {
        let view = PageView {
            form: Some(FormView {
                loading_visible: true,
                submit_enabled: false,
            }),
            ..PageView::default()
        };
        assert_eq!(render(&view), vec!["Submitting clip request...".to_string()]);
    }

    #[test]
    fn watch_status_renders_verbatim() {
        let view = PageView {
            watch: Some(watch_view()),
            ..PageView::default()
        };
        assert_eq!(render(&view), vec!["Clip 2b7e1f3a: processing".to_string()]);
    }

    #[test]
    fn failed_watch_renders_error_message() {
        let mut watch = watch_view();
        watch.status_text = Some("error".to_string());
        watch.error_visible = true;
        watch.error_message = Some("Invalid URL".to_string());
        let view = PageView {
            watch: Some(watch),
            ..PageView::default()
        };
        assert_eq!(
            render(&view),
            vec![
                "Clip 2b7e1f3a: error".to_string(),
                "Clip generation failed: Invalid URL".to_string(),
            ]
        );
    }

    #[test]
    fn info_header_lists_download_when_present() {
        let info = ClipInfo {
            id: "2b7e1f3a".to_string(),
            youtube_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            title: Some("Never Gonna Give You Up".to_string()),
            channel: Some("Rick Astley".to_string()),
            duration: Some(213.0),
            mode: "short".to_string(),
            status: "completed".to_string(),
            transitions: Some(true),
            download_url: Some("/api/clips/2b7e1f3a/download".to_string()),
            error: None,
        };
        assert_eq!(
            render_info(&info),
            vec![
                "Never Gonna Give You Up (Rick Astley)".to_string(),
                "Source duration: 213s".to_string(),
                "Download: /api/clips/2b7e1f3a/download".to_string(),
            ]
        );
    }
}
